use rust_decimal::Decimal;
use serde::Deserialize;

use partsorders_core::{DomainError, DomainResult, Entity, Money, PartId};
use partsorders_inventory::{NewPart, Part};
use partsorders_orders::{Order, OrderLineItem, OrderRequest};

pub const INVALID_PART_DETAILS: &str = "Invalid part details.";

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /parts`. Fields are optional so a missing one is reported as
/// a 400 with the same message as any other invalid value.
///
/// `price` is read from the raw JSON number text, so every digit the client
/// sent is kept.
#[derive(Debug, Deserialize)]
pub struct AddPartRequest {
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub price: Option<Decimal>,
    pub quantity: Option<i64>,
}

impl AddPartRequest {
    /// Description must be non-blank, price positive, quantity zero or more.
    pub fn validate(self) -> DomainResult<NewPart> {
        let invalid = || DomainError::validation(INVALID_PART_DETAILS);

        let description = self
            .description
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(invalid)?;
        let price = self
            .price
            .filter(|p| *p > Decimal::ZERO)
            .ok_or_else(invalid)
            .and_then(|p| Money::new(p).map_err(|_| invalid()))?;
        let quantity = self
            .quantity
            .and_then(|q| u32::try_from(q).ok())
            .ok_or_else(invalid)?;

        Ok(NewPart::new(description, price, quantity))
    }
}

/// One element of the `POST /orders` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    #[serde(alias = "part_id")]
    pub part_id: i64,
    pub quantity: i64,
}

impl OrderLineRequest {
    /// Quantity must be at least 1. An id that cannot name any part maps to
    /// `InsufficientInventory`, the same answer as an unknown id.
    pub fn validate(&self) -> DomainResult<OrderRequest> {
        let quantity = u32::try_from(self.quantity)
            .ok()
            .filter(|q| *q >= 1)
            .ok_or_else(|| DomainError::validation("quantity must be at least 1"))?;
        let part_id = u32::try_from(self.part_id)
            .map_err(|_| DomainError::insufficient_inventory())?;

        Ok(OrderRequest::new(PartId::new(part_id), quantity))
    }
}

pub fn validate_order_lines(lines: &[OrderLineRequest]) -> DomainResult<Vec<OrderRequest>> {
    lines.iter().map(OrderLineRequest::validate).collect()
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn part_to_json(part: &Part) -> serde_json::Value {
    serde_json::json!({
        "id": part.id(),
        "description": part.description(),
        "price": part.price(),
        "quantity": part.quantity(),
    })
}

pub fn line_item_to_json(line: &OrderLineItem) -> serde_json::Value {
    serde_json::json!({
        "partId": line.part_id(),
        "partDescription": line.part_description(),
        "price": line.price(),
        "quantity": line.quantity(),
        "total": line.total(),
    })
}

pub fn order_to_json(order: &Order) -> serde_json::Value {
    serde_json::json!({
        "orderNumber": order.order_number(),
        "lineItems": order.line_items().iter().map(line_item_to_json).collect::<Vec<_>>(),
        "totalCost": order.total_cost(),
        "placedAt": order.placed_at().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn add_part(description: Option<&str>, price: Option<Decimal>, quantity: Option<i64>) -> AddPartRequest {
        AddPartRequest {
            description: description.map(str::to_string),
            price,
            quantity,
        }
    }

    #[test]
    fn valid_part_request_passes() {
        let new_part = add_part(Some("New Part"), Some(dec!(10.99)), Some(10))
            .validate()
            .unwrap();

        assert_eq!(new_part.description, "New Part");
        assert_eq!(new_part.price.amount(), dec!(10.99));
        assert_eq!(new_part.quantity, 10);
    }

    #[test]
    fn invalid_part_requests_are_rejected() {
        let cases = [
            add_part(None, Some(dec!(1)), Some(1)),
            add_part(Some("   "), Some(dec!(1)), Some(1)),
            add_part(Some("Bolt"), Some(dec!(0)), Some(1)),
            add_part(Some("Bolt"), Some(dec!(-2.5)), Some(1)),
            add_part(Some("Bolt"), None, Some(1)),
            add_part(Some("Bolt"), Some(dec!(1)), Some(-1)),
            add_part(Some("Bolt"), Some(dec!(1)), None),
        ];

        for case in cases {
            let err = case.validate().unwrap_err();
            assert_eq!(err, DomainError::validation(INVALID_PART_DETAILS));
        }
    }

    #[test]
    fn zero_quantity_part_is_allowed() {
        let new_part = add_part(Some("Gasket"), Some(dec!(3)), Some(0))
            .validate()
            .unwrap();
        assert_eq!(new_part.quantity, 0);
    }

    #[test]
    fn order_line_accepts_camel_and_snake_case() {
        let camel: OrderLineRequest = serde_json::from_str(r#"{"partId":1,"quantity":3}"#).unwrap();
        let snake: OrderLineRequest = serde_json::from_str(r#"{"part_id":1,"quantity":3}"#).unwrap();

        assert_eq!(camel.validate().unwrap(), OrderRequest::new(PartId::new(1), 3));
        assert_eq!(snake.validate().unwrap(), OrderRequest::new(PartId::new(1), 3));
    }

    #[test]
    fn order_line_quantity_must_be_positive() {
        for quantity in [0, -1] {
            let line = OrderLineRequest { part_id: 1, quantity };
            assert!(matches!(line.validate(), Err(DomainError::Validation(_))));
        }
    }

    #[test]
    fn negative_part_id_is_unavailable() {
        let line = OrderLineRequest { part_id: -3, quantity: 1 };
        assert_eq!(line.validate().unwrap_err(), DomainError::InsufficientInventory);
    }

    #[test]
    fn part_json_shape() {
        let catalog = partsorders_inventory::PartCatalog::seeded();
        let wire = catalog.get_part_by_id(PartId::new(1)).unwrap();

        let json = part_to_json(wire);
        assert_eq!(json["id"], 1);
        assert_eq!(json["description"], "Wire");
        assert_eq!(json["price"].as_f64().unwrap(), 5.99);
        assert_eq!(json["quantity"], 5);
    }

    #[test]
    fn order_json_shape() {
        let mut catalog = partsorders_inventory::PartCatalog::seeded();
        let mut ledger = partsorders_orders::OrderLedger::new();
        let order = ledger
            .place_order(
                &mut catalog,
                &[OrderRequest::new(PartId::new(1), 2), OrderRequest::new(PartId::new(2), 1)],
                chrono::Utc::now(),
            )
            .unwrap();

        let json = order_to_json(&order);
        assert_eq!(json["orderNumber"], 1);
        assert_eq!(json["totalCost"].to_string(), "16.88");
        assert_eq!(json["lineItems"][0]["partId"], 1);
        assert_eq!(json["lineItems"][0]["partDescription"], "Wire");
        assert_eq!(json["lineItems"][0]["total"].to_string(), "11.98");
        assert_eq!(json["lineItems"][1]["total"].to_string(), "4.90");
        assert!(json["placedAt"].is_string());
        assert!(json.get("order_number").is_none());
    }

    #[test]
    fn part_request_price_keeps_every_digit() {
        let body = r#"{"description":"Gauge","price":1234567890123.4567,"quantity":1}"#;
        let request: AddPartRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.price, Some(dec!(1234567890123.4567)));

        let missing: AddPartRequest = serde_json::from_str(r#"{"description":"Gauge","quantity":1}"#).unwrap();
        assert_eq!(missing.price, None);
    }
}
