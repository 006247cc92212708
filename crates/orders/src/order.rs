use chrono::{DateTime, Utc};

use partsorders_core::{DomainError, DomainResult, Entity, Money, OrderNumber, PartId, ValueObject};
use partsorders_inventory::Part;

/// One requested line of an order: which part and how many.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub part_id: PartId,
    pub quantity: u32,
}

impl OrderRequest {
    pub fn new(part_id: PartId, quantity: u32) -> Self {
        Self { part_id, quantity }
    }
}

/// Snapshot of a part at the moment it was ordered.
///
/// Later stock or catalog changes never alter a recorded line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineItem {
    part_id: PartId,
    part_description: String,
    price: Money,
    quantity: u32,
    total: Money,
}

impl OrderLineItem {
    /// Fails with `AmountOutOfRange` when price × quantity does not fit.
    pub(crate) fn snapshot(part: &Part, quantity: u32) -> DomainResult<Self> {
        let total = part
            .price()
            .checked_times(quantity)
            .ok_or_else(DomainError::amount_out_of_range)?;

        Ok(Self {
            part_id: part.id(),
            part_description: part.description().to_string(),
            price: part.price(),
            quantity,
            total,
        })
    }

    pub fn part_id(&self) -> PartId {
        self.part_id
    }

    pub fn part_description(&self) -> &str {
        &self.part_description
    }

    /// Unit price captured at placement.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price × quantity.
    pub fn total(&self) -> Money {
        self.total
    }
}

impl ValueObject for OrderLineItem {}

/// A placed order. Created once by the ledger, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    order_number: OrderNumber,
    line_items: Vec<OrderLineItem>,
    total_cost: Money,
    placed_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn new(
        order_number: OrderNumber,
        line_items: Vec<OrderLineItem>,
        placed_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let total_cost = Money::checked_sum(line_items.iter().map(OrderLineItem::total))
            .ok_or_else(DomainError::amount_out_of_range)?;

        Ok(Self {
            order_number,
            line_items,
            total_cost,
            placed_at,
        })
    }

    pub fn order_number(&self) -> OrderNumber {
        self.order_number
    }

    /// Lines in the order they were requested.
    pub fn line_items(&self) -> &[OrderLineItem] {
        &self.line_items
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Sum of all line totals.
    pub fn total_cost(&self) -> Money {
        self.total_cost
    }
}

impl Entity for Order {
    type Id = OrderNumber;

    fn id(&self) -> OrderNumber {
        self.order_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partsorders_inventory::{NewPart, PartCatalog};
    use rust_decimal_macros::dec;

    #[test]
    fn line_total_is_price_times_quantity() {
        let catalog = PartCatalog::seeded();
        let wire = catalog.get_part_by_id(PartId::new(1)).unwrap();

        let line = OrderLineItem::snapshot(wire, 2).unwrap();

        assert_eq!(line.part_id(), PartId::new(1));
        assert_eq!(line.part_description(), "Wire");
        assert_eq!(line.price().amount(), dec!(5.99));
        assert_eq!(line.total().amount(), dec!(11.98));
    }

    #[test]
    fn snapshot_is_detached_from_catalog() {
        let mut catalog = PartCatalog::seeded();
        let line = OrderLineItem::snapshot(catalog.get_part_by_id(PartId::new(3)).unwrap(), 4).unwrap();

        catalog.withdraw(PartId::new(3), 12).unwrap();
        catalog.add_part(NewPart::new("Engine Oil", Money::from_cents(9900), 1));

        assert_eq!(line.quantity(), 4);
        assert_eq!(line.total().amount(), dec!(60.00));
    }

    #[test]
    fn empty_order_costs_nothing() {
        let order = Order::new(OrderNumber::new(1), Vec::new(), Utc::now()).unwrap();
        assert!(order.total_cost().is_zero());
        assert_eq!(order.id(), OrderNumber::new(1));
    }

    #[test]
    fn oversized_line_total_is_rejected() {
        let mut catalog = PartCatalog::new();
        let huge = catalog.add_part(NewPart::new(
            "Ingot",
            Money::new(dec!(50000000000000000000000000000)).unwrap(),
            10,
        ));

        assert!(OrderLineItem::snapshot(&huge, 1).is_ok());
        assert_eq!(
            OrderLineItem::snapshot(&huge, 2).unwrap_err(),
            DomainError::AmountOutOfRange
        );
    }

    #[test]
    fn oversized_order_total_is_rejected() {
        let mut catalog = PartCatalog::new();
        let huge = catalog.add_part(NewPart::new(
            "Ingot",
            Money::new(dec!(50000000000000000000000000000)).unwrap(),
            10,
        ));
        let lines = vec![
            OrderLineItem::snapshot(&huge, 1).unwrap(),
            OrderLineItem::snapshot(&huge, 1).unwrap(),
        ];

        let err = Order::new(OrderNumber::new(1), lines, Utc::now()).unwrap_err();
        assert_eq!(err, DomainError::AmountOutOfRange);
    }
}
