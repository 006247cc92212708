use std::collections::HashMap;

use chrono::{DateTime, Utc};

use partsorders_core::{DomainError, DomainResult, OrderNumber, PartId};
use partsorders_inventory::PartCatalog;

use crate::order::{Order, OrderLineItem, OrderRequest};

/// Append-only order history plus the placement rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLedger {
    orders: Vec<Order>,
    next_order_number: OrderNumber,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            next_order_number: OrderNumber::new(1),
        }
    }

    /// Place an order against `catalog`.
    ///
    /// The order number is taken before any line is checked, so a rejected
    /// order still uses up its number. Placement is all-or-nothing: every line
    /// is validated and priced before any stock is withdrawn, and a failure
    /// leaves the catalog and the history untouched.
    pub fn place_order(
        &mut self,
        catalog: &mut PartCatalog,
        requests: &[OrderRequest],
        placed_at: DateTime<Utc>,
    ) -> DomainResult<Order> {
        let order_number = self.allocate_order_number();

        check_availability(catalog, requests)?;

        // Totals are priced before any stock moves.
        let line_items = requests
            .iter()
            .map(|request| {
                let part = catalog
                    .get_part_by_id(request.part_id)
                    .ok_or_else(DomainError::insufficient_inventory)?;
                OrderLineItem::snapshot(part, request.quantity)
            })
            .collect::<DomainResult<Vec<_>>>()?;
        let order = Order::new(order_number, line_items, placed_at)?;

        for request in requests {
            catalog.withdraw(request.part_id, request.quantity)?;
        }

        self.orders.push(order.clone());
        Ok(order)
    }

    /// Every placed order, oldest first.
    pub fn get_all_orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get_order(&self, order_number: OrderNumber) -> Option<&Order> {
        self.orders
            .iter()
            .find(|o| o.order_number() == order_number)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn allocate_order_number(&mut self) -> OrderNumber {
        let number = self.next_order_number;
        self.next_order_number = number.next();
        number
    }
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Check every line in request order against running per-part demand, so a
/// part requested on several lines must cover their sum.
fn check_availability(catalog: &PartCatalog, requests: &[OrderRequest]) -> DomainResult<()> {
    let mut demand: HashMap<PartId, u32> = HashMap::new();

    for request in requests {
        let wanted = demand.entry(request.part_id).or_insert(0);
        *wanted = wanted
            .checked_add(request.quantity)
            .ok_or_else(DomainError::insufficient_inventory)?;

        if !catalog.can_supply(request.part_id, *wanted) {
            return Err(DomainError::insufficient_inventory());
        }
    }

    Ok(())
}
