use std::sync::{Mutex, PoisonError};

use chrono::Utc;

use partsorders_core::{DomainResult, Entity, OrderNumber, PartId};
use partsorders_inventory::{NewPart, Part, PartCatalog};
use partsorders_orders::{Order, OrderLedger, OrderRequest};

use crate::config::ApiConfig;

/// Catalog and ledger kept together: placing an order touches both.
#[derive(Debug)]
struct Inventory {
    catalog: PartCatalog,
    ledger: OrderLedger,
}

/// Shared application state handed to every handler.
///
/// One mutex guards catalog and ledger together, and each operation (a whole
/// order placement included) runs inside a single critical section.
#[derive(Debug)]
pub struct AppServices {
    inventory: Mutex<Inventory>,
}

impl AppServices {
    pub fn new(catalog: PartCatalog) -> Self {
        Self {
            inventory: Mutex::new(Inventory {
                catalog,
                ledger: OrderLedger::new(),
            }),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        if config.seed_catalog {
            Self::new(PartCatalog::seeded())
        } else {
            Self::new(PartCatalog::new())
        }
    }

    pub fn list_parts(&self) -> Vec<Part> {
        self.with_inventory(|inv| inv.catalog.list_parts().to_vec())
    }

    pub fn get_part(&self, id: PartId) -> Option<Part> {
        self.with_inventory(|inv| inv.catalog.get_part_by_id(id).cloned())
    }

    pub fn add_part(&self, new_part: NewPart) -> Part {
        let part = self.with_inventory(|inv| inv.catalog.add_part(new_part));
        tracing::info!(part_id = %part.id(), description = part.description(), "part added");
        part
    }

    pub fn place_order(&self, requests: &[OrderRequest]) -> DomainResult<Order> {
        let result = self.with_inventory(|inv| {
            inv.ledger
                .place_order(&mut inv.catalog, requests, Utc::now())
        });

        match &result {
            Ok(order) => tracing::info!(
                order_number = %order.order_number(),
                lines = order.line_items().len(),
                total_cost = %order.total_cost(),
                "order placed"
            ),
            Err(e) => tracing::warn!(lines = requests.len(), "order rejected: {e}"),
        }

        result
    }

    pub fn list_orders(&self) -> Vec<Order> {
        self.with_inventory(|inv| inv.ledger.get_all_orders().to_vec())
    }

    pub fn get_order(&self, order_number: OrderNumber) -> Option<Order> {
        self.with_inventory(|inv| inv.ledger.get_order(order_number).cloned())
    }

    // Every mutation finishes or returns an error before it could panic, so a
    // poisoned lock still guards consistent state.
    fn with_inventory<T>(&self, f: impl FnOnce(&mut Inventory) -> T) -> T {
        let mut guard = self
            .inventory
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::from_config(&ApiConfig::default())
    }
}
