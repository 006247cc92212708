//! Orders domain module: placement and order history.
//!
//! Placing an order consumes stock from the part catalog and records an
//! immutable snapshot of what was bought and at what price.

pub mod ledger;
pub mod order;

pub use ledger::OrderLedger;
pub use order::{Order, OrderLineItem, OrderRequest};
