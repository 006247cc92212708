//! Inventory domain module: the part catalog.
//!
//! This crate owns the live set of parts and their stock levels, implemented
//! as deterministic in-memory logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod part;

pub use catalog::PartCatalog;
pub use part::{NewPart, Part};
