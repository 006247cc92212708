use partsorders_core::{DomainError, DomainResult, Entity, Money, PartId};

use crate::part::{NewPart, Part};

/// The live set of parts, in insertion order.
///
/// All stock changes go through [`PartCatalog::withdraw`]; lookups hand out
/// shared references that cannot outlive the borrow of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartCatalog {
    parts: Vec<Part>,
}

impl PartCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// The catalog the service starts with: Wire, Brake Fluid and Engine Oil.
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        catalog.add_part(NewPart::new("Wire", Money::from_cents(599), 5));
        catalog.add_part(NewPart::new("Brake Fluid", Money::from_cents(490), 20));
        catalog.add_part(NewPart::new("Engine Oil", Money::from_cents(1500), 12));
        catalog
    }

    pub fn list_parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Store a new part under `max(existing id) + 1` (1 for an empty catalog).
    ///
    /// Description, price and quantity are stored as given; callers validate.
    pub fn add_part(&mut self, new_part: NewPart) -> Part {
        let id = self.next_id();
        let part = Part::new(id, new_part);
        self.parts.push(part.clone());
        part
    }

    pub fn get_part_by_id(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().find(|p| p.id() == id)
    }

    /// Whether the part exists and has at least `quantity` on hand.
    pub fn can_supply(&self, id: PartId, quantity: u32) -> bool {
        self.get_part_by_id(id)
            .is_some_and(|p| p.quantity() >= quantity)
    }

    /// Remove `quantity` units of a part from stock.
    ///
    /// Stock never goes below zero: a missing part or a short stock level is
    /// refused with `InsufficientInventory` and nothing changes.
    pub fn withdraw(&mut self, id: PartId, quantity: u32) -> DomainResult<()> {
        let part = self
            .parts
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(DomainError::insufficient_inventory)?;

        if part.take(quantity) {
            Ok(())
        } else {
            Err(DomainError::insufficient_inventory())
        }
    }

    fn next_id(&self) -> PartId {
        self.parts
            .iter()
            .map(Entity::id)
            .max()
            .map_or(PartId::new(1), PartId::next)
    }
}

impl Default for PartCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}
