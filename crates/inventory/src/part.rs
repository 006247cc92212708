use partsorders_core::{Entity, Money, PartId};

/// A stocked part: description, unit price and quantity on hand.
///
/// Only the catalog can change `quantity`; everything handed out to callers is
/// a clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    id: PartId,
    description: String,
    price: Money,
    quantity: u32,
}

impl Part {
    pub(crate) fn new(id: PartId, new_part: NewPart) -> Self {
        Self {
            id,
            description: new_part.description,
            price: new_part.price,
            quantity: new_part.quantity,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub(crate) fn take(&mut self, quantity: u32) -> bool {
        match self.quantity.checked_sub(quantity) {
            Some(remaining) => {
                self.quantity = remaining;
                true
            }
            None => false,
        }
    }
}

impl Entity for Part {
    type Id = PartId;

    fn id(&self) -> PartId {
        self.id
    }
}

/// Input for `PartCatalog::add_part`: a part without an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPart {
    pub description: String,
    pub price: Money,
    pub quantity: u32,
}

impl NewPart {
    pub fn new(description: impl Into<String>, price: Money, quantity: u32) -> Self {
        Self {
            description: description.into(),
            price,
            quantity,
        }
    }
}
