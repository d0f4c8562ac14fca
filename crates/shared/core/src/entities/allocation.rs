use serde::{Deserialize, Serialize};

use crate::values::{Price, Quantity, Weight};

/// A resource the optimizer may pick: one unit costs `unit_price` and weighs `weight`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub name: String,
    pub unit_price: Price,
    pub weight: Weight,
}

impl Offer {
    pub fn new(name: impl Into<String>, unit_price: Price, weight: Weight) -> Self {
        Self {
            name: name.into(),
            unit_price,
            weight,
        }
    }
}

/// Units of one offer chosen by the optimizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub name: String,
    pub quantity: Quantity,
}
