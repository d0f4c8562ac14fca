use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::values::{Price, Quantity, Weight};

/// The single trader of a session: cash, cargo hold and weight limit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique player identifier
    pub id: Uuid,

    pub name: String,

    /// Cash on hand, never negative after a transaction
    pub money: Price,

    /// Owned units per resource name; entries disappear at zero
    pub inventory: IndexMap<String, Quantity>,

    /// Fixed weight limit for the session
    pub capacity_max: Weight,

    /// Sum of quantity * unit weight over the inventory
    pub capacity_used: Weight,

    /// When the player was created
    pub created_at: DateTime<Utc>,

    /// Last update time
    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// Create a player with an empty hold
    pub fn new(name: impl Into<String>, money: Price, capacity_max: Weight) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            money,
            inventory: IndexMap::new(),
            capacity_max,
            capacity_used: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Remaining carryable weight
    pub fn free_capacity(&self) -> Weight {
        self.capacity_max - self.capacity_used
    }

    /// Units currently held of `resource`
    pub fn holding(&self, resource: &str) -> Quantity {
        self.inventory.get(resource).copied().unwrap_or(0)
    }

    pub fn can_afford(&self, cost: Price) -> bool {
        self.money >= cost
    }

    /// Whether `weight` more fits without exceeding the limit
    pub fn has_room_for(&self, weight: Weight) -> bool {
        self.capacity_used + weight <= self.capacity_max
    }

    /// Pay for and stow a purchase. Callers check affordability and room first.
    pub fn stow(&mut self, resource: &str, quantity: Quantity, cost: Price, weight: Weight) {
        self.money -= cost;
        self.capacity_used += weight;
        *self.inventory.entry(resource.to_string()).or_insert(0) += quantity;
        self.updated_at = Utc::now();
    }

    /// Remove sold units and bank the proceeds
    ///
    /// Returns `false` without changing anything when fewer than `quantity`
    /// units are held.
    pub fn unload(
        &mut self,
        resource: &str,
        quantity: Quantity,
        proceeds: Price,
        weight: Weight,
    ) -> bool {
        let held = self.holding(resource);
        if held < quantity || !self.inventory.contains_key(resource) {
            return false;
        }

        self.money += proceeds;
        self.capacity_used -= weight;
        if held == quantity {
            self.inventory.shift_remove(resource);
        } else {
            self.inventory.insert(resource.to_string(), held - quantity);
        }
        self.updated_at = Utc::now();
        true
    }
}
