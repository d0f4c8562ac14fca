use indexmap::IndexMap;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::routes::LocationId;
use crate::values::{Price, Quantity, Weight};

/// Lowest value demand and supply may take
pub const LEVEL_MIN: u32 = 10;

/// Highest value demand and supply may take
pub const LEVEL_MAX: u32 = 100;

/// Current price never drops below this fraction of the base price
pub const PRICE_FLOOR_RATIO: Decimal = dec!(0.3);

/// Current price never rises above this multiple of the base price
pub const PRICE_CEILING_RATIO: Decimal = dec!(3.0);

/// A tradeable good with its base economics and regional price/stock tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique name (catalog key)
    pub name: String,

    /// Reference price the update rule scales from
    pub base_price: Price,

    /// Current computed price; only changed through `reprice`
    pub price: Price,

    /// Rarity tier, 1 (common) to 5 (rare)
    pub rarity: u8,

    /// Weight of a single unit
    pub weight: Weight,

    /// Demand level in [LEVEL_MIN, LEVEL_MAX]
    pub demand: u32,

    /// Supply level in [LEVEL_MIN, LEVEL_MAX]
    pub supply: u32,

    /// Location where the resource originates (cheap and plentiful there)
    pub home: LocationId,

    /// Global stock
    pub stock: u32,

    /// Price per location
    pub regional_prices: IndexMap<LocationId, Price>,

    /// Stock per location
    pub regional_stock: IndexMap<LocationId, u32>,
}

impl Resource {
    /// Create a resource priced at its base with neutral demand/supply
    pub fn new(
        name: impl Into<String>,
        base_price: Price,
        rarity: u8,
        weight: Weight,
        home: impl Into<LocationId>,
    ) -> Self {
        Self {
            name: name.into(),
            base_price,
            price: base_price,
            rarity,
            weight,
            demand: 50,
            supply: 50,
            home: home.into(),
            stock: 100,
            regional_prices: IndexMap::new(),
            regional_stock: IndexMap::new(),
        }
    }

    /// Case-insensitive name match
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn price_floor(&self) -> Price {
        self.base_price * PRICE_FLOOR_RATIO
    }

    pub fn price_ceiling(&self) -> Price {
        self.base_price * PRICE_CEILING_RATIO
    }

    /// Recompute the current price from demand and supply
    ///
    /// price = round(base * demand / max(supply, 1) * jitter, 2), clamped to
    /// [0.3 * base, 3.0 * base]. Randomness is supplied by the caller through
    /// `jitter` so the rule itself stays deterministic.
    pub fn reprice(&mut self, jitter: Decimal) -> Price {
        let ratio = Decimal::from(self.demand) / Decimal::from(self.supply.max(1));
        let raw = (self.base_price * ratio * jitter).round_dp(2);
        self.price = raw.max(self.price_floor()).min(self.price_ceiling());
        self.price
    }

    /// Shift demand by `delta`, clamped to the level bounds
    pub fn nudge_demand(&mut self, delta: i64) {
        self.demand = clamp_level(i64::from(self.demand) + delta);
    }

    /// Shift supply by `delta`, clamped to the level bounds
    pub fn nudge_supply(&mut self, delta: i64) {
        self.supply = clamp_level(i64::from(self.supply) + delta);
    }

    /// Market feedback after the player buys `quantity` units
    ///
    /// Stock shrinks (never below zero), supply drops twice as fast as demand
    /// rises. The caller reprices afterwards.
    pub fn absorb_purchase(&mut self, quantity: Quantity) {
        self.stock = self.stock.saturating_sub(quantity);
        let quantity = i64::from(quantity);
        self.nudge_supply(-2 * quantity);
        self.nudge_demand(quantity);
    }

    /// Market feedback after the player sells `quantity` units
    ///
    /// Mirror image of `absorb_purchase` without touching stock or price.
    pub fn absorb_sale(&mut self, quantity: Quantity) {
        let quantity = i64::from(quantity);
        self.nudge_supply(2 * quantity);
        self.nudge_demand(-quantity);
    }

    /// Regional price and stock for `location`, if the location is registered
    pub fn regional_quote(&self, location: &LocationId) -> Option<(Price, u32)> {
        let price = self.regional_prices.get(location)?;
        let stock = self.regional_stock.get(location).copied().unwrap_or(0);
        Some((*price, stock))
    }

    /// Arithmetic mean of all regional prices
    pub fn average_regional_price(&self) -> Option<Price> {
        if self.regional_prices.is_empty() {
            return None;
        }
        let total: Decimal = self.regional_prices.values().sum();
        Some(total / Decimal::from(self.regional_prices.len()))
    }

    /// Mean of all regional stocks, truncated
    pub fn average_regional_stock(&self) -> Option<u32> {
        if self.regional_stock.is_empty() {
            return None;
        }
        let total: u64 = self.regional_stock.values().map(|s| u64::from(*s)).sum();
        Some((total / self.regional_stock.len() as u64) as u32)
    }

    /// Current price per unit of weight
    pub fn value_density(&self) -> Decimal {
        if self.weight.is_zero() {
            return Decimal::ZERO;
        }
        self.price / self.weight
    }

    /// Cost of `quantity` units at the current price
    pub fn cost_of(&self, quantity: Quantity) -> Price {
        self.price * Decimal::from(quantity)
    }

    /// Weight of `quantity` units
    pub fn weight_of(&self, quantity: Quantity) -> Weight {
        self.weight * Decimal::from(quantity)
    }
}

fn clamp_level(value: i64) -> u32 {
    value.clamp(i64::from(LEVEL_MIN), i64::from(LEVEL_MAX)) as u32
}
