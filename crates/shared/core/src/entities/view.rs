use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::Resource;
use crate::routes::LocationId;
use crate::values::{Price, Weight};

/// Immutable snapshot of a resource as seen from a query
///
/// Views are built by value from the canonical resource, so changing a view
/// (or building one with regional overrides) never touches the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceView {
    pub name: String,
    pub price: Price,
    pub base_price: Price,
    pub demand: u32,
    pub supply: u32,
    pub stock: u32,
    pub weight: Weight,
    pub rarity: u8,
    /// Home location of the resource
    pub location: LocationId,
    /// (price - base) / base * 100, one decimal
    pub percent_change_from_base: Decimal,
}

impl ResourceView {
    /// Snapshot using the resource's own price and stock
    pub fn of(resource: &Resource) -> Self {
        Self::with_quote(resource, resource.price, resource.stock)
    }

    /// Snapshot with price and stock overridden (regional or averaged values)
    pub fn with_quote(resource: &Resource, price: Price, stock: u32) -> Self {
        Self {
            name: resource.name.clone(),
            price,
            base_price: resource.base_price,
            demand: resource.demand,
            supply: resource.supply,
            stock,
            weight: resource.weight,
            rarity: resource.rarity,
            location: resource.home.clone(),
            percent_change_from_base: percent_change(price, resource.base_price),
        }
    }
}

fn percent_change(price: Price, base: Price) -> Decimal {
    if base.is_zero() {
        return Decimal::ZERO;
    }
    ((price - base) / base * dec!(100)).round_dp(1)
}
