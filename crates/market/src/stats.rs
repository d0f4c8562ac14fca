//! Market-wide statistics

use keyo_core::{Price, Resource, SortKey};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Leaderboard row ordered by price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub name: String,
    pub price: Price,
}

/// Leaderboard row ordered by demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandEntry {
    pub name: String,
    pub demand: u32,
}

/// Snapshot of averages and leaders across the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStatistics {
    pub average_price: Decimal,
    pub average_demand: Decimal,
    pub average_supply: Decimal,
    pub turn: u64,
    pub most_valuable: Vec<PriceEntry>,
    pub highest_demand: Vec<DemandEntry>,
}

impl MarketStatistics {
    /// Compute statistics over canonical (not regional) resource state
    pub fn compute<'a>(
        resources: impl IntoIterator<Item = &'a Resource>,
        turn: u64,
        leaderboard_size: usize,
    ) -> Self {
        let mut all: Vec<Resource> = resources.into_iter().cloned().collect();

        let (average_price, average_demand, average_supply) = if all.is_empty() {
            (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
        } else {
            let count = Decimal::from(all.len());
            let price: Decimal = all.iter().map(|r| r.price).sum();
            let demand: Decimal = all.iter().map(|r| Decimal::from(r.demand)).sum();
            let supply: Decimal = all.iter().map(|r| Decimal::from(r.supply)).sum();
            (
                (price / count).round_dp(2),
                (demand / count).round_dp(2),
                (supply / count).round_dp(2),
            )
        };

        SortKey::Price.sort_resources(&mut all);
        let most_valuable = all
            .iter()
            .take(leaderboard_size)
            .map(|r| PriceEntry {
                name: r.name.clone(),
                price: r.price.round_dp(2),
            })
            .collect();

        SortKey::Demand.sort_resources(&mut all);
        let highest_demand = all
            .iter()
            .take(leaderboard_size)
            .map(|r| DemandEntry {
                name: r.name.clone(),
                demand: r.demand,
            })
            .collect();

        Self {
            average_price,
            average_demand,
            average_supply,
            turn,
            most_valuable,
            highest_demand,
        }
    }
}
