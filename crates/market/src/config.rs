//! Market randomization parameters

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Parameters for catalog seeding and turn-by-turn drift
///
/// Ranges are inclusive `(low, high)` pairs.
#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// Initial demand and supply levels
    pub initial_level_range: (u32, u32),
    /// Maximum absolute change of demand/supply per turn
    pub level_drift: i64,
    /// Multiplicative noise applied on every price update
    pub jitter_range: (Decimal, Decimal),
    /// Home price as a fraction of base
    pub home_discount_range: (Decimal, Decimal),
    /// Stock at the home location
    pub home_stock_range: (u32, u32),
    /// Away price multiplier starts at `away_markup_base + rarity * away_markup_per_rarity`
    pub away_markup_base: Decimal,
    pub away_markup_per_rarity: Decimal,
    /// Width of the away multiplier range
    pub away_markup_spread: Decimal,
    /// Stock away from home
    pub away_stock_range: (u32, u32),
    /// Price multiplier for a location with no regional entry
    pub fallback_price_multiplier: Decimal,
    /// Stock reported for a location with no regional entry
    pub fallback_stock: u32,
    /// Number of entries in the statistics leaderboards
    pub leaderboard_size: usize,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            initial_level_range: (30, 70),
            level_drift: 15,
            jitter_range: (dec!(0.9), dec!(1.1)),
            home_discount_range: (dec!(0.7), dec!(0.9)),
            home_stock_range: (150, 250),
            away_markup_base: dec!(1.2),
            away_markup_per_rarity: dec!(0.15),
            away_markup_spread: dec!(0.3),
            away_stock_range: (20, 80),
            fallback_price_multiplier: dec!(1.5),
            fallback_stock: 100,
            leaderboard_size: 5,
        }
    }
}

impl MarketConfig {
    /// Lower bound of the away price multiplier for a rarity tier
    pub fn away_markup(&self, rarity: u8) -> Decimal {
        self.away_markup_base + self.away_markup_per_rarity * Decimal::from(rarity)
    }

    /// Inclusive away price multiplier range for a rarity tier
    pub fn away_markup_range(&self, rarity: u8) -> (Decimal, Decimal) {
        let low = self.away_markup(rarity);
        (low, low + self.away_markup_spread)
    }
}
