use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Side;
use crate::values::{Price, Quantity, Weight};

/// Unique identifier for a completed trade
pub type TradeId = Uuid;

/// Record of a completed buy or sell between the player and the market
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeReceipt {
    pub id: TradeId,
    pub side: Side,
    /// Canonical resource name
    pub resource: String,
    pub quantity: Quantity,
    /// Unit price the trade executed at (before commission)
    pub unit_price: Price,
    /// Money moved: paid on a buy, received on a sell (after commission)
    pub amount: Price,
    /// Commission withheld on a sell, zero on a buy
    pub commission: Price,
    /// Weight added to (buy) or freed from (sell) the hold
    pub weight: Weight,
    pub timestamp: DateTime<Utc>,
}

impl TradeReceipt {
    pub fn buy(resource: &str, quantity: Quantity, unit_price: Price, weight: Weight) -> Self {
        Self {
            id: Uuid::new_v4(),
            side: Side::Buy,
            resource: resource.to_string(),
            quantity,
            unit_price,
            amount: unit_price * Decimal::from(quantity),
            commission: Decimal::ZERO,
            weight,
            timestamp: Utc::now(),
        }
    }

    /// `commission_rate` is the fraction withheld, e.g. 0.10
    pub fn sell(
        resource: &str,
        quantity: Quantity,
        unit_price: Price,
        weight: Weight,
        commission_rate: Decimal,
    ) -> Self {
        let gross = unit_price * Decimal::from(quantity);
        let amount = gross * (Decimal::ONE - commission_rate);
        Self {
            id: Uuid::new_v4(),
            side: Side::Sell,
            resource: resource.to_string(),
            quantity,
            unit_price,
            amount,
            commission: gross - amount,
            weight,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sell_withholds_commission() {
        let receipt = TradeReceipt::sell("CPU Shards", 4, dec!(500), dec!(20), dec!(0.10));
        assert_eq!(receipt.side, Side::Sell);
        assert_eq!(receipt.amount, dec!(1800));
        assert_eq!(receipt.commission, dec!(200));
    }

    #[test]
    fn test_buy_has_no_commission() {
        let receipt = TradeReceipt::buy("CPU Shards", 4, dec!(500), dec!(20));
        assert_eq!(receipt.amount, dec!(2000));
        assert_eq!(receipt.commission, dec!(0));
        assert_eq!(receipt.side.opposite(), Side::Sell);
    }
}
