//! Plain records returned by the session's command surface

use indexmap::IndexMap;
use keyo_core::{LocationId, Price, Quantity, Weight};
use keyo_ports::ReasonCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a buy or sell, successful or not, with the player state after it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeOutcome {
    pub success: bool,
    /// Set only on failure
    pub reason: Option<ReasonCode>,
    pub message: String,
    pub money: Price,
    pub inventory: IndexMap<String, Quantity>,
    pub capacity_used: Weight,
    pub capacity_max: Weight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub turn: u64,
}

/// Player snapshot valued at current market prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub money: Price,
    pub inventory: IndexMap<String, Quantity>,
    pub capacity_max: Weight,
    pub capacity_used: Weight,
    /// Sum of held quantity * current price, 2 dp
    pub resource_value: Price,
    /// money + resource_value, 2 dp
    pub net_worth: Price,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub resource: String,
    pub quantity: Quantity,
    pub unit_price: Price,
    pub unit_weight: Weight,
    pub total_cost: Price,
    pub total_weight: Weight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub recommendations: Vec<Recommendation>,
    /// `NoCapacityAvailable` when the hold is already full
    pub reason: Option<ReasonCode>,
}

impl OptimizationReport {
    pub fn total_cost(&self) -> Price {
        self.recommendations.iter().map(|r| r.total_cost).sum()
    }

    pub fn total_weight(&self) -> Weight {
        self.recommendations.iter().map(|r| r.total_weight).sum()
    }
}

/// Travel risk, by distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Low below 200, Medium below 300, High otherwise
    pub fn from_distance(distance: Decimal) -> Self {
        if distance < Decimal::from(200) {
            RiskLevel::Low
        } else if distance < Decimal::from(300) {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// Held stock that would sell well at the destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleEstimate {
    pub resource: String,
    pub quantity: Quantity,
    /// Price after commission, 2 dp
    pub unit_price: Price,
    pub total: Price,
}

/// Cheapest route plus what the current hold would earn at the destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteReport {
    pub distance: Decimal,
    pub cost: Decimal,
    pub path: Vec<LocationId>,
    /// One minute per 10 distance units, rounded
    pub estimated_time: Decimal,
    pub risk: RiskLevel,
    pub gross_profit: Price,
    /// gross_profit - cost
    pub net_profit: Price,
    pub sales: Vec<SaleEstimate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_risk_thresholds() {
        assert_eq!(RiskLevel::from_distance(dec!(0)), RiskLevel::Low);
        assert_eq!(RiskLevel::from_distance(dec!(199.9)), RiskLevel::Low);
        assert_eq!(RiskLevel::from_distance(dec!(200)), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_distance(dec!(299)), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_distance(dec!(300)), RiskLevel::High);
    }

    #[test]
    fn test_reason_serializes_screaming_snake() {
        let report = OptimizationReport {
            recommendations: Vec::new(),
            reason: Some(ReasonCode::NoCapacityAvailable),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"NO_CAPACITY_AVAILABLE\""));
        assert_eq!(report.total_cost(), dec!(0));
    }
}
