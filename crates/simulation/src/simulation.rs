//! Simulation - one player's trading session
//!
//! Ties together:
//! - The regional market and its turn-by-turn drift
//! - The player's money and cargo hold
//! - The route network
//! - The inventory optimizer
//!
//! Every command takes `&mut self` or `&self` and hands back a plain record.

use chrono::{DateTime, Utc};
use keyo_core::{LocationId, Offer, Player, Quantity, ResourceView, Side, SortKey, TradeReceipt};
use keyo_market::{MarketEngine, MarketStatistics};
use keyo_optimizer::KnapsackOptimizer;
use keyo_ports::{
    InventoryOptimizer, ReasonCode, RoutePlanner, RouteResult, TradeError, TradeResult,
};
use keyo_routing::RouteGraph;
use log::{debug, info, warn};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use uuid::Uuid;

use crate::bootstrap::SimulationBootstrap;
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::reports::{
    OptimizationReport, PlayerState, Recommendation, RiskLevel, RouteReport, SaleEstimate,
    TradeOutcome, TurnReport,
};

/// Distance units covered per minute of travel
const DISTANCE_PER_MINUTE: Decimal = Decimal::TEN;

pub struct Simulation {
    session_id: Uuid,
    started_at: DateTime<Utc>,
    config: SimulationConfig,
    market: MarketEngine,
    graph: RouteGraph,
    player: Player,
    optimizer: Box<dyn InventoryOptimizer>,
    turn: u64,
}

impl Simulation {
    /// Start a session with the default world
    pub fn standard() -> Result<Self> {
        Self::with_config(SimulationConfig::default())
    }

    pub fn with_config(config: SimulationConfig) -> Result<Self> {
        let world = SimulationBootstrap::with_config(&config)?;
        let session_id = Uuid::new_v4();
        info!(
            "Session {} started for {} (seed: {:?})",
            session_id, world.player.name, config.seed
        );

        Ok(Self {
            session_id,
            started_at: Utc::now(),
            config,
            market: world.market,
            graph: world.graph,
            player: world.player,
            optimizer: Box::new(KnapsackOptimizer::new()),
            turn: 0,
        })
    }

    /// Replace the inventory optimizer
    pub fn with_optimizer(mut self, optimizer: Box<dyn InventoryOptimizer>) -> Self {
        self.optimizer = optimizer;
        self
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn market(&self) -> &MarketEngine {
        &self.market
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    // ========================================================================
    // Market queries
    // ========================================================================

    pub fn list_resources(&self, location: Option<&str>, sort: SortKey) -> Vec<ResourceView> {
        self.market.list_resources(location, sort)
    }

    pub fn market_statistics(&self) -> MarketStatistics {
        self.market.statistics(self.turn)
    }

    /// Drift the market one turn
    pub fn advance_turn(&mut self) -> TurnReport {
        self.market.advance_turn();
        self.turn += 1;
        info!("Turn {} complete", self.turn);
        TurnReport { turn: self.turn }
    }

    // ========================================================================
    // Trading
    // ========================================================================

    /// Buy `quantity` units at the current price
    ///
    /// Checks run in order: resource exists, quantity positive, money, then
    /// capacity. Nothing changes on failure.
    pub fn try_buy(&mut self, name: &str, quantity: Quantity) -> TradeResult<TradeReceipt> {
        let resource = self
            .market
            .resource(name)
            .ok_or_else(|| TradeError::ResourceNotFound(name.to_string()))?;
        if quantity == 0 {
            return Err(TradeError::InvalidQuantity);
        }

        let canonical = resource.name.clone();
        let unit_price = resource.price;
        let cost = resource.cost_of(quantity);
        let weight = resource.weight_of(quantity);

        if !self.player.can_afford(cost) {
            return Err(TradeError::InsufficientFunds {
                required: cost,
                available: self.player.money,
            });
        }
        if !self.player.has_room_for(weight) {
            return Err(TradeError::InsufficientCapacity {
                required: weight,
                available: self.player.free_capacity(),
            });
        }

        self.player.stow(&canonical, quantity, cost, weight);
        let new_price = self.market.record_purchase(&canonical, quantity);
        debug!("{} repriced to {:?} after purchase", canonical, new_price);

        let receipt = TradeReceipt::buy(&canonical, quantity, unit_price, weight);
        info!(
            "Bought {}x {} for {} ({} left)",
            quantity, canonical, receipt.amount, self.player.money
        );
        Ok(receipt)
    }

    /// Sell `quantity` held units at the current price minus commission
    ///
    /// The price itself is left alone until the next update.
    pub fn try_sell(&mut self, name: &str, quantity: Quantity) -> TradeResult<TradeReceipt> {
        let resource = self
            .market
            .resource(name)
            .ok_or_else(|| TradeError::ResourceNotFound(name.to_string()))?;
        if quantity == 0 {
            return Err(TradeError::InvalidQuantity);
        }

        let canonical = resource.name.clone();
        let held = self.player.holding(&canonical);
        let receipt = TradeReceipt::sell(
            &canonical,
            quantity,
            resource.price,
            resource.weight_of(quantity),
            self.config.sale_commission,
        );

        if !self
            .player
            .unload(&canonical, quantity, receipt.amount, receipt.weight)
        {
            return Err(TradeError::InsufficientInventory {
                resource: canonical,
                held,
                requested: quantity,
            });
        }
        self.market.record_sale(&canonical, quantity);

        info!(
            "Sold {}x {} for {} (commission {})",
            quantity, canonical, receipt.amount, receipt.commission
        );
        Ok(receipt)
    }

    pub fn buy(&mut self, name: &str, quantity: Quantity) -> TradeOutcome {
        let result = self.try_buy(name, quantity);
        self.outcome(result)
    }

    pub fn sell(&mut self, name: &str, quantity: Quantity) -> TradeOutcome {
        let result = self.try_sell(name, quantity);
        self.outcome(result)
    }

    fn outcome(&self, result: TradeResult<TradeReceipt>) -> TradeOutcome {
        let (success, reason, message) = match result {
            Ok(receipt) => {
                let verb = match receipt.side {
                    Side::Buy => "Bought",
                    Side::Sell => "Sold",
                };
                let message = format!(
                    "{} {}x {} for {}",
                    verb,
                    receipt.quantity,
                    receipt.resource,
                    receipt.amount.round_dp(2)
                );
                (true, None, message)
            }
            Err(err) => {
                warn!("Trade rejected: {}", err);
                (false, Some(err.code()), err.to_string())
            }
        };

        TradeOutcome {
            success,
            reason,
            message,
            money: self.player.money,
            inventory: self.player.inventory.clone(),
            capacity_used: self.player.capacity_used,
            capacity_max: self.player.capacity_max,
        }
    }

    // ========================================================================
    // Player
    // ========================================================================

    /// Player snapshot with holdings valued at current prices
    pub fn player_state(&self) -> PlayerState {
        let resource_value: Decimal = self
            .player
            .inventory
            .iter()
            .filter_map(|(name, quantity)| {
                self.market
                    .resource(name)
                    .map(|resource| resource.cost_of(*quantity))
            })
            .sum();

        PlayerState {
            name: self.player.name.clone(),
            money: self.player.money,
            inventory: self.player.inventory.clone(),
            capacity_max: self.player.capacity_max,
            capacity_used: self.player.capacity_used,
            resource_value: resource_value.round_dp(2),
            net_worth: (self.player.money + resource_value).round_dp(2),
        }
    }

    /// Best bundle to buy with the current money and free capacity
    pub fn optimize_inventory(&self) -> OptimizationReport {
        let free = (self.player.capacity_max - self.player.capacity_used).floor();
        if free <= Decimal::ZERO {
            warn!("No capacity available for optimization");
            return OptimizationReport {
                recommendations: Vec::new(),
                reason: Some(ReasonCode::NoCapacityAvailable),
            };
        }
        let capacity = free.to_u32().unwrap_or(u32::MAX);

        let offers: Vec<Offer> = self
            .market
            .resources()
            .map(|r| Offer::new(r.name.clone(), r.price, r.weight))
            .collect();
        let allocations = self
            .optimizer
            .recommend(&offers, self.player.money, capacity);

        let recommendations: Vec<Recommendation> = allocations
            .into_iter()
            .filter_map(|allocation| {
                let resource = self.market.resource(&allocation.name)?;
                Some(Recommendation {
                    resource: resource.name.clone(),
                    quantity: allocation.quantity,
                    unit_price: resource.price,
                    unit_weight: resource.weight,
                    total_cost: resource.cost_of(allocation.quantity).round_dp(2),
                    total_weight: resource.weight_of(allocation.quantity),
                })
            })
            .collect();

        if recommendations.is_empty() {
            warn!(
                "{} found nothing affordable ({} money, {} capacity)",
                self.optimizer.name(),
                self.player.money,
                capacity
            );
        } else {
            debug!(
                "{} recommends {} resources",
                self.optimizer.name(),
                recommendations.len()
            );
        }

        OptimizationReport {
            recommendations,
            reason: None,
        }
    }

    // ========================================================================
    // Routes
    // ========================================================================

    /// Known location matching `name` case-insensitively, or `name` as given
    fn resolve_location(&self, name: &str) -> LocationId {
        let name = name.trim();
        self.graph
            .locations()
            .find(|location| location.matches(name))
            .cloned()
            .unwrap_or_else(|| LocationId::new(name))
    }

    /// Cheapest route and the profit of selling the current hold on arrival
    ///
    /// Only held resources whose home is the destination count towards the
    /// profit, valued at current price less commission.
    pub fn route(&self, origin: &str, destination: &str) -> RouteResult<RouteReport> {
        let origin = self.resolve_location(origin);
        let destination = self.resolve_location(destination);
        let plan = self.graph.shortest_path(&origin, &destination)?;

        let keep = Decimal::ONE - self.config.sale_commission;
        let mut gross = Decimal::ZERO;
        let mut sales = Vec::new();

        for (name, quantity) in &self.player.inventory {
            let Some(resource) = self.market.resource(name) else {
                debug!("{} held but not listed", name);
                continue;
            };
            if !resource.home.matches(destination.as_str()) {
                continue;
            }

            let unit_price = resource.price * keep;
            let total = unit_price * Decimal::from(*quantity);
            gross += total;
            sales.push(SaleEstimate {
                resource: name.clone(),
                quantity: *quantity,
                unit_price: unit_price.round_dp(2),
                total: total.round_dp(2),
            });
        }

        debug!(
            "Route {} -> {}: cost {}, distance {}, {} sellable",
            origin,
            destination,
            plan.cost,
            plan.distance,
            sales.len()
        );

        Ok(RouteReport {
            estimated_time: (plan.distance / DISTANCE_PER_MINUTE).round(),
            risk: RiskLevel::from_distance(plan.distance),
            gross_profit: gross.round_dp(2),
            net_profit: (gross - plan.cost).round_dp(2),
            distance: plan.distance,
            cost: plan.cost,
            path: plan.path,
            sales,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyo_core::Allocation;
    use rust_decimal_macros::dec;

    fn session() -> Simulation {
        Simulation::with_config(SimulationConfig::default().with_seed(42)).unwrap()
    }

    #[test]
    fn test_buy_updates_player_and_market() {
        let mut sim = session();
        let price = sim.market().resource("Bug Residue").unwrap().price;
        let supply = sim.market().resource("Bug Residue").unwrap().supply;

        let receipt = sim.try_buy("bug residue", 2).unwrap();
        assert_eq!(receipt.resource, "Bug Residue");
        assert_eq!(receipt.amount, price * dec!(2));
        assert_eq!(sim.player().money, dec!(50000) - price * dec!(2));
        assert_eq!(sim.player().capacity_used, dec!(8));
        assert_eq!(sim.player().holding("Bug Residue"), 2);

        let resource = sim.market().resource("Bug Residue").unwrap();
        assert_eq!(resource.stock, 98);
        assert_eq!(resource.supply, supply.saturating_sub(4).max(10));
    }

    #[test]
    fn test_buy_rejections_leave_state_untouched() {
        let mut sim = session();

        assert_eq!(
            sim.try_buy("Unobtainium", 1).unwrap_err(),
            TradeError::ResourceNotFound("Unobtainium".to_string())
        );
        assert_eq!(
            sim.try_buy("CPU Shards", 0).unwrap_err(),
            TradeError::InvalidQuantity
        );

        // 26 * 2kg > 50kg
        let err = sim.try_buy("Quantum Keys", 26).unwrap_err();
        assert_eq!(err.code(), ReasonCode::InsufficientFunds);

        // 11 * 5kg > 50kg, cheap enough at most prices
        let before = sim.market().resource("CPU Shards").unwrap().clone();
        let err = sim.try_buy("CPU Shards", 11).unwrap_err();
        match err {
            TradeError::InsufficientCapacity { required, available } => {
                assert_eq!(required, dec!(55));
                assert_eq!(available, dec!(50));
            }
            other => panic!("unexpected {:?}", other),
        }

        assert_eq!(sim.player().money, dec!(50000));
        assert!(sim.player().inventory.is_empty());
        assert_eq!(sim.market().resource("CPU Shards").unwrap(), &before);
    }

    #[test]
    fn test_sell_with_commission_and_entry_removal() {
        let mut sim = session();
        sim.try_buy("Data Packets", 3).unwrap();
        let price = sim.market().resource("Data Packets").unwrap().price;
        let money = sim.player().money;

        let receipt = sim.try_sell("DATA PACKETS", 3).unwrap();
        assert_eq!(receipt.amount, price * dec!(3) * dec!(0.9));
        assert_eq!(sim.player().money, money + receipt.amount);
        assert_eq!(sim.player().capacity_used, dec!(0));
        assert!(!sim.player().inventory.contains_key("Data Packets"));
        // Sell leaves the price alone
        assert_eq!(sim.market().resource("Data Packets").unwrap().price, price);
    }

    #[test]
    fn test_sell_more_than_held() {
        let mut sim = session();
        sim.try_buy("RAM Blocks", 1).unwrap();

        let err = sim.try_sell("RAM Blocks", 2).unwrap_err();
        assert_eq!(
            err,
            TradeError::InsufficientInventory {
                resource: "RAM Blocks".to_string(),
                held: 1,
                requested: 2,
            }
        );
        assert_eq!(sim.player().holding("RAM Blocks"), 1);
    }

    #[test]
    fn test_outcome_records() {
        let mut sim = session();
        let ok = sim.buy("Bug Residue", 1);
        assert!(ok.success);
        assert!(ok.reason.is_none());
        assert_eq!(ok.inventory.get("Bug Residue"), Some(&1));

        let failed = sim.sell("Crypto Keys", 1);
        assert!(!failed.success);
        assert_eq!(failed.reason, Some(ReasonCode::InsufficientInventory));
        assert_eq!(failed.money, ok.money);
    }

    #[test]
    fn test_player_state_values_holdings() {
        let mut sim = session();
        sim.try_buy("Neural Chips", 2).unwrap();
        let price = sim.market().resource("Neural Chips").unwrap().price;

        let state = sim.player_state();
        assert_eq!(state.resource_value, (price * dec!(2)).round_dp(2));
        assert_eq!(state.net_worth, (state.money + price * dec!(2)).round_dp(2));
        assert_eq!(state.capacity_used, dec!(6));
    }

    #[test]
    fn test_optimize_full_hold() {
        let mut sim = Simulation::with_config(
            SimulationConfig::default()
                .with_seed(1)
                .with_player("Mule", dec!(1_000_000), dec!(4)),
        )
        .unwrap();
        sim.try_buy("Bug Residue", 1).unwrap();

        let report = sim.optimize_inventory();
        assert!(report.recommendations.is_empty());
        assert_eq!(report.reason, Some(ReasonCode::NoCapacityAvailable));
    }

    #[test]
    fn test_optimize_respects_capacity() {
        let sim = session();
        let report = sim.optimize_inventory();
        assert!(report.reason.is_none());
        assert!(!report.recommendations.is_empty());
        assert!(report.total_weight() <= dec!(50));
        assert!(report.total_cost() <= dec!(50000));
    }

    struct Nothing;

    impl InventoryOptimizer for Nothing {
        fn recommend(&self, _: &[Offer], _: Decimal, _: u32) -> Vec<Allocation> {
            Vec::new()
        }

        fn name(&self) -> &str {
            "nothing"
        }
    }

    #[test]
    fn test_custom_optimizer() {
        let sim = session().with_optimizer(Box::new(Nothing));
        let report = sim.optimize_inventory();
        assert!(report.recommendations.is_empty());
        assert!(report.reason.is_none());
    }

    #[test]
    fn test_advance_turn_counts() {
        let mut sim = session();
        assert_eq!(sim.advance_turn().turn, 1);
        assert_eq!(sim.advance_turn().turn, 2);
        assert_eq!(sim.market_statistics().turn, 2);
    }

    #[test]
    fn test_route_report() {
        let mut sim = session();
        sim.try_buy("Crypto Keys", 2).unwrap();
        sim.try_buy("Bug Residue", 1).unwrap();
        let price = sim.market().resource("Crypto Keys").unwrap().price;

        let report = sim.route("torre keio", "refinería de códigos").unwrap();
        assert_eq!(report.cost, dec!(340));
        assert_eq!(report.distance, dec!(305));
        assert_eq!(report.estimated_time, dec!(30));
        assert_eq!(report.risk, RiskLevel::High);
        assert_eq!(report.path.len(), 4);

        // Only Crypto Keys call the refinery home
        assert_eq!(report.sales.len(), 1);
        let gross = price * dec!(0.9) * dec!(2);
        assert_eq!(report.gross_profit, gross.round_dp(2));
        assert_eq!(report.net_profit, (gross - dec!(340)).round_dp(2));
    }

    #[test]
    fn test_route_to_unknown_location() {
        let sim = session();
        let err = sim.route("Torre Keio", "Atlantis").unwrap_err();
        assert_eq!(err.code(), ReasonCode::RouteNotFound);
    }
}
