//! Session configuration

use keyo_core::{Price, RouteEdge, Weight};
use keyo_market::{MarketConfig, ResourceCatalog};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::bootstrap::standard_routes;

/// Everything needed to start a session
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub player_name: String,
    pub starting_money: Price,
    /// Maximum weight the player can carry
    pub capacity: Weight,
    /// Fraction of the gross withheld on every sale
    pub sale_commission: Decimal,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    pub market: MarketConfig,
    pub catalog: ResourceCatalog,
    /// Undirected route network
    pub routes: Vec<RouteEdge>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            player_name: "Jugador1".to_string(),
            starting_money: dec!(50000),
            capacity: dec!(50),
            sale_commission: dec!(0.10),
            seed: None,
            market: MarketConfig::default(),
            catalog: ResourceCatalog::standard(),
            routes: standard_routes(),
        }
    }
}

impl SimulationConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_player(mut self, name: &str, money: Price, capacity: Weight) -> Self {
        self.player_name = name.to_string();
        self.starting_money = money;
        self.capacity = capacity;
        self
    }

    pub fn with_routes(mut self, routes: Vec<RouteEdge>) -> Self {
        self.routes = routes;
        self
    }

    pub fn with_catalog(mut self, catalog: ResourceCatalog) -> Self {
        self.catalog = catalog;
        self
    }
}
