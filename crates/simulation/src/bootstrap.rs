//! Bootstrap - world construction for a new session
//!
//! Handles initial setup:
//! - Seeding the market from the catalog
//! - Building the route network
//! - Creating the player with its starting money and capacity

use keyo_core::{Player, RouteEdge};
use keyo_market::MarketEngine;
use keyo_routing::RouteGraph;
use log::info;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};

/// The game's route network: (a, b, distance, cost), all undirected
pub fn standard_routes() -> Vec<RouteEdge> {
    vec![
        RouteEdge::new("Torre Keio", "Puerto Cache", dec!(100), dec!(120)),
        RouteEdge::new("Torre Keio", "Nodo Central", dec!(95), dec!(100)),
        // Long direct route
        RouteEdge::new("Torre Keio", "Refinería de Códigos", dec!(280), dec!(350)),
        RouteEdge::new("Puerto Cache", "Anillos de Datos", dec!(120), dec!(150)),
        RouteEdge::new("Puerto Cache", "Valle Binario", dec!(85), dec!(90)),
        RouteEdge::new("Nodo Central", "Bosque del Firmware", dec!(130), dec!(140)),
        RouteEdge::new("Nodo Central", "Montaña", dec!(100), dec!(110)),
        RouteEdge::new("Anillos de Datos", "Valle Binario", dec!(75), dec!(80)),
        RouteEdge::new("Anillos de Datos", "Minas de Silicio", dec!(180), dec!(200)),
        RouteEdge::new("Anillos de Datos", "Bosque del Firmware", dec!(350), dec!(400)),
        RouteEdge::new("Valle Binario", "Refinería de Códigos", dec!(120), dec!(130)),
        RouteEdge::new("Valle Binario", "Minas de Silicio", dec!(140), dec!(160)),
        RouteEdge::new("Montaña", "Bosque del Firmware", dec!(90), dec!(95)),
        RouteEdge::new("Montaña", "Refinería de Códigos", dec!(160), dec!(180)),
        RouteEdge::new("Bosque del Firmware", "Refinería de Códigos", dec!(150), dec!(170)),
        RouteEdge::new("Minas de Silicio", "Refinería de Códigos", dec!(130), dec!(140)),
    ]
}

/// Freshly built world, ready to be handed to a session
pub struct SimulationBootstrap {
    pub market: MarketEngine,
    pub graph: RouteGraph,
    pub player: Player,
}

impl SimulationBootstrap {
    pub fn with_config(config: &SimulationConfig) -> Result<Self> {
        if config.catalog.resources.is_empty() {
            return Err(SimulationError::EmptyCatalog);
        }
        if config.starting_money < Decimal::ZERO {
            return Err(SimulationError::InvalidPlayer(format!(
                "starting money {} is negative",
                config.starting_money
            )));
        }
        if config.capacity < Decimal::ZERO {
            return Err(SimulationError::InvalidPlayer(format!(
                "capacity {} is negative",
                config.capacity
            )));
        }

        let graph = RouteGraph::from_edges(config.routes.iter().cloned())?;

        let market = match config.seed {
            Some(seed) => {
                MarketEngine::with_seed(config.catalog.clone(), config.market.clone(), seed)
            }
            None => MarketEngine::new(config.catalog.clone(), config.market.clone()),
        };

        let player = Player::new(
            config.player_name.clone(),
            config.starting_money,
            config.capacity,
        );

        info!(
            "World ready: {} resources, {} locations, {} routes, player {}",
            market.len(),
            graph.location_count(),
            graph.edge_count(),
            player.name
        );

        Ok(Self {
            market,
            graph,
            player,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyo_market::ResourceCatalog;

    #[test]
    fn test_standard_world() {
        let world = SimulationBootstrap::with_config(&SimulationConfig::default()).unwrap();
        assert_eq!(world.market.len(), 8);
        assert_eq!(world.graph.edge_count(), 16);
        assert_eq!(world.graph.location_count(), 9);
        assert_eq!(world.player.money, dec!(50000));
    }

    #[test]
    fn test_rejects_bad_edge() {
        let config = SimulationConfig::default().with_routes(vec![RouteEdge::new(
            "A",
            "B",
            dec!(0),
            dec!(5),
        )]);
        let err = SimulationBootstrap::with_config(&config).err().unwrap();
        assert!(matches!(err, SimulationError::RouteNetwork(_)));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let config = SimulationConfig::default()
            .with_catalog(ResourceCatalog::new(Vec::new(), Vec::new()));
        let err = SimulationBootstrap::with_config(&config).err().unwrap();
        assert_eq!(err, SimulationError::EmptyCatalog);
    }

    #[test]
    fn test_rejects_negative_money() {
        let config = SimulationConfig::default().with_player("Broke", dec!(-1), dec!(50));
        let err = SimulationBootstrap::with_config(&config).err().unwrap();
        assert!(matches!(err, SimulationError::InvalidPlayer(_)));
    }
}
