//! Trading Session Integration Test
//!
//! Drives a full session through the public command surface:
//! - Market listings and statistics
//! - Buying and selling against a seeded market
//! - Turn advancement
//! - Route planning and the inventory optimizer

use keyo_core::LocationId;
use keyo_simulation::{
    ReasonCode, RiskLevel, Simulation, SimulationConfig, SortKey, standard_routes,
};
use rust_decimal_macros::dec;

fn seeded(seed: u64) -> Simulation {
    Simulation::with_config(SimulationConfig::default().with_seed(seed)).unwrap()
}

/// Same seed, same market
#[test]
fn test_seeded_sessions_match() {
    let _ = env_logger::try_init();

    let mut a = seeded(77);
    let mut b = seeded(77);
    for _ in 0..5 {
        a.advance_turn();
        b.advance_turn();
    }

    assert_eq!(
        a.list_resources(None, SortKey::Price),
        b.list_resources(None, SortKey::Price)
    );
    assert_eq!(a.market_statistics(), b.market_statistics());
}

/// Prices and levels stay bounded over a long game with trading
#[test]
fn test_long_game_stays_in_bounds() {
    let _ = env_logger::try_init();
    let mut sim = seeded(5);

    for turn in 0..200u32 {
        let _ = sim.buy("Bug Residue", 1 + turn % 3);
        let _ = sim.sell("Bug Residue", 1);
        sim.advance_turn();

        let player = sim.player();
        assert!(player.money >= dec!(0));
        assert!(player.capacity_used <= player.capacity_max);

        for r in sim.market().resources() {
            assert!(r.price >= r.base_price * dec!(0.3));
            assert!(r.price <= r.base_price * dec!(3.0));
            assert!((10..=100).contains(&r.demand));
            assert!((10..=100).contains(&r.supply));
        }
    }
    assert_eq!(sim.turn(), 200);
}

/// Buying until the hold is full, then the optimizer has nothing to add
#[test]
fn test_fill_hold_then_optimize() {
    let _ = env_logger::try_init();
    let mut sim = seeded(11);

    // Session starts at base prices: 25 * 1500 = 37500, 25 * 2kg = 50kg
    let outcome = sim.buy("Crypto Keys", 25);
    assert!(outcome.success, "{}", outcome.message);
    assert_eq!(outcome.capacity_used, dec!(50));
    assert_eq!(outcome.money, dec!(12500));

    let report = sim.optimize_inventory();
    assert!(report.recommendations.is_empty());
    assert_eq!(report.reason, Some(ReasonCode::NoCapacityAvailable));

    let extra = sim.buy("RAM Blocks", 7);
    assert!(!extra.success);
    assert_eq!(extra.reason, Some(ReasonCode::InsufficientCapacity));
    assert_eq!(extra.money, dec!(12500));
}

/// Optimizer suggestions can actually be bought
#[test]
fn test_optimizer_recommendations_are_buyable() {
    let _ = env_logger::try_init();
    let mut sim = seeded(19);

    let report = sim.optimize_inventory();
    assert!(report.total_weight() <= dec!(50));

    if let Some(first) = report.recommendations.first() {
        let outcome = sim.buy(&first.resource, first.quantity);
        assert!(outcome.success, "{}", outcome.message);
        assert_eq!(outcome.capacity_used, first.total_weight);
    }
}

/// Round trip on the map and back
#[test]
fn test_routes_on_standard_network() {
    let sim = seeded(3);

    let there = sim.route("Torre Keio", "Refinería de Códigos").unwrap();
    let back = sim.route("Refinería de Códigos", "Torre Keio").unwrap();
    assert_eq!(there.cost, dec!(340));
    assert_eq!(back.cost, dec!(340));
    assert_eq!(there.distance, back.distance);
    assert_eq!(
        there.path,
        vec![
            LocationId::new("Torre Keio"),
            LocationId::new("Puerto Cache"),
            LocationId::new("Valle Binario"),
            LocationId::new("Refinería de Códigos"),
        ]
    );
    assert!(there.sales.is_empty());
    assert_eq!(there.gross_profit, dec!(0));
    assert_eq!(there.net_profit, dec!(-340));

    let stay = sim.route("Montaña", "montaña").unwrap();
    assert_eq!(stay.distance, dec!(0));
    assert_eq!(stay.cost, dec!(0));
    assert_eq!(stay.risk, RiskLevel::Low);
    assert_eq!(stay.path, vec![LocationId::new("Montaña")]);
}

/// A location cut off from the rest of the map has no route
#[test]
fn test_disconnected_location() {
    let mut routes = standard_routes();
    routes.push(keyo_core::RouteEdge::new("Isla", "Faro", dec!(10), dec!(10)));
    let sim =
        Simulation::with_config(SimulationConfig::default().with_seed(1).with_routes(routes))
            .unwrap();

    let err = sim.route("Torre Keio", "Isla").unwrap_err();
    assert_eq!(err.code(), ReasonCode::RouteNotFound);
    assert!(err.to_string().contains("No route"));
}

/// Records serialize for any transport
#[test]
fn test_records_serialize() {
    let mut sim = seeded(8);
    let outcome = sim.buy("Nothing", 1);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["reason"], "RESOURCE_NOT_FOUND");

    let state = serde_json::to_value(sim.player_state()).unwrap();
    assert_eq!(state["name"], "Jugador1");
}
