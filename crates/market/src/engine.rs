//! Market engine - owns the catalog and applies the price model

use indexmap::IndexMap;
use keyo_core::{LocationId, Price, Quantity, Resource, ResourceView, SortKey};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::catalog::ResourceCatalog;
use crate::config::MarketConfig;
use crate::stats::MarketStatistics;

/// Owns every resource and the randomness that moves their prices
///
/// The catalog is keyed by canonical name in catalog order. Lookups by name
/// are case-insensitive.
pub struct MarketEngine {
    resources: IndexMap<String, Resource>,
    locations: Vec<LocationId>,
    config: MarketConfig,
    rng: StdRng,
}

impl MarketEngine {
    /// Create and initialize a market seeded from OS entropy
    pub fn new(catalog: ResourceCatalog, config: MarketConfig) -> Self {
        Self::with_rng(catalog, config, StdRng::from_entropy())
    }

    /// Create with a specific seed for reproducible sessions
    pub fn with_seed(catalog: ResourceCatalog, config: MarketConfig, seed: u64) -> Self {
        Self::with_rng(catalog, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: ResourceCatalog, config: MarketConfig, rng: StdRng) -> Self {
        let mut engine = Self {
            resources: IndexMap::new(),
            locations: Vec::new(),
            config,
            rng,
        };
        engine.initialize(catalog);
        engine
    }

    /// (Re)populate the catalog with randomized regional tables
    ///
    /// Home locations get a discounted price and deep stock, every other
    /// region a rarity-scaled markup and thin stock. Demand and supply start
    /// at independent random levels; the current price starts at base.
    pub fn initialize(&mut self, catalog: ResourceCatalog) {
        self.resources.clear();
        self.locations = catalog.locations;

        for spec in catalog.resources {
            let mut resource = Resource::new(
                spec.name,
                spec.base_price,
                spec.rarity,
                spec.weight,
                spec.home,
            );

            for location in &self.locations {
                let (factor, stock) = if *location == resource.home {
                    let (low, high) = self.config.home_discount_range;
                    let (min_stock, max_stock) = self.config.home_stock_range;
                    (
                        draw_factor(&mut self.rng, low, high),
                        self.rng.gen_range(min_stock..=max_stock),
                    )
                } else {
                    let (low, high) = self.config.away_markup_range(resource.rarity);
                    let (min_stock, max_stock) = self.config.away_stock_range;
                    (
                        draw_factor(&mut self.rng, low, high),
                        self.rng.gen_range(min_stock..=max_stock),
                    )
                };
                resource
                    .regional_prices
                    .insert(location.clone(), resource.base_price * factor);
                resource.regional_stock.insert(location.clone(), stock);
            }

            let (min_level, max_level) = self.config.initial_level_range;
            resource.demand = self.rng.gen_range(min_level..=max_level);
            resource.supply = self.rng.gen_range(min_level..=max_level);

            debug!(
                "Seeded {}: home={}, demand={}, supply={}",
                resource.name, resource.home, resource.demand, resource.supply
            );
            self.resources.insert(resource.name.clone(), resource);
        }

        info!(
            "Market initialized: {} resources across {} regions",
            self.resources.len(),
            self.locations.len()
        );
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Regions with price tables, in catalog order
    pub fn locations(&self) -> &[LocationId] {
        &self.locations
    }

    /// Canonical resources in catalog order
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.resources
            .get_index_of(name)
            .or_else(|| self.resources.values().position(|r| r.matches(name)))
    }

    /// Case-insensitive lookup
    pub fn resource(&self, name: &str) -> Option<&Resource> {
        let index = self.index_of(name)?;
        self.resources.get_index(index).map(|(_, r)| r)
    }

    /// Case-insensitive mutable lookup
    pub fn resource_mut(&mut self, name: &str) -> Option<&mut Resource> {
        let index = self.index_of(name)?;
        self.resources.get_index_mut(index).map(|(_, r)| r)
    }

    /// Draw a price noise factor from the configured jitter range
    pub fn draw_jitter(&mut self) -> Decimal {
        let (low, high) = self.config.jitter_range;
        draw_factor(&mut self.rng, low, high)
    }

    /// Recompute one resource's price with fresh jitter
    pub fn update_price(&mut self, name: &str) -> Option<Price> {
        let index = self.index_of(name)?;
        let jitter = self.draw_jitter();
        let (_, resource) = self.resources.get_index_mut(index)?;
        Some(resource.reprice(jitter))
    }

    /// One simulated turn: random demand/supply drift, then reprice everything
    pub fn advance_turn(&mut self) {
        let drift = self.config.level_drift;
        let (jitter_low, jitter_high) = self.config.jitter_range;

        for resource in self.resources.values_mut() {
            resource.nudge_demand(self.rng.gen_range(-drift..=drift));
            resource.nudge_supply(self.rng.gen_range(-drift..=drift));
            let jitter = draw_factor(&mut self.rng, jitter_low, jitter_high);
            resource.reprice(jitter);

            debug!(
                "{}: demand={}, supply={}, price={}",
                resource.name, resource.demand, resource.supply, resource.price
            );
        }
    }

    /// Apply buy-side feedback (stock, supply, demand) and reprice
    pub fn record_purchase(&mut self, name: &str, quantity: Quantity) -> Option<Price> {
        self.resource_mut(name)?.absorb_purchase(quantity);
        self.update_price(name)
    }

    /// Apply sell-side feedback; the price is left as is until the next update
    pub fn record_sale(&mut self, name: &str, quantity: Quantity) -> bool {
        match self.resource_mut(name) {
            Some(resource) => {
                resource.absorb_sale(quantity);
                true
            }
            None => false,
        }
    }

    /// Views priced with each resource's table entry for `location`
    ///
    /// Resources without an entry for the location report the fallback
    /// markup over base and the fallback stock.
    pub fn resources_by_location(&self, location: &LocationId) -> Vec<ResourceView> {
        self.resources
            .values()
            .map(|resource| match resource.regional_quote(location) {
                Some((price, stock)) => ResourceView::with_quote(resource, price, stock),
                None => ResourceView::with_quote(
                    resource,
                    resource.base_price * self.config.fallback_price_multiplier,
                    self.config.fallback_stock,
                ),
            })
            .collect()
    }

    /// Views priced with the mean over all regions
    pub fn resources_averaged(&self) -> Vec<ResourceView> {
        self.resources
            .values()
            .map(|resource| {
                let price = resource
                    .average_regional_price()
                    .unwrap_or(resource.base_price);
                let stock = resource
                    .average_regional_stock()
                    .unwrap_or(self.config.fallback_stock);
                ResourceView::with_quote(resource, price, stock)
            })
            .collect()
    }

    /// Market listing: regional views when a location is given, averaged otherwise
    ///
    /// The location is matched case-insensitively against known regions.
    pub fn list_resources(&self, location: Option<&str>, sort: SortKey) -> Vec<ResourceView> {
        let mut views = match location.map(str::trim).filter(|l| !l.is_empty()) {
            Some(name) => {
                let location = self
                    .locations
                    .iter()
                    .find(|l| l.matches(name))
                    .cloned()
                    .unwrap_or_else(|| LocationId::new(name));
                self.resources_by_location(&location)
            }
            None => self.resources_averaged(),
        };
        sort.sort_views(&mut views);
        views
    }

    /// Full resource records ordered by `key`, descending
    pub fn sorted_by(&self, key: SortKey) -> Vec<Resource> {
        let mut all: Vec<Resource> = self.resources.values().cloned().collect();
        key.sort_resources(&mut all);
        all
    }

    /// Full resource records ordered by price per unit weight, descending
    pub fn by_value_density(&self) -> Vec<Resource> {
        let mut all: Vec<Resource> = self.resources.values().cloned().collect();
        all.sort_by(|a, b| b.value_density().cmp(&a.value_density()));
        all
    }

    /// Averages and leaderboards over the canonical catalog
    pub fn statistics(&self, turn: u64) -> MarketStatistics {
        MarketStatistics::compute(self.resources.values(), turn, self.config.leaderboard_size)
    }
}

/// Uniform decimal in `[low, high]`
fn draw_factor(rng: &mut StdRng, low: Decimal, high: Decimal) -> Decimal {
    let (Some(lo), Some(hi)) = (low.to_f64(), high.to_f64()) else {
        return low;
    };
    if lo >= hi {
        return low;
    }
    Decimal::from_f64(rng.gen_range(lo..hi))
        .map(|factor| factor.round_dp(6))
        .unwrap_or(low)
        .clamp(low, high)
}
