use keyo_core::{Allocation, Offer, Price};

/// Port for inventory recommendation strategies
pub trait InventoryOptimizer {
    /// Pick units of `offers` to fill up to `capacity` weight with `budget` money
    ///
    /// Returns allocations in the order they were first chosen. An empty list
    /// means nothing fits or nothing is affordable.
    fn recommend(&self, offers: &[Offer], budget: Price, capacity: u32) -> Vec<Allocation>;

    /// Get the name of the optimizer
    fn name(&self) -> &str;
}
