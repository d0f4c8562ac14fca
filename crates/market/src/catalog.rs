//! Resource catalog - the fixed list of tradeable goods and regions

use keyo_core::{LocationId, Price, Weight};
use rust_decimal_macros::dec;

/// Static economics of a resource before the market randomizes it
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSpec {
    pub name: String,
    pub base_price: Price,
    /// 1 (common) to 5 (rare)
    pub rarity: u8,
    pub weight: Weight,
    pub home: LocationId,
}

impl ResourceSpec {
    /// Rarity outside 1..=5 is clamped into range
    pub fn new(
        name: &str,
        base_price: Price,
        rarity: u8,
        weight: Weight,
        home: impl Into<LocationId>,
    ) -> Self {
        Self {
            name: name.to_string(),
            base_price,
            rarity: rarity.clamp(1, 5),
            weight,
            home: home.into(),
        }
    }
}

/// Resources plus every region that gets a price/stock table
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCatalog {
    pub resources: Vec<ResourceSpec>,
    pub locations: Vec<LocationId>,
}

impl ResourceCatalog {
    pub fn new(resources: Vec<ResourceSpec>, locations: Vec<LocationId>) -> Self {
        Self {
            resources,
            locations,
        }
    }

    /// The game's standard eight resources across nine regions
    pub fn standard() -> Self {
        let resources = vec![
            ResourceSpec::new("CPU Shards", dec!(500), 3, dec!(5), "Torre Keio"),
            ResourceSpec::new("RAM Blocks", dec!(350), 2, dec!(8), "Anillos de Datos"),
            ResourceSpec::new("Data Packets", dec!(600), 3, dec!(6), "Torre Keio"),
            ResourceSpec::new("Quantum Keys", dec!(2000), 5, dec!(2), "Montaña"),
            ResourceSpec::new("Bug Residue", dec!(80), 1, dec!(4), "Puerto Cache"),
            ResourceSpec::new("Neural Chips", dec!(1200), 4, dec!(3), "Minas de Silicio"),
            ResourceSpec::new("Energy Cores", dec!(900), 4, dec!(7), "Bosque del Firmware"),
            ResourceSpec::new("Crypto Keys", dec!(1500), 5, dec!(2), "Refinería de Códigos"),
        ];

        let locations = [
            "Torre Keio",
            "Anillos de Datos",
            "Bosque del Firmware",
            "Minas de Silicio",
            "Montaña",
            "Refinería de Códigos",
            "Puerto Cache",
            "Valle Binario",
            "Nodo Central",
        ]
        .into_iter()
        .map(LocationId::from)
        .collect();

        Self::new(resources, locations)
    }
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
