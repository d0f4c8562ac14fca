use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Resource, ResourceView};

/// Field a market listing is ordered by (always descending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Price,
    Demand,
    Supply,
}

impl SortKey {
    /// Parse a sort key, falling back to `Price` for anything unrecognized
    pub fn parse(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "demand" => SortKey::Demand,
            "supply" => SortKey::Supply,
            _ => SortKey::Price,
        }
    }

    /// Stable descending sort of views
    pub fn sort_views(&self, views: &mut [ResourceView]) {
        match self {
            SortKey::Price => views.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::Demand => views.sort_by(|a, b| b.demand.cmp(&a.demand)),
            SortKey::Supply => views.sort_by(|a, b| b.supply.cmp(&a.supply)),
        }
    }

    /// Stable descending sort of full resource records
    pub fn sort_resources(&self, resources: &mut [Resource]) {
        match self {
            SortKey::Price => resources.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::Demand => resources.sort_by(|a, b| b.demand.cmp(&a.demand)),
            SortKey::Supply => resources.sort_by(|a, b| b.supply.cmp(&a.supply)),
        }
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortKey::Price => "price",
            SortKey::Demand => "demand",
            SortKey::Supply => "supply",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_defaults_to_price() {
        assert_eq!(SortKey::parse("demand"), SortKey::Demand);
        assert_eq!(SortKey::parse("SUPPLY"), SortKey::Supply);
        assert_eq!(SortKey::parse("price"), SortKey::Price);
        assert_eq!(SortKey::parse("weight"), SortKey::Price);
        assert_eq!(SortKey::parse(""), SortKey::Price);
        assert_eq!("demand".parse::<SortKey>(), Ok(SortKey::Demand));
    }

    #[test]
    fn test_sort_views_descending() {
        let mut a = Resource::new("A", dec!(100), 1, dec!(1), "X");
        a.demand = 20;
        a.supply = 90;
        let mut b = Resource::new("B", dec!(300), 1, dec!(1), "X");
        b.demand = 80;
        b.supply = 15;
        let mut c = Resource::new("C", dec!(200), 1, dec!(1), "X");
        c.demand = 50;
        c.supply = 50;

        let mut views: Vec<_> = [&a, &b, &c].iter().map(|r| ResourceView::of(r)).collect();

        SortKey::Price.sort_views(&mut views);
        let names: Vec<_> = views.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);

        SortKey::Demand.sort_views(&mut views);
        let names: Vec<_> = views.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);

        SortKey::Supply.sort_views(&mut views);
        let names: Vec<_> = views.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "B"]);
    }
}
