use indexmap::IndexMap;
use keyo_core::{Allocation, Offer, Price, Quantity};
use keyo_ports::InventoryOptimizer;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Unbounded knapsack over integer weights
///
/// Fills a 1-D table over capacities 0..=W where every offer may be taken
/// repeatedly; an offer only enters the table if a single unit is affordable
/// with the whole budget. Backtracking from W through the "last offer that
/// improved this cell" table rebuilds the bundle and stops as soon as the
/// running spend would exceed the budget.
///
/// Table weights are unit weights rounded up, table values are unit prices
/// truncated to whole money.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnapsackOptimizer;

impl KnapsackOptimizer {
    pub fn new() -> Self {
        Self
    }

    /// (table weight, table value) of an offer, `None` if it cannot be tabulated
    fn table_entry(offer: &Offer) -> Option<(usize, i64)> {
        let weight = offer.weight.ceil().to_usize()?;
        if weight == 0 {
            return None;
        }
        let value = offer.unit_price.trunc().to_i64()?;
        Some((weight, value))
    }
}

impl InventoryOptimizer for KnapsackOptimizer {
    fn name(&self) -> &str {
        "Unbounded Knapsack"
    }

    fn recommend(&self, offers: &[Offer], budget: Price, capacity: u32) -> Vec<Allocation> {
        if capacity == 0 || offers.is_empty() {
            return Vec::new();
        }

        let capacity = capacity as usize;
        let entries: Vec<Option<(usize, i64)>> = offers.iter().map(Self::table_entry).collect();

        let mut best = vec![0i64; capacity + 1];
        let mut choice: Vec<Option<usize>> = vec![None; capacity + 1];

        for w in 1..=capacity {
            for (i, offer) in offers.iter().enumerate() {
                let Some((weight, value)) = entries[i] else {
                    continue;
                };
                if weight <= w && budget >= offer.unit_price {
                    let candidate = best[w - weight] + value;
                    if candidate > best[w] {
                        best[w] = candidate;
                        choice[w] = Some(i);
                    }
                }
            }
        }

        let mut picked: IndexMap<usize, Quantity> = IndexMap::new();
        let mut remaining = capacity;
        let mut spent = Decimal::ZERO;

        while remaining > 0 {
            let Some(i) = choice[remaining] else {
                break;
            };
            let offer = &offers[i];
            if spent + offer.unit_price > budget {
                break;
            }

            *picked.entry(i).or_insert(0) += 1;
            // entries[i] is Some whenever it was recorded in `choice`
            remaining -= entries[i].map(|(weight, _)| weight).unwrap_or(remaining);
            spent += offer.unit_price;
        }

        debug!(
            "Knapsack: capacity={}, budget={}, table_value={}, spent={}, picks={}",
            capacity,
            budget,
            best[capacity],
            spent,
            picked.len()
        );

        picked
            .into_iter()
            .map(|(i, quantity)| Allocation {
                name: offers[i].name.clone(),
                quantity,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn total_weight(offers: &[Offer], picks: &[Allocation]) -> Decimal {
        picks
            .iter()
            .map(|a| {
                let offer = offers.iter().find(|o| o.name == a.name).unwrap();
                offer.weight * Decimal::from(a.quantity)
            })
            .sum()
    }

    #[test]
    fn test_prefers_value_dense_offer() {
        let offers = vec![
            Offer::new("CPU Shards", dec!(500), dec!(5)),
            Offer::new("Quantum Keys", dec!(2000), dec!(2)),
        ];
        let picks = KnapsackOptimizer::new().recommend(&offers, dec!(50000), 10);

        assert_eq!(
            picks,
            vec![Allocation {
                name: "Quantum Keys".to_string(),
                quantity: 5,
            }]
        );
        assert_eq!(total_weight(&offers, &picks), dec!(10));
    }

    #[test]
    fn test_backtracking_stops_at_budget() {
        let offers = vec![Offer::new("Quantum Keys", dec!(2000), dec!(2))];
        let picks = KnapsackOptimizer::new().recommend(&offers, dec!(5000), 10);

        // Table fills 5 units, reconstruction stops after 2 (4000 <= 5000 < 6000)
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].quantity, 2);
    }

    #[test]
    fn test_unaffordable_unit_is_excluded() {
        let offers = vec![
            Offer::new("Quantum Keys", dec!(6000), dec!(2)),
            Offer::new("Bug Residue", dec!(80), dec!(4)),
        ];
        let picks = KnapsackOptimizer::new().recommend(&offers, dec!(5000), 10);

        // Only Bug Residue can enter the table; cell 10 backtracks 10 -> 6 -> 2
        assert_eq!(
            picks,
            vec![Allocation {
                name: "Bug Residue".to_string(),
                quantity: 2,
            }]
        );
    }

    #[test]
    fn test_zero_capacity_returns_nothing() {
        let offers = vec![Offer::new("Bug Residue", dec!(80), dec!(4))];
        assert!(
            KnapsackOptimizer::new()
                .recommend(&offers, dec!(5000), 0)
                .is_empty()
        );
        assert!(
            KnapsackOptimizer::new()
                .recommend(&[], dec!(5000), 10)
                .is_empty()
        );
    }

    #[test]
    fn test_fractional_weights_never_overflow_capacity() {
        let offers = vec![Offer::new("Dust", dec!(10), dec!(2.5))];
        let picks = KnapsackOptimizer::new().recommend(&offers, dec!(1000), 10);

        assert_eq!(picks[0].quantity, 3);
        assert!(total_weight(&offers, &picks) <= dec!(10));
    }

    #[test]
    fn test_mixed_bundle_respects_capacity() {
        let offers = vec![
            Offer::new("CPU Shards", dec!(512.75), dec!(5)),
            Offer::new("RAM Blocks", dec!(349.99), dec!(8)),
            Offer::new("Bug Residue", dec!(81.2), dec!(4)),
            Offer::new("Neural Chips", dec!(1190), dec!(3)),
        ];

        for capacity in 1..=40 {
            let picks = KnapsackOptimizer::new().recommend(&offers, dec!(50000), capacity);
            assert!(total_weight(&offers, &picks) <= Decimal::from(capacity));
        }
    }

    #[test]
    fn test_zero_weight_offer_is_skipped() {
        let offers = vec![
            Offer::new("Ghost", dec!(999), dec!(0)),
            Offer::new("Bug Residue", dec!(80), dec!(4)),
        ];
        let picks = KnapsackOptimizer::new().recommend(&offers, dec!(5000), 4);
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].name, "Bug Residue");
    }
}
