//! Greedy fill of a requested quantity from resting order lots.

use std::cmp::Ordering;

use super::entities::{Allocation, Fill, OrderLot};

/// Which end of the book is consumed first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillPreference {
    /// Lowest price first. Used when buying from sell orders.
    Cheapest,
    /// Highest price first. Used when selling into buy orders.
    Priciest,
}

/// Fill up to `needed` units from `lots`, best price first.
///
/// Equal prices keep their input order. The input slice is left untouched.
pub fn allocate(lots: &[OrderLot], needed: u64, preference: FillPreference) -> Allocation {
    let mut sorted: Vec<&OrderLot> = lots.iter().collect();
    sorted.sort_by(|a, b| {
        let ord = a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal);
        match preference {
            FillPreference::Cheapest => ord,
            FillPreference::Priciest => ord.reverse(),
        }
    });

    let mut remaining = needed;
    let mut allocation = Allocation::default();

    for lot in sorted {
        if remaining == 0 {
            break;
        }
        let take = lot.quantity.min(remaining);
        if take == 0 {
            continue;
        }
        allocation.total_value += lot.price * take as f64;
        allocation.quantity += take;
        remaining -= take;
        allocation.fills.push(Fill {
            price: lot.price,
            quantity: take,
        });
    }

    allocation
}
