use std::collections::HashMap;

/// Name of a trade hub (e.g. "jita"). Origins and destinations share one set.
pub type Station = String;

/// Catalog entry for a tradeable item.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogItem {
    pub name: String,
    /// Cargo volume of one unit in m³.
    pub unit_volume_m3: f64,
    /// Units that fit into one cargo run. Zero or negative means the item is never routed.
    pub capacity_units: i64,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, unit_volume_m3: f64, capacity_units: i64) -> Self {
        Self {
            name: name.into(),
            unit_volume_m3,
            capacity_units,
        }
    }
}

/// One resting market order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrderLot {
    pub price: f64,
    pub quantity: u64,
}

impl OrderLot {
    pub fn new(price: f64, quantity: u64) -> Self {
        Self { price, quantity }
    }
}

/// Resting orders of one station and side, grouped by item name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderBook {
    lots: HashMap<String, Vec<OrderLot>>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: impl Into<String>, lot: OrderLot) {
        self.lots.entry(item.into()).or_default().push(lot);
    }

    /// Lots for `item` in load order; empty when the item has no orders.
    pub fn lots(&self, item: &str) -> &[OrderLot] {
        self.lots.get(item).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn item_count(&self) -> usize {
        self.lots.len()
    }

    pub fn lot_count(&self) -> usize {
        self.lots.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, OrderLot)> for OrderBook {
    fn from_iter<I: IntoIterator<Item = (S, OrderLot)>>(iter: I) -> Self {
        let mut book = OrderBook::new();
        for (item, lot) in iter {
            book.push(item, lot);
        }
        book
    }
}

/// Portion of a lot consumed during allocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    pub price: f64,
    pub quantity: u64,
}

/// Outcome of greedily filling a quantity from a set of lots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Allocation {
    pub quantity: u64,
    pub total_value: f64,
    /// Fills in the order they were consumed.
    pub fills: Vec<Fill>,
}

impl Allocation {
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }

    /// Lowest and highest price among the consumed lots.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        self.fills.iter().fold(None, |range, fill| match range {
            None => Some((fill.price, fill.price)),
            Some((min, max)) => Some((min.min(fill.price), max.max(fill.price))),
        })
    }

    pub fn lot_count(&self) -> usize {
        self.fills.len()
    }
}
