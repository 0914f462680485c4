//! Exhaustive scan over station pairs and catalog items.

use std::collections::HashMap;

use tracing::debug;

use super::entities::{CatalogItem, OrderBook, OrderLot, Station};
use super::trade_route::{evaluate_route, RouteOpportunity};

/// Order books of every station, loaded once per run.
#[derive(Clone, Debug, Default)]
pub struct MarketSnapshot {
    stations: Vec<Station>,
    sell_books: HashMap<Station, OrderBook>,
    buy_books: HashMap<Station, OrderBook>,
}

impl MarketSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station with its sell-side and buy-side books.
    /// Re-inserting a station replaces its books but keeps its position.
    pub fn insert_station(
        &mut self,
        station: impl Into<Station>,
        sells: OrderBook,
        buys: OrderBook,
    ) {
        let station = station.into();
        if !self.stations.contains(&station) {
            self.stations.push(station.clone());
        }
        self.sell_books.insert(station.clone(), sells);
        self.buy_books.insert(station, buys);
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Orders at `station` the trader can buy from.
    pub fn sell_lots(&self, station: &str, item: &str) -> &[OrderLot] {
        self.sell_books
            .get(station)
            .map(|book| book.lots(item))
            .unwrap_or(&[])
    }

    /// Orders at `station` the trader can sell into.
    pub fn buy_lots(&self, station: &str, item: &str) -> &[OrderLot] {
        self.buy_books
            .get(station)
            .map(|book| book.lots(item))
            .unwrap_or(&[])
    }

    pub fn sell_book(&self, station: &str) -> Option<&OrderBook> {
        self.sell_books.get(station)
    }

    pub fn buy_book(&self, station: &str) -> Option<&OrderBook> {
        self.buy_books.get(station)
    }
}

/// Evaluate every (origin, destination, item) triple with distinct stations.
///
/// Results come back in scan order: origin, then destination, then catalog order.
pub fn scan_routes(catalog: &[CatalogItem], market: &MarketSnapshot) -> Vec<RouteOpportunity> {
    let mut routes = Vec::new();

    for origin in market.stations() {
        for destination in market.stations() {
            if origin == destination {
                continue;
            }

            let before = routes.len();
            routes.extend(catalog.iter().filter_map(|item| {
                evaluate_route(
                    item,
                    origin,
                    destination,
                    market.sell_lots(origin, &item.name),
                    market.buy_lots(destination, &item.name),
                )
            }));
            debug!(
                origin = %origin,
                destination = %destination,
                found = routes.len() - before,
                "scanned station pair"
            );
        }
    }

    routes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(raw: &[(&str, f64, u64)]) -> OrderBook {
        raw.iter()
            .map(|&(item, price, qty)| (item, OrderLot::new(price, qty)))
            .collect()
    }

    fn market() -> MarketSnapshot {
        let mut market = MarketSnapshot::new();
        market.insert_station(
            "jita",
            book(&[("Widget", 5.0, 100), ("Gadget", 50.0, 10)]),
            book(&[("Widget", 4.0, 100)]),
        );
        market.insert_station(
            "amarr",
            book(&[("Widget", 8.0, 100)]),
            book(&[("Widget", 7.0, 100), ("Gadget", 60.0, 5)]),
        );
        market.insert_station("hek", OrderBook::new(), OrderBook::new());
        market
    }

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("Widget", 1.0, 50),
            CatalogItem::new("Gadget", 2.0, 20),
            CatalogItem::new("Unlisted", 1.0, 10),
        ]
    }

    #[test]
    fn finds_profitable_triples_only() {
        let routes = scan_routes(&catalog(), &market());

        let keys: Vec<(&str, &str, &str)> = routes
            .iter()
            .map(|r| (r.origin.as_str(), r.destination.as_str(), r.item_name.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![("jita", "amarr", "Widget"), ("jita", "amarr", "Gadget")]
        );
        assert_eq!(routes[0].profit, 100.0);
        assert_eq!(routes[1].units_moved, 5);
        assert_eq!(routes[1].profit, 50.0);
    }

    #[test]
    fn never_routes_a_station_to_itself() {
        let mut market = MarketSnapshot::new();
        market.insert_station("jita", book(&[("Widget", 1.0, 10)]), book(&[("Widget", 9.0, 10)]));

        assert!(scan_routes(&catalog(), &market).is_empty());
    }

    #[test]
    fn unknown_station_or_item_has_no_lots() {
        let market = market();

        assert!(market.sell_lots("dodixie", "Widget").is_empty());
        assert!(market.buy_lots("jita", "Nothing").is_empty());
        assert_eq!(market.sell_lots("jita", "Widget").len(), 1);
    }

    #[test]
    fn reinserting_station_keeps_order() {
        let mut market = market();
        market.insert_station("jita", OrderBook::new(), OrderBook::new());

        assert_eq!(market.stations(), &["jita", "amarr", "hek"]);
        assert!(market.sell_book("jita").is_some_and(OrderBook::is_empty));
    }
}
