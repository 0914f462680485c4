//! Trade route evaluation and ranking.

use std::cmp::Ordering;

use super::allocation::{allocate, FillPreference};
use super::entities::{CatalogItem, OrderLot, Station};

/// A profitable one-hop run: buy at origin, haul, sell at destination.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteOpportunity {
    pub item_name: String,
    pub origin: Station,
    pub destination: Station,
    pub units_moved: u64,

    // Buy leg (sell orders at the origin)
    pub avg_buy_price: f64,
    pub buy_min: f64,
    pub buy_max: f64,
    pub buy_orders: usize,

    // Sell leg (buy orders at the destination)
    pub avg_sell_price: f64,
    pub sell_min: f64,
    pub sell_max: f64,
    pub sell_orders: usize,

    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
    pub volume_m3: f64,
}

/// Evaluate hauling `item` from `origin` to `destination`.
///
/// `sell_lots` are the sell orders at the origin (what we buy from) and
/// `buy_lots` the buy orders at the destination (what we sell into).
/// Returns `None` unless the run moves at least one unit at a strictly
/// positive profit.
pub fn evaluate_route(
    item: &CatalogItem,
    origin: &str,
    destination: &str,
    sell_lots: &[OrderLot],
    buy_lots: &[OrderLot],
) -> Option<RouteOpportunity> {
    if item.capacity_units <= 0 || sell_lots.is_empty() || buy_lots.is_empty() {
        return None;
    }
    let capacity = item.capacity_units as u64;

    let mut bought = allocate(sell_lots, capacity, FillPreference::Cheapest);
    if bought.is_empty() {
        return None;
    }

    // Only ask the destination for what the origin can actually supply.
    let sold = allocate(buy_lots, bought.quantity, FillPreference::Priciest);
    if sold.is_empty() {
        return None;
    }

    // Destination demand is the tighter bound: rebuy just what can be resold.
    if sold.quantity < bought.quantity {
        bought = allocate(sell_lots, sold.quantity, FillPreference::Cheapest);
    }
    if bought.is_empty() {
        return None;
    }

    let units = bought.quantity;
    let cost = bought.total_value;
    let revenue = sold.total_value;
    let profit = revenue - cost;
    if profit <= 0.0 {
        return None;
    }

    let (buy_min, buy_max) = bought.price_range()?;
    let (sell_min, sell_max) = sold.price_range()?;

    Some(RouteOpportunity {
        item_name: item.name.clone(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        units_moved: units,
        avg_buy_price: cost / units as f64,
        buy_min,
        buy_max,
        buy_orders: bought.lot_count(),
        avg_sell_price: revenue / units as f64,
        sell_min,
        sell_max,
        sell_orders: sold.lot_count(),
        revenue,
        cost,
        profit,
        volume_m3: item.unit_volume_m3 * units as f64,
    })
}

/// Sort routes by profit, highest first. Equal profits keep their scan order.
pub fn sort_routes(routes: &mut [RouteOpportunity]) {
    routes.sort_by(|a, b| {
        b.profit
            .partial_cmp(&a.profit)
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lots(raw: &[(f64, u64)]) -> Vec<OrderLot> {
        raw.iter().map(|&(p, q)| OrderLot::new(p, q)).collect()
    }

    fn widget(capacity: i64) -> CatalogItem {
        CatalogItem::new("Widget", 10.0, capacity)
    }

    #[test]
    fn demand_limited_route_rebuys_only_what_sells() {
        let sells = lots(&[(5.0, 50), (6.0, 60)]);
        let buys = lots(&[(9.0, 40)]);

        let route = evaluate_route(&widget(100), "jita", "amarr", &sells, &buys)
            .expect("route should be profitable");

        assert_eq!(route.units_moved, 40);
        assert_eq!(route.cost, 200.0);
        assert_eq!(route.revenue, 360.0);
        assert_eq!(route.profit, 160.0);
        assert_eq!(route.volume_m3, 400.0);
        assert_eq!(route.avg_buy_price, 5.0);
        assert_eq!(route.avg_sell_price, 9.0);
        assert_eq!((route.buy_min, route.buy_max), (5.0, 5.0));
        assert_eq!((route.sell_min, route.sell_max), (9.0, 9.0));
        assert_eq!((route.buy_orders, route.sell_orders), (1, 1));
        assert_eq!(route.origin, "jita");
        assert_eq!(route.destination, "amarr");
    }

    #[test]
    fn reconciled_buy_matches_sellable_units() {
        let sells = lots(&[(3.0, 10), (4.0, 10), (5.0, 10)]);
        let buys = lots(&[(7.0, 6), (6.5, 7)]);

        let route = evaluate_route(&widget(25), "a", "b", &sells, &buys).unwrap();

        assert_eq!(route.units_moved, 13);
        assert_eq!(route.cost, 3.0 * 10.0 + 4.0 * 3.0);
        assert_eq!(route.revenue, 7.0 * 6.0 + 6.5 * 7.0);
        assert_eq!(route.buy_orders, 2);
        assert_eq!(route.sell_orders, 2);
        assert_eq!((route.buy_min, route.buy_max), (3.0, 4.0));
        assert_eq!((route.sell_min, route.sell_max), (6.5, 7.0));
    }

    #[test]
    fn capacity_bounds_units_moved() {
        let sells = lots(&[(1.0, 1_000)]);
        let buys = lots(&[(2.0, 1_000)]);

        let route = evaluate_route(&widget(30), "a", "b", &sells, &buys).unwrap();

        assert_eq!(route.units_moved, 30);
        assert_eq!(route.profit, 30.0);
        assert_eq!(route.volume_m3, 300.0);
    }

    #[test]
    fn supply_bounds_units_moved() {
        let sells = lots(&[(1.0, 7)]);
        let buys = lots(&[(2.0, 1_000)]);

        let route = evaluate_route(&widget(100), "a", "b", &sells, &buys).unwrap();

        assert_eq!(route.units_moved, 7);
        assert_eq!(route.revenue, 14.0);
    }

    #[test]
    fn non_positive_capacity_yields_nothing() {
        let sells = lots(&[(1.0, 10)]);
        let buys = lots(&[(2.0, 10)]);

        assert!(evaluate_route(&widget(0), "a", "b", &sells, &buys).is_none());
        assert!(evaluate_route(&widget(-5), "a", "b", &sells, &buys).is_none());
    }

    #[test]
    fn empty_books_yield_nothing() {
        let some = lots(&[(1.0, 10)]);

        assert!(evaluate_route(&widget(10), "a", "b", &[], &some).is_none());
        assert!(evaluate_route(&widget(10), "a", "b", &some, &[]).is_none());
    }

    #[test]
    fn break_even_and_losing_routes_are_dropped() {
        let sells = lots(&[(10.0, 10)]);

        assert!(evaluate_route(&widget(10), "a", "b", &sells, &lots(&[(10.0, 10)])).is_none());
        assert!(evaluate_route(&widget(10), "a", "b", &sells, &lots(&[(9.0, 10)])).is_none());
    }

    #[test]
    fn more_capacity_unlocks_more_profit_on_flat_books() {
        let sells = lots(&[(5.0, 50), (6.0, 60)]);
        let buys = lots(&[(9.0, 40), (8.0, 40)]);

        let profits: Vec<f64> = [10, 40, 60, 80, 200]
            .iter()
            .map(|&cap| {
                evaluate_route(&widget(cap), "a", "b", &sells, &buys)
                    .map(|r| r.profit)
                    .unwrap_or(0.0)
            })
            .collect();

        assert!(profits.windows(2).all(|w| w[0] <= w[1]), "{profits:?}");
    }

    #[test]
    fn sort_orders_by_profit_descending() {
        let sells = lots(&[(1.0, 100)]);
        let mut routes: Vec<RouteOpportunity> = [2.0, 5.0, 3.0]
            .iter()
            .map(|&price| {
                evaluate_route(&widget(10), "a", "b", &sells, &lots(&[(price, 100)])).unwrap()
            })
            .collect();

        sort_routes(&mut routes);

        let profits: Vec<f64> = routes.iter().map(|r| r.profit).collect();
        assert_eq!(profits, vec![40.0, 20.0, 10.0]);
    }
}
