//! Order matching and route evaluation live here.

pub mod allocation;
pub mod entities;
pub mod scan;
pub mod trade_route;

pub use allocation::{allocate, FillPreference};
pub use entities::{Allocation, CatalogItem, Fill, OrderBook, OrderLot, Station};
pub use scan::{scan_routes, MarketSnapshot};
pub use trade_route::{evaluate_route, sort_routes, RouteOpportunity};
