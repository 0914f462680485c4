//! File-system adapters: CSV inputs in, CSV report out.

pub mod catalog;
pub mod fields;
pub mod market;
pub mod order_book;
pub mod report;

pub use catalog::{load_catalog, CatalogError, DEFAULT_CAPACITY_COLUMN};
pub use market::{load_market, resolve_buy_file};
pub use order_book::{load_order_book, OrderBookError};
pub use report::{write_routes, write_routes_csv, ReportError};
