//! Assembles the per-station order books from the data directory.

use std::path::PathBuf;

use tracing::{debug, info};

use super::order_book::{load_order_book, OrderBookError};
use crate::config::ScanConfig;
use crate::domain::MarketSnapshot;

/// Buy-order file for `station`: the primary name, or the configured alias
/// when only the alias exists.
pub fn resolve_buy_file(config: &ScanConfig, station: &str) -> PathBuf {
    let primary = config.buy_file(station);
    if primary.exists() {
        return primary;
    }
    match config.buy_file_alias(station) {
        Some(alias) if alias.exists() => {
            debug!(station, alias = %alias.display(), "using alternate buy file");
            alias
        }
        _ => primary,
    }
}

/// Read sell and buy books for every configured station.
pub fn load_market(config: &ScanConfig) -> Result<MarketSnapshot, OrderBookError> {
    let mut market = MarketSnapshot::new();

    for station in &config.stations {
        let sells = load_order_book(&config.sell_file(station))?;
        let buys = load_order_book(&resolve_buy_file(config, station))?;
        debug!(
            station = %station,
            sell_lots = sells.lot_count(),
            buy_lots = buys.lot_count(),
            "loaded station books"
        );
        market.insert_station(station.clone(), sells, buys);
    }

    info!(stations = market.stations().len(), "market snapshot ready");
    Ok(market)
}
