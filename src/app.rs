//! Full scan pipeline: catalog and books in, sorted report out.

use std::io::{self, Write};

use thiserror::Error;
use tracing::info;

use crate::config::ScanConfig;
use crate::domain::{scan_routes, sort_routes, RouteOpportunity};
use crate::infra::{
    load_catalog, load_market, write_routes_csv, CatalogError, OrderBookError, ReportError,
};
use crate::ui::{print_scan_start, print_top_routes, ConsoleStyle};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    OrderBook(#[from] OrderBookError),
    #[error("failed to write report: {0}")]
    Report(#[from] ReportError),
    #[error("failed to print summary: {0}")]
    Console(#[from] io::Error),
}

/// Run one scan and return the routes in report order.
///
/// Nothing is written when the catalog is missing.
pub fn run(config: &ScanConfig, out: &mut impl Write) -> Result<Vec<RouteOpportunity>, ScanError> {
    let catalog = load_catalog(&config.catalog_path(), &config.capacity_column)?;
    let market = load_market(config)?;

    print_scan_start(out, catalog.len())?;
    let mut routes = scan_routes(&catalog, &market);
    sort_routes(&mut routes);
    info!(
        items = catalog.len(),
        stations = market.stations().len(),
        routes = routes.len(),
        "scan complete"
    );

    let output_path = config.output_path();
    write_routes_csv(&output_path, &routes)?;
    info!(path = %output_path.display(), "wrote report");

    print_top_routes(out, &output_path, &routes, &ConsoleStyle::from(config))?;
    Ok(routes)
}
