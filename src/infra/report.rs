//! Result file: every opportunity, one CSV row each.

use std::fs;
use std::io;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use thiserror::Error;

use crate::domain::RouteOpportunity;

pub const REPORT_HEADER: [&str; 16] = [
    "item_name",
    "origin",
    "destination",
    "units_moved",
    "avg_buy_price",
    "avg_sell_price",
    "buy_min",
    "buy_max",
    "sell_min",
    "sell_max",
    "buy_orders",
    "sell_orders",
    "revenue",
    "cost",
    "profit",
    "volume_m3",
];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

fn report_row(route: &RouteOpportunity) -> [String; 16] {
    [
        route.item_name.clone(),
        route.origin.clone(),
        route.destination.clone(),
        route.units_moved.to_string(),
        money(route.avg_buy_price),
        money(route.avg_sell_price),
        money(route.buy_min),
        money(route.buy_max),
        money(route.sell_min),
        money(route.sell_max),
        route.buy_orders.to_string(),
        route.sell_orders.to_string(),
        money(route.revenue),
        money(route.cost),
        money(route.profit),
        money(route.volume_m3),
    ]
}

/// Write `routes` as CSV in the order given. Records end in CRLF.
pub fn write_routes<W: io::Write>(out: W, routes: &[RouteOpportunity]) -> Result<(), ReportError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(out);
    writer.write_record(REPORT_HEADER)?;
    for route in routes {
        writer.write_record(report_row(route))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `routes` to `path`, creating parent directories as needed.
pub fn write_routes_csv(path: &Path, routes: &[RouteOpportunity]) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    write_routes(io::BufWriter::new(file), routes)
}
