//! Human-readable run summary on stdout.

use std::io::{self, Write};
use std::path::Path;

use super::theme::VolumeThresholds;
use crate::config::ScanConfig;
use crate::domain::RouteOpportunity;

/// Two decimals with comma thousands separators, e.g. `1,234,567.89`.
pub fn format_isk(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value.is_sign_negative() && value != 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

pub fn format_route_line(route: &RouteOpportunity) -> String {
    format!(
        "- {} -> {} | {}: {} units ({:.2} m3) | \
         buy {} (range {:.2}-{:.2}, {} orders) -> \
         sell {} (range {:.2}-{:.2}, {} orders) | \
         profit {}",
        route.origin,
        route.destination,
        route.item_name,
        route.units_moved,
        route.volume_m3,
        format_isk(route.avg_buy_price),
        route.buy_min,
        route.buy_max,
        route.buy_orders,
        format_isk(route.avg_sell_price),
        route.sell_min,
        route.sell_max,
        route.sell_orders,
        format_isk(route.profit),
    )
}

/// Console presentation settings.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleStyle {
    pub top_n: usize,
    pub thresholds: VolumeThresholds,
    pub color: bool,
}

impl Default for ConsoleStyle {
    fn default() -> Self {
        Self::from(&ScanConfig::default())
    }
}

impl From<&ScanConfig> for ConsoleStyle {
    fn from(config: &ScanConfig) -> Self {
        Self {
            top_n: config.top_n,
            thresholds: VolumeThresholds::from(config),
            color: config.color,
        }
    }
}

pub fn print_scan_start(out: &mut impl Write, item_count: usize) -> io::Result<()> {
    writeln!(out, "Loaded {item_count} items. Scanning station pairs...")
}

/// Print the output location and the best `top_n` routes, banded by volume.
/// `routes` must already be sorted.
pub fn print_top_routes(
    out: &mut impl Write,
    output_path: &Path,
    routes: &[RouteOpportunity],
    style: &ConsoleStyle,
) -> io::Result<()> {
    writeln!(out, "Done. Wrote {}", output_path.display())?;
    writeln!(out, "Top {} opportunities:", style.top_n)?;

    for route in routes.iter().take(style.top_n) {
        let line = format_route_line(route);
        if style.color {
            let band = style.thresholds.classify(route.volume_m3);
            writeln!(out, "{}", band.paint(&line))?;
        } else {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
