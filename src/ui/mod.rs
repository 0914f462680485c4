pub mod console;
pub mod theme;

pub use console::{format_isk, format_route_line, print_scan_start, print_top_routes, ConsoleStyle};
pub use theme::{VolumeBand, VolumeThresholds};
