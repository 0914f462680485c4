//! Terminal highlight styles keyed by cargo volume.

use crate::config::ScanConfig;

const RESET: &str = "\x1b[0m";

/// Cargo volume class of a run, used to pick the line highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeBand {
    /// Below the small-load threshold.
    Small,
    /// Between the small and medium thresholds, both inclusive.
    Medium,
    /// Above the medium threshold.
    Large,
}

/// Small/medium cut-offs in m³.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeThresholds {
    pub small_m3: f64,
    pub medium_m3: f64,
}

impl Default for VolumeThresholds {
    fn default() -> Self {
        Self::from(&ScanConfig::default())
    }
}

impl From<&ScanConfig> for VolumeThresholds {
    fn from(config: &ScanConfig) -> Self {
        Self {
            small_m3: config.small_load_m3,
            medium_m3: config.medium_load_m3,
        }
    }
}

impl VolumeThresholds {
    pub fn classify(&self, volume_m3: f64) -> VolumeBand {
        if volume_m3 < self.small_m3 {
            VolumeBand::Small
        } else if volume_m3 <= self.medium_m3 {
            VolumeBand::Medium
        } else {
            VolumeBand::Large
        }
    }
}

impl VolumeBand {
    /// Opening escape sequence, `None` for plain output.
    pub fn style(&self) -> Option<&'static str> {
        match self {
            Self::Small => Some("\x1b[45m"),     // purple background
            Self::Medium => Some("\x1b[30;43m"), // black on orange
            Self::Large => None,
        }
    }

    pub fn paint(&self, line: &str) -> String {
        match self.style() {
            Some(style) => format!("{style}{line}{RESET}"),
            None => line.to_string(),
        }
    }
}
