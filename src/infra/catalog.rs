//! Item catalog: names, unit volume and units per cargo run.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;
use tracing::debug;

use super::fields::{Column, FieldError};
use crate::domain::CatalogItem;

const NAME_COLUMN: &str = "item_name";
const VOLUME_COLUMN: &str = "m3";

/// Capacity column used by the stock catalog export (units per 465,000 m³ hold).
pub const DEFAULT_CAPACITY_COLUMN: &str = "items_in_465000";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Missing {}", path.display())]
    Missing { path: PathBuf },
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

struct CatalogColumns {
    name: Column,
    volume: Column,
    capacity: Column,
}

impl CatalogColumns {
    fn locate(headers: &StringRecord, capacity_column: &str) -> Self {
        Self {
            name: Column::locate(headers, NAME_COLUMN),
            volume: Column::locate(headers, VOLUME_COLUMN),
            capacity: Column::locate(headers, capacity_column),
        }
    }

    fn parse(&self, record: &StringRecord) -> Result<CatalogItem, FieldError> {
        let name = self.name.text(record)?;
        let volume = self.volume.real(record)?;
        // An export without the capacity column routes nothing rather than failing.
        let capacity = if self.capacity.is_present() {
            self.capacity.whole(record)?
        } else {
            0
        };
        Ok(CatalogItem::new(name, volume, capacity))
    }
}

/// Load the catalog, keeping file order.
///
/// The catalog is the one required input: a missing file is an error.
/// A name listed twice keeps its first position with the later attributes.
pub fn load_catalog(path: &Path, capacity_column: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::Missing {
            path: path.to_path_buf(),
        });
    }

    let read_error = |source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(read_error)?;
    let headers = reader.headers().map_err(read_error)?.clone();
    let columns = CatalogColumns::locate(&headers, capacity_column);
    if !columns.capacity.is_present() {
        debug!(column = capacity_column, "catalog has no capacity column");
    }

    let mut items: Vec<CatalogItem> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0_usize;

    for record in reader.records() {
        let Ok(record) = record else {
            skipped += 1;
            continue;
        };
        let item = match columns.parse(&record) {
            Ok(item) => item,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        match positions.get(&item.name).copied() {
            Some(index) => items[index] = item,
            None => {
                positions.insert(item.name.clone(), items.len());
                items.push(item);
            }
        }
    }

    debug!(path = %path.display(), items = items.len(), skipped, "loaded catalog");
    Ok(items)
}
