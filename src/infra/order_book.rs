//! Loading per-station order files into [`OrderBook`]s.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;
use tracing::debug;

use super::fields::{ensure_positive, Column, FieldError};
use crate::domain::{OrderBook, OrderLot};

const ITEM_COLUMN: &str = "item_name";
const QUANTITY_COLUMN: &str = "quantity";
const PRICE_COLUMN: &str = "price";

#[derive(Debug, Error)]
pub enum OrderBookError {
    #[error("failed to read order file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

struct OrderColumns {
    item: Column,
    quantity: Column,
    price: Column,
}

impl OrderColumns {
    fn locate(headers: &StringRecord) -> Self {
        Self {
            item: Column::locate(headers, ITEM_COLUMN),
            quantity: Column::locate(headers, QUANTITY_COLUMN),
            price: Column::locate(headers, PRICE_COLUMN),
        }
    }

    fn parse(&self, record: &StringRecord) -> Result<(String, OrderLot), FieldError> {
        let item = self.item.text(record)?;
        let quantity = self.quantity.whole(record)?;
        ensure_positive(&self.quantity, quantity as f64)?;
        let price = self.price.real(record)?;
        ensure_positive(&self.price, price)?;
        Ok((item, OrderLot::new(price, quantity as u64)))
    }
}

/// Load an order file. A file that does not exist is an empty book.
///
/// Records that are malformed or fail validation are skipped.
pub fn load_order_book(path: &Path) -> Result<OrderBook, OrderBookError> {
    if !path.exists() {
        debug!(path = %path.display(), "no order file, treating as empty book");
        return Ok(OrderBook::new());
    }

    let read_error = |source| OrderBookError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(read_error)?;
    let headers = reader.headers().map_err(read_error)?.clone();
    let columns = OrderColumns::locate(&headers);

    let mut book = OrderBook::new();
    let mut skipped = 0_usize;
    for record in reader.records() {
        let Ok(record) = record else {
            skipped += 1;
            continue;
        };
        match columns.parse(&record) {
            Ok((item, lot)) => book.push(item, lot),
            Err(_) => skipped += 1,
        }
    }

    debug!(
        path = %path.display(),
        items = book.item_count(),
        lots = book.lot_count(),
        skipped,
        "loaded order file"
    );
    Ok(book)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn groups_lots_by_item_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "jita_sell.csv",
            "item_name,quantity,price\nTritanium,100,4.5\nPyerite,20,9\nTritanium,50.8,4.2\n",
        );

        let book = load_order_book(&path).unwrap();

        assert_eq!(
            book.lots("Tritanium"),
            &[OrderLot::new(4.5, 100), OrderLot::new(4.2, 50)]
        );
        assert_eq!(book.lots("Pyerite"), &[OrderLot::new(9.0, 20)]);
        assert_eq!(book.item_count(), 2);
    }

    #[test]
    fn skips_invalid_records() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "amarr_buy.csv",
            "item_name,quantity,price\n\
             ,10,1\n\
             Blank,0,1\n\
             Negative,-3,1\n\
             Free,10,0\n\
             Garbage,ten,1\n\
             Short,5\n\
             Fraction,0.9,1\n\
             Good,3,2.5\n",
        );

        let book = load_order_book(&path).unwrap();

        assert_eq!(book.item_count(), 1);
        assert_eq!(book.lots("Good"), &[OrderLot::new(2.5, 3)]);
    }

    #[test]
    fn columns_are_found_by_header_name() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "hek_sell.csv",
            "price,station,item_name,quantity\n7.25,Hek VIII,Mexallon,12\n",
        );

        let book = load_order_book(&path).unwrap();

        assert_eq!(book.lots("Mexallon"), &[OrderLot::new(7.25, 12)]);
    }

    #[test]
    fn missing_required_column_admits_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "rens_sell.csv", "item_name,quantity\nIsogen,5\n");

        assert!(load_order_book(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_empty_book() {
        let dir = TempDir::new().unwrap();
        let book = load_order_book(&dir.path().join("nowhere_sell.csv")).unwrap();
        assert!(book.is_empty());
    }
}
