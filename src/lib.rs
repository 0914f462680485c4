//! Finds profitable one-hop trade runs between market hubs from order-book
//! snapshots and an item catalog.

pub mod app;
pub mod config;
pub mod domain;
pub mod infra;
pub mod ui;
pub mod util;
