//! Betledger - wager settlement and track-record bookkeeping.
//!
//! Records model picks as wagers with deterministic identities, grades
//! them exactly once when games go final, and folds the settled history
//! into the published track record.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Core types: wagers, odds, grades, outcomes, stats
//! - [`sizing`] - Grade-by-odds-band unit sizing table
//! - [`store`] - Wager persistence (SQLite via Diesel, plus in-memory)
//! - [`settle`] - Recording and grading services
//! - [`stats`] - Track-record aggregation and its read cache
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use betledger::sizing::UnitSizingTable;
//! use betledger::store::MemoryWagerStore;
//! use betledger::settle::BetRecorder;
//!
//! let store = MemoryWagerStore::new();
//! let sizing = UnitSizingTable::recommended();
//! let recorder = BetRecorder::new(&store, &sizing);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod settle;
pub mod sizing;
pub mod stats;
pub mod store;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
