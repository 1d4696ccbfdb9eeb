//! Persistence layer for the remsearch engine
//!
//! The engine itself is pure and in-memory; the only thing that survives a
//! process restart is the recent-search history, stored as a small JSON
//! file on disk.

pub mod recent;

pub use recent::{RecentSearches, MAX_RECENT};
