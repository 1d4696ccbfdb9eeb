//! Core types for the remsearch engine
//!
//! This crate defines the shared vocabulary of the workspace: search result
//! and filter types, entity records, the relevance scale, the error type,
//! and the lexicon tables that drive query enhancement. It has no engine
//! logic of its own.

pub mod error;
pub mod lexicon;
pub mod types;

pub use error::{Error, Result};
pub use lexicon::{domain_lexicon, Lexicon, LexiconBuilder};
pub use types::{
    Client, DateRange, Document, DocumentKind, EntityKind, ExchangeRate, HelpArticle,
    PageCommand, PaletteCommand, Relevance, SearchFilters, SearchResult, Transaction,
    TransactionStatus,
};
