//! Core types for unified search
//!
//! This module defines the foundational types used throughout the system:
//! - EntityKind: the entity classes a result can belong to
//! - Relevance: result score clamped to [0, 100]
//! - SearchResult: individual search result with score and metadata
//! - SearchFilters / DateRange: filter criteria built by the caller
//! - Entity records (Client, Transaction, Document, HelpArticle, ExchangeRate)
//! - Navigation records (PageCommand, PaletteCommand)

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// EntityKind
// ============================================================================

/// The class of entity a search result points at
///
/// `Suggestion` is synthetic: "did you mean" results produced by the
/// orchestrator, never by an entity searcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Client record
    Client,
    /// Money transfer transaction
    Transaction,
    /// Uploaded KYC/compliance document
    Document,
    /// Help center article
    Help,
    /// Currency exchange rate
    Exchange,
    /// Palette command (runs an action)
    Command,
    /// Application page (navigation target)
    Page,
    /// Synthetic spelling suggestion
    Suggestion,
}

impl EntityKind {
    /// All kinds an entity searcher can produce (excludes Suggestion)
    pub fn searchable() -> &'static [EntityKind] {
        &[
            EntityKind::Client,
            EntityKind::Transaction,
            EntityKind::Document,
            EntityKind::Help,
            EntityKind::Exchange,
            EntityKind::Command,
            EntityKind::Page,
        ]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Client => "client",
            EntityKind::Transaction => "transaction",
            EntityKind::Document => "document",
            EntityKind::Help => "help",
            EntityKind::Exchange => "exchange",
            EntityKind::Command => "command",
            EntityKind::Page => "page",
            EntityKind::Suggestion => "suggestion",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "client" => Ok(EntityKind::Client),
            "transaction" => Ok(EntityKind::Transaction),
            "document" => Ok(EntityKind::Document),
            "help" => Ok(EntityKind::Help),
            "exchange" => Ok(EntityKind::Exchange),
            "command" => Ok(EntityKind::Command),
            "page" => Ok(EntityKind::Page),
            "suggestion" => Ok(EntityKind::Suggestion),
            other => Err(format!("unknown entity kind: {}", other)),
        }
    }
}

// ============================================================================
// Relevance
// ============================================================================

/// Relevance score on a single documented scale, clamped to [0, 100]
///
/// All searchers produce this type, so the final descending sort in the
/// orchestrator compares like with like. Page-command point totals (an
/// unbounded tier scale) are clamped into this range at the searcher
/// boundary via [`Relevance::from_points`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Relevance(u8);

impl Relevance {
    /// Minimum relevance
    pub const MIN: Relevance = Relevance(0);
    /// Maximum relevance
    pub const MAX: Relevance = Relevance(100);

    /// Create a relevance score, clamping to 100
    pub fn new(value: u8) -> Self {
        Relevance(value.min(100))
    }

    /// Clamp an arbitrary point total into the [0, 100] scale
    pub fn from_points(points: i32) -> Self {
        Relevance(points.clamp(0, 100) as u8)
    }

    /// The score as an integer in [0, 100]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Relevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// SearchResult
// ============================================================================

/// A single search result
///
/// Produced fresh per query, never persisted. Immutable once the
/// orchestrator returns it.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Entity id (or synthetic id for suggestions)
    pub id: String,

    /// Display title
    pub title: String,

    /// Optional display description
    pub description: Option<String>,

    /// Entity class
    pub kind: EntityKind,

    /// Navigation target ("#" for commands and suggestions)
    pub url: String,

    /// Icon name for the UI layer
    pub icon: String,

    /// Entity date, used for recency scoring and display
    pub timestamp: Option<NaiveDate>,

    /// Relevance score, always within [0, 100]
    pub relevance: Relevance,

    /// Open metadata map carried through to the caller
    pub metadata: HashMap<String, serde_json::Value>,
}

impl SearchResult {
    /// Create a new SearchResult with a zero score and no metadata
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: EntityKind,
        url: impl Into<String>,
    ) -> Self {
        SearchResult {
            id: id.into(),
            title: title.into(),
            description: None,
            kind,
            url: url.into(),
            icon: String::new(),
            timestamp: None,
            relevance: Relevance::MIN,
            metadata: HashMap::new(),
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Builder: set timestamp
    pub fn with_timestamp(mut self, date: NaiveDate) -> Self {
        self.timestamp = Some(date);
        self
    }

    /// Builder: set relevance score
    pub fn with_relevance(mut self, relevance: Relevance) -> Self {
        self.relevance = relevance;
        self
    }

    /// Builder: set the metadata map
    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }
}

// ============================================================================
// Filters
// ============================================================================

/// Inclusive date range filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    /// Earliest date to include
    pub from: Option<NaiveDate>,
    /// Latest date to include
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Create a range with both bounds
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Builder: set lower bound
    pub fn since(from: NaiveDate) -> Self {
        DateRange {
            from: Some(from),
            to: None,
        }
    }

    /// Builder: set upper bound
    pub fn until(to: NaiveDate) -> Self {
        DateRange {
            from: None,
            to: Some(to),
        }
    }

    /// Check whether a date falls within the range (bounds inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

/// Filter criteria for a search, constructed by the caller
///
/// Consumed read-only by the searchers. `entity_kind` is a hard exclude:
/// searchers for other kinds return nothing at all.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    /// Restrict results to one entity kind
    pub entity_kind: Option<EntityKind>,

    /// Restrict dated entities to this range
    pub date_range: Option<DateRange>,

    /// Restrict transactions to this status
    pub status: Option<TransactionStatus>,

    /// Restrict documents to this kind
    pub document_kind: Option<DocumentKind>,
}

impl SearchFilters {
    /// Create empty filters (match everything)
    pub fn new() -> Self {
        SearchFilters::default()
    }

    /// Builder: restrict to one entity kind
    pub fn with_kind(mut self, kind: EntityKind) -> Self {
        self.entity_kind = Some(kind);
        self
    }

    /// Builder: set date range
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Builder: set transaction status
    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Builder: set document kind
    pub fn with_document_kind(mut self, kind: DocumentKind) -> Self {
        self.document_kind = Some(kind);
        self
    }

    /// Check if a given entity kind passes the kind filter
    pub fn includes_kind(&self, kind: EntityKind) -> bool {
        match self.entity_kind {
            Some(wanted) => wanted == kind,
            None => true,
        }
    }

    /// Check if a date passes the date-range filter
    ///
    /// Entities without a date always pass.
    pub fn includes_date(&self, date: Option<NaiveDate>) -> bool {
        match (self.date_range.as_ref(), date) {
            (Some(range), Some(date)) => range.contains(date),
            _ => true,
        }
    }
}

// ============================================================================
// Entity Records
// ============================================================================

/// Status of a money transfer transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Transfer settled
    Completed,
    /// Transfer in progress
    Pending,
    /// Transfer declined or errored
    Failed,
    /// Transfer stopped before settlement
    Cancelled,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(TransactionStatus::Completed),
            "pending" => Ok(TransactionStatus::Pending),
            "failed" => Ok(TransactionStatus::Failed),
            "cancelled" => Ok(TransactionStatus::Cancelled),
            other => Err(format!("unknown transaction status: {}", other)),
        }
    }
}

/// Category of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Identity documents (passport, ID card)
    Identification,
    /// Proof of address
    Address,
    /// Financial records (bank statements)
    Financial,
    /// Employment verification
    Employment,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DocumentKind::Identification => "identification",
            DocumentKind::Address => "address",
            DocumentKind::Financial => "financial",
            DocumentKind::Employment => "employment",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "identification" => Ok(DocumentKind::Identification),
            "address" => Ok(DocumentKind::Address),
            "financial" => Ok(DocumentKind::Financial),
            "employment" => Ok(DocumentKind::Employment),
            other => Err(format!("unknown document kind: {}", other)),
        }
    }
}

/// A client of the remittance business
#[derive(Debug, Clone, Serialize)]
pub struct Client {
    /// Stable id
    pub id: String,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Date of the client's most recent transaction
    pub last_transaction: NaiveDate,
    /// Date of the client's most recent activity of any kind
    pub last_activity: NaiveDate,
}

/// A money transfer transaction
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    /// Stable id
    pub id: String,
    /// Amount in the sending currency's whole units
    pub amount: i64,
    /// Sender name
    pub sender: String,
    /// Recipient name
    pub recipient: String,
    /// Transaction date
    pub date: NaiveDate,
    /// Settlement status
    pub status: TransactionStatus,
}

/// An uploaded KYC/compliance document
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Stable id
    pub id: String,
    /// File name
    pub name: String,
    /// Owning client id
    pub client_id: String,
    /// Upload date
    pub upload_date: NaiveDate,
    /// Document category
    pub kind: DocumentKind,
}

/// A help center article
#[derive(Debug, Clone, Serialize)]
pub struct HelpArticle {
    /// Stable id
    pub id: String,
    /// Article title
    pub title: String,
    /// Full article body
    pub content: String,
}

/// A currency exchange rate quote
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeRate {
    /// Stable id
    pub id: String,
    /// Source currency code
    pub from_currency: String,
    /// Target currency code
    pub to_currency: String,
    /// Units of target currency per unit of source currency
    pub rate: f64,
    /// Quote date
    pub date: NaiveDate,
}

// ============================================================================
// Navigation Records
// ============================================================================

/// An application page reachable through search
#[derive(Debug, Clone, Serialize)]
pub struct PageCommand {
    /// Stable id
    pub id: String,
    /// Page name
    pub name: String,
    /// Page description
    pub description: String,
    /// Alternative search keywords
    pub keywords: Vec<String>,
    /// Navigation target
    pub url: String,
    /// Icon name for the UI layer
    pub icon: String,
}

/// A palette command that triggers an action
#[derive(Debug, Clone, Serialize)]
pub struct PaletteCommand {
    /// Stable id
    pub id: String,
    /// Command title
    pub title: String,
    /// Command description
    pub description: String,
    /// Alternative search keywords
    pub keywords: Vec<String>,
    /// Action id dispatched by the caller
    pub action: String,
    /// Icon name for the UI layer
    pub icon: String,
}

// ============================================================================
// Tests
// ============================================================================
