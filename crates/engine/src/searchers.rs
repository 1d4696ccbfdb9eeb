//! Entity searchers
//!
//! One pure function per entity class, all sharing the same shape: honor
//! the kind filter with an early return, match the query against the
//! entity's searchable text fields, fall back to expanded terms only when
//! no literal match exists, apply structured filters, then map survivors
//! to scored results.
//!
//! Entity data comes through the [`Catalog`] trait so a real backend can
//! replace the in-memory store without touching any matching or scoring
//! logic. Pages and palette commands are static application structure and
//! live in [`PageDirectory`] instead.

use crate::scorer::{page_command_points, relevance_score, ScoreContext};
use remsearch_core::{
    Client, Document, EntityKind, ExchangeRate, HelpArticle, PageCommand, PaletteCommand,
    Relevance, SearchFilters, SearchResult, Transaction,
};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

// ============================================================================
// Catalog
// ============================================================================

/// Read-only source of searchable entities
///
/// The engine only ever iterates; create/update/delete is out of scope.
pub trait Catalog: Send + Sync {
    fn clients(&self) -> &[Client];
    fn transactions(&self) -> &[Transaction];
    fn documents(&self) -> &[Document];
    fn help_articles(&self) -> &[HelpArticle];
    fn exchange_rates(&self) -> &[ExchangeRate];
}

/// Catalog backed by plain vectors
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    pub clients: Vec<Client>,
    pub transactions: Vec<Transaction>,
    pub documents: Vec<Document>,
    pub help_articles: Vec<HelpArticle>,
    pub exchange_rates: Vec<ExchangeRate>,
}

impl Catalog for InMemoryCatalog {
    fn clients(&self) -> &[Client] {
        &self.clients
    }
    fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
    fn documents(&self) -> &[Document] {
        &self.documents
    }
    fn help_articles(&self) -> &[HelpArticle] {
        &self.help_articles
    }
    fn exchange_rates(&self) -> &[ExchangeRate] {
        &self.exchange_rates
    }
}

// ============================================================================
// PageDirectory
// ============================================================================

/// Static application structure reachable through search
///
/// `Default` carries the full teller application: twenty pages and eight
/// palette commands.
#[derive(Debug, Clone)]
pub struct PageDirectory {
    pub pages: Vec<PageCommand>,
    pub palette: Vec<PaletteCommand>,
}

impl PageDirectory {
    /// An empty directory, for engines without navigation search
    pub fn empty() -> Self {
        PageDirectory {
            pages: Vec::new(),
            palette: Vec::new(),
        }
    }
}

fn page(id: &str, name: &str, description: &str, keywords: &[&str], url: &str, icon: &str) -> PageCommand {
    PageCommand {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        url: url.to_string(),
        icon: icon.to_string(),
    }
}

fn palette(id: &str, title: &str, description: &str, keywords: &[&str], action: &str, icon: &str) -> PaletteCommand {
    PaletteCommand {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        action: action.to_string(),
        icon: icon.to_string(),
    }
}

impl Default for PageDirectory {
    fn default() -> Self {
        PageDirectory {
            pages: vec![
                page(
                    "dashboard",
                    "Dashboard",
                    "View your main dashboard with transaction summary and quick actions",
                    &["home", "main", "overview", "summary", "start"],
                    "/dashboard",
                    "home",
                ),
                page(
                    "send-money",
                    "Send Money",
                    "Start a new money transfer transaction",
                    &["send", "transfer", "remit", "payment", "wire", "transmit", "new transaction", "send money", "money transfer", "make payment"],
                    "/send-money",
                    "send",
                ),
                page(
                    "transactions",
                    "Transactions",
                    "View and manage all transactions",
                    &["transfers", "payments", "history", "records", "all transactions"],
                    "/transactions",
                    "list",
                ),
                page(
                    "recent-transactions",
                    "Recent Transactions",
                    "View your most recent transactions",
                    &["latest", "new", "recent", "last", "history"],
                    "/transactions?filter=recent",
                    "clock",
                ),
                page(
                    "pending-transactions",
                    "Pending Transactions",
                    "View transactions that are still in progress",
                    &["processing", "waiting", "ongoing", "incomplete", "unfinished"],
                    "/transactions?filter=pending",
                    "loader",
                ),
                page(
                    "clients",
                    "Clients",
                    "View and manage all clients",
                    &["customers", "users", "people", "contacts", "all clients"],
                    "/clients",
                    "users",
                ),
                page(
                    "new-client",
                    "New Client",
                    "Register a new client in the system",
                    &["add client", "create client", "register client", "new customer"],
                    "/clients/new",
                    "user-plus",
                ),
                page(
                    "client-search",
                    "Search Clients",
                    "Search for specific clients",
                    &["find client", "locate customer", "search customer"],
                    "/clients?search=true",
                    "search",
                ),
                page(
                    "exchange-rates",
                    "Exchange Rates",
                    "View current exchange rates for all currencies",
                    &["forex", "currency", "rates", "conversion", "exchange"],
                    "/exchange-rates",
                    "refresh-cw",
                ),
                page(
                    "cash-register",
                    "Cash Register",
                    "Manage your cash register and balance",
                    &["cash", "drawer", "till", "money", "balance"],
                    "/cash-register",
                    "dollar-sign",
                ),
                page(
                    "deposit",
                    "Make Deposit",
                    "Process a new deposit transaction",
                    &["add funds", "cash in", "deposit money", "add money"],
                    "/deposit",
                    "arrow-down",
                ),
                page(
                    "withdrawal",
                    "Process Withdrawal",
                    "Process a new withdrawal transaction",
                    &["cash out", "take money", "withdraw funds", "get cash"],
                    "/withdrawal",
                    "arrow-up",
                ),
                page(
                    "documents",
                    "Documents",
                    "View and manage all documents",
                    &["files", "paperwork", "records", "uploads", "attachments"],
                    "/documents",
                    "file-text",
                ),
                page(
                    "reports",
                    "Reports",
                    "Generate and view financial reports",
                    &["analytics", "statistics", "summary", "data", "insights"],
                    "/reports",
                    "bar-chart",
                ),
                page(
                    "daily-report",
                    "Daily Report",
                    "View today's financial summary",
                    &["today", "daily summary", "day report", "current day"],
                    "/reports/daily",
                    "calendar",
                ),
                page(
                    "monthly-report",
                    "Monthly Report",
                    "View monthly financial summary",
                    &["month", "monthly summary", "month report", "current month"],
                    "/reports/monthly",
                    "calendar",
                ),
                page(
                    "settings",
                    "Settings",
                    "Manage application settings and preferences",
                    &["preferences", "options", "configuration", "setup"],
                    "/settings",
                    "settings",
                ),
                page(
                    "profile",
                    "My Profile",
                    "View and edit your profile information",
                    &["account", "personal", "my account", "user profile"],
                    "/profile",
                    "user",
                ),
                page(
                    "help-center",
                    "Help Center",
                    "Get help and support for using the application",
                    &["support", "assistance", "guide", "faq", "help"],
                    "/help",
                    "help-circle",
                ),
                page(
                    "notifications",
                    "Notifications",
                    "View your notifications and alerts",
                    &["alerts", "messages", "updates", "notices"],
                    "/notifications",
                    "bell",
                ),
            ],
            palette: vec![
                palette(
                    "new-transaction",
                    "New Transaction",
                    "Start a new money transfer",
                    &["send", "money", "transfer", "new", "transaction"],
                    "/transactions/new",
                    "send",
                ),
                palette(
                    "new-client",
                    "New Client",
                    "Register a new client",
                    &["add", "client", "register", "new", "customer"],
                    "/clients/new",
                    "user-plus",
                ),
                palette(
                    "reset-password",
                    "Reset Password",
                    "Reset your account password",
                    &["reset", "password", "change", "security"],
                    "/settings/security",
                    "lock",
                ),
                palette(
                    "exchange-rates",
                    "View Exchange Rates",
                    "Check current exchange rates",
                    &["exchange", "rates", "currency", "conversion"],
                    "/exchange-rates",
                    "refresh-cw",
                ),
                palette(
                    "cash-register",
                    "Open Cash Register",
                    "Open the cash register",
                    &["cash", "register", "drawer", "money"],
                    "/cash-register",
                    "dollar-sign",
                ),
                palette(
                    "help-center",
                    "Help Center",
                    "Visit the help center",
                    &["help", "support", "guide", "assistance"],
                    "/help",
                    "help-circle",
                ),
                palette(
                    "settings",
                    "Settings",
                    "Manage your settings",
                    &["settings", "preferences", "account", "profile"],
                    "/settings",
                    "settings",
                ),
                palette(
                    "logout",
                    "Log Out",
                    "Log out of your account",
                    &["logout", "signout", "exit", "leave"],
                    "/logout",
                    "log-out",
                ),
            ],
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn record_metadata<T: Serialize>(record: &T) -> HashMap<String, Value> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map.into_iter().collect(),
        _ => HashMap::new(),
    }
}

fn contains_any(fields: &[&str], term: &str) -> bool {
    fields.iter().any(|f| f.to_lowercase().contains(term))
}

fn expanded_match(fields: &[&str], expanded_terms: &[String]) -> bool {
    expanded_terms.iter().any(|term| contains_any(fields, term))
}

// ============================================================================
// Entity searchers
// ============================================================================

/// Search clients by name, email, and phone
pub fn search_clients(
    catalog: &dyn Catalog,
    ctx: &ScoreContext<'_>,
    filters: &SearchFilters,
    expanded_terms: &[String],
) -> Vec<SearchResult> {
    if !filters.includes_kind(EntityKind::Client) {
        return Vec::new();
    }

    catalog
        .clients()
        .iter()
        .filter_map(|client| {
            let fields = [client.name.as_str(), client.email.as_str(), client.phone.as_str()];
            let basic = contains_any(&fields, ctx.query);
            let matched = basic || expanded_match(&fields, expanded_terms);
            if !matched || !filters.includes_date(Some(client.last_activity)) {
                return None;
            }

            let result = SearchResult::new(
                &client.id,
                &client.name,
                EntityKind::Client,
                format!("/clients/{}", client.id),
            )
            .with_description(format!("{} • {}", client.email, client.phone))
            .with_icon("user")
            .with_timestamp(client.last_activity)
            .with_metadata(record_metadata(client));

            let expanded = !client.name.to_lowercase().contains(ctx.query);
            let score = relevance_score(&result, ctx, expanded);
            Some(result.with_relevance(score))
        })
        .collect()
}

/// Search transactions by sender, recipient, id, and amount
pub fn search_transactions(
    catalog: &dyn Catalog,
    ctx: &ScoreContext<'_>,
    filters: &SearchFilters,
    expanded_terms: &[String],
) -> Vec<SearchResult> {
    if !filters.includes_kind(EntityKind::Transaction) {
        return Vec::new();
    }

    catalog
        .transactions()
        .iter()
        .filter_map(|tx| {
            let amount = tx.amount.to_string();
            let basic_fields = [
                tx.sender.as_str(),
                tx.recipient.as_str(),
                tx.id.as_str(),
                amount.as_str(),
            ];
            let name_fields = [tx.sender.as_str(), tx.recipient.as_str()];
            let basic = contains_any(&basic_fields, ctx.query);
            let matched = basic || expanded_match(&name_fields, expanded_terms);
            let status_ok = filters.status.map_or(true, |s| s == tx.status);
            if !matched || !status_ok || !filters.includes_date(Some(tx.date)) {
                return None;
            }

            let result = SearchResult::new(
                &tx.id,
                format!("{} - {} to {}", tx.amount, tx.sender, tx.recipient),
                EntityKind::Transaction,
                format!("/transactions/{}", tx.id),
            )
            .with_description(format!("Status: {} • Date: {}", tx.status, tx.date))
            .with_icon("repeat")
            .with_timestamp(tx.date)
            .with_metadata(record_metadata(tx));

            let expanded = !contains_any(&name_fields, ctx.query);
            let score = relevance_score(&result, ctx, expanded);
            Some(result.with_relevance(score))
        })
        .collect()
}

/// Search documents by name and id
pub fn search_documents(
    catalog: &dyn Catalog,
    ctx: &ScoreContext<'_>,
    filters: &SearchFilters,
    expanded_terms: &[String],
) -> Vec<SearchResult> {
    if !filters.includes_kind(EntityKind::Document) {
        return Vec::new();
    }

    catalog
        .documents()
        .iter()
        .filter_map(|doc| {
            let fields = [doc.name.as_str(), doc.id.as_str()];
            let name_field = [doc.name.as_str()];
            let basic = contains_any(&fields, ctx.query);
            let matched = basic || expanded_match(&name_field, expanded_terms);
            let kind_ok = filters.document_kind.map_or(true, |k| k == doc.kind);
            if !matched || !kind_ok || !filters.includes_date(Some(doc.upload_date)) {
                return None;
            }

            let result = SearchResult::new(
                &doc.id,
                &doc.name,
                EntityKind::Document,
                format!("/clients/{}/documents/{}", doc.client_id, doc.id),
            )
            .with_description(format!("Type: {} • Uploaded: {}", doc.kind, doc.upload_date))
            .with_icon("file-text")
            .with_timestamp(doc.upload_date)
            .with_metadata(record_metadata(doc));

            let expanded = !doc.name.to_lowercase().contains(ctx.query);
            let score = relevance_score(&result, ctx, expanded);
            Some(result.with_relevance(score))
        })
        .collect()
}

/// Search help articles by title and content
pub fn search_help_articles(
    catalog: &dyn Catalog,
    ctx: &ScoreContext<'_>,
    filters: &SearchFilters,
    expanded_terms: &[String],
) -> Vec<SearchResult> {
    if !filters.includes_kind(EntityKind::Help) {
        return Vec::new();
    }

    catalog
        .help_articles()
        .iter()
        .filter_map(|article| {
            let fields = [article.title.as_str(), article.content.as_str()];
            let basic = contains_any(&fields, ctx.query);
            if !basic && !expanded_match(&fields, expanded_terms) {
                return None;
            }

            let preview: String = article.content.chars().take(100).collect();
            let result = SearchResult::new(
                &article.id,
                &article.title,
                EntityKind::Help,
                format!("/help/articles/{}", article.id),
            )
            .with_description(format!("{}...", preview))
            .with_icon("help-circle")
            .with_metadata(record_metadata(article));

            let expanded = !article.title.to_lowercase().contains(ctx.query);
            let score = relevance_score(&result, ctx, expanded);
            Some(result.with_relevance(score))
        })
        .collect()
}

/// Search exchange rates by currency codes and the "FROM/TO" pair
pub fn search_exchange_rates(
    catalog: &dyn Catalog,
    ctx: &ScoreContext<'_>,
    filters: &SearchFilters,
    expanded_terms: &[String],
) -> Vec<SearchResult> {
    if !filters.includes_kind(EntityKind::Exchange) {
        return Vec::new();
    }

    catalog
        .exchange_rates()
        .iter()
        .filter_map(|rate| {
            let pair = format!("{}/{}", rate.from_currency, rate.to_currency);
            let fields = [rate.from_currency.as_str(), rate.to_currency.as_str(), pair.as_str()];
            let code_fields = [rate.from_currency.as_str(), rate.to_currency.as_str()];
            let basic = contains_any(&fields, ctx.query);
            let matched = basic || expanded_match(&code_fields, expanded_terms);
            if !matched || !filters.includes_date(Some(rate.date)) {
                return None;
            }

            let result = SearchResult::new(
                &rate.id,
                &pair,
                EntityKind::Exchange,
                format!(
                    "/exchange-rates?from={}&to={}",
                    rate.from_currency, rate.to_currency
                ),
            )
            .with_description(format!("Rate: {} • Updated: {}", rate.rate, rate.date))
            .with_icon("refresh-cw")
            .with_timestamp(rate.date)
            .with_metadata(record_metadata(rate));

            let expanded = !contains_any(&code_fields, ctx.query);
            let score = relevance_score(&result, ctx, expanded);
            Some(result.with_relevance(score))
        })
        .collect()
}

// ============================================================================
// Navigation searchers
// ============================================================================

/// Search palette commands
///
/// Commands carry a fixed high score; kind filtering happens at the
/// orchestrator, not here.
pub fn search_commands(directory: &PageDirectory, query: &str) -> Vec<SearchResult> {
    if query.is_empty() {
        return Vec::new();
    }

    directory
        .palette
        .iter()
        .filter(|command| {
            command.title.to_lowercase().contains(query)
                || command.description.to_lowercase().contains(query)
                || command.keywords.iter().any(|k| k.contains(query))
        })
        .map(|command| {
            let mut metadata = HashMap::new();
            metadata.insert("action".to_string(), Value::from(command.action.clone()));
            metadata.insert(
                "keywords".to_string(),
                Value::from(command.keywords.clone()),
            );
            SearchResult::new(&command.id, &command.title, EntityKind::Command, "#")
                .with_description(&command.description)
                .with_icon(&command.icon)
                .with_relevance(Relevance::new(90))
                .with_metadata(metadata)
        })
        .collect()
}

/// Search application pages, best matches first
pub fn search_page_commands(directory: &PageDirectory, query: &str) -> Vec<SearchResult> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = directory
        .pages
        .iter()
        .filter_map(|p| {
            let points = page_command_points(p, query)?;
            let mut metadata = HashMap::new();
            metadata.insert("keywords".to_string(), Value::from(p.keywords.clone()));
            metadata.insert("direct_navigation".to_string(), Value::from(true));
            Some(
                SearchResult::new(&p.id, &p.name, EntityKind::Page, &p.url)
                    .with_description(&p.description)
                    .with_icon(&p.icon)
                    .with_relevance(Relevance::from_points(points))
                    .with_metadata(metadata),
            )
        })
        .collect();

    results.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::demo_catalog;
    use chrono::NaiveDate;
    use remsearch_core::{DateRange, DocumentKind, TransactionStatus};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn ctx<'a>(query: &'a str) -> ScoreContext<'a> {
        ScoreContext::new(query, date("2025-06-01"))
    }

    // ========================================
    // Kind filter early return
    // ========================================

    #[test]
    fn test_kind_filter_excludes_other_searchers() {
        let catalog = demo_catalog();
        let filters = SearchFilters::new().with_kind(EntityKind::Transaction);
        assert!(search_clients(&catalog, &ctx("john"), &filters, &[]).is_empty());
        assert!(search_documents(&catalog, &ctx("passport"), &filters, &[]).is_empty());
        assert!(!search_transactions(&catalog, &ctx("john"), &filters, &[]).is_empty());
    }

    // ========================================
    // Clients
    // ========================================

    #[test]
    fn test_clients_match_name_email_phone() {
        let catalog = demo_catalog();
        let filters = SearchFilters::new();

        let by_name = search_clients(&catalog, &ctx("john"), &filters, &[]);
        let names: Vec<&str> = by_name.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "Robert Johnson"]);

        let by_email = search_clients(&catalog, &ctx("sarah@example.com"), &filters, &[]);
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].title, "Sarah Williams");

        let by_phone = search_clients(&catalog, &ctx("876-5432"), &filters, &[]);
        assert_eq!(by_phone.len(), 1);
        assert_eq!(by_phone[0].title, "Michael Brown");
    }

    #[test]
    fn test_client_result_shape() {
        let catalog = demo_catalog();
        let results = search_clients(&catalog, &ctx("jane"), &SearchFilters::new(), &[]);
        let jane = &results[0];
        assert_eq!(jane.id, "client2");
        assert_eq!(jane.url, "/clients/client2");
        assert_eq!(jane.icon, "user");
        assert_eq!(
            jane.description.as_deref(),
            Some("jane@example.com • +1 (555) 987-6543")
        );
        assert_eq!(jane.metadata["email"], "jane@example.com");
    }

    #[test]
    fn test_client_expanded_only_when_no_basic_match() {
        let catalog = demo_catalog();
        let filters = SearchFilters::new();
        let expanded = vec!["jane".to_string()];

        // No basic match for "zzz", expanded term still finds Jane
        let results = search_clients(&catalog, &ctx("zzz"), &filters, &expanded);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Jane Smith");
        // Expanded match: (50 + 5 expanded-adjusted) — title has no
        // literal "zzz", so the 0.8 multiplier applied: 50*0.8+5 = 45
        assert_eq!(results[0].relevance.get(), 45);
    }

    #[test]
    fn test_client_date_range_filter() {
        let catalog = demo_catalog();
        let filters = SearchFilters::new()
            .with_date_range(DateRange::new(date("2025-05-01"), date("2025-05-01")));
        let results = search_clients(&catalog, &ctx("o"), &filters, &[]);
        // Only John Doe has activity exactly on 2025-05-01
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "John Doe");
    }

    // ========================================
    // Transactions
    // ========================================

    #[test]
    fn test_transactions_match_amount_and_id() {
        let catalog = demo_catalog();
        let filters = SearchFilters::new();

        let by_amount = search_transactions(&catalog, &ctx("1200"), &filters, &[]);
        assert_eq!(by_amount.len(), 1);
        assert_eq!(by_amount[0].id, "tx4");

        let by_id = search_transactions(&catalog, &ctx("tx3"), &filters, &[]);
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].title, "750 - Robert Johnson to Sarah Williams");
    }

    #[test]
    fn test_transaction_status_filter() {
        let catalog = demo_catalog();
        let filters = SearchFilters::new().with_status(TransactionStatus::Completed);
        let results = search_transactions(&catalog, &ctx("john"), &filters, &[]);
        assert!(results
            .iter()
            .all(|r| r.metadata["status"] == "completed"));
        // tx2 is pending even though Robert Johnson is its recipient
        assert!(!results.iter().any(|r| r.id == "tx2"));
    }

    #[test]
    fn test_transaction_description_format() {
        let catalog = demo_catalog();
        let results = search_transactions(&catalog, &ctx("tx1"), &SearchFilters::new(), &[]);
        assert_eq!(
            results[0].description.as_deref(),
            Some("Status: completed • Date: 2025-05-01")
        );
        assert_eq!(results[0].icon, "repeat");
    }

    // ========================================
    // Documents
    // ========================================

    #[test]
    fn test_documents_match_and_filter_by_kind() {
        let catalog = demo_catalog();
        let all = search_documents(&catalog, &ctx(".pdf"), &SearchFilters::new(), &[]);
        assert_eq!(all.len(), 4);

        let filters = SearchFilters::new().with_document_kind(DocumentKind::Identification);
        let ids_only = search_documents(&catalog, &ctx(".pdf"), &filters, &[]);
        assert_eq!(ids_only.len(), 1);
        assert_eq!(ids_only[0].title, "Passport.pdf");
        assert_eq!(ids_only[0].url, "/clients/client1/documents/doc1");
    }

    // ========================================
    // Help articles
    // ========================================

    #[test]
    fn test_help_articles_match_content() {
        let catalog = demo_catalog();
        let results = search_help_articles(&catalog, &ctx("kyc"), &SearchFilters::new(), &[]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Understanding KYC requirements");
        assert!(results[0].description.as_deref().unwrap().ends_with("..."));
        assert!(results[0].timestamp.is_none());
    }

    // ========================================
    // Exchange rates
    // ========================================

    #[test]
    fn test_exchange_rates_match_pair() {
        let catalog = demo_catalog();
        let results =
            search_exchange_rates(&catalog, &ctx("usd/eur"), &SearchFilters::new(), &[]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "USD/EUR");
        assert_eq!(results[0].url, "/exchange-rates?from=USD&to=EUR");
        assert_eq!(
            results[0].description.as_deref(),
            Some("Rate: 0.85 • Updated: 2025-05-09")
        );
    }

    #[test]
    fn test_exchange_rates_match_single_code() {
        let catalog = demo_catalog();
        let results = search_exchange_rates(&catalog, &ctx("usd"), &SearchFilters::new(), &[]);
        assert_eq!(results.len(), 5);
    }

    // ========================================
    // Palette commands and pages
    // ========================================

    #[test]
    fn test_commands_fixed_score() {
        let directory = PageDirectory::default();
        let results = search_commands(&directory, "password");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "reset-password");
        assert_eq!(results[0].relevance.get(), 90);
        assert_eq!(results[0].url, "#");
        assert_eq!(results[0].metadata["action"], "/settings/security");
    }

    #[test]
    fn test_commands_empty_query() {
        let directory = PageDirectory::default();
        assert!(search_commands(&directory, "").is_empty());
    }

    #[test]
    fn test_page_commands_sorted_best_first() {
        let directory = PageDirectory::default();
        let results = search_page_commands(&directory, "transactions");
        assert!(!results.is_empty());
        assert_eq!(results[0].id, "transactions");
        for pair in results.windows(2) {
            assert!(pair[0].relevance >= pair[1].relevance);
        }
    }

    #[test]
    fn test_page_commands_metadata() {
        let directory = PageDirectory::default();
        let results = search_page_commands(&directory, "dashboard");
        assert_eq!(results[0].metadata["direct_navigation"], true);
        assert_eq!(results[0].icon, "home");
    }
}
