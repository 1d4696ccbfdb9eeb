//! Demonstration catalog
//!
//! A small fixed dataset standing in for a real backend, used by the CLI
//! demo mode and the integration tests.

use crate::searchers::InMemoryCatalog;
use chrono::NaiveDate;
use remsearch_core::{
    Client, Document, DocumentKind, ExchangeRate, HelpArticle, Transaction, TransactionStatus,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("fixture dates are valid")
}

fn client(id: &str, name: &str, email: &str, phone: &str, last: &str) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        last_transaction: date(last),
        last_activity: date(last),
    }
}

fn tx(id: &str, amount: i64, sender: &str, recipient: &str, on: &str, status: TransactionStatus) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount,
        sender: sender.to_string(),
        recipient: recipient.to_string(),
        date: date(on),
        status,
    }
}

fn doc(id: &str, name: &str, client_id: &str, uploaded: &str, kind: DocumentKind) -> Document {
    Document {
        id: id.to_string(),
        name: name.to_string(),
        client_id: client_id.to_string(),
        upload_date: date(uploaded),
        kind,
    }
}

fn article(id: &str, title: &str, content: &str) -> HelpArticle {
    HelpArticle {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
    }
}

fn rate(id: &str, from: &str, to: &str, value: f64, on: &str) -> ExchangeRate {
    ExchangeRate {
        id: id.to_string(),
        from_currency: from.to_string(),
        to_currency: to.to_string(),
        rate: value,
        date: date(on),
    }
}

/// The standard demo dataset: five entities of each class
pub fn demo_catalog() -> InMemoryCatalog {
    InMemoryCatalog {
        clients: vec![
            client("client1", "John Doe", "john@example.com", "+1 (555) 123-4567", "2025-05-01"),
            client("client2", "Jane Smith", "jane@example.com", "+1 (555) 987-6543", "2025-05-02"),
            client("client3", "Robert Johnson", "robert@example.com", "+1 (555) 456-7890", "2025-05-03"),
            client("client4", "Sarah Williams", "sarah@example.com", "+1 (555) 234-5678", "2025-05-04"),
            client("client5", "Michael Brown", "michael@example.com", "+1 (555) 876-5432", "2025-05-05"),
        ],
        transactions: vec![
            tx("tx1", 1000, "John Doe", "Jane Smith", "2025-05-01", TransactionStatus::Completed),
            tx("tx2", 500, "Jane Smith", "Robert Johnson", "2025-05-02", TransactionStatus::Pending),
            tx("tx3", 750, "Robert Johnson", "Sarah Williams", "2025-05-03", TransactionStatus::Completed),
            tx("tx4", 1200, "Sarah Williams", "Michael Brown", "2025-05-04", TransactionStatus::Failed),
            tx("tx5", 300, "Michael Brown", "John Doe", "2025-05-05", TransactionStatus::Completed),
        ],
        documents: vec![
            doc("doc1", "Passport.pdf", "client1", "2025-04-15", DocumentKind::Identification),
            doc("doc2", "ID Card.jpg", "client2", "2025-04-20", DocumentKind::Identification),
            doc("doc3", "Proof of Address.pdf", "client3", "2025-04-25", DocumentKind::Address),
            doc("doc4", "Bank Statement.pdf", "client4", "2025-04-30", DocumentKind::Financial),
            doc("doc5", "Employment Verification.pdf", "client5", "2025-05-05", DocumentKind::Employment),
        ],
        help_articles: vec![
            article(
                "help1",
                "How to send money",
                "Step-by-step guide to sending money through the teller system...",
            ),
            article(
                "help2",
                "Reset your password",
                "Instructions for resetting your password if you have forgotten it...",
            ),
            article(
                "help3",
                "Understanding KYC requirements",
                "Explanation of Know Your Customer (KYC) requirements and how to comply...",
            ),
            article(
                "help4",
                "Transaction limits",
                "Information about transaction limits for different types of transfers...",
            ),
            article(
                "help5",
                "Exchange rates explained",
                "How exchange rates work and how they affect international transfers...",
            ),
        ],
        exchange_rates: vec![
            rate("rate1", "USD", "EUR", 0.85, "2025-05-09"),
            rate("rate2", "USD", "GBP", 0.75, "2025-05-09"),
            rate("rate3", "USD", "JPY", 110.25, "2025-05-09"),
            rate("rate4", "USD", "CAD", 1.25, "2025-05-09"),
            rate("rate5", "USD", "AUD", 1.35, "2025-05-09"),
        ],
    }
}
