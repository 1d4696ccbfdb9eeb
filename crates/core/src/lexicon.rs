//! Lexicon: the vocabulary tables behind query enhancement
//!
//! This module provides:
//! - Lexicon: immutable synonym / misspelling / autocomplete tables
//! - LexiconBuilder for explicit construction
//! - `domain_lexicon()` carrying the remittance-domain vocabulary
//!
//! The lexicon is constructed once and passed into the engine (no module
//! globals), so the search pipeline stays pure and testable. Entries keep
//! insertion order: correction priority and tie-breaking depend on
//! dictionary order, and the tables are small enough for linear scans.

// ============================================================================
// Lexicon
// ============================================================================

/// Immutable vocabulary tables for query enhancement
///
/// Three tables:
/// - `synonyms`: canonical term → alternative terms
/// - `misspellings`: canonical term → known misspellings (the keys double
///   as the correction dictionary)
/// - `autocomplete`: two-letter prefix → suggestion phrases
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    synonyms: Vec<(String, Vec<String>)>,
    misspellings: Vec<(String, Vec<String>)>,
    autocomplete: Vec<(String, Vec<String>)>,
}

impl Lexicon {
    /// Start building an empty lexicon
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder {
            lexicon: Lexicon {
                synonyms: vec![],
                misspellings: vec![],
                autocomplete: vec![],
            },
        }
    }

    /// Synonym table entries in dictionary order
    pub fn synonym_entries(&self) -> &[(String, Vec<String>)] {
        &self.synonyms
    }

    /// Misspelling table entries in dictionary order
    pub fn misspelling_entries(&self) -> &[(String, Vec<String>)] {
        &self.misspellings
    }

    /// Autocomplete table entries in dictionary order
    pub fn autocomplete_entries(&self) -> &[(String, Vec<String>)] {
        &self.autocomplete
    }

    /// Synonyms registered for a canonical term
    pub fn synonyms_of(&self, term: &str) -> Option<&[String]> {
        self.synonyms
            .iter()
            .find(|(canonical, _)| canonical == term)
            .map(|(_, synonyms)| synonyms.as_slice())
    }

    /// Whether a word is a canonical dictionary term
    pub fn is_dictionary_term(&self, word: &str) -> bool {
        self.misspellings.iter().any(|(canonical, _)| canonical == word)
    }

    /// Canonical dictionary terms in dictionary order
    pub fn dictionary_terms(&self) -> impl Iterator<Item = &str> {
        self.misspellings.iter().map(|(canonical, _)| canonical.as_str())
    }

    /// The canonical term a known misspelling maps to, if any
    pub fn misspelling_canonical(&self, word: &str) -> Option<&str> {
        self.misspellings
            .iter()
            .find(|(_, misspellings)| misspellings.iter().any(|m| m == word))
            .map(|(canonical, _)| canonical.as_str())
    }

    /// The canonical term a synonym belongs to, with the other synonyms
    pub fn synonym_canonical(&self, word: &str) -> Option<(&str, &[String])> {
        self.synonyms
            .iter()
            .find(|(_, synonyms)| synonyms.iter().any(|s| s == word))
            .map(|(canonical, synonyms)| (canonical.as_str(), synonyms.as_slice()))
    }
}

// ============================================================================
// LexiconBuilder
// ============================================================================

/// Builder for [`Lexicon`]
pub struct LexiconBuilder {
    lexicon: Lexicon,
}

impl LexiconBuilder {
    /// Register synonyms for a canonical term
    pub fn synonym(mut self, term: &str, synonyms: &[&str]) -> Self {
        self.lexicon
            .synonyms
            .push((term.to_string(), to_strings(synonyms)));
        self
    }

    /// Register known misspellings of a canonical term
    pub fn misspelling(mut self, term: &str, misspellings: &[&str]) -> Self {
        self.lexicon
            .misspellings
            .push((term.to_string(), to_strings(misspellings)));
        self
    }

    /// Register autocomplete phrases for a two-letter prefix
    pub fn autocomplete(mut self, prefix: &str, phrases: &[&str]) -> Self {
        self.lexicon
            .autocomplete
            .push((prefix.to_string(), to_strings(phrases)));
        self
    }

    /// Finish building
    pub fn build(self) -> Lexicon {
        self.lexicon
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Domain vocabulary
// ============================================================================

/// The remittance-domain vocabulary used by the teller application
pub fn domain_lexicon() -> Lexicon {
    Lexicon::builder()
        // Transaction terms
        .synonym("transaction", &["transfer", "payment", "remittance", "wire", "send"])
        .synonym("send", &["transfer", "remit", "wire", "transmit"])
        .synonym("receive", &["collect", "accept", "get", "withdraw"])
        .synonym("money", &["funds", "cash", "currency", "payment"])
        .synonym("payment", &["transaction", "transfer", "remittance"])
        .synonym("deposit", &["lodge", "credit", "pay in"])
        .synonym("withdraw", &["take out", "cash out", "pull out"])
        // Status terms
        .synonym("pending", &["processing", "in progress", "ongoing", "awaiting"])
        .synonym("completed", &["finished", "done", "processed", "successful"])
        .synonym("failed", &["unsuccessful", "declined", "rejected", "error"])
        .synonym("cancelled", &["stopped", "terminated", "aborted"])
        // Client terms
        .synonym("client", &["customer", "user", "sender", "recipient", "beneficiary"])
        .synonym("customer", &["client", "user", "patron"])
        .synonym("sender", &["remitter", "originator", "payer"])
        .synonym("recipient", &["beneficiary", "receiver", "payee", "destination"])
        // Document terms
        .synonym("document", &["id", "identification", "paperwork", "file"])
        .synonym("identification", &["id", "identity", "proof", "document"])
        .synonym("passport", &["travel document", "id"])
        .synonym("license", &["permit", "id", "card"])
        // Currency terms
        .synonym("exchange", &["forex", "conversion", "rate", "fx"])
        .synonym("rate", &["price", "value", "exchange", "conversion"])
        .synonym("currency", &["money", "tender", "exchange", "denomination"])
        // Help terms
        .synonym("help", &["support", "assistance", "guide", "aid", "faq"])
        .synonym("guide", &["tutorial", "instructions", "help", "manual"])
        // Misspelling dictionary: the keys are the canonical terms the
        // fuzzy corrector matches against.
        .misspelling("transfer", &["tranfer", "transfor", "transfar", "transfare", "transfur", "xfer", "trnsfer", "trnsfr"])
        .misspelling("money", &["monay", "mony", "monny", "moni"])
        .misspelling("payment", &["payement", "payemnt", "paiment", "paymet", "paymnt"])
        .misspelling("exchange", &["exchane", "exchnage", "exhange", "exchenge"])
        .misspelling("rate", &["raet", "reat", "rte", "rat"])
        .misspelling("transaction", &["transacton", "transction", "transaccion", "transation", "tx", "txn", "trans"])
        .misspelling("account", &["acount", "accont", "acct", "acnt", "acc"])
        .misspelling("balance", &["balence", "ballance", "balanse", "bal"])
        .misspelling("deposit", &["deposite", "depositt", "depost", "dposit", "dep"])
        .misspelling("withdraw", &["withdrawl", "whitdraw", "withdrow", "widraw", "wdraw"])
        .misspelling("client", &["clint", "cllent", "cleint", "clyent", "clnt"])
        .misspelling("customer", &["custmer", "cusomer", "custommer", "costomer", "custr"])
        .misspelling("remittance", &["remitance", "remitence", "remitanse", "remit", "rmt"])
        .misspelling("currency", &["currancy", "curency", "curreny", "curr", "ccy"])
        .misspelling("dashboard", &["dashbord", "dashbaord", "dashbrd", "dasbord", "dash"])
        .misspelling("settings", &["setings", "settigs", "settngs", "settingz", "config"])
        .misspelling("profile", &["profil", "profle", "proifle", "profyle", "prof"])
        .misspelling("notification", &["notificaton", "notifcation", "notificasion", "notifiction", "notif"])
        .misspelling("document", &["documnt", "docment", "documant", "documente", "doc", "docs"])
        .misspelling("verification", &["verifcation", "verificaton", "verificasion", "verifaction", "verif"])
        .misspelling("identity", &["identty", "identy", "identiti", "idantity", "ident"])
        .misspelling("password", &["pasword", "passwrd", "passward", "passord", "pwd", "passwd"])
        .misspelling("security", &["securty", "secrity", "securiti", "securety"])
        .misspelling("authentication", &["autentication", "authentcation", "authetication", "authantication", "auth"])
        .misspelling("recipient", &["recipent", "recepient", "recipiant", "recepiant", "recip"])
        .misspelling("sender", &["sendr", "sander", "sendor", "sendur"])
        .misspelling("beneficiary", &["beneficary", "benificiary", "beneficiry", "benef", "bene"])
        .misspelling("fee", &["fea", "fie", "fei"])
        .misspelling("commission", &["comission", "comision", "commision", "commisson", "cmsn"])
        .misspelling("history", &["histori", "histry", "histary", "hystory", "hist"])
        .misspelling("statement", &["statment", "statament", "statemant", "stmt"])
        .misspelling("report", &["reprt", "repotr", "reprot", "reoprt", "rpt"])
        .misspelling("compliance", &["complience", "complianse", "complians", "compl"])
        .misspelling("regulation", &["regulaton", "regulasion", "regilation"])
        .misspelling("send", &["snd", "sned", "sende"])
        .misspelling("receive", &["recieve", "receve", "recive", "reciev", "rcv"])
        .misspelling("help", &["halp", "hlp", "hellp"])
        .misspelling("support", &["suport", "suprt", "supprt", "supp"])
        .misspelling("search", &["serch", "srch", "sarch", "sreach"])
        .misspelling("status", &["staus", "statuss", "statu"])
        .misspelling("pending", &["pendng", "pnding", "pendin"])
        .misspelling("completed", &["completd", "complted", "compltd"])
        .misspelling("failed", &["faild", "faled", "failld"])
        .misspelling("approve", &["aprove", "approv", "aprv"])
        .misspelling("reject", &["rejct", "rejectt", "rjct"])
        .misspelling("login", &["logn", "loign", "signin"])
        .misspelling("logout", &["logot", "logut", "signout"])
        // Autocomplete prefix table
        .autocomplete("tr", &["transaction", "transfer", "tracking", "transit"])
        .autocomplete("se", &["send money", "sender", "settings", "security"])
        .autocomplete("pa", &["payment", "passport", "past transactions", "pay out"])
        .autocomplete("re", &["receive money", "recipient", "remittance", "recent transactions"])
        .autocomplete("ex", &["exchange rate", "export", "external transfer", "expiry date"])
        .autocomplete("cu", &["currency", "customer", "current rate", "custom fee"])
        .autocomplete("do", &["document", "download receipt", "domestic transfer", "dormant account"])
        .autocomplete("id", &["identification", "id card", "id verification", "id number"])
        .autocomplete("ba", &["balance", "bank account", "batch transfer", "back office"])
        .autocomplete("wi", &["withdraw", "wire transfer", "withholding tax", "window"])
        .autocomplete("ca", &["cash", "card", "cancel transaction", "calculate fee"])
        .autocomplete("mo", &["money", "mobile number", "monthly statement", "more options"])
        .autocomplete("he", &["help", "help center", "help desk", "help article"])
        .autocomplete("su", &["support", "summary", "successful transaction", "suspend account"])
        .autocomplete("cl", &["client", "close account", "clear form", "client details"])
        .build()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_empty() {
        let lexicon = Lexicon::builder().build();
        assert!(lexicon.synonym_entries().is_empty());
        assert!(lexicon.misspelling_entries().is_empty());
        assert!(lexicon.autocomplete_entries().is_empty());
    }

    #[test]
    fn test_builder_tables() {
        let lexicon = Lexicon::builder()
            .synonym("send", &["transfer", "wire"])
            .misspelling("send", &["snd"])
            .autocomplete("se", &["send money"])
            .build();

        assert_eq!(lexicon.synonyms_of("send").unwrap(), &["transfer", "wire"]);
        assert!(lexicon.is_dictionary_term("send"));
        assert_eq!(lexicon.misspelling_canonical("snd"), Some("send"));
        assert_eq!(lexicon.autocomplete_entries().len(), 1);
    }

    #[test]
    fn test_synonym_canonical() {
        let lexicon = Lexicon::builder()
            .synonym("exchange", &["forex", "fx"])
            .build();

        let (canonical, synonyms) = lexicon.synonym_canonical("forex").unwrap();
        assert_eq!(canonical, "exchange");
        assert_eq!(synonyms, &["forex", "fx"]);
        assert!(lexicon.synonym_canonical("exchange").is_none());
    }

    #[test]
    fn test_domain_lexicon_tables_present() {
        let lexicon = domain_lexicon();
        assert!(lexicon.is_dictionary_term("transfer"));
        assert!(lexicon.is_dictionary_term("remittance"));
        assert_eq!(lexicon.misspelling_canonical("tranfer"), Some("transfer"));
        assert!(lexicon.synonyms_of("client").unwrap().contains(&"customer".to_string()));
        assert!(lexicon
            .autocomplete_entries()
            .iter()
            .any(|(prefix, _)| prefix == "tr"));
    }

    #[test]
    fn test_domain_lexicon_order_is_stable() {
        let a = domain_lexicon();
        let b = domain_lexicon();
        let terms_a: Vec<&str> = a.dictionary_terms().collect();
        let terms_b: Vec<&str> = b.dictionary_terms().collect();
        assert_eq!(terms_a, terms_b);
        assert_eq!(terms_a[0], "transfer");
    }
}
