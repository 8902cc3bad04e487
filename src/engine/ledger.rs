use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

use crate::engine::{InputRecord, Transaction};

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Failed to read transactions file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to deserialize transactions: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Holds the loaded transactions and answers analytical queries over them.
/// The collection is fixed at construction; every query takes `&self` and
/// none of them reorders or mutates the shared collection, so a `Ledger`
/// can be shared read-only across threads without locking.
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Ledger { transactions }
    }

    /// Loads a ledger from a JSON file holding an array of transaction
    /// records. A missing or malformed file fails construction; no partial
    /// state is kept.
    pub fn from_json_file(path: &Path) -> Result<Self, LedgerError> {
        log::debug!("Opening transactions file: {path:?}");
        let file = File::open(path)?;

        log::debug!("Deserialising records from {path:?}");
        let records: Vec<InputRecord> = serde_json::from_reader(BufReader::new(file))?;

        let transactions = records.iter().map(InputRecord::to_transaction).collect();
        Ok(Ledger::new(transactions))
    }

    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of the amounts of all transactions. Empty ledger -> 0.0.
    pub fn total_transaction_amount(&self) -> f64 {
        self.transactions.iter().map(|tx| tx.amount).sum()
    }

    /// Sum of the amounts of all transactions sent by the given client.
    /// Matching is exact and case-sensitive; no match -> 0.0.
    pub fn total_transaction_amount_sent_by(&self, sender_full_name: &str) -> f64 {
        self.transactions
            .iter()
            .filter(|tx| tx.sender_full_name == sender_full_name)
            .map(|tx| tx.amount)
            .sum()
    }

    /// Highest transaction amount, or 0.0 for an empty ledger.
    pub fn max_transaction_amount(&self) -> f64 {
        self.transactions
            .iter()
            .map(|tx| tx.amount)
            .fold(0.0, f64::max)
    }

    /// Number of distinct names appearing as sender or beneficiary.
    pub fn count_unique_clients(&self) -> usize {
        let mut clients: HashSet<&str> = HashSet::new();
        for tx in &self.transactions {
            clients.insert(&tx.sender_full_name);
            clients.insert(&tx.beneficiary_full_name);
        }
        clients.len()
    }

    /// Whether the client (as sender or beneficiary) appears in at least one
    /// transaction whose issue is not solved. The check is on the literal
    /// `issue_solved` flag: a record with no issue id but `issue_solved`
    /// false still counts.
    pub fn has_open_compliance_issues(&self, client_full_name: &str) -> bool {
        self.transactions.iter().any(|tx| {
            (tx.sender_full_name == client_full_name
                || tx.beneficiary_full_name == client_full_name)
                && !tx.issue_solved
        })
    }

    /// All transactions whose beneficiary exactly equals the given name.
    /// The beneficiary name must be non-empty to match; an unmatched name
    /// yields an empty vec.
    pub fn transactions_by_beneficiary_name(&self, beneficiary_name: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| {
                !tx.beneficiary_full_name.is_empty()
                    && tx.beneficiary_full_name == beneficiary_name
            })
            .collect()
    }

    /// Identifiers of all open compliance issues, deduplicated.
    pub fn unsolved_issue_ids(&self) -> HashSet<u32> {
        self.transactions
            .iter()
            .filter(|tx| !tx.issue_solved)
            .filter_map(|tx| tx.issue_id)
            .collect()
    }

    /// Messages of all solved issues, in original transaction order,
    /// duplicates preserved.
    pub fn all_solved_issue_messages(&self) -> Vec<String> {
        self.transactions
            .iter()
            .filter(|tx| tx.issue_solved)
            .filter_map(|tx| tx.issue_message.clone())
            .collect()
    }

    /// The up-to-3 transactions with the highest amounts, descending.
    /// Sorts a copy, never the shared collection, so queries that depend on
    /// original order stay correct afterwards. The sort is stable: ties keep
    /// their original relative order. Fewer than 3 records -> all of them.
    pub fn top3_transactions_by_amount(&self) -> Vec<Transaction> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        sorted.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        sorted.into_iter().take(3).cloned().collect()
    }

    /// The sender with the greatest total sent amount, or `None` for an
    /// empty ledger. Candidates are examined in first-encounter order over
    /// the original sequence with a strictly-greater update rule, so ties go
    /// to the first-encountered sender and an all-zero ledger yields `None`.
    pub fn top_sender(&self) -> Option<String> {
        let mut sent_by_sender: HashMap<&str, f64> = HashMap::new();
        for tx in &self.transactions {
            *sent_by_sender.entry(&tx.sender_full_name).or_insert(0.0) += tx.amount;
        }

        let mut top: Option<&str> = None;
        let mut top_total = 0.0;
        let mut seen: HashSet<&str> = HashSet::new();
        for tx in &self.transactions {
            let sender: &str = &tx.sender_full_name;
            if !seen.insert(sender) {
                continue;
            }
            let total = sent_by_sender.get(sender).copied().unwrap_or(0.0);
            if total > top_total {
                top_total = total;
                top = Some(sender);
            }
        }

        top.map(String::from)
    }
}
