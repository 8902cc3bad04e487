pub mod engine;

pub use engine::{InputRecord, Ledger, LedgerError, Transaction};
