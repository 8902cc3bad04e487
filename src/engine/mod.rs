mod ledger;
mod record;
mod transaction;

pub use ledger::{Ledger, LedgerError};
pub use record::InputRecord;
pub use transaction::Transaction;
