/// One financial transfer record with optional compliance-issue metadata.
/// Immutable once loaded into a `Ledger`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub amount: f64,
    pub sender_full_name: String,
    pub beneficiary_full_name: String,
    pub issue_id: Option<u32>,
    pub issue_solved: bool,
    pub issue_message: Option<String>,
}
