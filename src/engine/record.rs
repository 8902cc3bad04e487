use serde::Deserialize;

use crate::engine::Transaction;

/// Wire representation of a transaction as stored in the input file.
/// Field names follow the JSON fixture format (camelCase); optional fields
/// are nullable in the file and `Option` here, never sentinel values.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InputRecord {
    pub amount: f64,
    pub sender_full_name: String,
    pub beneficiary_full_name: String,
    pub issue_id: Option<u32>,
    pub issue_solved: bool,
    pub issue_message: Option<String>,
}

impl InputRecord {
    pub fn to_transaction(&self) -> Transaction {
        Transaction {
            amount: self.amount,
            sender_full_name: self.sender_full_name.clone(),
            beneficiary_full_name: self.beneficiary_full_name.clone(),
            issue_id: self.issue_id,
            issue_solved: self.issue_solved,
            issue_message: self.issue_message.clone(),
        }
    }
}
