use anyhow::Result;
use simple_logger::SimpleLogger;
use transaction_insights::engine::Ledger;
use std::path::PathBuf;
use std::{env, ffi::OsString};

const DEFAULT_TRANSACTIONS_FILE: &str = "transactions.json";

fn main() -> Result<()> {
    SimpleLogger::new().env().init()?;

    log::debug!("Application started");

    log::debug!("Loading transactions: Starting");
    let ledger = load_ledger()?;
    log::debug!("Loading transactions: Done ({} records)", ledger.len());

    log::debug!("Writing report to stdout: Started");
    write_report(&ledger);
    log::debug!("Writing report to stdout: Done");

    log::debug!("Application finished");

    Ok(())
}

fn get_first_arg() -> Option<OsString> {
    env::args_os().nth(1)
}

fn load_ledger() -> Result<Ledger> {
    let path = match get_first_arg() {
        Some(arg) => PathBuf::from(arg),
        None => PathBuf::from(DEFAULT_TRANSACTIONS_FILE),
    };
    log::debug!("Resolved transactions filepath: {path:?}");

    Ok(Ledger::from_json_file(&path)?)
}

fn write_report(ledger: &Ledger) {
    if ledger.is_empty() {
        println!("No transactions loaded");
        return;
    }

    println!("Total transaction amount: {:.2}", ledger.total_transaction_amount());
    println!("Max transaction amount: {:.2}", ledger.max_transaction_amount());
    println!("Unique clients: {}", ledger.count_unique_clients());

    let mut unsolved: Vec<u32> = ledger.unsolved_issue_ids().into_iter().collect();
    unsolved.sort_unstable();
    println!("Unsolved issue ids: {unsolved:?}");

    println!("Solved issue messages:");
    for message in ledger.all_solved_issue_messages() {
        println!("  - {message}");
    }

    println!("Top 3 transactions by amount:");
    for tx in ledger.top3_transactions_by_amount() {
        println!(
            "  {:.2} {} -> {}",
            tx.amount, tx.sender_full_name, tx.beneficiary_full_name
        );
    }

    match ledger.top_sender() {
        Some(sender) => println!("Top sender: {sender}"),
        None => println!("Top sender: no result"),
    }
}
