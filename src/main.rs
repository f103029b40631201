use std::io::{stderr, stdout};
use std::process::exit;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;

use financial_assistant::config::{Command, Config, USAGE};
use financial_assistant::{CsvStore, Ledger, RecordStore, ResetOutcome, Transaction};

const NO_DATA_MESSAGE: &str = "No transactions available to view.";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            exit(1);
        }
    };

    setup_logging(config.log_level);

    let store = CsvStore::new(&config.data_path);

    match config.command {
        Command::Add { description, category, amount, date } => {
            let transaction = Transaction::new(&description, &category, &amount, &date)?;
            Ledger::open(store)?.add(&transaction)?;
            println!("Transaction added successfully!");
        }
        Command::Table => {
            let ledger = Ledger::open(store)?;

            if ledger.is_empty() {
                eprintln!("{NO_DATA_MESSAGE}");
            } else {
                write_table_to_stdout(&ledger)?;
            }
        }
        Command::Chart => {
            let ledger = Ledger::open(store)?;

            if ledger.is_empty() {
                eprintln!("{NO_DATA_MESSAGE}");
            } else {
                write_chart_to_stdout(&ledger)?;
            }
        }
        //NOTE: No load here, a file that no longer parses can still be reset
        Command::Reset => match store.clear()? {
            ResetOutcome::Cleared => println!("All transactions have been reset."),
            ResetOutcome::NothingToClear => println!("No transaction data found to reset.")
        }
    }

    Ok(())
}

/// Diagnostics share stderr with user notices; stdout is reserved for CSV views.
fn setup_logging(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(stderr)
        .init();
}

fn write_table_to_stdout(ledger: &Ledger<CsvStore>) -> Result<()> {
    let mut writer = csv::Writer::from_writer(stdout().lock());

    for transaction in ledger.transactions() {
        writer.serialize(transaction)?;
    }

    writer.flush()?;

    Ok(())
}

fn write_chart_to_stdout(ledger: &Ledger<CsvStore>) -> Result<()> {
    let totals = ledger.category_totals();
    let mut writer = csv::Writer::from_writer(stdout().lock());

    writer.write_record(["category", "total"])?;

    for (category, total) in totals.iter() {
        info!("Category: {category}, Total Spending: {total}");
        writer.write_record([category, total.to_string().as_str()])?;
    }

    writer.flush()?;

    for raw in totals.skipped() {
        eprintln!("Skipping invalid amount value: {raw}");
    }

    Ok(())
}
