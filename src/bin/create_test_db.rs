use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Date, macros::date};

use budget_tracker::{
    NewGoal, NewTransaction, TransactionType, create_goal, create_transaction, initialize_db,
};

/// A utility for creating a test database for the REST API server of budget_tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path
        .extension()
        .is_none_or(|extension| extension.is_empty())
    {
        eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
        exit(1);
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test transactions...");
    let transactions = [
        (TransactionType::Income, "Salary", 4200.0, date!(2025 - 01 - 01), Some("January pay")),
        (TransactionType::Expense, "Rent", 1600.0, date!(2025 - 01 - 02), None),
        (TransactionType::Expense, "Groceries", 143.27, date!(2025 - 01 - 05), Some("Weekly shop")),
        (TransactionType::Expense, "Transport", 52.0, date!(2025 - 01 - 07), Some("Bus pass")),
        (TransactionType::Expense, "Groceries", 98.6, date!(2025 - 01 - 12), None),
        (TransactionType::Expense, "Dining", 64.5, date!(2025 - 01 - 18), Some("Birthday dinner")),
        (TransactionType::Income, "Freelance", 750.0, date!(2025 - 01 - 20), None),
    ];

    for (transaction_type, category, amount, date, description) in transactions {
        create_transaction(
            &NewTransaction {
                transaction_type,
                category: category.to_owned(),
                amount,
                date,
                description: description.map(str::to_owned),
            },
            &conn,
        )?;
    }

    println!("Creating test goals...");
    let goals: [(&str, f64, f64, Date); 3] = [
        ("Emergency fund", 5000.0, 1250.0, date!(2025 - 12 - 31)),
        ("New laptop", 1800.0, 400.0, date!(2025 - 06 - 30)),
        ("Holiday", 3000.0, 0.0, date!(2026 - 03 - 01)),
    ];

    for (name, target_amount, current_amount, deadline) in goals {
        create_goal(
            &NewGoal {
                name: name.to_owned(),
                target_amount,
                current_amount,
                deadline,
            },
            &conn,
        )?;
    }

    println!("Success!");

    Ok(())
}
