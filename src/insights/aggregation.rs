//! Transaction aggregation for the insights endpoints.
//!
//! Totals are computed over every stored transaction. No rounding is applied.

use std::{cmp::Ordering, collections::HashMap};

use serde::{Deserialize, Serialize};

use crate::transaction::{Transaction, TransactionType};

/// Income and expense totals across all transactions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of all income amounts.
    pub total_income: f64,
    /// The sum of all expense amounts.
    pub total_expenses: f64,
    /// Income minus expenses, negative when more was spent than earned.
    pub net_balance: f64,
}

/// The total spent in a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    /// The category exactly as it was stored.
    pub category: String,
    /// The sum of the expense amounts in the category.
    pub total_amount: f64,
}

/// Sums income and expenses separately.
///
/// # Returns
/// A [Summary] where `net_balance` is `total_income - total_expenses`, or all
/// zeros if there are no transactions.
pub(super) fn summarize(transactions: &[Transaction]) -> Summary {
    let (total_income, total_expenses) = transactions.iter().fold(
        (0.0, 0.0),
        |(income, expenses), transaction| match transaction.transaction_type {
            TransactionType::Income => (income + transaction.amount, expenses),
            TransactionType::Expense => (income, expenses + transaction.amount),
        },
    );

    Summary {
        total_income,
        total_expenses,
        net_balance: total_income - total_expenses,
    }
}

/// Groups expenses by category and sums the amounts in each group.
///
/// Categories are compared exactly, so "Food" and "food" are separate groups.
/// Income is ignored, as are categories whose total is not positive.
///
/// # Returns
/// The category totals, largest first. Categories with equal totals are
/// sorted by name.
pub(super) fn spending_by_category(transactions: &[Transaction]) -> Vec<CategorySpending> {
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for transaction in transactions
        .iter()
        .filter(|transaction| transaction.transaction_type == TransactionType::Expense)
    {
        *totals.entry(transaction.category.as_str()).or_insert(0.0) += transaction.amount;
    }

    let mut spending: Vec<CategorySpending> = totals
        .into_iter()
        .filter(|(_, total)| *total > 0.0)
        .map(|(category, total_amount)| CategorySpending {
            category: category.to_owned(),
            total_amount,
        })
        .collect();

    spending.sort_by(|a, b| {
        b.total_amount
            .partial_cmp(&a.total_amount)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });

    spending
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::transaction::{Transaction, TransactionType};

    use super::{CategorySpending, Summary, spending_by_category, summarize};

    fn transaction(transaction_type: TransactionType, category: &str, amount: f64) -> Transaction {
        Transaction {
            id: 0,
            transaction_type,
            category: category.to_owned(),
            amount,
            date: date!(2025 - 01 - 15),
            description: None,
        }
    }

    fn expense(category: &str, amount: f64) -> Transaction {
        transaction(TransactionType::Expense, category, amount)
    }

    #[test]
    fn summarize_splits_income_and_expenses() {
        let transactions = [
            transaction(TransactionType::Income, "Salary", 100.0),
            expense("Food", 40.0),
            expense("Transport", 10.0),
        ];

        assert_eq!(
            summarize(&transactions),
            Summary {
                total_income: 100.0,
                total_expenses: 50.0,
                net_balance: 50.0,
            }
        );
    }

    #[test]
    fn summarize_empty_is_zero() {
        assert_eq!(summarize(&[]), Summary::default());
    }

    #[test]
    fn net_balance_can_be_negative() {
        let transactions = [
            transaction(TransactionType::Income, "Salary", 10.0),
            expense("Rent", 25.0),
        ];

        assert_eq!(summarize(&transactions).net_balance, -15.0);
    }

    #[test]
    fn spending_sums_each_category_and_drops_zero_totals() {
        let transactions = [
            expense("Food", 20.0),
            expense("Food", 5.0),
            expense("Transport", 0.0),
        ];

        assert_eq!(
            spending_by_category(&transactions),
            vec![CategorySpending {
                category: "Food".to_owned(),
                total_amount: 25.0,
            }]
        );
    }

    #[test]
    fn spending_ignores_income() {
        let transactions = [
            transaction(TransactionType::Income, "Food", 500.0),
            expense("Food", 5.0),
        ];

        assert_eq!(
            spending_by_category(&transactions),
            vec![CategorySpending {
                category: "Food".to_owned(),
                total_amount: 5.0,
            }]
        );
    }

    #[test]
    fn spending_is_sorted_by_total_then_name() {
        let transactions = [
            expense("Transport", 10.0),
            expense("Rent", 300.0),
            expense("Coffee", 10.0),
            expense("Food", 45.5),
        ];

        let categories: Vec<_> = spending_by_category(&transactions)
            .into_iter()
            .map(|spending| spending.category)
            .collect();

        assert_eq!(categories, vec!["Rent", "Food", "Coffee", "Transport"]);
    }

    #[test]
    fn categories_are_case_sensitive() {
        let transactions = [expense("Food", 1.0), expense("food", 2.0)];

        assert_eq!(spending_by_category(&transactions).len(), 2);
    }

    #[test]
    fn summary_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(Summary {
            total_income: 1.0,
            total_expenses: 2.0,
            net_balance: -1.0,
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({"totalIncome": 1.0, "totalExpenses": 2.0, "netBalance": -1.0})
        );
    }
}
