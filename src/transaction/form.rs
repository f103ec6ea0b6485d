//! Validation of client input for creating and updating transactions.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    transaction::core::{NewTransaction, Transaction},
    validation::{
        AmountInput, deserialize_any_text, deserialize_some, non_empty_text, optional_text,
        parse_date, positive_amount, required,
    },
};

/// The JSON body for creating or partially updating a transaction.
///
/// Every field is optional so that the same shape can be used for partial
/// updates. [TransactionForm::validate] decides which fields are required.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    /// Either "income" or "expense".
    ///
    /// Other JSON values are kept as their JSON text so that they are reported
    /// as an invalid type rather than a malformed body.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "deserialize_any_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub transaction_type: Option<String>,
    /// What the money was for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// The amount of money, as a number or numeric string.
    ///
    /// Any other JSON value is accepted here and rejected by validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<AmountInput>,
    /// The date in the format YYYY-MM-DD.
    #[serde(
        default,
        deserialize_with = "deserialize_any_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
    /// An optional note.
    ///
    /// `None` means the field was not sent, `Some(None)` means it was sent as `null`.
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
}

impl TransactionForm {
    /// Check the form describes a complete, valid transaction.
    ///
    /// Fields are checked in a fixed order and the first problem found is
    /// returned: missing fields, then type, amount, category and date.
    ///
    /// # Errors
    /// Returns a:
    /// - [Error::MissingField] if the type, category, amount or date is missing or empty,
    /// - [Error::InvalidEnum] if the type is neither "income" nor "expense",
    /// - [Error::InvalidAmount] if the amount is not a number greater than zero,
    /// - [Error::EmptyField] if the category is only whitespace,
    /// - or [Error::InvalidDate] if the date is not a valid YYYY-MM-DD date.
    pub fn validate(&self) -> Result<NewTransaction, Error> {
        let transaction_type = required(self.transaction_type.as_deref(), "type")?;
        let category = required(self.category.as_deref(), "category")?;
        let amount = self.amount.as_ref().ok_or(Error::MissingField("amount"))?;
        let date = required(self.date.as_deref(), "date")?;

        let transaction_type = transaction_type.parse()?;
        let amount = positive_amount(amount, "amount")?;
        let category = non_empty_text(category, "category")?;
        let date = parse_date(date, "date")?;
        let description = optional_text(self.description.as_ref().and_then(Option::as_deref));

        Ok(NewTransaction {
            transaction_type,
            category,
            amount,
            date,
            description,
        })
    }

    /// Replace the fields of `transaction` with the fields supplied in this form.
    ///
    /// Fields that are absent (or `null`, except for the description) keep
    /// their current value. Only the supplied fields are validated since the
    /// stored fields are already valid.
    ///
    /// # Errors
    /// Returns the same errors as [TransactionForm::validate], except
    /// [Error::MissingField].
    pub fn apply_to(&self, mut transaction: Transaction) -> Result<Transaction, Error> {
        if let Some(transaction_type) = &self.transaction_type {
            transaction.transaction_type = transaction_type.parse()?;
        }

        if let Some(amount) = &self.amount {
            transaction.amount = positive_amount(amount, "amount")?;
        }

        if let Some(category) = &self.category {
            transaction.category = non_empty_text(category, "category")?;
        }

        if let Some(date) = &self.date {
            transaction.date = parse_date(date, "date")?;
        }

        if let Some(description) = &self.description {
            transaction.description = optional_text(description.as_deref());
        }

        Ok(transaction)
    }
}
