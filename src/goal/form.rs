//! Validation of client input for creating and updating savings goals.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    goal::core::{Goal, NewGoal},
    validation::{
        AmountInput, deserialize_any_text, non_empty_text, non_negative_amount, parse_date,
        positive_amount, required,
    },
};

/// The JSON body for creating or partially updating a goal.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalForm {
    /// What the money is being saved for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// How much money needs to be saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<AmountInput>,
    /// How much money has been saved so far. Defaults to zero for new goals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_amount: Option<AmountInput>,
    /// The deadline in the format YYYY-MM-DD.
    #[serde(
        default,
        deserialize_with = "deserialize_any_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub deadline: Option<String>,
}

impl GoalForm {
    /// Check the form describes a complete, valid goal.
    ///
    /// The first problem found is returned, checking for missing fields first,
    /// then the name, target amount, current amount, deadline and finally that
    /// the current amount does not exceed the target amount.
    ///
    /// # Errors
    /// Returns a:
    /// - [Error::MissingField] if the name, target amount or deadline is missing,
    /// - [Error::EmptyField] if the name is only whitespace,
    /// - [Error::InvalidAmount] if the target is not positive or the current amount is negative,
    /// - [Error::InvalidDate] if the deadline is not a valid YYYY-MM-DD date,
    /// - or [Error::InvariantViolation] if the current amount exceeds the target amount.
    pub fn validate(&self) -> Result<NewGoal, Error> {
        let name = required(self.name.as_deref(), "name")?;
        let target_amount = self
            .target_amount
            .as_ref()
            .ok_or(Error::MissingField("target_amount"))?;
        let deadline = required(self.deadline.as_deref(), "deadline")?;

        let name = non_empty_text(name, "name")?;
        let target_amount = positive_amount(target_amount, "target_amount")?;
        let current_amount = match &self.current_amount {
            Some(current_amount) => non_negative_amount(current_amount, "current_amount")?,
            None => 0.0,
        };
        let deadline = parse_date(deadline, "deadline")?;
        check_amounts(current_amount, target_amount)?;

        Ok(NewGoal {
            name,
            target_amount,
            current_amount,
            deadline,
        })
    }

    /// Replace the fields of `goal` with the fields supplied in this form.
    ///
    /// The amounts are compared after merging, so updating only the current
    /// amount is checked against the stored target amount and vice versa.
    ///
    /// # Errors
    /// Returns the same errors as [GoalForm::validate], except [Error::MissingField].
    pub fn apply_to(&self, mut goal: Goal) -> Result<Goal, Error> {
        if let Some(name) = &self.name {
            goal.name = non_empty_text(name, "name")?;
        }

        if let Some(target_amount) = &self.target_amount {
            goal.target_amount = positive_amount(target_amount, "target_amount")?;
        }

        if let Some(current_amount) = &self.current_amount {
            goal.current_amount = non_negative_amount(current_amount, "current_amount")?;
        }

        if let Some(deadline) = &self.deadline {
            goal.deadline = Some(parse_date(deadline, "deadline")?);
        }

        check_amounts(goal.current_amount, goal.target_amount)?;

        Ok(goal)
    }
}

fn check_amounts(current_amount: f64, target_amount: f64) -> Result<(), Error> {
    if current_amount > target_amount {
        Err(Error::InvariantViolation {
            current_amount,
            target_amount,
        })
    } else {
        Ok(())
    }
}
