//! Savings goals, e.g. putting money aside for a new laptop by a deadline.
//!
//! A goal tracks how much has been saved towards a target amount. The amount
//! saved can never exceed the target, which is checked whenever a goal is
//! created or updated.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod list_endpoint;
mod state;

pub use core::{Goal, NewGoal, create_goal, create_goal_table};
pub use create_endpoint::create_goal_endpoint;
pub use delete_endpoint::delete_goal_endpoint;
pub use edit_endpoint::edit_goal_endpoint;
pub use form::GoalForm;
pub use list_endpoint::{get_goal_endpoint, list_goals_endpoint};
pub use state::GoalState;

#[cfg(test)]
pub use core::{count_goals, get_goal};
