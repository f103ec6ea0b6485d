//! Defines the endpoint for creating a savings goal.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    Error,
    db::lock_connection,
    goal::{
        GoalState,
        core::{Goal, create_goal},
        form::GoalForm,
    },
    validation::parse_body,
};

/// A route handler for creating a new savings goal, responds with the stored goal.
pub async fn create_goal_endpoint(
    State(state): State<GoalState>,
    payload: Result<Json<GoalForm>, JsonRejection>,
) -> Result<(StatusCode, Json<Goal>), Error> {
    let new_goal = parse_body(payload)?.validate()?;

    let connection = lock_connection(&state.db_connection)?;
    let goal = create_goal(&new_goal, &connection)?;
    tracing::debug!("created goal {}", goal.id);

    Ok((StatusCode::CREATED, Json(goal)))
}
