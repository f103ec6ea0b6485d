//! Defines the endpoints for reading savings goals.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::id_from_path,
    db::lock_connection,
    goal::{
        GoalState,
        core::{Goal, get_goal, get_goals},
    },
};

/// The response body for listing goals.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct GoalList {
    /// The goals, closest deadline first.
    pub goals: Vec<Goal>,
}

/// A route handler for listing every goal.
pub async fn list_goals_endpoint(State(state): State<GoalState>) -> Result<Json<GoalList>, Error> {
    let connection = lock_connection(&state.db_connection)?;
    let goals = get_goals(&connection)?;

    Ok(Json(GoalList { goals }))
}

/// A route handler for getting a single goal by its ID.
pub async fn get_goal_endpoint(
    State(state): State<GoalState>,
    goal_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Goal>, Error> {
    let goal_id = id_from_path(goal_id)?;

    let connection = lock_connection(&state.db_connection)?;
    let goal = get_goal(goal_id, &connection)?;

    Ok(Json(goal))
}
