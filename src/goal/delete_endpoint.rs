//! Defines the endpoint for deleting a savings goal.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::{GoalId, id_from_path},
    db::lock_connection,
    goal::{GoalState, core::delete_goal},
};

/// The response body for a deleted goal.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletedGoal {
    /// A confirmation message for display.
    pub message: String,
    /// The ID of the goal that was deleted.
    pub id: GoalId,
}

/// A route handler for deleting a goal, responds with the deleted ID.
pub async fn delete_goal_endpoint(
    State(state): State<GoalState>,
    goal_id: Result<Path<String>, PathRejection>,
) -> Result<Json<DeletedGoal>, Error> {
    let goal_id = id_from_path(goal_id)?;

    let connection = lock_connection(&state.db_connection)?;

    match delete_goal(goal_id, &connection)? {
        0 => Err(Error::NotFound),
        _ => {
            tracing::debug!("deleted goal {goal_id}");
            Ok(Json(DeletedGoal {
                message: "Goal deleted successfully".to_owned(),
                id: goal_id,
            }))
        }
    }
}
