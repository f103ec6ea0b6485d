//! Defines the endpoint for partially updating a savings goal.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{
    Error,
    database_id::id_from_path,
    db::lock_connection,
    goal::{
        GoalState,
        core::{Goal, get_goal, update_goal},
        form::GoalForm,
    },
    validation::parse_body,
};

/// A route handler for updating some or all of the fields of a goal.
///
/// The current amount may never exceed the target amount after the update is
/// applied, even when only one of the two is supplied.
pub async fn edit_goal_endpoint(
    State(state): State<GoalState>,
    goal_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<GoalForm>, JsonRejection>,
) -> Result<Json<Goal>, Error> {
    let goal_id = id_from_path(goal_id)?;
    let form = parse_body(payload)?;

    let connection = lock_connection(&state.db_connection)?;
    let db_transaction = connection.unchecked_transaction()?;

    let stored = get_goal(goal_id, &db_transaction)?;
    let updated = form.apply_to(stored)?;

    if update_goal(&updated, &db_transaction)? == 0 {
        tracing::error!("Could not update goal {goal_id}: update returned zero rows affected");
        return Err(Error::NotFound);
    }

    db_transaction.commit()?;
    tracing::debug!("updated goal {goal_id}");

    Ok(Json(updated))
}
