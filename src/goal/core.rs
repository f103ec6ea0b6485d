//! Savings goals and the SQL queries that store them.

use rusqlite::{Connection, Row, params};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, database_id::GoalId};

/// An amount of money to save up, optionally by a deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// The id for the goal.
    pub id: GoalId,
    /// What the money is being saved for.
    pub name: String,
    /// How much money needs to be saved, always greater than zero.
    pub target_amount: f64,
    /// How much money has been saved so far, between zero and `target_amount`.
    pub current_amount: f64,
    /// When the money should be saved by.
    pub deadline: Option<Date>,
}

/// A validated goal that has not been saved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    /// What the money is being saved for.
    pub name: String,
    /// How much money needs to be saved.
    pub target_amount: f64,
    /// How much money has been saved so far.
    pub current_amount: f64,
    /// When the money should be saved by.
    pub deadline: Date,
}

type RowsAffected = usize;

/// Create the goal table if it does not exist yet.
pub fn create_goal_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS goal (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            target_amount REAL NOT NULL,
            current_amount REAL NOT NULL DEFAULT 0,
            deadline TEXT
        )",
        (),
    )?;

    Ok(())
}

/// Map a row with the columns `id, name, target_amount, current_amount, deadline`
/// to a [Goal].
pub fn map_goal_row(row: &Row) -> Result<Goal, rusqlite::Error> {
    let id = row.get(0)?;
    let name = row.get(1)?;
    let target_amount = row.get(2)?;
    let current_amount = row.get(3)?;
    let deadline = row.get(4)?;

    Ok(Goal {
        id,
        name,
        target_amount,
        current_amount,
        deadline,
    })
}

/// Create a new goal in the database.
///
/// # Errors
/// Returns an [Error::StorageError] if there is an SQL error.
pub fn create_goal(goal: &NewGoal, connection: &Connection) -> Result<Goal, Error> {
    let goal = connection
        .prepare(
            "INSERT INTO goal (name, target_amount, current_amount, deadline)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, name, target_amount, current_amount, deadline",
        )?
        .query_row(
            params![
                goal.name,
                goal.target_amount,
                goal.current_amount,
                goal.deadline
            ],
            map_goal_row,
        )?;

    Ok(goal)
}

/// Retrieve a goal by its `id`.
///
/// # Errors
/// Returns a:
/// - [Error::NotFound] if `id` does not refer to a goal,
/// - or [Error::StorageError] if there is some other SQL error.
pub fn get_goal(id: GoalId, connection: &Connection) -> Result<Goal, Error> {
    let goal = connection
        .prepare(
            "SELECT id, name, target_amount, current_amount, deadline FROM goal WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_goal_row)?;

    Ok(goal)
}

/// Get all goals, the closest deadline first.
///
/// Goals with the same deadline are sorted with the most recently created first.
/// Goals without a deadline come before all others.
///
/// # Errors
/// Returns an [Error::StorageError] if there is an SQL error.
pub fn get_goals(connection: &Connection) -> Result<Vec<Goal>, Error> {
    connection
        .prepare(
            "SELECT id, name, target_amount, current_amount, deadline FROM goal \
            ORDER BY deadline ASC, id DESC",
        )?
        .query_map([], map_goal_row)?
        .map(|goal_result| goal_result.map_err(Error::from))
        .collect()
}

/// Overwrite every field of the goal with the same ID as `goal`.
///
/// Returns the number of rows affected, which is zero when there is no goal
/// with that ID.
///
/// # Errors
/// Returns an [Error::StorageError] if there is an SQL error.
pub fn update_goal(goal: &Goal, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "UPDATE goal \
            SET \
                name = ?1, \
                target_amount = ?2, \
                current_amount = ?3, \
                deadline = ?4 \
            WHERE id = ?5",
            params![
                goal.name,
                goal.target_amount,
                goal.current_amount,
                goal.deadline,
                goal.id
            ],
        )
        .map_err(Error::from)
}

/// Delete the goal with the given `id`.
///
/// Returns the number of rows affected, which is zero when the goal does not exist.
///
/// # Errors
/// Returns an [Error::StorageError] if there is an SQL error.
pub fn delete_goal(id: GoalId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM goal WHERE id = :id", &[(":id", &id)])
        .map_err(Error::from)
}

#[cfg(test)]
pub fn count_goals(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM goal;", [], |row| row.get(0))
        .map_err(|error| error.into())
}
