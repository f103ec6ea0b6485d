//! Application router configuration for the REST API and client assets.

use axum::{Router, handler::HandlerWithoutStateExt, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState, Error, endpoints,
    goal::{
        create_goal_endpoint, delete_goal_endpoint, edit_goal_endpoint, get_goal_endpoint,
        list_goals_endpoint,
    },
    insights::{get_spending_by_category_endpoint, get_summary_endpoint},
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_transaction_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Paths that do not match an API route are served from the static directory
/// if the state has one, otherwise they get a JSON 404 response.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(edit_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::GOALS,
            get(list_goals_endpoint).post(create_goal_endpoint),
        )
        .route(
            endpoints::GOAL,
            get(get_goal_endpoint)
                .put(edit_goal_endpoint)
                .delete(delete_goal_endpoint),
        )
        .route(endpoints::INSIGHTS_SUMMARY, get(get_summary_endpoint))
        .route(
            endpoints::SPENDING_BY_CATEGORY,
            get(get_spending_by_category_endpoint),
        );

    let router = match &state.static_dir {
        Some(static_dir) => router.fallback_service(
            ServeDir::new(static_dir).not_found_service(get_404_not_found.into_service()),
        ),
        None => router.fallback(get_404_not_found),
    };

    router.with_state(state)
}

async fn get_404_not_found() -> Error {
    Error::NotFound
}
