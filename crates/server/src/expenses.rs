//! Expense ledger API endpoints.

use api_types::expense::{
    BulkAdd, BulkAdded, ExpenseDelete, ExpenseDeleted, ExpenseListResponse, ExpenseView,
};
use axum::{Json, extract::State, http::StatusCode};

use crate::{ServerError, server::ServerState};

fn map_expense(expense: engine::Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        category: expense.category,
        product: expense.product,
        cost: expense.cost,
    }
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<ExpenseListResponse>, ServerError> {
    let expenses = state
        .engine
        .list_expenses()
        .await?
        .into_iter()
        .map(map_expense)
        .collect();

    Ok(Json(ExpenseListResponse { expenses }))
}

pub async fn bulk_add(
    State(state): State<ServerState>,
    Json(payload): Json<BulkAdd>,
) -> Result<(StatusCode, Json<BulkAdded>), ServerError> {
    let created = state
        .engine
        .bulk_add(&payload.category, &payload.products, &payload.costs)
        .await?;
    tracing::info!("added {created} expenses to '{}'", payload.category);

    Ok((StatusCode::CREATED, Json(BulkAdded { created })))
}

pub async fn delete(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseDelete>,
) -> Result<Json<ExpenseDeleted>, ServerError> {
    if payload.ids.is_empty() {
        return Err(ServerError::Generic(
            "select at least one expense to delete".to_string(),
        ));
    }

    let deleted = state.engine.delete_expenses(&payload.ids).await?;
    tracing::info!("deleted {deleted} of {} selected expenses", payload.ids.len());

    Ok(Json(ExpenseDeleted {
        requested: payload.ids.len(),
        deleted,
    }))
}
