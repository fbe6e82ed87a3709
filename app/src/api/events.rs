//! Event endpoints.
//!
//! - `GET /api/events?type=` - list events, optionally filtered by category
//! - `GET /api/events/:id` - fetch one event
//! - `POST /api/events` - insert an event row
//!
//! All proxy directly to the hosted `events` table. Public endpoints - no
//! authentication, no pagination.

use crate::server::error::ApiError;
use crate::server::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use samosa_gateway::{Category, EventRow, NewEvent};
use serde::Deserialize;

/// Query parameters for listing events.
#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    /// Filter by category (`movie`, `sport`, `concert`)
    #[serde(rename = "type")]
    pub category: Option<Category>,
}

/// List events, optionally filtered by category.
///
/// # Example
///
/// ```bash
/// curl http://localhost:5000/api/events?type=sport
/// ```
///
/// # Errors
///
/// Returns 502 when the hosted service is unreachable.
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<Vec<EventRow>>, ApiError> {
    let rows = state.gateway.list_events(query.category).await?;
    Ok(Json(rows))
}

/// Get one event by id.
///
/// # Example
///
/// ```bash
/// curl http://localhost:5000/api/events/ev-101
/// ```
///
/// # Errors
///
/// Returns 404 for an unknown id and 502 when the hosted service is
/// unreachable.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventRow>, ApiError> {
    let row = state.gateway.get_event(&id).await?;
    Ok(Json(row))
}

/// Insert an event row.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:5000/api/events \
///   -H "Content-Type: application/json" \
///   -d '{
///     "title": "IPL 2024: MI vs CSK",
///     "type": "sport",
///     "venue": "Wankhede Stadium",
///     "date": "2024-04-15T19:30:00Z"
///   }'
/// ```
///
/// # Errors
///
/// Returns 502 when the hosted service is unreachable.
pub async fn create_event(
    State(state): State<AppState>,
    Json(event): Json<NewEvent>,
) -> Result<(StatusCode, Json<EventRow>), ApiError> {
    let row = state.gateway.create_event(event).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use samosa_gateway::InMemoryGateway;
    use std::sync::Arc;

    fn sample_rows() -> Vec<EventRow> {
        vec![
            EventRow {
                id: "ev-101".to_string(),
                title: "IPL 2024: MI vs CSK".to_string(),
                category: Category::Sport,
                venue: "Wankhede Stadium".to_string(),
                date: "2024-04-15T19:30:00Z".parse().unwrap(),
                image_url: None,
                price: None,
                status: Some("ongoing".to_string()),
                created_at: None,
            },
            EventRow {
                id: "ev-1".to_string(),
                title: "Avatar 3".to_string(),
                category: Category::Movie,
                venue: "PVR: GVK One Mall".to_string(),
                date: "2024-04-15T14:30:00Z".parse().unwrap(),
                image_url: None,
                price: Some(200),
                status: Some("ongoing".to_string()),
                created_at: None,
            },
        ]
    }

    fn test_state() -> AppState {
        AppState::new(Arc::new(
            InMemoryGateway::new().with_events(sample_rows()),
        ))
    }

    #[tokio::test]
    async fn test_list_events_filters_by_type() {
        let Json(rows) = list_events(
            State(test_state()),
            Query(ListEventsQuery {
                category: Some(Category::Sport),
            }),
        )
        .await
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "ev-101");
    }

    #[tokio::test]
    async fn test_get_unknown_event_is_404() {
        let err = get_event(State(test_state()), Path("nope".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_event_inserts_a_row() {
        let state = test_state();
        let (status, Json(row)) = create_event(
            State(state.clone()),
            Json(NewEvent {
                title: "IPL 2024: GT vs RCB".to_string(),
                category: Category::Sport,
                venue: "Narendra Modi Stadium".to_string(),
                date: "2024-04-25T19:30:00Z".parse().unwrap(),
                image_url: None,
                price: None,
                status: Some("ongoing".to_string()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(fetched) = get_event(State(state), Path(row.id.clone())).await.unwrap();
        assert_eq!(fetched.title, "IPL 2024: GT vs RCB");
    }
}
