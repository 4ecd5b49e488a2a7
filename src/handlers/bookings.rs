use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use chrono::Local;
use serde::Deserialize;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::BookingStatus;
use crate::render;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PageQuery {
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct BookingForm {
    pub action: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub id: Option<String>,
}

/// An absent or empty `status` parameter means the unfiltered recent view.
/// Anything else is coerced to an integer, with unparseable values falling
/// back to 0.
fn parse_filter(raw: Option<&str>) -> Option<i64> {
    match raw {
        None | Some("") => None,
        Some(s) => Some(s.trim().parse().unwrap_or(0)),
    }
}

// GET /
pub async fn page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let filter = parse_filter(query.status.as_deref());

    let bookings = {
        let db = state.db.lock().unwrap();
        queries::get_bookings_by_status(&db, filter)?
    };

    Ok(Html(render::booking_page(&bookings, filter)))
}

// POST /
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<BookingForm>,
) -> Result<Response, AppError> {
    match form.action.as_deref() {
        Some("create") => {
            let date = form
                .date
                .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
            let time = form
                .time
                .unwrap_or_else(|| Local::now().format("%H:%M").to_string());

            let inserted = {
                let db = state.db.lock().unwrap();
                queries::create_booking(&db, &date, &time, BookingStatus::Pending.code())?
            };

            if inserted {
                tracing::info!(date = %date, time = %time, "booking created");
            } else {
                // Duplicate slot: logged only, the user just sees the redirect.
                tracing::warn!(date = %date, time = %time, "duplicate booking attempt");
            }

            Ok(Redirect::to("/").into_response())
        }
        Some("delete") => {
            if let Some(raw_id) = form.id.filter(|id| !id.trim().is_empty()) {
                // Unparseable ids coerce to 0, which never matches a row.
                let id: i64 = raw_id.trim().parse().unwrap_or(0);

                let deleted = {
                    let db = state.db.lock().unwrap();
                    queries::delete_booking(&db, id)?
                };

                if deleted {
                    tracing::info!(id, "booking deleted");
                }
            }

            Ok(Redirect::to("/").into_response())
        }
        _ => {
            // Unknown or missing action: no mutation, render the page as-is.
            let bookings = {
                let db = state.db.lock().unwrap();
                queries::get_bookings_by_status(&db, None)?
            };

            Ok(Html(render::booking_page(&bookings, None)).into_response())
        }
    }
}
