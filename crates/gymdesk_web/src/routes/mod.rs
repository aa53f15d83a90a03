//! HTTP routes of the desk screens.
//!
//! # Invariants
//! - Path segments resolve through closed enums; anything else is a 404.
//! - Form values arrive as text and are parsed by `gymdesk_core` helpers.

mod delete;
mod home;
mod insert;
mod reports;
mod tables;
mod update;

use crate::error::{WebError, WebResult};
use crate::render::Tab;
use crate::AppState;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use gymdesk_core::{RepoError, Table, ValidationError};
use log::info;
use std::collections::HashMap;
use std::time::Instant;

/// Builds the application router with request logging and a 404 fallback.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::show))
        .route("/insert", get(|| async { Redirect::to("/insert/member") }))
        .route("/insert/{tab}", get(insert::show).post(insert::submit))
        .route("/delete", get(|| async { Redirect::to("/delete/members") }))
        .route("/delete/{table}", get(delete::show).post(delete::submit))
        .route("/update", get(|| async { Redirect::to("/update/members") }))
        .route("/update/{table}", get(update::show).post(update::submit))
        .route("/update/{table}/clear", post(update::clear))
        .route("/reports", get(|| async { Redirect::to("/reports/memberships") }))
        .route("/reports/{report}", get(reports::show).post(reports::submit))
        .route("/tables", get(|| async { Redirect::to("/tables/members") }))
        .route("/tables/{table}", get(tables::show))
        .fallback(not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn not_found(request: Request) -> Response {
    WebError::NotFound(request.uri().path().to_string()).into_response()
}

async fn log_request(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    info!(
        "event=http_request module=web method={} path={} status={} duration_ms={}",
        method,
        path,
        response.status().as_u16(),
        started_at.elapsed().as_millis()
    );
    response
}

/// Raw url-encoded form body.
#[derive(Debug)]
pub(crate) struct Fields(HashMap<String, String>);

impl Fields {
    pub(crate) fn new(values: HashMap<String, String>) -> Self {
        Self(values)
    }

    /// Submitted text, or `""` when the field was not sent.
    pub(crate) fn text(&self, name: &str) -> &str {
        self.0.get(name).map_or("", String::as_str)
    }

    pub(crate) fn is_checked(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
}

fn table_param(slug: &str) -> WebResult<Table> {
    Table::from_slug(slug).ok_or_else(|| WebError::NotFound(slug.to_string()))
}

fn table_tabs(base: &str, tables: &[Table], active: Table) -> Vec<Tab> {
    tables
        .iter()
        .map(|table| Tab {
            href: format!("{base}/{}", table.slug()),
            label: table.label(),
            active: *table == active,
        })
        .collect()
}

/// Splits desk read errors into an inline banner (bad input) or a failed
/// request.
fn inline_validation<T>(result: Result<T, RepoError>) -> WebResult<Result<T, ValidationError>> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(RepoError::Validation(err)) => Ok(Err(err)),
        Err(other) => Err(other.into()),
    }
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
