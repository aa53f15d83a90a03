use crate::render::{error_banner, page};
use crate::screens::Screen;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gymdesk_core::RepoError;
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("page not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type WebResult<T> = Result<T, WebError>;

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, heading) = match &self {
            WebError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            WebError::Repo(_) | WebError::Join(_) => {
                error!("event=http_error module=web status=error error={}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
            }
        };

        let body = error_banner(&self.to_string());
        (status, page(Screen::Home, heading, &[], None, &body)).into_response()
    }
}
