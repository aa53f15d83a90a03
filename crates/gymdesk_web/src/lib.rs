//! Browser front end for the gym desk.
//!
//! # Responsibility
//! - Map the six desk screens and their tabs onto HTTP routes.
//! - Decode form posts, call [`GymDesk`] off the async runtime, and render
//!   the resulting page.

pub mod config;
mod error;
mod render;
mod routes;
mod screens;

pub use config::{ConfigError, WebConfig};
pub use error::{WebError, WebResult};
pub use routes::build_router;

use gymdesk_core::GymDesk;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    desk: GymDesk,
}

impl AppState {
    pub fn new(desk: GymDesk) -> Self {
        Self { desk }
    }

    pub fn desk(&self) -> &GymDesk {
        &self.desk
    }

    /// Runs blocking desk work on the blocking pool.
    pub(crate) async fn run<T, F>(&self, action: F) -> WebResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&GymDesk) -> T + Send + 'static,
    {
        let desk = self.desk.clone();
        Ok(tokio::task::spawn_blocking(move || action(&desk)).await?)
    }
}
