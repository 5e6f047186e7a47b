//! Inbound HTTP surface: an axum router over the case maintenance services.

pub mod extract;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
