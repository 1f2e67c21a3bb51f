//! Web layer: axum router, handlers, DTOs, and shared state.

pub mod dto;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
