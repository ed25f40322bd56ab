//! Web layer for the railway planner.
//!
//! Provides HTTP endpoints for describing the network and planning journeys.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
