//! Inbound HTTP surface (axum).
//!
//! ```text
//! GET /health             -> {"status":"ok"}
//! GET /weather/cep/{code} -> {"celsius":..,"fahrenheit":..,"kelvin":..} | {"message":..}
//! ```

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
