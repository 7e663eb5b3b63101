//! HTTP gateway for the Tinylink URL shortener.
//!
//! Exposes the shortener over a small JSON API and resolves short codes
//! with redirects. The binary in `main.rs` wires configuration, tracing and
//! an in-memory store around [`App::router`].

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod settings;
pub mod state;

pub use app::App;
pub use settings::Settings;
pub use state::AppState;
