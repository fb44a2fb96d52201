pub mod app;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod derivation;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod period;
pub mod registry;
pub mod selection;
pub mod state;
pub mod stats;
pub mod ui;

pub use app::router;
pub use config::resolve_bind_addr;
pub use registry::Registry;
pub use state::AppState;
