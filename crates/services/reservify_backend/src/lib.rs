// --- File: crates/services/reservify_backend/src/lib.rs ---
pub mod app;

pub use app::build_router;
