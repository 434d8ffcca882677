pub mod app;
pub mod calendar;
pub mod color;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, resolve_data_dir};
pub use store::HabitStore;
