use crate::config::TrackerConfig;
use crate::storage::FileStore;
use crate::store::HabitStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<TrackerConfig>,
    pub store: Arc<Mutex<HabitStore<FileStore>>>,
}

impl AppState {
    pub fn new(config: TrackerConfig, store: HabitStore<FileStore>) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(Mutex::new(store)),
        }
    }
}
