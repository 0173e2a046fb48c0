use std::sync::Arc;

use application::RestReceptionist;
use tokio::sync::Mutex;

/// 所有请求共享同一个接收层，一把锁保护整个聚合
#[derive(Clone)]
pub struct AppState {
    pub receptionist: Arc<Mutex<RestReceptionist>>,
}

impl AppState {
    pub fn new(receptionist: RestReceptionist) -> Self {
        Self {
            receptionist: Arc::new(Mutex::new(receptionist)),
        }
    }
}
