use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::ws::Message;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

/// The broadcast set: every open connection, keyed by connection id. Each
/// entry holds the channel drained by that connection's send task, so the
/// transport serializes writes per connection.
pub type PeerMap = Arc<RwLock<HashMap<Uuid, mpsc::UnboundedSender<Message>>>>;

#[derive(Clone)]
pub struct AppState {
    pub peers: PeerMap,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            peers: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}
