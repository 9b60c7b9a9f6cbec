use axum::extract::ws::Message;
use uuid::Uuid;

use crate::state::PeerMap;

/// Fan out one inbound frame to every peer except the sender. The frame is
/// forwarded verbatim: no decoding, no validation, no acknowledgment. A send
/// into a closed channel is ignored so one dead peer never blocks delivery to
/// the rest; that peer's own disconnect path removes it from the map.
pub async fn broadcast_except(peers: &PeerMap, sender: Uuid, frame: Message) {
    let peers = peers.read().await;
    let mut delivered = 0usize;
    for (peer_id, tx) in peers.iter() {
        if *peer_id == sender {
            continue;
        }
        if tx.send(frame.clone()).is_ok() {
            delivered += 1;
        }
    }
    tracing::debug!("relay conn={sender} peers={} delivered={delivered}", peers.len());
}
