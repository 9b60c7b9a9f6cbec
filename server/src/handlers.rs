use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::relay::broadcast_except;
use crate::state::AppState;

pub async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut socket_sender, mut socket_receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    let connection_id = Uuid::new_v4();

    {
        let mut peers = state.peers.write().await;
        peers.insert(connection_id, tx);
        tracing::info!("WS connected conn={connection_id} peers={}", peers.len());
    }

    // Drain the outbound channel into the socket; a write error means the
    // peer is gone and the receive loop below will observe the close.
    let send_task = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if socket_sender.send(frame).await.is_err() {
                break;
            }
        }
    });

    let mut close_frame = None;

    while let Some(Ok(frame)) = socket_receiver.next().await {
        match frame {
            Message::Text(_) | Message::Binary(_) => {
                broadcast_except(&state.peers, connection_id, frame).await;
            }
            Message::Close(frame) => {
                close_frame = frame;
                break;
            }
            _ => {}
        }
    }

    {
        let mut peers = state.peers.write().await;
        peers.remove(&connection_id);
        tracing::info!("WS disconnected conn={connection_id} peers={}", peers.len());
    }
    if let Some(frame) = &close_frame {
        tracing::debug!(
            "WS close frame conn={connection_id} code={:?} reason={:?}",
            frame.code,
            frame.reason
        );
    }
    send_task.abort();
}
