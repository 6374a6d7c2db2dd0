//! WebSocket transport: turns socket frames into authority calls.

use crate::authority::GameAuthority;
use crate::config::ServerConfig;
use crate::hub::ConnectionHub;
use crate::protocol::{ClientEvent, ProtocolError, ServerEvent};
use anyhow::Result;
use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::http::Request;
use axum::response::Response;
use axum::routing::get;
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tower::ServiceBuilder;
use tracing::{debug, info, instrument, warn};

type SharedAuthority = Arc<GameAuthority<ConnectionHub>>;

/// How long a closing socket gets to flush its remaining frames.
const WRITER_DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// Builds the HTTP router serving the game socket at `/` and `/ws`.
///
/// Any origin may connect; the upgrade does not inspect `Origin`.
pub fn router(authority: SharedAuthority) -> Router {
    Router::new()
        .route("/", get(ws_handler))
        .route("/ws", get(ws_handler))
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            debug!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
        .with_state(authority)
}

/// Binds the configured address and serves until Ctrl-C.
#[instrument(skip(config), fields(addr = %config.bind_address()))]
pub async fn run(config: ServerConfig) -> Result<()> {
    let authority = Arc::new(GameAuthority::new(ConnectionHub::new()));
    let app = router(authority);

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!(addr = %listener.local_addr()?, "WebSocket server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

async fn ws_handler(ws: WebSocketUpgrade, State(authority): State<SharedAuthority>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, authority))
}

#[instrument(skip_all)]
async fn handle_socket(socket: WebSocket, authority: SharedAuthority) {
    let (party, outbox) = authority.substrate().register();
    info!(%party, "Player connected");
    authority.on_connect(party);

    let (sink, mut stream) = socket.split();
    let mut writer = tokio::spawn(forward_events(outbox, sink));

    while let Some(frame) = stream.next().await {
        let frame = match frame {
            Ok(frame) => frame,
            Err(e) => {
                debug!(%party, error = %e, "Socket read failed");
                break;
            }
        };
        if matches!(frame, Message::Close(_)) {
            break;
        }
        match decode(frame) {
            Some(Ok(event)) => authority.dispatch(party, event),
            Some(Err(e)) => debug!(%party, error = %e, "Frame ignored"),
            None => {}
        }
    }

    // Dropping the outbox sender lets the writer drain, send its close frame
    // and finish on its own.
    authority.substrate().unregister(party);
    authority.on_disconnect(party);
    if tokio::time::timeout(WRITER_DRAIN_TIMEOUT, &mut writer).await.is_err() {
        debug!(%party, "Writer did not finish in time");
        writer.abort();
    }
    info!(%party, "Player disconnected");
}

/// Decodes one inbound frame. Control frames yield `None`.
fn decode(frame: Message) -> Option<Result<ClientEvent, ProtocolError>> {
    match frame {
        Message::Text(text) => Some(ClientEvent::parse(text.as_str())),
        Message::Binary(_) => Some(Err(ProtocolError::UnsupportedFrame("binary"))),
        Message::Ping(_) | Message::Pong(_) | Message::Close(_) => None,
    }
}

async fn forward_events(
    mut outbox: mpsc::Receiver<ServerEvent>,
    mut sink: SplitSink<WebSocket, Message>,
) {
    while let Some(event) = outbox.recv().await {
        let text = match serde_json::to_string(&event) {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Failed to serialize event");
                continue;
            }
        };
        if sink.send(Message::Text(text.into())).await.is_err() {
            return;
        }
    }
    if let Err(e) = sink.close().await {
        debug!(error = %e, "Socket close failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_text_frame() {
        let frame = Message::Text(r#"{"event":"newGame"}"#.to_string().into());
        assert_eq!(decode(frame).unwrap().unwrap(), ClientEvent::NewGame);
    }

    #[test]
    fn test_decode_binary_frame_rejected() {
        let frame = Message::Binary(vec![1, 2, 3].into());
        assert!(matches!(
            decode(frame),
            Some(Err(ProtocolError::UnsupportedFrame("binary")))
        ));
    }

    #[test]
    fn test_decode_ping_ignored() {
        assert!(decode(Message::Ping(Vec::new().into())).is_none());
    }
}
