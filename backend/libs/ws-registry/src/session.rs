use actix::{Actor, ActorContext, AsyncContext, Handler, Message as ActixMessage, StreamHandler};
use actix_web_actors::ws;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{ConnectionRegistry, SellerConnection};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

// Message type for pushing broadcast frames out over the socket
#[derive(ActixMessage)]
#[rtype(result = "()")]
struct PushFrame(String);

/// WebSocket session actor for one connected seller dashboard
///
/// Registers its connection on start and unregisters on stop, so the
/// registry's view of connected sellers follows the socket lifecycle. Frames
/// broadcast through the registry arrive on the session channel and are
/// written to the socket as text.
pub struct SellerSession {
    conn: SellerConnection,
    rx: Option<UnboundedReceiver<String>>,
    registry: ConnectionRegistry,
    hb: Instant,
}

impl SellerSession {
    pub fn new(
        conn: SellerConnection,
        rx: UnboundedReceiver<String>,
        registry: ConnectionRegistry,
    ) -> Self {
        Self {
            conn,
            rx: Some(rx),
            registry,
            hb: Instant::now(),
        }
    }

    fn hb(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |act, ctx| {
            if Instant::now().duration_since(act.hb) > CLIENT_TIMEOUT {
                tracing::warn!("Seller WebSocket heartbeat failed, disconnecting");
                ctx.stop();
                return;
            }
            ctx.ping(b"");
        });
    }
}

impl Actor for SellerSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        tracing::info!("Seller connected via WebSocket: {}", self.conn.id());

        // Start heartbeat
        self.hb(ctx);

        // Register with the shared connection registry
        let registry = self.registry.clone();
        let conn = self.conn.clone();
        actix::spawn(async move {
            registry.register(conn).await;
        });

        // Bridge the registry's broadcast channel to the socket
        if let Some(mut rx) = self.rx.take() {
            let addr = ctx.address();
            tokio::spawn(async move {
                while let Some(frame) = rx.recv().await {
                    addr.do_send(PushFrame(frame));
                }
            });
        }
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        tracing::info!("Seller disconnected: {}", self.conn.id());

        // Cleanup: the close event is the only path that removes a connection
        let registry = self.registry.clone();
        let id = self.conn.id();
        actix::spawn(async move {
            registry.unregister(id).await;
        });
    }
}

// Push frames arriving from broadcasts out to the client
impl Handler<PushFrame> for SellerSession {
    type Result = ();

    fn handle(&mut self, msg: PushFrame, ctx: &mut Self::Context) {
        ctx.text(msg.0);
    }
}

// Handle WebSocket protocol messages
impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for SellerSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                self.hb = Instant::now();
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {
                self.hb = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                // No client-to-server schema is defined; sellers only listen.
                tracing::debug!("Ignoring inbound WebSocket text frame: {}", &*text);
            }
            Ok(ws::Message::Binary(_)) => {
                tracing::warn!("Binary WebSocket messages not supported");
            }
            Ok(ws::Message::Close(reason)) => {
                tracing::info!("WebSocket close message received: {:?}", reason);
                ctx.stop();
            }
            _ => {}
        }
    }
}
