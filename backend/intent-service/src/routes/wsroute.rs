//! WebSocket upgrade endpoint for seller dashboards
//!
//! Presence only: this service pushes no frames of its own, but the
//! registry keeps the same connect/disconnect lifecycle as the
//! notification service.

use actix_web::{get, web, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use ws_registry::{SellerConnection, SellerSession};

use crate::state::AppState;

#[get("/ws")]
pub async fn ws_connect(
    req: HttpRequest,
    stream: web::Payload,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let (conn, rx) = SellerConnection::open();
    tracing::info!(connection_id = %conn.id(), "Seller dashboard connecting");

    ws::start(
        SellerSession::new(conn, rx, state.registry.clone()),
        &req,
        stream,
    )
}
