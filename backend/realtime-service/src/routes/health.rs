//! Liveness endpoint

use actix_web::{get, HttpResponse};

#[get("/")]
pub async fn live() -> HttpResponse {
    HttpResponse::Ok().body("Realtime microservice is live with email fallback!")
}
