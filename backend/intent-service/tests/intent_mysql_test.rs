//! End-to-end persistence tests against a real MySQL instance
//!
//! Ignored by default; point TEST_DATABASE_URL at a scratch database
//! and run with `cargo test -- --ignored`.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use sqlx::{MySqlPool, Row};
use ws_registry::ConnectionRegistry;

use intent_service::routes;
use intent_service::state::AppState;

async fn test_pool() -> MySqlPool {
    let url = std::env::var("TEST_DATABASE_URL")
        .unwrap_or_else(|_| "mysql://root@localhost:3306/easysqft_test".to_string());
    MySqlPool::connect(&url)
        .await
        .expect("test database reachable")
}

async fn reset_tables(pool: &MySqlPool) {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS buyer_intents (
            id BIGINT AUTO_INCREMENT PRIMARY KEY,
            buyer_id BIGINT NOT NULL,
            city VARCHAR(255) NOT NULL,
            location_lat DOUBLE NOT NULL,
            location_lon DOUBLE NOT NULL,
            created_at TIMESTAMP NULL DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(pool)
    .await
    .expect("create buyer_intents");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS seller_status (
            seller_id BIGINT PRIMARY KEY,
            is_online BOOLEAN NOT NULL,
            updated_at TIMESTAMP NULL DEFAULT CURRENT_TIMESTAMP \
                ON UPDATE CURRENT_TIMESTAMP
        )",
    )
    .execute(pool)
    .await
    .expect("create seller_status");

    sqlx::query("DELETE FROM buyer_intents")
        .execute(pool)
        .await
        .expect("truncate buyer_intents");
    sqlx::query("DELETE FROM seller_status")
        .execute(pool)
        .await
        .expect("truncate seller_status");
}

fn state_with(pool: MySqlPool) -> AppState {
    AppState {
        db: pool,
        registry: ConnectionRegistry::new(),
    }
}

#[actix_web::test]
#[ignore]
async fn buyer_intent_inserts_and_returns_row_id() {
    let pool = test_pool().await;
    reset_tables(&pool).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_with(pool.clone())))
            .service(routes::intents::buyer_intent),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/rt/buyer-intent")
        .set_json(serde_json::json!({
            "buyer_id": 7,
            "city": "Austin",
            "location_lat": 30.2672,
            "location_lon": -97.7431
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");
    let id = body["id"].as_u64().unwrap();
    assert!(id > 0);

    let row = sqlx::query("SELECT buyer_id, city FROM buyer_intents WHERE id = ?")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(row.get::<i64, _>("buyer_id"), 7);
    assert_eq!(row.get::<String, _>("city"), "Austin");
}

#[actix_web::test]
#[ignore]
async fn seller_status_upserts_instead_of_duplicating() {
    let pool = test_pool().await;
    reset_tables(&pool).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_with(pool.clone())))
            .service(routes::intents::seller_status),
    )
    .await;

    for is_online in [true, false] {
        let req = test::TestRequest::post()
            .uri("/api/rt/seller-status")
            .set_json(serde_json::json!({ "seller_id": 5, "is_online": is_online }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "success");
    }

    let rows = sqlx::query("SELECT seller_id, is_online FROM seller_status")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get::<i64, _>("seller_id"), 5);
    assert!(!rows[0].get::<bool, _>("is_online"));
}
