pub mod admin;
pub mod game;
pub mod ong;

pub use admin::admin_config;
pub use game::game_config;
pub use ong::ong_config;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{Database, DatabaseConnection};
    use tokio::sync::Mutex;

    use crate::config::{ContractConfig, Environment};
    use crate::contract::MockLotteryContract;
    use crate::services::{DrawService, GameService, OngService};

    use super::*;

    async fn test_pool() -> DatabaseConnection {
        let pool = Database::connect("sqlite::memory:")
            .await
            .expect("sqlite memory");
        Migrator::up(&pool, None).await.expect("migrations");
        pool
    }

    // init_service 的返回类型无法简单命名, 用宏内联展开
    macro_rules! test_app {
        ($env:expr) => {{
            let pool = test_pool().await;
            let config = ContractConfig::default();
            let contract = Arc::new(Mutex::new(MockLotteryContract::new(config.clone())));

            test::init_service(
                App::new()
                    .app_data(web::Data::new($env))
                    .app_data(web::Data::new(contract.clone()))
                    .app_data(web::Data::new(GameService::new(pool.clone(), config)))
                    .app_data(web::Data::new(OngService::new(pool.clone())))
                    .app_data(web::Data::new(DrawService::new(pool, contract)))
                    .service(
                        web::scope("/api")
                            .configure(game_config)
                            .configure(ong_config)
                            .configure(admin_config),
                    ),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_taken_numbers_envelope() {
        let app = test_app!(Environment::Development);
        let req = test::TestRequest::get()
            .uri("/api/game/taken-numbers")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["totalTaken"], 0);
        assert!(body["takenNumbers"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_latest_activity_empty_store_is_zero() {
        let app = test_app!(Environment::Development);
        let req = test::TestRequest::get()
            .uri("/api/game/latest-activity")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["lastGameTime"], 0);
        assert_eq!(body["lastDrawTime"], 0);
        assert_eq!(body["totalActiveGames"], 0);
    }

    #[actix_web::test]
    async fn test_play_then_taken_numbers() {
        let app = test_app!(Environment::Development);
        let req = test::TestRequest::post()
            .uri("/api/game/play")
            .set_json(serde_json::json!({"userId": "0xabc", "selectedNumber": 17}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["session"]["selectedNumbers"], "17");

        let req = test::TestRequest::get()
            .uri("/api/game/taken-numbers")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["takenNumbers"], serde_json::json!([17]));
        assert_eq!(body["totalTaken"], 1);
    }

    #[actix_web::test]
    async fn test_play_out_of_range_is_400() {
        let app = test_app!(Environment::Development);
        let req = test::TestRequest::post()
            .uri("/api/game/play")
            .set_json(serde_json::json!({"userId": "0xabc", "selectedNumber": 100}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_non_get_on_read_endpoint_is_405() {
        let app = test_app!(Environment::Development);
        for uri in [
            "/api/game/taken-numbers",
            "/api/game/latest-activity",
            "/api/ongs/approved",
        ] {
            let req = test::TestRequest::post().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 405, "POST {uri}");
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], false);
        }
    }

    #[actix_web::test]
    async fn test_ongs_approved_returns_seeded_list() {
        let app = test_app!(Environment::Development);
        let req = test::TestRequest::get()
            .uri("/api/ongs/approved")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert!(!body["ongs"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_admin_forbidden_outside_development() {
        let app = test_app!(Environment::Production);
        // 已注册方法与未注册方法都必须 403
        let requests = [
            test::TestRequest::get().uri("/api/admin/contract/status"),
            test::TestRequest::post().uri("/api/admin/contract/draw"),
            test::TestRequest::delete().uri("/api/admin/contract/draw"),
        ];
        for req in requests {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), 403);
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], false);
            assert_eq!(body["error"], "Forbidden");
        }
    }

    #[actix_web::test]
    async fn test_admin_draw_in_development() {
        let app = test_app!(Environment::Development);
        let req = test::TestRequest::post()
            .uri("/api/game/play")
            .set_json(serde_json::json!({"userId": "0xabc", "selectedNumber": 5}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/contract/draw")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["confirmedSessions"], 1);

        let req = test::TestRequest::get()
            .uri("/api/admin/contract/status")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["drawsExecuted"], 1);
    }
}
