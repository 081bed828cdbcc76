use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::game::taken_numbers,
        handlers::game::latest_activity,
        handlers::game::recent,
        handlers::game::play,
        handlers::ong::approved,
        handlers::admin::contract_status,
        handlers::admin::trigger_draw,
        handlers::admin::reset_contract,
    ),
    components(
        schemas(
            TakenNumbersResponse,
            LatestActivityResponse,
            GameSessionResponse,
            RecentGamesQuery,
            RecentGamesResponse,
            PlayRequest,
            PlayResponse,
            ApprovedOngResponse,
            ApprovedOngsResponse,
            ContractStatusResponse,
            DrawResultResponse,
            ContractResetResponse,
        )
    ),
    tags(
        (name = "game", description = "Lottery game API"),
        (name = "ongs", description = "Approved charity API"),
        (name = "admin", description = "Mock contract debug API (development only)"),
    ),
    info(
        title = "TimbaDAO Backend API",
        version = "1.0.0",
        description = "TimbaDAO lottery backend REST API documentation",
    ),
    servers(
        (url = "/api", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
