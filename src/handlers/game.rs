use actix_web::{HttpResponse, ResponseError, Result, web};

use crate::error::AppError;
use crate::models::*;
use crate::services::GameService;

#[utoipa::path(
    get,
    path = "/game/taken-numbers",
    tag = "game",
    responses(
        (status = 200, description = "当前被占用的号码 (升序去重)", body = TakenNumbersResponse),
        (status = 500, description = "服务器错误")
    )
)]
/// 最近 24 小时内未开奖注单占用的号码列表
pub async fn taken_numbers(service: web::Data<GameService>) -> Result<HttpResponse> {
    match service.taken_numbers().await {
        Ok(res) => Ok(HttpResponse::Ok().json(res)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/game/latest-activity",
    tag = "game",
    responses(
        (status = 200, description = "最近下注/开奖时间与未开奖注单数", body = LatestActivityResponse),
        (status = 500, description = "服务器错误")
    )
)]
/// 最近活动概览 (时间为 epoch 毫秒, 无记录时为 0)
pub async fn latest_activity(service: web::Data<GameService>) -> Result<HttpResponse> {
    match service.latest_activity().await {
        Ok(res) => Ok(HttpResponse::Ok().json(res)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/game/recent",
    tag = "game",
    params(
        ("limit" = Option<u64>, Query, description = "返回条数 (默认10, 最大50)")
    ),
    responses(
        (status = 200, description = "最新注单列表 (倒序)", body = RecentGamesResponse),
        (status = 500, description = "服务器错误")
    )
)]
/// 最新注单 (按下注时间倒序)
pub async fn recent(
    service: web::Data<GameService>,
    query: web::Query<RecentGamesQuery>,
) -> Result<HttpResponse> {
    match service.recent(&query.into_inner()).await {
        Ok(res) => Ok(HttpResponse::Ok().json(res)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/game/play",
    tag = "game",
    request_body = PlayRequest,
    responses(
        (status = 200, description = "下注成功, 返回创建的注单", body = PlayResponse),
        (status = 400, description = "号码越界或参数非法"),
        (status = 500, description = "服务器错误")
    )
)]
/// 记录一次下注 (创建 pending 注单)
pub async fn play(
    service: web::Data<GameService>,
    body: web::Json<PlayRequest>,
) -> Result<HttpResponse> {
    let req = body.into_inner();
    match service.play(&req.user_id, req.selected_number).await {
        Ok(res) => Ok(HttpResponse::Ok().json(res)),
        Err(e) => Ok(e.error_response()),
    }
}

/// 未匹配的方法统一回 405 信封
pub async fn method_not_allowed() -> Result<HttpResponse> {
    Ok(AppError::MethodNotAllowed.error_response())
}

/// 路由配置
pub fn game_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/game")
            .route("/taken-numbers", web::get().to(taken_numbers))
            .route("/latest-activity", web::get().to(latest_activity))
            .route("/recent", web::get().to(recent))
            .route("/play", web::post().to(play))
            .default_service(web::route().to(method_not_allowed)),
    );
}
