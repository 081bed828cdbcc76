use std::sync::Arc;

use actix_web::{HttpResponse, ResponseError, Result, web};
use tokio::sync::Mutex;

use crate::config::Environment;
use crate::contract::MockLotteryContract;
use crate::error::AppError;
use crate::models::*;
use crate::services::DrawService;

/// mock 合约调试接口只在 development 下开放, 其余环境一律 403
fn ensure_development(env: &Environment) -> Option<HttpResponse> {
    if env.is_development() {
        None
    } else {
        Some(AppError::Forbidden.error_response())
    }
}

#[utoipa::path(
    get,
    path = "/admin/contract/status",
    tag = "admin",
    responses(
        (status = 200, description = "mock 合约当前状态", body = ContractStatusResponse),
        (status = 403, description = "非开发环境")
    )
)]
/// 查看 mock 合约状态 (号码范围 / 票价 / 开奖计数)
pub async fn contract_status(
    env: web::Data<Environment>,
    contract: web::Data<Arc<Mutex<MockLotteryContract>>>,
) -> Result<HttpResponse> {
    if let Some(forbidden) = ensure_development(&env) {
        return Ok(forbidden);
    }

    let contract = contract.lock().await;
    let config = contract.config();
    Ok(HttpResponse::Ok().json(ContractStatusResponse {
        success: true,
        min_number: config.min_number,
        max_number: config.max_number,
        ticket_price_cents: config.ticket_price_cents,
        donation_bp: config.donation_bp,
        draws_executed: contract.draws_executed(),
        last_winning_number: contract.last_winning_number(),
    }))
}

#[utoipa::path(
    post,
    path = "/admin/contract/draw",
    tag = "admin",
    responses(
        (status = 200, description = "开奖完成, 返回结算摘要", body = DrawResultResponse),
        (status = 403, description = "非开发环境"),
        (status = 500, description = "服务器错误")
    )
)]
/// 触发一次开奖: 抽号 -> 确认全部 pending 注单 -> 结算奖金与捐赠
pub async fn trigger_draw(
    env: web::Data<Environment>,
    service: web::Data<DrawService>,
) -> Result<HttpResponse> {
    if let Some(forbidden) = ensure_development(&env) {
        return Ok(forbidden);
    }

    match service.execute_draw().await {
        Ok(res) => Ok(HttpResponse::Ok().json(res)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/contract/reset",
    tag = "admin",
    responses(
        (status = 200, description = "合约计数器已重置", body = ContractResetResponse),
        (status = 403, description = "非开发环境")
    )
)]
/// 重置 mock 合约计数器 (不影响数据库记录)
pub async fn reset_contract(
    env: web::Data<Environment>,
    contract: web::Data<Arc<Mutex<MockLotteryContract>>>,
) -> Result<HttpResponse> {
    if let Some(forbidden) = ensure_development(&env) {
        return Ok(forbidden);
    }

    contract.lock().await.reset();
    Ok(HttpResponse::Ok().json(ContractResetResponse {
        success: true,
        message: "Mock contract counters reset".to_string(),
    }))
}

/// admin 作用域兜底: 环境校验在方法匹配之前,
/// 非开发环境下不论什么方法都是 403
pub async fn admin_default(env: web::Data<Environment>) -> Result<HttpResponse> {
    if let Some(forbidden) = ensure_development(&env) {
        return Ok(forbidden);
    }
    Ok(AppError::MethodNotAllowed.error_response())
}

/// 路由配置
pub fn admin_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/contract/status", web::get().to(contract_status))
            .route("/contract/draw", web::post().to(trigger_draw))
            .route("/contract/reset", web::post().to(reset_contract))
            .default_service(web::route().to(admin_default)),
    );
}
