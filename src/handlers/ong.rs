use actix_web::{HttpResponse, ResponseError, Result, web};

use crate::handlers::game::method_not_allowed;
use crate::models::*;
use crate::services::OngService;

#[utoipa::path(
    get,
    path = "/ongs/approved",
    tag = "ongs",
    responses(
        (status = 200, description = "启用中的公益组织 (创建时间倒序)", body = ApprovedOngsResponse),
        (status = 500, description = "服务器错误")
    )
)]
/// 认证公益组织列表
pub async fn approved(service: web::Data<OngService>) -> Result<HttpResponse> {
    match service.list_approved().await {
        Ok(res) => Ok(HttpResponse::Ok().json(res)),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn ong_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/ongs")
            .route("/approved", web::get().to(approved))
            .default_service(web::route().to(method_not_allowed)),
    );
}
