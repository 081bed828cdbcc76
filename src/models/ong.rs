use serde::Serialize;
use utoipa::ToSchema;

use crate::entities::approved_ong_entity as ong_entity;
use crate::utils::epoch_millis;

/// 公益组织信息 (对外展示)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedOngResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub mission: String,
    /// UI 标签颜色
    pub color: String,
    pub icon: String,
    pub website: String,
    /// epoch 毫秒
    pub created_at: i64,
}

impl From<ong_entity::Model> for ApprovedOngResponse {
    fn from(m: ong_entity::Model) -> Self {
        ApprovedOngResponse {
            id: m.id,
            name: m.name,
            description: m.description,
            mission: m.mission,
            color: m.color,
            icon: m.icon,
            website: m.website,
            created_at: epoch_millis(m.created_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedOngsResponse {
    pub success: bool,
    pub ongs: Vec<ApprovedOngResponse>,
}
