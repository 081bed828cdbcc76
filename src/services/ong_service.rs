use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder};

use crate::entities::approved_ong_entity as ongs;
use crate::error::AppResult;
use crate::models::ApprovedOngsResponse;

#[derive(Clone)]
pub struct OngService {
    pool: DatabaseConnection,
}

impl OngService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 获取启用中的公益组织 (创建时间倒序)
    pub async fn list_approved(&self) -> AppResult<ApprovedOngsResponse> {
        let list = ongs::Entity::find()
            .filter(ongs::Column::IsActive.eq(true))
            .order_by(ongs::Column::CreatedAt, Order::Desc)
            .all(&self.pool)
            .await?;

        Ok(ApprovedOngsResponse {
            success: true,
            ongs: list.into_iter().map(Into::into).collect(),
        })
    }
}
