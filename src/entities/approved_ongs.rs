use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 认证公益组织实体 (vetted charity)
/// is_active 控制是否对外可见; 管理在后台完成, 查询层只读
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "approved_ongs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// 组织名称 (唯一)
    pub name: String,
    /// 简介
    pub description: String,
    /// 使命宣言
    pub mission: String,
    /// UI 标签颜色
    pub color: String,
    /// 图标标识
    pub icon: String,
    /// 官网地址
    pub website: String,
    /// 是否启用 (gates visibility)
    pub is_active: bool,
    /// 创建时间
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
