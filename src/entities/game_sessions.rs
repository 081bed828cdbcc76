use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 游戏会话实体 (one lottery play)
/// 说明:
/// - selected_numbers 保存用户选择的数字字符串 (链上格式, 需解析为整数)
/// - winning_numbers 在开奖确认前为 NULL, 以此区分 pending / confirmed
/// - 记录只在开奖确认时被修改一次, 从不删除
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "game_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// 钱包地址 (opaque string)
    pub user_id: String,
    /// 用户选择的数字 (digit string)
    pub selected_numbers: String,
    /// 开奖号码; NULL = 未开奖 (pending)
    pub winning_numbers: Option<String>,
    /// 是否中奖
    pub is_winner: bool,
    /// 下注时间
    pub played_at: Option<DateTime<Utc>>,
    /// 开奖确认时间
    pub confirmed_at: Option<DateTime<Utc>>,
    /// 奖金 (美分), 未中奖为 0
    pub prize_amount_cents: i64,
}

impl Model {
    /// Pending = not yet stamped by a draw.
    pub fn is_pending(&self) -> bool {
        self.winning_numbers.is_none()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
