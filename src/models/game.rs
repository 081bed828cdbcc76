use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::game_session_entity as session_entity;
use crate::utils::epoch_millis;

/// taken-numbers 响应: 当前被未开奖注单占用的号码 (升序去重)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TakenNumbersResponse {
    pub success: bool,
    /// 已被占用的号码, 严格递增
    pub taken_numbers: Vec<u32>,
    /// 等于 taken_numbers 的长度
    pub total_taken: u64,
}

/// latest-activity 响应; 时间均为 epoch 毫秒, 无记录时为 0
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LatestActivityResponse {
    pub success: bool,
    /// 最近一次下注时间
    pub last_game_time: i64,
    /// 最近一次开奖确认时间
    pub last_draw_time: i64,
    /// 未开奖注单数量
    pub total_active_games: u64,
}

/// 单条注单记录
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameSessionResponse {
    pub id: i64,
    /// 钱包地址
    pub user_id: String,
    pub selected_numbers: String,
    pub winning_numbers: Option<String>,
    pub is_winner: bool,
    /// epoch 毫秒
    pub played_at: i64,
    /// epoch 毫秒, 未开奖为 0
    pub confirmed_at: i64,
    pub prize_amount_cents: i64,
}

impl From<session_entity::Model> for GameSessionResponse {
    fn from(m: session_entity::Model) -> Self {
        GameSessionResponse {
            id: m.id,
            user_id: m.user_id,
            selected_numbers: m.selected_numbers,
            winning_numbers: m.winning_numbers,
            is_winner: m.is_winner,
            played_at: epoch_millis(m.played_at),
            confirmed_at: epoch_millis(m.confirmed_at),
            prize_amount_cents: m.prize_amount_cents,
        }
    }
}

/// recent 查询参数
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RecentGamesQuery {
    /// 返回条数 (默认 10, 最大 50)
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentGamesResponse {
    pub success: bool,
    /// 最新的注单, 按下注时间倒序
    pub sessions: Vec<GameSessionResponse>,
}

/// play 请求体
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayRequest {
    /// 钱包地址
    pub user_id: String,
    /// 所选号码, 必须在合约号码范围内
    pub selected_number: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayResponse {
    pub success: bool,
    pub session: GameSessionResponse,
}
