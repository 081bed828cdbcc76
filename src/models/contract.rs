use serde::Serialize;
use utoipa::ToSchema;

/// Mock 合约当前状态 (仅调试环境可见)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContractStatusResponse {
    pub success: bool,
    pub min_number: u32,
    pub max_number: u32,
    pub ticket_price_cents: i64,
    /// 捐赠比例 (basis points)
    pub donation_bp: i64,
    /// 启动以来执行过的开奖次数
    pub draws_executed: u64,
    /// 最近一次开奖号码
    pub last_winning_number: Option<u32>,
}

/// 一次开奖的结算结果
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrawResultResponse {
    pub success: bool,
    pub winning_number: u32,
    /// 本次被确认的注单数量
    pub confirmed_sessions: u64,
    /// 中奖注单数量
    pub winners: u64,
    /// 每位中奖者分得奖金 (美分), 无人中奖为 0
    pub prize_per_winner_cents: i64,
    /// 捐给公益组织的金额 (美分)
    pub donation_cents: i64,
    /// 无人中奖时未分配的奖池 (美分)
    pub rollover_cents: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContractResetResponse {
    pub success: bool,
    pub message: String,
}
