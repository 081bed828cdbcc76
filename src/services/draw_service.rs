use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set, TransactionTrait,
};
use tokio::sync::Mutex;

use crate::contract::MockLotteryContract;
use crate::entities::game_session_entity as sessions;
use crate::error::AppResult;
use crate::models::DrawResultResponse;
use crate::utils::parse_selected_number;

#[derive(Clone)]
pub struct DrawService {
    pool: DatabaseConnection,
    contract: Arc<Mutex<MockLotteryContract>>,
}

impl DrawService {
    pub fn new(pool: DatabaseConnection, contract: Arc<Mutex<MockLotteryContract>>) -> Self {
        Self { pool, contract }
    }

    /// 执行一次开奖
    ///
    /// 逻辑:
    /// 1. mock 合约抽取开奖号码
    /// 2. 事务内捞出全部未开奖注单, 逐条盖章 (winning_numbers / is_winner / confirmed_at)
    /// 3. 按票数结算: 捐赠先扣, 余下奖池在中奖者间均分
    /// 4. 返回开奖摘要
    ///
    /// 合约锁贯穿整个事务, 并发触发开奖时串行执行。
    /// 开奖计数在事务提交之后才记录, 回滚的开奖不影响 status。
    /// selected_numbers 解析失败的脏数据按未中奖确认, 不阻塞整轮开奖。
    pub async fn execute_draw(&self) -> AppResult<DrawResultResponse> {
        let mut contract = self.contract.lock().await;
        let winning_number = contract.pick_number();
        let winning_str = winning_number.to_string();

        let txn = self.pool.begin().await?;

        let pending = sessions::Entity::find()
            .filter(sessions::Column::WinningNumbers.is_null())
            .all(&txn)
            .await?;

        let tickets_sold = pending.len() as u64;
        let winners = pending
            .iter()
            .filter(|s| parse_selected_number(&s.selected_numbers) == Some(winning_number))
            .count() as u64;

        let settlement = contract.settle(tickets_sold, winners)?;

        let now = Utc::now();
        for session in pending {
            let won = parse_selected_number(&session.selected_numbers) == Some(winning_number);
            if parse_selected_number(&session.selected_numbers).is_none() {
                log::warn!(
                    "Session {} has unparsable selected_numbers {:?}, confirming as loser",
                    session.id,
                    session.selected_numbers
                );
            }

            let mut am = session.into_active_model();
            am.winning_numbers = Set(Some(winning_str.clone()));
            am.is_winner = Set(won);
            am.confirmed_at = Set(Some(now));
            am.prize_amount_cents = Set(if won {
                settlement.prize_per_winner_cents
            } else {
                0
            });
            am.update(&txn).await?;
        }

        txn.commit().await?;
        contract.record_draw(winning_number);

        log::info!(
            "Draw #{} confirmed: winning number {}, {} sessions, {} winners, donation {} cents",
            contract.draws_executed(),
            winning_number,
            tickets_sold,
            winners,
            settlement.donation_cents
        );

        Ok(DrawResultResponse {
            success: true,
            winning_number,
            confirmed_sessions: tickets_sold,
            winners,
            prize_per_winner_cents: settlement.prize_per_winner_cents,
            donation_cents: settlement.donation_cents,
            rollover_cents: settlement.rollover_cents,
        })
    }
}
