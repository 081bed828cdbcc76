use rand::Rng;

use crate::config::ContractConfig;
use crate::error::{AppError, AppResult};

/// 本地调试用的 mock 彩票合约
///
/// 不是链上实现: 只在内存里维护号码范围 / 票价 / 开奖计数,
/// 开奖号码用本地随机数生成。部署环境下相关接口整体 403。
pub struct MockLotteryContract {
    config: ContractConfig,
    draws_executed: u64,
    last_winning_number: Option<u32>,
}

/// 一次开奖的资金结算
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawSettlement {
    /// 总投注额 (美分)
    pub pot_cents: i64,
    /// 捐赠额 (美分)
    pub donation_cents: i64,
    /// 每位中奖者分得 (美分), 无人中奖为 0
    pub prize_per_winner_cents: i64,
    /// 无人中奖时滚存的奖池 (美分)
    pub rollover_cents: i64,
}

impl MockLotteryContract {
    pub fn new(config: ContractConfig) -> Self {
        Self {
            config,
            draws_executed: 0,
            last_winning_number: None,
        }
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    pub fn draws_executed(&self) -> u64 {
        self.draws_executed
    }

    pub fn last_winning_number(&self) -> Option<u32> {
        self.last_winning_number
    }

    /// 号码是否在合约允许范围内
    pub fn is_number_in_range(&self, number: u32) -> bool {
        number >= self.config.min_number && number <= self.config.max_number
    }

    /// 抽取开奖号码 (均匀分布), 不修改任何计数
    pub fn pick_number(&self) -> u32 {
        let mut rng = rand::thread_rng();
        rng.gen_range(self.config.min_number..=self.config.max_number)
    }

    /// 记录一次已确认的开奖; 只有落库成功后才调用,
    /// 失败回滚的开奖不会推进 status 的计数器
    pub fn record_draw(&mut self, winning: u32) {
        self.draws_executed += 1;
        self.last_winning_number = Some(winning);
    }

    /// 结算: pot = 票数 × 票价, 捐赠按 bp 扣除, 余下奖池在中奖者间均分。
    /// 无人中奖时奖池全额滚存 (只报告, 不持久化)。
    pub fn settle(&self, tickets_sold: u64, winners: u64) -> AppResult<DrawSettlement> {
        let pot_cents = (tickets_sold as i64)
            .checked_mul(self.config.ticket_price_cents)
            .ok_or_else(|| AppError::InternalError("Pot size overflow".into()))?;
        let donation_cents = pot_cents * self.config.donation_bp / 10_000;
        let prize_pool_cents = pot_cents - donation_cents;

        let (prize_per_winner_cents, rollover_cents) = if winners == 0 {
            (0, prize_pool_cents)
        } else {
            // 整数均分, 余数滚存
            let per = prize_pool_cents / winners as i64;
            (per, prize_pool_cents - per * winners as i64)
        };

        Ok(DrawSettlement {
            pot_cents,
            donation_cents,
            prize_per_winner_cents,
            rollover_cents,
        })
    }

    /// 重置调试计数器, 不影响数据库
    pub fn reset(&mut self) {
        self.draws_executed = 0;
        self.last_winning_number = None;
    }
}
