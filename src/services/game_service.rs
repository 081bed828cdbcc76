use chrono::{Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::config::ContractConfig;
use crate::entities::game_session_entity as sessions;
use crate::error::{AppError, AppResult};
use crate::models::{
    GameSessionResponse, LatestActivityResponse, PlayResponse, RecentGamesQuery,
    RecentGamesResponse, TakenNumbersResponse,
};
use crate::utils::{dedup_sorted, epoch_millis, parse_selected_number};

/// 占号窗口: 只有最近 24 小时内的未开奖注单才算占用号码
const TAKEN_WINDOW_HOURS: i64 = 24;

const RECENT_DEFAULT_LIMIT: u64 = 10;
const RECENT_MAX_LIMIT: u64 = 50;

#[derive(Clone)]
pub struct GameService {
    pool: DatabaseConnection,
    contract: ContractConfig,
}

impl GameService {
    pub fn new(pool: DatabaseConnection, contract: ContractConfig) -> Self {
        Self { pool, contract }
    }

    /// 当前被占用的号码
    ///
    /// 取最近 24 小时内未开奖的注单, 解析所选号码后去重升序返回。
    /// 无法解析为整数的历史脏数据跳过并告警, 不让单条坏记录打挂公共接口。
    pub async fn taken_numbers(&self) -> AppResult<TakenNumbersResponse> {
        let window_start = Utc::now() - Duration::hours(TAKEN_WINDOW_HOURS);

        let pending = sessions::Entity::find()
            .filter(sessions::Column::WinningNumbers.is_null())
            .filter(sessions::Column::PlayedAt.gte(window_start))
            .all(&self.pool)
            .await?;

        let mut claimed = Vec::with_capacity(pending.len());
        for s in &pending {
            match parse_selected_number(&s.selected_numbers) {
                Some(n) => claimed.push(n),
                None => {
                    log::warn!(
                        "Session {} has unparsable selected_numbers {:?}, skipping",
                        s.id,
                        s.selected_numbers
                    );
                }
            }
        }

        let taken = dedup_sorted(claimed);
        let total = taken.len() as u64;

        Ok(TakenNumbersResponse {
            success: true,
            taken_numbers: taken,
            total_taken: total,
        })
    }

    /// 最近活动: 最近一次下注 / 最近一次开奖 / 未开奖注单数
    pub async fn latest_activity(&self) -> AppResult<LatestActivityResponse> {
        let last_game = sessions::Entity::find()
            .order_by(sessions::Column::PlayedAt, Order::Desc)
            .one(&self.pool)
            .await?;

        let last_draw = sessions::Entity::find()
            .filter(sessions::Column::ConfirmedAt.is_not_null())
            .order_by(sessions::Column::ConfirmedAt, Order::Desc)
            .one(&self.pool)
            .await?;

        let total_active = sessions::Entity::find()
            .filter(sessions::Column::WinningNumbers.is_null())
            .count(&self.pool)
            .await?;

        Ok(LatestActivityResponse {
            success: true,
            last_game_time: epoch_millis(last_game.and_then(|s| s.played_at)),
            last_draw_time: epoch_millis(last_draw.and_then(|s| s.confirmed_at)),
            total_active_games: total_active,
        })
    }

    /// 最新注单列表 (倒序)
    pub async fn recent(&self, query: &RecentGamesQuery) -> AppResult<RecentGamesResponse> {
        let limit = query
            .limit
            .unwrap_or(RECENT_DEFAULT_LIMIT)
            .clamp(1, RECENT_MAX_LIMIT);

        let list = sessions::Entity::find()
            .order_by(sessions::Column::PlayedAt, Order::Desc)
            .limit(limit)
            .all(&self.pool)
            .await?;

        Ok(RecentGamesResponse {
            success: true,
            sessions: list.into_iter().map(Into::into).collect(),
        })
    }

    /// 记录一次新下注 (pending, 等待开奖)
    ///
    /// 不做占号唯一性校验: 前端通过 taken-numbers 提示, 重复选号允许共存。
    pub async fn play(&self, user_id: &str, selected_number: u32) -> AppResult<PlayResponse> {
        if user_id.trim().is_empty() {
            return Err(AppError::ValidationError("userId must not be empty".into()));
        }
        if selected_number < self.contract.min_number || selected_number > self.contract.max_number
        {
            return Err(AppError::ValidationError(format!(
                "selectedNumber must be between {} and {}",
                self.contract.min_number, self.contract.max_number
            )));
        }

        let model = sessions::ActiveModel {
            user_id: Set(user_id.to_string()),
            selected_numbers: Set(selected_number.to_string()),
            winning_numbers: Set(None),
            is_winner: Set(false),
            played_at: Set(Some(Utc::now())),
            prize_amount_cents: Set(0),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(PlayResponse {
            success: true,
            session: GameSessionResponse::from(model),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup() -> GameService {
        let pool = Database::connect("sqlite::memory:")
            .await
            .expect("sqlite memory");
        Migrator::up(&pool, None).await.expect("migrations");
        GameService::new(pool, ContractConfig::default())
    }

    #[tokio::test]
    async fn test_taken_numbers_empty() {
        let svc = setup().await;
        let res = svc.taken_numbers().await.unwrap();
        assert!(res.success);
        assert!(res.taken_numbers.is_empty());
        assert_eq!(res.total_taken, 0);
    }

    #[tokio::test]
    async fn test_taken_numbers_dedups_and_sorts() {
        let svc = setup().await;
        for n in [9u32, 3, 9, 1] {
            svc.play("wallet-a", n).await.unwrap();
        }
        let res = svc.taken_numbers().await.unwrap();
        assert_eq!(res.taken_numbers, vec![1, 3, 9]);
        assert_eq!(res.total_taken, 3);
        assert!(res.taken_numbers.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_taken_numbers_skips_unparsable_rows() {
        let svc = setup().await;
        svc.play("wallet-a", 7).await.unwrap();
        // 直接写入一条脏数据, 模拟历史不合法记录
        sessions::ActiveModel {
            user_id: Set("wallet-b".into()),
            selected_numbers: Set("not-a-number".into()),
            winning_numbers: Set(None),
            is_winner: Set(false),
            played_at: Set(Some(Utc::now())),
            prize_amount_cents: Set(0),
            ..Default::default()
        }
        .insert(&svc.pool)
        .await
        .unwrap();

        let res = svc.taken_numbers().await.unwrap();
        assert_eq!(res.taken_numbers, vec![7]);
        assert_eq!(res.total_taken, 1);
    }

    #[tokio::test]
    async fn test_taken_numbers_ignores_old_sessions() {
        let svc = setup().await;
        let old = Utc::now() - Duration::hours(25);
        sessions::ActiveModel {
            user_id: Set("wallet-old".into()),
            selected_numbers: Set("42".into()),
            winning_numbers: Set(None),
            is_winner: Set(false),
            played_at: Set(Some(old)),
            prize_amount_cents: Set(0),
            ..Default::default()
        }
        .insert(&svc.pool)
        .await
        .unwrap();

        let res = svc.taken_numbers().await.unwrap();
        assert!(res.taken_numbers.is_empty());
    }

    #[tokio::test]
    async fn test_latest_activity_empty_store() {
        let svc = setup().await;
        let res = svc.latest_activity().await.unwrap();
        assert_eq!(res.last_game_time, 0);
        assert_eq!(res.last_draw_time, 0);
        assert_eq!(res.total_active_games, 0);
    }

    #[tokio::test]
    async fn test_latest_activity_counts_pending() {
        let svc = setup().await;
        svc.play("wallet-a", 1).await.unwrap();
        svc.play("wallet-b", 2).await.unwrap();
        let res = svc.latest_activity().await.unwrap();
        assert_eq!(res.total_active_games, 2);
        assert!(res.last_game_time > 0);
        // 还没开过奖
        assert_eq!(res.last_draw_time, 0);
    }

    #[tokio::test]
    async fn test_recent_orders_newest_first() {
        let svc = setup().await;
        for n in 0..5u32 {
            svc.play("wallet-a", n).await.unwrap();
        }
        let res = svc
            .recent(&RecentGamesQuery { limit: Some(3) })
            .await
            .unwrap();
        assert_eq!(res.sessions.len(), 3);
        assert!(
            res.sessions
                .windows(2)
                .all(|w| w[0].played_at >= w[1].played_at)
        );
    }

    #[tokio::test]
    async fn test_play_rejects_out_of_range() {
        let svc = setup().await;
        let err = svc.play("wallet-a", 100).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_play_rejects_empty_user() {
        let svc = setup().await;
        let err = svc.play("  ", 5).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
