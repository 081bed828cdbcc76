use chrono::{DateTime, Utc};

/// 接口时间格式: epoch 毫秒, 缺失时间输出 0
pub fn epoch_millis(ts: Option<DateTime<Utc>>) -> i64 {
    ts.map(|t| t.timestamp_millis()).unwrap_or(0)
}
