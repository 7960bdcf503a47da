//! 時刻の取得
//!
//! IDとタイムスタンプは保存時刻から作る。テストとWASMのために差し替え可能にしている。

use chrono::{DateTime, SecondsFormat, Utc};
use std::cell::Cell;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// OSの時計
#[cfg(feature = "native")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "native")]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 常に同じ時刻を返す
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// 呼ぶたびに一定ミリ秒進む時計
#[derive(Debug)]
pub struct StepClock {
    next_ms: Cell<i64>,
    step_ms: i64,
}

impl StepClock {
    pub fn new(start_ms: i64, step_ms: i64) -> Self {
        Self {
            next_ms: Cell::new(start_ms),
            step_ms,
        }
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        let ms = self.next_ms.get();
        self.next_ms.set(ms + self.step_ms);
        from_millis(ms)
    }
}

/// UNIXミリ秒から時刻へ（範囲外はエポック）
pub fn from_millis(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap_or_default()
}

/// ISO-8601（ミリ秒、UTCは `Z`）
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// 発行するIDのミリ秒値
///
/// 同じミリ秒に2回保存しても前回より必ず大きくなる。
pub fn issue_millis(now_ms: i64, last_ms: Option<i64>) -> i64 {
    match last_ms {
        Some(last) if now_ms <= last => last + 1,
        _ => now_ms,
    }
}

pub fn label_id(ms: i64) -> String {
    format!("tire_{}", ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_timestamp() {
        let at = from_millis(1_700_000_000_123);
        assert_eq!(iso_timestamp(at), "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn test_issue_millis_monotonic() {
        assert_eq!(issue_millis(100, None), 100);
        assert_eq!(issue_millis(150, Some(100)), 150);
        assert_eq!(issue_millis(100, Some(100)), 101);
        assert_eq!(issue_millis(90, Some(100)), 101);
    }

    #[test]
    fn test_step_clock() {
        let clock = StepClock::new(1_000, 250);
        assert_eq!(clock.now().timestamp_millis(), 1_000);
        assert_eq!(clock.now().timestamp_millis(), 1_250);
    }

    #[test]
    fn test_label_id() {
        assert_eq!(label_id(1_700_000_000_000), "tire_1700000000000");
    }
}
