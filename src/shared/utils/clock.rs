//! 시간 소스
//! Time source
//!
//! 역할:
//! - 토큰 발급/만료 판단에 쓰이는 "현재 시각" 제공
//! - 테스트에서는 ManualClock으로 시간을 앞당겨 만료를 재현
//!
//! 사용 방법:
//! ```ignore
//! let clock = ManualClock::starting_now();
//! clock.advance(chrono::Duration::seconds(61));
//! ```

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 실제 시스템 시계
/// Wall clock backed by the OS
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 수동으로 조작하는 시계 (테스트용)
/// Manually driven clock for simulating elapsed time
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn starting_now() -> Self {
        Self::new(Utc::now())
    }

    /// 시간을 앞으로 이동
    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now = *now + by;
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.now.lock() = at;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}
