//! 추월된 fetch 응답 무시용 티켓 카운터
//!
//! 빠르게 연달아 시작된 fetch는 순서가 뒤집혀 도착할 수 있다. 목록
//! 시그널을 덮어쓰는 모든 뷰는 fetch 시작 시 `begin`으로 티켓을 받고,
//! 응답 적용 전에 `is_current`로 자신이 아직 최신 요청인지 확인한다.
//! 더 새 요청에 밀린 응답은 버려진다 (last-request-wins).

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Default)]
pub struct FetchGuard {
    latest: Arc<AtomicU64>,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 새 fetch 시작. 이전 티켓은 전부 무효가 된다.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// 이 티켓의 응답을 아직 적용해도 되는가
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_invalidates_older_ones() {
        let guard = FetchGuard::new();
        let first = guard.begin();
        assert!(guard.is_current(first));

        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn clones_share_the_same_counter() {
        let guard = FetchGuard::new();
        let clone = guard.clone();

        let ticket = guard.begin();
        assert!(clone.is_current(ticket));

        clone.begin();
        assert!(!guard.is_current(ticket));
    }
}
