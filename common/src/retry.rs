//! 분석 결과 조회 재시도
//!
//! 분석 산출물은 비동기로 만들어지므로 조회 엔드포인트는 준비 전까지
//! 404를 돌려준다. 준비 안 됨(404)은 재시도, 그 외 실패는 즉시 종료,
//! 시도 횟수를 다 쓰면 최종 실패로 처리한다. 시도는 직렬로만 진행된다.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

/// 재시도 정책
///
/// 기본값(5회 / 500ms / ×1.5)은 운영에서 쓰던 수치를 유지하되
/// 상수가 아닌 설정으로 둔다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub backoff_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay_ms: 500,
            backoff_factor: 1.5,
        }
    }
}

impl RetryPolicy {
    /// n번째 재시도 전 대기 시간 (n은 1부터)
    pub fn delay(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1) as i32;
        let millis = self.initial_delay_ms as f64 * self.backoff_factor.powi(exponent);
        Duration::from_millis(millis.round() as u64)
    }
}

/// 조회 한 번의 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome<T> {
    /// 산출물 준비 완료
    Ready(T),
    /// 아직 준비 안 됨 (404) — 재시도 대상
    NotReady,
}

/// 준비될 때까지 재시도하며 조회한다.
///
/// `attempt`는 시도 번호(1부터)를 받아 조회 한 번을 수행한다.
/// `Err`은 즉시 전파되고, `NotReady`가 `max_attempts`회 이어지면
/// [`Error::RetryExhausted`]로 끝난다. `sleep`은 실행 환경의 타이머를
/// 주입받기 위한 것으로, 다음 시도는 이전 시도와 대기가 모두 끝난
/// 뒤에만 시작된다.
pub async fn fetch_with_retry<T, F, Fut, S, SFut>(
    policy: &RetryPolicy,
    mut attempt: F,
    sleep: S,
) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<PollOutcome<T>>>,
    S: Fn(Duration) -> SFut,
    SFut: Future<Output = ()>,
{
    for n in 1..=policy.max_attempts {
        if n > 1 {
            sleep(policy.delay(n - 1)).await;
        }

        match attempt(n).await? {
            PollOutcome::Ready(value) => return Ok(value),
            PollOutcome::NotReady => {}
        }
    }

    Err(Error::RetryExhausted {
        attempts: policy.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn test_policy_defaults() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.initial_delay_ms, 500);
        assert_eq!(policy.backoff_factor, 1.5);
    }

    #[test]
    fn test_delay_backoff_sequence() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay(1), Duration::from_millis(500));
        assert_eq!(policy.delay(2), Duration::from_millis(750));
        assert_eq!(policy.delay(3), Duration::from_millis(1125));
        assert_eq!(policy.delay(4), Duration::from_millis(1688)); // 1687.5 반올림
    }

    #[test]
    fn test_ready_on_fifth_attempt() {
        // 404 네 번 뒤 성공 → 다섯 번째 시도의 값을 돌려준다
        let policy = RetryPolicy::default();
        let calls = RefCell::new(0u32);

        let result = block_on(fetch_with_retry(
            &policy,
            |n| {
                *calls.borrow_mut() += 1;
                async move {
                    if n < 5 {
                        Ok(PollOutcome::NotReady)
                    } else {
                        Ok(PollOutcome::Ready("분석 결과"))
                    }
                }
            },
            |_| async {},
        ));

        assert_eq!(result.unwrap(), "분석 결과");
        assert_eq!(*calls.borrow(), 5);
    }

    #[test]
    fn test_exhausted_after_max_attempts() {
        let policy = RetryPolicy::default();
        let calls = RefCell::new(0u32);

        let result: Result<()> = block_on(fetch_with_retry(
            &policy,
            |_| {
                *calls.borrow_mut() += 1;
                async { Ok(PollOutcome::NotReady) }
            },
            |_| async {},
        ));

        assert!(matches!(result, Err(Error::RetryExhausted { attempts: 5 })));
        assert_eq!(*calls.borrow(), 5); // 정확히 5회만 시도
    }

    #[test]
    fn test_terminal_error_stops_immediately() {
        let policy = RetryPolicy::default();
        let calls = RefCell::new(0u32);

        let result: Result<()> = block_on(fetch_with_retry(
            &policy,
            |n| {
                *calls.borrow_mut() += 1;
                async move {
                    if n == 2 {
                        Err(Error::Http(500))
                    } else {
                        Ok(PollOutcome::NotReady)
                    }
                }
            },
            |_| async {},
        ));

        assert!(matches!(result, Err(Error::Http(500))));
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn test_sleep_receives_backoff_delays() {
        let policy = RetryPolicy::default();
        let delays = RefCell::new(Vec::new());

        let result: Result<()> = block_on(fetch_with_retry(
            &policy,
            |_| async { Ok(PollOutcome::NotReady) },
            |d| {
                delays.borrow_mut().push(d);
                async {}
            },
        ));

        assert!(result.is_err());
        assert_eq!(
            *delays.borrow(),
            vec![
                Duration::from_millis(500),
                Duration::from_millis(750),
                Duration::from_millis(1125),
                Duration::from_millis(1688),
            ]
        );
    }

    #[test]
    fn test_immediate_success_no_sleep() {
        let policy = RetryPolicy::default();
        let slept = RefCell::new(false);

        let result = block_on(fetch_with_retry(
            &policy,
            |_| async { Ok(PollOutcome::Ready(42)) },
            |_| {
                *slept.borrow_mut() = true;
                async {}
            },
        ));

        assert_eq!(result.unwrap(), 42);
        assert!(!*slept.borrow());
    }
}
