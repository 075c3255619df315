//! bcrypt implementation of the [`PasswordHasher`] port.
//!
//! Each hash runs on Tokio's blocking pool so that the async workers stay
//! free while bcrypt grinds through its rounds.

use std::ops::RangeInclusive;

use async_trait::async_trait;

use crate::domain::ports::{PasswordHashError, PasswordHasher};
use crate::domain::{Password, PasswordHash};

/// Work factors bcrypt accepts.
pub const BCRYPT_COST_RANGE: RangeInclusive<u32> = 4..=31;

/// Hashes passwords with bcrypt at a fixed cost.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher using `cost` rounds.
    ///
    /// # Errors
    /// Returns [`PasswordHashError::Configuration`] when `cost` is outside
    /// [`BCRYPT_COST_RANGE`].
    pub fn new(cost: u32) -> Result<Self, PasswordHashError> {
        if !BCRYPT_COST_RANGE.contains(&cost) {
            return Err(PasswordHashError::configuration(format!(
                "bcrypt cost {cost} outside {}..={}",
                BCRYPT_COST_RANGE.start(),
                BCRYPT_COST_RANGE.end()
            )));
        }
        Ok(Self { cost })
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHashError> {
        let password = password.clone();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password.expose(), cost))
            .await
            .map_err(|err| PasswordHashError::hashing(format!("hashing task failed: {err}")))?
            .map(PasswordHash::new)
            .map_err(|err| PasswordHashError::hashing(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    use rstest::rstest;

    #[rstest]
    #[case(3)]
    #[case(32)]
    fn out_of_range_costs_are_rejected(#[case] cost: u32) {
        let err = BcryptPasswordHasher::new(cost).expect_err("cost rejected");
        assert!(matches!(err, PasswordHashError::Configuration { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn hashes_verify_and_are_salted() {
        let hasher = BcryptPasswordHasher::new(4).expect("valid cost");
        let password = Password::new("correct horse").expect("valid password");

        let first = hasher.hash(&password).await.expect("hash");
        let second = hasher.hash(&password).await.expect("hash");

        assert_ne!(first, second);
        assert!(first.as_str().starts_with("$2"));
        assert!(bcrypt::verify("correct horse", first.as_str()).expect("verify"));
        assert!(!bcrypt::verify("wrong", first.as_str()).expect("verify"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn hashing_leaves_runtime_free_for_other_tasks() {
        let hasher = BcryptPasswordHasher::new(12).expect("valid cost");
        let password = Password::new("correct horse").expect("valid password");
        let start = Instant::now();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            start.elapsed()
        });

        hasher.hash(&password).await.expect("hash");
        let hashed_after = start.elapsed();
        let timer_fired_after = timer.await.expect("timer task");

        assert!(
            timer_fired_after < hashed_after,
            "timer fired after {timer_fired_after:?}, hash finished after {hashed_after:?}"
        );
    }
}
