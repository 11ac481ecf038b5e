//! 비밀번호 해싱
//!
//! 단방향 적응형 해시(bcrypt)로 비밀번호를 저장하고 검증합니다.

use std::fmt::Debug;
use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// 비밀번호 해싱 계약
pub trait PasswordEncoder: Send + Sync + Debug {
    /// 평문 비밀번호를 해시합니다. 같은 입력도 솔트에 따라 매번 다른 결과가 나옵니다.
    fn encode(&self, raw_password: &str) -> AppResult<String>;

    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    fn matches(&self, raw_password: &str, encoded_password: &str) -> bool;
}

/// bcrypt 기반 구현
#[derive(Debug, Clone)]
pub struct BcryptPasswordEncoder {
    cost: u32,
}

impl BcryptPasswordEncoder {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// `BCRYPT_COST` 또는 환경별 기본 cost 사용
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }
}

impl PasswordEncoder for BcryptPasswordEncoder {
    fn encode(&self, raw_password: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();
        let encoded = bcrypt::hash(raw_password, self.cost).context("비밀번호 해싱 실패")?;

        log::info!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(encoded)
    }

    fn matches(&self, raw_password: &str, encoded_password: &str) -> bool {
        match bcrypt::verify(raw_password, encoded_password) {
            Ok(valid) => valid,
            Err(e) => {
                log::warn!("비밀번호 검증 실패: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_and_match() {
        let encoder = BcryptPasswordEncoder::new(4);

        let encoded = encoder.encode("Password123").unwrap();

        assert_ne!(encoded, "Password123");
        assert!(encoder.matches("Password123", &encoded));
        assert!(!encoder.matches("password123", &encoded));
    }

    #[test]
    fn test_encoding_is_salted() {
        let encoder = BcryptPasswordEncoder::new(4);

        let first = encoder.encode("Password123").unwrap();
        let second = encoder.encode("Password123").unwrap();

        assert_ne!(first, second);
        assert!(encoder.matches("Password123", &second));
    }

    #[test]
    fn test_malformed_hash_does_not_match() {
        let encoder = BcryptPasswordEncoder::new(4);

        assert!(!encoder.matches("Password123", "not-a-bcrypt-hash"));
    }
}
