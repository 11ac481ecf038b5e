//! # 공개 ID 생성기
//!
//! 외부에 노출되는 고정 길이 랜덤 식별자를 생성합니다.
//! 충돌 확률은 무시할 수 있을 만큼 작지만 0은 아니므로,
//! 호출자는 저장소의 유니크 제약을 최종 방어선으로 사용합니다.

use std::fmt::Debug;
use rand::Rng;
use rand::distributions::Alphanumeric;

/// 공개 ID 생성 계약
pub trait PublicIdGenerator: Send + Sync + Debug {
    /// 정확히 `length`자인 영숫자 문자열을 생성합니다.
    fn generate(&self, length: usize) -> String;
}

/// `thread_rng` 기반 영숫자 생성기
#[derive(Debug, Clone, Default)]
pub struct RandomPublicIdGenerator;

impl RandomPublicIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl PublicIdGenerator for RandomPublicIdGenerator {
    fn generate(&self, length: usize) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}
