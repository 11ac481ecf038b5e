//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`] trait이 서비스 계층이 기대하는 저장소 계약이며,
//! 두 가지 구현을 제공합니다.
//!
//! - [`user_repo::MongoUserRepository`] - MongoDB `users` 컬렉션 (운영)
//! - [`memory_repo::InMemoryUserRepository`] - 프로세스 메모리 (테스트, 로컬 개발)
//!
//! 두 구현 모두 이메일 유니크 제약을 저장소 레벨에서 강제하며,
//! 위반 시 `AppError::DuplicateRecord`를 반환합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, memory_repo::InMemoryUserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::users::user::UserEntity;

pub mod user_repo;
pub mod memory_repo;

pub use user_repo::MongoUserRepository;
pub use memory_repo::InMemoryUserRepository;

/// 사용자 저장소 계약
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserEntity>>;

    /// 공개 ID로 조회
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<UserEntity>>;

    /// 내부 ID가 없으면 새로 삽입하고, 있으면 같은 ID의 레코드를 교체합니다.
    ///
    /// 이메일이 다른 레코드와 겹치면 `DuplicateRecord`,
    /// 교체 대상이 없으면 `NotFound`를 반환합니다.
    async fn save(&self, user: UserEntity) -> AppResult<UserEntity>;

    /// 사용자와 내장된 주소를 함께 삭제합니다.
    async fn delete(&self, user: &UserEntity) -> AppResult<()>;

    /// 0부터 시작하는 페이지 조회
    ///
    /// 기본 정렬은 내부 ID(삽입 순서)이며, 범위를 벗어난 페이지는 빈 목록입니다.
    async fn find_page(&self, page: u64, limit: u64) -> AppResult<Vec<UserEntity>>;
}
