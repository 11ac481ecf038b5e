//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 타입 대신 `Arc<dyn UserRepository>`에 의존하므로,
//! 실행 시 `STORAGE_BACKEND` 설정에 따라 MongoDB 또는 메모리 저장소를 주입할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::MongoUserRepository;
//!
//! let user_repo = MongoUserRepository::new(database);
//! user_repo.create_indexes().await?;
//! ```

pub mod users;
