//! 사용자 관리 서비스 모듈
//!
//! 사용자 계정 생명주기와 관련된 비즈니스 로직을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일 중복 방지 (사전 검사 + 저장소 유니크 제약)
//! - 평문 비밀번호는 어떤 반환 타입에도 포함되지 않음
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let response = user_service.create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::{UserService, MAX_PUBLIC_ID_ATTEMPTS, PUBLIC_ID_LENGTH};
