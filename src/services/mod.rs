//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 사용자 계정 관리와 인증 기능을 담당합니다.
//! 서비스는 저장소와 인코더를 trait object로 주입받고, `main`에서 한 번 생성되어
//! `web::Data`로 핸들러에 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, auth::TokenService};
//!
//! let token_service = TokenService::from_env();
//! let user = user_service.authenticate(&email, &password).await?;
//! let token = token_service.generate_access_token(&user.email)?;
//! ```

pub mod users;
pub mod auth;
