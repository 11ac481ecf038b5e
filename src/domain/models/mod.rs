//! # Domain Models Module
//!
//! 영구 저장되지 않는 도메인 모델과 값 객체를 정의합니다.
//!
//! - [`auth`] - 인증 경계로 전달되는 자격 증명과 인증된 요청 주체
//! - [`token`] - JWT 클레임

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
