//! 인증 관련 서비스 모듈
//!
//! - [`password_encoder`] - bcrypt 비밀번호 해싱/검증
//! - [`token_service`] - JWT 액세스 토큰 발급/검증

pub mod password_encoder;
pub mod token_service;

pub use password_encoder::{PasswordEncoder, BcryptPasswordEncoder};
pub use token_service::TokenService;
