//! # Data Transfer Objects
//!
//! 서비스 경계와 HTTP 경계에서 주고받는 데이터 형태를 정의합니다.
//!
//! - `users::user_dto` - 서비스 계층이 반환하는 저장소 독립적 전송 레코드
//! - `users::request` - HTTP 요청 본문 및 쿼리 (validator 기반 검증)
//! - `users::response` - HTTP 응답 본문

pub mod users;

pub use users::*;
