//! # Core Module
//!
//! 서비스 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **ErrorMessage**: 모든 실패에 공통인 `{timestamp, message}` 응답 envelope
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현과 상태 코드 매핑
//! - **자동 변환**: `ErrorContext`를 통한 외부 에러 변환
//!
//! ## 에러 처리 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn get_user_handler(
//!     service: web::Data<UserService>,
//!     user_id: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let user = service.get_user_by_user_id(&user_id).await?;
//!     Ok(HttpResponse::Ok().json(UserResponse::from(user)))
//! }
//! ```

pub mod errors;

pub use errors::*;
