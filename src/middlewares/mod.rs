//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더에서 JWT 추출 및 검증
//! - 검증된 주체를 request extension에 `AuthenticatedUser`로 저장
//! - 실패 시 401과 표준 에러 본문(`{timestamp, message}`)으로 즉시 응답
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .app_data(web::Data::new(TokenService::from_env()))
//!     .service(
//!         web::scope("/api/v1/users")
//!             .wrap(AuthMiddleware::required())
//!             .service(get_user)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
