//! 사용자 계정 서비스
//!
//! 사용자 가입, 조회, 이름 변경, 삭제, 페이지 조회와 이메일/비밀번호 로그인을 제공하는
//! REST 서비스입니다. 로그인에 성공하면 JWT 액세스 토큰을 발급하고, 나머지 계정 API는
//! 이 토큰으로 보호됩니다.
//!
//! # Features
//!
//! - **사용자 관리**: 가입(주소 포함), 공개 ID 조회, 이름 변경, 삭제, 페이징
//! - **JWT 인증**: HS256 액세스 토큰 기반 상태 없는 인증
//! - **저장소 선택**: MongoDB 또는 메모리 저장소 (`STORAGE_BACKEND`)
//! - **표준 에러 본문**: 모든 실패는 `{timestamp, message}` 형태
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (UserService, TokenService)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserRepository trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB/Memory  │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_account_service::repositories::users::InMemoryUserRepository;
//! use user_account_service::services::auth::BcryptPasswordEncoder;
//! use user_account_service::services::users::UserService;
//! use user_account_service::utils::id_generator::RandomPublicIdGenerator;
//!
//! let user_service = UserService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(BcryptPasswordEncoder::from_env()),
//!     Arc::new(RandomPublicIdGenerator::new()),
//! );
//! let user = user_service.create_user(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
