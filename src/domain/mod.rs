//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 저장 레코드와 경계 전송 형태를 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 영구 저장 레코드 (UserEntity, AddressEntity)
//! ├── DTOs          - 서비스 경계 전송 형태와 HTTP Request/Response
//! └── Models        - 인증 경계에서 쓰는 모델 (자격 증명, 토큰 클레임)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 매핑 규칙
//!
//! 계층 간 변환은 모두 손으로 작성한 `From` 구현으로만 이루어집니다.
//!
//! ```text
//! UserEntity ──From──▶ UserDto ──From──▶ UserResponse
//! ```
//!
//! 평문 비밀번호는 `CreateUserRequest`에만 존재하며 어떤 출력 타입에도 담기지 않습니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
