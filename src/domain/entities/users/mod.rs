//! Users Entity Module
//!
//! 사용자 도메인의 영구 저장 엔티티들을 정의하는 모듈입니다.
//!
//! - [`user::UserEntity`] - 사용자 레코드
//! - [`address::AddressEntity`] - 사용자에게 종속된 주소 레코드
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::UserEntity;
//!
//! let user = UserEntity::new(
//!     public_id,
//!     "user@example.com".to_string(),
//!     encrypted_password,
//!     "Kim".to_string(),
//!     "Minsu".to_string(),
//!     addresses,
//! );
//! ```

pub mod user;
pub mod address;
