//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 영구 저장 엔티티들을 정의합니다.
//!
//! ```text
//! users (collection)
//! └── UserEntity
//!     ├── _id            ← 저장소가 부여하는 내부 키
//!     ├── user_id        ← 30자 공개 ID
//!     └── addresses[]    ← AddressEntity (내장 문서, 사용자 삭제 시 함께 삭제)
//! ```

pub mod users;

pub use users::*;
