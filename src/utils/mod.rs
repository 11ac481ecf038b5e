//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 필수 문자열 검증, 정리 유틸리티
//! - [`id_generator`] - 공개 ID 생성기
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::id_generator::{PublicIdGenerator, RandomPublicIdGenerator};
//!
//! let public_id = RandomPublicIdGenerator::new().generate(30);
//! ```

pub mod string_utils;
pub mod id_generator;
