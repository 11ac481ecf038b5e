//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use crate::core::errors::{AppError, AppResult};

/// 앞뒤 공백을 제거한 값이 비어 있으면 `MissingRequiredField` 에러를 반환합니다.
pub fn validate_required_string(value: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::missing_required_field());
    }
    Ok(trimmed.to_string())
}

pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}
