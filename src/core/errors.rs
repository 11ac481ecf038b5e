//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 서비스 계층의 실패를
//! 하나의 외부 응답 형태 `{timestamp, message}`로 변환합니다.
//!
//! 메시지 텍스트는 외부 계약의 일부이므로 [`ErrorMessages`]에 정의된 문구를
//! 그대로 사용해야 합니다.
//!
//! ## 상태 코드 매핑
//!
//! | 에러 | HTTP 상태 |
//! |------|-----------|
//! | `ValidationError` | 400 Bad Request |
//! | `UnknownPrincipal`, `AuthenticationFailed` | 401 Unauthorized |
//! | `NotFound` | 404 Not Found |
//! | `DuplicateRecord` | 409 Conflict |
//! | `DatabaseError`, `Unexpected` | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, ErrorMessages};
//!
//! let user = repo.find_by_user_id(id).await?
//!     .ok_or_else(AppError::not_found)?;
//! ```

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// 외부로 노출되는 고정 에러 메시지
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMessages {
    MissingRequiredField,
    RecordAlreadyExists,
    NoRecordFound,
    AuthenticationFailed,
}

impl ErrorMessages {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorMessages::MissingRequiredField => {
                "Missing required field. Please check documentation for required fields"
            }
            ErrorMessages::RecordAlreadyExists => "Record already exists",
            ErrorMessages::NoRecordFound => "Record with provided id is not found",
            ErrorMessages::AuthenticationFailed => "Authentication failed",
        }
    }
}

impl fmt::Display for ErrorMessages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 모든 variant의 `Display`는 담고 있는 메시지를 접두어 없이 그대로 출력합니다.
/// 이 문자열이 응답 envelope의 `message` 필드가 됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 공개 ID 또는 이메일에 해당하는 레코드 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 이미 사용 중인 이메일로 생성 시도 (409)
    #[error("{0}")]
    DuplicateRecord(String),

    /// 인증 조회 경로에서 이메일을 찾지 못함 (401)
    ///
    /// 메시지는 조회에 사용된 이메일 자체입니다.
    #[error("{0}")]
    UnknownPrincipal(String),

    /// 비밀번호 불일치, 토큰 누락/만료 등 인증 실패 (401)
    #[error("{0}")]
    AuthenticationFailed(String),

    /// 입력값 검증 실패 (400)
    #[error("{0}")]
    ValidationError(String),

    /// 저장소 오류 (500)
    #[error("{0}")]
    DatabaseError(String),

    /// 분류되지 않은 그 밖의 모든 실패 (500)
    #[error("{0}")]
    Unexpected(String),
}

impl AppError {
    pub fn not_found() -> Self {
        AppError::NotFound(ErrorMessages::NoRecordFound.to_string())
    }

    pub fn duplicate_record() -> Self {
        AppError::DuplicateRecord(ErrorMessages::RecordAlreadyExists.to_string())
    }

    pub fn unknown_principal(email: &str) -> Self {
        AppError::UnknownPrincipal(email.to_string())
    }

    pub fn authentication_failed() -> Self {
        AppError::AuthenticationFailed(ErrorMessages::AuthenticationFailed.to_string())
    }

    pub fn missing_required_field() -> Self {
        AppError::ValidationError(ErrorMessages::MissingRequiredField.to_string())
    }
}

/// 모든 실패에 공통으로 사용하는 응답 envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            message: message.into(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownPrincipal(_) | AppError::AuthenticationFailed(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateRecord(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패 ({}): {}", status, self);
        } else {
            log::debug!("요청 거부 ({}): {}", status, self);
        }

        HttpResponse::build(status).json(ErrorMessage::new(self.to_string()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 `AppError::Unexpected`로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Unexpected(format!("{}: {}", msg, e)))
    }
}

/// 입력 검증 실패를 `ValidationError`로 변환합니다.
///
/// 필드 이름 접두어 없이, 필드 이름 순으로 첫 번째 실패 메시지만 사용합니다.
/// 메시지가 지정되지 않은 규칙은 필수 필드 누락 문구로 대체합니다.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = first_validation_message(&errors)
            .unwrap_or_else(|| ErrorMessages::MissingRequiredField.to_string());

        AppError::ValidationError(message)
    }
}

fn first_validation_message(errors: &ValidationErrors) -> Option<String> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields.into_iter().find_map(|(_, kind)| match kind {
        ValidationErrorsKind::Field(field_errors) => field_errors
            .iter()
            .find_map(|e| e.message.as_ref().map(|m| m.to_string())),
        ValidationErrorsKind::Struct(nested) => first_validation_message(nested),
        ValidationErrorsKind::List(items) => items
            .values()
            .find_map(|nested| first_validation_message(nested)),
    })
}
