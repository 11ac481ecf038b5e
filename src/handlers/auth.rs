//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 로그인을 처리하고 JWT 액세스 토큰을 발급합니다.
//!
//! # Endpoint
//!
//! - `POST /api/v1/users/login`
//!
//! 성공 시 토큰은 `Authorization: Bearer <token>` 헤더와 본문에 함께 실리고,
//! 사용자 공개 ID는 `UserID` 헤더로 전달됩니다.
use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::LoginRequest;
use crate::domain::dto::users::response::LoginResponse;
use crate::services::{auth::TokenService, users::UserService};

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /api/v1/users/login`
///
/// # 요청 본문
/// ```json
/// { "email": "kim@example.com", "password": "Password123" }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "userId": "q1w2e3r4t5y6u7i8o9p0a1s2d3f4g5",
///   "accessToken": "eyJhbGciOiJIUzI1NiJ9...",
///   "tokenType": "Bearer",
///   "expiresIn": 864000
/// }
/// ```
///
/// ## 실패 (401 Unauthorized)
/// - 등록되지 않은 이메일: 메시지는 해당 이메일
/// - 비밀번호 불일치: `Authentication failed`
#[post("/login")]
pub async fn login(
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(AppError::from)?;

    let user = user_service
        .authenticate(&payload.email, &payload.password)
        .await?;

    let access_token = token_service
        .generate_access_token(&user.email)
        .map_err(|e| {
            log::error!("토큰 생성 실패 - 사용자: {}, 에러: {}", user.email, e);
            e
        })?;

    log::info!("로그인 성공 - 사용자: {}, ID: {}", user.email, user.user_id);

    let response = LoginResponse::bearer(
        user.user_id.clone(),
        access_token.clone(),
        token_service.expires_in(),
    );

    Ok(HttpResponse::Ok()
        .insert_header((
            JwtConfig::HEADER_STRING,
            format!("{}{}", JwtConfig::TOKEN_PREFIX, access_token),
        ))
        .insert_header((JwtConfig::USER_ID_HEADER, user.user_id))
        .json(response))
}
