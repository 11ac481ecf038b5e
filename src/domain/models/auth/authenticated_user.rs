use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use crate::core::errors::AppError;

/// JWT 토큰에서 추출된 요청 주체
///
/// `AuthMiddleware`가 토큰 검증에 성공하면 request extension에 저장합니다.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// 토큰 subject (로그인 이메일)
    pub email: String,
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::authentication_failed())),
        }
    }
}
