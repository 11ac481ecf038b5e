//! JWT 토큰 관리 서비스 구현
//!
//! 로그인 성공 시 액세스 토큰을 발급하고, 보호된 요청의 토큰을 검증합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::token::TokenClaims;

#[derive(Clone)]
pub struct TokenService {
    secret: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    pub fn from_env() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// 액세스 토큰 유효 기간 (초)
    pub fn expires_in(&self) -> i64 {
        self.expiration_hours * 3600
    }

    /// 이메일을 subject로 하는 액세스 토큰 생성
    pub fn generate_access_token(&self, email: &str) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::Unexpected(format!("JWT 토큰 생성 실패: {}", e)))
    }

    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationFailed("토큰이 만료되었습니다".to_string())
                },
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationFailed("유효하지 않은 토큰입니다".to_string())
                }
            })
    }

    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix(JwtConfig::TOKEN_PREFIX)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationFailed("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        let service = TokenService::new("test-secret", 1);

        let token = service.generate_access_token("kim@example.com").unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "kim@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issuer = TokenService::new("secret-a", 1);
        let verifier = TokenService::new("secret-b", 1);

        let token = issuer.generate_access_token("kim@example.com").unwrap();

        assert!(matches!(
            verifier.verify_token(&token),
            Err(AppError::AuthenticationFailed(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = TokenService::new("test-secret", -2);

        let token = service.generate_access_token("kim@example.com").unwrap();

        assert!(matches!(
            service.verify_token(&token),
            Err(AppError::AuthenticationFailed(msg)) if msg == "토큰이 만료되었습니다"
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::new("test-secret", 1);

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
