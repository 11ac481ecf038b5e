//! 인증 설정 관리 모듈
//!
//! 로그인 성공 시 발급하는 JWT 액세스 토큰 관련 설정을 관리합니다.

use std::env;

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// HTTP 헤더 이름
    pub const HEADER_STRING: &'static str = "Authorization";

    /// 토큰 앞에 붙는 접두어
    pub const TOKEN_PREFIX: &'static str = "Bearer ";

    /// 로그인 응답에 사용자 공개 ID를 싣는 헤더
    pub const USER_ID_HEADER: &'static str = "UserID";

    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며 경고 로그를 남깁니다.
    ///
    /// ```bash
    /// # 안전한 JWT 키 생성
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다. (기본값: 240시간)
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "240".to_string())
            .parse()
            .unwrap_or(240)
    }
}
