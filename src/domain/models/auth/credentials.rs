use crate::domain::entities::users::user::UserEntity;

/// 인증 경계가 비밀번호를 검증할 때 사용하는 최소 자격 증명
///
/// 권한 목록은 현재 항상 비어 있습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCredentials {
    pub email: String,
    pub encrypted_password: String,
    pub authorities: Vec<String>,
}

impl From<UserEntity> for UserCredentials {
    fn from(user: UserEntity) -> Self {
        Self {
            email: user.email,
            encrypted_password: user.encrypted_password,
            authorities: Vec::new(),
        }
    }
}
