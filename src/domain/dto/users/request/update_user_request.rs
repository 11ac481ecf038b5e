//! 사용자 수정 요청 DTO
use serde::Deserialize;
use validator::Validate;

/// 이름 변경 요청
///
/// 이메일, 비밀번호, 주소는 이 요청으로 바꿀 수 없습니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(
        min = 1,
        message = "Missing required field. Please check documentation for required fields"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        message = "Missing required field. Please check documentation for required fields"
    ))]
    pub last_name: String,
}
