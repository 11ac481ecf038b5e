use serde::{Deserialize, Serialize};
use crate::domain::dto::users::user_dto::{AddressDto, UserDto};

/// 사용자 응답 DTO
///
/// 비밀번호(평문/해시)는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub addresses: Vec<AddressResponse>,
}

/// 주소 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    pub address_id: String,
    /// 소유 사용자의 공개 ID
    pub user_id: String,
    pub city: String,
    pub country: String,
    pub street_name: String,
    pub postal_code: String,
    #[serde(rename = "type")]
    pub address_type: String,
}

impl From<UserDto> for UserResponse {
    fn from(user: UserDto) -> Self {
        let UserDto {
            user_id,
            email,
            first_name,
            last_name,
            addresses,
            ..
        } = user;

        Self {
            user_id,
            first_name,
            last_name,
            email,
            addresses: addresses.into_iter().map(AddressResponse::from).collect(),
        }
    }
}

impl From<AddressDto> for AddressResponse {
    fn from(address: AddressDto) -> Self {
        Self {
            address_id: address.address_id,
            user_id: address.user_id,
            city: address.city,
            country: address.country,
            street_name: address.street_name,
            postal_code: address.postal_code,
            address_type: address.address_type,
        }
    }
}

/// 로그인 응답 DTO
///
/// 같은 토큰이 `Authorization` 헤더에도 실립니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: String,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl LoginResponse {
    pub fn bearer(user_id: String, access_token: String, expires_in: i64) -> Self {
        Self {
            user_id,
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

/// 삭제 등 본문이 없는 연산의 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationStatusResponse {
    pub operation_name: String,
    pub operation_result: String,
}

impl OperationStatusResponse {
    pub fn success(operation_name: &str) -> Self {
        Self {
            operation_name: operation_name.to_string(),
            operation_result: "SUCCESS".to_string(),
        }
    }
}
