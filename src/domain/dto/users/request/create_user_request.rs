//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 평문 비밀번호가 존재하는 유일한 타입입니다.
use serde::Deserialize;
use validator::Validate;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
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

    /// 사용자 이메일 주소 (unique)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 평문 비밀번호 (저장 전 bcrypt 해싱)
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,

    #[serde(default)]
    #[validate(nested)]
    pub addresses: Vec<CreateAddressRequest>,
}

/// 사용자 생성 시 함께 등록하는 주소
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddressRequest {
    #[validate(length(
        min = 1,
        message = "Missing required field. Please check documentation for required fields"
    ))]
    pub city: String,

    #[validate(length(
        min = 1,
        message = "Missing required field. Please check documentation for required fields"
    ))]
    pub country: String,

    #[validate(length(
        min = 1,
        message = "Missing required field. Please check documentation for required fields"
    ))]
    pub street_name: String,

    #[validate(length(
        min = 1,
        message = "Missing required field. Please check documentation for required fields"
    ))]
    pub postal_code: String,

    /// billing, shipping 등
    #[serde(rename = "type")]
    #[validate(length(
        min = 1,
        message = "Missing required field. Please check documentation for required fields"
    ))]
    pub address_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sign_up_payload() {
        let json = r#"{
            "firstName": "Minsu",
            "lastName": "Kim",
            "email": "kim@example.com",
            "password": "Password123",
            "addresses": [
                {"city": "Seoul", "country": "KR", "streetName": "Teheran-ro 1",
                 "postalCode": "06234", "type": "billing"}
            ]
        }"#;

        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.addresses[0].address_type, "billing");
    }

    #[test]
    fn test_addresses_default_to_empty() {
        let json = r#"{"firstName":"A","lastName":"B","email":"a@b.io","password":"Password123"}"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert!(request.addresses.is_empty());
    }

    #[test]
    fn test_missing_first_name_is_rejected() {
        let json = r#"{"firstName":"","lastName":"B","email":"a@b.io","password":"Password123"}"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_invalid_nested_address_is_rejected() {
        let json = r#"{"firstName":"A","lastName":"B","email":"a@b.io","password":"Password123",
            "addresses":[{"city":"","country":"KR","streetName":"x","postalCode":"1","type":"billing"}]}"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert!(request.validate().is_err());
    }
}
