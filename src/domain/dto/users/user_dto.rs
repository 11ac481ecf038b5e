//! 서비스 경계 전송 레코드
//!
//! 저장소에 독립적인 사용자 표현입니다. `UserService`의 모든 조회/변경 연산은
//! 이 타입을 반환합니다. 평문 비밀번호 필드는 존재하지 않습니다.

use crate::domain::entities::users::{address::AddressEntity, user::UserEntity};

/// 사용자 전송 레코드
#[derive(Debug, Clone, PartialEq)]
pub struct UserDto {
    pub user_id: String,
    pub email: String,
    /// 저장된 bcrypt 해시 (HTTP 응답으로는 절대 직렬화되지 않음)
    pub encrypted_password: String,
    pub first_name: String,
    pub last_name: String,
    pub addresses: Vec<AddressDto>,
}

/// 주소 전송 레코드
#[derive(Debug, Clone, PartialEq)]
pub struct AddressDto {
    pub address_id: String,
    /// 소유 사용자의 공개 ID
    pub user_id: String,
    pub city: String,
    pub country: String,
    pub street_name: String,
    pub postal_code: String,
    pub address_type: String,
}

impl From<UserEntity> for UserDto {
    fn from(entity: UserEntity) -> Self {
        let UserEntity {
            user_id,
            email,
            encrypted_password,
            first_name,
            last_name,
            addresses,
            ..
        } = entity;

        Self {
            user_id,
            email,
            encrypted_password,
            first_name,
            last_name,
            addresses: addresses.into_iter().map(AddressDto::from).collect(),
        }
    }
}

impl From<AddressEntity> for AddressDto {
    fn from(entity: AddressEntity) -> Self {
        Self {
            address_id: entity.address_id,
            user_id: entity.user_id,
            city: entity.city,
            country: entity.country,
            street_name: entity.street_name,
            postal_code: entity.postal_code,
            address_type: entity.address_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_to_dto_keeps_address_back_reference() {
        let entity = UserEntity::new(
            "U".repeat(30),
            "kim@example.com".to_string(),
            "$2b$04$hash".to_string(),
            "Minsu".to_string(),
            "Kim".to_string(),
            vec![AddressEntity {
                address_id: "A".repeat(30),
                user_id: "U".repeat(30),
                city: "Seoul".to_string(),
                country: "KR".to_string(),
                street_name: "Teheran-ro 1".to_string(),
                postal_code: "06234".to_string(),
                address_type: "shipping".to_string(),
            }],
        );

        let dto = UserDto::from(entity);

        assert_eq!(dto.user_id, "U".repeat(30));
        assert_eq!(dto.addresses.len(), 1);
        assert_eq!(dto.addresses[0].user_id, dto.user_id);
        assert_eq!(dto.addresses[0].city, "Seoul");
    }
}
