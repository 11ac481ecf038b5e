//! User Entity Implementation
//!
//! 저장소에 영구 저장되는 사용자 레코드입니다.
//! 주소 레코드는 사용자 문서에 내장되어 사용자와 생명주기를 함께합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::address::AddressEntity;

/// 사용자 엔티티
///
/// `id`는 저장소가 부여하는 내부 키이고, 외부에는 `user_id`(30자 공개 ID)만 노출됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 공개 ID (생성 시 한 번만 부여, unique)
    pub user_id: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub encrypted_password: String,
    pub first_name: String,
    pub last_name: String,
    /// 소유한 주소 목록
    #[serde(default)]
    pub addresses: Vec<AddressEntity>,
}

impl UserEntity {
    /// 아직 저장되지 않은 새 사용자 생성
    pub fn new(
        user_id: String,
        email: String,
        encrypted_password: String,
        first_name: String,
        last_name: String,
        addresses: Vec<AddressEntity>,
    ) -> Self {
        Self {
            id: None,
            user_id,
            email,
            encrypted_password,
            first_name,
            last_name,
            addresses,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// 이름만 변경합니다. 이메일, 비밀번호, 주소는 그대로 유지됩니다.
    pub fn rename(&mut self, first_name: String, last_name: String) {
        self.first_name = first_name;
        self.last_name = last_name;
    }
}
