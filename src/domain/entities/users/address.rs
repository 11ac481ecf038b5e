use serde::{Deserialize, Serialize};

/// 주소 엔티티
///
/// 정확히 한 명의 사용자에게 속하며, `user_id`로 소유자의 공개 ID를 역참조합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressEntity {
    /// 주소 공개 ID (30자)
    pub address_id: String,
    /// 소유 사용자의 공개 ID
    pub user_id: String,
    pub city: String,
    pub country: String,
    pub street_name: String,
    pub postal_code: String,
    /// 주소 유형 (billing, shipping 등)
    pub address_type: String,
}
