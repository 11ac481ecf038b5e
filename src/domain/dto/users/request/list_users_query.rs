//! 사용자 목록 조회 쿼리 파라미터
use serde::Deserialize;
use validator::Validate;
use crate::config::PaginationConfig;

/// `GET /api/v1/users?page=0&limit=25`
///
/// `page`는 0부터 시작합니다.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListUsersQuery {
    pub page: Option<u64>,

    #[validate(range(min = 1, max = 100, message = "limit은 1-100 사이여야 합니다"))]
    pub limit: Option<u64>,
}

impl ListUsersQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(PaginationConfig::DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(PaginationConfig::DEFAULT_LIMIT)
    }
}
