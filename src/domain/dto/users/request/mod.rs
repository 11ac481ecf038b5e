//! 사용자 요청 DTO 모듈
//!
//! 모든 요청 DTO는 `validator::Validate`를 구현하며, 핸들러에서 서비스 호출 전에 검증됩니다.

pub mod create_user_request;
pub mod update_user_request;
pub mod auth_request;
pub mod list_users_query;

pub use create_user_request::{CreateUserRequest, CreateAddressRequest};
pub use update_user_request::UpdateUserRequest;
pub use auth_request::LoginRequest;
pub use list_users_query::ListUsersQuery;
