//! 인증 관련 모델

pub mod credentials;
pub mod authenticated_user;

pub use credentials::UserCredentials;
pub use authenticated_user::AuthenticatedUser;
