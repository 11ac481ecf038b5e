//! 사용자 관련 DTO 모듈

pub mod user_dto;
pub mod request;
pub mod response;

pub use user_dto::{UserDto, AddressDto};
pub use request::*;
pub use response::*;
