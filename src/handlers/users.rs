//! # User Management HTTP Handlers
//!
//! 사용자 계정과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 요청 본문 검증, 서비스 호출, 응답 변환만 담당하며 비즈니스 규칙은
//! `UserService`에 있습니다.
//!
//! ## RESTful API 설계
//!
//! | 메서드 | 경로 | 설명 | 인증 | 상태 코드 |
//! |--------|------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 회원 가입 | - | 201 Created |
//! | `GET` | `/api/v1/users` | 사용자 목록 (페이징) | Bearer | 200 OK |
//! | `GET` | `/api/v1/users/{user_id}` | 사용자 조회 | Bearer | 200 OK |
//! | `PUT` | `/api/v1/users/{user_id}` | 이름 변경 | Bearer | 200 OK |
//! | `DELETE` | `/api/v1/users/{user_id}` | 사용자 삭제 | Bearer | 200 OK |
//!
//! ## 입력 검증
//!
//! 요청 DTO는 `validator::Validate`를 구현하며, 검증 실패는 모두
//! `AppError::ValidationError`(400)로 변환됩니다.
//!
//! ## 표준화된 에러 응답
//!
//! ```json
//! {
//!   "timestamp": "2024-01-01T12:00:00Z",
//!   "message": "Record with provided id is not found"
//! }
//! ```

use actix_web::{web, HttpResponse, get, post, put, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, ListUsersQuery, UpdateUserRequest};
use crate::domain::dto::users::response::{OperationStatusResponse, UserResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::users::UserService;

/// 사용자 생성 핸들러
///
/// 공개 엔드포인트입니다. 가입 시 함께 보낸 주소는 모두 새 사용자에게 귀속됩니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "firstName": "Minsu",
///   "lastName": "Kim",
///   "email": "kim@example.com",
///   "password": "Password123",
///   "addresses": [
///     {
///       "city": "Seoul",
///       "country": "KR",
///       "streetName": "Teheran-ro 1",
///       "postalCode": "06234",
///       "type": "shipping"
///     }
///   ]
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "userId": "q1w2e3r4t5y6u7i8o9p0a1s2d3f4g5",
///   "firstName": "Minsu",
///   "lastName": "Kim",
///   "email": "kim@example.com",
///   "addresses": [ { "addressId": "...", "city": "Seoul", "...": "..." } ]
/// }
/// ```
///
/// ## 실패 사례
///
/// - 400 `Missing required field. Please check documentation for required fields`
/// - 409 `Record already exists`
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"firstName":"Minsu","lastName":"Kim","email":"kim@example.com","password":"Password123"}'
/// ```
#[post("")]
pub async fn create_user(
    user_service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(AppError::from)?;

    let user = user_service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// 사용자 조회 핸들러
///
/// `GET /api/v1/users/{user_id}`
///
/// 경로의 `user_id`는 공개 ID입니다. 내부 저장소 키는 노출되지 않습니다.
///
/// - 200: `UserResponse`
/// - 404: `Record with provided id is not found`
#[get("/{user_id}")]
pub async fn get_user(
    user_service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.get_user_by_user_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 사용자 이름 변경 핸들러
///
/// `PUT /api/v1/users/{user_id}`
///
/// 본문은 `{"firstName": "...", "lastName": "..."}`이며, 그 외 필드는 무시됩니다.
#[put("/{user_id}")]
pub async fn update_user(
    user_service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(AppError::from)?;

    let user = user_service.update_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 사용자 삭제 핸들러
///
/// `DELETE /api/v1/users/{user_id}`
///
/// 물리적 삭제이며 사용자의 주소도 함께 제거됩니다.
///
/// ## 성공 (200 OK)
/// ```json
/// { "operationName": "DELETE", "operationResult": "SUCCESS" }
/// ```
#[delete("/{user_id}")]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    user_id: web::Path<String>,
    principal: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    user_service.delete_user(&user_id).await?;
    log::info!("사용자 {} 삭제 요청자: {}", user_id, principal.email);

    Ok(HttpResponse::Ok().json(OperationStatusResponse::success("DELETE")))
}

/// 사용자 목록 조회 핸들러
///
/// `GET /api/v1/users?page=0&limit=25`
///
/// `page`는 0부터 시작합니다. `limit`는 1~100 범위이며 기본값은 25입니다.
#[get("")]
pub async fn list_users(
    user_service: web::Data<UserService>,
    query: web::Query<ListUsersQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(AppError::from)?;

    let users = user_service.get_users(query.page(), query.limit()).await?;
    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}
