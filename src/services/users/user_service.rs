//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! 가입, 조회, 이름 변경, 삭제, 페이지 조회와 인증용 자격 증명 조회를 제공합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │   Registration  │  │  Authentication │  │   User Query    │  │
//! │  │ • Duplicate Chk │  │ • Credentials   │  │ • By Public ID  │  │
//! │  │ • Public ID Gen │  │ • Password Ver  │  │ • By Email      │  │
//! │  │ • Password Hash │  │                 │  │ • Paging        │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!          │                     │                     │
//!          ▼                     ▼                     ▼
//!   PublicIdGenerator     PasswordEncoder       UserRepository
//! ```
//!
//! ## 불변 조건
//!
//! - 이메일은 모든 사용자 사이에서 유일합니다. 쓰기 전에 검사하고, 동시 가입 경쟁은
//!   저장소의 유니크 제약이 막습니다.
//! - 공개 ID는 생성 시 한 번만 부여되며 이후 바뀌지 않습니다.
//! - 모든 주소는 생성 시점에 정확히 한 사용자에게 묶입니다.
//! - 서비스가 반환하는 어떤 타입에도 평문 비밀번호는 담기지 않습니다.

use std::collections::HashSet;
use std::sync::Arc;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{
            request::{CreateAddressRequest, CreateUserRequest, UpdateUserRequest},
            user_dto::UserDto,
        },
        entities::users::{address::AddressEntity, user::UserEntity},
        models::auth::UserCredentials,
    },
    repositories::users::UserRepository,
    services::auth::PasswordEncoder,
    utils::{
        id_generator::PublicIdGenerator,
        string_utils::{trim_string, validate_required_string},
    },
};

/// 사용자/주소 공개 ID 길이
pub const PUBLIC_ID_LENGTH: usize = 30;

/// 공개 ID 충돌 시 재생성 최대 횟수
pub const MAX_PUBLIC_ID_ATTEMPTS: usize = 5;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 호출 사이에 변경 가능한 상태를 가지지 않으며, 협력 객체에 대한 참조만 보관합니다.
/// 모든 협력 객체는 trait object로 주입되므로 테스트에서는 메모리 저장소와
/// 낮은 cost의 bcrypt 인코더를 사용할 수 있습니다.
///
/// ## 에러 처리 전략
///
/// 모든 메서드는 `Result<T, AppError>`를 반환하며 재시도 없이 즉시 실패합니다.
///
/// - **DuplicateRecord**: 이미 사용 중인 이메일
/// - **NotFound**: 공개 ID에 해당하는 사용자 없음
/// - **UnknownPrincipal**: 인증 조회 경로에서 이메일에 해당하는 사용자 없음
/// - **AuthenticationFailed**: 비밀번호 불일치
/// - **ValidationError**: 필수 값 누락
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let user_service = UserService::new(
///     Arc::new(InMemoryUserRepository::new()),
///     Arc::new(BcryptPasswordEncoder::from_env()),
///     Arc::new(RandomPublicIdGenerator::new()),
/// );
///
/// let user = user_service.create_user(request).await?;
/// let same = user_service.get_user_by_user_id(&user.user_id).await?;
/// ```
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    password_encoder: Arc<dyn PasswordEncoder>,
    id_generator: Arc<dyn PublicIdGenerator>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_encoder: Arc<dyn PasswordEncoder>,
        id_generator: Arc<dyn PublicIdGenerator>,
    ) -> Self {
        Self {
            user_repo,
            password_encoder,
            id_generator,
        }
    }

    /// 새 사용자 계정 생성
    ///
    /// # 처리 과정
    ///
    /// 1. **중복 확인**: 이메일로 조회하여 이미 있으면 `DuplicateRecord`
    /// 2. **공개 ID 생성**: 30자 랜덤 ID, 충돌 시 최대 [`MAX_PUBLIC_ID_ATTEMPTS`]회 재생성
    /// 3. **비밀번호 해싱**: `PasswordEncoder::encode`
    /// 4. **주소 바인딩**: 주소마다 공개 ID를 부여하고 소유자를 이 사용자로 설정
    /// 5. **영구 저장**: 저장소 유니크 제약 위반 시에도 `DuplicateRecord`
    ///
    /// # 반환값
    ///
    /// * `Ok(UserDto)` - 저장된 사용자 (부여된 공개 ID 포함, 평문 비밀번호 없음)
    /// * `Err(AppError::DuplicateRecord)` - 이메일 중복 (쓰기 전 검출)
    /// * `Err(AppError::ValidationError)` - 필수 값 누락
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserDto> {
        let start_time = std::time::Instant::now();

        let email = validate_required_string(&request.email)?;
        let first_name = validate_required_string(&request.first_name)?;
        let last_name = validate_required_string(&request.last_name)?;
        if request.password.is_empty() {
            return Err(AppError::missing_required_field());
        }

        if self.user_repo.find_by_email(&email).await?.is_some() {
            log::info!("이미 사용 중인 이메일로 가입 시도: {}", email);
            return Err(AppError::duplicate_record());
        }

        let user_public_id = self.generate_user_public_id().await?;
        let encrypted_password = self.password_encoder.encode(&request.password)?;
        let addresses = self.bind_addresses(&user_public_id, request.addresses)?;

        let user = UserEntity::new(
            user_public_id,
            email,
            encrypted_password,
            first_name,
            last_name,
            addresses,
        );

        let created_user = self.user_repo.save(user).await?;

        log::info!(
            "사용자 생성 완료: {} (주소 {}개), took: {:?}",
            created_user.user_id,
            created_user.addresses.len(),
            start_time.elapsed()
        );

        Ok(UserDto::from(created_user))
    }

    /// 사용자 이름 변경
    ///
    /// 이름(first/last)만 덮어씁니다. 이메일, 비밀번호 해시, 주소는 그대로입니다.
    ///
    /// * `Err(AppError::NotFound)` - 공개 ID에 해당하는 사용자 없음 (변경 없음)
    pub async fn update_user(&self, user_id: &str, request: UpdateUserRequest) -> AppResult<UserDto> {
        let first_name = validate_required_string(&request.first_name)?;
        let last_name = validate_required_string(&request.last_name)?;

        let mut user = self.find_user_entity(user_id).await?;
        user.rename(first_name, last_name);

        let updated_user = self.user_repo.save(user).await?;
        log::debug!("사용자 이름 변경: {}", updated_user.user_id);

        Ok(UserDto::from(updated_user))
    }

    /// 사용자 계정 삭제
    ///
    /// 사용자 문서에 내장된 주소도 함께 삭제됩니다.
    pub async fn delete_user(&self, user_id: &str) -> AppResult<()> {
        let user = self.find_user_entity(user_id).await?;
        self.user_repo.delete(&user).await?;

        log::info!("사용자 삭제 완료: {}", user_id);
        Ok(())
    }

    /// 공개 ID로 사용자 조회
    pub async fn get_user_by_user_id(&self, user_id: &str) -> AppResult<UserDto> {
        let user = self.find_user_entity(user_id).await?;
        Ok(UserDto::from(user))
    }

    /// 사용자 목록 페이지 조회
    ///
    /// `page`는 0부터 시작하며, 범위를 벗어난 페이지는 에러 없이 빈 목록을 반환합니다.
    pub async fn get_users(&self, page: u64, limit: u64) -> AppResult<Vec<UserDto>> {
        if limit == 0 {
            return Err(AppError::ValidationError("limit은 0보다 커야 합니다".to_string()));
        }

        let users = self.user_repo.find_page(page, limit).await?;
        log::debug!("사용자 목록 조회: page={}, limit={}, count={}", page, limit, users.len());

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// 이메일로 사용자 조회
    ///
    /// 인증 경로에서 함께 쓰이므로 없으면 `UnknownPrincipal(email)`을 반환합니다.
    pub async fn get_user(&self, email: &str) -> AppResult<UserDto> {
        let user = self.find_principal_entity(email).await?;
        Ok(UserDto::from(user))
    }

    /// 인증 경계가 사용하는 최소 자격 증명 조회
    pub async fn load_credentials_by_email(&self, email: &str) -> AppResult<UserCredentials> {
        let user = self.find_principal_entity(email).await?;
        Ok(UserCredentials::from(user))
    }

    /// 이메일/비밀번호 인증
    ///
    /// 자격 증명을 조회해 비밀번호를 검증한 뒤, 성공하면 사용자 정보를 반환합니다.
    ///
    /// * `Err(AppError::UnknownPrincipal)` - 이메일에 해당하는 사용자 없음
    /// * `Err(AppError::AuthenticationFailed)` - 비밀번호 불일치
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<UserDto> {
        let verify_start = std::time::Instant::now();

        let credentials = self.load_credentials_by_email(email).await?;
        let is_valid = self.password_encoder.matches(password, &credentials.encrypted_password);

        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::warn!("비밀번호 불일치: {}", email);
            return Err(AppError::authentication_failed());
        }

        self.get_user(&credentials.email).await
    }

    /// 가입 시 저장한 형태와 같게 앞뒤 공백을 제거한 이메일로 조회합니다.
    async fn find_principal_entity(&self, email: &str) -> AppResult<UserEntity> {
        let email = trim_string(email);

        self.user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::unknown_principal(&email))
    }

    async fn find_user_entity(&self, user_id: &str) -> AppResult<UserEntity> {
        self.user_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(AppError::not_found)
    }

    /// 저장소에 아직 없는 사용자 공개 ID를 생성합니다.
    async fn generate_user_public_id(&self) -> AppResult<String> {
        for attempt in 1..=MAX_PUBLIC_ID_ATTEMPTS {
            let candidate = self.id_generator.generate(PUBLIC_ID_LENGTH);

            if self.user_repo.find_by_user_id(&candidate).await?.is_none() {
                return Ok(candidate);
            }

            log::warn!("사용자 공개 ID 충돌, 재생성 ({}/{})", attempt, MAX_PUBLIC_ID_ATTEMPTS);
        }

        Err(AppError::Unexpected(format!(
            "{}회 시도 후에도 고유한 공개 ID를 생성하지 못했습니다",
            MAX_PUBLIC_ID_ATTEMPTS
        )))
    }

    /// 주소마다 공개 ID를 부여하고 소유자를 `owner_id`로 묶습니다.
    fn bind_addresses(
        &self,
        owner_id: &str,
        addresses: Vec<CreateAddressRequest>,
    ) -> AppResult<Vec<AddressEntity>> {
        let mut issued: HashSet<String> = HashSet::with_capacity(addresses.len());

        addresses
            .into_iter()
            .map(|address| {
                let address_id = self.generate_address_public_id(&issued)?;
                issued.insert(address_id.clone());

                Ok(AddressEntity {
                    address_id,
                    user_id: owner_id.to_string(),
                    city: trim_string(&address.city),
                    country: trim_string(&address.country),
                    street_name: trim_string(&address.street_name),
                    postal_code: trim_string(&address.postal_code),
                    address_type: trim_string(&address.address_type),
                })
            })
            .collect()
    }

    fn generate_address_public_id(&self, issued: &HashSet<String>) -> AppResult<String> {
        (0..MAX_PUBLIC_ID_ATTEMPTS)
            .map(|_| self.id_generator.generate(PUBLIC_ID_LENGTH))
            .find(|candidate| !issued.contains(candidate))
            .ok_or_else(|| {
                AppError::Unexpected("고유한 주소 공개 ID를 생성하지 못했습니다".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::services::auth::BcryptPasswordEncoder;
    use crate::utils::id_generator::RandomPublicIdGenerator;

    /// 미리 정한 ID를 순서대로 돌려주는 생성기
    #[derive(Debug)]
    struct ScriptedIdGenerator {
        ids: Mutex<VecDeque<String>>,
    }

    impl ScriptedIdGenerator {
        fn new(ids: &[&str]) -> Self {
            Self {
                ids: Mutex::new(ids.iter().map(|id| id.to_string()).collect()),
            }
        }
    }

    impl PublicIdGenerator for ScriptedIdGenerator {
        fn generate(&self, _length: usize) -> String {
            self.ids.lock().unwrap().pop_front().expect("scripted ids exhausted")
        }
    }

    fn service_with(repo: Arc<InMemoryUserRepository>) -> UserService {
        UserService::new(
            repo,
            Arc::new(BcryptPasswordEncoder::new(4)),
            Arc::new(RandomPublicIdGenerator::new()),
        )
    }

    fn address(city: &str) -> CreateAddressRequest {
        CreateAddressRequest {
            city: city.to_string(),
            country: "KR".to_string(),
            street_name: "Teheran-ro 1".to_string(),
            postal_code: "06234".to_string(),
            address_type: "shipping".to_string(),
        }
    }

    fn sign_up(email: &str, addresses: Vec<CreateAddressRequest>) -> CreateUserRequest {
        CreateUserRequest {
            first_name: "Minsu".to_string(),
            last_name: "Kim".to_string(),
            email: email.to_string(),
            password: "Password123".to_string(),
            addresses,
        }
    }

    #[actix_web::test]
    async fn test_create_user_assigns_fresh_public_id() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = service_with(repo.clone());

        let created = service.create_user(sign_up("kim@example.com", vec![])).await.unwrap();

        assert_eq!(created.user_id.len(), PUBLIC_ID_LENGTH);
        assert_eq!(created.email, "kim@example.com");
        assert_eq!(repo.count().await, 1);
    }

    #[actix_web::test]
    async fn test_create_user_with_duplicate_email_writes_nothing() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = service_with(repo.clone());
        let original = service.create_user(sign_up("kim@example.com", vec![])).await.unwrap();

        let result = service.create_user(sign_up("kim@example.com", vec![address("Busan")])).await;

        assert!(matches!(result, Err(AppError::DuplicateRecord(msg)) if msg == "Record already exists"));
        assert_eq!(repo.count().await, 1);
        assert_eq!(service.get_user_by_user_id(&original.user_id).await.unwrap(), original);
    }

    #[actix_web::test]
    async fn test_addresses_are_bound_to_owner() {
        let service = service_with(Arc::new(InMemoryUserRepository::new()));
        let addresses = vec![address("Seoul"), address("Busan"), address("Daegu")];

        let created = service.create_user(sign_up("kim@example.com", addresses)).await.unwrap();
        let fetched = service.get_user_by_user_id(&created.user_id).await.unwrap();

        assert_eq!(fetched.addresses.len(), 3);
        let ids: HashSet<_> = fetched.addresses.iter().map(|a| a.address_id.clone()).collect();
        assert_eq!(ids.len(), 3);
        for address in &fetched.addresses {
            assert_eq!(address.address_id.len(), PUBLIC_ID_LENGTH);
            assert_eq!(address.user_id, created.user_id);
        }
    }

    #[actix_web::test]
    async fn test_round_trip_keeps_identity_fields() {
        let service = service_with(Arc::new(InMemoryUserRepository::new()));

        let created = service.create_user(sign_up("kim@example.com", vec![])).await.unwrap();
        let fetched = service.get_user_by_user_id(&created.user_id).await.unwrap();

        assert_eq!(fetched.email, "kim@example.com");
        assert_eq!(fetched.first_name, "Minsu");
        assert_eq!(fetched.last_name, "Kim");
    }

    #[actix_web::test]
    async fn test_update_changes_only_names() {
        let service = service_with(Arc::new(InMemoryUserRepository::new()));
        let before = service
            .create_user(sign_up("kim@example.com", vec![address("Seoul")]))
            .await
            .unwrap();

        let after = service
            .update_user(&before.user_id, UpdateUserRequest {
                first_name: "Jiwoo".to_string(),
                last_name: "Lee".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(after.first_name, "Jiwoo");
        assert_eq!(after.last_name, "Lee");
        assert_eq!(after.user_id, before.user_id);
        assert_eq!(after.email, before.email);
        assert_eq!(after.encrypted_password, before.encrypted_password);
        assert_eq!(after.addresses, before.addresses);
    }

    #[actix_web::test]
    async fn test_unknown_public_id_is_not_found_without_changes() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = service_with(repo.clone());
        let existing = service.create_user(sign_up("kim@example.com", vec![])).await.unwrap();
        let update = UpdateUserRequest {
            first_name: "X".to_string(),
            last_name: "Y".to_string(),
        };

        assert!(matches!(service.get_user_by_user_id("missing").await, Err(AppError::NotFound(_))));
        assert!(matches!(service.update_user("missing", update).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete_user("missing").await, Err(AppError::NotFound(_))));

        assert_eq!(repo.count().await, 1);
        assert_eq!(service.get_user_by_user_id(&existing.user_id).await.unwrap(), existing);
    }

    #[actix_web::test]
    async fn test_delete_removes_user_and_addresses() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = service_with(repo.clone());
        let created = service
            .create_user(sign_up("kim@example.com", vec![address("Seoul")]))
            .await
            .unwrap();

        service.delete_user(&created.user_id).await.unwrap();

        assert_eq!(repo.count().await, 0);
        assert!(matches!(
            service.get_user_by_user_id(&created.user_id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_pages_are_disjoint_and_ordered() {
        let service = service_with(Arc::new(InMemoryUserRepository::new()));
        let mut created = Vec::new();
        for i in 0..5 {
            let user = service
                .create_user(sign_up(&format!("user{}@example.com", i), vec![]))
                .await
                .unwrap();
            created.push(user.user_id);
        }

        let first = service.get_users(0, 2).await.unwrap();
        let second = service.get_users(1, 2).await.unwrap();

        let combined: Vec<String> = first.iter().chain(second.iter()).map(|u| u.user_id.clone()).collect();
        assert_eq!(combined, created[..4].to_vec());
    }

    #[actix_web::test]
    async fn test_page_beyond_end_is_empty() {
        let service = service_with(Arc::new(InMemoryUserRepository::new()));
        service.create_user(sign_up("kim@example.com", vec![])).await.unwrap();

        assert!(service.get_users(5, 10).await.unwrap().is_empty());
        assert!(matches!(service.get_users(0, 0).await, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_stored_password_is_hashed() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = service_with(repo.clone());
        let encoder = BcryptPasswordEncoder::new(4);

        service.create_user(sign_up("kim@example.com", vec![])).await.unwrap();
        let credentials = service.load_credentials_by_email("kim@example.com").await.unwrap();

        assert_ne!(credentials.encrypted_password, "Password123");
        assert!(encoder.matches("Password123", &credentials.encrypted_password));
        assert!(credentials.authorities.is_empty());
    }

    #[actix_web::test]
    async fn test_email_lookups_report_unknown_principal() {
        let service = service_with(Arc::new(InMemoryUserRepository::new()));

        assert!(matches!(
            service.get_user("ghost@example.com").await,
            Err(AppError::UnknownPrincipal(msg)) if msg == "ghost@example.com"
        ));
        assert!(matches!(
            service.load_credentials_by_email("ghost@example.com").await,
            Err(AppError::UnknownPrincipal(_))
        ));
    }

    #[actix_web::test]
    async fn test_email_lookups_match_stored_form() {
        let service = service_with(Arc::new(InMemoryUserRepository::new()));
        let created = service.create_user(sign_up("  kim@example.com ", vec![])).await.unwrap();

        assert_eq!(created.email, "kim@example.com");
        assert_eq!(service.get_user(" kim@example.com").await.unwrap().user_id, created.user_id);
        assert_eq!(
            service.load_credentials_by_email("kim@example.com  ").await.unwrap().email,
            "kim@example.com"
        );
        assert_eq!(
            service.authenticate(" kim@example.com ", "Password123").await.unwrap().user_id,
            created.user_id
        );
    }

    #[actix_web::test]
    async fn test_authenticate() {
        let service = service_with(Arc::new(InMemoryUserRepository::new()));
        let created = service.create_user(sign_up("kim@example.com", vec![])).await.unwrap();

        let user = service.authenticate("kim@example.com", "Password123").await.unwrap();
        assert_eq!(user.user_id, created.user_id);

        assert!(matches!(
            service.authenticate("kim@example.com", "wrong-password").await,
            Err(AppError::AuthenticationFailed(_))
        ));
        assert!(matches!(
            service.authenticate("ghost@example.com", "Password123").await,
            Err(AppError::UnknownPrincipal(_))
        ));
    }

    #[actix_web::test]
    async fn test_colliding_public_id_is_regenerated() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let generator = ScriptedIdGenerator::new(&["taken", "fresh"]);
        repo.save(UserEntity::new(
            "taken".to_string(),
            "first@example.com".to_string(),
            "$2b$04$hash".to_string(),
            "A".to_string(),
            "B".to_string(),
            vec![],
        ))
        .await
        .unwrap();
        let service = UserService::new(
            repo.clone(),
            Arc::new(BcryptPasswordEncoder::new(4)),
            Arc::new(generator),
        );

        let created = service.create_user(sign_up("second@example.com", vec![])).await.unwrap();

        assert_eq!(created.user_id, "fresh");
        assert_eq!(repo.count().await, 2);
    }

    #[actix_web::test]
    async fn test_public_id_retries_are_bounded() {
        let repo = Arc::new(InMemoryUserRepository::new());
        repo.save(UserEntity::new(
            "taken".to_string(),
            "first@example.com".to_string(),
            "$2b$04$hash".to_string(),
            "A".to_string(),
            "B".to_string(),
            vec![],
        ))
        .await
        .unwrap();
        let service = UserService::new(
            repo.clone(),
            Arc::new(BcryptPasswordEncoder::new(4)),
            Arc::new(ScriptedIdGenerator::new(&["taken"; MAX_PUBLIC_ID_ATTEMPTS])),
        );

        let result = service.create_user(sign_up("second@example.com", vec![])).await;

        assert!(matches!(result, Err(AppError::Unexpected(_))));
        assert_eq!(repo.count().await, 1);
    }

    #[actix_web::test]
    async fn test_blank_names_are_rejected() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = service_with(repo.clone());
        let mut request = sign_up("kim@example.com", vec![]);
        request.first_name = "   ".to_string();

        assert!(matches!(service.create_user(request).await, Err(AppError::ValidationError(_))));
        assert_eq!(repo.count().await, 0);
    }
}
