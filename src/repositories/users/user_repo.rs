//! # MongoDB 사용자 리포지토리 구현
//!
//! 사용자 엔티티를 `users` 컬렉션에 저장합니다. 주소는 사용자 문서에 내장되므로
//! 사용자 삭제 시 함께 제거됩니다.
//!
//! ## 인덱스
//!
//! - `email_unique` - 이메일 유니크 (동시 가입 경쟁의 최종 방어선)
//! - `user_id_unique` - 공개 ID 유니크
//! - `address_id_unique` - 주소 공개 ID 유니크 (주소가 있는 문서만)

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::user::UserEntity,
    repositories::users::UserRepository,
};

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<UserEntity> {
        self.db.get_database().collection::<UserEntity>(COLLECTION_NAME)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_id_unique".to_string())
                .build())
            .build();

        // 주소가 없는 문서끼리 null 키로 충돌하지 않도록 partial index 사용
        let address_id_index = IndexModel::builder()
            .keys(doc! { "addresses.address_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("address_id_unique".to_string())
                .partial_filter_expression(doc! { "addresses.address_id": { "$exists": true } })
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, user_id_index, address_id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("✅ users 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

fn map_write_error(err: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&err) {
        log::warn!("유니크 인덱스 위반: {}", err);
        AppError::duplicate_record()
    } else {
        AppError::DatabaseError(err.to_string())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserEntity>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<UserEntity>> {
        self.collection()
            .find_one(doc! { "user_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn save(&self, mut user: UserEntity) -> AppResult<UserEntity> {
        match user.id {
            None => {
                let result = self.collection()
                    .insert_one(&user)
                    .await
                    .map_err(map_write_error)?;

                let inserted_id = result.inserted_id.as_object_id().ok_or_else(|| {
                    AppError::DatabaseError("삽입된 문서의 _id가 ObjectId가 아닙니다".to_string())
                })?;
                user.id = Some(inserted_id);
            }
            Some(id) => {
                let result = self.collection()
                    .replace_one(doc! { "_id": id }, &user)
                    .await
                    .map_err(map_write_error)?;

                if result.matched_count == 0 {
                    return Err(AppError::not_found());
                }
            }
        }

        Ok(user)
    }

    async fn delete(&self, user: &UserEntity) -> AppResult<()> {
        let id = user.id.ok_or_else(AppError::not_found)?;

        let result = self.collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(AppError::not_found());
        }

        Ok(())
    }

    async fn find_page(&self, page: u64, limit: u64) -> AppResult<Vec<UserEntity>> {
        let Some(skip) = page.checked_mul(limit) else {
            return Ok(Vec::new());
        };
        let limit = i64::try_from(limit)
            .map_err(|_| AppError::ValidationError("limit 값이 너무 큽니다".to_string()))?;

        let cursor = self.collection()
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .skip(skip)
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
