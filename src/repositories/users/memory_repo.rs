//! In-memory 사용자 리포지토리
//!
//! 삽입 순서를 기본 정렬로 유지하며, 이메일/공개 ID 유니크 검사와 쓰기를
//! 하나의 쓰기 잠금 안에서 수행합니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;
use crate::{
    core::errors::{AppError, AppResult},
    domain::entities::users::user::UserEntity,
    repositories::users::UserRepository,
};

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<UserEntity>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserEntity>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<UserEntity>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.user_id == user_id).cloned())
    }

    async fn save(&self, mut user: UserEntity) -> AppResult<UserEntity> {
        let mut users = self.users.write().await;

        let conflicts = users.iter().any(|existing| {
            existing.id != user.id
                && (existing.email == user.email || existing.user_id == user.user_id)
        });
        if conflicts {
            return Err(AppError::duplicate_record());
        }

        match user.id {
            None => {
                user.id = Some(ObjectId::new());
                users.push(user.clone());
            }
            Some(id) => {
                let slot = users
                    .iter_mut()
                    .find(|existing| existing.id == Some(id))
                    .ok_or_else(AppError::not_found)?;
                *slot = user.clone();
            }
        }

        Ok(user)
    }

    async fn delete(&self, user: &UserEntity) -> AppResult<()> {
        let mut users = self.users.write().await;
        let before = users.len();

        users.retain(|existing| existing.id.is_none() || existing.id != user.id);

        if users.len() == before {
            return Err(AppError::not_found());
        }
        Ok(())
    }

    async fn find_page(&self, page: u64, limit: u64) -> AppResult<Vec<UserEntity>> {
        let users = self.users.read().await;

        let Some(skip) = page.checked_mul(limit) else {
            return Ok(Vec::new());
        };
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(users.iter().skip(skip).take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(user_id: &str, email: &str) -> UserEntity {
        UserEntity::new(
            user_id.to_string(),
            email.to_string(),
            "$2b$04$hash".to_string(),
            "First".to_string(),
            "Last".to_string(),
            vec![],
        )
    }

    #[actix_web::test]
    async fn test_save_assigns_internal_id() {
        let repo = InMemoryUserRepository::new();

        let saved = repo.save(user("u1", "a@example.com")).await.unwrap();

        assert!(saved.is_persisted());
        assert_eq!(repo.find_by_user_id("u1").await.unwrap(), Some(saved));
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_rejected_by_store() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("u1", "a@example.com")).await.unwrap();

        let result = repo.save(user("u2", "a@example.com")).await;

        assert!(matches!(result, Err(AppError::DuplicateRecord(_))));
        assert_eq!(repo.count().await, 1);
    }

    #[actix_web::test]
    async fn test_replace_keeps_position() {
        let repo = InMemoryUserRepository::new();
        let mut first = repo.save(user("u1", "a@example.com")).await.unwrap();
        repo.save(user("u2", "b@example.com")).await.unwrap();

        first.rename("Changed".to_string(), "Name".to_string());
        repo.save(first).await.unwrap();

        let page = repo.find_page(0, 10).await.unwrap();
        assert_eq!(page[0].first_name, "Changed");
        assert_eq!(page[1].user_id, "u2");
    }

    #[actix_web::test]
    async fn test_delete_unsaved_user_is_not_found() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("u1", "a@example.com")).await.unwrap();

        let result = repo.delete(&user("u1", "a@example.com")).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(repo.count().await, 1);
    }

    #[actix_web::test]
    async fn test_page_overflow_is_empty() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("u1", "a@example.com")).await.unwrap();

        assert!(repo.find_page(u64::MAX, 2).await.unwrap().is_empty());
        assert!(repo.find_page(1, 1).await.unwrap().is_empty());
    }
}
