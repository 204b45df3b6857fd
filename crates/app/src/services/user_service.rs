//! User service: registering owners and looking them up.

use places_domain::error::{NotFoundError, PlacesError};
use places_domain::id::UserId;
use places_domain::user::User;

use crate::ports::UserRepository;

/// Application service for user registration and lookup.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new user after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, user), fields(user_name = %user.name))]
    pub async fn create_user(&self, user: User) -> Result<User, PlacesError> {
        user.validate()?;
        self.repo.create(user).await
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, PlacesError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::user(id).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use places_domain::error::ValidationError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryUserRepo {
        store: Mutex<HashMap<UserId, User>>,
    }

    impl UserRepository for InMemoryUserRepo {
        fn create(&self, user: User) -> impl Future<Output = Result<User, PlacesError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(user.id, user.clone());
            async { Ok(user) }
        }

        fn get_by_id(
            &self,
            id: UserId,
        ) -> impl Future<Output = Result<Option<User>, PlacesError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn update(&self, user: User) -> impl Future<Output = Result<User, PlacesError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(user.id, user.clone());
            async { Ok(user) }
        }
    }

    fn make_service() -> UserService<InMemoryUserRepo> {
        UserService::new(InMemoryUserRepo::default())
    }

    #[tokio::test]
    async fn should_create_user_when_valid() {
        let svc = make_service();
        let user = User::new("Max").unwrap();
        let id = user.id;

        svc.create_user(user).await.unwrap();

        let fetched = svc.get_user(id).await.unwrap();
        assert_eq!(fetched.name, "Max");
        assert!(fetched.places.is_empty());
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_empty() {
        let svc = make_service();
        let mut user = User::new("Max").unwrap();
        user.name = String::new();

        let result = svc.create_user(user).await;
        assert!(matches!(
            result,
            Err(PlacesError::Validation(ValidationError::EmptyName))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_user_missing() {
        let svc = make_service();
        let result = svc.get_user(UserId::new()).await;
        assert!(matches!(result, Err(PlacesError::NotFound(_))));
    }
}
