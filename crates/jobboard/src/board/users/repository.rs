use super::domain::{User, UserId};
use crate::board::error::RepositoryError;

/// Storage abstraction for accounts. Usernames and emails are unique.
pub trait UserRepository: Send + Sync {
    fn next_user_id(&self) -> Result<UserId, RepositoryError>;
    fn insert_user(&self, user: User) -> Result<User, RepositoryError>;
    fn update_user(&self, user: User) -> Result<(), RepositoryError>;
    fn fetch_user(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
    fn find_user_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    fn list_users(&self) -> Result<Vec<User>, RepositoryError>;
}
