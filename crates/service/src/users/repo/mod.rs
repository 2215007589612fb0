//! Concrete [`super::repository::UserRepository`] backends.

pub mod memory;
pub mod json_file;
pub mod seaorm;

pub use json_file::JsonFileUserRepository;
pub use memory::MemoryUserRepository;
pub use seaorm::SeaOrmUserRepository;

use super::domain::User;
use crate::errors::ServiceError;

/// Index of `id` in an ordered user list.
fn position(users: &[User], id: i32) -> Result<usize, ServiceError> {
    users.iter().position(|u| u.id == id).ok_or(ServiceError::NotFound(id))
}

/// Next id after everything in `users`, starting at 1.
fn next_id_after(users: &[User]) -> i32 {
    users.iter().map(|u| u.id).max().map_or(1, |max| max.saturating_add(1))
}

/// Take `next` and advance the counter; errors once the id space is used up.
fn take_id(next: &mut i32) -> Result<i32, ServiceError> {
    let id = *next;
    *next = id
        .checked_add(1)
        .ok_or_else(|| ServiceError::Persistence("user id space exhausted".into()))?;
    Ok(id)
}
