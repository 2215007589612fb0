//! Service layer providing the user account store on top of models.
//! - Separates business rules (validation, logging) from storage.
//! - One repository trait, three backends: memory, JSON file, database.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod runtime;
pub mod storage;
pub mod users;
#[cfg(test)]
pub mod test_support;
