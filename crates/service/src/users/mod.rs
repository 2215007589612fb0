//! Users module: three-layer architecture (domain, repository, service).
//!
//! Every read and write of user accounts goes through [`UserService`], which
//! validates input and delegates storage to one [`repository::UserRepository`]
//! backend picked at startup.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::{User, UserInput};
pub use repository::UserRepository;
pub use service::UserService;
