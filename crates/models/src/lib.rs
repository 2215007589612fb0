pub mod errors;
pub mod db;
pub mod user_account;

#[cfg(test)]
mod tests;
