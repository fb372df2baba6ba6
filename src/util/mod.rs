pub mod crypto;
pub mod exec;
pub mod json;
