pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use db::Database;
pub use error::{Error, Result};
