pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod github;
pub mod history;
pub mod messages;
pub mod models;
pub mod pagination;
pub mod query;
pub mod server;
pub mod types;
pub mod view;
pub mod weather;

pub use config::FinderConfig;
pub use error::{FinderError, Result};
