// Library root for the hello-azure service

pub mod api;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::api::hello::handler::GREETING;
pub use crate::config::environment::EnvironmentVariables;
