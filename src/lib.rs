#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod error;
pub mod image;
pub mod logging;
pub mod manifest;
pub mod plan;
pub mod project;
pub mod version;
