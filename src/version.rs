// Compile-time version from Cargo.toml and build.rs
pub const VERSION: &str = env!("ARCTL_VERSION");
