//! Infrastructure layer for tax-intake
//!
//! External adapters: the built-in form catalog, TOML form-file loading,
//! and configuration file handling.

pub mod config;
pub mod form;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use form::{FormFileError, FormLoader, tax_year_2024};
