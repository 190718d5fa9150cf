//! Questionnaire sources: the built-in catalog and TOML form files

mod builtin;
mod file_form;
mod loader;

pub use builtin::tax_year_2024;
pub use file_form::{FileCondition, FileQuestion, FormFile};
pub use loader::{FormFileError, FormLoader};
