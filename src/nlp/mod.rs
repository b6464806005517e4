//! Model-backed text processing: summarising abstracts and drafting sections.

pub mod clean;
pub mod draft;
pub mod models;
pub mod summarize;
pub mod tokenize;

pub use clean::clean_text;
pub use draft::draft_section;
pub use models::{ModelError, ModelHub};
pub use summarize::summarize_paper;
