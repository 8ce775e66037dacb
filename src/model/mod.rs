//! Portfolio data: the fixed section list and its static content.

pub mod portfolio;
pub mod section;

pub use section::Section;
