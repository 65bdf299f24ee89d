//! Range expressions over versions

mod operator;
mod requirement;
mod version_range;

pub use operator::{InvalidOperatorError, Operator};
pub use requirement::Requirement;
pub use version_range::VersionRange;
