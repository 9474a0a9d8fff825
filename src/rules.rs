//! Built-in rules for the diagram line syntax.

mod content;
mod group;
mod section;

pub use content::SectionContentRule;
pub use group::GroupRule;
pub use section::SectionRule;
