// Rules module - one file per structural rule
// - engine.rs: Document, DocumentRule trait and the ordered RuleEngine
// - size.rs: byte-size thresholds
// - table_first.rs: at least one Markdown table
// - single_heading.rs: exactly one top-level heading
// - valid_links.rs: relative link targets exist on disk
// - code_fence.rs: fence stripping shared by structural rules

pub mod code_fence;
pub mod engine;
pub mod single_heading;
pub mod size;
pub mod table_first;
pub mod valid_links;

pub use engine::*;
