//! Tree data model: dynamic values, nodes and node paths.

mod node;
mod path;
mod value;

pub use node::{Node, forest_from_json, forest_len, set_default_collapsed};
pub use path::NodePath;
pub use value::Value;
