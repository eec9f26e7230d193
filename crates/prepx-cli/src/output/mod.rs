//! Output formatting for the CLI.

mod printer;
mod tree;

pub use printer::Output;
pub use tree::render_tree;
