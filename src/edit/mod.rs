//! User actions on a rendered document
//!
//! - `marks`: mark / clear a range on one layer
//! - `locate`: find the leaf under a flattened offset

pub mod locate;
pub mod marks;

pub use locate::{locate, LeafLocation};
pub use marks::{apply_mark, clear_mark};
