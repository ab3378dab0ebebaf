//! Pseudo-filesystem access
//!
//! Reading `/proc` and `/sys` files and pulling values out of their text.

pub mod extract;
pub mod reader;
pub mod stat;

pub use extract::extract_kb_value;
pub use reader::{read_int_file, read_pseudo_file};
pub use stat::ProcStatSource;
