pub mod grid;
pub mod universe;
