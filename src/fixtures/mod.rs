pub mod layout;
pub mod models;
pub mod parser;

pub use layout::{generate_layout, Layout};
pub use models::{Point3, TreeGeometry};
