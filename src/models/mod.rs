pub mod artifact;
pub mod common;
pub mod image;

pub use artifact::*;
pub use common::*;
pub use image::*;
