pub mod controller;
pub mod cursor;
pub mod transform;

pub use controller::*;
pub use cursor::*;
pub use transform::*;
