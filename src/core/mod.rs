pub mod clock;
pub mod cursor;
pub mod input_adapter;

pub use clock::Clock;
pub use cursor::WindowCursor;
pub use input_adapter::WinitController;
