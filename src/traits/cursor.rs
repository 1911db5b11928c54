/// Host cursor - toggled on look-button edges
pub trait CursorControl {
    /// Confine the pointer to the window and hide it
    fn lock_and_hide(&mut self);

    /// Release the pointer and make it visible again
    fn unlock_and_show(&mut self);
}

/// Cursor that ignores every command, for hosts without a pointer
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCursor;

impl CursorControl for NoCursor {
    fn lock_and_hide(&mut self) {}

    fn unlock_and_show(&mut self) {}
}
