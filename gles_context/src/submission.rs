/// Rendering submission collaborator
///
/// The context does not record or submit draws itself. Deleting an object
/// that may still be bound to in-flight work asks the backend whether a
/// draw is being recorded and, if so, to flush it first.

pub trait CommandSubmitter {
    /// Whether the current framebuffer is in the middle of recording draws
    fn is_in_draw_state(&self) -> bool;

    /// Submit pending work and wait for it to retire
    fn flush(&mut self);
}

/// Submitter for contexts without a backend (never drawing, flush is a no-op)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSubmitter;

impl CommandSubmitter for NullSubmitter {
    fn is_in_draw_state(&self) -> bool {
        false
    }

    fn flush(&mut self) {}
}
