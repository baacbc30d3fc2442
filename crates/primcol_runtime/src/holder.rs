//! Carry a sink failure across a visitor boundary.
//!
//! A bulk container's visitor returns only [`ControlFlow`], so it cannot hand a typed error back to the caller.
//! The emission call owns an [`ErrorHolder`] on its stack: the visitor parks the first failure in it and asks the
//! container to stop, and the caller re-raises it once traversal returns.
//!
//! ## Notes
//! - One holder per emission call; holders are never shared between calls or threads.
//! - Once a failure is held, [`ErrorHolder::guard`] refuses to run further writes, even if the container keeps
//!   calling the visitor after being asked to stop.

use std::ops::ControlFlow;

/// Call-scoped cell holding "no error yet" or the first captured error.
#[derive(Debug)]
pub struct ErrorHolder<E> {
    held: Option<E>,
}

impl<E> ErrorHolder<E> {
    pub const fn new() -> Self {
        Self { held: None }
    }

    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    /// Capture `err` unless an earlier error is already held.
    pub fn capture(&mut self, err: E) {
        if self.held.is_none() {
            self.held = Some(err);
        }
    }

    /// Run one write on behalf of a visitor.
    ///
    /// ## Returns
    /// - `Continue` if the write succeeded.
    /// - `Break` if the write failed (the error is captured) or an error was already held (the write is skipped).
    pub fn guard(&mut self, write: impl FnOnce() -> Result<(), E>) -> ControlFlow<()> {
        if self.is_holding() {
            return ControlFlow::Break(());
        }
        match write() {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                self.capture(err);
                ControlFlow::Break(())
            }
        }
    }

    /// Re-raise the held error, if any.
    pub fn into_result(self) -> Result<(), E> {
        match self.held {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<E> Default for ErrorHolder<E> {
    fn default() -> Self {
        Self::new()
    }
}
