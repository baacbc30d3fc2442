//! The output side of emission.
//!
//! A [`Sink`] accepts one primitive term at a time. It stands in for the host's output stream, so every write may
//! fail; emitters propagate the failure verbatim and stop writing.

/// Destination for emitted terms.
///
/// ## Notes
/// - Calls arrive in element order, one call per element.
/// - A failed write leaves whatever was written before it in place; there is no rollback.
pub trait Sink {
    type Error;

    /// Write an integral number.
    fn write_integer(&mut self, value: i64) -> Result<(), Self::Error>;

    /// Write a floating-point number.
    fn write_float(&mut self, value: f64) -> Result<(), Self::Error>;

    /// Write a single-precision floating-point number.
    ///
    /// Defaults to widening into [`Sink::write_float`]. Sinks that render text should override this to keep the
    /// shortest single-precision representation (`0.1`, not `0.10000000149011612`).
    fn write_f32(&mut self, value: f32) -> Result<(), Self::Error> {
        self.write_float(f64::from(value))
    }

    /// Write a short text value.
    fn write_text(&mut self, value: &str) -> Result<(), Self::Error>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    fn write_integer(&mut self, value: i64) -> Result<(), Self::Error> {
        (**self).write_integer(value)
    }

    fn write_float(&mut self, value: f64) -> Result<(), Self::Error> {
        (**self).write_float(value)
    }

    fn write_f32(&mut self, value: f32) -> Result<(), Self::Error> {
        (**self).write_f32(value)
    }

    fn write_text(&mut self, value: &str) -> Result<(), Self::Error> {
        (**self).write_text(value)
    }
}
