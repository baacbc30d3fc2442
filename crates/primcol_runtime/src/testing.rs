//! Test doubles for sinks and containers.
//!
//! These are public so hosts can verify their own container types against the same expectations this crate tests
//! itself with: record what was written, fail on a chosen write, count which capability an emitter used.

use std::cell::Cell;
use std::convert::Infallible;
use std::ops::ControlFlow;

use primcol_core::Family;
use thiserror::Error;

use crate::container::{BulkContainer, Container, IndexedContainer, Shape};
use crate::sink::Sink;

/// One term written to a sink.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Sink that records every term and never fails.
#[derive(Debug, Default)]
pub struct RecordingSink {
    terms: Vec<Term>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }
}

impl Sink for RecordingSink {
    type Error = Infallible;

    fn write_integer(&mut self, value: i64) -> Result<(), Infallible> {
        self.terms.push(Term::Integer(value));
        Ok(())
    }

    fn write_float(&mut self, value: f64) -> Result<(), Infallible> {
        self.terms.push(Term::Float(value));
        Ok(())
    }

    fn write_text(&mut self, value: &str) -> Result<(), Infallible> {
        self.terms.push(Term::Text(value.to_string()));
        Ok(())
    }
}

/// Error returned by [`FailingSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("sink closed at write #{write}")]
pub struct SinkFailure {
    /// 1-based number of the write that failed.
    pub write: usize,
}

/// Sink that accepts writes until the `n`th, which fails along with every write after it.
#[derive(Debug)]
pub struct FailingSink {
    fail_on: usize,
    attempts: usize,
    written: RecordingSink,
}

impl FailingSink {
    /// Fail on the `n`th write (1-based). `usize::MAX` effectively never fails.
    pub fn failing_on(n: usize) -> Self {
        Self {
            fail_on: n,
            attempts: 0,
            written: RecordingSink::new(),
        }
    }

    /// Number of write calls made, including failed ones.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Terms accepted before the failure.
    pub fn written(&self) -> &[Term] {
        self.written.terms()
    }

    fn attempt(&mut self, write: impl FnOnce(&mut RecordingSink)) -> Result<(), SinkFailure> {
        self.attempts += 1;
        if self.attempts >= self.fail_on {
            return Err(SinkFailure { write: self.attempts });
        }
        write(&mut self.written);
        Ok(())
    }
}

impl Sink for FailingSink {
    type Error = SinkFailure;

    fn write_integer(&mut self, value: i64) -> Result<(), SinkFailure> {
        self.attempt(|s| {
            let _ = s.write_integer(value);
        })
    }

    fn write_float(&mut self, value: f64) -> Result<(), SinkFailure> {
        self.attempt(|s| {
            let _ = s.write_float(value);
        })
    }

    fn write_text(&mut self, value: &str) -> Result<(), SinkFailure> {
        self.attempt(|s| {
            let _ = s.write_text(value);
        })
    }
}

/// Indexed container wrapper that counts which capability was used.
#[derive(Debug)]
pub struct Instrumented<C> {
    inner: C,
    element_at_calls: Cell<usize>,
    for_each_calls: Cell<usize>,
}

impl<C> Instrumented<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            element_at_calls: Cell::new(0),
            for_each_calls: Cell::new(0),
        }
    }

    pub fn element_at_calls(&self) -> usize {
        self.element_at_calls.get()
    }

    pub fn for_each_calls(&self) -> usize {
        self.for_each_calls.get()
    }
}

impl<T, C: BulkContainer<T>> BulkContainer<T> for Instrumented<C> {
    fn for_each(&self, visitor: &mut dyn FnMut(T) -> ControlFlow<()>) {
        self.for_each_calls.set(self.for_each_calls.get() + 1);
        self.inner.for_each(visitor);
    }
}

impl<T, C: IndexedContainer<T>> IndexedContainer<T> for Instrumented<C> {
    fn size(&self) -> usize {
        self.inner.size()
    }

    fn element_at(&self, index: usize) -> T {
        self.element_at_calls.set(self.element_at_calls.get() + 1);
        self.inner.element_at(index)
    }
}

impl<C> Container for Instrumented<C>
where
    C: Container + IndexedContainer<<C as Container>::Element>,
{
    type Element = C::Element;
    const FAMILY: Family = Family::Indexed;

    fn shape(&self) -> Shape<'_, C::Element> {
        Shape::Indexed(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn failing_sink_keeps_failing_after_first_failure() {
        let mut sink = FailingSink::failing_on(2);
        assert_eq!(sink.write_integer(1), Ok(()));
        assert_eq!(sink.write_integer(2), Err(SinkFailure { write: 2 }));
        assert_eq!(sink.write_text("x"), Err(SinkFailure { write: 3 }));
        assert_eq!(sink.written(), &[Term::Integer(1)]);
    }

    #[test]
    fn recording_sink_widens_f32_by_default() {
        let mut sink = RecordingSink::new();
        sink.write_f32(0.5).unwrap();
        assert_eq!(sink.into_terms(), vec![Term::Float(0.5)]);
    }
}
