//! Formatted append for the growing object.

use core::fmt;

use allocator_api2::alloc::Allocator;

use crate::stack::ObjectStack;

/// Streams [`core::fmt`] output into the stack's growing object.
///
/// Created by [`ObjectStack::writer`]. Formatting is appended as it is
/// produced; nothing is buffered and nothing is truncated.
pub struct StackWriter<'a, A: Allocator> {
    stack: &'a ObjectStack<A>,
    written: usize,
}

impl<'a, A> StackWriter<'a, A>
where
    A: Allocator,
{
    pub(crate) fn new(stack: &'a ObjectStack<A>) -> Self {
        StackWriter { stack, written: 0 }
    }

    /// Bytes appended through this writer so far.
    #[inline(always)]
    pub fn written(&self) -> usize {
        self.written
    }
}

impl<A> fmt::Write for StackWriter<'_, A>
where
    A: Allocator,
{
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.stack.grow(s.as_bytes());
        self.written += s.len();
        Ok(())
    }
}

impl<A> ObjectStack<A>
where
    A: Allocator,
{
    /// Returns a [`fmt::Write`] adapter appending to the growing object.
    #[inline]
    pub fn writer(&self) -> StackWriter<'_, A> {
        StackWriter::new(self)
    }

    /// Appends formatted text to the growing object and returns the number
    /// of bytes appended.
    ///
    /// This is the method the `write!` macro resolves to, so
    /// `write!(stack, "{}", value)` works without importing a trait and
    /// evaluates to the appended length. Appending never fails; a `Display`
    /// impl that reports a spurious error merely stops the stream early,
    /// and the returned count still matches what was appended.
    pub fn write_fmt(&self, args: fmt::Arguments<'_>) -> usize {
        let mut writer = StackWriter::new(self);
        let _ = fmt::Write::write_fmt(&mut writer, args);
        writer.written
    }
}
