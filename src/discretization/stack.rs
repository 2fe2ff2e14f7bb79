//! Fixed-capacity tesseroid buffers
//!
//! Both the split work-list and the output buffer are arenas of tesseroid
//! slots allocated once, plus a fill cursor. Pushing never reallocates: a
//! push past the last slot is reported as an overflow and leaves the buffer
//! untouched.

use crate::constants::{MAX_DISCRETIZATIONS, MAX_DISCRETIZATIONS_3D, STACK_SIZE};
use crate::discretization::Mode;
use crate::errors::{DiscretizationError, Result};
use crate::geometry::Tesseroid;

/// Arena of tesseroid slots with a fill cursor
#[derive(Debug, Clone)]
struct FixedBuffer {
    slots: Box<[Tesseroid]>,
    len: usize,
}

impl FixedBuffer {
    fn with_capacity(capacity: usize) -> Self {
        FixedBuffer {
            slots: vec![Tesseroid::default(); capacity].into_boxed_slice(),
            len: 0,
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn remaining(&self) -> usize {
        self.slots.len() - self.len
    }

    /// Writes into the next slot, or returns `false` if there is none
    fn push(&mut self, tesseroid: Tesseroid) -> bool {
        match self.slots.get_mut(self.len) {
            Some(slot) => {
                *slot = tesseroid;
                self.len += 1;
                true
            }
            None => false,
        }
    }

    fn pop(&mut self) -> Option<Tesseroid> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.slots[self.len])
    }

    fn as_slice(&self) -> &[Tesseroid] {
        &self.slots[..self.len]
    }
}

/// LIFO work-list of tesseroids waiting to be evaluated
///
/// The stack is empty when [`top`](TesseroidStack::top) is `None`; otherwise
/// `top` is the index of the most recently pushed tesseroid.
#[derive(Debug, Clone)]
pub struct TesseroidStack {
    buffer: FixedBuffer,
}

impl TesseroidStack {
    /// Allocates a stack holding at most `capacity` tesseroids
    pub fn with_capacity(capacity: usize) -> Self {
        TesseroidStack {
            buffer: FixedBuffer::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn len(&self) -> usize {
        self.buffer.len
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len == 0
    }

    /// Index of the topmost tesseroid, `None` when empty
    pub fn top(&self) -> Option<usize> {
        self.buffer.len.checked_sub(1)
    }

    /// Number of free slots
    pub fn remaining(&self) -> usize {
        self.buffer.remaining()
    }

    /// Fails with [`DiscretizationError::StackOverflow`] unless `count` more
    /// tesseroids fit
    pub fn ensure_room(&self, count: usize) -> Result<()> {
        if count > self.remaining() {
            return Err(DiscretizationError::StackOverflow {
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    pub fn push(&mut self, tesseroid: Tesseroid) -> Result<()> {
        if self.buffer.push(tesseroid) {
            Ok(())
        } else {
            Err(DiscretizationError::StackOverflow {
                capacity: self.capacity(),
            })
        }
    }

    pub fn pop(&mut self) -> Option<Tesseroid> {
        self.buffer.pop()
    }

    /// Resets the cursor; slots are kept for reuse
    pub fn clear(&mut self) {
        self.buffer.len = 0;
    }

    /// Pending tesseroids, bottom of the stack first
    pub fn as_slice(&self) -> &[Tesseroid] {
        self.buffer.as_slice()
    }
}

impl Default for TesseroidStack {
    fn default() -> Self {
        Self::with_capacity(STACK_SIZE)
    }
}

/// Output buffer of tesseroids accepted as small enough
#[derive(Debug, Clone)]
pub struct SmallTesseroids {
    buffer: FixedBuffer,
}

impl SmallTesseroids {
    /// Allocates a buffer holding at most `capacity` tesseroids
    pub fn with_capacity(capacity: usize) -> Self {
        SmallTesseroids {
            buffer: FixedBuffer::with_capacity(capacity),
        }
    }

    /// Allocates a buffer with the default capacity for `mode`
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::TwoDimensional => Self::with_capacity(MAX_DISCRETIZATIONS),
            Mode::ThreeDimensional => Self::with_capacity(MAX_DISCRETIZATIONS_3D),
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn len(&self) -> usize {
        self.buffer.len
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len == 0
    }

    pub fn push(&mut self, tesseroid: Tesseroid) -> Result<()> {
        if self.buffer.push(tesseroid) {
            Ok(())
        } else {
            Err(DiscretizationError::OutputOverflow {
                capacity: self.capacity(),
            })
        }
    }

    pub fn clear(&mut self) {
        self.buffer.len = 0;
    }

    /// Accepted tesseroids in acceptance order
    pub fn as_slice(&self) -> &[Tesseroid] {
        self.buffer.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tesseroid> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a SmallTesseroids {
    type Item = &'a Tesseroid;
    type IntoIter = std::slice::Iter<'a, Tesseroid>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tess(west: f64) -> Tesseroid {
        Tesseroid::new(west, west + 1.0, 0.0, 1.0, 1.0, 2.0)
    }

    #[test]
    fn test_stack_lifo() {
        let mut stack = TesseroidStack::with_capacity(3);
        assert!(stack.is_empty());
        assert_eq!(stack.top(), None);

        stack.push(tess(0.0)).unwrap();
        stack.push(tess(1.0)).unwrap();
        assert_eq!(stack.top(), Some(1));
        assert_eq!(stack.remaining(), 1);

        assert_eq!(stack.pop(), Some(tess(1.0)));
        assert_eq!(stack.pop(), Some(tess(0.0)));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn test_stack_overflow_leaves_contents() {
        let mut stack = TesseroidStack::with_capacity(2);
        stack.push(tess(0.0)).unwrap();
        stack.push(tess(1.0)).unwrap();

        let err = stack.push(tess(2.0)).unwrap_err();
        assert!(matches!(
            err,
            DiscretizationError::StackOverflow { capacity: 2 }
        ));
        assert_eq!(stack.as_slice(), &[tess(0.0), tess(1.0)]);
        assert!(stack.ensure_room(1).is_err());
    }

    #[test]
    fn test_zero_capacity_stack() {
        let mut stack = TesseroidStack::with_capacity(0);
        assert_eq!(stack.push(tess(0.0)).unwrap_err().error_code(), -1);
        assert!(stack.ensure_room(0).is_ok());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut stack = TesseroidStack::default();
        assert_eq!(stack.capacity(), STACK_SIZE);
        stack.push(tess(0.0)).unwrap();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), STACK_SIZE);
    }

    #[test]
    fn test_small_tesseroids_overflow() {
        let mut small = SmallTesseroids::with_capacity(2);
        small.push(tess(0.0)).unwrap();
        small.push(tess(1.0)).unwrap();
        let err = small.push(tess(2.0)).unwrap_err();
        assert!(matches!(
            err,
            DiscretizationError::OutputOverflow { capacity: 2 }
        ));
        assert_eq!(small.len(), 2);
        assert_eq!(small.iter().count(), 2);

        small.clear();
        assert!(small.is_empty());
        assert_eq!(small.capacity(), 2);
    }

    #[test]
    fn test_small_tesseroids_for_mode() {
        assert_eq!(
            SmallTesseroids::for_mode(Mode::TwoDimensional).capacity(),
            MAX_DISCRETIZATIONS
        );
    }
}
