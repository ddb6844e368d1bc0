//! Fixed-capacity, insertion-ordered buffer with oldest-first eviction.
//!
//! [`RingBuffer`] retains the most recently pushed `capacity` elements of a
//! stream. Pushing into a full buffer drops the oldest element before
//! `push_back` returns, so the length never exceeds the capacity once a push
//! has completed.
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//! use framewindow::RingBuffer;
//!
//! let mut window = RingBuffer::new(NonZeroUsize::new(3).unwrap());
//! for i in 1..=5 {
//!     window.push_back(i);
//! }
//!
//! assert_eq!(window.len(), 3);
//! assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
//!
//! *window.back_mut().unwrap() *= 10;
//! assert_eq!(*window.back().unwrap(), 50);
//! ```

use std::collections::vec_deque;
use std::collections::VecDeque;
use std::num::NonZeroUsize;

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};

/// A bounded deque that evicts its oldest element when a push overflows it.
///
/// The buffer owns its elements. An evicted element is dropped inside
/// [`push_back`](Self::push_back). References handed out by [`back_mut`](Self::back_mut),
/// [`split_back_mut`](Self::split_back_mut) or iteration borrow the buffer, so
/// they cannot outlive the next push.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    /// Retained elements, oldest at the front.
    items: VecDeque<T>,
    /// Maximum number of retained elements.
    capacity: NonZeroUsize,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer that retains at most `capacity` elements.
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        debug!("Created ring buffer with capacity {}", capacity);
        Self {
            items: VecDeque::new(),
            capacity,
        }
    }

    /// Create an empty buffer from a plain capacity value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`] if `capacity` is 0.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        NonZeroUsize::new(capacity)
            .map(Self::new)
            .ok_or(Error::ZeroCapacity)
    }

    /// Append `item` at the tail, evicting the oldest element if the buffer
    /// was already full.
    pub fn push_back(&mut self, item: T) {
        self.items.push_back(item);
        if self.items.len() > self.capacity.get() {
            // Dropped here, not deferred.
            drop(self.items.pop_front());
            trace!(
                "Evicted oldest element, window size: {}/{}",
                self.items.len(),
                self.capacity
            );
        } else {
            trace!(
                "Pushed element, window size: {}/{}",
                self.items.len(),
                self.capacity
            );
        }
    }

    /// Number of elements currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the buffer holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of elements the buffer retains.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Check if the next push will evict an element.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity.get()
    }

    /// Iterate over the retained elements, oldest first.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate mutably over the retained elements, oldest first.
    pub fn iter_mut(&mut self) -> vec_deque::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// The most recently pushed element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBuffer`] if nothing has been pushed.
    pub fn back(&self) -> Result<&T> {
        self.items.back().ok_or_else(|| {
            warn!("Rejected back() on an empty ring buffer");
            Error::empty_buffer("back")
        })
    }

    /// Mutable access to the most recently pushed element, for attaching
    /// data to it after insertion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBuffer`] if nothing has been pushed.
    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.items.back_mut().ok_or_else(|| {
            warn!("Rejected back_mut() on an empty ring buffer");
            Error::empty_buffer("back_mut")
        })
    }

    /// The element before the tail (if any) together with mutable access to
    /// the tail.
    ///
    /// This lets a caller read the previous element while updating the newest
    /// one, which iteration and [`back_mut`](Self::back_mut) cannot do at the
    /// same time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBuffer`] if nothing has been pushed.
    pub fn split_back_mut(&mut self) -> Result<(Option<&T>, &mut T)> {
        let (front, wrapped) = self.items.as_mut_slices();
        match wrapped.split_last_mut() {
            // The tail wrapped around; its predecessor may sit at the end of `front`.
            Some((back, rest)) => Ok((rest.last().or(front.last()), back)),
            None => {
                let Some((back, rest)) = front.split_last_mut() else {
                    warn!("Rejected split_back_mut() on an empty ring buffer");
                    return Err(Error::empty_buffer("split_back_mut"));
                };
                Ok((rest.last(), back))
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = vec_deque::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
