use std::collections::VecDeque;

use super::Element;

/// FIFO reuse queue for [`Element`]s.
///
/// Ownership is the acquire/release discipline: `acquire` hands out an owned
/// element, `release` takes it back by value, so nothing can hold on to an
/// element after returning it. The pool is single-owner and lives inside
/// whatever context drives parsing.
#[derive(Debug, Default)]
pub struct ElementPool {
    free: VecDeque<Element>,
    allocated: usize,
}

impl ElementPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a default-valued element, reusing a released one when available.
    pub fn acquire(&mut self) -> Element {
        match self.free.pop_front() {
            Some(e) => e,
            None => {
                self.allocated += 1;
                Element::default()
            }
        }
    }

    /// Resets `element` and queues it for reuse.
    pub fn release(&mut self, mut element: Element) {
        element.reset();
        self.free.push_back(element);
    }

    pub fn release_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = Element>,
    {
        for e in elements {
            self.release(e);
        }
    }

    /// Number of released elements waiting to be reused.
    #[must_use]
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Number of elements this pool has ever constructed.
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.allocated
    }
}
