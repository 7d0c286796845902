//! Wraparound index arithmetic for descriptor rings.
//!
//! All helpers take the ring length explicitly so the same code serves the
//! TX and RX rings of every channel, whatever their configured sizes.

/// Advance `index` by `offset` slots, wrapping past `len - 1` back to 0.
#[inline(always)]
#[must_use]
pub const fn incr(index: usize, offset: usize, len: usize) -> usize {
    (index + offset % len) % len
}

/// Step `index` back by one slot, wrapping below 0 to `len - 1`.
#[inline(always)]
#[must_use]
pub const fn decr(index: usize, len: usize) -> usize {
    if index == 0 { len - 1 } else { index - 1 }
}

/// Number of forward steps from `from` to `to`, in `0..len`.
#[inline(always)]
#[must_use]
pub const fn distance(from: usize, to: usize, len: usize) -> usize {
    if to >= from {
        to - from
    } else {
        len - from + to
    }
}

/// Ordered walk over ring indices.
///
/// Yields `count` indices starting at `start`, wrapping from `len - 1` to 0.
/// A span never revisits a slot, so `count` is at most `len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RingSpan {
    next: usize,
    remaining: usize,
    len: usize,
}

impl RingSpan {
    /// Span of `count` slots starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start >= len` or `count > len`.
    #[must_use]
    pub const fn new(start: usize, count: usize, len: usize) -> Self {
        assert!(start < len, "ring span start outside ring");
        assert!(count <= len, "ring span longer than ring");
        Self {
            next: start,
            remaining: count,
            len,
        }
    }

    /// Walk from `from` up to but not including `to`.
    ///
    /// When `from == to` the span is empty; a full-ring walk must be built
    /// with [`RingSpan::full`] instead.
    #[must_use]
    pub const fn between(from: usize, to: usize, len: usize) -> Self {
        Self::new(from, distance(from, to, len), len)
    }

    /// Every slot of the ring, starting at `start`.
    #[must_use]
    pub const fn full(start: usize, len: usize) -> Self {
        Self::new(start, len, len)
    }

    /// Span with nothing in it.
    #[must_use]
    pub const fn empty(len: usize) -> Self {
        Self {
            next: 0,
            remaining: 0,
            len,
        }
    }

    /// First index the span will yield, if any.
    #[must_use]
    pub const fn first(&self) -> Option<usize> {
        if self.remaining == 0 {
            None
        } else {
            Some(self.next)
        }
    }

    /// Length of the ring the span walks over.
    #[must_use]
    pub const fn ring_len(&self) -> usize {
        self.len
    }

    /// Whether `index` is one of the slots still ahead in the span.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index < self.len && distance(self.next, index, self.len) < self.remaining
    }
}

impl Iterator for RingSpan {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.next;
        self.next = incr(self.next, 1, self.len);
        self.remaining -= 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RingSpan {}

impl core::iter::FusedIterator for RingSpan {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<const M: usize>(span: RingSpan) -> ([usize; M], usize) {
        let mut out = [usize::MAX; M];
        let mut n = 0;
        for index in span {
            out[n] = index;
            n += 1;
        }
        (out, n)
    }

    #[test]
    fn incr_wraps_past_end() {
        assert_eq!(incr(0, 1, 4), 1);
        assert_eq!(incr(3, 1, 4), 0);
        assert_eq!(incr(2, 3, 4), 1);
        assert_eq!(incr(1, 9, 4), 2);
    }

    #[test]
    fn decr_wraps_below_zero() {
        assert_eq!(decr(1, 4), 0);
        assert_eq!(decr(0, 4), 3);
        assert_eq!(decr(0, 1), 0);
    }

    #[test]
    fn distance_forward_and_wrapped() {
        assert_eq!(distance(2, 6, 8), 4);
        assert_eq!(distance(6, 2, 8), 4);
        assert_eq!(distance(5, 5, 8), 0);
        assert_eq!(distance(7, 0, 8), 1);
    }

    #[test]
    fn span_between_no_wrap() {
        let (out, n) = collect::<8>(RingSpan::between(2, 7, 10));
        assert_eq!(n, 5);
        assert_eq!(&out[..n], &[2, 3, 4, 5, 6]);
    }

    #[test]
    fn span_between_wraps() {
        let (out, n) = collect::<8>(RingSpan::between(7, 2, 10));
        assert_eq!(n, 5);
        assert_eq!(&out[..n], &[7, 8, 9, 0, 1]);
    }

    #[test]
    fn span_between_same_index_is_empty() {
        let span = RingSpan::between(4, 4, 8);
        assert_eq!(span.len(), 0);
        assert_eq!(span.first(), None);
    }

    #[test]
    fn full_span_visits_every_slot_once() {
        let (out, n) = collect::<10>(RingSpan::full(3, 10));
        assert_eq!(n, 10);
        assert_eq!(out, [3, 4, 5, 6, 7, 8, 9, 0, 1, 2]);
    }

    #[test]
    fn exact_size_tracks_consumption() {
        let mut span = RingSpan::new(6, 4, 8);
        assert_eq!(span.len(), 4);
        span.next();
        assert_eq!(span.len(), 3);
        assert_eq!(span.first(), Some(7));
    }

    #[test]
    fn contains_follows_wraparound() {
        let span = RingSpan::between(6, 2, 8);
        assert!(span.contains(6));
        assert!(span.contains(7));
        assert!(span.contains(0));
        assert!(span.contains(1));
        assert!(!span.contains(2));
        assert!(!span.contains(5));
        assert!(!span.contains(8));
    }

    #[test]
    fn empty_span_yields_nothing() {
        let mut span = RingSpan::empty(4);
        assert_eq!(span.next(), None);
        assert_eq!(span.ring_len(), 4);
        assert!(!span.contains(0));
    }

    #[test]
    #[should_panic(expected = "ring span start outside ring")]
    fn span_start_out_of_range_panics() {
        let _ = RingSpan::new(4, 1, 4);
    }

    #[test]
    fn single_slot_ring() {
        let (out, n) = collect::<1>(RingSpan::full(0, 1));
        assert_eq!(n, 1);
        assert_eq!(out[0], 0);
        assert_eq!(incr(0, 1, 1), 0);
    }
}
