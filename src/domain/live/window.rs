//! Sliding window buffer for the live chart.

use super::PricePoint;
use std::collections::VecDeque;

/// Fixed-capacity FIFO buffer of recent price points, oldest first.
///
/// Appending at capacity evicts the oldest point. The window is the sole
/// owner of its points; rendering reads go through [`snapshot`](Self::snapshot).
/// Timestamps are non-decreasing: the session controller generates them at
/// append time.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    points: VecDeque<PricePoint>,
    capacity: usize,
}

impl SlidingWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, evicting the oldest if at capacity.
    pub fn push(&mut self, point: PricePoint) {
        if self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Owned copy of the window contents, oldest first.
    pub fn snapshot(&self) -> Vec<PricePoint> {
        self.points.iter().copied().collect()
    }

    /// Clear to empty, used when a new session starts.
    pub fn reset(&mut self) {
        self.points.clear();
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.back()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn point(seq: i64, price: f64) -> PricePoint {
        PricePoint {
            timestamp: Utc.timestamp_opt(1_700_000_000 + seq, 0).unwrap(),
            price,
        }
    }

    #[test]
    fn test_push_keeps_order() {
        let mut window = SlidingWindow::new(5);
        window.push(point(0, 150.0));
        window.push(point(1, 149.5));
        assert_eq!(window.len(), 2);
        let prices: Vec<f64> = window.snapshot().iter().map(|p| p.price).collect();
        assert_eq!(prices, [150.0, 149.5]);
        assert_eq!(window.latest().unwrap().price, 149.5);
    }

    #[test]
    fn test_overflow_keeps_last_n_in_order() {
        // N + k appends leave exactly the last N points, in append order.
        let capacity = 20;
        let mut window = SlidingWindow::new(capacity);
        for i in 0..25 {
            window.push(point(i, i as f64 + 1.0));
            assert!(window.len() <= capacity);
        }
        assert_eq!(window.len(), capacity);
        let prices: Vec<f64> = window.snapshot().iter().map(|p| p.price).collect();
        let expected: Vec<f64> = (6..=25).map(|i| i as f64).collect();
        assert_eq!(prices, expected);
    }

    #[test]
    fn test_under_capacity_keeps_all() {
        let mut window = SlidingWindow::new(20);
        for i in 0..7 {
            window.push(point(i, i as f64));
        }
        assert_eq!(window.len(), 7);
    }

    #[test]
    fn test_snapshot_does_not_alias_storage() {
        let mut window = SlidingWindow::new(3);
        window.push(point(0, 1.0));
        let mut snap = window.snapshot();
        snap[0].price = 99.0;
        snap.push(point(1, 2.0));
        assert_eq!(window.len(), 1);
        assert_eq!(window.latest().unwrap().price, 1.0);
    }

    #[test]
    fn test_reset_clears() {
        let mut window = SlidingWindow::new(3);
        window.push(point(0, 1.0));
        window.push(point(1, 2.0));
        window.reset();
        assert!(window.is_empty());
        assert_eq!(window.capacity(), 3);
        assert!(window.latest().is_none());
    }

    #[test]
    fn test_timestamps_non_decreasing_after_eviction() {
        let mut window = SlidingWindow::new(3);
        for i in 0..6 {
            window.push(point(i, i as f64));
        }
        let snap = window.snapshot();
        assert!(snap.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }
}
