//! Capacity-bounded retention set ranked by damage.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Total order over damage values so they can live in a [`BinaryHeap`].
#[derive(Debug, Clone, Copy, PartialEq)]
struct OrderedDamage(f64);

impl Eq for OrderedDamage {}

impl PartialOrd for OrderedDamage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedDamage {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// A min-ranked set of damage values with a fixed capacity.
///
/// [`BoundedFrontierSearch`](crate::BoundedFrontierSearch) keeps one per
/// time checkpoint to decide which generated states are worth expanding:
/// below capacity everything is admitted; at capacity a candidate must
/// strictly beat the current minimum, which is then evicted in O(log K).
#[derive(Debug, Clone)]
pub struct RetentionHeap {
    capacity: usize,
    entries: BinaryHeap<Reverse<OrderedDamage>>,
}

impl RetentionHeap {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: BinaryHeap::with_capacity(capacity.min(1024)),
        }
    }

    /// Offers a damage value for retention. Returns `true` when the value is
    /// retained, evicting the current minimum if the set was full.
    pub fn offer(&mut self, damage: f64) -> bool {
        if self.entries.len() < self.capacity {
            self.entries.push(Reverse(OrderedDamage(damage)));
            return true;
        }
        match self.entries.peek() {
            Some(Reverse(weakest)) if damage > weakest.0 => {
                self.entries.pop();
                self.entries.push(Reverse(OrderedDamage(damage)));
                true
            }
            _ => false,
        }
    }

    /// Current minimum retained damage, if any value is retained.
    pub fn min(&self) -> Option<f64> {
        self.entries.peek().map(|Reverse(weakest)| weakest.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
