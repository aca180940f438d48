//! One-item-at-a-time navigation over the filtered menu.
//!
//! The controller never owns the filtered list. Every call carries the
//! caller's current `count`; when it differs from the last count seen, the
//! controller reconciles before handling the request, so the active index
//! is always in range (or absent when the list is empty).

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Horizontal drag distance, in pixels, that counts as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Sign of the last index change. A hint for slide transitions only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    /// Direction of a move from `from` to `to`.
    pub fn between(from: usize, to: usize) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Less => Direction::Backward,
            std::cmp::Ordering::Equal => Direction::Still,
            std::cmp::Ordering::Greater => Direction::Forward,
        }
    }

    /// -1, 0 or +1.
    pub fn sign(&self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }
}

/// Snapshot of the navigation position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    /// Active position. Meaningless when `count` is zero.
    pub active_index: usize,
    /// Sign of the last move.
    pub direction: Direction,
    /// Length of the list this state was computed against.
    pub count: usize,
}

impl NavigationState {
    /// The active index, or None when there is nothing to show.
    pub fn current(&self) -> Option<usize> {
        (self.count > 0).then_some(self.active_index)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn has_prev(&self) -> bool {
        self.count > 0 && self.active_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.active_index + 1 < self.count
    }
}

/// A navigation request from any input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationIntent {
    Next,
    Prev,
    Select(usize),
}

impl NavigationIntent {
    /// Map a horizontal drag to an intent. Dragging left advances.
    pub fn from_swipe(offset_x: f64) -> Option<Self> {
        if offset_x < -SWIPE_THRESHOLD {
            Some(NavigationIntent::Next)
        } else if offset_x > SWIPE_THRESHOLD {
            Some(NavigationIntent::Prev)
        } else {
            None
        }
    }
}

/// Bounded index over a list of `count` items. No wraparound.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    state: NavigationState,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, as of the last call.
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Bring the state in line with a new list length.
    ///
    /// An index past the end resets to 0. An empty list has no current item.
    pub fn reconcile(&mut self, count: usize) -> NavigationState {
        if count != self.state.count {
            if self.state.active_index >= count {
                debug!(
                    from = self.state.active_index,
                    count, "navigation index out of range, resetting"
                );
                self.state.active_index = 0;
            }
            self.state.count = count;
        }
        self.state
    }

    /// Move to `index`. Out-of-range requests leave the state unchanged.
    pub fn select(&mut self, index: usize, count: usize) -> NavigationState {
        self.reconcile(count);
        if index >= count {
            return self.state;
        }
        self.state.direction = Direction::between(self.state.active_index, index);
        self.state.active_index = index;
        self.state
    }

    /// Advance one item. No-op on the last item.
    pub fn next(&mut self, count: usize) -> NavigationState {
        self.reconcile(count);
        match self.state.active_index.checked_add(1) {
            Some(index) => self.select(index, count),
            None => self.state,
        }
    }

    /// Go back one item. No-op on the first item.
    pub fn prev(&mut self, count: usize) -> NavigationState {
        self.reconcile(count);
        match self.state.active_index.checked_sub(1) {
            Some(index) => self.select(index, count),
            None => self.state,
        }
    }

    /// Dispatch an intent.
    pub fn apply(&mut self, intent: NavigationIntent, count: usize) -> NavigationState {
        match intent {
            NavigationIntent::Next => self.next(count),
            NavigationIntent::Prev => self.prev(count),
            NavigationIntent::Select(index) => self.select(index, count),
        }
    }
}
