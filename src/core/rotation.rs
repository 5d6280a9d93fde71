//! Rotating selection over a fixed list
//!
//! Used for the technology-category tabs, the "AI Training" model name and the
//! staggered floating badges. Every consumer owns its own state.

use std::time::Duration;

/// Active index cycling through a non-empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationState<T> {
    items: Vec<T>,
    active_index: usize,
}

impl<T> RotationState<T> {
    /// Returns `None` when `items` is empty.
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            items,
            active_index: 0,
        })
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active(&self) -> &T {
        &self.items[self.active_index]
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move to the next item, wrapping at the end. Returns the new index.
    pub fn advance(&mut self) -> usize {
        self.active_index = (self.active_index + 1) % self.items.len();
        self.active_index
    }

    /// Jump to `index`; out-of-range requests are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.active_index = index;
            true
        } else {
            false
        }
    }
}

/// One-shot staggered reveal: item `i` becomes visible at `i * stagger`.
#[derive(Debug, Clone)]
pub struct StaggeredReveal {
    stagger: Duration,
    visible: Vec<bool>,
    elapsed: Duration,
}

impl StaggeredReveal {
    pub fn new(count: usize, stagger: Duration) -> Self {
        Self {
            stagger,
            visible: vec![false; count],
            elapsed: Duration::ZERO,
        }
    }

    /// Delay after mount at which `index` is revealed
    pub fn delay_for(&self, index: usize) -> Duration {
        self.stagger * index as u32
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn visible(&self) -> &[bool] {
        &self.visible
    }

    /// Mark one item as revealed (driver fired its timer)
    pub fn reveal(&mut self, index: usize) {
        if let Some(slot) = self.visible.get_mut(index) {
            *slot = true;
        }
    }

    /// Reveal everything due after `elapsed` more time. Returns newly shown indices.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<usize> {
        self.elapsed += elapsed;
        let mut shown = Vec::new();
        for index in 0..self.visible.len() {
            if !self.visible[index] && self.delay_for(index) <= self.elapsed {
                self.visible[index] = true;
                shown.push(index);
            }
        }
        shown
    }

    pub fn is_complete(&self) -> bool {
        self.visible.iter().all(|v| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejected() {
        assert!(RotationState::<u8>::new(vec![]).is_none());
    }

    #[test]
    fn test_advance_wraps() {
        let mut rotation = RotationState::new(vec!["a", "b", "c"]).unwrap();
        assert_eq!(rotation.advance(), 1);
        assert_eq!(rotation.advance(), 2);
        assert_eq!(rotation.advance(), 0);
        assert_eq!(*rotation.active(), "a");
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut rotation = RotationState::new(vec![42]).unwrap();
        assert_eq!(rotation.advance(), 0);
    }

    #[test]
    fn test_select() {
        let mut rotation = RotationState::new(vec![1, 2, 3, 4, 5]).unwrap();
        assert!(rotation.select(3));
        assert_eq!(rotation.active_index(), 3);
        assert!(!rotation.select(5));
        assert_eq!(rotation.active_index(), 3);
        assert_eq!(rotation.advance(), 4);
    }

    #[test]
    fn test_staggered_reveal() {
        let mut reveal = StaggeredReveal::new(4, Duration::from_millis(800));
        assert_eq!(reveal.advance(Duration::ZERO), vec![0]);
        assert_eq!(reveal.advance(Duration::from_millis(799)), Vec::<usize>::new());
        assert_eq!(reveal.advance(Duration::from_millis(1)), vec![1]);
        assert_eq!(reveal.advance(Duration::from_millis(5000)), vec![2, 3]);
        assert!(reveal.is_complete());
    }

    #[test]
    fn test_manual_reveal_out_of_range() {
        let mut reveal = StaggeredReveal::new(2, Duration::from_millis(800));
        reveal.reveal(7);
        reveal.reveal(1);
        assert_eq!(reveal.visible(), &[false, true]);
        assert_eq!(reveal.delay_for(1), Duration::from_millis(800));
    }
}
