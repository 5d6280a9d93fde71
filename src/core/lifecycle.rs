//! Page lifecycle signalling
//!
//! The body carries `loading` until the page is mounted, then `loaded`.
//! Instead of poking the document from wherever, components receive a
//! [`PageLifecycle`] and call [`PageLifecycle::mark_loaded`].

/// Class set on the body before the page is interactive
pub const LOADING_CLASS: &str = "loading";

/// Class set on the body once the page is mounted
pub const LOADED_CLASS: &str = "loaded";

/// Class added to reveal targets when they scroll into view
pub const VISIBLE_CLASS: &str = "visible";

/// Minimal class-list capability (backed by `DomTokenList` in the browser)
pub trait ClassList {
    fn add(&self, class: &str);
    fn remove(&self, class: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagePhase {
    #[default]
    Loading,
    Loaded,
}

/// Owns the body-level loading state
#[derive(Debug)]
pub struct PageLifecycle<C: ClassList> {
    body: C,
    phase: PagePhase,
}

impl<C: ClassList> PageLifecycle<C> {
    pub fn new(body: C) -> Self {
        Self {
            body,
            phase: PagePhase::Loading,
        }
    }

    pub fn phase(&self) -> PagePhase {
        self.phase
    }

    /// Switch the body from `loading` to `loaded`. Only the first call has
    /// an effect; returns whether this call changed anything.
    pub fn mark_loaded(&mut self) -> bool {
        if self.phase == PagePhase::Loaded {
            return false;
        }
        self.body.remove(LOADING_CLASS);
        self.body.add(LOADED_CLASS);
        self.phase = PagePhase::Loaded;
        tracing::debug!("Page marked as loaded");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingClassList {
        ops: RefCell<Vec<String>>,
    }

    impl ClassList for &RecordingClassList {
        fn add(&self, class: &str) {
            self.ops.borrow_mut().push(format!("+{}", class));
        }

        fn remove(&self, class: &str) {
            self.ops.borrow_mut().push(format!("-{}", class));
        }
    }

    #[test]
    fn test_mark_loaded_swaps_classes_once() {
        let body = RecordingClassList::default();
        let mut lifecycle = PageLifecycle::new(&body);
        assert_eq!(lifecycle.phase(), PagePhase::Loading);

        assert!(lifecycle.mark_loaded());
        assert!(!lifecycle.mark_loaded());

        assert_eq!(lifecycle.phase(), PagePhase::Loaded);
        assert_eq!(*body.ops.borrow(), vec!["-loading", "+loaded"]);
    }
}
