//! Visibility trigger bookkeeping
//!
//! The browser reports intersection ratios; this module decides whether an
//! observed element's callback fires. Each registration is its own
//! [`VisibilityTracker`] with its own threshold, so the generic fade-in reveal
//! and the one-shot stats trigger never share state.

use std::collections::HashMap;

/// Browsers may report a threshold crossing with a ratio just under the
/// threshold (e.g. 0.4999 for 0.5).
const RATIO_TOLERANCE: f64 = 0.01;

/// Observer options mirrored onto `IntersectionObserverInit`
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    /// Intersection ratio that counts as visible (0.0..=1.0)
    pub threshold: f64,
    /// CSS margin applied to the root bounding box
    pub root_margin: String,
}

impl ObserverOptions {
    pub fn new(threshold: f64, root_margin: impl Into<String>) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin: root_margin.into(),
        }
    }

    /// Options for generic scroll-in reveal of `.fade-in` elements
    pub fn reveal() -> Self {
        Self::new(0.1, "0px 0px -50px 0px")
    }

    /// Options for the stats container that starts counters
    pub fn stats() -> Self {
        Self::new(0.5, "0px")
    }
}

/// Whether an element keeps being reported after its first entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMode {
    /// Fires on every entry; consumers treat it as an idempotent class toggle
    Repeatable,
    /// Fires on the first entry only
    OneShot,
}

/// Per-element observation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Watch {
    Waiting,
    Fired,
}

/// Decides which intersection reports fire for a set of observed elements.
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    options: ObserverOptions,
    mode: TriggerMode,
    watched: HashMap<String, Watch>,
    connected: bool,
}

impl VisibilityTracker {
    pub fn new(options: ObserverOptions, mode: TriggerMode) -> Self {
        Self {
            options,
            mode,
            watched: HashMap::new(),
            connected: true,
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Start watching an element. Re-observing a fired element keeps it fired.
    pub fn observe(&mut self, element_id: impl Into<String>) {
        if !self.connected {
            return;
        }
        self.watched.entry(element_id.into()).or_insert(Watch::Waiting);
    }

    /// Stop observing everything; later reports are ignored.
    pub fn disconnect(&mut self) {
        self.watched.clear();
        self.connected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn observed_count(&self) -> usize {
        self.watched.len()
    }

    pub fn has_fired(&self, element_id: &str) -> bool {
        self.watched.get(element_id) == Some(&Watch::Fired)
    }

    /// Handle an intersection report. Returns `true` when the callback for
    /// `element_id` should run.
    pub fn report(&mut self, element_id: &str, intersecting: bool, ratio: f64) -> bool {
        if !self.connected || !intersecting || ratio + RATIO_TOLERANCE < self.options.threshold {
            return false;
        }
        let Some(state) = self.watched.get_mut(element_id) else {
            return false;
        };
        match (self.mode, *state) {
            (TriggerMode::OneShot, Watch::Fired) => false,
            _ => {
                *state = Watch::Fired;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(ObserverOptions::new(1.5, "0px").threshold, 1.0);
        assert_eq!(ObserverOptions::new(-0.2, "0px").threshold, 0.0);
    }

    #[test]
    fn test_below_threshold_does_not_fire() {
        let mut tracker = VisibilityTracker::new(ObserverOptions::stats(), TriggerMode::OneShot);
        tracker.observe("stats");

        assert!(!tracker.report("stats", true, 0.3));
        assert!(tracker.report("stats", true, 0.5));
    }

    #[test]
    fn test_crossing_reported_just_under_threshold_fires() {
        let mut tracker = VisibilityTracker::new(ObserverOptions::stats(), TriggerMode::OneShot);
        tracker.observe("stats");

        assert!(tracker.report("stats", true, 0.4999));
        assert!(tracker.has_fired("stats"));
    }

    #[test]
    fn test_one_shot_fires_once() {
        let mut tracker = VisibilityTracker::new(ObserverOptions::stats(), TriggerMode::OneShot);
        tracker.observe("stats");

        assert!(tracker.report("stats", true, 0.9));
        assert!(!tracker.report("stats", true, 0.9));
        assert!(tracker.has_fired("stats"));

        tracker.observe("stats");
        assert!(!tracker.report("stats", true, 0.9));
    }

    #[test]
    fn test_repeatable_fires_on_every_entry() {
        let mut tracker = VisibilityTracker::new(ObserverOptions::reveal(), TriggerMode::Repeatable);
        tracker.observe("card-1");

        assert!(tracker.report("card-1", true, 0.2));
        assert!(!tracker.report("card-1", false, 0.0));
        assert!(tracker.report("card-1", true, 0.2));
    }

    #[test]
    fn test_unobserved_element_ignored() {
        let mut tracker = VisibilityTracker::new(ObserverOptions::reveal(), TriggerMode::Repeatable);
        assert!(!tracker.report("ghost", true, 1.0));
    }

    #[test]
    fn test_disconnect_stops_reports() {
        let mut tracker = VisibilityTracker::new(ObserverOptions::reveal(), TriggerMode::Repeatable);
        tracker.observe("a");
        tracker.disconnect();

        assert!(!tracker.report("a", true, 1.0));
        tracker.observe("a");
        assert_eq!(tracker.observed_count(), 0);
        assert!(!tracker.is_connected());
    }

    #[test]
    fn test_separate_trackers_do_not_share_state() {
        let mut reveal = VisibilityTracker::new(ObserverOptions::reveal(), TriggerMode::Repeatable);
        let mut stats = VisibilityTracker::new(ObserverOptions::stats(), TriggerMode::OneShot);
        reveal.observe("about");
        stats.observe("about");

        assert!(reveal.report("about", true, 0.2));
        assert!(!stats.report("about", true, 0.2));
        assert!(!stats.has_fired("about"));
    }
}
