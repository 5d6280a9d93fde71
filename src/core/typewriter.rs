//! Typewriter text cycling
//!
//! Reveals a phrase one character at a time, holds it, deletes it again and
//! moves on to the next phrase, forever. The state machine is pure: a driver
//! calls [`TextCycler::tick`] and sleeps for the returned delay, or feeds
//! elapsed time to [`TextCycler::advance`].

use std::time::Duration;

use super::config::TypewriterTiming;

/// Current phase of the cycler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    Typing,
    Holding,
    Deleting,
}

/// Typewriter state for an ordered, non-empty list of phrases.
#[derive(Debug, Clone)]
pub struct TextCycler {
    phrases: Vec<String>,
    current_index: usize,
    /// Number of characters of the current phrase on screen
    shown: usize,
    phase: CyclePhase,
    timing: TypewriterTiming,
    /// Time accumulated towards the next tick when driven by `advance`
    pending: Duration,
}

impl TextCycler {
    /// Create a cycler. Returns `None` when `phrases` is empty.
    pub fn new<I, S>(phrases: I, timing: TypewriterTiming) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            current_index: 0,
            shown: 0,
            phase: CyclePhase::Typing,
            timing,
            pending: Duration::ZERO,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == CyclePhase::Deleting
    }

    /// The phrase currently being typed or deleted
    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.current_index]
    }

    /// Prefix of the current phrase that is on screen
    pub fn displayed(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    fn phrase_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    /// Delay the driver should wait before the next `tick`
    pub fn next_delay(&self) -> Duration {
        let ms = match self.phase {
            CyclePhase::Typing => self.timing.type_ms,
            CyclePhase::Holding => self.timing.hold_ms,
            CyclePhase::Deleting => self.timing.delete_ms,
        };
        Duration::from_millis(ms)
    }

    /// Perform one step and return the delay until the next one.
    pub fn tick(&mut self) -> Duration {
        match self.phase {
            CyclePhase::Typing => {
                if self.shown < self.phrase_len() {
                    self.shown += 1;
                }
                if self.shown == self.phrase_len() {
                    self.phase = CyclePhase::Holding;
                }
            }
            CyclePhase::Holding => {
                self.phase = CyclePhase::Deleting;
                if self.shown > 0 {
                    self.shown -= 1;
                }
            }
            CyclePhase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                } else {
                    self.current_index = (self.current_index + 1) % self.phrases.len();
                    self.phase = CyclePhase::Typing;
                }
            }
        }
        self.next_delay()
    }

    /// Feed elapsed wall time; runs every tick that became due.
    ///
    /// Returns `true` if the displayed text changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let before = (self.current_index, self.shown);
        self.pending += elapsed;
        while self.pending >= self.next_delay() {
            self.pending -= self.next_delay();
            self.tick();
        }
        before != (self.current_index, self.shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycler(phrases: &[&str]) -> TextCycler {
        TextCycler::new(phrases.iter().copied(), TypewriterTiming::default()).unwrap()
    }

    #[test]
    fn test_empty_phrase_list_rejected() {
        assert!(TextCycler::new(Vec::<String>::new(), TypewriterTiming::default()).is_none());
    }

    #[test]
    fn test_starts_empty_on_first_phrase() {
        let c = cycler(&["AI", "ML"]);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.displayed(), "");
        assert!(!c.is_deleting());
    }

    #[test]
    fn test_typing_then_hold_then_delete() {
        let mut c = cycler(&["AI"]);

        assert_eq!(c.tick(), Duration::from_millis(100));
        assert_eq!(c.displayed(), "A");

        // Full phrase shown, next wait is the hold
        assert_eq!(c.tick(), Duration::from_millis(2000));
        assert_eq!(c.displayed(), "AI");
        assert_eq!(c.phase(), CyclePhase::Holding);

        assert_eq!(c.tick(), Duration::from_millis(50));
        assert_eq!(c.displayed(), "A");
        assert!(c.is_deleting());
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut c = cycler(&["A", "B"]);
        let mut indices = Vec::new();
        for _ in 0..12 {
            c.tick();
            indices.push(c.current_index());
        }
        // type, hold, delete/advance: three ticks per one-letter phrase
        assert_eq!(indices, vec![0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0]);
    }

    #[test]
    fn test_multibyte_prefixes() {
        let mut c = cycler(&["Mímir"]);
        c.tick();
        c.tick();
        assert_eq!(c.displayed(), "Mí");
    }

    #[test]
    fn test_advance_runs_due_ticks() {
        let mut c = cycler(&["Data"]);
        assert!(!c.advance(Duration::from_millis(99)));
        assert!(c.advance(Duration::from_millis(1)));
        assert_eq!(c.displayed(), "D");

        assert!(c.advance(Duration::from_millis(300)));
        assert_eq!(c.displayed(), "Data");
    }
}
