//! Counter-up animation for headline statistics
//!
//! A stat literal such as `"95%"` or `"2.5M"` is parsed into a numeric target
//! plus formatting rules. [`CounterState`] then walks from zero to the target
//! in fixed steps; it is an iterator, so a driver can pull one frame per timer
//! tick and stop when it returns `None`.

use std::collections::HashSet;

/// Suffixes that survive the animation
const KNOWN_SUFFIXES: [char; 3] = ['%', '+', 'M'];

/// A statistic as written in the page content
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    /// Numeric target animated from zero
    Animated {
        target: f64,
        suffix: Option<char>,
        /// Digits after the decimal point (1 for fractional targets)
        decimals: u8,
    },
    /// Rendered verbatim (e.g. "24/7")
    Literal(String),
}

impl StatValue {
    /// Parse a stat literal.
    ///
    /// Anything containing `/` or that does not reduce to a number is kept
    /// as a literal.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.contains('/') {
            return StatValue::Literal(trimmed.to_string());
        }

        let (number, suffix) = match trimmed.chars().last() {
            Some(c) if KNOWN_SUFFIXES.contains(&c) => (&trimmed[..trimmed.len() - c.len_utf8()], Some(c)),
            _ => (trimmed, None),
        };

        match number.trim().parse::<f64>() {
            Ok(target) if target.is_finite() => StatValue::Animated {
                target,
                suffix,
                decimals: if target.fract() != 0.0 { 1 } else { 0 },
            },
            _ => StatValue::Literal(trimmed.to_string()),
        }
    }

    /// Numeric target, if animated
    pub fn target(&self) -> Option<f64> {
        match self {
            StatValue::Animated { target, .. } => Some(*target),
            StatValue::Literal(_) => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, StatValue::Literal(_))
    }

    /// Format an intermediate or final value for display
    pub fn format(&self, value: f64) -> String {
        match self {
            StatValue::Literal(text) => text.clone(),
            StatValue::Animated {
                suffix, decimals, ..
            } => {
                let suffix = suffix.map(String::from).unwrap_or_default();
                if *decimals > 0 {
                    // nudge so 2.3 * 10 = 22.999.. still floors to 23
                    let tenths = (value * 10.0 + 1e-9).floor();
                    format!("{:.1}{}", tenths / 10.0, suffix)
                } else {
                    format!("{}{}", value.floor() as i64, suffix)
                }
            }
        }
    }

    /// What is shown before the counter starts
    pub fn initial_display(&self) -> String {
        self.format(0.0)
    }

    /// What is shown once the counter settles
    pub fn final_display(&self) -> String {
        match self.target() {
            Some(target) => self.format(target),
            None => self.format(0.0),
        }
    }
}

/// How far each tick moves the counter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepPolicy {
    /// `ceil(target / ticks)`, for whole-number targets
    CeilDivide { ticks: u32 },
    /// `target / ticks`, for fractional targets
    Proportional { ticks: u32 },
}

impl StepPolicy {
    /// Pick the policy matching the kind of target
    pub fn for_target(target: f64, ticks: u32) -> Self {
        if target.fract() == 0.0 {
            StepPolicy::CeilDivide { ticks }
        } else {
            StepPolicy::Proportional { ticks }
        }
    }

    pub fn step(&self, target: f64) -> f64 {
        match *self {
            StepPolicy::CeilDivide { ticks } => (target / f64::from(ticks.max(1))).ceil(),
            StepPolicy::Proportional { ticks } => target / f64::from(ticks.max(1)),
        }
    }
}

/// Policy selection for a whole group of counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepMode {
    /// [`StepPolicy::for_target`] per stat
    #[default]
    ByTarget,
    /// Proportional steps for every stat, whole numbers included
    Proportional,
}

impl StepMode {
    pub fn policy(self, target: f64, ticks: u32) -> StepPolicy {
        match self {
            StepMode::ByTarget => StepPolicy::for_target(target, ticks),
            StepMode::Proportional => StepPolicy::Proportional { ticks },
        }
    }
}

/// A running counter animation.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterState {
    target: f64,
    current: f64,
    step: f64,
    ticks: u32,
}

impl CounterState {
    /// Start a counter at zero. Targets `<= 0` settle immediately.
    pub fn new(target: f64, policy: StepPolicy) -> Self {
        let step = policy.step(target);
        let current = if target > 0.0 && step > 0.0 { 0.0 } else { target };
        Self {
            target,
            current,
            step,
            ticks: 0,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    /// Ticks applied so far
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Advance one step. Returns `false` once the target has been reached.
    pub fn step(&mut self) -> bool {
        if self.is_settled() {
            return false;
        }
        self.ticks += 1;
        let next = self.current + self.step;
        self.current = if next >= self.target { self.target } else { next };
        true
    }
}

impl Iterator for CounterState {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.step() { Some(self.current) } else { None }
    }
}

/// Lazy sequence of display strings for a stat, ending on its final value.
///
/// Literal stats yield their text once.
pub fn display_frames(stat: &StatValue, ticks: u32) -> Box<dyn Iterator<Item = String> + '_> {
    match stat.target() {
        Some(target) => {
            let counter = CounterState::new(target, StepPolicy::for_target(target, ticks));
            Box::new(counter.map(move |value| stat.format(value)))
        }
        None => Box::new(std::iter::once(stat.final_display())),
    }
}

/// Tracks which stat indices have already been animated so that a repeated
/// visibility trigger does not restart them.
#[derive(Debug, Clone, Default)]
pub struct CounterBank {
    animated: HashSet<usize>,
}

impl CounterBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the counter for `index` unless it already ran.
    ///
    /// Literal stats are marked as animated but yield no counter.
    pub fn start(&mut self, index: usize, stat: &StatValue, ticks: u32) -> Option<CounterState> {
        self.start_with(index, stat, StepMode::ByTarget, ticks)
    }

    /// Like [`CounterBank::start`] with an explicit step mode
    pub fn start_with(
        &mut self,
        index: usize,
        stat: &StatValue,
        mode: StepMode,
        ticks: u32,
    ) -> Option<CounterState> {
        if !self.animated.insert(index) {
            return None;
        }
        let target = stat.target()?;
        Some(CounterState::new(target, mode.policy(target, ticks)))
    }

    pub fn is_animated(&self, index: usize) -> bool {
        self.animated.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plus_suffix() {
        assert_eq!(
            StatValue::parse("10+"),
            StatValue::Animated {
                target: 10.0,
                suffix: Some('+'),
                decimals: 0
            }
        );
    }

    #[test]
    fn test_parse_fractional_percent() {
        let stat = StatValue::parse("99.5%");
        assert_eq!(stat.target(), Some(99.5));
        assert_eq!(stat.final_display(), "99.5%");
        assert_eq!(stat.initial_display(), "0.0%");
    }

    #[test]
    fn test_parse_integer_percent() {
        let stat = StatValue::parse("95%");
        assert_eq!(stat.final_display(), "95%");
        assert_eq!(stat.format(47.0), "47%");
    }

    #[test]
    fn test_slash_is_literal() {
        let stat = StatValue::parse("24/7");
        assert!(stat.is_literal());
        assert_eq!(stat.initial_display(), "24/7");
        assert_eq!(display_frames(&stat, 60).collect::<Vec<_>>(), vec!["24/7"]);
    }

    #[test]
    fn test_unparseable_is_literal() {
        assert!(StatValue::parse("many").is_literal());
    }

    #[test]
    fn test_ceil_divide_step() {
        assert_eq!(StepPolicy::CeilDivide { ticks: 60 }.step(95.0), 2.0);
        assert_eq!(StepPolicy::CeilDivide { ticks: 60 }.step(5.0), 1.0);
        assert_eq!(StepPolicy::Proportional { ticks: 100 }.step(2.5), 0.025);
    }

    #[test]
    fn test_counter_reaches_target_exactly() {
        let counter = CounterState::new(95.0, StepPolicy::CeilDivide { ticks: 60 });
        let values: Vec<f64> = counter.collect();
        assert_eq!(values.len(), 48);
        assert_eq!(*values.last().unwrap(), 95.0);
        assert!(values.iter().all(|v| *v <= 95.0));
    }

    #[test]
    fn test_zero_target_settles_immediately() {
        let mut counter = CounterState::new(0.0, StepPolicy::CeilDivide { ticks: 60 });
        assert!(counter.is_settled());
        assert_eq!(counter.next(), None);
    }

    #[test]
    fn test_fractional_frames() {
        let stat = StatValue::parse("2.5M");
        let frames: Vec<String> = display_frames(&stat, 100).collect();
        assert_eq!(frames.first().unwrap(), "0.0M");
        assert_eq!(frames.last().unwrap(), "2.5M");
    }

    #[test]
    fn test_bank_starts_once() {
        let mut bank = CounterBank::new();
        let stat = StatValue::parse("5+");

        assert!(bank.start(2, &stat, 60).is_some());
        assert!(bank.is_animated(2));
        assert!(bank.start(2, &stat, 60).is_none());
        assert!(!bank.is_animated(0));
        assert!(!bank.is_animated(1));
    }

    #[test]
    fn test_proportional_mode_on_whole_target() {
        let mut bank = CounterBank::new();
        let stat = StatValue::parse("50+");
        let counter = bank
            .start_with(0, &stat, StepMode::Proportional, 100)
            .unwrap();

        let frames: Vec<String> = counter.map(|v| stat.format(v)).collect();
        assert_eq!(frames.len(), 100);
        assert_eq!(frames[0], "0+");
        assert_eq!(frames[1], "1+");
        assert_eq!(frames.last().unwrap(), "50+");
    }

    #[test]
    fn test_bank_literal_marks_without_counter() {
        let mut bank = CounterBank::new();
        assert!(bank.start(0, &StatValue::parse("24/7"), 60).is_none());
        assert!(bank.is_animated(0));
    }
}
