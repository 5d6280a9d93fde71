//! Cross-module scenarios: form + submission flow and animation invariants

use std::cell::{Cell, RefCell};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::config::TypewriterTiming;
use crate::core::{
    ContactForm, ContactPayload, CounterBank, CounterState, FallbackError, FallbackTransport,
    FieldError, FormField, RotationState, StatValue, StepPolicy, SubmissionOutcome,
    SubmissionStatus, SubmissionTransport, TextCycler, TransportError, submit_with_fallback,
};

const FALLBACK_EMAIL: &str = "mimirsoftwarefactory@gmail.com";

/// Primary transport that records calls and replays a canned result
struct ScriptedRelay {
    result: Result<(), TransportError>,
    calls: Cell<u32>,
}

impl ScriptedRelay {
    fn new(result: Result<(), TransportError>) -> Self {
        Self {
            result,
            calls: Cell::new(0),
        }
    }
}

impl SubmissionTransport for ScriptedRelay {
    async fn send(&self, _endpoint: &str, _payload: &ContactPayload) -> Result<(), TransportError> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

#[derive(Default)]
struct RecordingFormPost {
    posts: RefCell<Vec<ContactPayload>>,
}

impl FallbackTransport for RecordingFormPost {
    fn post(&self, _endpoint: &str, payload: &ContactPayload) -> Result<(), FallbackError> {
        self.posts.borrow_mut().push(payload.clone());
        Ok(())
    }
}

/// Drive a whole submit attempt the way the contact section does
async fn submit(
    form: &mut ContactForm,
    relay: &ScriptedRelay,
    form_post: &RecordingFormPost,
) -> Option<SubmissionOutcome> {
    let payload = form.begin_submit()?;
    let outcome = submit_with_fallback("https://relay.test/f/1", &payload, relay, form_post).await;
    form.finish(&outcome, FALLBACK_EMAIL);
    Some(outcome)
}

fn valid_form(message: &str) -> ContactForm {
    let mut form = ContactForm::new();
    form.input(FormField::Name, "Ada");
    form.input(FormField::Email, "ada@example.com");
    form.input(FormField::Message, message);
    form
}

// ============================================================================
// Counter animation
// ============================================================================

#[test]
fn test_counter_monotonic_and_exact_for_many_targets() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut targets: Vec<f64> = vec![0.0, 1.0, 5.0, 10.0, 59.0, 60.0, 61.0, 95.0, 99.5, 2.5];
    targets.extend((0..200).map(|_| (rng.gen_range(0.0..10_000.0_f64) * 10.0).round() / 10.0));

    for target in targets {
        for policy in [
            StepPolicy::CeilDivide { ticks: 60 },
            StepPolicy::Proportional { ticks: 100 },
            StepPolicy::for_target(target, 60),
        ] {
            let mut counter = CounterState::new(target, policy);
            let mut previous = counter.current();
            while counter.step() {
                assert!(counter.current() >= previous, "target {} went backwards", target);
                assert!(counter.current() <= target, "target {} overshot", target);
                previous = counter.current();
                assert!(counter.ticks() <= 10_000);
            }
            assert_eq!(counter.current(), target);
        }
    }
}

#[test]
fn test_settled_counter_not_restarted_by_second_trigger() {
    let mut bank = CounterBank::new();
    let stat = StatValue::parse("95%");

    let counter = bank.start(1, &stat, 60).unwrap();
    let final_value = counter.last().unwrap();
    assert_eq!(stat.format(final_value), "95%");

    // Stats container scrolls out and back in
    assert!(bank.start(1, &stat, 60).is_none());
    assert!(!bank.is_animated(0));
    assert!(!bank.is_animated(2));
}

// ============================================================================
// Email validation
// ============================================================================

#[test]
fn test_email_validation_matches_shape() {
    let valid = ["a@b.co", "john.doe@mail.example.com", "x+tag@d.io"];
    let invalid = [
        "", "plain", "@b.com", "a@", "a@b", "a@b.", "a @b.com", "a@b .com", "a@b@c.com", "\ta@b.com",
    ];

    for email in valid {
        assert!(crate::core::contact::validate_email(email).is_ok(), "{}", email);
    }
    for email in invalid {
        assert!(crate::core::contact::validate_email(email).is_err(), "{:?}", email);
    }
}

// ============================================================================
// Submission flow
// ============================================================================

#[tokio::test]
async fn test_short_name_blocks_without_network() {
    let mut form = valid_form("Looking for help with MLOps");
    form.input(FormField::Name, "A");
    let relay = ScriptedRelay::new(Ok(()));
    let form_post = RecordingFormPost::default();

    assert!(submit(&mut form, &relay, &form_post).await.is_none());

    assert_eq!(relay.calls.get(), 0);
    assert_eq!(form.status(), &SubmissionStatus::Idle);
    assert!(matches!(
        form.error(FormField::Name),
        Some(FieldError::TooShort { .. })
    ));
}

#[tokio::test]
async fn test_message_of_exactly_ten_chars_reaches_network() {
    let mut form = valid_form("0123456789");
    let relay = ScriptedRelay::new(Ok(()));
    let form_post = RecordingFormPost::default();

    let outcome = submit(&mut form, &relay, &form_post).await;

    assert_eq!(outcome, Some(SubmissionOutcome::Delivered));
    assert_eq!(relay.calls.get(), 1);
    assert_eq!(form.status(), &SubmissionStatus::Succeeded);
}

#[tokio::test]
async fn test_failed_to_fetch_falls_back_and_succeeds() {
    let mut form = valid_form("We want a recommendation engine");
    let relay = ScriptedRelay::new(Err(TransportError::from_fetch_message(
        "TypeError: Failed to fetch",
    )));
    let form_post = RecordingFormPost::default();

    let outcome = submit(&mut form, &relay, &form_post).await;

    assert_eq!(outcome, Some(SubmissionOutcome::DeliveredUnconfirmed));
    assert_eq!(form_post.posts.borrow().len(), 1);
    assert_eq!(form_post.posts.borrow()[0].email, "ada@example.com");
    assert_eq!(form.status(), &SubmissionStatus::Succeeded);
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_server_500_fails_without_fallback() {
    let mut form = valid_form("We want a recommendation engine");
    let relay = ScriptedRelay::new(Err(TransportError::Rejected {
        status: 500,
        detail: None,
    }));
    let form_post = RecordingFormPost::default();

    submit(&mut form, &relay, &form_post).await;

    assert!(form_post.posts.borrow().is_empty());
    assert!(matches!(form.status(), SubmissionStatus::Failed(_)));
    assert!(form.banner().unwrap().contains("500"));
    assert!(!form.is_submitting());
    // Resubmitting is allowed after a failure
    assert!(form.can_submit());
}

#[tokio::test]
async fn test_success_then_delayed_reset_clears_fields() {
    let mut form = valid_form("We want a recommendation engine");
    let relay = ScriptedRelay::new(Ok(()));
    let form_post = RecordingFormPost::default();

    let payload = form.begin_submit().unwrap();
    let outcome = submit_with_fallback("https://relay.test/f/1", &payload, &relay, &form_post).await;
    let ticket = form.finish(&outcome, FALLBACK_EMAIL).unwrap();

    assert!(form.expire_success(ticket));
    assert_eq!(form.value(FormField::Name), "");
    assert_eq!(form.value(FormField::Message), "");
    assert_eq!(form.status(), &SubmissionStatus::Idle);
}

#[test]
fn test_email_error_clears_on_the_keystroke_that_fixes_it() {
    let mut form = ContactForm::new();
    form.input(FormField::Email, "a");
    assert_eq!(form.error(FormField::Email), Some(&FieldError::InvalidEmail));

    form.input(FormField::Email, "a@b.com");
    assert!(form.error(FormField::Email).is_none());
}

// ============================================================================
// Typewriter and rotation
// ============================================================================

#[test]
fn test_typewriter_cycles_ai_then_ml() {
    let mut cycler = TextCycler::new(["AI", "ML"], TypewriterTiming::default()).unwrap();
    let mut frames = Vec::new();
    for _ in 0..12 {
        cycler.tick();
        assert!(cycler.current_phrase().starts_with(cycler.displayed()));
        frames.push((cycler.current_index(), cycler.displayed().to_string()));
    }

    let expected: Vec<(usize, String)> = [
        (0, "A"),
        (0, "AI"),
        (0, "A"),
        (0, ""),
        (1, ""),
        (1, "M"),
        (1, "ML"),
        (1, "M"),
        (1, ""),
        (0, ""),
        (0, "A"),
        (0, "AI"),
    ]
    .into_iter()
    .map(|(i, s)| (i, s.to_string()))
    .collect();
    assert_eq!(frames, expected);
}

#[test]
fn test_typewriter_with_fake_clock() {
    let timing = TypewriterTiming::default();
    let mut cycler = TextCycler::new(["Smart Analytics"], timing).unwrap();

    // 15 characters at 100ms each
    cycler.advance(Duration::from_millis(1500));
    assert_eq!(cycler.displayed(), "Smart Analytics");

    // Still holding just before the pause ends
    cycler.advance(Duration::from_millis(1999));
    assert_eq!(cycler.displayed(), "Smart Analytics");

    cycler.advance(Duration::from_millis(1));
    assert_eq!(cycler.displayed(), "Smart Analytic");
    assert!(cycler.is_deleting());
}

#[test]
fn test_rotation_visits_each_index_in_order() {
    for n in 1..8 {
        let mut rotation = RotationState::new((0..n).collect::<Vec<_>>()).unwrap();
        let mut visited = vec![rotation.active_index()];
        for _ in 0..(3 * n) {
            visited.push(rotation.advance());
        }
        for (step, index) in visited.iter().enumerate() {
            assert_eq!(*index, step % n);
        }
    }
}
