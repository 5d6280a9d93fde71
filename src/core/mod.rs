//! Core state machines and static content for the site
//!
//! Everything here is free of browser APIs so it can be driven by fake
//! clocks and fake transports in tests. The `ui` module supplies the timers,
//! observers and transports.

pub mod config;
pub mod contact;
pub mod content;
pub mod counter;
pub mod lifecycle;
pub mod navigation;
pub mod progress;
#[cfg(feature = "ssr")]
pub mod relay;
pub mod rotation;
pub mod submission;
#[cfg(test)]
mod tests;
pub mod typewriter;
pub mod visibility;

pub use config::SiteConfig;
pub use contact::{ContactForm, FieldError, FormField, ResetTicket, SubmissionStatus};
pub use counter::{CounterBank, CounterState, StatValue, StepMode, StepPolicy};
pub use lifecycle::{ClassList, PageLifecycle};
pub use navigation::{NavState, Section};
pub use progress::ProgressSimulator;
pub use rotation::{RotationState, StaggeredReveal};
pub use submission::{
    ContactPayload, FallbackError, FallbackTransport, SubmissionOutcome, SubmissionTransport,
    TransportError, submit_with_fallback,
};
pub use typewriter::TextCycler;
pub use visibility::{ObserverOptions, TriggerMode, VisibilityTracker};
