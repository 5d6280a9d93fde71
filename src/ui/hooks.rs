//! Browser drivers for the core state machines
//!
//! Every hook here must be called from inside a component. Timers and
//! observers are owned by the calling component and stop when it unmounts.
//! On the server the hooks only set up initial signal values.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::*;

use crate::core::config::{CounterTiming, TypewriterTiming};
use crate::core::visibility::{ObserverOptions, TriggerMode};
use crate::core::{CounterBank, ProgressSimulator, RotationState, StaggeredReveal, StatValue};

/// Set while the owning component is mounted. Async loops check it before
/// touching signals again.
#[derive(Debug, Clone)]
pub struct AliveFlag(Arc<AtomicBool>);

impl AliveFlag {
    pub fn new() -> Self {
        let flag = Arc::new(AtomicBool::new(true));
        let cleared = flag.clone();
        on_cleanup(move || cleared.store(false, Ordering::Relaxed));
        Self(flag)
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for AliveFlag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(feature = "ssr"))]
fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// Call `tick` every `period` while the component is mounted.
pub fn use_interval(period: Duration, tick: impl FnMut() + 'static) {
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::Interval;

        // Dropping the interval cancels it; the stored value goes with the owner
        let interval = Interval::new(millis(period), tick);
        let _handle = StoredValue::new_local(interval);
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (period, tick);
    }
}

/// Run `step` once after `delay`, then every `period`, until it returns
/// `false` or the owner is gone.
#[cfg(not(feature = "ssr"))]
fn spawn_ticking(
    delay: Duration,
    period: Duration,
    alive: AliveFlag,
    mut step: impl FnMut() -> bool + 'static,
) {
    use gloo_timers::future::TimeoutFuture;
    use leptos::task::spawn_local;

    spawn_local(async move {
        TimeoutFuture::new(millis(delay)).await;
        loop {
            if !alive.is_alive() || !step() {
                break;
            }
            TimeoutFuture::new(millis(period)).await;
        }
    });
}

#[cfg(feature = "ssr")]
fn spawn_ticking(
    _delay: Duration,
    _period: Duration,
    _alive: AliveFlag,
    _step: impl FnMut() -> bool + 'static,
) {
}

// ============================================================================
// Typewriter
// ============================================================================

/// Cycle `phrases` with a typing effect. Returns the currently shown prefix.
pub fn use_typewriter(phrases: &[&'static str], timing: TypewriterTiming) -> ReadSignal<String> {
    let (text, set_text) = signal(String::new());

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::TextCycler;
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        let alive = AliveFlag::new();
        let Some(mut cycler) = TextCycler::new(phrases.iter().copied(), timing) else {
            leptos::logging::warn!("Typewriter started without phrases");
            return text;
        };

        spawn_local(async move {
            loop {
                TimeoutFuture::new(millis(cycler.next_delay())).await;
                if !alive.is_alive() {
                    break;
                }
                cycler.tick();
                set_text.set(cycler.displayed().to_string());
            }
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (phrases, timing, set_text);
    }

    text
}

// ============================================================================
// Counters
// ============================================================================

/// Display strings for a group of stats plus the trigger that starts them
#[derive(Clone)]
pub struct CounterGroup {
    pub displays: Vec<RwSignal<String>>,
    pub start: Callback<()>,
}

impl CounterGroup {
    pub fn display(&self, index: usize) -> Signal<String> {
        match self.displays.get(index) {
            Some(display) => (*display).into(),
            None => Signal::derive(String::new),
        }
    }
}

/// Counter-up animation for `stats`.
///
/// Nothing moves until `start` runs. Each stat begins `index * stagger_ms`
/// after the trigger; a stat that already started ignores later triggers.
pub fn use_counter_group(stats: Vec<StatValue>, timing: CounterTiming) -> CounterGroup {
    let displays: Vec<RwSignal<String>> = stats
        .iter()
        .map(|stat| RwSignal::new(stat.initial_display()))
        .collect();
    let bank = StoredValue::new(CounterBank::new());
    let alive = AliveFlag::new();

    let targets = displays.clone();
    let start = Callback::new(move |_: ()| {
        let started = bank
            .try_update_value(|bank| {
                stats
                    .iter()
                    .enumerate()
                    .filter_map(|(index, stat)| {
                        bank.start_with(index, stat, timing.mode, timing.ticks)
                            .map(|counter| (index, stat.clone(), counter))
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        for (index, stat, mut counter) in started {
            let display = targets[index];
            let delay = Duration::from_millis(timing.stagger_ms * index as u64);
            spawn_ticking(
                delay,
                Duration::from_millis(timing.tick_ms),
                alive.clone(),
                move || {
                    let advanced = counter.step();
                    if advanced {
                        display.try_set(stat.format(counter.current()));
                    }
                    advanced
                },
            );
        }
    });

    CounterGroup { displays, start }
}

// ============================================================================
// Rotation, progress, staggered reveal
// ============================================================================

/// Index rotating through `0..len` on a fixed period, with manual selection.
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    state: RwSignal<Option<RotationState<usize>>>,
}

impl Rotation {
    pub fn active(&self) -> usize {
        self.state
            .with(|state| state.as_ref().map_or(0, RotationState::active_index))
    }

    pub fn select(&self, index: usize) {
        self.state.update(|state| {
            if let Some(rotation) = state {
                rotation.select(index);
            }
        });
    }
}

pub fn use_rotation(len: usize, period: Duration) -> Rotation {
    let state = RwSignal::new(RotationState::new((0..len).collect()));
    use_interval(period, move || {
        state.try_update(|state| {
            if let Some(rotation) = state {
                rotation.advance();
            }
        });
    });
    Rotation { state }
}

#[cfg(not(feature = "ssr"))]
fn random_unit() -> f64 {
    js_sys::Math::random()
}

#[cfg(feature = "ssr")]
fn random_unit() -> f64 {
    0.0
}

/// Fake processing bar fed by `Math.random()`
pub fn use_progress(period: Duration) -> RwSignal<ProgressSimulator> {
    let progress = RwSignal::new(ProgressSimulator::new());
    use_interval(period, move || {
        progress.try_update(|p| {
            p.advance(random_unit());
        });
    });
    progress
}

/// One-shot reveal of `count` items, item `i` after `i * stagger`.
pub fn use_staggered_reveal(count: usize, stagger: Duration) -> RwSignal<StaggeredReveal> {
    let schedule = StaggeredReveal::new(count, stagger);
    let delays: Vec<Duration> = (0..count).map(|i| schedule.delay_for(i)).collect();
    let reveal = RwSignal::new(schedule);
    let alive = AliveFlag::new();

    for (index, delay) in delays.into_iter().enumerate() {
        spawn_ticking(delay, Duration::ZERO, alive.clone(), move || {
            reveal.try_update(|r| r.reveal(index));
            false
        });
    }

    reveal
}

// ============================================================================
// Visibility
// ============================================================================

/// Call `on_visible` when the element behind `target` crosses the observer
/// threshold. `mode` decides whether later crossings fire again.
pub fn use_visibility_trigger(
    target: NodeRef<leptos::html::Div>,
    options: ObserverOptions,
    mode: TriggerMode,
    on_visible: Callback<()>,
) {
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            let Some(node) = target.get() else {
                return;
            };
            let element: &web_sys::Element = node.as_ref();
            match observe::ObserverHandle::new(&options, mode, move |_, _| on_visible.run(())) {
                Ok(handle) => {
                    handle.observe("trigger", element);
                    let _handle = StoredValue::new_local(handle);
                }
                Err(e) => leptos::logging::error!("Failed to create visibility observer: {}", e),
            }
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (target, options, mode, on_visible);
    }
}

/// Add the `visible` class to every `.fade-in` element as it scrolls into
/// view.
pub fn use_reveal_on_scroll() {
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;

        use crate::core::lifecycle::VISIBLE_CLASS;

        Effect::new(move |_| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Ok(nodes) = document.query_selector_all(".fade-in") else {
                return;
            };

            let handle = match observe::ObserverHandle::new(
                &ObserverOptions::reveal(),
                TriggerMode::Repeatable,
                |_key, element| {
                    let _ = element.class_list().add_1(VISIBLE_CLASS);
                },
            ) {
                Ok(handle) => handle,
                Err(e) => {
                    leptos::logging::error!("Failed to create reveal observer: {}", e);
                    return;
                }
            };

            let mut observed = 0;
            for index in 0..nodes.length() {
                if let Some(element) = nodes
                    .item(index)
                    .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
                {
                    handle.observe(&format!("fade-in-{}", index), &element);
                    observed += 1;
                }
            }
            leptos::logging::log!("Observing {} reveal targets", observed);

            let _handle = StoredValue::new_local(handle);
        });
    }
}

#[cfg(not(feature = "ssr"))]
mod observe {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::core::VisibilityTracker;
    use crate::core::visibility::{ObserverOptions, TriggerMode};

    type Callback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// Observed elements and the keys the tracker knows them by
    type Targets = Rc<RefCell<Vec<(Element, String)>>>;

    /// Live `IntersectionObserver` plus its JS callback. Dropping it
    /// disconnects the observer.
    pub struct ObserverHandle {
        observer: IntersectionObserver,
        tracker: Rc<RefCell<VisibilityTracker>>,
        targets: Targets,
        _callback: Callback,
    }

    impl ObserverHandle {
        pub fn new(
            options: &ObserverOptions,
            mode: TriggerMode,
            mut on_fire: impl FnMut(&str, &Element) + 'static,
        ) -> Result<Self, String> {
            let tracker = Rc::new(RefCell::new(VisibilityTracker::new(options.clone(), mode)));
            let targets: Targets = Rc::default();

            let reports = tracker.clone();
            let known = targets.clone();
            let callback: Callback = Closure::new(
                move |entries: js_sys::Array, _observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        let element = entry.target();
                        let Some(key) = known
                            .borrow()
                            .iter()
                            .find(|(target, _)| *target == element)
                            .map(|(_, key)| key.clone())
                        else {
                            continue;
                        };
                        let fired = reports.borrow_mut().report(
                            &key,
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        );
                        if fired {
                            on_fire(&key, &element);
                        }
                    }
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.threshold));
            init.set_root_margin(&options.root_margin);

            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                    .map_err(|e| format!("{:?}", e))?;

            Ok(Self {
                observer,
                tracker,
                targets,
                _callback: callback,
            })
        }

        pub fn observe(&self, key: &str, element: &Element) {
            self.targets
                .borrow_mut()
                .push((element.clone(), key.to_string()));
            self.tracker.borrow_mut().observe(key);
            self.observer.observe(element);
        }
    }

    impl Drop for ObserverHandle {
        fn drop(&mut self) {
            self.observer.disconnect();
            self.tracker.borrow_mut().disconnect();
            self.targets.borrow_mut().clear();
        }
    }
}
