// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The smooth-scroll engine contract.

use alloc::vec::Vec;

use scrollstory_range::clamp;

use crate::{ScrollDispatcher, ScrollEvent};

/// Options for [`ScrollEngine::scroll_to`].
///
/// ```rust
/// use scrollstory_scroll::ScrollToOptions;
///
/// let opts = ScrollToOptions::new().lock().duration(10.0);
/// assert!(opts.lock && !opts.immediate);
/// assert_eq!(opts.duration, Some(10.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollToOptions {
    /// Jump to the target without animating.
    pub immediate: bool,
    /// Ignore user input until the target is reached.
    pub lock: bool,
    /// Animation duration in seconds; `None` uses the engine default.
    pub duration: Option<f64>,
    /// Scroll even while the engine is stopped.
    pub force: bool,
}

impl ScrollToOptions {
    /// Default options: animated, unlocked, engine duration, not forced.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            immediate: false,
            lock: false,
            duration: None,
            force: false,
        }
    }

    /// Sets [`immediate`](Self::immediate).
    #[must_use]
    pub const fn immediate(mut self) -> Self {
        self.immediate = true;
        self
    }

    /// Sets [`lock`](Self::lock).
    #[must_use]
    pub const fn lock(mut self) -> Self {
        self.lock = true;
        self
    }

    /// Sets [`duration`](Self::duration) in seconds.
    #[must_use]
    pub const fn duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Sets [`force`](Self::force).
    #[must_use]
    pub const fn force(mut self) -> Self {
        self.force = true;
        self
    }
}

/// The external smooth-scroll engine as seen by page code.
///
/// Engines emit [`ScrollEvent`]s through a [`ScrollDispatcher`]; this trait
/// covers the control surface only.
pub trait ScrollEngine {
    /// Resumes reacting to user input and emitting ticks.
    fn start(&mut self);

    /// Pauses reacting to user input.
    fn stop(&mut self);

    /// Returns `true` while stopped.
    fn is_stopped(&self) -> bool;

    /// Scrolls to `target` (pixels from the top of the content).
    ///
    /// A stopped engine ignores the request unless `options.force` is set.
    fn scroll_to(&mut self, target: f64, options: ScrollToOptions);

    /// Current scroll offset.
    fn scroll(&self) -> f64;

    /// Largest reachable scroll offset.
    fn limit(&self) -> f64;
}

/// A call made on a [`RecordingEngine`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EngineCall {
    /// [`ScrollEngine::start`].
    Start,
    /// [`ScrollEngine::stop`].
    Stop,
    /// [`ScrollEngine::scroll_to`], with the requested target.
    ScrollTo {
        /// Requested offset before clamping.
        target: f64,
        /// Options passed by the caller.
        options: ScrollToOptions,
        /// Whether the request was applied.
        applied: bool,
    },
}

/// An in-memory [`ScrollEngine`] that jumps straight to its targets.
///
/// Every call is recorded. Applied scrolls are clamped to `[0, limit]` and,
/// if a dispatcher is attached, emitted as one [`ScrollEvent`].
///
/// ```rust
/// use scrollstory_scroll::{RecordingEngine, ScrollEngine, ScrollToOptions};
///
/// let mut engine = RecordingEngine::new(30_000.0);
/// engine.stop();
/// engine.scroll_to(5000.0, ScrollToOptions::new());
/// assert_eq!(engine.scroll(), 0.0);
///
/// engine.scroll_to(5000.0, ScrollToOptions::new().force());
/// assert_eq!(engine.scroll(), 5000.0);
/// ```
#[derive(Debug, Default)]
pub struct RecordingEngine {
    scroll: f64,
    limit: f64,
    stopped: bool,
    dispatcher: Option<ScrollDispatcher>,
    calls: Vec<EngineCall>,
}

impl RecordingEngine {
    /// Creates a running engine at offset `0` with the given scroll limit.
    #[must_use]
    pub fn new(limit: f64) -> Self {
        Self {
            limit: limit.max(0.0),
            ..Self::default()
        }
    }

    /// Emits applied scrolls through `dispatcher`.
    #[must_use]
    pub fn with_dispatcher(mut self, dispatcher: ScrollDispatcher) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Changes the scroll limit, for example after the content was resized.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.scroll = clamp(0.0, self.scroll, self.limit);
    }

    /// Calls recorded so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    /// Forgets recorded calls.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl ScrollEngine for RecordingEngine {
    fn start(&mut self) {
        self.stopped = false;
        self.calls.push(EngineCall::Start);
    }

    fn stop(&mut self) {
        self.stopped = true;
        self.calls.push(EngineCall::Stop);
    }

    fn is_stopped(&self) -> bool {
        self.stopped
    }

    fn scroll_to(&mut self, target: f64, options: ScrollToOptions) {
        let applied = target.is_finite() && (!self.stopped || options.force);
        self.calls.push(EngineCall::ScrollTo {
            target,
            options,
            applied,
        });
        if !applied {
            tracing::debug!(requested = target, stopped = self.stopped, "scroll_to ignored");
            return;
        }

        let from = self.scroll;
        self.scroll = clamp(0.0, target, self.limit);
        if let Some(dispatcher) = &self.dispatcher {
            let event = ScrollEvent::at(self.scroll)
                .with_velocity(self.scroll - from)
                .locked(options.lock);
            dispatcher.dispatch(event);
        }
    }

    fn scroll(&self) -> f64 {
        self.scroll
    }

    fn limit(&self) -> f64 {
        self.limit
    }
}
