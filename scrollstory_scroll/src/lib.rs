// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scrollstory_scroll --heading-base-level=0

//! Scrollstory Scroll: plumbing between a smooth-scroll engine and page sections.
//!
//! This crate models the pieces a scroll-driven section needs, without owning
//! any rendering or layout:
//! - [`ScrollEvent`]: one scroll tick as reported by the engine.
//! - [`ScrollDispatcher`] / [`Subscription`]: single-threaded fan-out of ticks
//!   with RAII subscriptions. Dropping a [`Subscription`] on any exit path
//!   stops delivery.
//! - [`ScrollEngine`] / [`ScrollToOptions`]: the contract of the external
//!   smooth-scroll engine (`start`, `stop`, `scroll_to`), plus
//!   [`RecordingEngine`], an in-memory engine for tests and headless use.
//! - [`MeasuredRect`], [`Anchor`], [`ScrollWindow`]: turn a measured element
//!   rectangle and the viewport height into the scroll offsets where a
//!   section starts and ends, then into a [`Progress`].
//! - [`AnimationHandle`]: the imperative side channel for writing CSS custom
//!   properties without a render pass, with [`StyleVariables`] as an
//!   in-memory implementation. [`DiscreteState`] covers the other branch:
//!   values that gate a re-render and should only be applied on change.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::cell::Cell;
//! use std::rc::Rc;
//!
//! use scrollstory_scroll::{
//!     Anchor, AnimationHandle, MeasuredRect, ScrollDispatcher, ScrollEvent, ScrollWindow,
//!     StyleVariables, WindowAnchors,
//! };
//!
//! let dispatcher = ScrollDispatcher::new();
//! let rect = MeasuredRect::new(2000.0, 1280.0, 3000.0);
//! let window = ScrollWindow::from_rect(
//!     rect,
//!     800.0,
//!     WindowAnchors::new(
//!         Anchor::TOP.viewport(0.5),
//!         Anchor::TOP.height(1.0).viewport(-1.0),
//!     ),
//! );
//!
//! let last = Rc::new(Cell::new(0.0));
//! let seen = last.clone();
//! let subscription = dispatcher.subscribe(move |event: &ScrollEvent| {
//!     seen.set(window.progress(event.scroll).get());
//! });
//!
//! dispatcher.dispatch(ScrollEvent::at(3300.0));
//! assert_eq!(last.get(), 0.5);
//!
//! drop(subscription);
//! dispatcher.dispatch(ScrollEvent::at(4200.0));
//! assert_eq!(last.get(), 0.5);
//!
//! let mut vars = StyleVariables::new();
//! vars.set_variable("--progress", 0.5.into());
//! assert_eq!(vars.number("--progress"), Some(0.5));
//! ```
//!
//! ## Threading
//!
//! Everything here is single-threaded. Handles that share state use `Rc`, so
//! they are neither `Send` nor `Sync`.
//!
//! This crate is `no_std` + `alloc`; enable `std` (default) or `libm` for Kurbo.

#![no_std]

extern crate alloc;

mod animate;
mod dispatch;
mod engine;
mod event;
mod window;

pub use animate::{AnimationHandle, DiscreteState, StyleValue, StyleVariables};
pub use dispatch::{ScrollDispatcher, Subscription};
pub use engine::{EngineCall, RecordingEngine, ScrollEngine, ScrollToOptions};
pub use event::ScrollEvent;
pub use window::{Anchor, MeasuredRect, ScrollWindow, WindowAnchors};

pub use scrollstory_range::Progress;
