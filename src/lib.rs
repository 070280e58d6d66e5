//! Sightline decides *when* things appear.
//!
//! It is a deterministic scroll-driven reveal engine: the host declares a set
//! of visual elements with entrance parameters (threshold, root margin,
//! one-shot flag, an interpolable property spec), feeds the engine
//! intersection and scroll events, and receives back a stream of actions
//! (`StartEntrance`, `SetActive`, `Apply`, `Release`) to hand to whatever
//! actually animates pixels.
//!
//! # Pipeline overview
//!
//! 1. **Declare**: build a [`Scene`] (groups of [`RevealDecl`]s, continuous
//!    [`ScrollBinding`]s, reversible [`ScrollToggle`]s).
//! 2. **Mount**: a [`Session`] registers every declaration whose element is
//!    present in the host-supplied [`LayoutMap`].
//! 3. **Drive**: scroll samples sweep the [`Watcher`]; the [`RevealEngine`]
//!    turns the resulting events into actions.
//! 4. **Play**: actions go to an [`AnimationRunner`]; playback is
//!    fire-and-forget and the engine never owns time.
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No ambient state**: scroll offset, viewport size, and element
//!   geometry are always passed in; the engine is testable without a live
//!   document.
//! - **At-most-once**: a one-shot entrance fires exactly once, no matter how
//!   the viewport oscillates across its threshold.
#![forbid(unsafe_code)]

pub mod core;
pub mod dsl;
pub mod ease;
pub mod engine;
pub mod error;
pub mod follow;
pub mod model;
pub mod observer;
pub mod props;
pub mod runner;
pub mod session;
pub mod spec;

pub use crate::core::{
    EdgeInsets, Millis, Point, Rect, ScrollRegion, Vec2, Viewport, scroll_progress,
};
pub use dsl::{GroupBuilder, RevealBuilder, SceneBuilder};
pub use ease::Ease;
pub use engine::{Action, IntersectionEvent, RevealEngine, RevealState, ScrollSample};
pub use error::{SightlineError, SightlineResult};
pub use follow::{Follower, magnetic_offset, tilt_deg};
pub use model::{Group, RevealDecl, Scene, ScrollBinding, ScrollToggle};
pub use observer::{LayoutMap, Watcher, intersection_ratio};
pub use props::{Lerp, StyleProps};
pub use runner::{AnimationRunner, NullRunner, RecordingRunner, RunnerRecord};
pub use session::Session;
pub use spec::EntranceSpec;
