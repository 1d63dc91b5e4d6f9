//! Scrollreel is a headless scroll-choreography engine for long landing pages.
//!
//! Sections declare timelines in normalized progress; the engine binds them to scroll, pins
//! sections for a scroll distance, and snaps the resting position to the middle of the nearest
//! pinned section. The public API is engine-oriented:
//!
//! - Build sections with [`landing_page`] (or any [`SectionSource`])
//! - Mount an [`Engine`] against a [`LayoutProbe`]
//! - Forward scroll, resize and frame events; values flow out through a [`PropertySink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
// Section builders and probe accessors are exercised by tests and the CLI but not all of them by
// the library itself.
#![allow(dead_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod choreography;
/// Engine configuration.
pub mod config;
pub(crate) mod engine;
pub(crate) mod navigation;
pub(crate) mod scroll;
pub(crate) mod snap;

pub use crate::foundation::core::{ElementId, Length, Viewport, px, vh, vw};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::builder::{Position, Props, TimelineBuilder};
pub use crate::animation::ease::Ease;
pub use crate::animation::timeline::{Evaluated, Property, Segment, TargetProperty, Timeline};

pub use crate::scroll::binding::{ScrollBinding, ScrollRegion, TriggerMode};
pub use crate::scroll::controller::{BindingId, PinnedRegion, PlaybackId, ScrollController};
pub use crate::scroll::layout::{LayoutProbe, StackedLayout};
pub use crate::scroll::scrub::ScrubFilter;
pub use crate::scroll::sink::{AppliedValue, InMemorySink, PropertySink};

pub use crate::snap::coordinator::{SnapCoordinator, SnapFunction, SnapPhase};
pub use crate::snap::range::PinnedRange;
pub use crate::snap::tween::SnapTween;

pub use crate::navigation::resolver::{NavigationResolver, ScrollTarget, TargetSource};

pub use crate::choreography::landing::{
    DEEP_FEATURE, DOWNLOAD, FEATURES_SECTION, FOOTER, GALLERY, HERO, LANDING_SECTIONS,
    TESTIMONIALS_SECTION, THREE_UP, WORKFLOW, landing_layout, landing_page,
};
pub use crate::choreography::section::{
    Entrance, HoldWindow, MountedSection, SectionChoreography, SectionMode,
};

pub use crate::config::{DurationRange, EngineConfig, NavigationConfig, SnapConfig};
pub use crate::engine::{Engine, FrameReport, LandingPage, SectionSource};

/// Builders for the individual landing-page sections.
pub mod sections {
    pub use crate::choreography::landing::{
        deep_feature, download, features, footer, gallery, hero, testimonials, three_up, workflow,
    };
}

/// Static copy rendered by the landing page.
pub mod content {
    pub use crate::choreography::content::*;
}
