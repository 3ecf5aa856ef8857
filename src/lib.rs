//! Flourish is a frame-driven motion-effects engine for UI surfaces.
//!
//! It implements three self-contained visual effects as pure, host-driven
//! state machines:
//!
//! 1. **Scroll Stack** ([`ScrollStackEngine`]): stacking-cards parallax.
//!    Cards pin at a viewport anchor, scale down by index, and freeze at a
//!    sentinel-derived end position, all against an inertially smoothed
//!    scroll position.
//! 2. **Pixel Dissolve** ([`PixelDissolve`]): a pixelated cross-fade.
//!    Content is swapped behind a staggered, randomly ordered tile wipe.
//! 3. **Proximity Dock** ([`ProximityDock`]): a magnifying icon strip.
//!    Icon sizes follow horizontal pointer proximity through a spring.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Host-driven**: the crate owns no event loop, no timers, and no IO.
//!   The host feeds raw input (scroll offset, pointer position, layout
//!   geometry, elapsed seconds) once per display frame and reads back
//!   computed visual state (transforms, tile visibility, icon sizes).
//! - **Deterministic-by-default**: identical inputs (configs, seeds, frame
//!   deltas) replay identically; randomized tile order comes from an
//!   explicit seed, never ambient entropy.
//! - **Explicit cancellation**: retriggering a transition or unmounting a
//!   component cancels all pending scheduled work immediately; no
//!   orphaned callback ever fires.
//!
//! The three effects are independent leaves: they share no state and
//! compose into a page by simple parent-child embedding.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod effects;
mod foundation;
mod input;

pub use animation::ease::Ease;
pub use animation::smoothing::SmoothScroll;
pub use animation::spring::{Spring, SpringParams};
pub use animation::timeline::Timeline;
pub use effects::dock::{DockConfig, DockItem, ProximityDock};
pub use effects::pixel_dissolve::{
    ContentSlot, Interaction, Phase, PixelDissolve, PixelDissolveConfig, Tile, tiles_for_grid,
};
pub use effects::scroll_stack::{
    CardGeometry, CardTransform, ScrollSource, ScrollStackConfig, ScrollStackEngine,
};
pub use foundation::core::{Anchor, Rect, Rgba8, Viewport};
pub use foundation::error::{FlourishError, FlourishResult};
pub use foundation::math::Rng64;
pub use input::device::{DeviceClass, DeviceProbe, NARROW_VIEWPORT_PX};
