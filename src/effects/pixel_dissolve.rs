use crate::{
    animation::timeline::Timeline,
    foundation::core::{Rect, Rgba8},
    foundation::error::{FlourishError, FlourishResult},
    foundation::math::{Rng64, shuffled_indices},
    input::device::DeviceClass,
};

/// Tuning for the pixelated cross-fade.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PixelDissolveConfig {
    /// Tiles per side; the overlay grid is `grid_size * grid_size`.
    pub grid_size: u32,
    /// Fill color of the opaque tiles.
    pub pixel_color: Rgba8,
    /// Duration of one stagger pass, in seconds. The full transition spans
    /// two passes with the content swap between them.
    pub step_duration: f64,
    /// Height / width of the container.
    pub aspect_ratio: f64,
    /// One-way flag: once the second content is active, deactivation
    /// triggers are ignored.
    pub once: bool,
}

impl Default for PixelDissolveConfig {
    fn default() -> Self {
        Self {
            grid_size: 7,
            pixel_color: Rgba8::from_rgb(0, 0, 0),
            step_duration: 0.3,
            aspect_ratio: 1.0,
            once: false,
        }
    }
}

impl PixelDissolveConfig {
    /// Parse a host-provided JSON config object. Absent fields take their
    /// defaults; the result is validated.
    pub fn from_json(json: &str) -> FlourishResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| FlourishError::validation(format!("invalid pixel dissolve config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject an empty grid or degenerate durations and ratios.
    pub fn validate(&self) -> FlourishResult<()> {
        if self.grid_size == 0 {
            return Err(FlourishError::validation("grid_size must be >= 1"));
        }
        if !self.step_duration.is_finite() || self.step_duration <= 0.0 {
            return Err(FlourishError::validation("step_duration must be > 0"));
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(FlourishError::validation("aspect_ratio must be > 0"));
        }
        Ok(())
    }
}

/// One opaque overlay cell. Geometry is fractional ([0, 1] of the
/// container) so the host can scale it to any rendered size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    /// Grid row, top to bottom.
    pub row: u32,
    /// Grid column, left to right.
    pub col: u32,
    /// Fractional bounds within the container.
    pub rect: Rect,
    /// Whether the opaque overlay cell is currently shown.
    pub visible: bool,
}

/// Build the tile list for a grid. Pure in `grid_size`; reconfiguring
/// replaces the whole list rather than patching it.
pub fn tiles_for_grid(grid_size: u32) -> Vec<Tile> {
    let n = grid_size as usize;
    let size = 1.0 / grid_size as f64;
    let mut tiles = Vec::with_capacity(n * n);
    for row in 0..grid_size {
        for col in 0..grid_size {
            let x = col as f64 * size;
            let y = row as f64 * size;
            tiles.push(Tile {
                row,
                col,
                rect: Rect::new(x, y, x + size, y + size),
                visible: false,
            });
        }
    }
    tiles
}

/// Which content subtree a flag refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentSlot {
    /// The default content subtree.
    First,
    /// The alternate content subtree revealed by the transition.
    Second,
}

/// Steady and transitional states of the dissolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Steady on the first content.
    ShowingFirst,
    /// Wiping toward the second content.
    ToSecond,
    /// Steady on the second content.
    ShowingSecond,
    /// Wiping back toward the first content.
    ToFirst,
}

/// Host interactions, wired per device class: pointer devices use
/// enter/leave and focus/blur, touch devices use tap-to-toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// Pointer entered the container.
    PointerEnter,
    /// Pointer left the container.
    PointerLeave,
    /// A tap or click.
    Tap,
    /// Keyboard focus entered the container.
    FocusGained,
    /// Keyboard focus left the container.
    FocusLost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BatchKey {
    Reveal,
    Swap,
    Conceal,
}

#[derive(Clone, Copy, Debug)]
enum TileEvent {
    Show(usize),
    Hide(usize),
    Swap,
}

/// The pixel-dissolve transition: two layered content subtrees crossed over
/// behind a staggered, randomly ordered tile wipe.
///
/// Activation flips the logical state immediately (it gates retriggers and
/// accessibility visibility); the displayed content swaps once, mid
/// transition, after the reveal pass completes. Retriggering cancels all
/// pending tile batches and the pending swap before scheduling new ones.
///
/// Deterministic: tile order is drawn from a seeded generator, so a given
/// seed replays the same wipe.
#[derive(Debug)]
pub struct PixelDissolve {
    config: PixelDissolveConfig,
    device: DeviceClass,
    tiles: Vec<Tile>,
    phase: Phase,
    /// Logical activation, flipped at trigger time.
    active: bool,
    /// Second content currently displayed, flipped at the swap.
    shown_second: bool,
    timeline: Timeline<BatchKey, TileEvent>,
    rng: Rng64,
}

impl PixelDissolve {
    /// A dissolve showing the first content, with validated config and a
    /// seeded tile-order stream.
    #[tracing::instrument]
    pub fn new(config: PixelDissolveConfig, device: DeviceClass, seed: u64) -> FlourishResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            device,
            tiles: tiles_for_grid(config.grid_size),
            phase: Phase::ShowingFirst,
            active: false,
            shown_second: false,
            timeline: Timeline::new(),
            rng: Rng64::new(seed),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &PixelDissolveConfig {
        &self.config
    }

    /// Overlay tiles in row-major order, with current visibility.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Current state-machine phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// No transition in flight.
    pub fn is_idle(&self) -> bool {
        self.timeline.is_idle()
    }

    /// Logical activation state (drives accessibility visibility).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Content subtree the visitor currently sees.
    pub fn visible_content(&self) -> ContentSlot {
        if self.shown_second {
            ContentSlot::Second
        } else {
            ContentSlot::First
        }
    }

    /// Accessibility exposure per slot (`aria-hidden` is the inverse).
    /// Tracks the logical state, not the delayed display swap.
    pub fn content_exposed(&self, slot: ContentSlot) -> bool {
        match slot {
            ContentSlot::First => !self.active,
            ContentSlot::Second => self.active,
        }
    }

    /// Whether a slot should receive pointer events. The second subtree
    /// stays pointer-transparent while displayed so the container keeps
    /// receiving leave events.
    pub fn content_accepts_pointer(&self, slot: ContentSlot) -> bool {
        match slot {
            ContentSlot::First => true,
            ContentSlot::Second => false,
        }
    }

    /// Replace the grid configuration. Tiles are rebuilt from scratch and
    /// any in-flight transition is cancelled.
    pub fn set_grid(&mut self, grid_size: u32, pixel_color: Rgba8) -> FlourishResult<()> {
        let next = PixelDissolveConfig {
            grid_size,
            pixel_color,
            ..self.config
        };
        next.validate()?;
        self.config = next;
        self.tiles = tiles_for_grid(grid_size);
        self.timeline.cancel_all();
        self.shown_second = self.active;
        self.phase = if self.active {
            Phase::ShowingSecond
        } else {
            Phase::ShowingFirst
        };
        Ok(())
    }

    /// Route a host interaction through the device-specific wiring.
    pub fn handle(&mut self, interaction: Interaction) {
        match self.device {
            DeviceClass::Pointer => match interaction {
                Interaction::PointerEnter | Interaction::FocusGained => {
                    if !self.active {
                        self.start_transition(true);
                    }
                }
                Interaction::PointerLeave | Interaction::FocusLost => {
                    if self.active && !self.config.once {
                        self.start_transition(false);
                    }
                }
                Interaction::Tap => {}
            },
            DeviceClass::Touch => match interaction {
                Interaction::Tap => {
                    if !self.active {
                        self.start_transition(true);
                    } else if !self.config.once {
                        self.start_transition(false);
                    }
                }
                _ => {}
            },
        }
    }

    /// Advance the transition clock, applying due tile events and the
    /// content swap.
    pub fn advance(&mut self, dt_secs: f64) {
        let fired = self.timeline.advance(dt_secs);
        for event in fired {
            match event {
                TileEvent::Show(i) => {
                    if let Some(tile) = self.tiles.get_mut(i) {
                        tile.visible = true;
                    }
                }
                TileEvent::Hide(i) => {
                    if let Some(tile) = self.tiles.get_mut(i) {
                        tile.visible = false;
                    }
                }
                TileEvent::Swap => {
                    self.shown_second = self.active;
                }
            }
        }
        if self.timeline.is_idle() {
            self.phase = if self.shown_second {
                Phase::ShowingSecond
            } else {
                Phase::ShowingFirst
            };
        }
    }

    fn start_transition(&mut self, activate: bool) {
        if self.tiles.is_empty() {
            return;
        }
        self.active = activate;

        // Retrigger discipline: kill both tile batches and the pending
        // swap before scheduling anything new.
        self.timeline.cancel(BatchKey::Reveal);
        self.timeline.cancel(BatchKey::Swap);
        self.timeline.cancel(BatchKey::Conceal);
        for tile in &mut self.tiles {
            tile.visible = false;
        }

        let total = self.tiles.len();
        let step = self.config.step_duration;
        let stagger = step / total as f64;

        for (k, &idx) in shuffled_indices(total, &mut self.rng).iter().enumerate() {
            self.timeline
                .schedule(BatchKey::Reveal, k as f64 * stagger, TileEvent::Show(idx));
        }
        self.timeline.schedule(BatchKey::Swap, step, TileEvent::Swap);
        for (k, &idx) in shuffled_indices(total, &mut self.rng).iter().enumerate() {
            self.timeline.schedule(
                BatchKey::Conceal,
                step + k as f64 * stagger,
                TileEvent::Hide(idx),
            );
        }

        self.phase = if activate {
            Phase::ToSecond
        } else {
            Phase::ToFirst
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pixel_dissolve.rs"]
mod tests;
