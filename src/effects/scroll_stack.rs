use crate::{
    animation::ease::Ease,
    animation::smoothing::SmoothScroll,
    foundation::core::{Anchor, Viewport},
    foundation::error::{FlourishError, FlourishResult},
    foundation::math::clamp01,
};

/// Which scroll offset the host must feed to [`ScrollStackEngine::on_scroll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScrollSource {
    /// Window-level (document) scroll offset.
    Window,
    /// The stack's own scrollable container offset.
    Container,
}

/// Tuning for the stacking-cards effect.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollStackConfig {
    /// Vertical gap below each card except the last.
    pub item_distance: f64,
    /// Extra scale shrink per card index once pinned.
    pub item_scale: f64,
    /// Vertical offset between successive pinned cards.
    pub item_stack_distance: f64,
    /// Viewport-relative anchor where a card pins.
    pub stack_position: Anchor,
    /// Viewport-relative anchor where the scale animation completes.
    pub scale_end_position: Anchor,
    /// Scale the first card shrinks to at full pin.
    pub base_scale: f64,
    /// Smoothing factor for the inertial scroll driver, per 60 Hz frame.
    pub scroll_lerp: f64,
    /// Whether the host should feed window-level or container-level scroll.
    pub use_window_scroll: bool,
}

impl Default for ScrollStackConfig {
    fn default() -> Self {
        Self {
            item_distance: 100.0,
            item_scale: 0.03,
            item_stack_distance: 30.0,
            stack_position: Anchor::Fraction(0.20),
            scale_end_position: Anchor::Fraction(0.10),
            base_scale: 0.85,
            scroll_lerp: 0.1,
            use_window_scroll: true,
        }
    }
}

impl ScrollStackConfig {
    /// Parse a host-provided JSON config object. Absent fields take their
    /// defaults; the result is validated.
    pub fn from_json(json: &str) -> FlourishResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| FlourishError::validation(format!("invalid scroll stack config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject non-finite or out-of-range tuning values.
    pub fn validate(&self) -> FlourishResult<()> {
        if !self.item_distance.is_finite() || self.item_distance < 0.0 {
            return Err(FlourishError::validation("item_distance must be >= 0"));
        }
        if !self.item_scale.is_finite() || self.item_scale < 0.0 {
            return Err(FlourishError::validation("item_scale must be >= 0"));
        }
        if !self.item_stack_distance.is_finite() || self.item_stack_distance < 0.0 {
            return Err(FlourishError::validation("item_stack_distance must be >= 0"));
        }
        if !self.base_scale.is_finite() || self.base_scale <= 0.0 || self.base_scale > 1.0 {
            return Err(FlourishError::validation("base_scale must be in (0, 1]"));
        }
        if !self.scroll_lerp.is_finite() || self.scroll_lerp <= 0.0 || self.scroll_lerp > 1.0 {
            return Err(FlourishError::validation("scroll_lerp must be in (0, 1]"));
        }
        Ok(())
    }
}

/// Natural (untransformed) layout geometry of one card, captured once after
/// initial layout.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardGeometry {
    /// Document-space top offset before any stacking transform.
    pub top: f64,
    /// Untransformed card height.
    pub height: f64,
}

impl CardGeometry {
    fn validate(&self) -> FlourishResult<()> {
        if !self.top.is_finite() {
            return Err(FlourishError::validation("card top must be finite"));
        }
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(FlourishError::validation("card height must be >= 0"));
        }
        Ok(())
    }
}

/// Per-frame output for one card. Translation is rounded to whole pixels
/// (the host applies it as a translate3d); scale is exact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    /// Vertical translation in whole CSS pixels.
    pub translate_y: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl CardTransform {
    /// No translation, no scaling.
    pub const IDENTITY: Self = Self {
        translate_y: 0.0,
        scale: 1.0,
    };
}

/// Drives the stacking-cards parallax: cards pin at a viewport anchor,
/// scale down by index, and stay frozen until the sentinel-derived end of
/// the sequence scrolls past.
///
/// The engine is host-driven: feed raw scroll via [`on_scroll`], call
/// [`on_frame`] once per display frame, and read back the transforms.
/// Redundant update requests between frames coalesce into a single
/// recomputation.
///
/// [`on_scroll`]: ScrollStackEngine::on_scroll
/// [`on_frame`]: ScrollStackEngine::on_frame
#[derive(Debug)]
pub struct ScrollStackEngine {
    config: ScrollStackConfig,
    cards: Vec<CardGeometry>,
    end_marker_top: f64,
    smooth: SmoothScroll,
    transforms: Vec<CardTransform>,
    dirty: bool,
    mounted: bool,
}

impl ScrollStackEngine {
    /// Build an engine over the given cards.
    ///
    /// `end_marker_top` is the document-space top of the sentinel element
    /// the host renders after the last card. A missing sentinel with cards
    /// present is a configuration error, not something to guess around.
    /// Zero cards yields a valid, inert engine.
    #[tracing::instrument(skip(cards))]
    pub fn mount(
        config: ScrollStackConfig,
        cards: Vec<CardGeometry>,
        end_marker_top: Option<f64>,
    ) -> FlourishResult<Self> {
        config.validate()?;
        for card in &cards {
            card.validate()?;
        }
        let end_marker_top = match end_marker_top {
            Some(top) if top.is_finite() => top,
            Some(_) => {
                return Err(FlourishError::validation("end marker top must be finite"));
            }
            None if cards.is_empty() => 0.0,
            None => {
                return Err(FlourishError::validation(
                    "scroll stack requires a trailing end marker element",
                ));
            }
        };
        let count = cards.len();
        tracing::debug!(cards = count, end_marker_top, "scroll stack mounted");
        Ok(Self {
            config,
            cards,
            end_marker_top,
            smooth: SmoothScroll::new(config.scroll_lerp),
            transforms: vec![CardTransform::IDENTITY; count],
            dirty: true,
            mounted: true,
        })
    }

    /// The mounted configuration.
    pub fn config(&self) -> &ScrollStackConfig {
        &self.config
    }

    /// Number of cards under management.
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// True when there is nothing to animate.
    pub fn is_inert(&self) -> bool {
        self.cards.is_empty() || !self.mounted
    }

    /// Which scroll offset the host must feed, per the config.
    pub fn scroll_source(&self) -> ScrollSource {
        if self.config.use_window_scroll {
            ScrollSource::Window
        } else {
            ScrollSource::Container
        }
    }

    /// Gap the host lays out below card `index` (`item_distance` for every
    /// card but the last).
    pub fn margin_below(&self, index: usize) -> f64 {
        if index + 1 < self.cards.len() {
            self.config.item_distance
        } else {
            0.0
        }
    }

    /// Feed a raw scroll offset. The rendered position follows through the
    /// inertial smoothing driver; the transform pass is scheduled, not run.
    pub fn on_scroll(&mut self, raw_scroll_top: f64) {
        if !self.mounted {
            return;
        }
        self.smooth.set_target(raw_scroll_top);
        self.dirty = true;
    }

    /// Place the scroll position with no easing (initial mount position).
    pub fn jump_to_scroll(&mut self, raw_scroll_top: f64) {
        if !self.mounted {
            return;
        }
        self.smooth.jump_to(raw_scroll_top);
        self.dirty = true;
    }

    /// Programmed scroll (anchor navigation): ease to `target` over
    /// `duration_secs`. New raw input via [`on_scroll`] cancels it.
    ///
    /// [`on_scroll`]: ScrollStackEngine::on_scroll
    pub fn scroll_to(&mut self, target: f64, duration_secs: f64, ease: Ease) {
        if !self.mounted {
            return;
        }
        self.smooth.animate_to(target, duration_secs, ease);
        self.dirty = true;
    }

    /// Request a recompute without new scroll input (e.g. after a relayout).
    /// Requests collapse: however many arrive before the next frame, the
    /// transform pass runs once.
    pub fn request_update(&mut self) {
        if self.mounted {
            self.dirty = true;
        }
    }

    /// Smoothed scroll position currently being rendered.
    pub fn smoothed_scroll(&self) -> f64 {
        self.smooth.value()
    }

    /// Advance one display frame: tick the smoothing driver, recompute the
    /// card transforms if anything changed, and return them in card order.
    pub fn on_frame(&mut self, dt_secs: f64, viewport: Viewport) -> &[CardTransform] {
        if !self.mounted {
            return &[];
        }
        let before = self.smooth.value();
        self.smooth.tick(dt_secs);
        if self.dirty || self.smooth.value() != before {
            self.compute(viewport);
            self.dirty = false;
        }
        &self.transforms
    }

    /// Transforms from the most recent frame, in card order.
    pub fn card_transforms(&self) -> &[CardTransform] {
        &self.transforms
    }

    /// Detach the engine: pending work is dropped and subsequent input and
    /// frame calls are inert.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.dirty = false;
        self.transforms.clear();
        tracing::debug!("scroll stack unmounted");
    }

    fn compute(&mut self, viewport: Viewport) {
        let s = self.smooth.value();
        let stack_px = self.config.stack_position.resolve(viewport.height);
        let scale_end_px = self.config.scale_end_position.resolve(viewport.height);
        let pin_end = self.end_marker_top - viewport.half_height();

        for (i, card) in self.cards.iter().enumerate() {
            let pin_start = card.top - stack_px - self.config.item_stack_distance * i as f64;
            let trigger_end = card.top - scale_end_px;

            let progress = if trigger_end == pin_start {
                // Degenerate scale window: step at the threshold.
                if s >= pin_start { 1.0 } else { 0.0 }
            } else {
                clamp01((s - pin_start) / (trigger_end - pin_start))
            };

            let target_scale = self.config.base_scale + i as f64 * self.config.item_scale;
            let scale = 1.0 - progress * (1.0 - target_scale);

            let translate_y = if s >= pin_start && s <= pin_end {
                s - pin_start
            } else if s > pin_end {
                pin_end - pin_start
            } else {
                0.0
            };

            self.transforms[i] = CardTransform {
                translate_y: translate_y.round(),
                scale,
            };
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/scroll_stack.rs"]
mod tests;
