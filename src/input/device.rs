/// What kind of primary input the host surface has.
///
/// `Touch` disables hover-driven effects entirely; when detection is
/// inconclusive the classifier falls back to `Touch` so a misread device
/// gets the simpler, always-readable rendition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DeviceClass {
    /// Fine pointer: hover, proximity, and focus wirings are active.
    Pointer,
    /// Touch-first: tap-to-toggle wiring, no hover-driven effects.
    Touch,
}

/// Capability signals the host was able to gather. Every field is optional;
/// hosts report what they know and the classifier handles the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceProbe {
    /// Result of a `(pointer: coarse)` media query, if the host ran one.
    pub coarse_pointer: Option<bool>,
    /// Maximum simultaneous touch points, if known.
    pub touch_points: Option<u32>,
    /// Current viewport width in CSS pixels, if known.
    pub viewport_width: Option<f64>,
}

/// Viewports narrower than this are treated as touch-first (tablets
/// included), regardless of pointer capability.
pub const NARROW_VIEWPORT_PX: f64 = 1024.0;

impl DeviceProbe {
    /// Classify from the gathered signals. Any positive touch signal wins;
    /// `Pointer` requires at least one conclusive non-touch signal.
    pub fn classify(self) -> DeviceClass {
        if self.coarse_pointer == Some(true) {
            return DeviceClass::Touch;
        }
        if matches!(self.touch_points, Some(n) if n > 0) {
            return DeviceClass::Touch;
        }
        if matches!(self.viewport_width, Some(w) if w < NARROW_VIEWPORT_PX) {
            return DeviceClass::Touch;
        }
        let conclusive = self.coarse_pointer == Some(false)
            || self.touch_points == Some(0)
            || matches!(self.viewport_width, Some(w) if w >= NARROW_VIEWPORT_PX);
        if conclusive {
            DeviceClass::Pointer
        } else {
            DeviceClass::Touch
        }
    }
}
