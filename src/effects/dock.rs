use crate::{
    animation::spring::{Spring, SpringParams},
    foundation::error::{FlourishError, FlourishResult},
    foundation::math::remap_clamped,
    input::device::{DeviceClass, DeviceProbe},
};

/// Tuning for the proximity-magnified icon strip.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DockConfig {
    /// Icon size with the pointer far away (and the fixed size on touch).
    pub min_size: f64,
    /// Icon size with the pointer dead center.
    pub max_size: f64,
    /// Horizontal distance at which magnification fades out entirely.
    pub influence_radius: f64,
    /// Response of the size animation.
    pub spring: SpringParams,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            min_size: 40.0,
            max_size: 80.0,
            influence_radius: 150.0,
            spring: SpringParams::default(),
        }
    }
}

impl DockConfig {
    /// Parse a host-provided JSON config object. Absent fields take their
    /// defaults; the result is validated.
    pub fn from_json(json: &str) -> FlourishResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| FlourishError::validation(format!("invalid dock config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject degenerate sizes, radii, or spring constants.
    pub fn validate(&self) -> FlourishResult<()> {
        if !self.min_size.is_finite() || self.min_size <= 0.0 {
            return Err(FlourishError::validation("min_size must be > 0"));
        }
        if !self.max_size.is_finite() || self.max_size < self.min_size {
            return Err(FlourishError::validation("max_size must be >= min_size"));
        }
        if !self.influence_radius.is_finite() || self.influence_radius <= 0.0 {
            return Err(FlourishError::validation("influence_radius must be > 0"));
        }
        self.spring.validate()
    }
}

/// Static descriptor for one dock target. Activation is plain link
/// navigation; there is no callback surface.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DockItem {
    /// Tooltip text.
    pub title: String,
    /// Icon identifier the host resolves to an asset.
    pub icon: String,
    /// Navigation target.
    pub href: String,
}

#[derive(Debug)]
struct IconSlot {
    /// Left edge and width from the host layout, if reported yet.
    bounds: Option<(f64, f64)>,
    size: Spring,
    hovered: bool,
}

/// A horizontal icon strip where each icon's size follows the pointer's
/// horizontal proximity through a spring.
///
/// The shared pointer position is scoped to this dock instance; two docks
/// never observe each other. On touch or narrow-viewport devices the
/// proximity effect is disabled: icons hold `min_size` and tooltips are
/// suppressed.
#[derive(Debug)]
pub struct ProximityDock {
    config: DockConfig,
    items: Vec<DockItem>,
    slots: Vec<IconSlot>,
    /// Container-scoped pointer x; `None` means the pointer left the dock.
    pointer_x: Option<f64>,
    device: DeviceClass,
}

impl ProximityDock {
    /// A dock with every icon at `min_size` and no pointer present.
    #[tracing::instrument(skip(items))]
    pub fn new(
        config: DockConfig,
        items: Vec<DockItem>,
        device: DeviceClass,
    ) -> FlourishResult<Self> {
        config.validate()?;
        let slots = items
            .iter()
            .map(|_| {
                Ok(IconSlot {
                    bounds: None,
                    size: Spring::new(config.spring, config.min_size)?,
                    hovered: false,
                })
            })
            .collect::<FlourishResult<Vec<_>>>()?;
        Ok(Self {
            config,
            items,
            slots,
            pointer_x: None,
            device,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    /// The static item descriptors, in strip order.
    pub fn items(&self) -> &[DockItem] {
        &self.items
    }

    /// Current device classification.
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Feed one icon's layout bounds (left edge, width) from the host.
    pub fn set_icon_bounds(&mut self, index: usize, left: f64, width: f64) {
        if let Some(slot) = self.slots.get_mut(index)
            && left.is_finite()
            && width.is_finite()
            && width >= 0.0
        {
            slot.bounds = Some((left, width));
        }
    }

    /// Update the shared pointer position. `None` models pointer-leave and
    /// collapses every icon back to `min_size`.
    pub fn set_pointer_x(&mut self, x: Option<f64>) {
        self.pointer_x = match x {
            Some(v) if v.is_finite() => Some(v),
            _ => None,
        };
    }

    /// Record hover state for icon `index` (drives the tooltip).
    pub fn set_hovered(&mut self, index: usize, hovered: bool) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.hovered = hovered;
        }
    }

    /// Re-classify the device from a fresh probe (the host calls this on
    /// viewport resize). Switching to touch snaps every icon to the fixed
    /// compact size.
    pub fn on_resize(&mut self, probe: DeviceProbe) {
        let next = probe.classify();
        if next == self.device {
            return;
        }
        self.device = next;
        if next == DeviceClass::Touch {
            for slot in &mut self.slots {
                slot.size.snap_to(self.config.min_size);
                slot.hovered = false;
            }
        }
    }

    /// Advance one display frame: retarget each icon's spring from the
    /// current pointer distance and step it.
    pub fn tick(&mut self, dt_secs: f64) {
        for slot in &mut self.slots {
            let target = icon_target(&self.config, self.device, self.pointer_x, slot.bounds);
            slot.size.set_target(target);
            slot.size.step(dt_secs);
        }
    }

    /// Rendered size of icon `index` (width and height; icons are square).
    pub fn icon_size(&self, index: usize) -> f64 {
        self.slots
            .get(index)
            .map(|s| s.size.value())
            .unwrap_or(self.config.min_size)
    }

    /// Size the spring is currently seeking for icon `index`.
    pub fn icon_target(&self, index: usize) -> f64 {
        self.slots
            .get(index)
            .map(|s| s.size.target())
            .unwrap_or(self.config.min_size)
    }

    /// Tooltips show on hover, pointer devices only.
    pub fn tooltip_visible(&self, index: usize) -> bool {
        self.device == DeviceClass::Pointer
            && self.slots.get(index).is_some_and(|s| s.hovered)
    }

    /// Every icon spring within `epsilon` of its target.
    pub fn is_settled(&self, epsilon: f64) -> bool {
        self.slots.iter().all(|s| s.size.is_settled(epsilon))
    }
}

fn icon_target(
    config: &DockConfig,
    device: DeviceClass,
    pointer_x: Option<f64>,
    bounds: Option<(f64, f64)>,
) -> f64 {
    if device == DeviceClass::Touch {
        return config.min_size;
    }
    let (Some(x), Some((left, width))) = (pointer_x, bounds) else {
        return config.min_size;
    };
    let distance = (x - (left + width / 2.0)).abs();
    remap_clamped(
        distance,
        0.0,
        config.influence_radius,
        config.max_size,
        config.min_size,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/effects/dock.rs"]
mod tests;
