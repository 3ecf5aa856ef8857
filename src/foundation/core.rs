use crate::foundation::error::{FlourishError, FlourishResult};

pub use kurbo::Rect;

/// Visible viewport of the host surface, in CSS-pixel units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Viewport width in CSS pixels.
    pub width: f64,
    /// Viewport height in CSS pixels.
    pub height: f64,
}

impl Viewport {
    /// A validated viewport; both dimensions must be finite and positive.
    pub fn new(width: f64, height: f64) -> FlourishResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(FlourishError::validation("Viewport width must be > 0"));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(FlourishError::validation("Viewport height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Half the viewport height, the reference line for pin-end anchors.
    pub fn half_height(self) -> f64 {
        self.height / 2.0
    }
}

/// A position expressed either in absolute pixels or as a fraction of a
/// container length ("20%" in host configs).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// Absolute offset in CSS pixels.
    Px(f64),
    /// Fraction of the container length (0.2 for "20%").
    Fraction(f64),
}

impl Anchor {
    /// Parse the host-facing form: `"20%"` or a bare number of pixels.
    pub fn parse(s: &str) -> FlourishResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FlourishError::validation("anchor must be non-empty"));
        }
        if let Some(pct) = s.strip_suffix('%') {
            let v: f64 = pct
                .trim()
                .parse()
                .map_err(|_| FlourishError::validation(format!("invalid anchor '{s}'")))?;
            if !v.is_finite() {
                return Err(FlourishError::validation("anchor percentage must be finite"));
            }
            return Ok(Self::Fraction(v / 100.0));
        }
        let v: f64 = s
            .parse()
            .map_err(|_| FlourishError::validation(format!("invalid anchor '{s}'")))?;
        if !v.is_finite() {
            return Err(FlourishError::validation("anchor pixels must be finite"));
        }
        Ok(Self::Px(v))
    }

    /// Resolve against a container length (viewport height for scroll anchors).
    pub fn resolve(self, container_len: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Fraction(f) => f * container_len,
        }
    }
}

impl serde::Serialize for Anchor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match *self {
            Self::Px(v) => serializer.serialize_f64(v),
            Self::Fraction(f) => serializer.serialize_str(&format!("{}%", f * 100.0)),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Anchor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct AnchorVisitor;

        impl serde::de::Visitor<'_> for AnchorVisitor {
            type Value = Anchor;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a number of pixels or a percent string like \"20%\"")
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Anchor, E> {
                Ok(Anchor::Px(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Anchor, E> {
                Ok(Anchor::Px(v as f64))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Anchor, E> {
                Ok(Anchor::Px(v as f64))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Anchor, E> {
                Anchor::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(AnchorVisitor)
    }
}

/// Straight-alpha RGBA8 (no premultiplication; tiles are opaque overlays the
/// host paints as-is).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component; 255 is fully opaque.
    pub a: u8,
}

impl Rgba8 {
    /// An opaque color from its RGB components.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}
