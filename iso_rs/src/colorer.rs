//! Per-vertex coloring.
//!
//! A [`VertexColorer`] carries up to two capabilities: an unlit callback
//! producing one RGBA color per vertex, and a lit callback producing a
//! [`Material`]. Its [`ColorerType`] is derived from which callbacks are
//! present. Coloring is strictly additive: geometry never depends on it.

use core::fmt;

use iso_core::{CellCoord, Point3};

/// Red, green, blue, alpha.
pub type Rgba = [f32; 4];

/// Callback producing an unlit color.
pub type UnlitFn = Box<dyn Fn(&ColorSample) -> Rgba + Send + Sync>;

/// Callback producing a lit material.
pub type LitFn = Box<dyn Fn(&ColorSample) -> Material + Send + Sync>;

/// What a colorer callback is given for each emitted vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    /// World-space vertex.
    pub vertex: Point3,
    /// Cell the vertex was emitted for.
    pub cell: CellCoord,
    /// Field sample at the cell corner the case table assigns to this vertex.
    pub value: f64,
}

/// Lighting attributes of one vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Specular color.
    pub specular: Rgba,
    /// Ambient color.
    pub ambient: Rgba,
    /// Diffuse color.
    pub diffuse: Rgba,
    /// Emissive color, if any.
    pub emissive: Option<Rgba>,
    /// Specular exponent.
    pub shininess: f32,
}

impl Material {
    /// Flat layout: specular RGBA, ambient RGBA, diffuse RGBA, then emissive
    /// RGBA when present, then shininess. 13 or 17 components.
    pub fn to_components(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(17);
        out.extend_from_slice(&self.specular);
        out.extend_from_slice(&self.ambient);
        out.extend_from_slice(&self.diffuse);
        if let Some(emissive) = self.emissive {
            out.extend_from_slice(&emissive);
        }
        out.push(self.shininess);
        out
    }
}

/// Which capabilities a colorer has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorerType {
    /// No coloring.
    #[default]
    None,
    /// Unlit colors only.
    Unlit,
    /// Lit materials only.
    Lit,
    /// Both unlit colors and lit materials.
    Both,
}

impl ColorerType {
    /// Raw code (NONE = 0, UNLIT = 1, LIT = 2, BOTH = 3).
    #[inline]
    pub const fn as_raw(self) -> u8 {
        match self {
            ColorerType::None => 0,
            ColorerType::Unlit => 1,
            ColorerType::Lit => 2,
            ColorerType::Both => 3,
        }
    }

    #[inline]
    const fn from_flags(unlit: bool, lit: bool) -> Self {
        match (unlit, lit) {
            (false, false) => ColorerType::None,
            (true, false) => ColorerType::Unlit,
            (false, true) => ColorerType::Lit,
            (true, true) => ColorerType::Both,
        }
    }

    /// Whether unlit colors are produced.
    #[inline]
    pub const fn produces_unlit(self) -> bool {
        matches!(self, ColorerType::Unlit | ColorerType::Both)
    }

    /// Whether lit materials are produced.
    #[inline]
    pub const fn produces_lit(self) -> bool {
        matches!(self, ColorerType::Lit | ColorerType::Both)
    }
}

/// Pluggable per-vertex colorer.
///
/// # Example
///
/// ```ignore
/// let colorer = VertexColorer::unlit(|s| if s.value > 0.5 { [1.0, 0.0, 0.0, 1.0] } else { [0.0; 4] })
///     .with_translucency(true);
/// assert_eq!(colorer.colorer_type(), ColorerType::Unlit);
/// ```
#[derive(Default)]
pub struct VertexColorer {
    unlit: Option<UnlitFn>,
    lit: Option<LitFn>,
    translucent: bool,
}

impl VertexColorer {
    /// A colorer with no capabilities.
    pub fn new() -> Self {
        Self::default()
    }

    /// A colorer producing unlit colors.
    pub fn unlit<F>(f: F) -> Self
    where
        F: Fn(&ColorSample) -> Rgba + Send + Sync + 'static,
    {
        Self::new().with_unlit(f)
    }

    /// A colorer producing lit materials.
    pub fn lit<F>(f: F) -> Self
    where
        F: Fn(&ColorSample) -> Material + Send + Sync + 'static,
    {
        Self::new().with_lit(f)
    }

    /// Add or replace the unlit callback.
    pub fn with_unlit<F>(mut self, f: F) -> Self
    where
        F: Fn(&ColorSample) -> Rgba + Send + Sync + 'static,
    {
        self.unlit = Some(Box::new(f));
        self
    }

    /// Add or replace the lit callback.
    pub fn with_lit<F>(mut self, f: F) -> Self
    where
        F: Fn(&ColorSample) -> Material + Send + Sync + 'static,
    {
        self.lit = Some(Box::new(f));
        self
    }

    /// Mark alpha components as meaningful.
    pub fn with_translucency(mut self, enabled: bool) -> Self {
        self.translucent = enabled;
        self
    }

    /// Change the translucency flag in place.
    pub fn set_translucency_enabled(&mut self, enabled: bool) {
        self.translucent = enabled;
    }

    /// Whether alpha components are meaningful.
    #[inline]
    pub fn is_translucency_enabled(&self) -> bool {
        self.translucent
    }

    /// Capabilities present.
    #[inline]
    pub fn colorer_type(&self) -> ColorerType {
        ColorerType::from_flags(self.unlit.is_some(), self.lit.is_some())
    }

    /// Unlit color for `sample`, if this colorer produces one.
    #[inline]
    pub fn calc_unlit_color(&self, sample: &ColorSample) -> Option<Rgba> {
        self.unlit.as_ref().map(|f| f(sample))
    }

    /// Lit material for `sample`, if this colorer produces one.
    #[inline]
    pub fn calc_lit_color(&self, sample: &ColorSample) -> Option<Material> {
        self.lit.as_ref().map(|f| f(sample))
    }

    /// Color ramp over sample values: `from` at or below `low`, `to` at or
    /// above `high`, linear in between. Produces both unlit colors and
    /// materials whose diffuse term follows the ramp. Translucency is enabled
    /// when either end has alpha below 1.
    pub fn value_ramp(low: f64, high: f64, from: Rgba, to: Rgba) -> Self {
        let ramp = move |value: f64| -> Rgba {
            let t = if high > low {
                ((value - low) / (high - low)).clamp(0.0, 1.0) as f32
            } else if value >= high {
                1.0
            } else {
                0.0
            };
            let mut c = [0.0; 4];
            for (i, out) in c.iter_mut().enumerate() {
                *out = from[i] + (to[i] - from[i]) * t;
            }
            c
        };

        Self::unlit(move |s| ramp(s.value))
            .with_lit(move |s| {
                let diffuse = ramp(s.value);
                Material {
                    specular: [1.0, 1.0, 1.0, diffuse[3]],
                    ambient: [diffuse[0] * 0.2, diffuse[1] * 0.2, diffuse[2] * 0.2, diffuse[3]],
                    diffuse,
                    emissive: None,
                    shininess: 32.0,
                }
            })
            .with_translucency(from[3] < 1.0 || to[3] < 1.0)
    }
}

impl fmt::Debug for VertexColorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexColorer")
            .field("colorer_type", &self.colorer_type())
            .field("translucent", &self.translucent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(value: f64) -> ColorSample {
        ColorSample {
            vertex: Point3::default(),
            cell: CellCoord::default(),
            value,
        }
    }

    #[test]
    fn test_colorer_type_derived_from_capabilities() {
        assert_eq!(VertexColorer::new().colorer_type(), ColorerType::None);
        assert_eq!(
            VertexColorer::unlit(|_| [0.0; 4]).colorer_type(),
            ColorerType::Unlit
        );
        let lit = VertexColorer::lit(|_| Material {
            specular: [0.0; 4],
            ambient: [0.0; 4],
            diffuse: [0.0; 4],
            emissive: None,
            shininess: 1.0,
        });
        assert_eq!(lit.colorer_type(), ColorerType::Lit);
        assert_eq!(lit.with_unlit(|_| [1.0; 4]).colorer_type(), ColorerType::Both);
    }

    #[test]
    fn test_colorer_type_raw_codes() {
        assert_eq!(ColorerType::None.as_raw(), 0);
        assert_eq!(ColorerType::Unlit.as_raw(), 1);
        assert_eq!(ColorerType::Lit.as_raw(), 2);
        assert_eq!(ColorerType::Both.as_raw(), 3);
        assert!(ColorerType::Both.produces_unlit() && ColorerType::Both.produces_lit());
        assert!(!ColorerType::Unlit.produces_lit());
    }

    #[test]
    fn test_missing_capability_returns_none() {
        let colorer = VertexColorer::unlit(|s| [s.value as f32, 0.0, 0.0, 1.0]);
        assert_eq!(colorer.calc_unlit_color(&sample(0.5)), Some([0.5, 0.0, 0.0, 1.0]));
        assert_eq!(colorer.calc_lit_color(&sample(0.5)), None);
    }

    #[test]
    fn test_material_components() {
        let mut material = Material {
            specular: [1.0, 1.0, 1.0, 1.0],
            ambient: [0.1, 0.1, 0.1, 1.0],
            diffuse: [0.5, 0.5, 0.5, 1.0],
            emissive: None,
            shininess: 8.0,
        };
        let flat = material.to_components();
        assert_eq!(flat.len(), 13);
        assert_eq!(flat[12], 8.0);

        material.emissive = Some([0.0, 0.2, 0.0, 1.0]);
        let flat = material.to_components();
        assert_eq!(flat.len(), 17);
        assert_eq!(flat[13], 0.2);
    }

    #[test]
    fn test_value_ramp() {
        let colorer = VertexColorer::value_ramp(0.0, 2.0, [0.0, 0.0, 1.0, 1.0], [1.0, 0.0, 0.0, 0.5]);
        assert_eq!(colorer.colorer_type(), ColorerType::Both);
        assert!(colorer.is_translucency_enabled());

        assert_eq!(colorer.calc_unlit_color(&sample(-5.0)), Some([0.0, 0.0, 1.0, 1.0]));
        assert_eq!(colorer.calc_unlit_color(&sample(9.0)), Some([1.0, 0.0, 0.0, 0.5]));

        let mid = colorer.calc_unlit_color(&sample(1.0)).unwrap();
        assert!((mid[0] - 0.5).abs() < 1e-6);
        assert!((mid[2] - 0.5).abs() < 1e-6);

        let material = colorer.calc_lit_color(&sample(1.0)).unwrap();
        assert_eq!(material.diffuse, mid);
    }

    #[test]
    fn test_degenerate_ramp_is_a_step() {
        let colorer = VertexColorer::value_ramp(1.0, 1.0, [0.0; 4], [1.0; 4]);
        assert_eq!(colorer.calc_unlit_color(&sample(0.9)), Some([0.0; 4]));
        assert_eq!(colorer.calc_unlit_color(&sample(1.0)), Some([1.0; 4]));
    }
}
