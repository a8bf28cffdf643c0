//! Fixed-shape description of what is on screen.
//!
//! Every option becomes one [`OptionVisual`]: its label, one [`Glyph`] per
//! character, and a scene-space bounding box used for hit testing. Options
//! are addressed by their index in [`Visuals::options`], which matches the
//! option order of the live step.

use crate::config::LayoutConfig;

/// Horizontal advance of a character.
pub trait GlyphMetrics {
    fn advance(&self, ch: char) -> f32;
}

/// Every character advances by the same amount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMetrics {
    pub advance: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self { advance: 18.0 }
    }
}

impl GlyphMetrics for MonospaceMetrics {
    fn advance(&self, _ch: char) -> f32 {
        self.advance
    }
}

impl<F: Fn(char) -> f32> GlyphMetrics for F {
    fn advance(&self, ch: char) -> f32 {
        self(ch)
    }
}

/// Per-axis rotation in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Axis-aligned rectangle in scene units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl BoundingBox {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }
}

/// A single character of an option.
///
/// `x` and `y` are relative to the option's origin. Spaces take up room but
/// are never drawn or animated.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub visible: bool,
    pub x: f32,
    pub y: f32,
    pub rotation: Rotation,
    /// Downward speed while exiting, in scene units per millisecond
    pub velocity: f32,
}

/// One option on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionVisual {
    pub label: String,
    /// Scene position of the option's first glyph
    pub origin: (f32, f32),
    pub glyphs: Vec<Glyph>,
    /// Hit area in scene units; stays where the option was laid out
    pub bounding_box: BoundingBox,
}

impl OptionVisual {
    /// Whether every visible glyph has dropped to `threshold` or below.
    pub fn is_below(&self, threshold: f32) -> bool {
        self.glyphs
            .iter()
            .filter(|glyph| glyph.visible)
            .all(|glyph| glyph.y <= threshold)
    }
}

/// Everything currently on screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Visuals {
    pub options: Vec<OptionVisual>,
}

impl Visuals {
    /// Lay out `labels` top to bottom, each horizontally centred.
    ///
    /// # Example
    ///
    /// ```rust
    /// use menuflow::config::LayoutConfig;
    /// use menuflow::render::{MonospaceMetrics, Visuals};
    ///
    /// let labels = vec!["Yes".to_string(), "No".to_string()];
    /// let visuals = Visuals::layout(&labels, &MonospaceMetrics::default(), &LayoutConfig::default());
    ///
    /// assert_eq!(visuals.len(), 2);
    /// assert!(visuals.options[0].origin.1 > visuals.options[1].origin.1);
    /// ```
    pub fn layout(labels: &[String], metrics: &dyn GlyphMetrics, config: &LayoutConfig) -> Self {
        if labels.is_empty() {
            return Self::default();
        }

        let slot = (config.panel_half_height * 2.0 - config.padding) / labels.len() as f32;

        let options = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let origin_y = config.panel_half_height
                    - (config.padding + (slot * i as f32 + slot * 0.5) - config.glyph_depth * 0.5);

                let mut glyphs = Vec::with_capacity(label.len());
                let mut cursor = 0.0;
                for ch in label.chars() {
                    glyphs.push(Glyph {
                        ch,
                        visible: ch != ' ',
                        x: cursor,
                        y: 0.0,
                        rotation: Rotation::default(),
                        velocity: 0.0,
                    });
                    cursor += metrics.advance(ch) + config.glyph_spacing;
                }
                let width = if glyphs.is_empty() {
                    0.0
                } else {
                    cursor - config.glyph_spacing
                };

                let origin_x = -width / 2.0;
                OptionVisual {
                    label: label.clone(),
                    origin: (origin_x, origin_y),
                    glyphs,
                    bounding_box: BoundingBox {
                        min_x: origin_x,
                        min_y: origin_y,
                        max_x: origin_x + width,
                        max_y: origin_y + config.glyph_size,
                    },
                }
            })
            .collect();

        Self { options }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Index of the first option whose bounding box contains the scene point.
    pub fn hit(&self, x: f32, y: f32) -> Option<usize> {
        self.options
            .iter()
            .position(|option| option.bounding_box.contains(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_labels_give_empty_visuals() {
        let visuals = Visuals::layout(&[], &MonospaceMetrics::default(), &LayoutConfig::default());
        assert!(visuals.is_empty());
    }

    #[test]
    fn single_option_sits_at_panel_centre_slot() {
        let config = LayoutConfig::default();
        let visuals = Visuals::layout(&labels(&["Go"]), &MonospaceMetrics::default(), &config);

        // slot = 320, origin = 180 - (40 + 160 - 5)
        assert_eq!(visuals.options[0].origin.1, -15.0);
    }

    #[test]
    fn options_are_centred_horizontally() {
        let metrics = MonospaceMetrics { advance: 10.0 };
        let visuals = Visuals::layout(&labels(&["abc"]), &metrics, &LayoutConfig::default());

        let option = &visuals.options[0];
        // 3 glyphs of 10 with 2 gaps of 5
        assert_eq!(option.bounding_box.width(), 40.0);
        assert_eq!(option.origin.0, -20.0);
        assert_eq!(option.bounding_box.center().0, 0.0);
        assert_eq!(option.glyphs[2].x, 30.0);
    }

    #[test]
    fn spaces_take_room_but_are_hidden() {
        let visuals = Visuals::layout(
            &labels(&["a b"]),
            &MonospaceMetrics::default(),
            &LayoutConfig::default(),
        );

        let glyphs = &visuals.options[0].glyphs;
        assert_eq!(glyphs.len(), 3);
        assert!(!glyphs[1].visible);
        assert!(glyphs[2].x > glyphs[1].x);
    }

    #[test]
    fn closure_metrics_are_used() {
        let narrow_i = |ch: char| if ch == 'i' { 4.0 } else { 12.0 };
        let visuals = Visuals::layout(&labels(&["ii"]), &narrow_i, &LayoutConfig::default());

        assert_eq!(visuals.options[0].bounding_box.width(), 13.0);
    }

    #[test]
    fn hit_finds_option_under_point() {
        let visuals = Visuals::layout(
            &labels(&["Top", "Bottom"]),
            &MonospaceMetrics::default(),
            &LayoutConfig::default(),
        );

        let (x, y) = visuals.options[1].bounding_box.center();
        assert_eq!(visuals.hit(x, y), Some(1));
        assert_eq!(visuals.hit(1000.0, 1000.0), None);
    }

    #[test]
    fn hidden_glyphs_do_not_block_exit() {
        let mut visuals = Visuals::layout(
            &labels(&["a b"]),
            &MonospaceMetrics::default(),
            &LayoutConfig::default(),
        );

        let option = &mut visuals.options[0];
        option.glyphs[0].y = -400.0;
        option.glyphs[2].y = -400.0;
        assert!(option.is_below(-366.0));
    }
}
