//! A renderer that keeps visuals in memory and draws nothing.

use super::visuals::{GlyphMetrics, MonospaceMetrics, Rotation, Visuals};
use super::{RenderError, Renderer};
use crate::config::{AnimationConfig, EngineConfig, LayoutConfig};
use crate::core::OptionLabel;
use crate::selection::PointerCoords;

/// In-memory [`Renderer`].
///
/// Hit testing uses each option's layout bounding box. The exit animation
/// accelerates every visible glyph downward until it reaches the configured
/// threshold.
///
/// # Example
///
/// ```rust
/// use menuflow::config::EngineConfig;
/// use menuflow::render::{HeadlessRenderer, Renderer};
///
/// let mut renderer = HeadlessRenderer::new(&EngineConfig::default());
/// renderer.build_visuals(&["Left".to_string(), "Right".to_string()]);
///
/// let pointer = renderer.pointer_over(1).unwrap();
/// assert_eq!(renderer.intersected_index(pointer), Some(1));
/// ```
#[derive(Debug)]
pub struct HeadlessRenderer<M: GlyphMetrics = MonospaceMetrics> {
    metrics: M,
    layout: LayoutConfig,
    animation: AnimationConfig,
    visuals: Visuals,
    highlighted: Option<usize>,
    frames_drawn: u64,
}

impl HeadlessRenderer<MonospaceMetrics> {
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_metrics(MonospaceMetrics::default(), config)
    }
}

impl<M: GlyphMetrics> HeadlessRenderer<M> {
    pub fn with_metrics(metrics: M, config: &EngineConfig) -> Self {
        Self {
            metrics,
            layout: config.layout.clone(),
            animation: config.animation.clone(),
            visuals: Visuals::default(),
            highlighted: None,
            frames_drawn: 0,
        }
    }

    pub fn visuals(&self) -> &Visuals {
        &self.visuals
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Pointer coordinates at the centre of option `index`'s hit area.
    pub fn pointer_over(&self, index: usize) -> Option<PointerCoords> {
        let option = self.visuals.options.get(index)?;
        let (x, y) = option.bounding_box.center();
        Some(PointerCoords::from_scene(
            x,
            y,
            self.layout.view_half_extent,
        ))
    }
}

impl<M: GlyphMetrics> Renderer for HeadlessRenderer<M> {
    fn build_visuals(&mut self, labels: &[OptionLabel]) {
        self.visuals = Visuals::layout(labels, &self.metrics, &self.layout);
        self.highlighted = None;
    }

    fn destroy_visuals(&mut self) {
        self.visuals = Visuals::default();
        self.highlighted = None;
    }

    fn intersected_index(&mut self, pointer: PointerCoords) -> Option<usize> {
        let (x, y) = pointer.to_scene(self.layout.view_half_extent);
        self.visuals.hit(x, y)
    }

    fn set_highlight(&mut self, index: Option<usize>) {
        self.highlighted = index;
    }

    fn drive_exit_animation(&mut self, index: usize, elapsed_ms: f64) -> Result<bool, RenderError> {
        let threshold = self.animation.exit_threshold;
        let gravity = self.animation.exit_gravity;
        let dt = elapsed_ms as f32;

        let option = self
            .visuals
            .options
            .get_mut(index)
            .ok_or(RenderError::UnknownOption { index })?;

        for glyph in option.glyphs.iter_mut().filter(|glyph| glyph.visible) {
            if glyph.y > threshold {
                glyph.velocity += gravity * dt;
                glyph.y -= glyph.velocity * dt;
            }
        }

        Ok(option.is_below(threshold))
    }

    fn every_non_chosen_offscreen(&self, chosen: usize) -> bool {
        let threshold = self.animation.exit_threshold;
        self.visuals
            .options
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != chosen)
            .all(|(_, option)| option.is_below(threshold))
    }

    fn glyph_visibility(&self) -> Result<Vec<Vec<bool>>, RenderError> {
        Ok(self
            .visuals
            .options
            .iter()
            .map(|option| option.glyphs.iter().map(|glyph| glyph.visible).collect())
            .collect())
    }

    fn set_glyph_rotation(&mut self, option: usize, glyph: usize, rotation: Rotation) {
        if let Some(glyph) = self
            .visuals
            .options
            .get_mut(option)
            .and_then(|option| option.glyphs.get_mut(glyph))
        {
            glyph.rotation = rotation;
        }
    }

    fn draw(&mut self) {
        self.frames_drawn += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer_with(labels: &[&str]) -> HeadlessRenderer {
        let mut renderer = HeadlessRenderer::new(&EngineConfig::default());
        let labels: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        renderer.build_visuals(&labels);
        renderer
    }

    #[test]
    fn destroy_clears_visuals_and_highlight() {
        let mut renderer = renderer_with(&["A", "B"]);
        renderer.set_highlight(Some(0));

        renderer.destroy_visuals();

        assert!(renderer.visuals().is_empty());
        assert_eq!(renderer.highlighted(), None);
    }

    #[test]
    fn pointer_over_each_option_hits_it() {
        let mut renderer = renderer_with(&["One", "Two", "Three"]);

        for i in 0..3 {
            let pointer = renderer.pointer_over(i).unwrap();
            assert_eq!(renderer.intersected_index(pointer), Some(i));
        }
        assert!(renderer.pointer_over(3).is_none());
    }

    #[test]
    fn pointer_in_corner_hits_nothing() {
        let mut renderer = renderer_with(&["One"]);
        assert_eq!(
            renderer.intersected_index(PointerCoords::new(-0.99, 0.99)),
            None
        );
    }

    #[test]
    fn exit_animation_accelerates_until_offscreen() {
        let mut renderer = renderer_with(&["A", "B"]);

        let mut frames = 0;
        let mut previous_drop = 0.0;
        let mut previous_y = 0.0;
        loop {
            frames += 1;
            let done = renderer.drive_exit_animation(1, 16.0).unwrap();
            let y = renderer.visuals().options[1].glyphs[0].y;
            let drop = previous_y - y;
            if done {
                break;
            }
            assert!(drop > previous_drop);
            previous_drop = drop;
            previous_y = y;
            assert!(frames < 1000, "exit animation never finished");
        }

        assert!(renderer.every_non_chosen_offscreen(0));
        assert!(!renderer.every_non_chosen_offscreen(1));
    }

    #[test]
    fn exit_animation_rejects_unknown_option() {
        let mut renderer = renderer_with(&["A"]);
        assert_eq!(
            renderer.drive_exit_animation(4, 16.0),
            Err(RenderError::UnknownOption { index: 4 })
        );
    }

    #[test]
    fn rotation_is_stored_on_glyph() {
        let mut renderer = renderer_with(&["AB"]);
        let rotation = Rotation {
            x: 0.05,
            y: -0.02,
            z: 0.01,
        };

        renderer.set_glyph_rotation(0, 1, rotation);
        renderer.set_glyph_rotation(5, 5, rotation);

        assert_eq!(renderer.visuals().options[0].glyphs[1].rotation, rotation);
    }

    #[test]
    fn visibility_reports_hidden_spaces() {
        let renderer = renderer_with(&["a b"]);
        assert_eq!(
            renderer.glyph_visibility().unwrap(),
            vec![vec![true, false, true]]
        );
    }
}
