//! Idle glyph motion.

use crate::config::AnimationConfig;
use crate::render::Rotation;

/// Rotation of glyph `glyph` of option `option` at `time_ms`.
///
/// Each axis is a product of two slow oscillations whose periods depend on
/// the glyph and option index, so neighbouring glyphs drift out of phase.
/// The result never exceeds the configured amplitude on any axis.
pub fn idle_rotation(time_ms: f64, option: usize, glyph: usize, config: &AnimationConfig) -> Rotation {
    let t = time_ms;
    let period = config.idle_period_ms;
    let i = option as f64;
    let j = glyph as f64;
    let amplitude = f64::from(config.idle_amplitude);

    let x = (t / ((j + 1.3) * period) + (i + j)).sin() * (t / ((i + 1.1) * period) + (i - j)).cos();
    let y = (t / ((j + 1.2) * period) + (i - j)).sin() * (t / ((i + 1.2) * period) + (i + j)).sin();
    let z = (t / ((j + 1.1) * period) + (i + j)).cos() * (t / ((i + 1.3) * period) + (i - j)).cos();

    Rotation {
        x: (x * amplitude) as f32,
        y: (y * amplitude) as f32,
        z: (z * amplitude) as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_is_bounded_by_amplitude() {
        let config = AnimationConfig::default();
        for step in 0..200 {
            let rotation = idle_rotation(f64::from(step) * 37.0, step as usize % 4, step as usize % 7, &config);
            for axis in [rotation.x, rotation.y, rotation.z] {
                assert!(axis.abs() <= config.idle_amplitude + f32::EPSILON);
            }
        }
    }

    #[test]
    fn rotation_changes_over_time() {
        let config = AnimationConfig::default();
        let early = idle_rotation(0.0, 0, 0, &config);
        let later = idle_rotation(750.0, 0, 0, &config);
        assert_ne!(early, later);
    }

    #[test]
    fn neighbouring_glyphs_are_out_of_phase() {
        let config = AnimationConfig::default();
        let first = idle_rotation(1200.0, 1, 0, &config);
        let second = idle_rotation(1200.0, 1, 1, &config);
        assert_ne!(first, second);
    }

    #[test]
    fn zero_amplitude_holds_still() {
        let config = AnimationConfig {
            idle_amplitude: 0.0,
            ..AnimationConfig::default()
        };
        assert_eq!(idle_rotation(5000.0, 2, 3, &config), Rotation::default());
    }
}
