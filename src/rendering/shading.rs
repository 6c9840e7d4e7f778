/// Static directional lighting, applied once per face before rasterization
use glam::Vec3;

pub const DEFAULT_LIGHT_DIR: Vec3 = Vec3::new(0.4, 1.8, 0.5);
pub const DEFAULT_MIN_BRIGHTNESS: f32 = 0.55;

/// Half-Lambert directional light with a brightness floor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShadingConfig {
    /// Unit direction towards the light (world space)
    light_dir: Vec3,
    /// Factor applied to faces pointing straight away from the light
    pub min_brightness: f32,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LIGHT_DIR, DEFAULT_MIN_BRIGHTNESS)
    }
}

impl ShadingConfig {
    /// `light_dir` need not be normalized. A zero direction falls back to
    /// straight up.
    pub fn new(light_dir: Vec3, min_brightness: f32) -> Self {
        let light_dir = light_dir.try_normalize().unwrap_or(Vec3::Y);
        Self {
            light_dir,
            min_brightness: min_brightness.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn light_dir(&self) -> Vec3 {
        self.light_dir
    }

    /// Brightness factor in [min_brightness, 1] for a surface normal.
    ///
    /// The cosine term is remapped from [-1, 1] to [0, 1] and squared, so
    /// surfaces facing away keep a gradient instead of going flat.
    #[inline]
    pub fn shading_factor(&self, normal: Vec3) -> f32 {
        let half_lambert = (normal.dot(self.light_dir) * 0.5 + 0.5).clamp(0.0, 1.0);
        self.min_brightness + half_lambert * half_lambert * (1.0 - self.min_brightness)
    }

    /// Scale the RGB channels of an ARGB color by `factor`.
    /// Channels are clamped to [0, 255]; alpha is forced opaque.
    #[inline]
    pub fn shade_color(&self, base: u32, factor: f32) -> u32 {
        let scale = |shift: u32| -> u32 {
            let channel = ((base >> shift) & 0xFF) as f32;
            ((channel * factor) as i32).clamp(0, 255) as u32
        };
        0xFF000000 | (scale(16) << 16) | (scale(8) << 8) | scale(0)
    }

    /// Lit color of a face with this normal and base color
    #[inline]
    pub fn shade_face(&self, base: u32, normal: Vec3) -> u32 {
        self.shade_color(base, self.shading_factor(normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_light_direction_points_up() {
        let cfg = ShadingConfig::new(Vec3::ZERO, 0.5);
        assert_eq!(cfg.light_dir(), Vec3::Y);
    }

    #[test]
    fn shade_color_truncates_and_keeps_alpha() {
        let cfg = ShadingConfig::default();
        assert_eq!(cfg.shade_color(0x00FF8001, 0.5), 0xFF7F4000);
        assert_eq!(cfg.shade_color(0xFF102030, 1.0), 0xFF102030);
    }

    #[test]
    fn overbright_factor_saturates() {
        let cfg = ShadingConfig::default();
        assert_eq!(cfg.shade_color(0xFFC0C0C0, 2.0), 0xFFFFFFFF);
        assert_eq!(cfg.shade_color(0xFF808080, -1.0), 0xFF000000);
    }
}
