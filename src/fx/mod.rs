//! Background particle layer.
//!
//! Purely cosmetic: a field of drifting glyphs painted under the content
//! each frame. Presets only vary glyph set, motion, and color role; the
//! engine is one struct stepped on a fixed cadence. All randomness comes
//! from a seedable RNG so a fixed seed replays the same field.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::render::FrameBuffer;
use crate::theme::{ColorRole, Theme};
use crate::types::Attr;

/// Particle step cadence in milliseconds.
pub const FRAME_MS: u64 = 100;

/// Terminals smaller than this skip the layer entirely.
const MIN_WIDTH: u16 = 20;
const MIN_HEIGHT: u16 = 10;

// =============================================================================
// Presets
// =============================================================================

/// A named particle look: glyphs, motion, density, color.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    glyphs: &'static [char],
    /// One particle per this many screen cells.
    cells_per_particle: u32,
    /// Columns per step; sign is direction.
    drift: f32,
    /// Rows per step; negative rises.
    speed: f32,
    /// Random per-particle speed spread, as a fraction of `speed`.
    jitter: f32,
    role: ColorRole,
}

const PRESETS: [Preset; 12] = [
    Preset {
        name: "starfield",
        glyphs: &['·', '✦', '✧', '.'],
        cells_per_particle: 120,
        drift: 0.0,
        speed: 0.05,
        jitter: 0.8,
        role: ColorRole::Muted,
    },
    Preset {
        name: "snow",
        glyphs: &['❄', '❅', '*', '·'],
        cells_per_particle: 90,
        drift: 0.15,
        speed: 0.3,
        jitter: 0.5,
        role: ColorRole::Bright,
    },
    Preset {
        name: "rain",
        glyphs: &['│', '╵', '┆', '.'],
        cells_per_particle: 60,
        drift: -0.05,
        speed: 0.9,
        jitter: 0.3,
        role: ColorRole::Secondary,
    },
    Preset {
        name: "embers",
        glyphs: &['✸', '·', '˙', '*'],
        cells_per_particle: 140,
        drift: 0.1,
        speed: -0.25,
        jitter: 0.6,
        role: ColorRole::Error,
    },
    Preset {
        name: "fireflies",
        glyphs: &['°', '·', 'ᵒ'],
        cells_per_particle: 160,
        drift: 0.2,
        speed: -0.05,
        jitter: 1.0,
        role: ColorRole::Accent,
    },
    Preset {
        name: "bubbles",
        glyphs: &['○', 'o', '°', '·'],
        cells_per_particle: 110,
        drift: 0.05,
        speed: -0.35,
        jitter: 0.5,
        role: ColorRole::Secondary,
    },
    Preset {
        name: "ash",
        glyphs: &['.', '·', '˙'],
        cells_per_particle: 100,
        drift: -0.2,
        speed: 0.2,
        jitter: 0.7,
        role: ColorRole::Muted,
    },
    Preset {
        name: "petals",
        glyphs: &['❀', '✿', '·', ','],
        cells_per_particle: 130,
        drift: 0.35,
        speed: 0.25,
        jitter: 0.4,
        role: ColorRole::Primary,
    },
    Preset {
        name: "matrix",
        glyphs: &['0', '1', 'ｱ', 'ｶ', 'ﾊ', '7'],
        cells_per_particle: 50,
        drift: 0.0,
        speed: 0.7,
        jitter: 0.6,
        role: ColorRole::Success,
    },
    Preset {
        name: "dust",
        glyphs: &['.', '·'],
        cells_per_particle: 180,
        drift: 0.1,
        speed: 0.05,
        jitter: 1.0,
        role: ColorRole::Muted,
    },
    Preset {
        name: "comets",
        glyphs: &['✦', '-', '~', '·'],
        cells_per_particle: 170,
        drift: 0.8,
        speed: 0.1,
        jitter: 0.5,
        role: ColorRole::Bright,
    },
    Preset {
        name: "aurora",
        glyphs: &['▁', '▂', '▄', '░'],
        cells_per_particle: 80,
        drift: 0.25,
        speed: -0.02,
        jitter: 0.9,
        role: ColorRole::Accent,
    },
];

/// Look up a preset by name.
pub fn preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

// =============================================================================
// Field
// =============================================================================

#[derive(Debug, Clone)]
struct Particle {
    x: f32,
    y: f32,
    glyph: char,
    speed_scale: f32,
}

/// A live particle field sized to the terminal.
#[derive(Debug)]
pub struct ParticleField {
    preset: &'static Preset,
    rng: StdRng,
    width: u16,
    height: u16,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Build a field, or `None` when the layer should not run: unknown
    /// preset name, or a terminal too small to bother with.
    pub fn create(name: &str, width: u16, height: u16, seed: u64) -> Option<Self> {
        let Some(preset) = preset(name) else {
            log::debug!("unknown effect preset {name:?}, background disabled");
            return None;
        };
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            log::debug!("terminal {width}x{height} too small for background effects");
            return None;
        }
        let mut field = Self {
            preset,
            rng: StdRng::seed_from_u64(seed),
            width,
            height,
            particles: Vec::new(),
        };
        field.populate();
        Some(field)
    }

    fn target_count(&self) -> usize {
        (self.width as u32 * self.height as u32 / self.preset.cells_per_particle).max(1) as usize
    }

    fn spawn(&mut self) -> Particle {
        let glyph = self.preset.glyphs[self.rng.gen_range(0..self.preset.glyphs.len())];
        Particle {
            x: self.rng.gen_range(0.0..self.width as f32),
            y: self.rng.gen_range(0.0..self.height as f32),
            glyph,
            speed_scale: 1.0 + self.rng.gen_range(-self.preset.jitter..=self.preset.jitter),
        }
    }

    fn populate(&mut self) {
        let target = self.target_count();
        while self.particles.len() < target {
            let p = self.spawn();
            self.particles.push(p);
        }
        self.particles.truncate(target);
    }

    /// Advance every particle one frame, wrapping at the edges.
    pub fn step(&mut self) {
        let w = self.width as f32;
        let h = self.height as f32;
        let preset = self.preset;
        for p in &mut self.particles {
            p.x = (p.x + preset.drift * p.speed_scale).rem_euclid(w);
            p.y = (p.y + preset.speed * p.speed_scale).rem_euclid(h);
        }
    }

    /// Re-fit to a new terminal size, keeping particles that still fit.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.particles
            .retain(|p| p.x < width as f32 && p.y < height as f32);
        self.populate();
    }

    /// Paint the field into the frame. Runs before content, so text simply
    /// overwrites whatever lands under it.
    pub fn draw(&self, frame: &mut FrameBuffer, theme: &Theme) {
        let color = theme.role(self.preset.role).dim(0.5);
        for p in &self.particles {
            let x = p.x as u16;
            let y = p.y as u16;
            if let Some(cell) = frame.get_mut(x, y) {
                cell.glyph = p.glyph as u32;
                cell.fg = color;
                cell.attrs = Attr::DIM;
            }
        }
    }

    pub fn preset_name(&self) -> &'static str {
        self.preset.name
    }

    #[cfg(test)]
    fn positions(&self) -> Vec<(u16, u16)> {
        self.particles.iter().map(|p| (p.x as u16, p.y as u16)).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::presets::preset as theme_preset;

    #[test]
    fn test_twelve_presets_all_resolve() {
        let names = preset_names();
        assert_eq!(names.len(), 12);
        for name in names {
            assert!(preset(name).is_some(), "preset {name} must resolve");
        }
    }

    #[test]
    fn test_unknown_preset_is_none() {
        assert!(preset("lava-lamp").is_none());
        assert!(ParticleField::create("lava-lamp", 80, 24, 7).is_none());
    }

    #[test]
    fn test_tiny_terminal_disables_layer() {
        assert!(ParticleField::create("snow", 19, 24, 7).is_none());
        assert!(ParticleField::create("snow", 80, 9, 7).is_none());
        assert!(ParticleField::create("snow", 20, 10, 7).is_some());
    }

    #[test]
    fn test_fixed_seed_replays() {
        let mut a = ParticleField::create("rain", 80, 24, 42).unwrap();
        let mut b = ParticleField::create("rain", 80, 24, 42).unwrap();
        for _ in 0..10 {
            a.step();
            b.step();
        }
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn test_particles_stay_in_bounds() {
        let mut field = ParticleField::create("comets", 40, 15, 3).unwrap();
        for _ in 0..200 {
            field.step();
            for (x, y) in field.positions() {
                assert!(x < 40 && y < 15);
            }
        }
    }

    #[test]
    fn test_resize_refits() {
        let mut field = ParticleField::create("snow", 100, 40, 5).unwrap();
        field.resize(30, 12);
        for (x, y) in field.positions() {
            assert!(x < 30 && y < 12);
        }
        assert!(!field.positions().is_empty());
    }

    #[test]
    fn test_draw_writes_dim_cells() {
        let field = ParticleField::create("matrix", 40, 20, 11).unwrap();
        let theme = theme_preset("midnight").unwrap().dark;
        let mut frame = FrameBuffer::new(40, 20);
        field.draw(&mut frame, &theme);

        let drawn = (0..20u16)
            .flat_map(|y| (0..40u16).map(move |x| (x, y)))
            .filter(|&(x, y)| !frame.get(x, y).unwrap().is_blank())
            .count();
        assert!(drawn > 0);
    }
}
