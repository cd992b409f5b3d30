//! Series color palette: 14 base colors, each with 5 tints toward white.

use crate::types::Rgb;

/// Interpolation fractions for the tint table, darkest first.
pub const TINT_STEPS: [f64; 5] = [0.0, 0.2, 0.4, 0.6, 0.8];

/// Base colors assigned to series round-robin.
const BASE_COLORS: [Rgb; 14] = [
    Rgb::new(100, 30, 22),
    Rgb::new(120, 40, 31),
    Rgb::new(81, 46, 95),
    Rgb::new(74, 35, 90),
    Rgb::new(21, 67, 96),
    Rgb::new(27, 79, 114),
    Rgb::new(14, 98, 81),
    Rgb::new(11, 83, 69),
    Rgb::new(20, 90, 50),
    Rgb::new(125, 102, 8),
    Rgb::new(126, 81, 9),
    Rgb::new(126, 81, 9),
    Rgb::new(120, 66, 18),
    Rgb::new(110, 44, 0),
];

/// The full tint table, addressable by `(series index, tint index)`.
///
/// Charts currently use only tint 0 (the undiluted base color); the rest
/// of the table is computed so lighter shades stay addressable.
#[derive(Debug, Clone)]
pub struct Palette {
    shades: [[Rgb; 5]; 14],
}

impl Palette {
    pub fn new() -> Palette {
        let mut shades = [[Rgb::new(0, 0, 0); 5]; 14];
        for (base, row) in BASE_COLORS.iter().zip(shades.iter_mut()) {
            for (step, slot) in TINT_STEPS.iter().zip(row.iter_mut()) {
                *slot = base.towards_white(*step);
            }
        }
        Palette { shades }
    }

    /// The color for a series: tint 0 of the base color at
    /// `series_index % 14`.
    pub fn series_color(&self, series_index: usize) -> Rgb {
        self.shade(series_index, 0)
    }

    /// A specific tint. `series_index` wraps around; `tint` must be < 5.
    pub fn shade(&self, series_index: usize, tint: usize) -> Rgb {
        self.shades[series_index % self.shades.len()][tint]
    }
}

impl Default for Palette {
    fn default() -> Palette {
        Palette::new()
    }
}
