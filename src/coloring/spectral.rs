//! Spectral-class bucket coloring.
//!
//! Stars get one of seven canonical colors by thresholding the BP-RP index
//! against the O/B/A/F/G/K/M class boundaries.

use super::{Coloring, Rgb};

//  Spectral Type   Color          Temperature Range (K)   RGB (approx.)
//  -------------   ------------   ---------------------   -------------
//  O               Blue           >30,000                 #9bb0ff
//  B               Blue-white     10,000-30,000           #aabfff
//  A               White          7,500-10,000            #cad7ff
//  F               Yellow-white   6,000-7,500             #f8f7ff
//  G               Yellow         5,200-6,000             #fff4ea
//  K               Orange         3,700-5,200             #ffd2a1
//  M               Red            <3,700                  #ffcc6f
const PALETTE: [Rgb; 7] = [
    [0x9b, 0xb0, 0xff], // O
    [0xaa, 0xbf, 0xff], // B
    [0xca, 0xd7, 0xff], // A
    [0xf8, 0xf7, 0xff], // F
    [0xff, 0xf4, 0xea], // G
    [0xff, 0xd2, 0xa1], // K
    [0xff, 0xcc, 0x6f], // M
];

/// Upper BP-RP bound of each class except M, which is open-ended
const CUTS: [f64; 6] = [-0.2, 0.0, 0.3, 0.58, 0.81, 1.4];

/// Spectral-class coloring.
///
/// Missing index: black sentinel.
pub struct SpectralClass;

impl Coloring for SpectralClass {
    fn colorize(&self, values: &[f64]) -> Rgb {
        debug_assert_eq!(values.len(), self.required_fields().len());
        let bp_rp = values[0];

        if !bp_rp.is_finite() {
            return [0, 0, 0];
        }

        let class = CUTS.iter().position(|&cut| bp_rp < cut).unwrap_or(6);
        PALETTE[class]
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["bp_rp"]
    }

    fn name(&self) -> &str {
        "spectral"
    }
}
