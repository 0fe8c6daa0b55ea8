//! The reference instrument and its chain at the reference actuation.
//!
//! Values were computed once from the closed-form model in double precision
//! and are pinned here.

use notchkin_core::types::{ActuationInput, GeometryParameters};

/// `rout=0.58, rin=0.43, g=0.97, a=3, b=3, h=0.51, c=0.51, n=5`.
#[must_use]
pub fn reference_geometry() -> GeometryParameters {
    GeometryParameters {
        rout: 0.58,
        rin: 0.43,
        g: 0.97,
        a: 3.0,
        b: 3.0,
        h: 0.51,
        c: 0.51,
        n: 5,
    }
}

/// `delL = 0.3 mm, alpha = 0`.
#[must_use]
pub const fn reference_actuation() -> ActuationInput {
    ActuationInput::new(0.3, 0.0)
}

/// Pinned outputs for [`reference_geometry`] at [`reference_actuation`].
#[derive(Debug, Clone, Copy)]
pub struct ReferenceChain {
    pub neutral_axis: f64,
    pub curvature: f64,
    pub arc_length: f64,
    /// Translation column of every frame, base to tip.
    pub translations: [[f64; 3]; 12],
}

pub const REFERENCE: ReferenceChain = ReferenceChain {
    neutral_axis: 0.472_957_607_836_575_5,
    curvature: 0.941_557_235_904_107_4,
    arc_length: 0.352_863_849_731_633_76,
    translations: [
        [0.0, 0.0, 3.0],
        [0.0, -0.058_080_779_824_130_3, 3.346_407_806_608_864_3],
        [0.0, -0.224_423_796_036_116_17, 3.828_517_753_568_579],
        [0.0, -0.392_313_680_489_228_16, 4.137_037_983_315_129],
        [0.0, -0.706_806_318_618_951_7, 4.538_528_183_148_458_5],
        [0.0, -0.966_142_728_162_517_5, 4.775_417_127_908_646],
        [0.0, -1.394_388_061_315_009, 5.052_375_490_543_016_5],
        [0.0, -1.716_806_657_841_392_3, 5.191_723_953_320_69],
        [0.0, -2.211_966_313_248_505, 5.313_858_779_054_834],
        [0.0, -2.562_203_285_940_862, 5.340_425_834_289_398],
        [0.0, -3.070_120_286_925_286_4, 5.294_378_900_504_527],
        [0.0, -5.549_950_350_555_123, 5.069_561_517_907_803],
    ],
};
