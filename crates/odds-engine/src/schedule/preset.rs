//! Built-in odds schedules.
//!
//! These are the per-opening "1 in N" odds the game client reports for each
//! treasure opening, from the first opening up to the fiftieth. Later
//! openings keep the fiftieth opening's odds.

use crate::tier::RarityTier;

use super::OddsSchedule;

/// Number of openings each built-in schedule lists explicitly.
pub const STANDARD_OPENINGS: usize = 50;

const RARE: [f64; STANDARD_OPENINGS] = [
    20_000., 583., 187., 88., 51., 33., 23., 17., 13.1, 10.4, 8.5, 7.1, 6.0, 5.2, 4.5, 4.0, 3.6,
    3.2, 2.9, 2.6, 2.4, 2.2, 2.1, 1.9, 1.8, 1.7, 1.6, 1.5, 1.5, 1.4, 1.3, 1.3, 1.2, 1.2, 1.2, 1.1,
    1.1, 1.1, 1.1, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
];

const VERY_RARE: [f64; STANDARD_OPENINGS] = [
    20_000., 3_653., 1_059., 485., 276., 178., 124., 92., 70., 56., 45., 38., 32., 27., 24., 21.,
    18., 16., 14.1, 12.7, 11.5, 10.5, 9.6, 8.8, 8.1, 7.5, 7.0, 6.5, 6.0, 5.7, 5.3, 5.0, 4.7, 4.5,
    4.2, 4.0, 3.8, 3.6, 3.4, 3.3, 3.2, 3.0, 2.9, 2.8, 2.7, 2.6, 2.5, 2.4, 2.3, 2.2,
];

const ULTRA_RARE: [f64; STANDARD_OPENINGS] = [
    100_000., 27_380., 8_614., 4_021., 2_303., 1_486., 1_037., 764., 586., 464., 376., 311.,
    262., 223., 193., 168., 148., 131., 117., 105., 95., 86., 79., 72., 66., 61., 57., 53., 49.,
    46., 43., 40., 38., 35., 33., 32., 30., 28., 27., 26., 24., 23., 22., 21., 20., 19., 19., 18.,
    17., 17.,
];

/// The built-in escalating schedule for a tier.
pub fn standard(tier: RarityTier) -> OddsSchedule {
    let one_in = match tier {
        RarityTier::Rare => RARE,
        RarityTier::VeryRare => VERY_RARE,
        RarityTier::UltraRare => ULTRA_RARE,
    };
    // Constant tables above are all >= 1, so validation cannot fail.
    OddsSchedule {
        one_in: one_in.to_vec(),
    }
}
