//! Vimshottari tables.

use crate::graha::Graha;

/// Rulership order of the 120-year cycle.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Period lengths in years, aligned with [`VIMSHOTTARI_SEQUENCE`].
pub const VIMSHOTTARI_YEARS: [u32; 9] = [7, 20, 6, 10, 7, 18, 16, 19, 17];

pub const VIMSHOTTARI_TOTAL_YEARS: u32 = 120;

/// Lord of each nakshatra (Ashwini..Revati): the 9-cycle three times.
pub const NAKSHATRA_LORDS: [Graha; 27] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Position of a graha in [`VIMSHOTTARI_SEQUENCE`].
pub const fn sequence_position(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Mahadasha length of a graha in years.
pub const fn period_years(graha: Graha) -> u32 {
    VIMSHOTTARI_YEARS[sequence_position(graha)]
}

/// Lord of a nakshatra index. Indices past 26 wrap.
pub const fn nakshatra_lord(nakshatra_index: u8) -> Graha {
    NAKSHATRA_LORDS[(nakshatra_index % 27) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_sum_to_120() {
        assert_eq!(VIMSHOTTARI_YEARS.iter().sum::<u32>(), VIMSHOTTARI_TOTAL_YEARS);
    }

    #[test]
    fn sequence_position_roundtrip() {
        for (i, g) in VIMSHOTTARI_SEQUENCE.iter().enumerate() {
            assert_eq!(sequence_position(*g), i);
        }
    }

    #[test]
    fn lords_repeat_every_nine() {
        for i in 0..27 {
            assert_eq!(NAKSHATRA_LORDS[i], VIMSHOTTARI_SEQUENCE[i % 9]);
        }
    }

    #[test]
    fn named_lengths() {
        assert_eq!(period_years(Graha::Shukra), 20);
        assert_eq!(period_years(Graha::Buddh), 17);
        assert_eq!(period_years(Graha::Ketu), 7);
    }
}
