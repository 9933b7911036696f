//! Ashtakavarga: benefic points (bindus) per sign.
//!
//! For each of the seven classical grahas, eight references (the seven
//! grahas and the lagna) each grant one bindu to the signs at fixed
//! offsets from themselves. The per-graha chart (bhinna, BAV) therefore
//! holds 0..=8 bindus per sign, and its total is fixed by the table
//! alone: 48, 49, 39, 54, 56, 52, 39 for Surya..Shani, 337 overall.

use serde::Serialize;

use crate::graha::Graha;

/// Number of references that can grant a bindu: seven grahas and the lagna.
pub const REFERENCES: usize = 8;

/// Row of the lagna among the references.
pub const LAGNA_REFERENCE: usize = 7;

/// Highest possible sarvashtakavarga value in one sign.
pub const SAV_MAX_PER_SIGN: f64 = 56.0;

type OffsetRow = [&'static [u8]; REFERENCES];

/// Favourable 1-based offsets (1 = the reference's own sign), per target
/// graha then per reference in graha order with the lagna last.
const CLASSICAL_OFFSETS: [OffsetRow; 7] = [
    // Surya
    [
        &[1, 2, 4, 7, 8, 9, 10, 11],
        &[3, 6, 10, 11],
        &[1, 2, 4, 7, 8, 9, 10, 11],
        &[3, 5, 6, 9, 10, 11, 12],
        &[5, 6, 9, 11],
        &[6, 7, 12],
        &[1, 2, 4, 7, 8, 9, 10, 11],
        &[3, 4, 6, 10, 11, 12],
    ],
    // Chandra
    [
        &[3, 6, 7, 8, 10, 11],
        &[1, 3, 6, 7, 10, 11],
        &[2, 3, 5, 6, 9, 10, 11],
        &[1, 3, 4, 5, 7, 8, 10, 11],
        &[1, 4, 7, 8, 10, 11, 12],
        &[3, 4, 5, 7, 9, 10, 11],
        &[3, 5, 6, 11],
        &[3, 6, 10, 11],
    ],
    // Mangal
    [
        &[3, 5, 6, 10, 11],
        &[3, 6, 11],
        &[1, 2, 4, 7, 8, 10, 11],
        &[3, 5, 6, 11],
        &[6, 10, 11, 12],
        &[6, 8, 11, 12],
        &[1, 4, 7, 8, 9, 10, 11],
        &[1, 3, 6, 10, 11],
    ],
    // Buddh
    [
        &[5, 6, 9, 11, 12],
        &[2, 4, 6, 8, 10, 11],
        &[1, 2, 4, 7, 8, 9, 10, 11],
        &[1, 3, 5, 6, 9, 10, 11, 12],
        &[6, 8, 11, 12],
        &[1, 2, 3, 4, 5, 8, 9, 11],
        &[1, 2, 4, 7, 8, 9, 10, 11],
        &[1, 2, 4, 6, 8, 10, 11],
    ],
    // Guru
    [
        &[1, 2, 3, 4, 7, 8, 9, 10, 11],
        &[2, 5, 7, 9, 11],
        &[1, 2, 4, 7, 8, 10, 11],
        &[1, 2, 4, 5, 6, 9, 10, 11],
        &[1, 2, 3, 4, 7, 8, 10, 11],
        &[2, 5, 6, 9, 10, 11],
        &[3, 5, 6, 12],
        &[1, 2, 4, 5, 6, 7, 9, 10, 11],
    ],
    // Shukra
    [
        &[8, 11, 12],
        &[1, 2, 3, 4, 5, 8, 9, 11, 12],
        &[3, 4, 6, 9, 11, 12],
        &[3, 5, 6, 9, 11],
        &[5, 8, 9, 10, 11],
        &[1, 2, 3, 4, 5, 8, 9, 10, 11],
        &[3, 4, 5, 8, 9, 10, 11],
        &[1, 2, 3, 4, 5, 8, 9, 11],
    ],
    // Shani
    [
        &[1, 2, 4, 7, 8, 10, 11],
        &[3, 6, 11],
        &[3, 5, 6, 10, 11, 12],
        &[6, 8, 9, 10, 11, 12],
        &[5, 6, 11, 12],
        &[6, 11, 12],
        &[3, 5, 6, 11],
        &[1, 3, 4, 6, 10, 11],
    ],
];

/// Signs sharing a trine, by element.
const TRIKONA_GROUPS: [[usize; 3]; 4] = [[0, 4, 8], [1, 5, 9], [2, 6, 10], [3, 7, 11]];

/// Sign pairs owned by one lord that fall in different trines after the
/// trikona step has left both non-zero: Buddh and Guru.
const EKADHIPATYA_PAIRS: [[usize; 2]; 2] = [[2, 5], [8, 11]];

/// Immutable bindu table: `offsets[target][reference]` as a bitmask where
/// bit `k` set means offset `k` (1-based) is favourable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinduTable {
    masks: [[u16; REFERENCES]; 7],
}

impl Default for BinduTable {
    fn default() -> Self {
        Self::classical()
    }
}

impl BinduTable {
    pub fn classical() -> Self {
        Self::from_offsets(&CLASSICAL_OFFSETS)
    }

    /// Build a table from 1-based offset lists. Offsets outside 1..=12 are ignored.
    pub fn from_offsets(rows: &[OffsetRow; 7]) -> Self {
        let mut masks = [[0u16; REFERENCES]; 7];
        for (target, row) in rows.iter().enumerate() {
            for (reference, offsets) in row.iter().enumerate() {
                masks[target][reference] = offsets
                    .iter()
                    .filter(|o| (1..=12).contains(*o))
                    .fold(0, |m, &o| m | (1 << o));
            }
        }
        Self { masks }
    }

    pub fn grants(&self, target: usize, reference: usize, offset: u8) -> bool {
        self.masks[target][reference] & (1 << offset) != 0
    }

    /// Bindus the table grants to `target` regardless of chart.
    pub fn row_total(&self, target: usize) -> u32 {
        self.masks[target].iter().map(|m| m.count_ones()).sum()
    }
}

/// Per-graha (bhinna) ashtakavarga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bhinna {
    pub graha: Graha,
    /// Bindus per sign, indexed from Mesha.
    pub bindus: [u8; 12],
}

impl Bhinna {
    pub fn total(&self) -> u8 {
        self.bindus.iter().sum()
    }
}

/// Sarvashtakavarga with its two classical reductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sarva {
    pub bindus: [u8; 12],
    pub after_trikona: [u8; 12],
    pub after_ekadhipatya: [u8; 12],
}

impl Sarva {
    pub fn total(&self) -> u16 {
        self.bindus.iter().map(|&b| b as u16).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ashtakavarga {
    /// Bhinna charts for Surya..Shani.
    pub bhinna: Vec<Bhinna>,
    pub sarva: Sarva,
    /// Sign index of the lagna the chart was cast from.
    pub lagna_sign: u8,
}

impl Ashtakavarga {
    /// Bindus of `graha` in the sign `house` counts from the lagna (whole-sign).
    pub fn bindus_in_house(&self, graha: Graha, house: u8) -> Option<u8> {
        let sign = house_sign(self.lagna_sign, house);
        self.bhinna
            .get(graha.index() as usize)
            .filter(|_| !graha.is_node())
            .map(|b| b.bindus[sign])
    }

    /// Mean strength over `houses` as a 0..=100 percentage.
    ///
    /// Classical grahas use their own bhinna chart out of 8; the nodes,
    /// which have none, use the sarvashtakavarga out of 56.
    pub fn percent(&self, graha: Graha, houses: &[u8]) -> f64 {
        if houses.is_empty() {
            return 0.0;
        }
        let (row, max) = match self.bhinna.get(graha.index() as usize) {
            Some(b) if !graha.is_node() => (&b.bindus, REFERENCES as f64),
            _ => (&self.sarva.bindus, SAV_MAX_PER_SIGN),
        };
        let sum: f64 = houses
            .iter()
            .map(|&h| row[house_sign(self.lagna_sign, h)] as f64 / max)
            .sum();
        100.0 * sum / houses.len() as f64
    }
}

fn house_sign(lagna_sign: u8, house: u8) -> usize {
    (lagna_sign as usize + (house.max(1) as usize - 1)) % 12
}

/// Casts ashtakavarga from sign positions using a borrowed [`BinduTable`].
#[derive(Debug, Clone, Copy)]
pub struct AshtakavargaCalculator<'t> {
    table: &'t BinduTable,
}

impl<'t> AshtakavargaCalculator<'t> {
    pub fn new(table: &'t BinduTable) -> Self {
        Self { table }
    }

    /// Bhinna chart of one classical graha.
    ///
    /// `graha_signs` holds the sign index of Surya..Shani.
    pub fn bhinna(&self, graha: Graha, graha_signs: &[u8; 7], lagna_sign: u8) -> Bhinna {
        let mut bindus = [0u8; 12];
        if graha.is_node() {
            return Bhinna { graha, bindus };
        }
        let target = graha.index() as usize;
        for (reference, &from) in graha_signs.iter().chain(std::iter::once(&lagna_sign)).enumerate() {
            for (sign, slot) in bindus.iter_mut().enumerate() {
                let offset = ((sign as i16 - from as i16).rem_euclid(12) + 1) as u8;
                if self.table.grants(target, reference, offset) {
                    *slot += 1;
                }
            }
        }
        Bhinna { graha, bindus }
    }

    pub fn compute(&self, graha_signs: &[u8; 7], lagna_sign: u8) -> Ashtakavarga {
        let bhinna: Vec<Bhinna> = crate::graha::SAPTA_GRAHAS
            .into_iter()
            .map(|g| self.bhinna(g, graha_signs, lagna_sign))
            .collect();
        let mut bindus = [0u8; 12];
        for b in &bhinna {
            for (acc, v) in bindus.iter_mut().zip(b.bindus) {
                *acc += v;
            }
        }
        let after_trikona = trikona_sodhana(&bindus);
        Ashtakavarga {
            bhinna,
            sarva: Sarva {
                bindus,
                after_trikona,
                after_ekadhipatya: ekadhipatya_sodhana(&after_trikona),
            },
            lagna_sign: lagna_sign % 12,
        }
    }
}

/// Remove the smallest value of each trine from all three of its signs.
pub fn trikona_sodhana(bindus: &[u8; 12]) -> [u8; 12] {
    let mut out = *bindus;
    for group in TRIKONA_GROUPS {
        let floor = group.iter().map(|&i| out[i]).min().unwrap_or(0);
        group.iter().for_each(|&i| out[i] -= floor);
    }
    out
}

/// Remove the smaller value of each same-lord pair from both signs.
pub fn ekadhipatya_sodhana(after_trikona: &[u8; 12]) -> [u8; 12] {
    let mut out = *after_trikona;
    for [a, b] in EKADHIPATYA_PAIRS {
        let floor = out[a].min(out[b]);
        out[a] -= floor;
        out[b] -= floor;
    }
    out
}
