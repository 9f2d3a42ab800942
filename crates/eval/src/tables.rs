// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Prime product lookup tables.
//!
//! Two tables resolve a 5 cards equivalence class key to its canonical rank,
//! one for flush hands keyed by the prime product of the ranks present, and
//! one for all other hands keyed by the prime product of the cards rank
//! multiset. Together they cover the 7462 distinct hand classes:
//!
//! ```text
//! Straight Flush      10
//! Four of a Kind     156     [(13 choose 2) * (2 choose 1)]
//! Full House         156     [(13 choose 2) * (2 choose 1)]
//! Flush             1277     [(13 choose 5) - 10 straight flushes]
//! Straight            10
//! Three of a Kind    858     [(13 choose 3) * (3 choose 1)]
//! Two Pair           858     [(13 choose 3) * (3 choose 2)]
//! One Pair          2860     [(13 choose 4) * (4 choose 1)]
//! High Card         1277     [(13 choose 5) - 10 straights]
//! ------------------------
//! TOTAL             7462
//! ```
use ahash::AHashMap;
use anyhow::{Context, Result};
use std::path::Path;

use handrank_cards::PRIMES;

/// The number of distinct 5 cards hand classes.
pub const HAND_CLASSES: u16 = 7462;

/// The flush table file name.
pub const FLUSH_FILE: &str = "flush.csv";

/// The unsuited table file name.
pub const UNSUITED_FILE: &str = "unsuited.csv";

/// Immutable mappings from equivalence class key to hand rank.
///
/// Built once with [LookupTables::generate] or loaded from persisted files
/// with [LookupTables::load_csv], then only read for the life of the process.
#[derive(Debug, Clone)]
pub struct LookupTables {
    flush: AHashMap<u32, u16>,
    unsuited: AHashMap<u32, u16>,
}

impl LookupTables {
    /// Generates both complete tables.
    ///
    /// Classes are ranked best to worst in the canonical order: straight
    /// flushes, four of a kind, full houses, flushes, straights, three of a
    /// kind, two pairs, one pair, high cards.
    pub fn generate() -> Self {
        let mut flush = AHashMap::with_capacity(1287);
        let mut unsuited = AHashMap::with_capacity(6175);

        let straights = straight_patterns();
        let high_cards = high_card_patterns();

        let mut rank = 1u16;
        let mut insert = |table: &mut AHashMap<u32, u16>, key: u32| {
            table.insert(key, rank);
            rank += 1;
        };

        // Straight flushes.
        for &bits in &straights {
            insert(&mut flush, prime_product_from_rank_bits(bits as u32));
        }

        // Four of a kind, quads rank first then the kicker.
        for q in (0..13usize).rev() {
            for k in (0..13usize).rev() {
                if k != q {
                    insert(&mut unsuited, PRIMES[q].pow(4) * PRIMES[k]);
                }
            }
        }

        // Full houses, trips rank first then the pair.
        for t in (0..13usize).rev() {
            for p in (0..13usize).rev() {
                if p != t {
                    insert(&mut unsuited, PRIMES[t].pow(3) * PRIMES[p].pow(2));
                }
            }
        }

        // Flushes.
        for &bits in &high_cards {
            insert(&mut flush, prime_product_from_rank_bits(bits as u32));
        }

        // Straights.
        for &bits in &straights {
            insert(&mut unsuited, prime_product_from_rank_bits(bits as u32));
        }

        // Three of a kind, trips rank first then the two kickers.
        for t in (0..13usize).rev() {
            for k1 in (0..13usize).rev() {
                if k1 == t {
                    continue;
                }
                for k2 in (0..k1).rev() {
                    if k2 != t {
                        insert(&mut unsuited, PRIMES[t].pow(3) * PRIMES[k1] * PRIMES[k2]);
                    }
                }
            }
        }

        // Two pairs, high pair then low pair then the kicker.
        for p1 in (0..13usize).rev() {
            for p2 in (0..p1).rev() {
                for k in (0..13usize).rev() {
                    if k != p1 && k != p2 {
                        insert(
                            &mut unsuited,
                            PRIMES[p1].pow(2) * PRIMES[p2].pow(2) * PRIMES[k],
                        );
                    }
                }
            }
        }

        // One pair, the pair rank then the three kickers.
        for p in (0..13usize).rev() {
            for k1 in (0..13usize).rev() {
                if k1 == p {
                    continue;
                }
                for k2 in (0..k1).rev() {
                    if k2 == p {
                        continue;
                    }
                    for k3 in (0..k2).rev() {
                        if k3 != p {
                            insert(
                                &mut unsuited,
                                PRIMES[p].pow(2) * PRIMES[k1] * PRIMES[k2] * PRIMES[k3],
                            );
                        }
                    }
                }
            }
        }

        // High cards.
        for &bits in &high_cards {
            insert(&mut unsuited, prime_product_from_rank_bits(bits as u32));
        }

        Self { flush, unsuited }
    }

    /// Creates tables from explicit mappings, for callers that source the
    /// tables elsewhere.
    pub fn from_maps(flush: AHashMap<u32, u16>, unsuited: AHashMap<u32, u16>) -> Self {
        Self { flush, unsuited }
    }

    /// Looks up a flush hand key.
    #[inline]
    pub fn flush_rank(&self, key: u32) -> Option<u16> {
        self.flush.get(&key).copied()
    }

    /// Looks up a non flush hand key.
    #[inline]
    pub fn unsuited_rank(&self, key: u32) -> Option<u16> {
        self.unsuited.get(&key).copied()
    }

    /// The number of entries in the flush and unsuited tables.
    pub fn len(&self) -> (usize, usize) {
        (self.flush.len(), self.unsuited.len())
    }

    /// Checks if both tables are empty.
    pub fn is_empty(&self) -> bool {
        self.flush.is_empty() && self.unsuited.is_empty()
    }

    /// Loads both tables from `flush.csv` and `unsuited.csv` in the given
    /// directory.
    ///
    /// Each row holds a decimal prime product key and its decimal rank.
    pub fn load_csv<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(Self {
            flush: load_table(&dir.join(FLUSH_FILE))?,
            unsuited: load_table(&dir.join(UNSUITED_FILE))?,
        })
    }

    /// Saves both tables to `flush.csv` and `unsuited.csv` in the given
    /// directory.
    pub fn save_csv<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        save_table(&self.flush, &dir.join(FLUSH_FILE))?;
        save_table(&self.unsuited, &dir.join(UNSUITED_FILE))
    }
}

/// Multiplies the rank primes for each set bit in a 13 bits rank mask.
pub(crate) fn prime_product_from_rank_bits(bits: u32) -> u32 {
    PRIMES
        .iter()
        .enumerate()
        .filter(|(i, _)| bits & (1 << i) != 0)
        .map(|(_, &p)| p)
        .product()
}

/// The 10 straight rank patterns from ace high down to the wheel.
fn straight_patterns() -> Vec<u16> {
    let mut patterns = (4..=12u16)
        .rev()
        .map(|high| 0b11111 << (high - 4))
        .collect::<Vec<_>>();

    // The wheel A-5-4-3-2.
    patterns.push(0b1_0000_0000_1111);
    patterns
}

/// All 5 ranks patterns that are not straights, strongest first.
///
/// For masks with the same number of bits the integer order matches the high
/// card order: the highest differing bit decides both.
fn high_card_patterns() -> Vec<u16> {
    let straights = straight_patterns();
    let mut patterns = (0u16..1 << 13)
        .filter(|bits| bits.count_ones() == 5 && !straights.contains(bits))
        .collect::<Vec<_>>();
    patterns.sort_unstable_by(|a, b| b.cmp(a));
    patterns
}

fn load_table(path: &Path) -> Result<AHashMap<u32, u16>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("cannot open lookup table {}", path.display()))?;

    let mut table = AHashMap::default();
    for row in reader.deserialize() {
        let (key, rank): (u32, u16) =
            row.with_context(|| format!("malformed lookup table {}", path.display()))?;
        table.insert(key, rank);
    }

    Ok(table)
}

fn save_table(table: &AHashMap<u32, u16>, path: &Path) -> Result<()> {
    let mut rows = table.iter().collect::<Vec<_>>();
    rows.sort_unstable_by_key(|&(_, &rank)| rank);

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("cannot create lookup table {}", path.display()))?;

    for (key, rank) in rows {
        writer.serialize((key, rank))?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tables_sizes() {
        let tables = LookupTables::generate();
        assert_eq!(tables.len(), (1287, 6175));
        assert!(!tables.is_empty());
    }

    #[test]
    fn generated_ranks_cover_all_classes() {
        let tables = LookupTables::generate();

        let mut seen = vec![false; HAND_CLASSES as usize + 1];
        for &rank in tables.flush.values().chain(tables.unsuited.values()) {
            assert!((1..=HAND_CLASSES).contains(&rank));
            assert!(!seen[rank as usize], "duplicate rank {rank}");
            seen[rank as usize] = true;
        }

        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn known_keys() {
        let tables = LookupTables::generate();

        // Royal flush: A K Q J T rank bits.
        let royal = prime_product_from_rank_bits(0b1_1111_0000_0000);
        assert_eq!(tables.flush_rank(royal), Some(1));

        // 7-5-4-3-2 unsuited: 13 * 7 * 5 * 3 * 2.
        assert_eq!(tables.unsuited_rank(13 * 7 * 5 * 3 * 2), Some(HAND_CLASSES));

        // Four aces with a king kicker: 41^4 * 37.
        assert_eq!(tables.unsuited_rank(41u32.pow(4) * 37), Some(11));

        // The same rank pattern key resolves through each table to its own
        // band, straight flush in one and straight in the other.
        let wheel = prime_product_from_rank_bits(0b1_0000_0000_1111);
        assert_eq!(tables.flush_rank(wheel), Some(10));
        assert_eq!(tables.unsuited_rank(wheel), Some(1609));
    }

    #[test]
    fn straight_patterns_order() {
        let patterns = straight_patterns();
        assert_eq!(patterns.len(), 10);
        assert_eq!(patterns[0], 0b1_1111_0000_0000);
        assert_eq!(patterns[8], 0b11111);
        assert_eq!(patterns[9], 0b1_0000_0000_1111);
    }

    #[test]
    fn high_card_patterns_order() {
        let patterns = high_card_patterns();
        assert_eq!(patterns.len(), 1277);

        // Strongest non straight pattern is A K Q J 9, weakest is 7 5 4 3 2.
        assert_eq!(patterns[0], 0b1_1110_1000_0000);
        assert_eq!(patterns[1276], 0b0_0000_0010_1111);
    }

    #[test]
    fn csv_round_trip() {
        let dir = std::env::temp_dir().join(format!("handrank-tables-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let tables = LookupTables::generate();
        tables.save_csv(&dir).unwrap();

        let loaded = LookupTables::load_csv(&dir).unwrap();
        assert_eq!(loaded.len(), tables.len());
        assert_eq!(loaded.flush, tables.flush);
        assert_eq!(loaded.unsuited, tables.unsuited);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_missing_directory() {
        let dir = std::env::temp_dir().join("handrank-tables-missing");
        assert!(LookupTables::load_csv(&dir).is_err());
    }
}
