// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator classifies each 5 cards combination as flush or non flush
//! with a single AND of the one hot suit masks, computes the combination
//! prime product key, and resolves the key to a [HandRank] through the
//! [LookupTables]. Hands of 6 or 7 cards score as the best of their 5 cards
//! combinations.
use handrank_cards::Card;

use crate::{combos, tables, tables::LookupTables};

/// An error evaluating a hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The hand size has no combinations table.
    #[error("unsupported hand size {0}, expected 5, 6, or 7 cards")]
    UnsupportedHandSize(usize),
    /// A key has no entry in its lookup table.
    ///
    /// This never happens with complete tables, it means the tables are
    /// corrupt or were built for a different encoding.
    #[error("no rank entry for key {key} (flush: {is_flush}), lookup tables are incomplete")]
    LookupMiss {
        /// The equivalence class key with no entry.
        key: u32,
        /// Whether the flush table was queried.
        is_flush: bool,
    },
}

/// The canonical rank of a 5 cards hand class, 1 to 7462.
///
/// Lower is better: 1 is a royal flush and 7462 the 7-5-4-3-2 unsuited high
/// card hand, so hands compare with the ordering reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(u16);

impl HandRank {
    /// The best rank, a royal flush.
    pub const BEST: HandRank = HandRank(1);

    /// The worst rank, the 7-5-4-3-2 unsuited high card hand.
    pub const WORST: HandRank = HandRank(tables::HAND_CLASSES);

    /// This rank value.
    #[inline]
    pub fn get(&self) -> u16 {
        self.0
    }

    /// The hand category for this rank.
    pub fn category(&self) -> HandCategory {
        match self.0 {
            1..=10 => HandCategory::StraightFlush,
            11..=166 => HandCategory::FourOfAKind,
            167..=322 => HandCategory::FullHouse,
            323..=1599 => HandCategory::Flush,
            1600..=1609 => HandCategory::Straight,
            1610..=2467 => HandCategory::ThreeOfAKind,
            2468..=3325 => HandCategory::TwoPair,
            3326..=6185 => HandCategory::OnePair,
            _ => HandCategory::HighCard,
        }
    }
}

impl std::fmt::Display for HandRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The hand categories, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    /// Five suited cards in rank sequence.
    StraightFlush = 0,
    /// Four cards of one rank.
    FourOfAKind,
    /// Three cards of one rank and a pair.
    FullHouse,
    /// Five suited cards.
    Flush,
    /// Five cards in rank sequence.
    Straight,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Two pairs.
    TwoPair,
    /// Two cards of one rank.
    OnePair,
    /// None of the above.
    HighCard,
}

impl std::fmt::Display for HandCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::OnePair => "One Pair",
            HandCategory::HighCard => "High Card",
        };

        write!(f, "{name}")
    }
}

/// Scores hands of 5, 6, or 7 cards against a set of lookup tables.
///
/// The tables are built or loaded once before the first scoring call and are
/// never mutated, so an evaluator can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Evaluator {
    tables: LookupTables,
}

impl Evaluator {
    /// Creates an evaluator with the given tables.
    pub fn new(tables: LookupTables) -> Self {
        Self { tables }
    }

    /// Returns this evaluator tables.
    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    /// Evaluates a single 5 cards combination.
    pub fn eval_five(&self, cards: &[Card; 5]) -> Result<HandRank, EvalError> {
        // The suit masks are one hot, the AND is non zero only when all five
        // cards share a suit.
        let suit_and = cards.iter().fold(0xfu8, |m, c| m & c.suit_bits());

        let (key, rank) = if suit_and != 0 {
            let rank_bits = cards.iter().fold(0u32, |m, c| m | c.rank_flag());
            let key = tables::prime_product_from_rank_bits(rank_bits);
            (key, self.tables.flush_rank(key))
        } else {
            let key = cards.iter().map(Card::prime).product();
            (key, self.tables.unsuited_rank(key))
        };

        rank.map(HandRank).ok_or(EvalError::LookupMiss {
            key,
            is_flush: suit_and != 0,
        })
    }

    /// Scores a hand of 5, 6, or 7 cards.
    ///
    /// Returns the best rank over every 5 cards combination of the hand, so
    /// the result does not depend on the cards order.
    pub fn score(&self, hand: &[Card]) -> Result<HandRank, EvalError> {
        let mut best = HandRank::WORST;
        for combo in combos::combinations(hand.len())? {
            let five = [
                hand[combo[0]],
                hand[combo[1]],
                hand[combo[2]],
                hand[combo[3]],
                hand[combo[4]],
            ];
            best = best.min(self.eval_five(&five)?);
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handrank_cards::{Deck, parse_hand};
    use rand::prelude::*;

    fn evaluator() -> Evaluator {
        Evaluator::new(LookupTables::generate())
    }

    fn score(evaluator: &Evaluator, hand: &str) -> HandRank {
        evaluator.score(&parse_hand(hand).unwrap()).unwrap()
    }

    #[test]
    fn royal_flush_is_best() {
        let evaluator = evaluator();
        assert_eq!(score(&evaluator, "As Ks Qs Js Ts"), HandRank::BEST);
        assert_eq!(score(&evaluator, "Th Jh Qh Kh Ah").get(), 1);
    }

    #[test]
    fn worst_high_card() {
        let evaluator = evaluator();
        assert_eq!(score(&evaluator, "7c 5d 4h 3s 2c"), HandRank::WORST);
    }

    #[test]
    fn category_band_boundaries() {
        let evaluator = evaluator();

        // Best and worst hand of each category band.
        let expected = [
            ("As Ks Qs Js Ts", 1, HandCategory::StraightFlush),
            ("5h 4h 3h 2h Ah", 10, HandCategory::StraightFlush),
            ("As Ah Ad Ac Kd", 11, HandCategory::FourOfAKind),
            ("2s 2h 2d 2c 3d", 166, HandCategory::FourOfAKind),
            ("As Ah Ad Kc Kd", 167, HandCategory::FullHouse),
            ("2s 2h 2d 3c 3d", 322, HandCategory::FullHouse),
            ("As Ks Qs Js 9s", 323, HandCategory::Flush),
            ("7s 5s 4s 3s 2s", 1599, HandCategory::Flush),
            ("Ad Ks Qs Js Ts", 1600, HandCategory::Straight),
            ("5d 4s 3s 2s As", 1609, HandCategory::Straight),
            ("As Ah Ad Ks Qd", 1610, HandCategory::ThreeOfAKind),
            ("2s 2h 2d 4c 3d", 2467, HandCategory::ThreeOfAKind),
            ("As Ah Ks Kd Qd", 2468, HandCategory::TwoPair),
            ("3s 3h 2d 2c 4d", 3325, HandCategory::TwoPair),
            ("As Ah Kd Qs Jd", 3326, HandCategory::OnePair),
            ("2s 2h 5d 4s 3d", 6185, HandCategory::OnePair),
            ("Ad Ks Qs Js 9s", 6186, HandCategory::HighCard),
            ("7c 5d 4h 3s 2c", 7462, HandCategory::HighCard),
        ];

        for (hand, rank, category) in expected {
            let scored = score(&evaluator, hand);
            assert_eq!(scored.get(), rank, "hand {hand}");
            assert_eq!(scored.category(), category, "hand {hand}");
        }
    }

    #[test]
    fn flush_beats_same_ranks_unsuited() {
        let evaluator = evaluator();
        let flush = score(&evaluator, "As Ks Qs Js 9s");
        let high_card = score(&evaluator, "Ad Ks Qs Js 9s");
        assert!(flush < high_card);
    }

    #[test]
    fn all_five_card_hands_cover_all_classes() {
        let evaluator = evaluator();
        let mut counts = vec![0u32; tables::HAND_CLASSES as usize + 1];

        Deck::default().for_each(5, |hand| {
            let rank = evaluator.score(hand).unwrap();
            counts[rank.get() as usize] += 1;
        });

        assert_eq!(counts.iter().map(|&c| c as u64).sum::<u64>(), 2_598_960);
        assert!(counts[1..].iter().all(|&c| c > 0));

        // Hands per category over all 5 cards hands.
        let mut by_category = [0u32; 9];
        for (rank, &count) in counts.iter().enumerate().skip(1) {
            by_category[HandRank(rank as u16).category() as usize] += count;
        }

        assert_eq!(by_category[HandCategory::StraightFlush as usize], 40);
        assert_eq!(by_category[HandCategory::FourOfAKind as usize], 624);
        assert_eq!(by_category[HandCategory::FullHouse as usize], 3_744);
        assert_eq!(by_category[HandCategory::Flush as usize], 5_108);
        assert_eq!(by_category[HandCategory::Straight as usize], 10_200);
        assert_eq!(by_category[HandCategory::ThreeOfAKind as usize], 54_912);
        assert_eq!(by_category[HandCategory::TwoPair as usize], 123_552);
        assert_eq!(by_category[HandCategory::OnePair as usize], 1_098_240);
        assert_eq!(by_category[HandCategory::HighCard as usize], 1_302_540);
    }

    #[test]
    fn seven_cards_score_is_minimum_of_combinations() {
        let evaluator = evaluator();
        let mut rng = rand::rng();

        for _ in 0..200 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let hand = (0..7).map(|_| deck.deal()).collect::<Vec<_>>();

            // Brute force by dropping every pair of cards.
            let mut best = HandRank::WORST;
            for i in 0..7 {
                for j in (i + 1)..7 {
                    let five = hand
                        .iter()
                        .enumerate()
                        .filter(|(k, _)| *k != i && *k != j)
                        .map(|(_, &c)| c)
                        .collect::<Vec<_>>();
                    best = best.min(evaluator.eval_five(&five.try_into().unwrap()).unwrap());
                }
            }

            assert_eq!(evaluator.score(&hand).unwrap(), best);
        }
    }

    #[test]
    fn six_cards_score_is_minimum_of_combinations() {
        let evaluator = evaluator();
        let mut rng = rand::rng();

        for _ in 0..200 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let hand = (0..6).map(|_| deck.deal()).collect::<Vec<_>>();

            let mut best = HandRank::WORST;
            for i in 0..6 {
                let five = hand
                    .iter()
                    .enumerate()
                    .filter(|(k, _)| *k != i)
                    .map(|(_, &c)| c)
                    .collect::<Vec<_>>();
                best = best.min(evaluator.eval_five(&five.try_into().unwrap()).unwrap());
            }

            assert_eq!(evaluator.score(&hand).unwrap(), best);
        }
    }

    #[test]
    fn score_is_permutation_invariant() {
        let evaluator = evaluator();
        let mut rng = rand::rng();

        for size in 5..=7 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let mut hand = (0..size).map(|_| deck.deal()).collect::<Vec<_>>();
            let rank = evaluator.score(&hand).unwrap();

            for _ in 0..20 {
                hand.shuffle(&mut rng);
                assert_eq!(evaluator.score(&hand).unwrap(), rank);
            }
        }
    }

    #[test]
    fn unsupported_hand_sizes() {
        let evaluator = evaluator();
        let mut deck = Deck::default();
        let mut hand = Vec::new();

        for size in 0usize..=8 {
            if (5..=7).contains(&size) {
                assert!(evaluator.score(&hand).is_ok());
            } else {
                assert_eq!(
                    evaluator.score(&hand),
                    Err(EvalError::UnsupportedHandSize(size))
                );
            }
            hand.push(deck.deal());
        }
    }

    #[test]
    fn lookup_miss_with_synthetic_tables() {
        // An empty synthetic table turns every lookup into a miss.
        let evaluator = Evaluator::new(LookupTables::from_maps(
            Default::default(),
            Default::default(),
        ));

        let flush = parse_hand("As Ks Qs Js Ts").unwrap();
        assert!(matches!(
            evaluator.score(&flush),
            Err(EvalError::LookupMiss { is_flush: true, .. })
        ));

        let unsuited = parse_hand("7c 5d 4h 3s 2c").unwrap();
        assert!(matches!(
            evaluator.score(&unsuited),
            Err(EvalError::LookupMiss {
                is_flush: false,
                ..
            })
        ));
    }
}
