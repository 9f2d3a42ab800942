// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. This evaluator follows the
//! [Cactus Kev's][kevlink] design: each hand maps to a prime product key that
//! identifies its rank equivalence class, and two lookup tables resolve the key
//! to a canonical rank in `[1, 7462]` where 1 is a royal flush and 7462 the
//! worst high card hand.
//!
//! To use the evaluator create an [Evaluator] with a set of [LookupTables] and
//! score hands with it:
//!
//! ```
//! # use handrank_eval::*;
//! let evaluator = Evaluator::new(LookupTables::generate());
//!
//! let royal = parse_hand("As Ks Qs Js Ts").unwrap();
//! assert_eq!(evaluator.score(&royal).unwrap(), HandRank::BEST);
//!
//! // A 7 cards hand scores as its best 5 cards combination.
//! let seven = parse_hand("As Ks Qs Js Ts 2h 3d").unwrap();
//! assert_eq!(evaluator.score(&seven).unwrap(), HandRank::BEST);
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod combos;
pub mod eval;
pub mod tables;

pub use combos::combinations;
pub use eval::{EvalError, Evaluator, HandCategory, HandRank};
pub use tables::LookupTables;

// Reexport cards types.
pub use handrank_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_hand};
