// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use handrank_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! to parse cards from two characters tokens:
//!
//! ```
//! # use handrank_cards::{Card, Rank, Suit};
//! let td = "Td".parse::<Card>().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! assert!("Tx".parse::<Card>().is_err());
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating hands in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use handrank_cards::{Card, Deck, Rank, Suit};
//! // Iterate through all 5 cards hands (2.5M hands).
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, PRIMES, ParseCardError, Rank, Suit, parse_hand};
