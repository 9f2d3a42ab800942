// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards combinations for each supported hand size.
use crate::eval::EvalError;

/// The only 5 cards combination of a 5 cards hand.
const FIVE_CHOOSE_FIVE: [[usize; 5]; 1] = [[0, 1, 2, 3, 4]];

/// The 6 combinations of a 6 cards hand.
const SIX_CHOOSE_FIVE: [[usize; 5]; 6] = [
    [0, 1, 2, 3, 4],
    [0, 1, 2, 3, 5],
    [0, 1, 2, 4, 5],
    [0, 1, 3, 4, 5],
    [0, 2, 3, 4, 5],
    [1, 2, 3, 4, 5],
];

/// The 21 combinations of a 7 cards hand.
#[rustfmt::skip]
const SEVEN_CHOOSE_FIVE: [[usize; 5]; 21] = [
    [0, 1, 2, 3, 4], [0, 1, 2, 3, 5], [0, 1, 2, 3, 6],
    [0, 1, 2, 4, 5], [0, 1, 2, 4, 6], [0, 1, 2, 5, 6],
    [0, 1, 3, 4, 5], [0, 1, 3, 4, 6], [0, 1, 3, 5, 6],
    [0, 1, 4, 5, 6], [0, 2, 3, 4, 5], [0, 2, 3, 4, 6],
    [0, 2, 3, 5, 6], [0, 2, 4, 5, 6], [0, 3, 4, 5, 6],
    [1, 2, 3, 4, 5], [1, 2, 3, 4, 6], [1, 2, 3, 5, 6],
    [1, 2, 4, 5, 6], [1, 3, 4, 5, 6], [2, 3, 4, 5, 6],
];

/// Returns the index tuples that select every 5 cards subset of a hand of
/// `n` cards.
///
/// Fails with [EvalError::UnsupportedHandSize] for hand sizes outside 5 to 7.
pub fn combinations(n: usize) -> Result<&'static [[usize; 5]], EvalError> {
    match n {
        5 => Ok(&FIVE_CHOOSE_FIVE),
        6 => Ok(&SIX_CHOOSE_FIVE),
        7 => Ok(&SEVEN_CHOOSE_FIVE),
        _ => Err(EvalError::UnsupportedHandSize(n)),
    }
}
