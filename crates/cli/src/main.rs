// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank CLI.
//!
//! Scores 5, 6, or 7 cards Poker hands, printing one canonical rank in
//! `[1, 7462]` per hand where 1 is a royal flush.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
    process,
    time::Instant,
};

use handrank_eval::{Evaluator, LookupTables, parse_hand};

#[derive(Debug, Parser)]
struct Cli {
    /// Card tokens for a single hand, e.g. `As Kd 7c 7h 2s`.
    cards: Vec<String>,
    /// Score all hands listed in this file, one hand per line.
    #[clap(long, short)]
    file: Option<PathBuf>,
    /// Print the hand after its computed rank.
    #[clap(long, short)]
    show_hand: bool,
    /// Load the lookup tables from this directory instead of generating them.
    #[clap(long)]
    tables: Option<PathBuf>,
    /// Generate the lookup tables, write them to this directory, and exit.
    #[clap(long)]
    write_tables: Option<PathBuf>,
}

/// No cards arguments and no hands file to score.
const EXIT_NO_INPUT: i32 = 2;

/// The hands file cannot be opened.
const EXIT_BAD_FILE: i32 = 3;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(dir) = &cli.write_tables {
        let tables = LookupTables::generate();
        tables
            .save_csv(dir)
            .with_context(|| format!("cannot write lookup tables to {}", dir.display()))?;
        info!("lookup tables written to {}", dir.display());
        return Ok(());
    }

    let now = Instant::now();
    let tables = match &cli.tables {
        Some(dir) => LookupTables::load_csv(dir)
            .with_context(|| format!("cannot load lookup tables from {}", dir.display()))?,
        None => LookupTables::generate(),
    };

    let (flush_len, unsuited_len) = tables.len();
    debug!(
        "lookup tables ready in {:.1}ms ({flush_len} flush, {unsuited_len} unsuited entries)",
        now.elapsed().as_secs_f64() * 1e3
    );

    let evaluator = Evaluator::new(tables);

    if let Some(path) = &cli.file {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                error!("cannot open hands file {}: {e}", path.display());
                process::exit(EXIT_BAD_FILE);
            }
        };

        for line in BufReader::new(file).lines() {
            let line = line.with_context(|| format!("cannot read {}", path.display()))?;
            if line.trim().is_empty() {
                continue;
            }

            score_and_print(&evaluator, &line, cli.show_hand)?;
        }
    } else if !cli.cards.is_empty() {
        score_and_print(&evaluator, &cli.cards.join(" "), cli.show_hand)?;
    } else {
        error!("no cards and no hands file given");
        process::exit(EXIT_NO_INPUT);
    }

    Ok(())
}

fn score_and_print(evaluator: &Evaluator, line: &str, show_hand: bool) -> Result<()> {
    let hand = parse_hand(line)?;
    let rank = evaluator.score(&hand)?;

    if show_hand {
        let tokens = hand
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("{rank} {tokens}");
    } else {
        println!("{rank}");
    }

    Ok(())
}
