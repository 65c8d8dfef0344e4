//! slotsim — interactive terminal slot machine
//!
//! Deposit virtual money, pick paylines and a per-line bet, spin a weighted
//! 3×3 grid and get paid for every line showing one symbol across all
//! columns. The engine lives in `slotsim-core`; this binary only handles
//! input validation, rendering and the balance.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use slotsim_core::{SlotConfig, SlotEngine};

mod prompt;
mod render;

#[derive(Parser)]
#[command(name = "slotsim", about = "Text-based slot machine simulator")]
struct Cli {
    /// Slot configuration file (JSON); defaults to the classic table
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed the RNG for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Starting balance (skips the deposit prompt)
    #[arg(short, long)]
    balance: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SlotConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SlotConfig::default(),
    };

    let mut engine = SlotEngine::with_config(config)?;
    if let Some(seed) = cli.seed {
        log::info!("Seeding RNG with {seed}");
        engine.seed(seed);
    }

    println!("Welcome to the Slot Machine!");

    let Some(mut balance) = starting_balance(&cli)? else {
        return Ok(());
    };
    println!("Your initial balance is ${balance}");

    loop {
        println!("Current balance: ${balance}");
        let Some(answer) = prompt::read_line("Press Enter to play or 'q' to quit: ")? else {
            break;
        };
        if answer.eq_ignore_ascii_case("q") {
            break;
        }

        match play_round(&mut engine, balance)? {
            Some(new_balance) => balance = new_balance,
            None => break,
        }
    }

    let stats = engine.stats();
    if stats.total_spins > 0 {
        log::info!(
            "Session: {} spins, RTP {:.1}%, hit rate {:.1}%",
            stats.total_spins,
            stats.rtp(),
            stats.hit_rate(),
        );
    }
    println!("You're leaving with ${balance}. Thanks for playing!");
    Ok(())
}

/// Use `--balance` when given, otherwise prompt for a deposit.
fn starting_balance(cli: &Cli) -> Result<Option<u64>> {
    if let Some(balance) = cli.balance {
        return Ok(Some(balance));
    }
    let deposit = prompt::read_number(
        "How much money would you like to deposit? $",
        "Please enter an amount greater than 0.",
        |amount| amount > 0,
    )?;
    Ok(deposit)
}

/// One round: gather lines and bet, spin, report, return the new balance.
///
/// Returns `Ok(None)` when input ran out mid-round. The total bet is checked
/// against the balance before the spin, so the balance can never go
/// negative.
fn play_round(engine: &mut SlotEngine, balance: u64) -> Result<Option<u64>> {
    let rules = engine.config().bet;

    let Some(lines) = prompt::read_number(
        &format!(
            "How many lines would you like to bet on? (1-{}): ",
            rules.max_lines
        ),
        &format!("Please enter a number between 1 and {}.", rules.max_lines),
        |n| (1..=rules.max_lines as u64).contains(&n),
    )?
    else {
        return Ok(None);
    };
    let lines = lines as u8;

    let bet = loop {
        let Some(bet) = prompt::read_number(
            "How much would you like to bet per line? $",
            &format!(
                "Please enter a bet amount between ${} and ${}.",
                rules.min_bet, rules.max_bet
            ),
            |n| (rules.min_bet..=rules.max_bet).contains(&n),
        )?
        else {
            return Ok(None);
        };

        let total_bet = bet * lines as u64;
        if total_bet > balance {
            println!("You don't have enough money to bet ${total_bet}.");
        } else {
            break bet;
        }
    };

    let total_bet = bet * lines as u64;
    println!("Betting ${bet} on {lines} lines. Total bet: ${total_bet}");

    let outcome = engine.spin(lines, bet)?;
    print!("{}", render::render_grid(&outcome, &engine.config().symbols));
    print!("{}", render::render_win_report(&outcome));

    Ok(Some(balance - total_bet + outcome.total_win))
}
