//! Scripted console session.
//!
//! Seats the players named on the command line (Alice, Bob and Carol by
//! default), then plays rounds until the game ends. Every player answers
//! with the question's recorded answer. The second round's player spends a
//! block card and the last seat clocks out halfway through.
//!
//! ```text
//! PARTY_QUESTIONS=data/questions.csv PARTY_SEED=7 cargo run --bin party-demo -- Ann Ben
//! ```

use std::error::Error;

use tracing_subscriber::EnvFilter;

use party_trivia::core::GameConfig;
use party_trivia::game::{EndReason, GameEngine};
use party_trivia::scoreboard::Scoreboard;

/// Hard stop for the script, in case the pool is large.
const MAX_ROUNDS: u32 = 12;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GameConfig::from_env()?;
    let mut names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        names = vec!["Alice".into(), "Bob".into(), "Carol".into()];
    }

    let mut engine = match GameEngine::open(&config) {
        Ok(engine) => engine,
        Err(e) if e.is_fatal_at_launch() => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    let mut scoreboard = Scoreboard::new();

    if !engine.initialize_players(names.as_slice()) {
        return Err("could not seat players".into());
    }
    engine.start_game();

    let clock_out_round = MAX_ROUNDS / 2;
    let mut turn = engine.current_player();

    while let Some(player) = turn {
        if engine.end_condition().is_some() || engine.round_number() >= MAX_ROUNDS {
            break;
        }

        let Some(question) = engine.draw_question() else {
            break;
        };
        let round = engine.round_number();
        println!("Round {round}: {} ({})", question.text, engine.players()[player.index()].name());

        let mut answering = player;
        if round == 2 {
            if let Some(target) = engine.use_block_card(player)? {
                let blocker = engine.players()[player.index()].name().to_string();
                let target_name = engine.players()[target.index()].name().to_string();
                println!("  {blocker} blocks, {target_name} must answer");
                scoreboard.record_block_card(&blocker, &target_name);
                answering = target;
            }
        }

        if round == clock_out_round {
            let quitter = engine.active_players().last().copied();
            if let Some(quitter) = quitter.filter(|&q| q != answering) {
                if engine.player_clock_out(quitter)? {
                    let name = engine.players()[quitter.index()].name().to_string();
                    println!("  {name} clocks out");
                    scoreboard.record_clock_out(&name, round);
                    turn = engine.advance_turn();
                    continue;
                }
            }
        }

        let result = engine.player_answers(answering, question.correct_answer)?;
        let verdict = if result.answered_yes { "yes" } else { "no" };
        println!("  {} says {verdict}, strikes {}", result.player_name, result.strikes);
        if result.must_drink {
            println!("  {} drinks! (total {})", result.player_name, result.drinks_consumed);
        }
        scoreboard.record_answer(&result);

        turn = engine.advance_turn();
    }

    match engine.end_condition() {
        Some(EndReason::TooFewPlayers) => println!("\nOnly one player left standing."),
        Some(EndReason::QuestionsExhausted) => println!("\nOut of questions."),
        None => println!("\nScript finished."),
    }
    engine.end_game();

    let results = engine.get_final_results();
    println!("Final standings after {} rounds:", results.total_rounds);
    for standing in &results.standings {
        println!(
            "  {}. {} drinks {}, strikes {}{}",
            standing.rank,
            standing.name,
            standing.drinks,
            standing.strikes,
            if standing.block_card_used { ", block card used" } else { "" }
        );
    }
    if let (Some(winner), Some(loser)) = (&results.winner, &results.loser) {
        println!("Winner: {winner}. Most drinks: {loser}.");
    }

    let summary = scoreboard.summary();
    println!(
        "Scoreboard: {} events ({} strikes, {} drinks, {} clock-outs, {} block cards)",
        summary.total_events,
        summary.total_strike_events,
        summary.total_drinking_events,
        summary.total_clock_outs,
        summary.total_block_cards_used
    );

    Ok(())
}
