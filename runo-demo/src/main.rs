mod bot;
mod config;

use color_eyre::{eyre::WrapErr, Result};
use runo::{turn::TurnOutcome, uno::Uno};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = DemoConfig::from_env()?;
    info!(?config, "starting demo session");

    let mut uno = match config.seed {
        Some(seed) => Uno::with_seed(seed),
        None => Uno::new(),
    };
    for (index, name) in config.players.iter().enumerate() {
        uno.add_player(format!("p{}", index + 1), name.as_str())
            .wrap_err_with(|| format!("Failed to seat {name}"))?;
    }

    let opening = uno.start().wrap_err("Failed to start match")?;
    info!(
        outcome = ?opening.outcome,
        active_card = %display_active(&uno),
        "match started"
    );

    for turn in 1..=config.max_turns {
        let Some(player_id) = uno.current_player_id().cloned() else {
            break;
        };

        let action = bot::next_action(&uno, &player_id)?;
        let result = match uno.play_turn(&player_id, action) {
            Ok(result) => result,
            Err(runo::error::UnoError::PileExhausted) => {
                warn!(turn, "no cards left to draw, stopping the match");
                break;
            }
            Err(err) => return Err(err).wrap_err("The bot tried an illegal move"),
        };

        let name = uno
            .get_player(&player_id)
            .map(|player| player.name().to_string())
            .unwrap_or_default();
        match &result.outcome {
            TurnOutcome::Drew(_) | TurnOutcome::PenaltyDrawn(_) => {
                info!(turn, player = %name, outcome = ?result.outcome, "drew")
            }
            outcome => info!(
                turn,
                player = %name,
                ?outcome,
                active_card = %display_active(&uno),
                cards_left = uno.hand(&player_id)?.len(),
                "played"
            ),
        }

        if result.won {
            info!(winner = %name, turns = turn, "match won");
            break;
        }
    }

    let status = uno.status();
    if status.running {
        warn!(max_turns = config.max_turns, "match stopped without a winner");
    }
    for player in &status.players {
        info!(player = %player.name, cards = player.card_count, "final hand size");
    }

    Ok(())
}

fn display_active(uno: &Uno) -> String {
    let Some(card) = uno.active_card() else {
        return "-".to_string();
    };
    match uno.status().active_wild_color {
        Some(color) => format!("{card} ({color})"),
        None => card.to_string(),
    }
}
