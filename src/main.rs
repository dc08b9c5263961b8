use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use monopoly_sim::{Board, PlayerConfig, Simulation, SimulationConfig, SimulationReport};

#[derive(Debug, Parser)]
#[command(name = "monopoly-sim", version)]
#[command(about = "Simulate batches of Monopoly-style board games")]
struct Args {
    /// JSON simulation config; command line flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON board description (defaults to the classic 40-tile board)
    #[arg(long)]
    board: Option<PathBuf>,

    /// Number of games to play
    #[arg(long)]
    games: Option<u32>,

    /// Turn cap per game
    #[arg(long)]
    max_turns: Option<u32>,

    /// Play every game until a single player is left.
    ///
    /// Warning: never returns if nobody can go bankrupt, for example when
    /// every seat uses the `never` strategy and fines are not charged.
    #[arg(long, conflicts_with = "max_turns")]
    no_turn_cap: bool,

    /// Master seed for reproducible batches
    #[arg(long)]
    seed: Option<u64>,

    /// Seat as NAME[:BALANCE[:always|never|random]]; repeat for each player
    #[arg(long = "player", value_name = "SEAT")]
    players: Vec<PlayerConfig>,

    /// Deduct affordable fines from the balance
    #[arg(long)]
    charge_fines: bool,

    /// Log every game event
    #[arg(short, long)]
    verbose: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = load_config(&args)?;
    let board = load_board(args.board.as_ref())?;

    if !args.json {
        println!("Simulating {} games...", config.games);
    }
    let report = Simulation::new(board, config)
        .run()
        .context("simulation could not start")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SimulationConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimulationConfig::default(),
    };

    if let Some(games) = args.games {
        config.games = games;
    }
    if args.no_turn_cap {
        config.max_turns = None;
    } else if let Some(max_turns) = args.max_turns {
        config.max_turns = Some(max_turns);
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if !args.players.is_empty() {
        config.players = args.players.clone();
    }
    if args.charge_fines {
        config.rules.charge_fines = true;
    }
    config.log_events |= args.verbose;

    Ok(config)
}

fn load_board(path: Option<&PathBuf>) -> Result<Board> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading board {}", path.display()))?;
            Board::from_json(&json).with_context(|| format!("loading board {}", path.display()))
        }
        None => Board::standard().context("loading the standard board"),
    }
}

fn print_report(report: &SimulationReport) {
    for record in &report.games {
        let how = if record.result.is_stalemate() {
            "by balance"
        } else {
            "outright"
        };
        println!("Game {}: {} has won {how}", record.game, record.winner);
    }

    println!();
    println!(
        "{} games, {} eliminations, {} stalemates (seed {})",
        report.games.len(),
        report.eliminations(),
        report.stalemates,
        report.seed
    );
    for (name, wins) in report.standings() {
        println!("  {name:<12} {wins}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_uncapped_flag_warns_about_endless_games() {
        let mut command = Args::command();
        let help = command.render_long_help().to_string();
        assert!(help.contains("never returns if nobody can go bankrupt"));
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "monopoly-sim",
            "--games",
            "3",
            "--no-turn-cap",
            "--player",
            "Ann:900:always",
            "--player",
            "Bob",
        ]);
        let config = load_config(&args).unwrap();

        assert_eq!(config.games, 3);
        assert_eq!(config.max_turns, None);
        assert_eq!(config.players.len(), 2);
        assert_eq!(config.players[0].starting_balance, 900);
    }
}
