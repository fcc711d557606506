//! Main entry point for the lineup builder CLI
//!
//! Loads configuration, reads the roster once, and either lists players or
//! builds the two team boards from placements given on the command line.

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use lineup_builder::board::LineupSession;
use lineup_builder::config::AppConfig;
use lineup_builder::formation::Formation;
use lineup_builder::roster::{
    load_roster, FileRosterSource, HttpRosterSource, PositionFilter, Roster, RosterQuery,
    RosterSource,
};
use lineup_builder::types::{Attribute, Player, TeamId};
use lineup_builder::utils::parse_placement;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Lineup Builder - pick two soccer lineups from a shared roster sheet
#[derive(Parser)]
#[command(
    name = "lineup-builder",
    version,
    about = "Build two soccer lineups from a spreadsheet roster",
    long_about = "Lineup Builder reads a player roster from a spreadsheet query endpoint, scores \
                 every player with a position-weighted overall rating, and places players onto \
                 two team boards laid out by formation."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        global = true,
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Roster URL override
    #[arg(long, value_name = "URL", global = true, help = "Override roster query URL")]
    roster_url: Option<String>,

    /// Roster file override
    #[arg(
        long,
        value_name = "FILE",
        global = true,
        help = "Read a saved roster query response instead of fetching"
    )]
    roster_file: Option<PathBuf>,

    /// Enable debug mode
    #[arg(short, long, global = true, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without loading the roster")]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List roster players
    Players(PlayersArgs),
    /// List the available formations
    Formations,
    /// Place players on the two team boards
    Board(BoardArgs),
}

#[derive(ClapArgs, Default)]
struct PlayersArgs {
    /// Case-insensitive name search
    #[arg(short, long, default_value_t)]
    search: String,
    /// Position filter (All, GK, DF, MF, ST)
    #[arg(short, long)]
    position: Option<String>,
    /// Sort key, highest first (defaults to the configured sort)
    #[arg(long)]
    sort: Option<String>,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(ClapArgs)]
struct BoardArgs {
    /// Team A formation code
    #[arg(long)]
    team_a: Option<String>,
    /// Team B formation code
    #[arg(long)]
    team_b: Option<String>,
    /// Placement as TEAM:SLOT:NAME, applied in order
    #[arg(short, long = "place", value_name = "TEAM:SLOT:NAME")]
    placements: Vec<String>,
    /// Print JSON instead of text boards
    #[arg(long)]
    json: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(url) = &args.roster_url {
        config.roster.url = url.clone();
        config.roster.file = None;
    }

    if let Some(file) = &args.roster_file {
        config.roster.file = Some(file.clone());
    }

    lineup_builder::config::validate_config(&config)?;
    Ok(config)
}

/// Display startup banner with configuration details
fn display_startup_banner(config: &AppConfig) {
    info!("⚽ Lineup Builder v{}", lineup_builder::VERSION);
    info!("   Service: {}", config.service.name);
    info!("   Log level: {}", config.service.log_level);
    match &config.roster.file {
        Some(file) => info!("   Roster file: {}", file.display()),
        None => info!("   Roster URL: {}", config.roster.url),
    }
    info!(
        "   Formations: A {} / B {}",
        config.lineup.team_a_formation, config.lineup.team_b_formation
    );
    info!("   Default sort: {}", config.lineup.default_sort);
}

fn roster_source(config: &AppConfig) -> Box<dyn RosterSource> {
    match &config.roster.file {
        Some(file) => Box::new(FileRosterSource::new(file.clone())),
        None => Box::new(HttpRosterSource::new(config.roster.url.clone())),
    }
}

fn print_players(players: &[&Player], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(players)?);
        return Ok(());
    }

    if players.is_empty() {
        println!("No players found.");
        return Ok(());
    }

    println!(
        "{:<24} {:<3} {:>3}  {:>5} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5}",
        "Name", "Pos", "OVR", "SPD", "SHO", "PAS", "DRI", "PHY", "DEF", "GK", "WF"
    );
    for player in players {
        let a = player.attributes();
        println!(
            "{:<24} {:<3} {:>3}  {:>5} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5}",
            player.name(),
            player.position(),
            player.overall(),
            a.speed,
            a.shooting,
            a.passing,
            a.dribbling,
            a.physical,
            a.defending,
            a.goalkeeping,
            a.weak_foot
        );
    }
    Ok(())
}

fn print_formations() {
    for formation in Formation::all() {
        let labels: Vec<&str> = formation.slots().iter().map(|p| p.label()).collect();
        let counts: Vec<String> = formation
            .slot_counts()
            .iter()
            .map(|(position, count)| format!("{} {}", count, position))
            .collect();
        println!("{}  {}  ({})", formation, labels.join(" "), counts.join(", "));
    }
}

fn run_players(config: &AppConfig, roster: Roster, args: PlayersArgs) -> Result<()> {
    let sort_by = match &args.sort {
        Some(sort) => sort.parse::<Attribute>()?,
        None => config.lineup.default_sort,
    };

    let mut session = LineupSession::new();
    session.set_roster(roster);
    session.set_query(RosterQuery {
        search: args.search,
        position: match &args.position {
            Some(position) => position.parse::<PositionFilter>()?,
            None => PositionFilter::All,
        },
        sort_by,
    });

    print_players(&session.visible_players(), args.json)
}

fn run_board(config: &AppConfig, roster: Roster, args: BoardArgs) -> Result<()> {
    let mut session =
        LineupSession::with_formations(config.team_a_formation(), config.team_b_formation());
    session.set_roster(roster);

    if let Some(code) = &args.team_a {
        session.select_formation(TeamId::A, code);
    }
    if let Some(code) = &args.team_b {
        session.select_formation(TeamId::B, code);
    }

    for spec in &args.placements {
        let (team, slot, name) = parse_placement(spec)?;
        if let Err(rejection) = session.drop_by_name(team, slot, &name) {
            warn!("Skipped placement '{}': {}", spec, rejection);
        }
    }

    let summaries = [
        session.board_summary(TeamId::A),
        session.board_summary(TeamId::B),
    ];

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for summary in &summaries {
            println!("{}", summary);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        info!("Configuration validation successful");
        display_startup_banner(&config);
        info!("Dry run completed - exiting without loading the roster");
        return Ok(());
    }

    let command = args
        .command
        .unwrap_or_else(|| Command::Players(PlayersArgs::default()));

    if let Command::Formations = command {
        print_formations();
        return Ok(());
    }

    display_startup_banner(&config);

    let source = roster_source(&config);
    let roster = match load_roster(source.as_ref()).await {
        Ok(roster) => roster,
        Err(e) => {
            error!("Failed to load roster: {:#}", e);
            std::process::exit(1);
        }
    };

    match command {
        Command::Players(players_args) => run_players(&config, roster, players_args),
        Command::Board(board_args) => run_board(&config, roster, board_args),
        Command::Formations => Ok(()),
    }
}
