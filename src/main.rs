use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use flappy::assets::{AssetLoader, Assets};
use flappy::core::constants::LOG_FILENAME;
use flappy::core::{FrameScheduler, GameConfig, SpawnTimer};
use flappy::game::{on_spawn_timer, process_input, process_tick, Game, InputOutcome};
use flappy::input::{handle_key, InputResult};
use flappy::simulator::{run_simulation, SimConfig};
use flappy::ui::{check_surface, draw_ui};
use flappy::utils::{logging, persistence};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Upper bound on how long the loop blocks waiting for a key.
const MAX_INPUT_WAIT: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(name = "flappy", version, about = "Flappy Bird in the terminal")]
struct Cli {
    /// Game config JSON (defaults to ~/.flappy/config.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play in the terminal (default)
    Play(PlayArgs),
    /// Run headless games with an autopilot and print a report
    Simulate(SimulateArgs),
    /// Print the effective config as JSON
    Config,
}

#[derive(clap::Args, Default)]
struct PlayArgs {
    /// Seed for obstacle gaps and particles
    #[arg(long)]
    seed: Option<u64>,

    /// Log file (defaults to ~/.flappy/flappy.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Directory with bird.txt / obstacle.txt sprites
    #[arg(long)]
    assets: Option<PathBuf>,
}

#[derive(clap::Args)]
struct SimulateArgs {
    /// Number of games
    #[arg(short = 'n', long, default_value_t = 100)]
    runs: u32,

    /// Frame cap per game
    #[arg(long, default_value_t = 10_000)]
    frames: u64,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => play(cli.config.as_deref(), args),
        Command::Simulate(args) => simulate(cli.config.as_deref(), args),
        Command::Config => {
            let config = persistence::load_config(cli.config.as_deref())?;
            println!("{}", persistence::config_to_json(&config)?);
            Ok(())
        }
    }
}

fn simulate(config_path: Option<&Path>, args: SimulateArgs) -> Result<()> {
    logging::init_stderr()?;
    let game = persistence::load_config(config_path).context("loading config")?;

    let config = SimConfig {
        num_runs: args.runs,
        seed: args.seed,
        max_frames_per_run: args.frames,
        game,
    };
    info!(runs = config.num_runs, seed = ?config.seed, "starting simulation");

    let report = run_simulation(&config);
    if args.json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}

fn play(config_path: Option<&Path>, args: PlayArgs) -> Result<()> {
    let log_path = match args.log_file {
        Some(path) => path,
        None => persistence::data_path(LOG_FILENAME).context("resolving log path")?,
    };
    logging::init_file(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    let config = persistence::load_config(config_path).context("loading config")?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = match terminal.size() {
        Ok(size) => match check_surface(size) {
            Ok(()) => run_game(&mut terminal, config, args.assets, &mut rng),
            Err(e) => Err(e.into()),
        },
        Err(e) => Err(e.into()),
    };

    // Restore the terminal before reporting anything
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: GameConfig,
    assets_dir: Option<PathBuf>,
    rng: &mut StdRng,
) -> Result<()> {
    let mut frames = FrameScheduler::new(config.frame_interval_ms);
    let mut spawner = SpawnTimer::new(config.spawn_interval_ms);
    let mut game = Game::new(config);
    let mut assets = Assets::default();
    let mut loader = AssetLoader::spawn(assets_dir);

    info!("session started");
    terminal.draw(|frame| draw_ui(frame, &game, &assets, loader.is_pending()))?;

    loop {
        if let Some(loaded) = loader.poll() {
            match loaded {
                Ok(loaded) => assets = loaded,
                Err(e) => warn!(error = %e, "sprites unavailable, drawing fallbacks"),
            }
            terminal.draw(|frame| draw_ui(frame, &game, &assets, loader.is_pending()))?;
        }

        let now = Instant::now();
        let wait = [frames.time_until_next(now), spawner.time_until_next(now)]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(MAX_INPUT_WAIT)
            .min(MAX_INPUT_WAIT);

        if event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                match handle_key(key) {
                    InputResult::Quit => {
                        frames.cancel();
                        info!(score = game.score, "session ended");
                        return Ok(());
                    }
                    InputResult::Game(input) => {
                        let now = Instant::now();
                        match process_input(&mut game, input, rng) {
                            InputOutcome::Started | InputOutcome::Restarted => {
                                frames.request(now);
                                spawner.arm(now);
                            }
                            InputOutcome::Flapped | InputOutcome::Ignored => {}
                        }
                    }
                    InputResult::Continue => {}
                }
            } else {
                // Resize and other events: redraw with the new size
                terminal.draw(|frame| draw_ui(frame, &game, &assets, loader.is_pending()))?;
            }
        }

        let now = Instant::now();
        if spawner.poll(now) && on_spawn_timer(&mut game, rng) {
            spawner.arm(now);
        }

        if frames.poll(now) {
            process_tick(&mut game, rng);
            terminal.draw(|frame| draw_ui(frame, &game, &assets, loader.is_pending()))?;
        }
    }
}
