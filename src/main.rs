//! Terminal Slither runner (default binary).
//!
//! Loads the level set and engine settings, then runs a fixed-rate frame loop:
//! crossterm for input and the framebuffer renderer from `slither-term`.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use slither::core::{Engine, EngineConfig, LevelSource};
use slither::input::{handle_key_event, should_quit};
use slither::levels::{LevelPack, LevelRegistry};
use slither::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use slither::types::TICK_MS;

#[derive(Debug, Parser)]
#[command(
    name = "slither",
    version,
    about = "Snake, box-pushing and gravity puzzles in the terminal"
)]
struct Cli {
    /// JSON level pack to play instead of the built-in levels
    #[arg(long, value_name = "FILE")]
    levels: Option<PathBuf>,

    /// JSON engine configuration
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Level to start on (1-based)
    #[arg(long, default_value_t = 1)]
    level: usize,

    /// Write log output to this file (logging is discarded otherwise)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let levels = match &cli.levels {
        Some(path) => LevelRegistry::from_pack(&LevelPack::load(path)?)?,
        None => LevelRegistry::builtin()?,
    };
    if levels.is_empty() {
        bail!("level set is empty");
    }
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::interactive(),
    };
    log::debug!("engine config: {config:?}");

    let mut engine = Engine::new(levels, config);
    let start = cli.level.max(1) - 1;
    if !engine.load_level(start) {
        bail!(
            "level {} does not exist (the set has {})",
            cli.level,
            engine.levels().level_count()
        );
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    // Log lines on stderr would corrupt the alternate screen.
    let target: Box<dyn std::io::Write + Send> = match path {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("create log file {}", path.display()))?,
        ),
        None => Box::new(std::io::sink()),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(target))
        .init();
    Ok(())
}

fn load_config(path: &Path) -> Result<EngineConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config: EngineConfig = serde_json::from_str(&text)
        .with_context(|| format!("parse config {}", path.display()))?;
    Ok(config)
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine<LevelRegistry>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&engine.view(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        log::info!("quit at level {}", engine.current_level() + 1);
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let applied = engine.apply_action(action);
                        log::trace!("{} -> {applied}", action.as_str());
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            engine.tick(elapsed.as_secs_f32());
        }
    }
}
