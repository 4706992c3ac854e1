mod config;
mod error;
mod map;
mod render;
mod rng;
mod scripted_input;
mod session;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use config::DungeonConfig;
use error::Result;
use render::{AnsiGlyphWriter, GlyphWriter, LOG_MAX_ENTRIES, PlainGlyphWriter, draw_log};
use scripted_input::{Command, ScriptedInput};
use session::{
    GameSession,
    navigation::{MoveCommand, MoveOutcome},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "roomgrid", about = "Explore a fog-covered grid of rooms")]
struct Args {
    /// JSON file with dim, unit, seed, story_draws and max_spawn_attempts
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    dim: Option<i32>,
    #[arg(long)]
    unit: Option<i32>,
    #[arg(long)]
    seed: Option<u64>,
    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,
    /// Render the whole dungeon instead of the fogged view
    #[arg(long)]
    reveal: bool,
    /// Disable ANSI styling
    #[arg(long)]
    plain: bool,
    /// Run the canned walk and print the resulting map
    #[arg(long)]
    demo: bool,
}

impl Args {
    fn dungeon_config(&self) -> Result<DungeonConfig> {
        let mut config = match &self.config {
            Some(path) => DungeonConfig::from_json_file(path)?,
            None => DungeonConfig::default(),
        };
        if let Some(dim) = self.dim {
            config.dim = dim;
        }
        if let Some(unit) = self.unit {
            config.unit = unit;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }

    fn glyph_writer(&self) -> Box<dyn GlyphWriter> {
        if self.plain {
            Box::new(PlainGlyphWriter)
        } else {
            Box::new(AnsiGlyphWriter)
        }
    }
}

struct RoomGridState {
    session: GameSession,
    party: usize,
    reveal: bool,
    writer: Box<dyn GlyphWriter>,
    message_log: Vec<String>,
}

impl RoomGridState {
    fn new(session: GameSession, party: usize, reveal: bool, writer: Box<dyn GlyphWriter>) -> Self {
        let mut state = Self {
            session,
            party,
            reveal,
            writer,
            message_log: Vec::new(),
        };
        state.push_log_entry(format!("The party wakes in room {party}"));
        state
    }

    /// Returns `false` once the player quits.
    fn handle_command(&mut self, command: Command, out: &mut dyn Write) -> Result<bool> {
        match command {
            Command::Move(step) => {
                self.try_step(step);
                self.draw_scene(out)?;
            }
            Command::Reset => {
                match self.session.reset_to_origin(self.party) {
                    Ok(party) => {
                        self.party = party;
                        self.push_log_entry(format!("Fluttered back to room {party}"));
                    }
                    Err(err) => self.reject(err),
                }
                self.draw_scene(out)?;
            }
            Command::Map => {
                self.session
                    .render(Some(self.party), true, self.writer.as_mut(), out)?;
            }
            Command::Dump => {
                serde_json::to_writer_pretty(&mut *out, &self.session.snapshot())?;
                writeln!(out)?;
            }
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn try_step(&mut self, step: MoveCommand) {
        match self.session.step_party(self.party, step) {
            Ok(outcome) => {
                self.party = outcome.resting_index();
                let entry = match outcome {
                    MoveOutcome::Entered { to, .. } => format!("Stepped into room {to}"),
                    MoveOutcome::Blocked { sensed, .. } => {
                        format!("Bumped into sealed room {sensed}")
                    }
                    MoveOutcome::Stayed { at } => format!("No way further; still in room {at}"),
                };
                self.push_log_entry(entry);
            }
            Err(err) => self.reject(err),
        }
    }

    fn reject(&mut self, err: error::DungeonError) {
        warn!(%err, party = self.party, "command rejected");
        self.push_log_entry(format!("Rejected: {err}"));
    }

    fn draw_scene(&mut self, out: &mut dyn Write) -> Result<()> {
        let label = self
            .session
            .dungeon()
            .room(self.party)?
            .story_label()
            .filter(|label| label.is_ascii_alphabetic())
            .unwrap_or('?');
        writeln!(
            out,
            "Room {} [{}] · explored {}/{}",
            self.party,
            label,
            self.session.visited().len(),
            self.session.dungeon().num_rooms()
        )?;
        self.session
            .render(Some(self.party), self.reveal, self.writer.as_mut(), out)?;
        draw_log(&self.message_log, out)?;
        Ok(())
    }

    fn push_log_entry<S: Into<String>>(&mut self, entry: S) {
        self.message_log.insert(0, entry.into());
        self.message_log.truncate(LOG_MAX_ENTRIES);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.dungeon_config()?;
    let mut session = GameSession::from_config(&config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.demo {
        let mut writer = args.glyph_writer();
        let party = session.run_demo()?;
        info!(party, "demo walk finished");
        session.render(None, args.reveal, writer.as_mut(), &mut out)?;
        return Ok(());
    }

    let party = session.init_game()?;
    let mut state = RoomGridState::new(session, party, args.reveal, args.glyph_writer());
    state.draw_scene(&mut out)?;

    if let Some(path) = &args.script {
        let mut script = ScriptedInput::from_file(path)?;
        while let Some(command) = script.next_command() {
            if !state.handle_command(command, &mut out)? {
                break;
            }
        }
    } else {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match trimmed.parse::<Command>() {
                Ok(command) => {
                    if !state.handle_command(command, &mut out)? {
                        break;
                    }
                }
                Err(err) => {
                    state.reject(err);
                    state.draw_scene(&mut out)?;
                }
            }
        }
    }

    info!(
        party = ?state.session.party(),
        origin = ?state.session.origin().index,
        explored = state.session.visited().len(),
        "session over"
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("roomgrid: {err}");
            ExitCode::FAILURE
        }
    }
}
