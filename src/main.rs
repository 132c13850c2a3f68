use std::io;
use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::info;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use game_of_life::simulation::Simulation;

use term::BLOCK_SIZE;
use term::input;
use term::render;
use term::render::Frame;

mod cli;
mod term;

const FRAMERATE: u32 = 60;
const FRAMETIME: Duration = Duration::from_millis((1_000 / FRAMERATE) as u64);

/// Raw mode, alternate screen and mouse capture, for as long as this lives
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        // Built before anything else can fail, so dropping it restores raw mode too
        let guard = Self;

        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide,
        )?;

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen,
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            e.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            e.print()?;
            return Ok(ExitCode::FAILURE);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = args.into_config().context("Invalid configuration")?;

    info!(
        width = config.width,
        height = config.height,
        delay_ms = config.delay.as_millis() as u64,
        rule = %config.rule,
        seed = ?config.seed,
        "Starting"
    );

    let grid = config.initial_grid();

    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    if render::visible(&grid, cols, rows.saturating_sub(1)) != (grid.width(), grid.height()) {
        warn!(cols, rows, "Grid does not fit in the terminal, only part of it is shown");
    }

    let mut sim = Simulation::new(grid, config.delay, Instant::now())
        .with_rule(config.rule)
        .with_block_size(BLOCK_SIZE);

    {
        let _guard = TerminalGuard::enter().context("Failed to set up the terminal")?;
        run(&mut sim)?;
    }

    info!(generation = sim.state().generation(), "Exiting");

    Ok(ExitCode::SUCCESS)
}

/// The host loop: gather intents, let the simulation tick, draw. Returns once a quit intent was
/// handled and the final frame drawn.
fn run(sim: &mut Simulation) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    let mut frame = Frame::default();

    loop {
        let mut intents = Vec::new();

        // Wait for input for at most a frame, then drain whatever else is queued
        if event::poll(FRAMETIME)? {
            intents.extend(input::convert_event(event::read()?));

            while event::poll(Duration::ZERO)? {
                intents.extend(input::convert_event(event::read()?));
            }
        }

        let (cols, rows) = terminal::size()?;

        let shown = render::visible(sim.grid(), cols, rows.saturating_sub(1));
        intents.retain(|intent| input::is_drawn(intent, shown));

        let flow = sim.tick(intents, Instant::now());

        let s = frame.render(sim.grid(), cols, rows.saturating_sub(1));

        queue!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;

        for line in s.lines() {
            queue!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        queue!(stdout, style::Print(render::status_line(sim.state())))?;
        stdout.flush().context("Failed to draw frame")?;

        if flow.is_break() {
            return Ok(());
        }
    }
}
