//! Blockade hot-seat terminal game.

use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod command;
mod config;
mod render;
mod session;

use command::{Command, HELP};
use config::Config;
use session::{Session, Status, Tone};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!(?config, "Starting Blockade");

    let mut session = Session::new(config.player_names.clone());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let welcome = Status::info(session.game().welcome_message());
    redraw(&mut stdout, &session, &welcome)?;
    writeln!(stdout, "Type `help` for commands.")?;

    for line in stdin.lock().lines() {
        let line = line?;
        let status = match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                writeln!(stdout, "{}", HELP)?;
                continue;
            }
            Ok(Command::State) => {
                writeln!(stdout, "{}", serde_json::to_string_pretty(session.game())?)?;
                continue;
            }
            Ok(Command::Board) => session.prompt(),
            Ok(Command::SetMode(mode)) => session.set_mode(mode),
            Ok(Command::Select(coord)) => session.select(coord),
            Ok(Command::Move { from, to }) => session.move_piece(from, to),
            Ok(Command::Cancel) => session.cancel(),
            Ok(Command::NewGame) => session.new_game(),
            Err(command::CommandError::Empty) => continue,
            Err(e) => Status::error(e.to_string()),
        };

        redraw(&mut stdout, &session, &status)?;
        if status.tone == Tone::Success && !session.game().is_finished() {
            writeln!(stdout, "{}", render::status(&session.prompt()))?;
        }
    }

    info!("Goodbye");
    Ok(())
}

fn redraw(out: &mut impl Write, session: &Session, status: &Status) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", render::board(session))?;
    write!(out, "{}", render::player_panel(session))?;
    writeln!(out, "{}", render::status(status))?;
    out.flush()
}
