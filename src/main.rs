//! Terminal falling-block game (default binary).
//!
//! Single-threaded loop: poll one key without blocking, run one controller
//! iteration, sleep a short fixed interval.

use std::thread;

use anyhow::Result;

use termtris::input::poll_key_event;
use termtris::term::{query_terminal_size, TerminalRenderer};
use termtris::{Config, Controller, EventLog, LoopControl};

fn main() -> Result<()> {
    let config = Config::from_env();
    let log = EventLog::from_config(&config)?;
    let seed = config.seed.unwrap_or_else(rand::random);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed, log);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let LoopControl::DebugDump(dump) = result? {
        println!("\nDEBUG:\n{dump}");
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config, seed: u64, log: EventLog) -> Result<LoopControl> {
    let (cols, rows) = query_terminal_size()?;
    let mut controller = Controller::new(cols, rows, seed, log);

    loop {
        let action = poll_key_event()?;
        match controller.iterate(action, query_terminal_size, term)? {
            LoopControl::Continue => {}
            done => return Ok(done),
        }
        thread::sleep(config.tick);
    }
}
