//! Front-ends over a pairing session: the one-shot run and the stdin shell.

use pairwheel_common::{PairingError, PairwheelError};
use pairwheel_engine::{LockedPair, PairingSession, RandomDraw};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::commands::{Command, HELP};

/// Pair everyone who can be paired, announcing each pair as it commits.
pub async fn run_once(
    session: &mut PairingSession,
    draw: &mut dyn RandomDraw,
    quiet: bool,
) -> Result<(), PairwheelError> {
    let mut count = 0;
    loop {
        match session.run_pair(draw).await {
            Ok(pair) => {
                count += 1;
                if !quiet {
                    println!("Pair {count}: {pair}");
                }
            }
            Err(PairingError::NoLegalPairs { remaining }) => {
                info!(pairs = count, remaining, "pairing finished");
                if !quiet {
                    if count == 0 && remaining < 2 {
                        println!("Add at least two people to pair.");
                    }
                    if let Some(line) = leftovers(session) {
                        println!("{line}");
                    }
                }
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
        // Let the event printer keep up between rounds.
        tokio::task::yield_now().await;
    }
}

/// Read commands from stdin until `quit`, end of input or Ctrl-C.
pub async fn run_interactive(
    session: &mut PairingSession,
    draw: &mut dyn RandomDraw,
) -> Result<(), PairwheelError> {
    println!("pairwheel: type 'help' for commands");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                debug!("interrupted");
                None
            }
        };
        let Some(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => execute(session, draw, command).await,
            Err(e) => println!("{e}"),
        }
    }
    Ok(())
}

async fn execute(session: &mut PairingSession, draw: &mut dyn RandomDraw, command: Command) {
    debug!(?command, "shell command");
    match command {
        Command::Add(name) => match session.add_person(&name) {
            Ok(person) => println!("added {person} ({} in pool)", session.pool().len()),
            Err(e) => println!("{e}"),
        },
        Command::Remove(name) => match session.remove_person(&name) {
            Ok(person) => println!("removed {person} ({} in pool)", session.pool().len()),
            Err(e) => println!("{e}"),
        },
        Command::Spin => match session.run_pair(draw).await {
            Ok(pair) => println!("{pair}"),
            Err(e) => println!("{e}"),
        },
        Command::SpinAll => match session.run_until_exhausted(draw).await {
            Ok(pairs) => {
                for pair in &pairs {
                    println!("{pair}");
                }
                if let Some(line) = leftovers(session) {
                    println!("{line}");
                }
            }
            Err(e) => println!("{e}"),
        },
        Command::List => {
            let names: Vec<String> = session.pool().members().iter().map(ToString::to_string).collect();
            println!("pool ({}): {}", names.len(), names.join(", "));
            match session.locked_pair() {
                Some(locked) => println!("locked: {locked}"),
                None => println!("locked: none"),
            }
            println!("state: {}", session.state());
        }
        Command::Queue => {
            if session.queue().is_empty() {
                println!("no legal pairs");
            }
            for (idx, pair) in session.queue().iter().enumerate() {
                println!("{:>3}. {pair}", idx + 1);
            }
        }
        Command::Lock(a, b) => {
            let result = LockedPair::from_names(&a, &b)
                .and_then(|locked| session.set_locked_pair(Some(locked)));
            match result {
                Ok(()) => println!("locked {a} & {b}"),
                Err(e) => println!("{e}"),
            }
        }
        Command::Unlock => match session.set_locked_pair(None) {
            Ok(()) => println!("unlocked"),
            Err(e) => println!("{e}"),
        },
        Command::Reset => {
            session.reset();
            println!("queue reshuffled ({} pairs)", session.queue().len());
        }
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
}

/// Describe whoever is left in the pool, if anyone.
fn leftovers(session: &PairingSession) -> Option<String> {
    let members = session.pool().members();
    if members.is_empty() {
        return None;
    }
    let names: Vec<String> = members.iter().map(ToString::to_string).collect();
    Some(format!("Unpaired: {}", names.join(", ")))
}
