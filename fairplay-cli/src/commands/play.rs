use super::render_table;
use fairplay_core::{FairplayError, GameSession, MoveSet, Result, RoundReveal, Step};
use std::io::{BufRead, Write};

/// Drive a committed session over a line-based console.
///
/// Prints the commitment, then loops on the menu until the player picks a
/// move or exits. End of input counts as exit. Returns the reveal when the
/// round was resolved.
pub fn play_round<I: BufRead, O: Write>(
    session: &mut GameSession,
    input: &mut I,
    output: &mut O,
) -> Result<Option<RoundReveal>> {
    let commitment = *session
        .commitment()
        .ok_or_else(|| FairplayError::invalid_state("round must be committed before play"))?;
    writeln!(output, "HMAC: {}", commitment)?;

    loop {
        session.await_input()?;
        write_menu(output, session.moves())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("Input closed, leaving round {}", session.id());
            session.exit()?;
            writeln!(output, "Game exited.")?;
            return Ok(None);
        }

        match session.handle_input(&line)? {
            Step::Help(table) => writeln!(output, "{}", render_table(&table))?,
            Step::Invalid(_) => writeln!(output, "Invalid input. Please try again.")?,
            Step::Exited => {
                writeln!(output, "Game exited.")?;
                return Ok(None);
            }
            Step::Resolved(reveal) => {
                write_reveal(output, &reveal)?;
                return Ok(Some(reveal));
            }
        }
    }
}

fn write_menu<O: Write>(output: &mut O, moves: &MoveSet) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "Available moves:")?;
    for (position, name) in moves.iter().enumerate() {
        writeln!(output, "{} - {}", position + 1, name)?;
    }
    writeln!(output, "0 - Exit")?;
    writeln!(output, "? - Help")?;
    Ok(())
}

fn write_reveal<O: Write>(output: &mut O, reveal: &RoundReveal) -> Result<()> {
    writeln!(output, "Your move: {}", reveal.player_move)?;
    writeln!(output, "Computer's move: {}", reveal.computer_move)?;
    writeln!(output, "Result: You {}", reveal.outcome)?;
    writeln!(output, "HMAC key: {}", reveal.key.to_hex())?;
    Ok(())
}
