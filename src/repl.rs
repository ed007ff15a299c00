//! Interactive console loop
//!
//! Line-in, reply-out chat against the responder, with input history and
//! the usual exit commands.

use anyhow::Result;
use rustyline::error::ReadlineError;

use crate::responder::Responder;

/// Run the console chat loop until exit/quit or EOF.
pub fn run(mut responder: Responder) -> Result<()> {
    println!("{}", crate::info());
    println!("Type a message, or 'teach: question | answer' to teach me. 'exit' quits.");
    println!();

    let config = rustyline::Config::builder().auto_add_history(true).build();
    let mut rl: rustyline::Editor<(), rustyline::history::DefaultHistory> =
        rustyline::Editor::with_config(config)?;

    loop {
        let readline = rl.readline("\x1b[32m❯\x1b[0m ");

        match readline {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }

                if input == "exit" || input == "quit" {
                    println!("Bye!");
                    break;
                }

                println!("{}", responder.respond(input));
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C cancels the current line
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Bye!");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
