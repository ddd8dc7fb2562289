//! Interactive read-eval-print loop.
//!
//! Reads one command per line, prints the reply to the output, and
//! terminates on an exit command. The loop is generic over its input and
//! output streams so whole sessions can be scripted in tests.

use crate::commands::{execute, parse, Command};
use crate::models::AddressBook;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the command loop over `input` until an exit command or EOF.
///
/// Every reply, including error messages, goes to `output` followed by a
/// newline. Handler errors never end the session; the only error path
/// out of here is I/O on the streams themselves.
pub fn run<R, W>(
    book: &mut AddressBook,
    input: R,
    output: &mut W,
    prompt: &str,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    info!("session started");

    let mut lines = input.lines();
    loop {
        // Prompt before blocking on the next line
        write!(output, "{}", prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let (command, args) = parse(&line);
        let reply = execute(book, command, &args);
        writeln!(output, "{}", reply)?;

        if command == Command::Exit {
            break;
        }
    }

    info!(contacts = book.len(), "session ended");
    Ok(())
}
