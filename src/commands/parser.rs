//! Command keyword parser.
//!
//! Maps a raw input line to a [`Command`] plus its whitespace-split
//! arguments. Matching is an ASCII case-insensitive prefix match over a
//! static keyword table ordered longest literal first, so `"good bye"`
//! can never lose to a shorter overlapping keyword.

/// The commands the book understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Create a contact or extend an existing one with a phone
    Add,
    /// Replace one of a contact's phones
    ChangePhone,
    /// List a contact's phones
    ShowPhone,
    /// Print every contact
    ShowAll,
    /// Fixed greeting
    Hello,
    /// Farewell; terminates the loop
    Exit,
    /// Anything that matched no keyword
    Unknown,
}

/// Keyword table, longest literal first. Order is the tie-break: the
/// first matching prefix wins.
const COMMANDS: &[(&str, Command)] = &[
    ("good bye", Command::Exit),
    ("show all", Command::ShowAll),
    ("change", Command::ChangePhone),
    ("close", Command::Exit),
    ("hello", Command::Hello),
    ("phone", Command::ShowPhone),
    ("exit", Command::Exit),
    ("add", Command::Add),
];

/// Parse one input line into a command and its arguments.
///
/// The keyword match is case-insensitive; the arguments keep the
/// original casing of the remainder of the line. Unmatched lines parse
/// to [`Command::Unknown`] with no arguments.
pub fn parse(line: &str) -> (Command, Vec<String>) {
    let line = line.trim_start();

    for (keyword, command) in COMMANDS {
        let Some(prefix) = line.get(..keyword.len()) else {
            continue;
        };
        if prefix.eq_ignore_ascii_case(keyword) {
            let args = line[keyword.len()..]
                .split_whitespace()
                .map(str::to_string)
                .collect();
            return (*command, args);
        }
    }

    (Command::Unknown, Vec::new())
}
