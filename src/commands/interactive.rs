//! Interactive query mode
//!
//! A line-oriented loop that edits one constraint set and re-runs it on
//! demand. Positions are 1-based at the prompt.

use super::search::{SearchOutcome, run_search};
use crate::catalog::WordCatalog;
use crate::core::LetterSet;
use crate::matcher::{ConstraintSet, MatchEngine};
use crate::output::display::{print_interactive_banner, print_search_outcome};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const HELP: &str = "\
Commands:
  length N        set the word length (keeps letters in positions that still exist)
  pos I L         require letter L at position I (1-based); L = * clears it
  pattern P       replace all positions, e.g. c?a** (also sets the length)
  include LETTERS letters that must appear somewhere
  exclude LETTERS letters that must not appear
  drop LETTERS    remove letters from both lists
  clear           start over
  show            print the current query
  search          run the query (an empty line does the same)
  help            this text
  quit            leave";

/// What the prompt should do after a command
#[derive(Debug, Clone)]
pub enum Reply {
    Message(String),
    Results(SearchOutcome),
    Error(String),
    Quit,
}

/// One interactive query session
#[derive(Debug)]
pub struct Session {
    default_length: usize,
    constraints: ConstraintSet,
    engine: MatchEngine,
}

impl Session {
    /// # Errors
    /// Returns `ConstraintError::ZeroLength` for a zero default length.
    pub fn new(default_length: usize) -> Result<Self, crate::matcher::ConstraintError> {
        Ok(Self {
            default_length,
            constraints: ConstraintSet::new(default_length)?,
            engine: MatchEngine::new(),
        })
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Run one command line
    pub fn handle_command(&mut self, catalog: &WordCatalog, line: &str) -> Reply {
        let line = line.trim();
        let (command, argument) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(c, a)| (c, a.trim()));

        debug!(command, argument, "Interactive command");

        match command.to_ascii_lowercase().as_str() {
            "" | "search" | "s" => self.search(catalog),
            "quit" | "q" | "exit" => Reply::Quit,
            "help" | "h" | "?" => Reply::Message(HELP.to_string()),
            "show" => Reply::Message(self.describe()),
            "clear" | "new" => match ConstraintSet::new(self.default_length) {
                Ok(set) => {
                    self.constraints = set;
                    Reply::Message("Query cleared.".to_string())
                }
                Err(e) => Reply::Error(e.to_string()),
            },
            "length" | "len" => self.set_length(argument),
            "pos" | "position" => self.set_position(argument),
            "pattern" | "p" => self.set_pattern(argument),
            "include" | "i" => self.edit_letters(argument, |set, letters| {
                letters.iter().for_each(|l| set.toggle_included(l, true));
            }),
            "exclude" | "x" => self.edit_letters(argument, |set, letters| {
                letters.iter().for_each(|l| set.toggle_excluded(l, true));
            }),
            "drop" => self.edit_letters(argument, |set, letters| {
                for l in letters.iter() {
                    set.toggle_included(l, false);
                    set.toggle_excluded(l, false);
                }
            }),
            other => Reply::Error(format!("Unknown command '{other}'. Type 'help' for a list.")),
        }
    }

    fn search(&mut self, catalog: &WordCatalog) -> Reply {
        match run_search(&mut self.engine, catalog, &self.constraints) {
            Ok(outcome) => Reply::Results(outcome),
            Err(e) => Reply::Error(e.to_string()),
        }
    }

    fn set_length(&mut self, argument: &str) -> Reply {
        let Ok(length) = argument.parse::<usize>() else {
            return Reply::Error(format!("'{argument}' is not a length."));
        };
        match self.constraints.set_target_length(length) {
            Ok(()) => Reply::Message(self.describe()),
            Err(e) => Reply::Error(e.to_string()),
        }
    }

    fn set_position(&mut self, argument: &str) -> Reply {
        let (index, input) = argument
            .split_once(char::is_whitespace)
            .map_or((argument, ""), |(i, l)| (i, l.trim()));

        let position = match index.parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => return Reply::Error(format!("'{index}' is not a position; positions start at 1.")),
        };

        match self.constraints.set_positional_input(position, input) {
            Ok(()) => Reply::Message(self.describe()),
            Err(e) => Reply::Error(e.to_string()),
        }
    }

    fn set_pattern(&mut self, argument: &str) -> Reply {
        match ConstraintSet::with_pattern(argument) {
            Ok(mut set) => {
                set.included = self.constraints.included;
                set.excluded = self.constraints.excluded;
                self.constraints = set;
                Reply::Message(self.describe())
            }
            Err(e) => Reply::Error(e.to_string()),
        }
    }

    fn edit_letters(
        &mut self,
        argument: &str,
        edit: impl FnOnce(&mut ConstraintSet, LetterSet),
    ) -> Reply {
        match argument.parse::<LetterSet>() {
            Ok(letters) if letters.is_empty() => Reply::Error("No letters given.".to_string()),
            Ok(letters) => {
                edit(&mut self.constraints, letters);
                Reply::Message(self.describe())
            }
            Err(e) => Reply::Error(e.to_string()),
        }
    }

    /// One-line summary of the current query
    #[must_use]
    pub fn describe(&self) -> String {
        let set = &self.constraints;
        let letters = |s: LetterSet| {
            if s.is_empty() {
                "-".to_string()
            } else {
                s.to_string()
            }
        };
        format!(
            "Length {} | Pattern {} | Include {} | Exclude {}",
            set.target_length(),
            set,
            letters(set.included),
            letters(set.excluded)
        )
    }
}

/// Run the interactive prompt on stdin/stdout
///
/// # Errors
///
/// Returns an error if stdin can't be read or stdout can't be written.
pub fn run_interactive(
    catalog: &WordCatalog,
    default_length: usize,
    result_limit: Option<usize>,
) -> io::Result<()> {
    let mut session = Session::new(default_length)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    print_interactive_banner(catalog);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", ">".bright_cyan().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            return Ok(());
        };

        match session.handle_command(catalog, &line) {
            Reply::Quit => return Ok(()),
            Reply::Message(text) => println!("{text}"),
            Reply::Error(text) => println!("{}", text.red()),
            Reply::Results(outcome) => print_search_outcome(&outcome, result_limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn catalog() -> WordCatalog {
        WordCatalog::from_words(["crane", "crown", "brake", "slate", "drain", "cab"])
    }

    fn words(reply: Reply) -> Vec<String> {
        match reply {
            Reply::Results(outcome) => outcome
                .result
                .words
                .iter()
                .map(Word::text)
                .map(str::to_string)
                .collect(),
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[test]
    fn empty_query_lists_target_length() {
        let mut session = Session::new(5).unwrap();
        assert_eq!(words(session.handle_command(&catalog(), "search")).len(), 5);
        assert_eq!(words(session.handle_command(&catalog(), "")).len(), 5);
    }

    #[test]
    fn position_is_one_based() {
        let catalog = catalog();
        let mut session = Session::new(5).unwrap();

        assert!(matches!(
            session.handle_command(&catalog, "pos 1 c"),
            Reply::Message(_)
        ));
        assert_eq!(session.constraints().to_string(), "C****");
        assert_eq!(words(session.handle_command(&catalog, "search")), ["crane", "crown"]);

        assert!(matches!(session.handle_command(&catalog, "pos 0 c"), Reply::Error(_)));
        assert!(matches!(session.handle_command(&catalog, "pos 6 c"), Reply::Error(_)));
    }

    #[test]
    fn letters_add_and_drop() {
        let catalog = catalog();
        let mut session = Session::new(5).unwrap();

        session.handle_command(&catalog, "include ra");
        session.handle_command(&catalog, "exclude n");
        assert_eq!(words(session.handle_command(&catalog, "search")), ["brake"]);

        session.handle_command(&catalog, "drop n");
        assert_eq!(
            words(session.handle_command(&catalog, "search")),
            ["brake", "crane", "drain"]
        );
    }

    #[test]
    fn pattern_keeps_letter_lists() {
        let catalog = catalog();
        let mut session = Session::new(5).unwrap();

        session.handle_command(&catalog, "include b");
        session.handle_command(&catalog, "pattern c??");
        assert_eq!(session.constraints().target_length(), 3);
        assert_eq!(words(session.handle_command(&catalog, "search")), ["cab"]);
    }

    #[test]
    fn length_change_and_clear() {
        let catalog = catalog();
        let mut session = Session::new(5).unwrap();

        session.handle_command(&catalog, "length 3");
        assert_eq!(words(session.handle_command(&catalog, "search")), ["cab"]);

        assert!(matches!(session.handle_command(&catalog, "length 0"), Reply::Error(_)));
        assert!(matches!(session.handle_command(&catalog, "length x"), Reply::Error(_)));

        session.handle_command(&catalog, "clear");
        assert_eq!(session.constraints().target_length(), 5);
    }

    #[test]
    fn misc_commands() {
        let catalog = catalog();
        let mut session = Session::new(5).unwrap();

        assert!(matches!(session.handle_command(&catalog, "quit"), Reply::Quit));
        assert!(matches!(session.handle_command(&catalog, "help"), Reply::Message(_)));
        assert!(matches!(session.handle_command(&catalog, "bogus"), Reply::Error(_)));
        assert!(matches!(session.handle_command(&catalog, "include 1"), Reply::Error(_)));
        assert!(matches!(session.handle_command(&catalog, "include"), Reply::Error(_)));

        match session.handle_command(&catalog, "show") {
            Reply::Message(text) => {
                assert_eq!(text, "Length 5 | Pattern ***** | Include - | Exclude -");
            }
            other => panic!("expected message, got {other:?}"),
        }
    }
}
