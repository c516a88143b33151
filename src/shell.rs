use log::{debug, info};
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::evaluate;

/// Settings of the interactive loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Text shown before each line of input.
    pub prompt:        String,
    /// Number of decimals printed for each result.
    pub precision:     usize,
    /// Words that end the session, matched case-insensitively.
    pub exit_keywords: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { prompt:        ">>> ".to_string(),
               precision:     2,
               exit_keywords: vec!["exit".to_string(), "quit".to_string()], }
    }
}

/// What the shell should do with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line was an exit keyword.
    Exit,
    /// The expression evaluated to this formatted value.
    Value(String),
    /// The expression failed with this message.
    Failure(String),
}

/// An interactive calculator session.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    config: ShellConfig,
}

impl Shell {
    /// Text printed when the session ends on an exit keyword.
    pub const FAREWELL: &'static str = "Leaving the calculator.";

    /// Creates a session with the given settings.
    #[must_use]
    pub const fn new(config: ShellConfig) -> Self {
        Self { config }
    }

    /// Returns `true` if `line` is one of the exit keywords.
    ///
    /// Surrounding whitespace and case are ignored.
    ///
    /// # Example
    /// ```
    /// use stackcalc::shell::Shell;
    ///
    /// let shell = Shell::default();
    /// assert!(shell.is_exit_command("  QUIT "));
    /// assert!(shell.is_exit_command("Exit"));
    /// assert!(!shell.is_exit_command("exit now"));
    /// ```
    #[must_use]
    pub fn is_exit_command(&self, line: &str) -> bool {
        let line = line.trim();
        self.config
            .exit_keywords
            .iter()
            .any(|keyword| keyword.eq_ignore_ascii_case(line))
    }

    /// Formats a result with the configured number of decimals.
    #[must_use]
    pub fn format_result(&self, value: f64) -> String {
        format!("{value:.precision$}", precision = self.config.precision)
    }

    /// Decides what to do with one line of input, evaluating it if needed.
    ///
    /// A failing expression yields [`LineOutcome::Failure`]; it never ends
    /// the session. Blank lines are evaluated too and fail as empty
    /// expressions.
    ///
    /// # Example
    /// ```
    /// use stackcalc::shell::{LineOutcome, Shell};
    ///
    /// let shell = Shell::default();
    /// assert_eq!(shell.process_line("1.5 + 2.5"), LineOutcome::Value("4.00".to_string()));
    /// assert_eq!(shell.process_line("quit"), LineOutcome::Exit);
    /// assert!(matches!(shell.process_line("1 / 0"), LineOutcome::Failure(_)));
    /// ```
    #[must_use]
    pub fn process_line(&self, line: &str) -> LineOutcome {
        if self.is_exit_command(line) {
            return LineOutcome::Exit;
        }
        match evaluate(line) {
            Ok(value) => LineOutcome::Value(self.format_result(value)),
            Err(e) => {
                debug!("evaluation of {line:?} failed: {e:?}");
                LineOutcome::Failure(e.to_string())
            },
        }
    }

    /// Text printed when the session starts.
    #[must_use]
    pub fn banner(&self) -> String {
        let keywords = self.config
                           .exit_keywords
                           .iter()
                           .map(|k| format!("'{k}'"))
                           .collect::<Vec<_>>()
                           .join(" or ");
        format!("Command-line calculator (type {keywords} to leave)")
    }

    /// Runs the read-evaluate-print loop on the terminal.
    ///
    /// The loop ends on an exit keyword, Ctrl-C or end of input.
    ///
    /// # Errors
    /// Returns the terminal error if the line editor fails.
    pub fn run(&self) -> rustyline::Result<()> {
        let mut editor = DefaultEditor::new()?;
        println!("{}", self.banner());

        loop {
            let line = match editor.readline(&self.config.prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => return Err(e),
            };

            match self.process_line(&line) {
                LineOutcome::Exit => {
                    println!("{}", Self::FAREWELL);
                    break;
                },
                LineOutcome::Value(value) => {
                    editor.add_history_entry(line.as_str())?;
                    println!("Result: {value}");
                },
                LineOutcome::Failure(message) => {
                    editor.add_history_entry(line.as_str())?;
                    eprintln!("Error: {message}");
                },
            }
        }

        info!("session ended");
        Ok(())
    }
}
