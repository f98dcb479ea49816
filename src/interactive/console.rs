//! Console guesser
//!
//! A human plays through a line-oriented prompt. After each guess the
//! humanised signature is echoed back before the next prompt.

use crate::core::{History, Word};
use crate::solver::Strategy;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Help text explaining the rendered feedback
pub const HELP: &str = "
--------
After each guess, a signature will be displayed. In the signature,
the character '-' means the letter is not in the word. Lower case
letters are not in the right place, while upper case letters are
correctly placed. Example:

guess> tears
       --ars (0 letters in the correct place)
guess> cloud
       -l-u- (0 letters in the correct place)
guess> aural
       -URAL (4 letters in the correct place)
guess> rural

Success!
--------
";

/// Strategy that asks a person for each guess
///
/// Generic over its input and output so it can be driven by a script.
pub struct ConsoleStrategy<R, W> {
    input: R,
    output: W,
    word_length: usize,
}

impl ConsoleStrategy<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process's standard input and output
    #[must_use]
    pub fn stdio(word_length: usize) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), word_length)
    }
}

impl<R: BufRead, W: Write> ConsoleStrategy<R, W> {
    pub const fn new(input: R, output: W, word_length: usize) -> Self {
        Self {
            input,
            output,
            word_length,
        }
    }

    /// Give back the writer, mostly for inspecting scripted sessions
    pub fn into_output(self) -> W {
        self.output
    }

    fn report_previous(&mut self, history: &History, last_correct: usize) -> io::Result<()> {
        match history.last() {
            None => writeln!(self.output, "New goal word selected"),
            Some(record) => writeln!(
                self.output,
                "       {} ({last_correct} letters in the correct place)",
                record.signature().humanize(record.guess()).bold()
            ),
        }
    }

    /// Prompt until a valid word arrives; `None` on end of input
    fn read_guess(&mut self) -> io::Result<Option<Word>> {
        loop {
            write!(self.output, "guess> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match Word::with_length(line.trim(), self.word_length) {
                Ok(word) => return Ok(Some(word)),
                Err(err) => {
                    log::debug!("rejected guess {:?}: {err}", line.trim());
                    writeln!(self.output, "{}-letter words only", self.word_length)?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Strategy for ConsoleStrategy<R, W> {
    fn name(&self) -> &'static str {
        "interactive"
    }

    fn next_guess(&mut self, _: &[Word], history: &History, last_correct: usize) -> Option<Word> {
        let result = self
            .report_previous(history, last_correct)
            .and_then(|()| self.read_guess());

        result.unwrap_or_else(|err| {
            log::error!("console I/O failed: {err}");
            None
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn console(script: &str) -> ConsoleStrategy<&[u8], Vec<u8>> {
        ConsoleStrategy::new(script.as_bytes(), Vec::new(), 5)
    }

    fn output(strategy: ConsoleStrategy<&[u8], Vec<u8>>) -> String {
        String::from_utf8(strategy.into_output()).unwrap()
    }

    #[test]
    fn announces_new_game_and_reads_guess() {
        colored::control::set_override(false);
        let mut strategy = console("tears\n");
        let guess = strategy.next_guess(&[], &History::new(), 0).unwrap();

        assert_eq!(guess.text(), "tears");
        let out = output(strategy);
        assert!(out.starts_with("New goal word selected\n"));
        assert!(out.ends_with("guess> "));
    }

    #[test]
    fn rejects_wrong_length_and_retries() {
        let mut strategy = console("mice\nno way\nBLIND\n");
        let guess = strategy.next_guess(&[], &History::new(), 0).unwrap();

        assert_eq!(guess.text(), "blind");
        let out = output(strategy);
        assert_eq!(out.matches("5-letter words only").count(), 2);
    }

    #[test]
    fn reports_previous_signature() {
        colored::control::set_override(false);
        let goal = Word::new("rural").unwrap();
        let guess = Word::new("aural").unwrap();
        let (signature, correct) = evaluate(&goal, &guess).unwrap();
        let mut history = History::new();
        history.push(guess, signature);

        let mut strategy = console("rural\n");
        let next = strategy.next_guess(&[], &history, correct).unwrap();

        assert_eq!(next.text(), "rural");
        assert!(output(strategy).contains("-URAL (4 letters in the correct place)"));
    }

    #[test]
    fn end_of_input_gives_up() {
        let mut strategy = console("");
        assert!(strategy.next_guess(&[], &History::new(), 0).is_none());
    }
}
