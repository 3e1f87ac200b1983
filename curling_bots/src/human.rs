use std::io::{BufRead, Stdout, StdinLock, Write};

use curling::{Card, GameState, Ply, Rank};

use crate::Bot;

/// Asks a person for moves, reading answers from `input` and writing prompts
/// to `output`.
///
/// Answers that can't be parsed are asked for again. Whether the move is
/// legal is up to the game to decide.
pub struct HumanBot<R, W> {
    input: R,
    output: W,
    // Should always be empty between reads.
    buf: String,
}

impl HumanBot<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanBot<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // Prompts until `parse` accepts the answer.
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> anyhow::Result<T> {
        loop {
            writeln!(self.output, "{}", prompt)?;
            self.output.flush()?;
            self.buf.clear();
            if self.input.read_line(&mut self.buf)? == 0 {
                anyhow::bail!("Input closed while waiting for an answer to '{}'", prompt);
            }
            let answer = parse(self.buf.trim());
            self.buf.clear();
            match answer {
                Ok(value) => return Ok(value),
                Err(msg) => writeln!(self.output, "{}", msg)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Bot for HumanBot<R, W> {
    fn propose(&mut self, state: &GameState<'_>) -> anyhow::Result<Ply> {
        let suit = state.next_player().suit;
        // A rank alone means the card of the player's own suit.
        let card = self.ask("Pick a card:", |answer| {
            answer
                .parse::<Card>()
                .or_else(|_| answer.parse::<Rank>().map(|rank| Card::new(rank, suit)))
                .map_err(|err| err.to_string())
        })?;
        let parse_index = |answer: &str| {
            answer
                .parse::<usize>()
                .map_err(|_| format!("'{}' is not a row or column number", answer))
        };
        let row = self.ask("Pick row:", parse_index)?;
        let column = self.ask("Pick column:", parse_index)?;
        Ok(Ply { card, row, column })
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
