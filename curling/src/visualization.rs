use crate::{Board, Cell, GameState};

const CELL_WIDTH: usize = 4;

/// Draws the board in a box, with 1-based row and column numbers.
///
/// Blanks are shown as `·`, the anchor as `*`.
pub fn visualize_board(board: &Board) -> String {
    let size = board.size();
    let mut result = String::from("    ");
    for column in 1..=size {
        result += &format!("{:^width$}", column, width = CELL_WIDTH);
    }
    result += "\n    ╭";
    result += &"─".repeat(size * CELL_WIDTH);
    result += "╮";

    for ((row, column), cell) in board.iter() {
        if column == 1 {
            result += &format!("\n{:>3} │", row);
        }
        let text = match cell {
            Cell::Empty => String::new(),
            Cell::Anchor => String::from("*"),
            Cell::Blank => String::from("·"),
            Cell::Card(card) => card.to_string(),
        };
        result += &format!("{:^width$}", text, width = CELL_WIDTH);
        if column == size {
            result += "│";
        }
    }

    result += "\n    ╰";
    result += &"─".repeat(size * CELL_WIDTH);
    result += "╯";
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&visualize_board(self))
    }
}

impl GameState<'_> {
    /// A short human-readable summary: whose turn it is, or the final result.
    pub fn statement(&self) -> String {
        if !self.game_over {
            let player = self.next_player();
            let points = self
                .board
                .score(player.suit)
                .map(|p| p.to_string())
                .unwrap_or_else(|_| String::from("no"));
            let hand: Vec<String> = player.hand.iter().map(|c| c.rank.to_string()).collect();
            format!(
                "{}'s turn\nThey scored {} points\nThey have in their hand:\n{}",
                player,
                points,
                hand.join(" ")
            )
        } else {
            let mut result = String::from("Final score:");
            for player in self.players {
                result += &format!("\n{}: {}", player, player.score);
            }
            let best = self.players.iter().map(|p| p.score).max().unwrap_or(0);
            let winners: Vec<&str> = self
                .players
                .iter()
                .filter(|p| p.score == best)
                .map(|p| p.name.as_str())
                .collect();
            if winners.len() == 1 {
                result += &format!("\n{} wins!", winners[0]);
            } else {
                result += &format!("\n{} tie!", winners.join(" and "));
            }
            result
        }
    }
}

impl std::fmt::Display for GameState<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\n{}", self.board, self.statement())
    }
}
