use crate::GameResult;

/// Running totals over a series of games with the same seats.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchStats {
    pub num_games: usize,
    /// Games won per seat. A shared first place counts as a win for everyone
    /// in it.
    pub wins: Vec<usize>,
    total_scores: Vec<u64>,
    // Seat i minus seat i + 1, wrapping around.
    total_margins: Vec<i64>,
    total_winning_score: u64,
}

impl MatchStats {
    pub fn new(num_seats: usize) -> Self {
        Self {
            num_games: 0,
            wins: vec![0; num_seats],
            total_scores: vec![0; num_seats],
            total_margins: vec![0; num_seats],
            total_winning_score: 0,
        }
    }

    pub fn record(&mut self, result: &GameResult) {
        let n = self.wins.len();
        assert_eq!(result.scores.len(), n, "results from a different table");
        self.num_games += 1;
        for &winner in &result.winners {
            self.wins[winner] += 1;
        }
        for (idx, &score) in result.scores.iter().enumerate() {
            self.total_scores[idx] += u64::from(score);
            let next = result.scores[(idx + 1) % n];
            self.total_margins[idx] += i64::from(score) - i64::from(next);
        }
        self.total_winning_score += u64::from(result.scores.iter().copied().max().unwrap_or(0));
    }

    pub fn average_scores(&self) -> Vec<f64> {
        self.total_scores.iter().map(|&t| self.average(t as f64)).collect()
    }

    /// Average of seat i's score minus seat i + 1's, the last seat being
    /// compared to the first.
    pub fn average_margins(&self) -> Vec<f64> {
        self.total_margins.iter().map(|&t| self.average(t as f64)).collect()
    }

    pub fn average_winning_score(&self) -> f64 {
        self.average(self.total_winning_score as f64)
    }

    fn average(&self, total: f64) -> f64 {
        if self.num_games == 0 {
            0.0
        } else {
            total / self.num_games as f64
        }
    }

    /// A table of the statistics, one row per seat.
    pub fn summary(&self, names: &[String]) -> String {
        let n = self.wins.len();
        let mut result = format!("Results after {} games:\n", self.num_games);
        result += &format!(
            " {:19} | {:>6} | {:>9} | {:>10}\n",
            "seat", "wins", "avg score", "avg margin"
        );
        result += "---------------------|--------|-----------|-----------\n";
        let scores = self.average_scores();
        let margins = self.average_margins();
        for idx in 0..n {
            let margin_label = format!("vs {}", names[(idx + 1) % n]);
            result += &format!(
                " {:19} | {:>6} | {:>9.2} | {:>+10.2} ({})\n",
                names[idx], self.wins[idx], scores[idx], margins[idx], margin_label
            );
        }
        result += &format!("Average winning score: {:.2}", self.average_winning_score());
        result
    }
}
