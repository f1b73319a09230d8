//! Persistent high-score rankings.
//!
//! Scores rank ascending by move count, fewest first. A new score slots in
//! before the first strictly larger entry, so ties keep their seniority.
//! The whole ranking saves on every change; the display shows the top ten.

use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use std::path::PathBuf;
use std::str::FromStr;
use tileslide_core::ScoreSink;
use tracing::{info, instrument, warn};

/// Rows the score display shows, padding with blanks when short.
pub const TOP_SCORES: usize = 10;

/// One finished game: moves taken and who played.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Score {
    /// Moves the player needed to solve the puzzle.
    moves: u32,
    /// Player the score belongs to.
    player: String,
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>3} : {}", self.moves, self.player)
    }
}

/// A leaderboard line that does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Invalid leaderboard line: {}", _0)]
pub struct ScoreParseError(pub String);

impl std::error::Error for ScoreParseError {}

impl FromStr for Score {
    type Err = ScoreParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split(" : ").collect();
        let [moves, player] = parts.as_slice() else {
            return Err(ScoreParseError(line.to_string()));
        };
        let moves = moves
            .trim()
            .parse()
            .map_err(|_| ScoreParseError(line.to_string()))?;
        Ok(Score::new(moves, player.to_string()))
    }
}

/// Ranked scores backed by a file.
///
/// Loading is lenient: a missing file starts an empty board and lines that
/// do not parse are dropped, so one corrupt entry never takes down the
/// rankings.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    /// File the rankings persist to.
    path: PathBuf,
    /// Scores ordered fewest moves first.
    scores: Vec<Score>,
}

impl Leaderboard {
    /// Reads rankings from `path`, skipping lines that do not parse.
    #[instrument(skip(path))]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut scores = Vec::new();
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                for line in content.lines() {
                    match line.parse::<Score>() {
                        Ok(score) => scores.push(score),
                        Err(error) => {
                            warn!(%error, "Leaderboard file contained invalid data");
                        }
                    }
                }
            }
            Err(error) => {
                warn!(%error, path = %path.display(), "Leaderboard file could not be read");
            }
        }
        info!(count = scores.len(), "Leaderboard loaded");
        Self { path, scores }
    }

    /// Ranks a new score and saves the whole board.
    #[instrument(skip(self))]
    pub fn record_score(&mut self, moves: u32, player: &str) -> std::io::Result<()> {
        let score = Score::new(moves, player.to_string());
        match self
            .scores
            .iter()
            .position(|existing| moves < *existing.moves())
        {
            Some(index) => self.scores.insert(index, score),
            None => self.scores.push(score),
        }
        self.save()
    }

    /// Current rankings, fewest moves first.
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    /// Returns the number of recorded scores.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns `true` if no scores are recorded.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// The top of the board as display text: one line per score, padded
    /// with blank lines to exactly [`TOP_SCORES`] rows.
    pub fn top_ten(&self) -> String {
        let mut text = String::new();
        for score in self.scores.iter().take(TOP_SCORES) {
            text.push_str(&score.to_string());
            text.push('\n');
        }
        for _ in self.scores.len()..TOP_SCORES {
            text.push('\n');
        }
        text
    }

    fn save(&self) -> std::io::Result<()> {
        let mut out = String::new();
        for score in &self.scores {
            out.push_str(&score.to_string());
            out.push('\n');
        }
        std::fs::write(&self.path, out)
    }
}

impl ScoreSink for Leaderboard {
    #[instrument(skip(self))]
    fn record(&mut self, moves: u32, player: &str) {
        if let Err(error) = self.record_score(moves, player) {
            warn!(%error, path = %self.path.display(), "Failed to save leaderboard");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_renders_right_aligned_moves() {
        let score = Score::new(5, "mario".to_string());
        assert_eq!(score.to_string(), "  5 : mario");
    }

    #[test]
    fn test_score_round_trips_through_text() {
        let score = Score::new(112, "peach".to_string());
        let parsed: Score = score.to_string().parse().unwrap();
        assert_eq!(parsed, score);
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        let result = "garbage".parse::<Score>();
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_extra_separator() {
        let result = " 10 : a : b".parse::<Score>();
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric_moves() {
        let result = "abc : studly".parse::<Score>();
        assert!(result.is_err());
    }
}
