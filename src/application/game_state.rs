use std::fmt;

use crate::config::GameConfig;

/// Score bookkeeping and the Playing/Ended state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub score: u64,
    /// Kept across resets
    pub high_score: u64,
    pub ended: bool,
    pub max_depth: u32,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            high_score: 0,
            ended: false,
            max_depth: config.initial_depth,
        }
    }

    /// Add points and lift the high score along with them
    pub fn award(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
        self.high_score = self.high_score.max(self.score);
    }

    /// Playing -> Ended. Returns the final tally only on the transition.
    pub fn end(&mut self) -> Option<GameOver> {
        if self.ended {
            return None;
        }
        self.ended = true;
        Some(GameOver {
            score: self.score,
            high_score: self.high_score,
        })
    }

    /// Ended/Playing -> Playing with a fresh score
    pub fn reset(&mut self, config: &GameConfig) {
        self.score = 0;
        self.ended = false;
        self.max_depth = config.initial_depth;
    }
}

/// Terminal notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub score: u64,
    pub high_score: u64,
}

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game Over! Your score: {}\nHigh Score: {}",
            self.score, self.high_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_tracks_high_score() {
        let mut state = GameState::new(&GameConfig::default());
        state.award(10);
        state.award(10);
        assert_eq!(state.score, 20);
        assert_eq!(state.high_score, 20);
    }

    #[test]
    fn test_end_is_one_shot() {
        let mut state = GameState::new(&GameConfig::default());
        state.award(30);
        assert_eq!(state.end(), Some(GameOver { score: 30, high_score: 30 }));
        assert_eq!(state.end(), None);
        assert!(state.ended);
    }

    #[test]
    fn test_reset_keeps_high_score() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.award(40);
        state.max_depth = 9;
        state.end();
        state.reset(&config);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 40);
        assert_eq!(state.max_depth, 5);
        assert!(!state.ended);
    }

    #[test]
    fn test_game_over_message() {
        let msg = GameOver { score: 50, high_score: 120 }.to_string();
        assert_eq!(msg, "Game Over! Your score: 50\nHigh Score: 120");
    }
}
