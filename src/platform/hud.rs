//! Score display and game-over signal

/// Host-side HUD the game reports to
pub trait Hud {
    /// Show the current score (called whenever it changes)
    fn set_score_text(&mut self, score: u32);
    /// Announce a finished run; the session resets right after
    fn notify_game_over(&mut self, final_score: u32);
}

/// HUD that writes to the log (headless/native runs)
#[derive(Debug, Default)]
pub struct LogHud {
    pub score: u32,
    pub games_over: u32,
}

impl Hud for LogHud {
    fn set_score_text(&mut self, score: u32) {
        if score != self.score {
            log::info!("Score: {}", score);
        }
        self.score = score;
    }

    fn notify_game_over(&mut self, final_score: u32) {
        self.games_over += 1;
        log::info!("Game Over! Your score: {}", final_score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_hud_tracks_score_and_game_overs() {
        let mut hud = LogHud::default();
        hud.set_score_text(10);
        hud.notify_game_over(10);
        hud.set_score_text(0);
        assert_eq!(hud.score, 0);
        assert_eq!(hud.games_over, 1);
    }
}
