//! The driving loop: alternates players, applies moves, ends the game.
//!
//! Strictly sequential — one move is fully resolved before the next
//! player's legal moves are computed. Every agent failure and every
//! rejected move deactivates the offending seat and ends the game on
//! the spot; there is no retry path anywhere in the loop.

use std::time::Instant;

use crate::board::House;
use crate::core::{ForfeitReason, GameState, PlayerId, PlayerPair};
use crate::error::AgentError;
use crate::rules::TerminalResult;

use super::agent::PlayerAgent;
use super::config::SessionConfig;
use super::observer::GameObserver;

/// Runs one game between two agents.
pub struct Referee {
    state: GameState,
    agents: PlayerPair<Box<dyn PlayerAgent>>,
    observers: Vec<Box<dyn GameObserver>>,
    config: SessionConfig,
}

impl Referee {
    /// Set up a fresh game between `agent0` (player 0) and `agent1`.
    #[must_use]
    pub fn new(
        config: SessionConfig,
        agent0: impl PlayerAgent + 'static,
        agent1: impl PlayerAgent + 'static,
    ) -> Self {
        let state = GameState::new().with_max_turns(config.max_turns);
        Self::resume(state, config, agent0, agent1)
    }

    /// Continue from an existing position, e.g. a restored snapshot.
    #[must_use]
    pub fn resume(
        state: GameState,
        config: SessionConfig,
        agent0: impl PlayerAgent + 'static,
        agent1: impl PlayerAgent + 'static,
    ) -> Self {
        Self {
            state,
            agents: PlayerPair::from_parts(Box::new(agent0), Box::new(agent1)),
            observers: Vec::new(),
            config,
        }
    }

    /// Attach a presentation sink.
    #[must_use]
    pub fn with_observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// The game state as it currently stands.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play until the game ends and return the result.
    pub fn run(&mut self) -> TerminalResult {
        loop {
            if let Some(result) = self.state.outcome() {
                return *result;
            }
            self.play_turn();
        }
    }

    /// Resolve a single turn. Does nothing once the game is finished.
    pub fn play_turn(&mut self) {
        if self.state.is_finished() {
            return;
        }

        let player = self.state.active_player();
        let legal = self.state.legal_moves(player);
        if legal.is_empty() {
            log::debug!("{player} has no legal move; sweeping the board");
            let sweep = self.state.sweep_remaining(player);
            for observer in &mut self.observers {
                observer.on_sweep(&self.state, player, &sweep);
            }
            self.notify_if_finished();
            return;
        }

        let view = self.state.view(player);
        let asked = Instant::now();
        let mut choice = self.agents[player].choose(&view);
        if asked.elapsed() > self.config.move_deadline {
            choice = Err(AgentError::Timeout);
        }

        match choice {
            Ok(house) => self.resolve_move(player, house),
            Err(AgentError::Malformed(message)) => {
                log::warn!("{player} sent a malformed response: {message}");
                self.deactivate(player, ForfeitReason::MalformedResponse);
            }
            Err(AgentError::Timeout) => {
                log::warn!("{player} missed the move deadline");
                self.deactivate(player, ForfeitReason::Timeout);
            }
        }
        self.notify_if_finished();
    }

    fn resolve_move(&mut self, player: PlayerId, house: House) {
        match self.state.apply_move(player, house) {
            Ok(outcome) => {
                log::debug!("{player} played ({})", house.index());
                for observer in &mut self.observers {
                    observer.on_move(&self.state, &outcome);
                }
            }
            Err(error) => {
                log::warn!("{player} rejected: {error}");
                self.deactivate(player, ForfeitReason::InvalidMove);
            }
        }
    }

    fn deactivate(&mut self, player: PlayerId, reason: ForfeitReason) {
        self.state.deactivate(player, reason);
        for observer in &mut self.observers {
            observer.on_deactivated(&self.state, player, reason);
        }
    }

    fn notify_if_finished(&mut self) {
        if let Some(result) = self.state.outcome().copied() {
            for observer in &mut self.observers {
                observer.on_finished(&self.state, &result);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{FinishReason, GameResult};
    use crate::session::agent::{RandomAgent, ScriptedAgent};

    #[test]
    fn test_random_game_terminates() {
        let mut referee = Referee::new(
            SessionConfig::default(),
            RandomAgent::new(1),
            RandomAgent::new(2),
        );
        let result = referee.run();

        assert!(referee.state().is_finished());
        assert!(referee.state().turn_number() <= 100);
        match result.result {
            GameResult::Winner(winner) => {
                let loser = winner.other();
                assert!(result.scores[winner] > result.scores[loser]);
            }
            GameResult::Draw => {
                assert_eq!(
                    result.scores[PlayerId::new(0)],
                    result.scores[PlayerId::new(1)]
                );
            }
        }
    }

    #[test]
    fn test_illegal_choice_forfeits() {
        // Player 0 opens on a house it does not own.
        let mut referee = Referee::new(
            SessionConfig::default(),
            ScriptedAgent::new([House::new(9)]),
            RandomAgent::new(3),
        );
        let result = referee.run();

        assert_eq!(result.reason, FinishReason::Forfeit);
        assert_eq!(result.result, GameResult::Winner(PlayerId::new(1)));
        assert_eq!(result.scores[PlayerId::new(0)], -1);
    }

    #[test]
    fn test_exhausted_script_forfeits_as_malformed() {
        let mut referee = Referee::new(
            SessionConfig::default(),
            ScriptedAgent::new([]),
            RandomAgent::new(4),
        );
        let result = referee.run();

        assert_eq!(result.reason, FinishReason::Forfeit);
        assert_eq!(result.result, GameResult::Winner(PlayerId::new(1)));
    }
}
