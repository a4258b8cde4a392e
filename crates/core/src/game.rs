//! Game session driver
//!
//! Wraps a [`Board`] with the drop clock and the session phase. The frontend
//! feeds it wall-clock milliseconds through [`Game::tick`] and player actions
//! through [`Game::handle`]; everything else is read back for rendering.

use tracing::info;

use crate::board::Board;
use crate::clock::DropClock;
use crate::moves::Move;
use crate::render::Surface;
use crate::scoring::Account;
use crate::stats::{publish_diff, StatsSink};
use crate::types::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Running,
    Paused,
    Over,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    clock: DropClock,
    phase: Phase,
    published: Option<Account>,
}

impl Game {
    /// Create a session and start the first game at `now_ms`.
    pub fn new(seed: u64, now_ms: u64) -> Self {
        let board = Board::new(seed);
        let clock = DropClock::for_level(now_ms, board.account().level);
        Self {
            board,
            clock,
            phase: Phase::Running,
            published: None,
        }
    }

    /// Fresh account and board, clock at level-1 speed.
    pub fn new_game(&mut self, now_ms: u64) {
        self.board.reset_account();
        self.board.reset();
        self.clock = DropClock::for_level(now_ms, self.board.account().level);
        self.phase = Phase::Running;
        self.published = None;
        info!(seed = self.board.seed(), "new game");
    }

    /// Gravity step. Returns true when the board advanced.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.phase != Phase::Running || !self.clock.due(now_ms) {
            return false;
        }

        if !self.board.drop() {
            self.phase = Phase::Over;
            return true;
        }
        self.clock.set_interval(self.board.drop_interval_ms());
        true
    }

    /// Apply one player action. Returns true when it changed the session.
    pub fn handle(&mut self, action: GameAction, now_ms: u64) -> bool {
        match (self.phase, action) {
            (Phase::Over, _) => false,
            (Phase::Running, GameAction::Pause) => {
                self.phase = Phase::Paused;
                true
            }
            (Phase::Paused, GameAction::Pause) => {
                self.phase = Phase::Running;
                self.clock.restart(now_ms);
                true
            }
            (Phase::Paused, _) => false,
            (Phase::Running, GameAction::Hold) => {
                let could_hold = self.board.can_hold();
                self.board.hold_piece();
                could_hold
            }
            (Phase::Running, GameAction::HardDrop) => self.hard_drop() > 0,
            (Phase::Running, GameAction::SoftDrop) => {
                let candidate = Move::Down.apply(self.board.piece());
                let moved = self.board.apply(&candidate);
                if moved {
                    self.board.account_mut().add_drop_score(1, false);
                }
                moved
            }
            (Phase::Running, action) => match Move::for_action(action) {
                Some(mv) => {
                    let candidate = mv.apply(self.board.piece());
                    self.board.apply(&candidate)
                }
                None => false,
            },
        }
    }

    /// Slide the active piece down while the move stays valid, 2 points per
    /// row. The piece is not frozen; the next tick does that.
    fn hard_drop(&mut self) -> u32 {
        let mut rows = 0;
        loop {
            let candidate = Move::Down.apply(self.board.piece());
            if !self.board.apply(&candidate) {
                break;
            }
            rows += 1;
        }
        self.board.account_mut().add_drop_score(rows, true);
        rows
    }

    /// End the session from outside (player quit).
    pub fn quit(&mut self) {
        if self.phase != Phase::Over {
            info!(score = self.board.account().score, "game quit");
        }
        self.phase = Phase::Over;
    }

    /// Push counters that changed since the last flush.
    pub fn flush_stats(&mut self, sink: &mut impl StatsSink) {
        let current = *self.board.account();
        publish_diff(self.published.as_ref(), &current, sink);
        self.published = Some(current);
    }

    /// Draw the three views: main board, next preview, hold preview.
    pub fn draw(
        &self,
        board: &mut impl Surface,
        next: &mut impl Surface,
        hold: &mut impl Surface,
    ) {
        self.board.draw(board);
        self.board.draw_next(next);
        self.board.draw_hold(hold);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn account(&self) -> &Account {
        self.board.account()
    }

    pub fn clock(&self) -> &DropClock {
        &self.clock
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }
}
