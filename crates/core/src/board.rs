//! Board module - game rules over the grid and the pieces
//!
//! The board owns the frozen grid, the active piece, the pre-generated next
//! piece, the held piece and the player's account. Every mutation that could
//! corrupt the grid goes through [`Board::valid`] first; out-of-range
//! candidates are rejected, never clamped.
//!
//! Lifecycle of a piece:
//!
//! 1. generated as `next` (previewed at the origin of the next view)
//! 2. promoted to active at its starting position
//! 3. moved/rotated by validated candidates
//! 4. frozen into the grid by [`Board::drop`], or parked by [`Board::hold_piece`]

use tracing::{debug, info};

use crate::grid::{Block, Grid};
use crate::moves::Move;
use crate::piece::Piece;
use crate::render::{Paint, Surface};
use crate::rng::PieceRng;
use crate::scoring::{Account, ClearOutcome};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_SIZE};

#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    piece: Piece,
    next: Piece,
    hold: Option<Piece>,
    can_hold: bool,
    account: Account,
    drop_interval_ms: u32,
    rng: PieceRng,
}

impl Board {
    /// Create a board with a fresh game already set up
    pub fn new(seed: u64) -> Self {
        Self::with_rng(PieceRng::new(seed))
    }

    pub fn with_rng(mut rng: PieceRng) -> Self {
        let piece = Piece::spawn(&mut rng);
        let next = Piece::spawn(&mut rng);
        let account = Account::new();
        Self {
            grid: Grid::new(),
            piece,
            next,
            hold: None,
            can_hold: true,
            drop_interval_ms: account.drop_interval_ms(),
            account,
            rng,
        }
    }

    /// Empty grid, fresh active and next pieces, hold cleared and enabled.
    ///
    /// The account is left alone; see [`Board::reset_account`].
    pub fn reset(&mut self) {
        self.grid.clear();
        self.piece = Piece::spawn(&mut self.rng);
        self.piece.set_starting_position();
        self.next = self.new_next_piece();
        self.can_hold = true;
        self.hold = None;
    }

    /// Back to score 0, level 1, no lines, no combo.
    pub fn reset_account(&mut self) {
        self.account = Account::new();
        self.drop_interval_ms = self.account.drop_interval_ms();
    }

    fn new_next_piece(&mut self) -> Piece {
        Piece::spawn(&mut self.rng)
    }

    /// True iff every filled sub-cell of `candidate` is inside the walls,
    /// above the floor and on an empty grid cell.
    ///
    /// Rows above 0 are allowed; that is where pieces enter the board.
    pub fn valid(&self, candidate: &Piece) -> bool {
        candidate.cells().all(|(x, y, _)| {
            x >= 0 && x < BOARD_WIDTH as i8 && y < BOARD_HEIGHT as i8 && !self.grid.is_occupied(x, y)
        })
    }

    /// Commit `candidate` as the active piece if it is valid.
    pub fn apply(&mut self, candidate: &Piece) -> bool {
        if !self.valid(candidate) {
            return false;
        }
        self.piece.move_to(candidate);
        true
    }

    /// Advance the active piece one row.
    ///
    /// When it cannot move it is frozen, full lines are cleared, and the next
    /// piece takes over. Returns false (game over) when the frozen piece's
    /// row was 0; no replacement is spawned in that case.
    pub fn drop(&mut self) -> bool {
        let candidate = Move::Down.apply(&self.piece);
        if self.valid(&candidate) {
            self.piece.move_to(&candidate);
            return true;
        }

        self.freeze();
        self.clear_lines();

        if self.piece.y == 0 {
            info!(
                score = self.account.score,
                level = self.account.level,
                "piece froze at the top, game over"
            );
            return false;
        }

        self.piece = self.next;
        self.piece.set_starting_position();
        self.next = self.new_next_piece();
        self.can_hold = true;
        true
    }

    /// Write the active piece's filled sub-cells into the grid.
    ///
    /// Sub-cells above row 0 cannot be stored and are skipped.
    pub fn freeze(&mut self) {
        let block = Block {
            value: self.piece.type_id(),
            color: self.piece.color(),
        };
        for (x, y, value) in self.piece.cells() {
            self.grid.set(x, y, Some(Block { value, ..block }));
        }
        debug!(
            kind = self.piece.kind.as_str(),
            x = self.piece.x,
            y = self.piece.y,
            "froze piece"
        );
    }

    /// Remove full rows and score them.
    pub fn clear_lines(&mut self) -> ClearOutcome {
        let cleared = self.grid.clear_full_rows();
        let outcome = self.account.record_clear(cleared.len());

        if outcome.lines > 0 {
            debug!(
                lines = outcome.lines,
                points = outcome.total(),
                combo = self.account.combo,
                "cleared lines"
            );
        }
        if outcome.level_up {
            self.drop_interval_ms = self.account.drop_interval_ms();
            info!(
                level = self.account.level,
                interval_ms = self.drop_interval_ms,
                "level up"
            );
        }

        outcome
    }

    /// Candidate rotated 90° clockwise; `piece` itself is untouched.
    pub fn rotate(&self, piece: &Piece) -> Piece {
        Move::Rotate.apply(piece)
    }

    /// Park the active piece.
    ///
    /// With a piece already held the two swap and the previously held one
    /// restarts at its starting position; otherwise the next piece takes
    /// over. Either way the parked piece returns to its catalog orientation
    /// and holding stays disabled until the next freeze.
    pub fn hold_piece(&mut self) {
        if !self.can_hold {
            return;
        }

        let mut parked = self.piece;
        parked.reset_shape();

        match self.hold.take() {
            Some(held) => {
                self.piece = held;
            }
            None => {
                self.piece = self.next;
                self.next = self.new_next_piece();
            }
        }
        self.piece.set_starting_position();
        self.hold = Some(parked);
        self.can_hold = false;
    }

    /// Where `piece` would land if dropped straight down from where it is.
    pub fn drop_position(&self, piece: &Piece) -> Piece {
        let mut landed = *piece;
        loop {
            let below = Move::Down.apply(&landed);
            if !self.valid(&below) {
                return landed;
            }
            landed = below;
        }
    }

    /// Ghost outline, then the active piece, then the frozen cells.
    pub fn draw(&self, surface: &mut impl Surface) {
        let ghost = self.drop_position(&self.piece);
        ghost.paint(surface, ghost.x, ghost.y, Paint::Outline);

        self.piece.draw(surface, 0, 0);

        for (y, row) in self.grid.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(block) = cell {
                    surface.fill_cell(x as i8, y as i8, block.color, Paint::Solid);
                }
            }
        }
    }

    /// Next-piece preview, at the view origin
    pub fn draw_next(&self, surface: &mut impl Surface) {
        surface.clear_region(0, 0, PREVIEW_SIZE, PREVIEW_SIZE);
        self.next.draw_shape(surface, 0, 0);
    }

    /// Held-piece preview, at the view origin (cleared when nothing is held)
    pub fn draw_hold(&self, surface: &mut impl Surface) {
        surface.clear_region(0, 0, PREVIEW_SIZE, PREVIEW_SIZE);
        if let Some(held) = &self.hold {
            held.draw_shape(surface, 0, 0);
        }
    }

    /// Replace the active piece as-is (no validation)
    pub fn set_piece(&mut self, piece: Piece) {
        self.piece = piece;
    }

    /// Replace the pre-generated next piece
    pub fn set_next(&mut self, piece: Piece) {
        self.next = piece;
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn held(&self) -> Option<&Piece> {
        self.hold.as_ref()
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for setting up positions
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
