//! Scoring module - line-clear points, combo streak and level progression
//!
//! Rules:
//! - A clear of n lines awards `LINE_SCORES[n] * level`.
//! - A 4-line clear bumps the combo and adds `COMBO_BASE * level * combo`;
//!   any 1-3 line clear resets the combo to 0.
//! - Cleared lines accumulate; at `LINES_PER_LEVEL` the level goes up by one
//!   and the threshold is subtracted (the surplus carries over).

use crate::types::{
    level_drop_ms, COMBO_BASE, HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_SCORES, SOFT_DROP_POINTS,
    START_LEVEL,
};

/// Points for clearing `lines` rows at once, before the level multiplier.
///
/// 0 for anything outside 1-4.
pub fn line_clear_points(lines: usize) -> u32 {
    match lines {
        1..=4 => LINE_SCORES[lines],
        _ => 0,
    }
}

/// Drop score: 1 point per row for a soft drop, 2 for a hard drop
pub fn calculate_drop_score(rows: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        rows * HARD_DROP_POINTS
    } else {
        rows * SOFT_DROP_POINTS
    }
}

/// What a single line clear did to the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearOutcome {
    pub lines: usize,
    /// Line points (level-scaled), excluding the combo bonus
    pub line_points: u32,
    pub combo_bonus: u32,
    pub level_up: bool,
}

impl ClearOutcome {
    pub fn total(&self) -> u32 {
        self.line_points + self.combo_bonus
    }
}

/// Player counters: score, lines toward the next level, level, combo streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Account {
    pub score: u32,
    /// Lines cleared in the current level (always below `LINES_PER_LEVEL`)
    pub lines: u32,
    pub level: u32,
    /// Consecutive 4-line clears
    pub combo: u32,
}

impl Account {
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: START_LEVEL,
            combo: 0,
        }
    }

    /// Apply the scoring rules for `lines` rows cleared by one freeze.
    pub fn record_clear(&mut self, lines: usize) -> ClearOutcome {
        if lines == 0 {
            return ClearOutcome::default();
        }

        let line_points = line_clear_points(lines) * self.level;
        self.score += line_points;
        self.lines += lines as u32;

        let mut combo_bonus = 0;
        if lines == 4 {
            self.combo += 1;
            combo_bonus = COMBO_BASE * self.level * self.combo;
            self.score += combo_bonus;
        } else {
            self.combo = 0;
        }

        let level_up = self.lines >= LINES_PER_LEVEL;
        if level_up {
            self.level += 1;
            self.lines -= LINES_PER_LEVEL;
        }

        ClearOutcome {
            lines,
            line_points,
            combo_bonus,
            level_up,
        }
    }

    pub fn add_drop_score(&mut self, rows: u32, is_hard_drop: bool) {
        self.score += calculate_drop_score(rows, is_hard_drop);
    }

    /// Drop interval for the current level
    pub fn drop_interval_ms(&self) -> u32 {
        level_drop_ms(self.level)
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_points() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 100);
        assert_eq!(line_clear_points(2), 300);
        assert_eq!(line_clear_points(3), 500);
        assert_eq!(line_clear_points(4), 800);
        assert_eq!(line_clear_points(5), 0);
    }

    #[test]
    fn single_at_level_one() {
        let mut account = Account::new();
        let out = account.record_clear(1);
        assert_eq!(out.total(), 100);
        assert_eq!(account.score, 100);
        assert_eq!(account.lines, 1);
        assert_eq!(account.combo, 0);
    }

    #[test]
    fn first_tetris_awards_combo_bonus() {
        let mut account = Account::new();
        let out = account.record_clear(4);
        assert_eq!(out.line_points, 800);
        assert_eq!(out.combo_bonus, 50);
        assert_eq!(account.score, 850);
        assert_eq!(account.combo, 1);
    }

    #[test]
    fn consecutive_tetrises_grow_the_bonus() {
        let mut account = Account::new();
        account.record_clear(4);
        let out = account.record_clear(4);
        assert_eq!(out.combo_bonus, 100);
        assert_eq!(account.combo, 2);
        assert_eq!(account.score, 850 + 900);
    }

    #[test]
    fn non_tetris_clear_resets_combo() {
        let mut account = Account::new();
        account.record_clear(4);
        account.record_clear(2);
        assert_eq!(account.combo, 0);
    }

    #[test]
    fn zero_lines_changes_nothing() {
        let mut account = Account::new();
        account.combo = 3;
        let before = account;
        assert_eq!(account.record_clear(0), ClearOutcome::default());
        assert_eq!(account, before);
    }

    #[test]
    fn level_up_keeps_surplus_lines() {
        let mut account = Account::new();
        account.lines = 8;
        let out = account.record_clear(3);
        assert!(out.level_up);
        assert_eq!(account.level, 2);
        assert_eq!(account.lines, 1);
        assert_eq!(account.drop_interval_ms(), 630);
    }

    #[test]
    fn points_scale_with_level() {
        let mut account = Account::new();
        account.level = 3;
        account.record_clear(2);
        assert_eq!(account.score, 900);
    }

    #[test]
    fn test_drop_scores() {
        assert_eq!(calculate_drop_score(10, false), 10);
        assert_eq!(calculate_drop_score(10, true), 20);
    }
}
