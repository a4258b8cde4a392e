//! Stat notifications for display layers.
//!
//! The account is a plain owned struct. Observers do not intercept writes;
//! the driver diffs the account against what it last published and pushes
//! each changed counter to a [`StatsSink`].

use crate::scoring::Account;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Score,
    Lines,
    Level,
    Combo,
}

impl Stat {
    pub const ALL: [Stat; 4] = [Stat::Score, Stat::Lines, Stat::Level, Stat::Combo];

    pub fn read(self, account: &Account) -> u32 {
        match self {
            Stat::Score => account.score,
            Stat::Lines => account.lines,
            Stat::Level => account.level,
            Stat::Combo => account.combo,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stat::Score => "score",
            Stat::Lines => "lines",
            Stat::Level => "level",
            Stat::Combo => "combo",
        }
    }
}

/// Receiver of stat changes
pub trait StatsSink {
    fn stat_changed(&mut self, stat: Stat, value: u32);
}

impl<F: FnMut(Stat, u32)> StatsSink for F {
    fn stat_changed(&mut self, stat: Stat, value: u32) {
        self(stat, value)
    }
}

/// Push every counter of `current` that differs from `previous`
/// (all of them when there is no previous).
pub fn publish_diff(previous: Option<&Account>, current: &Account, sink: &mut impl StatsSink) {
    for stat in Stat::ALL {
        let value = stat.read(current);
        if previous.map_or(true, |prev| stat.read(prev) != value) {
            sink.stat_changed(stat, value);
        }
    }
}
