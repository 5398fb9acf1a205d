use crate::chart::{ChartKind, ChartTable};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Dashboard,
    SelectUser,
}

/// Lifecycle of one selection change:
/// Idle → Loading → {Rendered | Empty | Errored}, with Idle reachable
/// directly when the selection is cleared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionPhase {
    Idle,
    Loading,
    Rendered,
    Empty,
    Errored,
}

/// The dashboard pages; each maps to one backend endpoint and chart kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatsPage {
    PresenceWeekday,
    MeanTimeWeekday,
    PresenceStartEnd,
    Overtime,
}

impl StatsPage {
    pub const ALL: [StatsPage; 4] = [
        StatsPage::PresenceWeekday,
        StatsPage::MeanTimeWeekday,
        StatsPage::PresenceStartEnd,
        StatsPage::Overtime,
    ];

    pub fn title(self) -> &'static str {
        match self {
            StatsPage::PresenceWeekday => "Presence by weekday",
            StatsPage::MeanTimeWeekday => "Presence mean time",
            StatsPage::PresenceStartEnd => "Presence start-end",
            StatsPage::Overtime => "Overtime ranking",
        }
    }

    pub fn chart_kind(self) -> ChartKind {
        match self {
            StatsPage::PresenceWeekday => ChartKind::Pie,
            StatsPage::MeanTimeWeekday => ChartKind::Column,
            StatsPage::PresenceStartEnd | StatsPage::Overtime => ChartKind::Timeline,
        }
    }

    /// Overtime is a company-wide ranking; the other pages need a selected user.
    pub fn is_per_user(self) -> bool {
        !matches!(self, StatsPage::Overtime)
    }

    pub fn next(self) -> Self {
        match self {
            StatsPage::PresenceWeekday => StatsPage::MeanTimeWeekday,
            StatsPage::MeanTimeWeekday => StatsPage::PresenceStartEnd,
            StatsPage::PresenceStartEnd => StatsPage::Overtime,
            StatsPage::Overtime => StatsPage::PresenceWeekday,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            StatsPage::PresenceWeekday => StatsPage::Overtime,
            StatsPage::MeanTimeWeekday => StatsPage::PresenceWeekday,
            StatsPage::PresenceStartEnd => StatsPage::MeanTimeWeekday,
            StatsPage::Overtime => StatsPage::PresenceStartEnd,
        }
    }
}

/// Result of one statistics fetch, after decoding and table building.
#[derive(Debug, Clone)]
pub enum StatsOutcome {
    Table(ChartTable),
    NotFound(String),
    Failed(String),
}
