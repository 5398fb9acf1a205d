use presence_api::UserRef;

use crate::chart::ChartTable;

mod navigation;
mod state;
pub use state::{SelectionPhase, StatsOutcome, StatsPage, View};

pub struct App {
    pub running: bool,
    pub current_view: View,
    pub page: StatsPage,
    pub phase: SelectionPhase,

    // User selector
    pub users: Vec<UserRef>,
    pub filtered_users: Vec<UserRef>,
    pub filtered_user_index: usize,
    pub user_search_input: String,
    pub selection_list_focused: bool,

    // Current selection and its fetched artifacts
    pub selected_user: Option<UserRef>,
    pub avatar_url: Option<String>,
    pub chart_table: Option<ChartTable>,
    /// Inline message shown in place of the chart (embedded 404).
    pub not_found_message: Option<String>,
    /// One-line alert in the footer.
    pub status_message: Option<String>,

    /// Monotonic sequence stamped on every statistics request; completions
    /// carrying an older sequence are discarded, so a slow response for a
    /// previous selection can never overwrite the current one.
    pub request_seq: u64,

    // Loading indicator
    pub is_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            current_view: View::Dashboard,
            page: StatsPage::PresenceWeekday,
            phase: SelectionPhase::Idle,
            users: Vec::new(),
            filtered_users: Vec::new(),
            filtered_user_index: 0,
            user_search_input: String::new(),
            selection_list_focused: false,
            selected_user: None,
            avatar_url: None,
            chart_table: None,
            not_found_message: None,
            status_message: None,
            request_seq: 0,
            is_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn is_user_selected(&self) -> bool {
        self.selected_user.is_some()
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
        self.clear_status();

        if view == View::SelectUser {
            self.user_search_input.clear();
            self.selection_list_focused = false;
            self.filter_users();
        }
    }

    pub fn set_users(&mut self, users: Vec<UserRef>) {
        self.users = users;
        self.filter_users();
    }

    /// Begin a statistics load for the current page. Returns the sequence
    /// number the completion must present to be applied.
    pub fn begin_load(&mut self) -> u64 {
        self.request_seq += 1;
        self.phase = SelectionPhase::Loading;
        self.is_loading = true;
        self.chart_table = None;
        self.not_found_message = None;
        self.clear_status();
        self.request_seq
    }

    /// Drop back to Idle: clear the selection, hide chart and avatar. Makes
    /// no network calls and invalidates any in-flight request.
    pub fn clear_selection(&mut self) {
        self.request_seq += 1;
        self.selected_user = None;
        self.avatar_url = None;
        self.chart_table = None;
        self.not_found_message = None;
        self.phase = SelectionPhase::Idle;
        self.is_loading = false;
        self.clear_status();
    }

    /// Apply a finished statistics fetch. Stale completions are discarded.
    pub fn apply_stats_outcome(&mut self, seq: u64, outcome: StatsOutcome) {
        if seq != self.request_seq {
            return;
        }
        self.is_loading = false;
        match outcome {
            StatsOutcome::Table(table) => {
                self.chart_table = Some(table);
                self.not_found_message = None;
                self.phase = SelectionPhase::Rendered;
            }
            StatsOutcome::NotFound(message) => {
                self.chart_table = None;
                self.not_found_message = Some(message);
                self.phase = SelectionPhase::Empty;
            }
            StatsOutcome::Failed(message) => {
                self.chart_table = None;
                self.not_found_message = None;
                self.phase = SelectionPhase::Errored;
                self.set_status(message);
            }
        }
    }

    /// Apply a finished avatar lookup, subject to the same staleness guard.
    pub fn apply_avatar(&mut self, seq: u64, avatar_url: String) {
        if seq != self.request_seq {
            return;
        }
        self.avatar_url = Some(avatar_url);
    }
}
