use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use presence_api::UserRef;

use super::{App, View};

impl App {
    /// Filter users against the search input using fuzzy matching.
    pub fn filter_users(&mut self) {
        if self.user_search_input.is_empty() {
            self.filtered_users = self.users.clone();
            self.filtered_user_index = 0;
            return;
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(UserRef, i64)> = self
            .users
            .iter()
            .filter_map(|user| {
                matcher
                    .fuzzy_match(&user.name, &self.user_search_input)
                    .map(|score| (user.clone(), score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        self.filtered_users = scored.into_iter().map(|(u, _)| u).collect();
        self.filtered_user_index = 0;
    }

    pub fn search_input_char(&mut self, c: char) {
        self.user_search_input.push(c);
        self.filter_users();
    }

    pub fn search_input_backspace(&mut self) {
        self.user_search_input.pop();
        self.filter_users();
    }

    pub fn search_input_clear(&mut self) {
        self.user_search_input.clear();
        self.filter_users();
    }

    /// Select next user in the filtered list, wrapping at the end.
    pub fn select_next(&mut self) {
        if !self.filtered_users.is_empty() {
            self.filtered_user_index = (self.filtered_user_index + 1) % self.filtered_users.len();
        }
    }

    /// Select previous user in the filtered list, wrapping at the start.
    pub fn select_previous(&mut self) {
        if !self.filtered_users.is_empty() {
            self.filtered_user_index = if self.filtered_user_index == 0 {
                self.filtered_users.len() - 1
            } else {
                self.filtered_user_index - 1
            };
        }
    }

    /// Commit the highlighted selector entry; true if a user was selected.
    /// The roster avatar is shown immediately, the avatar endpoint refreshes
    /// it once the statistics load runs.
    pub fn confirm_user_selection(&mut self) -> bool {
        let Some(user) = self.filtered_users.get(self.filtered_user_index).cloned() else {
            return false;
        };
        self.avatar_url = user.avatar.clone();
        self.selected_user = Some(user);
        self.navigate_to(View::Dashboard);
        true
    }

    /// Leave the selector without changing the current selection.
    pub fn cancel_user_selection(&mut self) {
        self.navigate_to(View::Dashboard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use presence_api::UserRef;

    fn user(id: i64, name: &str) -> UserRef {
        UserRef {
            user_id: id,
            name: name.to_string(),
            avatar: None,
        }
    }

    fn app_with_users() -> App {
        let mut app = App::new();
        app.set_users(vec![
            user(10, "Adrian K."),
            user(11, "Barbara N."),
            user(12, "Adam B."),
        ]);
        app
    }

    #[test]
    fn empty_search_lists_everyone() {
        let app = app_with_users();
        assert_eq!(app.filtered_users.len(), 3);
    }

    #[test]
    fn search_narrows_and_resets_the_highlight() {
        let mut app = app_with_users();
        app.filtered_user_index = 2;
        app.search_input_char('b');
        app.search_input_char('a');
        assert!(app
            .filtered_users
            .iter()
            .any(|u| u.name == "Barbara N."));
        assert!(!app.filtered_users.iter().any(|u| u.name == "Adrian K."));
        assert_eq!(app.filtered_user_index, 0);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut app = app_with_users();
        app.select_previous();
        assert_eq!(app.filtered_user_index, 2);
        app.select_next();
        assert_eq!(app.filtered_user_index, 0);
    }

    #[test]
    fn confirm_with_empty_list_selects_nothing() {
        let mut app = App::new();
        assert!(!app.confirm_user_selection());
        assert!(app.selected_user.is_none());
    }
}
