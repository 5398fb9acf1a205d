use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_select_user_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_clear();
        }
        KeyCode::Tab => {
            app.selection_list_focused = true;
        }
        KeyCode::BackTab => {
            app.selection_list_focused = false;
        }
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL) && c != 'q' && c != 'Q' =>
        {
            if app.selection_list_focused && c == 'j' {
                app.select_next();
            } else if app.selection_list_focused && c == 'k' {
                app.select_previous();
            } else if !app.selection_list_focused {
                app.search_input_char(c);
            }
        }
        KeyCode::Backspace => app.search_input_backspace(),
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        KeyCode::Enter => {
            if app.confirm_user_selection() {
                let seq = app.begin_load();
                enqueue_action(action_tx, Action::LoadStats { seq });
            }
        }
        KeyCode::Esc => app.cancel_user_selection(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{SelectionPhase, StatsOutcome, View};
    use presence_api::UserRef;

    use super::super::super::action_queue::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        let mut app = App::new();
        app.set_users(vec![
            UserRef {
                user_id: 10,
                name: "User 10".to_string(),
                avatar: Some("http://example.com/10.png".to_string()),
            },
            UserRef {
                user_id: 11,
                name: "User 11".to_string(),
                avatar: None,
            },
        ]);
        app.navigate_to(View::SelectUser);
        app
    }

    fn queued_seq(rx: &mut super::super::super::action_queue::ActionRx) -> u64 {
        match rx.try_recv() {
            Ok(Action::LoadStats { seq }) => seq,
            other => panic!("expected queued load, got {:?}", other),
        }
    }

    #[test]
    fn enter_selects_user_and_queues_a_fetch() {
        let mut app = test_app();
        let (tx, mut rx) = channel();

        handle_select_user_key(key(KeyCode::Enter), &mut app, &tx);

        assert_eq!(app.current_view, View::Dashboard);
        assert_eq!(app.selected_user.as_ref().map(|u| u.user_id), Some(10));
        assert_eq!(app.avatar_url.as_deref(), Some("http://example.com/10.png"));
        assert_eq!(app.phase, SelectionPhase::Loading);
        assert_eq!(queued_seq(&mut rx), app.request_seq);
    }

    #[test]
    fn enter_on_empty_list_does_nothing() {
        let mut app = App::new();
        app.navigate_to(View::SelectUser);
        let (tx, mut rx) = channel();

        handle_select_user_key(key(KeyCode::Enter), &mut app, &tx);

        assert_eq!(app.current_view, View::SelectUser);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn slow_response_for_previous_user_is_discarded() {
        let mut app = test_app();
        let (tx, mut rx) = channel();

        // Select user 10, then user 11 before the first fetch lands.
        handle_select_user_key(key(KeyCode::Enter), &mut app, &tx);
        let first_seq = queued_seq(&mut rx);

        app.navigate_to(View::SelectUser);
        handle_select_user_key(key(KeyCode::Down), &mut app, &tx);
        handle_select_user_key(key(KeyCode::Enter), &mut app, &tx);
        let second_seq = queued_seq(&mut rx);
        assert!(second_seq > first_seq);

        // User 10's response arrives late and must not win.
        app.apply_stats_outcome(first_seq, StatsOutcome::NotFound("stale".to_string()));
        assert_eq!(app.phase, SelectionPhase::Loading);
        assert!(app.not_found_message.is_none());

        app.apply_stats_outcome(second_seq, StatsOutcome::NotFound("No data".to_string()));
        assert_eq!(app.phase, SelectionPhase::Empty);
        assert_eq!(app.not_found_message.as_deref(), Some("No data"));
    }

    #[test]
    fn typing_filters_the_list() {
        let mut app = test_app();
        let (tx, _rx) = channel();

        for c in ['1', '1'] {
            handle_select_user_key(key(KeyCode::Char(c)), &mut app, &tx);
        }

        assert_eq!(app.filtered_users.len(), 1);
        assert_eq!(app.filtered_users[0].name, "User 11");
    }

    #[test]
    fn esc_keeps_the_previous_selection() {
        let mut app = test_app();
        let (tx, _rx) = channel();

        handle_select_user_key(key(KeyCode::Enter), &mut app, &tx);
        app.navigate_to(View::SelectUser);
        handle_select_user_key(key(KeyCode::Esc), &mut app, &tx);

        assert_eq!(app.current_view, View::Dashboard);
        assert_eq!(app.selected_user.as_ref().map(|u| u.user_id), Some(10));
    }
}
