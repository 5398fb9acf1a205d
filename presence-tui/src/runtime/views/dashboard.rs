use crate::app::{App, StatsPage, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_dashboard_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('u') | KeyCode::Char('U') => app.navigate_to(View::SelectUser),
        KeyCode::Tab => switch_page(app, action_tx, app.page.next()),
        KeyCode::BackTab => switch_page(app, action_tx, app.page.previous()),
        KeyCode::Char(c @ '1'..='4') => {
            let page = StatsPage::ALL[c as usize - '1' as usize];
            switch_page(app, action_tx, page);
        }
        KeyCode::Char('r') | KeyCode::Char('R') => reload_current(app, action_tx),
        KeyCode::Esc => app.clear_selection(),
        _ => {}
    }
}

fn switch_page(app: &mut App, action_tx: &ActionTx, page: StatsPage) {
    app.page = page;
    reload_current(app, action_tx);
}

/// Re-fetch the current page. Per-user pages without a selection stay Idle
/// and make no network calls.
fn reload_current(app: &mut App, action_tx: &ActionTx) {
    if app.page.is_per_user() && !app.is_user_selected() {
        app.clear_selection();
        return;
    }
    let seq = app.begin_load();
    enqueue_action(action_tx, Action::LoadStats { seq });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SelectionPhase;
    use presence_api::UserRef;

    use super::super::super::action_queue::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_selection() -> App {
        let mut app = App::new();
        app.selected_user = Some(UserRef {
            user_id: 141,
            name: "User 141".to_string(),
            avatar: None,
        });
        app.avatar_url = Some("http://example.com/141.png".to_string());
        app.phase = SelectionPhase::Rendered;
        app
    }

    #[test]
    fn esc_clears_selection_without_network_calls() {
        let mut app = app_with_selection();
        let (tx, mut rx) = channel();

        handle_dashboard_key(key(KeyCode::Esc), &mut app, &tx);

        assert_eq!(app.phase, SelectionPhase::Idle);
        assert!(app.selected_user.is_none());
        assert!(app.avatar_url.is_none());
        assert!(app.chart_table.is_none());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn page_switch_without_selection_stays_idle() {
        let mut app = App::new();
        let (tx, mut rx) = channel();

        handle_dashboard_key(key(KeyCode::Char('2')), &mut app, &tx);

        assert_eq!(app.page, StatsPage::MeanTimeWeekday);
        assert_eq!(app.phase, SelectionPhase::Idle);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn page_switch_with_selection_queues_a_load() {
        let mut app = app_with_selection();
        let (tx, mut rx) = channel();

        handle_dashboard_key(key(KeyCode::Tab), &mut app, &tx);

        assert_eq!(app.page, StatsPage::MeanTimeWeekday);
        assert_eq!(app.phase, SelectionPhase::Loading);
        match rx.try_recv() {
            Ok(Action::LoadStats { seq }) => assert_eq!(seq, app.request_seq),
            other => panic!("expected queued load, got {:?}", other),
        }
    }

    #[test]
    fn overtime_page_loads_without_a_selection() {
        let mut app = App::new();
        let (tx, mut rx) = channel();

        handle_dashboard_key(key(KeyCode::Char('4')), &mut app, &tx);

        assert_eq!(app.page, StatsPage::Overtime);
        assert_eq!(app.phase, SelectionPhase::Loading);
        assert!(matches!(rx.try_recv(), Ok(Action::LoadStats { .. })));
    }
}
