use crate::app::{App, View};
use crossterm::event::KeyEvent;

use super::action_queue::{Action, ActionTx};

mod dashboard;
mod select_user;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match app.current_view {
        View::Dashboard => dashboard::handle_dashboard_key(key, app, action_tx),
        View::SelectUser => select_user::handle_select_user_key(key, app, action_tx),
    }
}
