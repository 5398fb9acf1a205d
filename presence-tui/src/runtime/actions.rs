use presence_api::{PresenceClient, PresenceFetchError, StatsResponse};

use crate::app::{App, StatsOutcome, StatsPage};
use crate::chart::{build, ChartTable};

use super::action_queue::Action;

pub(super) async fn run_action(action: Action, app: &mut App, client: &PresenceClient) {
    match action {
        Action::LoadUsers => load_users(app, client).await,
        Action::LoadStats { seq } => load_stats(app, client, seq).await,
    }
}

/// Populate the selector. Roster failures are silent: the selector simply
/// stays empty and the loading indicator is hidden again.
async fn load_users(app: &mut App, client: &PresenceClient) {
    app.is_loading = true;

    match client.fetch_users_xml().await {
        Ok(users) => app.set_users(users),
        Err(err) => {
            tracing::debug!("users_xml unavailable ({}), falling back to users", err);
            match client.fetch_users().await {
                Ok(users) => app.set_users(users),
                Err(err) => tracing::debug!("could not load user roster: {}", err),
            }
        }
    }

    app.is_loading = false;
}

async fn load_stats(app: &mut App, client: &PresenceClient, seq: u64) {
    let page = app.page;

    if !page.is_per_user() {
        let outcome = stats_outcome(client.fetch_overtime().await, |entries| {
            build::overtime_table(&entries)
        });
        app.apply_stats_outcome(seq, outcome);
        return;
    }

    let Some(user) = app.selected_user.clone() else {
        app.clear_selection();
        return;
    };

    // Avatar is refreshed opportunistically; failures are silent, matching
    // the fire-and-forget avatar lookup of the web dashboard.
    if let Ok(avatar) = client.fetch_avatar(user.user_id).await {
        app.apply_avatar(seq, avatar.avatar);
    }

    let outcome = match page {
        StatsPage::PresenceWeekday => stats_outcome(
            client.fetch_presence_weekday(user.user_id).await,
            |stats| build::presence_weekday_table(&stats),
        ),
        StatsPage::MeanTimeWeekday => stats_outcome(
            client.fetch_mean_time_weekday(user.user_id).await,
            |stats| build::mean_time_weekday_table(&stats),
        ),
        StatsPage::PresenceStartEnd => stats_outcome(
            client.fetch_presence_start_end(user.user_id).await,
            |spans| build::start_end_table(&spans),
        ),
        StatsPage::Overtime => unreachable!("overtime is handled as a global page"),
    };
    app.apply_stats_outcome(seq, outcome);
}

/// Map a fetch result onto the dashboard outcome: transport and decode
/// failures surface the generic alert, embedded 404s the inline message.
fn stats_outcome<T>(
    result: Result<StatsResponse<T>, PresenceFetchError>,
    to_table: impl FnOnce(T) -> ChartTable,
) -> StatsOutcome {
    match result {
        Ok(StatsResponse::Ok(data)) => StatsOutcome::Table(to_table(data)),
        Ok(StatsResponse::NotFound { message }) => StatsOutcome::NotFound(message),
        Err(err) => {
            tracing::debug!("statistics fetch failed: {}", err);
            StatsOutcome::Failed("User not found!".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Column, ColumnType};

    fn empty_table() -> ChartTable {
        ChartTable::new(vec![Column::new("Weekday", ColumnType::Text)])
    }

    #[test]
    fn ok_response_becomes_a_table() {
        let outcome = stats_outcome(Ok(StatsResponse::Ok(())), |_| empty_table());
        assert!(matches!(outcome, StatsOutcome::Table(_)));
    }

    #[test]
    fn embedded_not_found_keeps_the_backend_message() {
        let outcome = stats_outcome(
            Ok(StatsResponse::NotFound {
                message: "No data".to_string(),
            }),
            |_: ()| empty_table(),
        );
        match outcome {
            StatsOutcome::NotFound(message) => assert_eq!(message, "No data"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn transport_failure_becomes_the_generic_alert() {
        let outcome = stats_outcome(
            Err::<StatsResponse<()>, _>(PresenceFetchError::ResponseError("timeout".to_string())),
            |_| empty_table(),
        );
        match outcome {
            StatsOutcome::Failed(message) => assert_eq!(message, "User not found!"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
