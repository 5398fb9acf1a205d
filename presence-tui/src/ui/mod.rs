use crate::app::{App, SelectionPhase, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

mod chart_panels;
mod dashboard_view;
mod select_user_view;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Dashboard => dashboard_view::render_dashboard(frame, app, body),
        View::SelectUser => select_user_view::render_user_selection(frame, app, body),
    }
}

/// Top bar: throbber, app title, current page and selection summary.
fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let throbber_area = Rect {
        x: area.x + 1,
        y: area.y,
        width: 1,
        height: 1,
    };
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_loading {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);

    let user_part = match &app.selected_user {
        Some(user) => match &app.avatar_url {
            Some(url) => format!("{}  [{}]", user.name, url),
            None => user.name.clone(),
        },
        None => "No user selected".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(" Presence Dashboard", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("  {}", app.page.title()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("  |  {}", user_part),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let label_area = Rect {
        x: throbber_area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    frame.render_widget(Paragraph::new(line), label_area);
}
