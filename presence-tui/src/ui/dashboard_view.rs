use super::*;

pub fn render_dashboard(frame: &mut Frame, app: &App, body: Rect) {
    // Outer vertical split: chart area + controls bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Min(10), Constraint::Length(3)])
        .split(body);

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            format!(" {} ", app.page.title()),
            Style::default().fg(Color::White),
        ));
    let chart_inner = chart_block.inner(outer[0]);
    frame.render_widget(chart_block, outer[0]);

    // 4-char left/right padding inside the chart box
    let padded = Rect {
        x: chart_inner.x + 4,
        y: chart_inner.y + 1,
        width: chart_inner.width.saturating_sub(8),
        height: chart_inner.height.saturating_sub(1),
    };

    match app.phase {
        SelectionPhase::Idle => {
            render_centered_note(frame, padded, "Press U to choose a user", Color::DarkGray);
        }
        SelectionPhase::Loading => {
            render_centered_note(frame, padded, "Loading...", Color::DarkGray);
        }
        SelectionPhase::Empty => {
            let message = app.not_found_message.as_deref().unwrap_or("No data");
            render_centered_note(frame, padded, message, Color::Yellow);
        }
        SelectionPhase::Errored => {
            let message = app.status_message.as_deref().unwrap_or("Request failed");
            render_centered_note(frame, padded, message, Color::Red);
        }
        SelectionPhase::Rendered => {
            if let Some(table) = &app.chart_table {
                chart_panels::render_chart(frame, table, app.page.chart_kind(), padded);
            }
        }
    }

    render_controls(frame, outer[1], app);
}

fn render_centered_note(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let note = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color));
    frame.render_widget(note, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    // An alert replaces the key hints until the next navigation.
    let content = if let Some(status) = &app.status_message {
        Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::from(vec![
            Span::styled("U", Style::default().fg(Color::Yellow)),
            Span::raw(": Select user  "),
            Span::styled("1-4/Tab", Style::default().fg(Color::Yellow)),
            Span::raw(": Page  "),
            Span::styled("R", Style::default().fg(Color::Yellow)),
            Span::raw(": Reload  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(": Clear selection  "),
            Span::styled("Q", Style::default().fg(Color::Yellow)),
            Span::raw(": Quit"),
        ])
    };

    let controls = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " Controls ",
                Style::default().fg(Color::DarkGray),
            ))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(controls, area);
}
