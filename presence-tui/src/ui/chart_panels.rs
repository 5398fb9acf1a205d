use super::*;
use crate::chart::{ChartKind, ChartTable};
use crate::time_utils::{clock_time, hours_minutes, seconds_from_epoch};

/// Shared color palette, same order across all chart kinds
pub const PALETTE: [Color; 12] = [
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::Red,
    Color::LightBlue,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightMagenta,
    Color::LightCyan,
    Color::LightRed,
];

/// Draw a chart table. Each call fully replaces the previous frame content;
/// the panels hold no state between renders and only read the table through
/// its typed cell accessors.
pub fn render_chart(frame: &mut Frame, table: &ChartTable, kind: ChartKind, area: Rect) {
    if table.is_empty() {
        render_no_data(frame, area);
        return;
    }
    match kind {
        ChartKind::Pie => render_pie(frame, table, area),
        ChartKind::Column => render_columns(frame, table, area),
        ChartKind::Timeline => render_timeline(frame, table, area),
    }
}

fn render_no_data(frame: &mut Frame, area: Rect) {
    let empty = Paragraph::new("No data")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(empty, area);
}

/// Pie panel: expects a text column followed by a number column.
fn render_pie(frame: &mut Frame, table: &ChartTable, area: Rect) {
    use tui_piechart::{PieChart, PieSlice};

    let rows: Vec<(String, f64)> = (0..table.row_count())
        .filter_map(|i| Some((table.text(i, 0)?.to_string(), table.number(i, 1)?)))
        .collect();

    let total: f64 = rows.iter().map(|(_, v)| *v).sum();
    if rows.is_empty() || total <= 0.0 {
        render_no_data(frame, area);
        return;
    }

    let label_strings: Vec<String> = rows
        .iter()
        .map(|(label, secs)| format!("{}: {}", label, hours_minutes(*secs)))
        .collect();

    let slices: Vec<PieSlice> = label_strings
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let color = PALETTE[i % PALETTE.len()];
            PieSlice::new(label.as_str(), rows[i].1 / total * 100.0, color)
        })
        .collect();

    // Pie: square-ish (width/2 for aspect ratio), capped so the legend fits
    let n = rows.len() as u16;
    let legend_rows = n + 1;
    let pie_height = (area.width / 2)
        .min(area.height / 2)
        .min(area.height.saturating_sub(legend_rows));

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(pie_height), Constraint::Min(0)])
        .split(area);

    // Render pie without its built-in legend
    let pie = PieChart::new(slices)
        .show_legend(false)
        .show_percentages(false);
    frame.render_widget(pie, split[0]);

    // Render legend manually, one entry per line, colored
    let mut legend_lines: Vec<Line> = Vec::new();
    for (i, (label, secs)) in rows.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let pct = secs / total * 100.0;
        legend_lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(color)),
            Span::styled(
                format!("{} - {} ({:.0}%)", label, hours_minutes(*secs), pct),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    let legend = Paragraph::new(legend_lines)
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(legend, split[1]);
}

/// Column panel: expects a text column followed by a datetime column; bars
/// scale with the seconds offset from the chart epoch.
fn render_columns(frame: &mut Frame, table: &ChartTable, area: Rect) {
    let rows: Vec<(String, f64)> = (0..table.row_count())
        .filter_map(|i| {
            Some((
                table.text(i, 0)?.to_string(),
                seconds_from_epoch(table.datetime(i, 1)?),
            ))
        })
        .collect();

    let max_secs = rows.iter().map(|(_, s)| *s).fold(0.0_f64, f64::max);

    // bar_cols = area width - 5 (label "Mon ") - 10 ("  HH:MM:SS")
    let bar_cols = (area.width as i32 - 5 - 10).max(1) as usize;

    let mut lines: Vec<Line> = Vec::new();
    let last_index = rows.len().saturating_sub(1);
    for (i, (label, secs)) in rows.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(
            format!("{:<4} ", label),
            Style::default().fg(Color::White),
        ));

        if *secs <= 0.0 || max_secs <= 0.0 {
            spans.push(Span::styled(
                "─".repeat(bar_cols),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            let filled = (((*secs / max_secs) * bar_cols as f64).round() as usize).min(bar_cols);
            let color = PALETTE[i % PALETTE.len()];
            if filled > 0 {
                spans.push(Span::styled("█".repeat(filled), Style::default().fg(color)));
            }
            if filled < bar_cols {
                spans.push(Span::styled(
                    "░".repeat(bar_cols - filled),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.push(Span::styled(
                format!("  {}", clock_time(*secs)),
                Style::default().fg(Color::White),
            ));
        }

        lines.push(Line::from(spans));
        if i < last_index {
            lines.push(Line::raw(""));
        }
    }

    let paragraph = Paragraph::new(ratatui::text::Text::from(lines))
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(paragraph, area);
}

/// Timeline panel: the last two columns are start/end datetimes; any leading
/// text columns become the row label. Bars span from start to end on a track
/// scaled by the latest end value.
fn render_timeline(frame: &mut Frame, table: &ChartTable, area: Rect) {
    let ncols = table.columns().len();
    if ncols < 2 {
        render_no_data(frame, area);
        return;
    }
    let (start_col, end_col) = (ncols - 2, ncols - 1);

    struct TimelineRow {
        label: String,
        start: f64,
        end: f64,
    }

    let rows: Vec<TimelineRow> = (0..table.row_count())
        .filter_map(|i| {
            let label = (0..start_col)
                .filter_map(|c| table.text(i, c))
                .collect::<Vec<_>>()
                .join(" ");
            Some(TimelineRow {
                label,
                start: seconds_from_epoch(table.datetime(i, start_col)?),
                end: seconds_from_epoch(table.datetime(i, end_col)?),
            })
        })
        .collect();

    let max_end = rows.iter().map(|r| r.end).fold(0.0_f64, f64::max);
    if rows.is_empty() || max_end <= 0.0 {
        render_no_data(frame, area);
        return;
    }

    let label_cols = rows
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(4)
        .min(24);
    // label + space, track, "  HH:MM:SS-HH:MM:SS"
    let bar_cols = (area.width as i32 - label_cols as i32 - 1 - 19).max(1) as usize;

    let mut lines: Vec<Line> = Vec::new();
    let last_index = rows.len().saturating_sub(1);
    for (i, row) in rows.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let label: String = row.label.chars().take(label_cols).collect();

        // Leave at least one cell for the bar itself
        let offset = (((row.start / max_end) * bar_cols as f64).round() as usize)
            .min(bar_cols.saturating_sub(1));
        let span_cols = ((((row.end - row.start) / max_end) * bar_cols as f64).round() as usize)
            .clamp(1, bar_cols - offset);

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(
            format!("{:<width$} ", label, width = label_cols),
            Style::default().fg(Color::White),
        ));
        if offset > 0 {
            spans.push(Span::styled(
                "░".repeat(offset),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.push(Span::styled(
            "█".repeat(span_cols),
            Style::default().fg(color),
        ));
        let trailing = bar_cols.saturating_sub(offset + span_cols);
        if trailing > 0 {
            spans.push(Span::styled(
                "░".repeat(trailing),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.push(Span::styled(
            format!("  {}-{}", clock_time(row.start), clock_time(row.end)),
            Style::default().fg(Color::White),
        ));

        lines.push(Line::from(spans));
        if i < last_index {
            lines.push(Line::raw(""));
        }
    }

    let paragraph = Paragraph::new(ratatui::text::Text::from(lines))
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(paragraph, area);
}
