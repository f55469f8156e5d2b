use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, Gauge,
        GraphType, Padding, Paragraph, Tabs,
    },
    Frame,
};
use drinkdash_core::time::{MONTH_LABELS, WEEKDAY_LABELS};
use drinkdash_core::{CalendarHeatmap, DrinkingData, Intensity, StatCard};

use crate::heatmap::palette;
use crate::tui::app::{App, View};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    bars: Color,
    trend: Color,
    streak: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    bars: Color::Blue,
    trend: Color::Magenta,
    streak: Color::Green,
};

pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header / Tabs
            Constraint::Min(10),   // Current view
            Constraint::Length(1), // Footer / Help
        ])
        .split(size);

    draw_header(frame, app, main_layout[0]);

    match app.view {
        View::Overview => draw_overview(frame, &app.dashboard.data, &app.dashboard.cards, main_layout[1]),
        View::Trends => draw_trends(frame, &app.dashboard.data, main_layout[1]),
        View::Calendar => draw_calendar(frame, &app.dashboard.heatmap, main_layout[1]),
    }

    let help = Line::from(vec![
        Span::styled("VIEW: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ Tab 1-3", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help).alignment(Alignment::Center);
    frame.render_widget(footer, main_layout[2]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));
    frame.render_widget(header_block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(26), // Title
            Constraint::Min(1),     // Tabs
            Constraint::Length(28), // Last updated
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        format!("DRINKING ANALYTICS {}", app.dashboard.year),
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(title, header_layout[0]);

    let tabs = Tabs::new(View::ALL.iter().map(|v| v.title()))
        .select(app.view.index())
        .style(Style::default().fg(THEME.muted))
        .highlight_style(Style::default().fg(THEME.text).add_modifier(Modifier::BOLD))
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(tabs, header_layout[1]);

    let updated = Paragraph::new(Span::styled(
        format!("Last updated: {}", app.dashboard.as_of.format("%Y-%m-%d")),
        Style::default().fg(THEME.muted),
    ))
    .alignment(Alignment::Right)
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(updated, header_layout[2]);
}

fn draw_overview(frame: &mut Frame, data: &DrinkingData, cards: &[StatCard], area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Stat cards
            Constraint::Min(8),    // Monthly distribution
        ])
        .split(area);

    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(chunks[0]);

    for (card, card_area) in cards.iter().zip(card_areas.iter()) {
        draw_card(frame, card, *card_area);
    }

    draw_monthly_bars(frame, data, chunks[1]);
}

fn draw_card(frame: &mut Frame, card: &StatCard, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(format!(" {} ", card.name));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let text = vec![
        Line::from(Span::styled(card.value.clone(), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(card.description, Style::default().fg(THEME.muted))),
    ];
    frame.render_widget(Paragraph::new(text), rows[0]);

    if let Some(progress) = card.progress {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(THEME.streak))
            .ratio(progress)
            .label(format!("{:.0}%", progress * 100.0));
        frame.render_widget(gauge, rows[1]);
    }
}

fn draw_monthly_bars(frame: &mut Frame, data: &DrinkingData, area: Rect) {
    let bar_items: Vec<Bar> = data
        .monthly_data()
        .iter()
        .map(|m| {
            Bar::default()
                .label(m.label())
                .value(m.total_drinks())
                .style(Style::default().fg(THEME.bars))
                .text_value(m.total_drinks().to_string())
        })
        .collect();

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(" Monthly Distribution ");

    let chart = BarChart::default()
        .block(chart_block)
        .bar_width(5)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bar_items));

    frame.render_widget(chart, area);
}

fn draw_trends(frame: &mut Frame, data: &DrinkingData, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(75), // Chart
            Constraint::Length(1),      // Gutter
            Constraint::Percentage(25), // Info panel
        ])
        .split(area);

    let points: Vec<(f64, f64)> = data
        .monthly_data()
        .iter()
        .map(|m| (m.month_index() as f64, m.total_drinks() as f64))
        .collect();
    let peak = data.highest_month().total_drinks() as f64;
    let y_max = (peak * 1.1).max(1.0);

    let dataset = Dataset::default()
        .name("Drinks")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(THEME.trend))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted))
                .title(" Trend Over Time "),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(THEME.muted))
                .bounds([0.0, 11.0])
                .labels(MONTH_LABELS.iter().copied()),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(THEME.muted))
                .bounds([0.0, y_max])
                .labels(["0".to_string(), format!("{:.0}", y_max / 2.0), format!("{:.0}", y_max)]),
        );
    frame.render_widget(chart, chunks[0]);

    draw_trend_panel(frame, data, chunks[2]);
}

fn draw_trend_panel(frame: &mut Frame, data: &DrinkingData, area: Rect) {
    let monthly = data.monthly_data();
    let highest = data.highest_month();
    // earliest month wins a tie, same as the peak
    let lowest = monthly
        .iter()
        .copied()
        .reduce(|low, m| if m.total_drinks() < low.total_drinks() { m } else { low });

    let mut lines = vec![
        Line::from(Span::styled("Summary", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        stat_line("Total:   ", data.total_drinks().to_string()),
        stat_line("Average: ", format!("{:.1}", data.average_per_month())),
        stat_line("Peak:    ", format!("{} ({})", highest.label(), highest.total_drinks())),
    ];
    if let Some(low) = lowest {
        lines.push(stat_line("Lowest:  ", format!("{} ({})", low.label(), low.total_drinks())));
    }
    lines.push(stat_line("Days:    ", data.days_recorded().to_string()));
    lines.push(stat_line("Dry:     ", data.dry_days().to_string()));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Summary "),
    );
    frame.render_widget(panel, area);
}

fn stat_line(name: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(name, Style::default().fg(THEME.muted)),
        Span::styled(value, Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
    ])
}

fn draw_calendar(frame: &mut Frame, heatmap: &CalendarHeatmap, area: Rect) {
    let mut lines = Vec::new();

    let mut label_spans = vec![Span::raw("    ")];
    let mut column = 0;
    for (week, label) in &heatmap.month_labels {
        let start = week * 2;
        if start < column {
            continue;
        }
        label_spans.push(Span::raw(" ".repeat(start - column)));
        label_spans.push(Span::styled(*label, Style::default().fg(THEME.muted)));
        column = start + label.len();
    }
    lines.push(Line::from(label_spans));

    for (weekday, name) in WEEKDAY_LABELS.iter().enumerate() {
        let name = if weekday % 2 == 1 { *name } else { "" };
        let mut spans = vec![Span::styled(format!("{:<4}", name), Style::default().fg(THEME.muted))];
        for week in &heatmap.weeks {
            spans.push(match week[weekday].intensity() {
                Some(intensity) => square(intensity),
                None => Span::raw("  "),
            });
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let mut legend = vec![Span::styled("    Less ", Style::default().fg(THEME.muted))];
    let counts = heatmap.level_counts();
    for intensity in Intensity::ALL {
        legend.push(square(intensity));
    }
    legend.push(Span::styled("More", Style::default().fg(THEME.muted)));
    lines.push(Line::from(legend));

    lines.push(Line::from(""));
    for intensity in Intensity::ALL {
        lines.push(Line::from(vec![
            Span::raw("    "),
            square(intensity),
            Span::styled(
                format!("{:<10} {:>3} days", intensity.label(), counts[intensity.level()]),
                Style::default().fg(THEME.text),
            ),
        ]));
    }

    let calendar = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Daily Activity Heatmap "),
    );
    frame.render_widget(calendar, area);
}

fn square(intensity: Intensity) -> Span<'static> {
    Span::styled("■ ", Style::default().fg(Color::Indexed(palette(intensity))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use drinkdash_core::{Aggregator, DashboardUseCase, SyntheticGenerator};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(view: View) -> String {
        let generator = SyntheticGenerator::new(9);
        let dashboard = DashboardUseCase::new(&generator, Aggregator::new())
            .load(2026, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
            .unwrap();
        let mut app = App::new(dashboard);
        app.view = view;

        let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_overview_shows_cards() {
        let screen = render(View::Overview);
        assert!(screen.contains("DRINKING ANALYTICS 2026"));
        assert!(screen.contains("Total Drinks"));
        assert!(screen.contains("Current Streak"));
        assert!(screen.contains("Monthly Distribution"));
    }

    #[test]
    fn test_trends_shows_summary_panel() {
        let screen = render(View::Trends);
        assert!(screen.contains("Trend Over Time"));
        assert!(screen.contains("Peak:"));
    }

    #[test]
    fn test_calendar_shows_legend() {
        let screen = render(View::Calendar);
        assert!(screen.contains("Daily Activity Heatmap"));
        assert!(screen.contains("Very high"));
    }
}
