use std::io::IsTerminal;

use drinkdash_core::time::WEEKDAY_LABELS;
use drinkdash_core::{CalendarHeatmap, HeatmapCell, Intensity};

const CELL_WIDTH: usize = 2;
const GUTTER: &str = "    ";

/// 256-colour palette shared with the TUI, gray through green to red.
pub fn palette(intensity: Intensity) -> u8 {
    match intensity {
        Intensity::None => 238,
        Intensity::Light => 22,
        Intensity::Moderate => 28,
        Intensity::High => 34,
        Intensity::VeryHigh => 178,
        Intensity::Extreme => 160,
    }
}

fn glyph(intensity: Intensity) -> char {
    match intensity {
        Intensity::None => '·',
        Intensity::Light => '░',
        Intensity::Moderate => '▒',
        Intensity::High => '▓',
        Intensity::VeryHigh => '█',
        Intensity::Extreme => '#',
    }
}

pub fn show_heatmap(heatmap: &CalendarHeatmap) {
    let color = std::io::stdout().is_terminal();
    println!("\n\x1b[1;36mDaily Activity Heatmap {}\x1b[0m", heatmap.year);
    for line in render(heatmap, color) {
        println!("{}", line);
    }
}

/// Month label row, one row per weekday, then the legend.
pub fn render(heatmap: &CalendarHeatmap, color: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(9);
    lines.push(format!("{}{}", GUTTER, month_label_row(heatmap)));

    for (weekday, label) in WEEKDAY_LABELS.iter().enumerate() {
        // Mon, Wed, Fri only, like a contribution graph
        let label = if weekday % 2 == 1 { *label } else { "" };
        let mut line = format!("{:<4}", label);
        for week in &heatmap.weeks {
            line.push_str(&render_cell(&week[weekday], color));
        }
        lines.push(line.trim_end().to_string());
    }

    let legend: Vec<String> = Intensity::ALL
        .iter()
        .map(|i| render_square(*i, color))
        .collect();
    lines.push(format!("{}Less {} More", GUTTER, legend.join(" ")));
    lines
}

fn month_label_row(heatmap: &CalendarHeatmap) -> String {
    let mut row: Vec<char> = vec![' '; heatmap.weeks.len() * CELL_WIDTH];
    let mut next_free = 0;
    for (week, label) in &heatmap.month_labels {
        let start = week * CELL_WIDTH;
        if start < next_free {
            continue;
        }
        for (i, ch) in label.chars().enumerate() {
            if let Some(slot) = row.get_mut(start + i) {
                *slot = ch;
            }
        }
        next_free = start + label.len() + 1;
    }
    row.into_iter().collect::<String>().trim_end().to_string()
}

fn render_cell(cell: &HeatmapCell, color: bool) -> String {
    match cell.intensity() {
        Some(intensity) => format!("{} ", render_square(intensity, color)),
        None => " ".repeat(CELL_WIDTH),
    }
}

fn render_square(intensity: Intensity, color: bool) -> String {
    if color {
        format!("\x1b[38;5;{}m■\x1b[0m", palette(intensity))
    } else {
        glyph(intensity).to_string()
    }
}
