use drinkdash_core::{Dashboard, StatCard};
use tabled::{Table, Tabled};
use tabled::settings::{Style, Color, Modify};
use tabled::settings::object::Rows;

const BAR_WIDTH: usize = 30;
const PROGRESS_WIDTH: usize = 12;

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "Stat")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Drinks")]
    drinks: u64,
    #[tabled(rename = "Distribution")]
    bar: String,
}

pub fn show_summary(dashboard: &Dashboard) {
    print_header(dashboard);
    println!("{}", styled(Table::new(card_rows(&dashboard.cards))));
}

pub fn show_monthly(dashboard: &Dashboard) {
    print_header(dashboard);
    println!("{}", styled(Table::new(month_rows(dashboard))));

    let data = &dashboard.data;
    let highest = data.highest_month();
    println!(
        "Total: {}  Avg/month: {:.1}  Peak: {} ({})",
        data.total_drinks(),
        data.average_per_month(),
        highest.label(),
        highest.total_drinks()
    );
}

fn print_header(dashboard: &Dashboard) {
    println!(
        "\n\x1b[1;36mDrinking Analytics {}\x1b[0m (as of {})",
        dashboard.year,
        dashboard.as_of.format("%Y-%m-%d")
    );
}

fn styled(mut table: Table) -> Table {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table
}

fn card_rows(cards: &[StatCard]) -> Vec<CardRow> {
    cards
        .iter()
        .map(|card| CardRow {
            name: card.name.to_string(),
            value: card.value.clone(),
            progress: card
                .progress
                .map(|p| format!("{} {:.0}%", bar(p, 1.0, PROGRESS_WIDTH), p * 100.0))
                .unwrap_or_else(|| "-".to_string()),
            description: card.description.to_string(),
        })
        .collect()
}

fn month_rows(dashboard: &Dashboard) -> Vec<MonthRow> {
    let monthly = dashboard.data.monthly_data();
    let max = monthly.iter().map(|m| m.total_drinks()).max().unwrap_or(0);

    monthly
        .iter()
        .map(|m| MonthRow {
            month: m.label().to_string(),
            drinks: m.total_drinks(),
            bar: bar(m.total_drinks() as f64, max as f64, BAR_WIDTH),
        })
        .collect()
}

/// Block bar of `width` cells filled in proportion to `value / max`.
fn bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).round() as usize
    } else {
        0
    };
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
