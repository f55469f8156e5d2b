use drinkdash_core::Dashboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Overview,
    Trends,
    Calendar,
}

impl View {
    pub const ALL: [View; 3] = [View::Overview, View::Trends, View::Calendar];

    pub fn title(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Trends => "Trends",
            View::Calendar => "Calendar",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

pub struct App {
    pub dashboard: Dashboard,
    pub view: View,
}

impl App {
    pub fn new(dashboard: Dashboard) -> App {
        App {
            dashboard,
            view: View::Overview,
        }
    }

    pub fn next_view(&mut self) {
        let i = (self.view.index() + 1) % View::ALL.len();
        self.view = View::ALL[i];
    }

    pub fn previous_view(&mut self) {
        let i = if self.view.index() == 0 {
            View::ALL.len() - 1
        } else {
            self.view.index() - 1
        };
        self.view = View::ALL[i];
    }

    /// Jump straight to a view by its 1-based number key.
    pub fn select(&mut self, number: char) {
        if let Some(view) = number
            .to_digit(10)
            .and_then(|n| (n as usize).checked_sub(1))
            .and_then(|i| View::ALL.get(i))
        {
            self.view = *view;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use drinkdash_core::{Aggregator, DashboardUseCase, SyntheticGenerator};

    fn app() -> App {
        let generator = SyntheticGenerator::new(1);
        let dashboard = DashboardUseCase::new(&generator, Aggregator::new())
            .load(2026, NaiveDate::from_ymd_opt(2026, 6, 1).unwrap())
            .unwrap();
        App::new(dashboard)
    }

    #[test]
    fn test_view_cycles_both_ways() {
        let mut app = app();
        assert_eq!(app.view, View::Overview);
        app.next_view();
        assert_eq!(app.view, View::Trends);
        app.next_view();
        app.next_view();
        assert_eq!(app.view, View::Overview);
        app.previous_view();
        assert_eq!(app.view, View::Calendar);
    }

    #[test]
    fn test_select_by_number() {
        let mut app = app();
        app.select('3');
        assert_eq!(app.view, View::Calendar);
        app.select('0');
        assert_eq!(app.view, View::Calendar);
        app.select('9');
        assert_eq!(app.view, View::Calendar);
        app.select('1');
        assert_eq!(app.view, View::Overview);
    }
}
