use serde::{Deserialize, Serialize};

/// Headline figures shown at the top of the dashboard.
///
/// These are display constants; nothing in the app derives them from orders.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AnalyticsSummary {
    pub total_orders: u32,
    pub completed_orders: u32,
    pub pending_orders: u32,
    pub average_completion_time: &'static str,
}

/// Dashboard analytics fixture.
pub const ANALYTICS: AnalyticsSummary = AnalyticsSummary {
    total_orders: 150,
    completed_orders: 120,
    pending_orders: 30,
    average_completion_time: "2 days",
};

/// Color family of a stat card's icon chip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatAccent {
    Indigo,
    Green,
    Yellow,
    Purple,
}

impl StatAccent {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatAccent::Indigo => "indigo",
            StatAccent::Green => "green",
            StatAccent::Yellow => "yellow",
            StatAccent::Purple => "purple",
        }
    }
}

/// One labelled figure on the analytics panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatFigure {
    pub label: &'static str,
    pub value: String,
    pub accent: StatAccent,
}

impl AnalyticsSummary {
    /// The four figures in panel order.
    pub fn figures(&self) -> [StatFigure; 4] {
        [
            StatFigure {
                label: "Total Orders",
                value: self.total_orders.to_string(),
                accent: StatAccent::Indigo,
            },
            StatFigure {
                label: "Completed Orders",
                value: self.completed_orders.to_string(),
                accent: StatAccent::Green,
            },
            StatFigure {
                label: "Pending Orders",
                value: self.pending_orders.to_string(),
                accent: StatAccent::Yellow,
            },
            StatFigure {
                label: "Avg. Completion Time",
                value: self.average_completion_time.to_string(),
                accent: StatAccent::Purple,
            },
        ]
    }
}
