use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdPackage, LdTrendingUp};
use dioxus_free_icons::Icon;
use shared_types::{AnalyticsSummary, StatAccent};
use shared_ui::{Card, CardContent, IconStat};

fn figure_icon(accent: StatAccent) -> Element {
    match accent {
        StatAccent::Indigo => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 24, height: 24 } },
        StatAccent::Green => {
            rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 24, height: 24 } }
        }
        StatAccent::Yellow | StatAccent::Purple => {
            rsx! { Icon::<LdClock> { icon: LdClock, width: 24, height: 24 } }
        }
    }
}

/// Row of four fixed stat cards.
#[component]
pub fn AnalyticsPanel(summary: AnalyticsSummary) -> Element {
    rsx! {
        div { class: "analytics-grid",
            for figure in summary.figures() {
                Card { key: "{figure.label}",
                    CardContent {
                        IconStat {
                            accent: figure.accent.as_str().to_string(),
                            label: figure.label.to_string(),
                            value: figure.value.clone(),
                            icon: figure_icon(figure.accent),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ANALYTICS;

    #[test]
    fn renders_all_four_figures() {
        let html = dioxus_ssr::render_element(rsx! {
            AnalyticsPanel { summary: ANALYTICS }
        });
        for text in [
            "Total Orders",
            "150",
            "Completed Orders",
            "120",
            "Pending Orders",
            "30",
            "Avg. Completion Time",
            "2 days",
        ] {
            assert!(html.contains(text), "missing {text:?} in {html}");
        }
    }

    #[test]
    fn figures_keep_their_accent_colors() {
        let html = dioxus_ssr::render_element(rsx! {
            AnalyticsPanel { summary: ANALYTICS }
        });
        for accent in ["indigo", "green", "yellow", "purple"] {
            assert!(html.contains(&format!("icon-stat-{accent}")), "{accent}");
        }
    }
}
