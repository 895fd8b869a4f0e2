use super::alert_card;
use crate::constants::limits;
use crate::models::ScamAlert;
use crate::render::PageContext;
use crate::render::components::{self, Align, CloseConfig, HeadConfig};
use crate::render::nav::NavKey;

#[must_use]
pub fn render(ctx: &PageContext, alerts: &[ScamAlert]) -> String {
    let head = HeadConfig::new("Scam Alerts")
        .description("Active scam reports submitted by consumers about businesses in the directory.")
        .keywords(&["scam alerts", "fraud", "consumer warnings"])
        .canonical("/scam-alerts");

    let mut main = components::page_header(
        "Scam Alerts",
        Some("The most recent active scam reports, newest first."),
        Align::Center,
    );
    main.push_str("<div class=\"container\">\n");

    let shown = usize::try_from(limits::SCAM_ALERTS).unwrap_or(usize::MAX);
    let alerts = &alerts[..alerts.len().min(shown)];
    if alerts.is_empty() {
        main.push_str(&components::empty_state(
            "No Active Scam Alerts",
            "Good news: there are no active scam reports right now.",
            Some(("Read consumer tips", "/news?category=consumer-tips")),
        ));
    } else {
        main.push_str("<div class=\"alert-list\">\n");
        for alert in alerts {
            alert_card(&mut main, alert);
        }
        main.push_str("</div>\n");
    }

    main.push_str("</div>\n");
    components::layout(ctx, &head, Some(NavKey::ScamAlerts), &main, &CloseConfig::default())
}
