use std::fmt::Write;

use crate::models::{Audience, ResourceLink};
use crate::render::components::{self, Align, CloseConfig, HeadConfig};
use crate::render::nav::NavKey;
use crate::render::{PageContext, attr, text};

#[must_use]
pub fn render(ctx: &PageContext, resources: &[ResourceLink]) -> String {
    let head = HeadConfig::new("Resources")
        .description("Guides and official links for consumers and business owners.")
        .keywords(&["consumer protection", "fraud reporting", "small business"])
        .canonical("/resources");

    let mut main = components::page_header(
        "Resources",
        Some("Helpful links for consumers and business owners."),
        Align::Left,
    );
    main.push_str("<div class=\"container\">\n");

    for audience in [Audience::Consumers, Audience::Businesses] {
        let links: Vec<_> = resources.iter().filter(|r| r.audience == audience).collect();
        let _ = writeln!(
            main,
            "<section class=\"section\" id=\"{}\">\n<h2>{}</h2>",
            audience.anchor(),
            text(audience.heading())
        );
        if links.is_empty() {
            main.push_str(&components::empty_state(
                "No Resources Yet",
                "Resources for this group are being prepared.",
                None,
            ));
        } else {
            main.push_str("<ul class=\"resource-list\">\n");
            for link in links {
                let external = link.url.starts_with("http");
                let _ = writeln!(
                    main,
                    "  <li><a href=\"{}\"{}>{}</a><p>{}</p></li>",
                    attr(link.url),
                    if external { " rel=\"noopener\" target=\"_blank\"" } else { "" },
                    text(link.title),
                    text(link.description)
                );
            }
            main.push_str("</ul>\n");
        }
        main.push_str("</section>\n");
    }

    main.push_str("</div>\n");
    components::layout(ctx, &head, Some(NavKey::Resources), &main, &CloseConfig::default())
}
