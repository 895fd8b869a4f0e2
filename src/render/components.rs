//! Shared page chrome.
//!
//! Each component takes a config struct whose fields are all optional apart
//! from what the fragment cannot do without, and returns a markup fragment.

use std::fmt::Write;

use super::nav::{self, FooterSection, NavItem, NavKey};
use super::{PageContext, attr, text};

#[derive(Debug, Clone, Default)]
pub struct HeadConfig {
    pub title: String,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    /// Path on this site, joined with the configured base URL.
    pub canonical_path: Option<String>,
    pub body_class: Option<String>,
    pub noindex: bool,
}

impl HeadConfig {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn canonical(mut self, path: impl Into<String>) -> Self {
        self.canonical_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn body_class(mut self, class: impl Into<String>) -> Self {
        self.body_class = Some(class.into());
        self
    }
}

/// Doctype through the opening `<body>` tag.
#[must_use]
pub fn document_head(ctx: &PageContext, config: &HeadConfig) -> String {
    let full_title = if config.title.is_empty() {
        ctx.site.name.clone()
    } else {
        format!("{} | {}", config.title, ctx.site.name)
    };

    let mut head = String::with_capacity(1024);
    head.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    head.push_str("    <meta charset=\"UTF-8\">\n");
    head.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(head, "    <title>{}</title>", text(&full_title));

    if let Some(description) = &config.description {
        let _ = writeln!(
            head,
            "    <meta name=\"description\" content=\"{}\">",
            attr(description)
        );
    }

    if !config.keywords.is_empty() {
        let _ = writeln!(
            head,
            "    <meta name=\"keywords\" content=\"{}\">",
            attr(&config.keywords.join(", "))
        );
    }

    if config.noindex {
        head.push_str("    <meta name=\"robots\" content=\"noindex\">\n");
    }

    if let Some(path) = &config.canonical_path {
        let _ = writeln!(
            head,
            "    <link rel=\"canonical\" href=\"{}\">",
            attr(&ctx.site.canonical(path))
        );
    }

    let _ = writeln!(
        head,
        "    <link rel=\"stylesheet\" href=\"{}\">",
        attr(&ctx.asset("css/site.css"))
    );

    head.push_str("</head>\n");
    match &config.body_class {
        Some(class) => {
            let _ = writeln!(head, "<body class=\"{}\">", attr(class));
        }
        None => head.push_str("<body>\n"),
    }

    head
}

#[derive(Debug, Clone, Default)]
pub struct HeaderConfig {
    pub nav: Vec<NavItem>,
}

impl HeaderConfig {
    #[must_use]
    pub fn for_section(active: Option<NavKey>) -> Self {
        Self {
            nav: nav::main_navigation(active),
        }
    }
}

#[must_use]
pub fn business_header(ctx: &PageContext, config: &HeaderConfig) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str("<header class=\"site-header\">\n  <div class=\"container header-inner\">\n");
    let _ = writeln!(
        html,
        "    <a class=\"brand\" href=\"/\">{}</a>",
        text(&ctx.site.name)
    );

    html.push_str("    <nav class=\"main-nav\" aria-label=\"Main\">\n      <ul>\n");
    for item in &config.nav {
        if item.active {
            let _ = writeln!(
                html,
                "        <li><a class=\"active\" aria-current=\"page\" href=\"{}\">{}</a></li>",
                attr(item.url),
                text(item.label)
            );
        } else {
            let _ = writeln!(
                html,
                "        <li><a href=\"{}\">{}</a></li>",
                attr(item.url),
                text(item.label)
            );
        }
    }
    html.push_str("      </ul>\n    </nav>\n  </div>\n</header>\n");
    html
}

#[derive(Debug, Clone, Default)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub show_search: bool,
    pub background_image: Option<String>,
}

#[must_use]
pub fn hero_header(ctx: &PageContext, config: &HeroConfig) -> String {
    let mut html = String::with_capacity(512);
    match &config.background_image {
        Some(image) => {
            let _ = writeln!(
                html,
                "<section class=\"hero\" style=\"background-image: url('{}')\">",
                attr(&ctx.asset(image))
            );
        }
        None => html.push_str("<section class=\"hero\">\n"),
    }
    html.push_str("  <div class=\"container hero-inner\">\n");
    let _ = writeln!(html, "    <h1>{}</h1>", text(&config.title));

    if let Some(subtitle) = &config.subtitle {
        let _ = writeln!(html, "    <p class=\"hero-subtitle\">{}</p>", text(subtitle));
    }

    if config.show_search {
        html.push_str(concat!(
            "    <form class=\"hero-search\" action=\"/categories\" method=\"get\" role=\"search\">\n",
            "      <input type=\"search\" name=\"q\" placeholder=\"Search businesses or categories\" aria-label=\"Search\">\n",
            "      <button class=\"btn btn-primary\" type=\"submit\">Search</button>\n",
            "    </form>\n",
        ));
    }

    if let (Some(label), Some(url)) = (&config.cta_label, &config.cta_url) {
        let _ = writeln!(
            html,
            "    <a class=\"btn btn-primary btn-lg\" href=\"{}\">{}</a>",
            attr(url),
            text(label)
        );
    }

    html.push_str("  </div>\n</section>\n");
    html
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    const fn class(self) -> &'static str {
        match self {
            Self::Left => "text-left",
            Self::Center => "text-center",
            Self::Right => "text-right",
        }
    }
}

#[must_use]
pub fn page_header(title: &str, subtitle: Option<&str>, align: Align) -> String {
    let mut html = String::with_capacity(256);
    let _ = writeln!(
        html,
        "<section class=\"page-header {}\">\n  <div class=\"container\">",
        align.class()
    );
    let _ = writeln!(html, "    <h1>{}</h1>", text(title));
    if let Some(subtitle) = subtitle {
        let _ = writeln!(html, "    <p class=\"lead\">{}</p>", text(subtitle));
    }
    html.push_str("  </div>\n</section>\n");
    html
}

#[derive(Debug, Clone, Default)]
pub struct FooterConfig {
    pub sections: Vec<FooterSection>,
    pub show_contact: bool,
}

impl FooterConfig {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            sections: nav::footer_sections(),
            show_contact: true,
        }
    }
}

#[must_use]
pub fn business_footer(ctx: &PageContext, config: &FooterConfig) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str("<footer class=\"site-footer\">\n  <div class=\"container footer-grid\">\n");

    html.push_str("    <div class=\"footer-about\">\n");
    let _ = writeln!(html, "      <h2>{}</h2>", text(&ctx.site.name));
    let _ = writeln!(html, "      <p>{}</p>", text(&ctx.site.tagline));
    if config.show_contact {
        let _ = writeln!(
            html,
            "      <p><a href=\"mailto:{}\">{}</a></p>",
            attr(&ctx.site.contact_email),
            text(&ctx.site.contact_email)
        );
    }
    html.push_str("    </div>\n");

    for section in &config.sections {
        html.push_str("    <div class=\"footer-links\">\n");
        let _ = writeln!(html, "      <h3>{}</h3>\n      <ul>", text(section.title));
        for link in &section.links {
            let _ = writeln!(
                html,
                "        <li><a href=\"{}\">{}</a></li>",
                attr(link.url),
                text(link.label)
            );
        }
        html.push_str("      </ul>\n    </div>\n");
    }

    html.push_str("  </div>\n");
    let _ = writeln!(
        html,
        "  <div class=\"container footer-bottom\"><p>&copy; {} {}. All rights reserved.</p></div>",
        ctx.year,
        text(&ctx.site.name)
    );
    html.push_str("</footer>\n");
    html
}

#[derive(Debug, Clone, Default)]
pub struct CloseConfig {
    /// Extra script paths under `/assets/`.
    pub scripts: Vec<String>,
}

impl CloseConfig {
    #[must_use]
    pub fn with_script(path: impl Into<String>) -> Self {
        Self {
            scripts: vec![path.into()],
        }
    }
}

/// Script tags and the closing `</body></html>`.
#[must_use]
pub fn document_close(ctx: &PageContext, config: &CloseConfig) -> String {
    let mut html = String::with_capacity(256);
    let _ = writeln!(
        html,
        "<script src=\"{}\" defer></script>",
        attr(&ctx.asset("js/site.js"))
    );
    for script in &config.scripts {
        let _ = writeln!(
            html,
            "<script src=\"{}\" defer></script>",
            attr(&ctx.asset(script))
        );
    }
    html.push_str("</body>\n</html>\n");
    html
}

/// Placeholder block shown when a collection is empty.
#[must_use]
pub fn empty_state(title: &str, message: &str, action: Option<(&str, &str)>) -> String {
    let mut html = String::with_capacity(256);
    html.push_str("<div class=\"empty-state\">\n");
    let _ = writeln!(html, "  <h2>{}</h2>", text(title));
    let _ = writeln!(html, "  <p>{}</p>", text(message));
    if let Some((label, url)) = action {
        let _ = writeln!(
            html,
            "  <a class=\"btn btn-primary\" href=\"{}\">{}</a>",
            attr(url),
            text(label)
        );
    }
    html.push_str("</div>\n");
    html
}

/// Error list and success banner carried over from the previous request.
#[must_use]
pub fn flash_messages(errors: &[String], success: Option<&str>) -> String {
    let mut html = String::new();
    if !errors.is_empty() {
        html.push_str("<div class=\"alert alert-error\" role=\"alert\">\n  <ul>\n");
        for error in errors {
            let _ = writeln!(html, "    <li>{}</li>", text(error));
        }
        html.push_str("  </ul>\n</div>\n");
    }
    if let Some(message) = success {
        let _ = writeln!(
            html,
            "<div class=\"alert alert-success\" role=\"status\">{}</div>",
            text(message)
        );
    }
    html
}

/// Assembles a full document around `main`.
#[must_use]
pub fn layout(
    ctx: &PageContext,
    head: &HeadConfig,
    active: Option<NavKey>,
    main: &str,
    close: &CloseConfig,
) -> String {
    let mut html = document_head(ctx, head);
    html.push_str(&business_header(ctx, &HeaderConfig::for_section(active)));
    html.push_str("<main id=\"main\">\n");
    html.push_str(main);
    html.push_str("</main>\n");
    html.push_str(&business_footer(ctx, &FooterConfig::standard()));
    html.push_str(&document_close(ctx, close));
    html
}
