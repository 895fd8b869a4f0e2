//! Static consumer and business resource links.

use crate::models::{Audience, ResourceLink};

const RESOURCES: &[ResourceLink] = &[
    ResourceLink {
        title: "Report Fraud to the FTC",
        description: "File a report about scams, identity theft and bad business practices.",
        url: "https://reportfraud.ftc.gov/",
        audience: Audience::Consumers,
    },
    ResourceLink {
        title: "Check a Contractor License",
        description: "Look up state licensing boards before hiring for home repairs.",
        url: "https://www.nascla.org/",
        audience: Audience::Consumers,
    },
    ResourceLink {
        title: "Identity Theft Recovery",
        description: "Step-by-step recovery plans if your personal information was exposed.",
        url: "https://www.identitytheft.gov/",
        audience: Audience::Consumers,
    },
    ResourceLink {
        title: "Do Not Call Registry",
        description: "Register your number to reduce unwanted telemarketing calls.",
        url: "https://www.donotcall.gov/",
        audience: Audience::Consumers,
    },
    ResourceLink {
        title: "Small Business Administration",
        description: "Guides for planning, funding and growing a small business.",
        url: "https://www.sba.gov/",
        audience: Audience::Businesses,
    },
    ResourceLink {
        title: "Responding to Customer Reviews",
        description: "Best practices for answering complaints publicly and professionally.",
        url: "/news?category=business-insights",
        audience: Audience::Businesses,
    },
    ResourceLink {
        title: "Protecting Your Business From Scams",
        description: "Common invoice, directory-listing and tech-support schemes aimed at businesses.",
        url: "https://www.ftc.gov/business-guidance/small-businesses",
        audience: Audience::Businesses,
    },
];

#[must_use]
pub const fn all_resources() -> &'static [ResourceLink] {
    RESOURCES
}

#[must_use]
pub fn for_audience(audience: Audience) -> Vec<&'static ResourceLink> {
    RESOURCES.iter().filter(|r| r.audience == audience).collect()
}
