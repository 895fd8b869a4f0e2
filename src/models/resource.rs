#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Consumers,
    Businesses,
}

impl Audience {
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Consumers => "For Consumers",
            Self::Businesses => "For Business Owners",
        }
    }

    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Consumers => "consumers",
            Self::Businesses => "businesses",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLink {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub audience: Audience,
}
