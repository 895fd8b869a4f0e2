#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsArticle {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub author: &'static str,
}

impl NewsArticle {
    #[must_use]
    pub fn category_slug(&self) -> String {
        slugify(self.category)
    }
}

/// Lowercases and joins alphanumeric runs with `-`.
#[must_use]
pub fn slugify(value: &str) -> String {
    value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Consumer Tips"), "consumer-tips");
        assert_eq!(slugify("  Scams & Fraud "), "scams-fraud");
        assert_eq!(slugify(""), "");
    }
}
