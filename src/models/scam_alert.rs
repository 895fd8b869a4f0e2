use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScamAlert {
    pub business_name: String,
    pub description: String,
    pub location: Option<String>,
    /// RFC 3339 timestamp
    pub created_at: String,
}

impl ScamAlert {
    /// Date portion for display, falling back to the raw value.
    #[must_use]
    pub fn reported_on(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.created_at).map_or_else(
            |_| self.created_at.clone(),
            |dt| dt.format("%B %-d, %Y").to_string(),
        )
    }
}
