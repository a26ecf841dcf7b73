use serde::{Deserialize, Serialize};

/// Destination a traveller asked deals for.
///
/// Wraps the raw string from the inbound request so it cannot be mixed up
/// with other free-form strings (airline names, error messages) on the way
/// through the finders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Destination(String);

impl Destination {
    /// Creates a destination from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the destination as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Destination {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Destination {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Destination {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The kind of deal a collaborator supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DealCategory {
    Flights,
    Hotels,
    Activities,
}

impl DealCategory {
    /// All categories, in the order the wire response lists them.
    pub const ALL: [DealCategory; 3] = [
        DealCategory::Flights,
        DealCategory::Hotels,
        DealCategory::Activities,
    ];

    /// Returns the label used as error prefix and metrics label.
    pub fn as_str(&self) -> &'static str {
        match self {
            DealCategory::Flights => "Flights",
            DealCategory::Hotels => "Hotels",
            DealCategory::Activities => "Activities",
        }
    }
}

impl std::fmt::Display for DealCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_serializes_as_plain_string() {
        let destination = Destination::new("Tokyo");
        let json = serde_json::to_string(&destination).unwrap();
        assert_eq!(json, "\"Tokyo\"");
    }

    #[test]
    fn destination_display_and_as_ref() {
        let destination = Destination::from("Bali");
        assert_eq!(destination.to_string(), "Bali");
        assert_eq!(destination.as_ref(), "Bali");
    }

    #[test]
    fn destination_lookup_is_case_sensitive() {
        assert_ne!(Destination::from("paris"), Destination::from("Paris"));
    }

    #[test]
    fn category_labels() {
        let labels: Vec<&str> = DealCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(labels, vec!["Flights", "Hotels", "Activities"]);
        assert_eq!(DealCategory::Hotels.to_string(), "Hotels");
    }
}
