use std::{fmt, str::FromStr};

const US_STATE_CODES: [&str; 51] = [
    "AK", "AL", "AR", "AZ", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "IA", "ID", "IL",
    "IN", "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS", "MT", "NC", "ND", "NE",
    "NH", "NJ", "NM", "NV", "NY", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VA", "VT", "WA", "WI", "WV", "WY",
];

/// Two-letter US state (or DC) code accepted by the venue and artist forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UsState(&'static str);

impl UsState {
    /// All accepted codes in alphabetical order.
    pub fn all() -> impl Iterator<Item = UsState> {
        US_STATE_CODES.iter().map(|code| UsState(code))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for UsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownState(pub String);

impl FromStr for UsState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        US_STATE_CODES
            .iter()
            .find(|code| **code == s)
            .map(|code| UsState(code))
            .ok_or_else(|| UnknownState(s.to_string()))
    }
}
