use std::str::FromStr;

/// Rule selecting which URL field a tracked link resolves to.
///
/// The stored column is free text; anything other than `"single"` resolves
/// through the fallback URL. Parsing is therefore total — there is no error
/// branch, which keeps the public redirect path infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationStrategy {
    /// Resolve to the link's `single_url`.
    Single,
    /// Resolve to the link's `fallback_url`.
    Fallback,
}

impl FromStr for DestinationStrategy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            _ => Ok(Self::Fallback),
        }
    }
}

impl std::fmt::Display for DestinationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_parses() {
        let s: DestinationStrategy = "single".parse().unwrap();
        assert_eq!(s, DestinationStrategy::Single);
    }

    #[test]
    fn unknown_strategies_fall_back() {
        let s: DestinationStrategy = "fallback".parse().unwrap();
        assert_eq!(s, DestinationStrategy::Fallback);
        let s: DestinationStrategy = "smart".parse().unwrap();
        assert_eq!(s, DestinationStrategy::Fallback);
        let s: DestinationStrategy = "".parse().unwrap();
        assert_eq!(s, DestinationStrategy::Fallback);
    }

    #[test]
    fn display_round_trip() {
        assert_eq!(DestinationStrategy::Single.to_string(), "single");
        assert_eq!(DestinationStrategy::Fallback.to_string(), "fallback");
    }
}
