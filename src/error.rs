/// Recoverable failures at the match session boundary.
/// None of these take down the gateway or any other match;
/// they are reported back to the connection that caused them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Inbound message or action could not be parsed.
    Parse(String),
    /// No live match with this identifier.
    Lookup(String),
    /// Match was already settled when the move arrived.
    Stale(String),
    /// Well-formed move that the match rejects.
    Validation(String),
    /// Final stacks could not be written to the player store.
    Settlement(String),
}

impl GameError {
    /// Short tag used in outbound error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse",
            Self::Lookup(_) => "lookup",
            Self::Stale(_) => "stale",
            Self::Validation(_) => "validation",
            Self::Settlement(_) => "settlement",
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(s) => write!(f, "malformed message: {}", s),
            Self::Lookup(s) => write!(f, "match not found: {}", s),
            Self::Stale(s) => write!(f, "match already settled: {}", s),
            Self::Validation(s) => write!(f, "move rejected: {}", s),
            Self::Settlement(s) => write!(f, "settlement failed: {}", s),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            GameError::Parse(String::new()).kind(),
            GameError::Lookup(String::new()).kind(),
            GameError::Stale(String::new()).kind(),
            GameError::Validation(String::new()).kind(),
            GameError::Settlement(String::new()).kind(),
        ];
        let unique = kinds.iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(unique.len(), kinds.len());
    }
    #[test]
    fn display_carries_detail() {
        let err = GameError::Lookup("abc".to_string());
        assert_eq!(err.to_string(), "match not found: abc");
    }
}
