use crate::Chips;
use crate::GameError;

/// A betting decision by the seat whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    Call,
    Check,
    /// Target bet, not the increment.
    Raise(Chips),
}

impl TryFrom<&str> for Action {
    type Error = GameError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let parts = s.split_whitespace().collect::<Vec<&str>>();
        match parts.as_slice() {
            [verb] if verb.eq_ignore_ascii_case("FOLD") => Ok(Action::Fold),
            [verb] if verb.eq_ignore_ascii_case("CALL") => Ok(Action::Call),
            [verb] if verb.eq_ignore_ascii_case("CHECK") => Ok(Action::Check),
            [verb, amount] if verb.eq_ignore_ascii_case("RAISE") => amount
                .parse::<Chips>()
                .map_err(|_| GameError::Parse(format!("invalid raise amount {:?}", amount)))
                .and_then(|n| match n > 0 {
                    true => Ok(Action::Raise(n)),
                    false => Err(GameError::Validation(format!("raise amount {} not positive", n))),
                }),
            [verb] if verb.eq_ignore_ascii_case("RAISE") => {
                Err(GameError::Parse("missing raise amount".to_string()))
            }
            _ => Err(GameError::Parse(format!("invalid action {:?}", s))),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "FOLD"),
            Action::Call => write!(f, "CALL"),
            Action::Check => write!(f, "CHECK"),
            Action::Raise(amount) => write!(f, "RAISE {}", amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn parses_wire_actions() {
        assert_eq!(Action::try_from("FOLD"), Ok(Action::Fold));
        assert_eq!(Action::try_from("CALL"), Ok(Action::Call));
        assert_eq!(Action::try_from("check"), Ok(Action::Check));
        assert_eq!(Action::try_from("RAISE 250"), Ok(Action::Raise(250)));
    }
    #[test]
    fn non_numeric_raise_is_parse_error() {
        assert!(matches!(Action::try_from("RAISE"), Err(GameError::Parse(_))));
        assert!(matches!(Action::try_from("RAISE lots"), Err(GameError::Parse(_))));
        assert!(matches!(Action::try_from("RAISE 1.5"), Err(GameError::Parse(_))));
    }
    #[test]
    fn non_positive_raise_is_validation_error() {
        assert!(matches!(Action::try_from("RAISE 0"), Err(GameError::Validation(_))));
        assert!(matches!(Action::try_from("RAISE -20"), Err(GameError::Validation(_))));
    }
    #[test]
    fn unknown_verbs_rejected() {
        assert!(Action::try_from("EXIT").is_err());
        assert!(Action::try_from("").is_err());
        assert!(Action::try_from("CALL 10").is_err());
    }
    #[test]
    fn display_round_trips() {
        let action = Action::Raise(300);
        assert_eq!(Action::try_from(action.to_string().as_str()), Ok(action));
    }
}
