use crate::Chips;
use crate::GameError;
use std::collections::HashMap;

/// Parameters a connection supplies when it joins:
/// `?name=<display name>&stack=<starting chips>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub name: String,
    pub stack: Chips,
}

impl TryFrom<&HashMap<String, String>> for Join {
    type Error = GameError;
    fn try_from(query: &HashMap<String, String>) -> Result<Self, Self::Error> {
        let name = query
            .get("name")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| GameError::Parse("missing name".to_string()))?;
        let stack = query
            .get("stack")
            .ok_or_else(|| GameError::Parse("missing stack".to_string()))?
            .trim()
            .parse::<Chips>()
            .map_err(|e| GameError::Parse(format!("invalid stack: {}", e)))?;
        Ok(Self {
            name: name.to_string(),
            stack,
        })
    }
}
