use std::fmt::Display;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MatchId(pub String);

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ChampionId(pub String);

impl Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for ChampionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MatchId {
    fn from(value: String) -> Self {
        MatchId(value)
    }
}

impl From<String> for ChampionId {
    fn from(value: String) -> Self {
        ChampionId(value)
    }
}

impl From<i64> for ChampionId {
    fn from(value: i64) -> Self {
        ChampionId(value.to_string())
    }
}

impl MatchId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
