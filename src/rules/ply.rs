use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// A single move as it travels over the wire: `{from, to, promotion}`.
///
/// Squares are kept as the raw coordinate text the board widget or backend produced;
/// legality is the rules adapter's call, not this type's.
/// Both squares empty is the "you choose" descriptor sent to the remote mover.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Ply {
    pub from: String,
    pub to: String,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub promotion: Option<char>,
}

impl Ply {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            promotion: None,
        }
    }
    /// Descriptor asking the remote side to pick the move.
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn with_promotion(mut self, piece: char) -> Self {
        self.promotion = Some(piece.to_ascii_lowercase());
        self
    }
    pub fn is_empty(&self) -> bool {
        self.from.is_empty() && self.to.is_empty()
    }
    /// Same squares, promotion dropped.
    pub fn plain(&self) -> Self {
        Self::new(&self.from, &self.to)
    }
    /// Long algebraic (UCI) text, e.g. `e2e4` or `e7e8q`.
    pub fn uci(&self) -> String {
        match self.promotion {
            Some(p) => format!("{}{}{}", self.from, self.to, p),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

/// Parses UCI text: four square characters plus an optional promotion piece.
impl TryFrom<&str> for Ply {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        if !s.is_ascii() {
            return Err(format!("not a move: {}", s));
        }
        match s.len() {
            4 => Ok(Self::new(&s[0..2], &s[2..4])),
            5 => Ok(Self::new(&s[0..2], &s[2..4]).with_promotion(s.as_bytes()[4] as char)),
            _ => Err(format!("not a move: {}", s)),
        }
    }
}

impl std::fmt::Display for Ply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "(any)")
        } else {
            write!(f, "{}", self.uci())
        }
    }
}

/// Backends send `""` or a piece letter; an empty string means no promotion.
fn lenient<'de, D>(deserializer: D) -> Result<Option<char>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
        .map(|s| s.and_then(|s| s.chars().next()).map(|c| c.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn uci_text() {
        assert_eq!(Ply::new("e2", "e4").uci(), "e2e4");
        assert_eq!(Ply::new("e7", "e8").with_promotion('Q').uci(), "e7e8q");
    }
    #[test]
    fn parse_uci() {
        assert_eq!(Ply::try_from("g1f3"), Ok(Ply::new("g1", "f3")));
        assert_eq!(
            Ply::try_from("a7a8n"),
            Ok(Ply::new("a7", "a8").with_promotion('n'))
        );
        assert!(Ply::try_from("e2").is_err());
        assert!(Ply::try_from("e2e4e5").is_err());
    }
    #[test]
    fn empty_descriptor() {
        assert!(Ply::empty().is_empty());
        assert!(!Ply::new("e2", "e4").is_empty());
        assert_eq!(Ply::empty().to_string(), "(any)");
    }
    #[test]
    fn wire_shape() {
        let json = serde_json::to_value(Ply::new("e2", "e4")).unwrap();
        assert_eq!(json, serde_json::json!({ "from": "e2", "to": "e4" }));
        let ply = serde_json::from_str::<Ply>(r#"{"from":"b7","to":"b8","promotion":"Q"}"#);
        assert_eq!(ply.unwrap(), Ply::new("b7", "b8").with_promotion('q'));
    }
    #[test]
    fn blank_promotion_is_none() {
        let ply = serde_json::from_str::<Ply>(r#"{"from":"","to":"","promotion":""}"#).unwrap();
        assert!(ply.is_empty());
        assert_eq!(ply.promotion, None);
    }
}
