use crate::rules::*;

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Move(Ply),
    Resume,
    Board,
    Quit,
}

impl std::str::FromStr for Entry {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resume" | "r" => Ok(Self::Resume),
            "board" | "b" => Ok(Self::Board),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            uci => Ply::try_from(uci).map(Self::Move),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn parses_moves_and_commands() {
        assert_eq!("e2e4".parse(), Ok(Entry::Move(Ply::new("e2", "e4"))));
        assert_eq!(
            " E7E8Q ".parse(),
            Ok(Entry::Move(Ply::new("e7", "e8").with_promotion('q')))
        );
        assert_eq!("resume".parse(), Ok(Entry::Resume));
        assert_eq!("q".parse(), Ok(Entry::Quit));
        assert!("castle".parse::<Entry>().is_err());
    }
}
