use colored::Colorize;

/// Eight-rank text board drawn from the placement field of a FEN, white at the bottom.
pub struct Diagram<'a>(pub &'a str);

impl std::fmt::Display for Diagram<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let placement = self.0.split_whitespace().next().unwrap_or_default();
        for (i, rank) in placement.split('/').enumerate() {
            write!(f, "{} ", (8 - i).to_string().dimmed())?;
            for c in rank.chars() {
                match c.to_digit(10) {
                    Some(n) => (0..n).try_for_each(|_| write!(f, "{} ", ".".dimmed()))?,
                    None if c.is_ascii_uppercase() => write!(f, "{} ", c.to_string().bold().white())?,
                    None => write!(f, "{} ", c.to_string().bold().red())?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  {}", "a b c d e f g h".dimmed())
    }
}
