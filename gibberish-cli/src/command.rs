/// A line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Empty line: one word.
    Word,
    /// A number: that many words on one line.
    Words(usize),
    Sentence,
    Paragraph,
    /// Replace the cached vocabulary with a new one.
    RebuildVocabulary,
}

impl Command {
    /// Parses one input line, without its line ending.
    ///
    /// Returns `None` for anything unrecognized, which the prompt ignores.
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            "" => Some(Command::Word),
            "p" | "P" => Some(Command::Paragraph),
            "s" | "S" => Some(Command::Sentence),
            "v" | "V" => Some(Command::RebuildVocabulary),
            digits if digits.bytes().all(|b| b.is_ascii_digit()) => digits.parse().ok().map(Command::Words),
            _ => None,
        }
    }
}
