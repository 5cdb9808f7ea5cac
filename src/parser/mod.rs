//! Program text filtering
//!
//! Source text is reduced to the eight-symbol instruction alphabet exactly
//! once, when a [`Program`] is built. Everything else (comments, whitespace,
//! line breaks) is dropped for good; the engine never sees it.

use std::fmt;

/// One of the eight recognised instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `>`
    Right,
    /// `<`
    Left,
    /// `+`
    Increment,
    /// `-`
    Decrement,
    /// `.`
    Output,
    /// `,`
    Input,
    /// `[`
    LoopStart,
    /// `]`
    LoopEnd,
}

impl Instruction {
    /// Decode a single character, `None` for anything outside the alphabet
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '>' => Some(Instruction::Right),
            '<' => Some(Instruction::Left),
            '+' => Some(Instruction::Increment),
            '-' => Some(Instruction::Decrement),
            '.' => Some(Instruction::Output),
            ',' => Some(Instruction::Input),
            '[' => Some(Instruction::LoopStart),
            ']' => Some(Instruction::LoopEnd),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Instruction::Right => '>',
            Instruction::Left => '<',
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::Output => '.',
            Instruction::Input => ',',
            Instruction::LoopStart => '[',
            Instruction::LoopEnd => ']',
        }
    }

    /// Contribution to the bracket nesting level
    pub fn nesting_delta(self) -> i64 {
        match self {
            Instruction::LoopStart => 1,
            Instruction::LoopEnd => -1,
            _ => 0,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A filtered, immutable instruction sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Build a program from arbitrary text, keeping only instruction symbols
    pub fn parse(source: &str) -> Self {
        Program {
            instructions: source.chars().filter_map(Instruction::from_char).collect(),
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn get(&self, index: usize) -> Option<Instruction> {
        self.instructions.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The filtered program as text
    pub fn as_text(&self) -> String {
        self.instructions.iter().map(|i| i.as_char()).collect()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            write!(f, "{}", instruction)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_everything_outside_alphabet() {
        let program = Program::parse("++ first cell\n> x +++ [-<+>] <\t!");
        assert_eq!(program.as_text(), "++>+++[-<+>]<");
        assert_eq!(program.len(), 13);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let once = Program::parse("a+b[c-d]e.f,g<h>i");
        let twice = Program::parse(&once.as_text());
        assert_eq!(once, twice);
        assert_eq!(twice.as_text(), "+[-].,<>");
    }

    #[test]
    fn test_empty_and_comment_only_sources() {
        assert!(Program::parse("").is_empty());
        assert!(Program::parse("just a comment").is_empty());
    }

    #[test]
    fn test_display_matches_as_text() {
        let program = Program::parse("+[,.]");
        assert_eq!(program.to_string(), "+[,.]");
        assert_eq!(program.get(1), Some(Instruction::LoopStart));
        assert_eq!(program.get(5), None);
    }
}
