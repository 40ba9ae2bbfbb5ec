//! Commands produced from user input lines

use std::fmt;

/// Command keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Create,
    Line,
    Rect,
    Fill,
    Quit,
    Unknown,
}

impl Keyword {
    /// Map a command token (`C`, `L`, `R`, `B`, `Q`, any case) to its keyword
    pub fn from_token(token: &str) -> Self {
        match token {
            "C" | "c" => Self::Create,
            "L" | "l" => Self::Line,
            "R" | "r" => Self::Rect,
            "B" | "b" => Self::Fill,
            "Q" | "q" => Self::Quit,
            _ => Self::Unknown,
        }
    }

    /// Minimum number of arguments the keyword requires
    pub const fn min_args(self) -> usize {
        match self {
            Self::Create => 2,
            Self::Line | Self::Rect => 4,
            Self::Fill => 3,
            Self::Quit | Self::Unknown => 0,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Create => "CREATE",
            Self::Line => "LINE",
            Self::Rect => "RECT",
            Self::Fill => "FILL",
            Self::Quit => "QUIT",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// A single user command: keyword plus raw, unvalidated arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    keyword: Keyword,
    args: Vec<String>,
}

impl Command {
    pub fn new<I, S>(keyword: Keyword, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keyword,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a raw input line into a command.
    ///
    /// Blank lines and unrecognised tokens become `Keyword::Unknown`.
    /// Arguments of QUIT and UNKNOWN are dropped.
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().map_or(Keyword::Unknown, Keyword::from_token);
        match keyword {
            Keyword::Quit | Keyword::Unknown => Self::new(keyword, Vec::<String>::new()),
            _ => Self::new(keyword, tokens),
        }
    }

    pub fn keyword(&self) -> Keyword {
        self.keyword
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}
