use std::fmt;

/// Zero-based cursor position inside a buffer.
///
/// [`Position::default`] is the start of the buffer. The [`fmt::Display`]
/// form is the one-based status-bar rendering (`Ln 1, Col 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
	pub line: u32,
	pub column: u32,
}

impl Position {
	pub const START: Self = Self { line: 0, column: 0 };

	pub const fn new(line: u32, column: u32) -> Self {
		Self { line, column }
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Ln {}, Col {}", self.line + 1, self.column + 1)
	}
}
