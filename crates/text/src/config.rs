//! # Table Configuration
//!
//! How raw text is cut into rows and cells. Defaults suit whitespace-separated
//! numeric data; every field can be set with a builder method or loaded from
//! JSON.
//!
//! ```rust
//! use maybe_text::{Delimiter, TableConfig};
//!
//! let config = TableConfig::default()
//!     .with_delimiter(Delimiter::Char(','))
//!     .with_comment("#");
//! assert_eq!(config.delimiter, Delimiter::Char(','));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::TextError;

/// How a line is cut into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// Runs of whitespace; never yields empty cells.
    #[default]
    Whitespace,
    /// A single separator character; adjacent separators yield empty cells.
    Char(char),
}

impl Delimiter {
    /// Cut `line` into cells, trimming each one when `trim` is set.
    pub fn split(&self, line: &str, trim: bool) -> Vec<String> {
        match self {
            Delimiter::Whitespace => line.split_whitespace().map(str::to_string).collect(),
            Delimiter::Char(c) => line
                .split(*c)
                .map(|cell| if trim { cell.trim() } else { cell })
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Configuration for reading a table out of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Cell separator
    pub delimiter: Delimiter,
    /// Trim surrounding whitespace from lines and cells
    pub trim: bool,
    /// Drop lines that are empty after comment stripping and trimming
    pub skip_blank: bool,
    /// Everything from this prefix to the end of the line is ignored
    pub comment: Option<String>,
    /// Fail unless every row has the same number of cells
    pub rectangular: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::Whitespace,
            trim: true,
            skip_blank: true,
            comment: None,
            rectangular: false,
        }
    }
}

impl TableConfig {
    /// Set the cell separator.
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable or disable trimming.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Keep or drop blank lines.
    pub fn with_skip_blank(mut self, skip: bool) -> Self {
        self.skip_blank = skip;
        self
    }

    /// Set the comment prefix.
    pub fn with_comment(mut self, prefix: impl Into<String>) -> Self {
        self.comment = Some(prefix.into());
        self
    }

    /// Require equal row widths.
    pub fn with_rectangular(mut self, rectangular: bool) -> Self {
        self.rectangular = rectangular;
        self
    }

    /// Load a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, TextError> {
        let config: TableConfig =
            serde_json::from_str(json).map_err(|e| TextError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that cannot be applied.
    pub fn validate(&self) -> Result<(), TextError> {
        if matches!(self.comment.as_deref(), Some("")) {
            return Err(TextError::Config("comment prefix is empty".into()));
        }
        if let Delimiter::Char(c) = self.delimiter {
            if c == '\n' || c == '\r' {
                return Err(TextError::Config(format!("{:?} cannot separate cells", c)));
            }
        }
        Ok(())
    }

    /// Apply comment stripping and trimming to one line.
    pub(crate) fn clean<'a>(&self, line: &'a str) -> &'a str {
        let line = match &self.comment {
            Some(prefix) => line.find(prefix.as_str()).map_or(line, |at| &line[..at]),
            None => line,
        };
        if self.trim {
            line.trim()
        } else {
            line
        }
    }
}
