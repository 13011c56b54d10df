//! # Reading Tables
//!
//! Text becomes a table in three container steps:
//!
//! ```text
//!   &str ──lines──► Seq<String> ──split──► Mat<String> ──convert_to──► Mat<T>
//! ```
//!
//! Each step is total and fails fast, so a malformed cell deep inside the
//! input surfaces as the single error of the final `Mat<T>`.

use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::str::FromStr;

use maybe_core::{Mat, Maybe, Seq, Stage, Value};

use crate::config::TableConfig;
use crate::error::TextError;

/// Split text into cleaned lines according to `config`.
///
/// An invalid config yields a failure instead of silently dropping lines.
pub fn lines(text: &str, config: &TableConfig) -> Seq<String> {
    if let Err(e) = config.validate() {
        return Seq::err(e);
    }
    let mut skipped = 0;
    let kept: Vec<String> = text
        .lines()
        .map(|line| config.clean(line))
        .filter(|line| {
            let keep = !(config.skip_blank && line.trim().is_empty());
            if !keep {
                skipped += 1;
            }
            keep
        })
        .map(str::to_string)
        .collect();

    tracing::debug!(lines = kept.len(), skipped, "split text into lines");
    Seq::just(kept)
}

/// Split text into a table of string cells.
pub fn tokenize(text: &str, config: &TableConfig) -> Mat<String> {
    let table = lines(text, config).split(|line| Seq::just(config.delimiter.split(&line, config.trim)));
    if config.rectangular {
        table.bind(require_rectangular)
    } else {
        table
    }
}

/// Fail unless every row has the width of the first one.
pub fn require_rectangular<T>(rows: Vec<Vec<T>>) -> Mat<T> {
    let expected = rows.first().map_or(0, Vec::len);
    match rows.iter().position(|row| row.len() != expected) {
        Some(row) => Mat::err(TextError::Ragged {
            row,
            expected,
            found: rows[row].len(),
        }),
        None => Mat::just(rows),
    }
}

/// Parse every cell, reporting the first failure with its position.
///
/// Positions are table coordinates: `row` counts the rows that survived
/// comment and blank-line filtering, not source lines.
pub fn parse_cells<T>(cells: Mat<String>) -> Mat<T>
where
    T: FromStr,
    T::Err: Display,
{
    let mut row = 0;
    cells.map(|cols| {
        let current = row;
        row += 1;
        Seq::from_items(cols.into_iter().enumerate()).map(|(column, token)| match token.parse::<T>() {
            Ok(value) => Maybe::just(value),
            Err(e) => Maybe::err(TextError::Parse {
                row: current,
                column,
                message: e.to_string(),
                token,
            }),
        })
    })
}

/// Classify every cell as a dynamic [`Value`].
pub fn infer_cells(cells: Mat<String>) -> Mat<Value> {
    cells.convert_to(|token| Maybe::just(Value::infer(&token)))
}

/// A configured text-to-table reader, usable as a pipeline stage.
///
/// ```rust
/// use maybe_core::Stage;
/// use maybe_text::{TableConfig, TableReader};
///
/// let reader: TableReader<i64> = TableReader::new(TableConfig::default());
/// let table = reader.run("1 2\n3 4".to_string());
/// assert_eq!(table.unbox().unwrap(), vec![vec![1, 2], vec![3, 4]]);
/// ```
pub struct TableReader<T> {
    config: TableConfig,
    _kind: PhantomData<fn() -> T>,
}

impl<T> Clone for TableReader<T> {
    fn clone(&self) -> Self {
        Self::new(self.config.clone())
    }
}

impl<T> fmt::Debug for TableReader<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableReader")
            .field("kind", &std::any::type_name::<T>())
            .field("config", &self.config)
            .finish()
    }
}

impl<T> TableReader<T> {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            _kind: PhantomData,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
}

impl<T> TableReader<T>
where
    T: FromStr,
    T::Err: Display,
{
    /// Read `text` into a table of `T`.
    pub fn read(&self, text: &str) -> Mat<T> {
        parse_cells(tokenize(text, &self.config))
    }
}

impl<T> Stage for TableReader<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Input = String;
    type Output = Mat<T>;

    fn run(&self, input: Self::Input) -> Self::Output {
        self.read(&input)
    }

    fn name(&self) -> &'static str {
        "TableReader"
    }
}

#[cfg(test)]
mod tests {
    use maybe_core::Error;

    use super::*;
    use crate::config::Delimiter;

    #[test]
    fn test_lines_skips_blank_and_comments() {
        let config = TableConfig::default().with_comment("#");
        let got = lines("# header\n1 2\n\n  3 4  # note\n", &config);
        assert_eq!(got.unbox(), Ok(vec!["1 2".to_string(), "3 4".to_string()]));
    }

    #[test]
    fn test_lines_keeps_blank_when_asked() {
        let config = TableConfig::default().with_skip_blank(false);
        assert_eq!(lines("a\n\nb", &config).len(), Some(3));
    }

    #[test]
    fn test_lines_of_empty_text_is_valid_and_empty() {
        let got = lines("", &TableConfig::default());
        assert_eq!(got.unbox(), Ok(vec![]));
    }

    #[test]
    fn test_tokenize_whitespace() {
        let got = tokenize("a b\nc", &TableConfig::default());
        assert_eq!(
            got.unbox(),
            Ok(vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string()]
            ])
        );
    }

    #[test]
    fn test_tokenize_rectangular_rejects_ragged() {
        let config = TableConfig::default().with_rectangular(true);
        let got = tokenize("1 2\n3 4\n5", &config);
        let error = got.unbox().unwrap_err();
        assert_eq!(
            error.downcast_ref::<TextError>(),
            Some(&TextError::Ragged {
                row: 2,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_require_rectangular_accepts_empty() {
        assert_eq!(require_rectangular::<i64>(vec![]).unbox(), Ok(vec![]));
    }

    #[test]
    fn test_parse_cells_reports_position() {
        let cells = tokenize("1 2\n3 x 5", &TableConfig::default());
        let got: Mat<i64> = parse_cells(cells);
        let error = got.unbox().unwrap_err();
        match error.downcast_ref::<TextError>() {
            Some(TextError::Parse {
                row, column, token, ..
            }) => {
                assert_eq!((*row, *column), (1, 1));
                assert!(error.to_string().starts_with("table row 1, column 1"));
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_row_counts_table_rows_not_source_lines() {
        let config = TableConfig::default().with_comment("#");
        let cells = tokenize("# header\n\n1 2\n# skipped\n3 x", &config);
        let error = parse_cells::<i64>(cells).unbox().unwrap_err();
        assert!(matches!(
            error.downcast_ref::<TextError>(),
            Some(TextError::Parse { row: 1, column: 1, .. })
        ));
    }

    #[test]
    fn test_parse_cells_keeps_upstream_error() {
        let upstream = Error::msg("no input");
        let got: Mat<f64> = parse_cells(Mat::err(upstream.clone()));
        assert!(Error::same(got.error().unwrap(), &upstream));
    }

    #[test]
    fn test_infer_cells() {
        let cells = tokenize("id,score\n1,2.5", &TableConfig::default().with_delimiter(Delimiter::Char(',')));
        let got = infer_cells(cells).unbox().unwrap();
        assert_eq!(got[0], vec![Value::from("id"), Value::from("score")]);
        assert_eq!(got[1], vec![Value::Int(1), Value::Float(2.5)]);
    }

    #[test]
    fn test_empty_comment_prefix_fails_instead_of_dropping_rows() {
        let config = TableConfig::default().with_comment("");
        let expected = TextError::Config("comment prefix is empty".into());

        let error = lines("1 2", &config).unbox().unwrap_err();
        assert_eq!(error.downcast_ref::<TextError>(), Some(&expected));
        assert!(tokenize("1 2\n3 4", &config).is_err());

        let reader: TableReader<i64> = TableReader::new(config);
        assert!(reader.read("1 2\n3 4").is_err());
    }

    #[test]
    fn test_newline_delimiter_fails() {
        let config = TableConfig::default().with_delimiter(Delimiter::Char('\n'));
        assert!(tokenize("a,b", &config).is_err());
    }

    #[test]
    fn test_table_reader_clone_and_debug_without_bounds() {
        struct Opaque;
        impl FromStr for Opaque {
            type Err = std::convert::Infallible;
            fn from_str(_: &str) -> Result<Self, Self::Err> {
                Ok(Opaque)
            }
        }

        let reader: TableReader<Opaque> = TableReader::new(TableConfig::default().with_trim(false));
        let copy = reader.clone();
        assert!(!copy.config().trim);
        assert!(format!("{:?}", copy).starts_with("TableReader"));
        assert_eq!(copy.read("a b").rows(), Some(1));
    }

    #[test]
    fn test_table_reader_stage() {
        let reader: TableReader<u8> = TableReader::new(TableConfig::default());
        assert_eq!(reader.name(), "TableReader");
        assert!(reader.run("1 2 300".to_string()).is_err());
        assert_eq!(reader.read("7").unbox(), Ok(vec![vec![7]]));
    }
}
