//! Row and column reductions over tables.

use maybe_core::{Mat, Maybe, Seq};

use crate::error::TextError;

/// Extract column `index` from every row.
pub fn column<T>(table: Mat<T>, index: usize) -> Seq<T> {
    let mut row = 0;
    table.join(|cells| {
        let current = row;
        row += 1;
        let width = cells.len();
        match cells.into_iter().nth(index) {
            Some(cell) => Maybe::just(cell),
            None => Maybe::err(TextError::ColumnOutOfRange {
                row: current,
                column: index,
                width,
            }),
        }
    })
}

/// Sum each row, failing on overflow.
pub fn row_sums(table: Mat<i64>) -> Seq<i64> {
    let mut row = 0;
    table.join(|cells| {
        let current = row;
        row += 1;
        match cells.into_iter().try_fold(0_i64, i64::checked_add) {
            Some(sum) => Maybe::just(sum),
            None => Maybe::err(TextError::Overflow { row: current }),
        }
    })
}

/// Keep the sequence only if no value is negative.
pub fn non_negative(values: Seq<i64>) -> Seq<i64> {
    values.map(|x| {
        if x < 0 {
            Maybe::err(TextError::Negative(x))
        } else {
            Maybe::just(x)
        }
    })
}

/// Swap rows and columns of a rectangular table.
pub fn transpose<T>(table: Mat<T>) -> Mat<T> {
    table.bind(crate::reader::require_rectangular).bind(|rows| {
        let width = rows.first().map_or(0, Vec::len);
        let mut columns: Vec<Vec<T>> = (0..width).map(|_| Vec::with_capacity(rows.len())).collect();
        for row in rows {
            for (column, cell) in columns.iter_mut().zip(row) {
                column.push(cell);
            }
        }
        Mat::just(columns)
    })
}
