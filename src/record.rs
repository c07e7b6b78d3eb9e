use indexmap::IndexMap;
use itertools::Itertools;
use serde_json::{Number, Value};

use crate::{
    error::{Result, ScrapeError},
    table::RawTable,
};

/// One player's statistics, keyed by column name in column order.
pub type Record = IndexMap<String, Value>;

/// Converts each row into a record.
///
/// Every column is typed as a whole: integers if all its non-empty cells are integers,
/// floats if they are all numbers, strings otherwise.  Empty cells become `null`.
/// When two columns share a name, the later one wins.
pub fn normalize(table: &RawTable) -> Vec<Record> {
    let kinds = (0..table.columns().len())
        .map(|i| ColumnKind::infer(table.rows().iter().filter_map(|row| row[i].as_deref())))
        .collect_vec();
    table
        .rows()
        .iter()
        .map(|row| {
            table
                .columns()
                .iter()
                .zip(&kinds)
                .zip(row)
                .map(|((name, kind), cell)| (name.clone(), kind.convert(cell.as_deref())))
                .collect()
        })
        .collect()
}

/// Removes `field` from `record` and merges in the fields `convert` derives from it.
pub fn replace_field(
    mut record: Record,
    field: &str,
    convert: impl FnOnce(&Value) -> Result<Record>,
) -> Result<Record> {
    let value = record
        .shift_remove(field)
        .ok_or_else(|| ScrapeError::Schema {
            field: field.to_owned(),
            reason: "missing from the record".to_owned(),
        })?;
    record.extend(convert(&value)?);
    Ok(record)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ColumnKind {
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    fn infer<'a>(cells: impl Iterator<Item = &'a str> + Clone) -> Self {
        if cells.clone().all(|x| parse_integer(x).is_some()) {
            Self::Integer
        } else if cells.clone().all(|x| parse_float(x).is_some()) {
            Self::Float
        } else {
            Self::Text
        }
    }

    fn convert(self, cell: Option<&str>) -> Value {
        let Some(cell) = cell else {
            return Value::Null;
        };
        match self {
            Self::Integer => parse_integer(cell).map_or(Value::Null, Value::from),
            Self::Float => parse_float(cell)
                .and_then(Number::from_f64)
                .map_or(Value::Null, Value::Number),
            Self::Text => cell.into(),
        }
    }
}

/// Thousands separators are accepted, as in `"1,234"`.
fn numeric_text(cell: &str) -> Option<String> {
    let text = cell.replace(',', "");
    text.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .then_some(text)
}

fn parse_integer(cell: &str) -> Option<i64> {
    numeric_text(cell)?.parse().ok()
}

fn parse_float(cell: &str) -> Option<f64> {
    numeric_text(cell)?.parse().ok().filter(|x: &f64| x.is_finite())
}
