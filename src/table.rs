use getset::Getters;
use itertools::Itertools;
use log::{debug, warn};
use roto_scraping_utils::selector;
use scraper::{ElementRef, Html};

/// A header row plus data rows, as read off one or more HTML tables.
///
/// Every row has exactly one cell per column.  Empty cells are `None`.
#[derive(Clone, PartialEq, Eq, Debug, Default, Getters)]
#[getset(get = "pub")]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>, rows: impl IntoIterator<Item = Vec<Option<String>>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Reads the `index`-th `<table>` of the document, counting nested tables too.
    pub fn nth_in(html: &Html, index: usize) -> Option<Self> {
        html.select(selector!("table")).nth(index).map(parse_table)
    }

    /// Appends the rows of `other`, matching its columns to ours by name.
    ///
    /// Columns only `other` has are added at the end, and cells a row has no
    /// column for are `None`.  A repeated name matches the next unused column
    /// of that name.
    pub fn append(&mut self, other: RawTable) {
        let mut matched = vec![false; self.columns.len()];
        let mut positions = Vec::with_capacity(other.columns.len());
        for column in other.columns {
            let found = (0..self.columns.len()).find(|&i| !matched[i] && self.columns[i] == column);
            let i = found.unwrap_or_else(|| {
                debug!("New column {column:?} while appending rows");
                self.columns.push(column);
                matched.push(false);
                for row in &mut self.rows {
                    row.push(None);
                }
                self.columns.len() - 1
            });
            matched[i] = true;
            positions.push(i);
        }
        let width = self.columns.len();
        self.rows.extend(other.rows.into_iter().map(|row| {
            let mut aligned = vec![None; width];
            for (cell, &i) in row.into_iter().zip(&positions) {
                aligned[i] = cell;
            }
            aligned
        }));
    }

    /// Renames every column to the first word of its name, e.g. `"Home Runs HR"` to `"Home"`.
    pub fn shorten_headers(mut self) -> Self {
        for column in &mut self.columns {
            *column = first_token(column).to_owned();
        }
        self
    }

    /// Keeps the columns whose names appear in `allow_list`, in their current order.
    pub fn prune(&self, allow_list: &[&str]) -> Self {
        if !self.columns.is_empty() {
            for &missing in allow_list
                .iter()
                .filter(|&&name| !self.columns.iter().any(|c| c == name))
            {
                warn!("Column {missing:?} was not found in the table");
            }
        }
        let keep = self
            .columns
            .iter()
            .positions(|column| allow_list.contains(&column.as_str()))
            .collect_vec();
        Self {
            columns: keep.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
                .collect(),
        }
    }
}

fn first_token(header: &str) -> &str {
    header.split_whitespace().next().unwrap_or("")
}

fn parse_table(table: ElementRef) -> RawTable {
    let mut head = vec![];
    let mut body = vec![];
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "thead" => head.extend(child_rows(child)),
            "tbody" | "tfoot" => body.extend(child_rows(child)),
            "tr" => body.push(child),
            _ => {}
        }
    }

    let columns: Vec<String> = if let Some(&last) = head.last() {
        row_cells(last).into_iter().map(Option::unwrap_or_default).collect()
    } else if body.first().is_some_and(|&row| is_header_row(row)) {
        let row = body.remove(0);
        row_cells(row).into_iter().map(Option::unwrap_or_default).collect()
    } else {
        let width = body.iter().map(|&row| row_cells(row).len()).max().unwrap_or(0);
        (0..width).map(|i| i.to_string()).collect()
    };
    RawTable::new(columns, body.into_iter().map(row_cells))
}

fn child_rows<'a>(section: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    section
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "tr")
}

fn cells<'a>(row: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|e| matches!(e.value().name(), "td" | "th"))
}

fn is_header_row(row: ElementRef) -> bool {
    let mut cells = cells(row).peekable();
    cells.peek().is_some() && cells.all(|cell| cell.value().name() == "th")
}

/// Cell texts of a row, with `colspan` cells repeated.
fn row_cells(row: ElementRef) -> Vec<Option<String>> {
    cells(row)
        .flat_map(|cell| {
            let span = cell
                .value()
                .attr("colspan")
                .and_then(|x| x.trim().parse::<usize>().ok())
                .filter(|&x| x > 0)
                .unwrap_or(1);
            let text = cell.text().collect::<String>().split_whitespace().join(" ");
            let text = (!text.is_empty()).then_some(text);
            std::iter::repeat(text).take(span)
        })
        .collect()
}
