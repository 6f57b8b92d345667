//! Fixed-width table rendering for the movie list.

use crate::models::movie::Collection;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::io::{self, Write};

/// Minimum column widths. Longer values overflow instead of being truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    pub index: usize,
    pub title: usize,
    pub director: usize,
    pub runtime: usize,
    pub watched: usize,
    pub year: usize,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            index: 3,
            title: 25,
            director: 20,
            runtime: 8,
            watched: 10,
            year: 6,
        }
    }
}

impl TableLayout {
    fn row(&self, cells: [&dyn std::fmt::Display; 6]) -> String {
        let widths = [
            self.index,
            self.title,
            self.director,
            self.runtime,
            self.watched,
            self.year,
        ];

        let mut line = String::new();
        for (cell, width) in cells.iter().zip(widths) {
            // Writing to a String cannot fail.
            let _ = write!(line, "{:<width$}", cell, width = width);
        }
        line.truncate(line.trim_end().len());
        line.push('\n');
        line
    }
}

/// Render the collection as a table, header first, one row per movie.
pub fn render_table(collection: &Collection, layout: &TableLayout) -> String {
    let mut out = layout.row([&"#", &"Title", &"Director", &"Runtime", &"Watched", &"Year"]);

    for (i, movie) in collection.iter().enumerate() {
        out.push_str(&layout.row([
            &i,
            &movie.title,
            &movie.director,
            &movie.runtime,
            &movie.watch_count,
            &movie.year,
        ]));
    }

    out
}

/// Write the rendered table to `writer`.
pub fn print_table<W: Write>(
    writer: &mut W,
    collection: &Collection,
    layout: &TableLayout,
) -> io::Result<()> {
    writer.write_all(render_table(collection, layout).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::movie::Movie;

    #[test]
    fn test_header_only_for_empty_collection() {
        let table = render_table(&Collection::new(), &TableLayout::default());
        assert_eq!(
            table,
            "#  Title                    Director            Runtime Watched   Year\n"
        );
    }

    #[test]
    fn test_rows_use_zero_based_index_and_widths() {
        let mut c = Collection::new();
        c.push(Movie::from_raw("Inception", "Chris_Nolan", 148, 2, 2010)).unwrap();
        c.push(Movie::from_raw("Moon", "Duncan_Jones", 97, 0, 2009)).unwrap();

        let table = render_table(&c, &TableLayout::default());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "0  Inception                Chris Nolan         148     2         2010"
        );
        assert_eq!(
            lines[2],
            "1  Moon                     Duncan Jones        97      0         2009"
        );
    }

    #[test]
    fn test_long_values_overflow_without_truncation() {
        let mut c = Collection::new();
        let title = "Dr_Strangelove_or_How_I_Learned_to_Stop_Worrying";
        c.push(Movie::from_raw(title, "Stanley_Kubrick", 95, 1, 1964)).unwrap();

        let table = render_table(&c, &TableLayout::default());
        assert!(table.contains("Dr Strangelove or How I Learned to Stop WorryingStanley Kubrick"));
    }

    #[test]
    fn test_print_table_writes_rendered_output() {
        let c = Collection::new();
        let mut buf = Vec::new();
        print_table(&mut buf, &c, &TableLayout::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_table(&c, &TableLayout::default()));
    }
}
