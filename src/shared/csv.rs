//! Minimal CSV rendering for download endpoints.

use std::borrow::Cow;

/// One output column: a header and how to pull its value out of a row
pub struct Column<'a, T> {
    pub header: &'a str,
    extract: Box<dyn Fn(&T) -> String + Send + Sync + 'a>,
}

impl<'a, T> Column<'a, T> {
    pub fn new(header: &'a str, extract: impl Fn(&T) -> String + Send + Sync + 'a) -> Self {
        Self {
            header,
            extract: Box::new(extract),
        }
    }
}

/// Quote a field when it contains a delimiter, a quote or a line break.
/// Embedded quotes are doubled.
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn push_line<'v>(out: &mut String, values: impl Iterator<Item = Cow<'v, str>>) {
    for (i, value) in values.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&value);
    }
    out.push('\n');
}

/// Render rows as CSV: a header line, then one line per row in input order
pub fn to_csv<T>(rows: &[T], columns: &[Column<'_, T>]) -> String {
    let mut out = String::new();
    push_line(&mut out, columns.iter().map(|c| escape_field(c.header)));
    for row in rows {
        push_line(
            &mut out,
            columns
                .iter()
                .map(|c| Cow::Owned(escape_field(&(c.extract)(row)).into_owned())),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        address: &'static str,
    }

    fn columns() -> Vec<Column<'static, Row>> {
        vec![
            Column::new("Nama", |r: &Row| r.name.to_string()),
            Column::new("Alamat", |r: &Row| r.address.to_string()),
        ]
    }

    /// Split one CSV line on top-level commas, honoring quotes
    fn split_line(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes && chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        fields.push(current);
        fields
    }

    #[test]
    fn test_header_then_rows() {
        let rows = [
            Row {
                name: "Budi",
                address: "Jl. Sudirman",
            },
            Row {
                name: "Siti",
                address: "Jl. Thamrin",
            },
        ];
        let csv = to_csv(&rows, &columns());
        assert_eq!(csv, "Nama,Alamat\nBudi,Jl. Sudirman\nSiti,Jl. Thamrin\n");
    }

    #[test]
    fn test_value_with_comma_is_quoted_and_recoverable() {
        let rows = [Row {
            name: "Budi",
            address: "Jl. Merdeka, No. 5",
        }];
        let csv = to_csv(&rows, &columns());
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(line, "Budi,\"Jl. Merdeka, No. 5\"");
        assert_eq!(split_line(line), vec!["Budi", "Jl. Merdeka, No. 5"]);
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        assert_eq!(escape_field("Toko \"Maju\""), "\"Toko \"\"Maju\"\"\"");
        assert_eq!(
            split_line(&escape_field("Toko \"Maju\", Blok A")),
            vec!["Toko \"Maju\", Blok A"]
        );
    }

    #[test]
    fn test_line_breaks_are_quoted() {
        assert_eq!(escape_field("baris 1\nbaris 2"), "\"baris 1\nbaris 2\"");
    }

    #[test]
    fn test_plain_values_borrowed() {
        assert!(matches!(escape_field("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_empty_rows_yield_header_only() {
        let csv = to_csv::<Row>(&[], &columns());
        assert_eq!(csv, "Nama,Alamat\n");
    }
}
