/// A spreadsheet cell as it reaches the parser: either a number (spreadsheet
/// time serial, minute count) or free text. CSV transports everything as
/// text, so numeric-looking fields are re-sniffed at import.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Number(f64),
    Text(String),
}

impl RawCell {
    /// Build a cell from a CSV field. A field that parses as `f64` keeps its
    /// numeric interpretation so serial times survive the CSV round trip.
    pub fn from_field(field: &str) -> Self {
        let trimmed = field.trim();
        match trimmed.parse::<f64>() {
            Ok(n) => RawCell::Number(n),
            Err(_) => RawCell::Text(trimmed.to_string()),
        }
    }

    /// The cell as the operator typed it, for passthrough display.
    pub fn as_display(&self) -> String {
        match self {
            RawCell::Number(n) => n.to_string(),
            RawCell::Text(s) => s.clone(),
        }
    }

}

impl From<&str> for RawCell {
    fn from(s: &str) -> Self {
        RawCell::Text(s.to_string())
    }
}

impl From<f64> for RawCell {
    fn from(n: f64) -> Self {
        RawCell::Number(n)
    }
}
