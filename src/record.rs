use std::borrow::Cow;
use std::fmt;

/// Size of an animal. Parsing is best effort, input without leading digits
/// yields `NaN` which is stored as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    Value(i64),
    NaN,
}

impl Size {
    /// Integer parsing that mirrors `parseInt(s, 10)`: leading whitespace is
    /// skipped, an optional sign is accepted and parsing stops at the first
    /// non digit character.
    pub fn parse(input: &str) -> Self {
        let s = input.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let end = digits
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(idx, _)| idx)
            .unwrap_or(digits.len());
        if end == 0 {
            return Size::NaN;
        }

        // Too many digits saturate instead of wrapping around.
        let value = digits[..end].bytes().fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });
        Size::Value(if negative { -value } else { value })
    }

    pub fn value(&self) -> Option<i64> {
        match self {
            Size::Value(v) => Some(*v),
            Size::NaN => None,
        }
    }
}

impl From<i64> for Size {
    fn from(value: i64) -> Self {
        Size::Value(value)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Value(v) => write!(f, "{v}"),
            Size::NaN => write!(f, "NaN"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub size: Size,
    pub location: String,
    pub image: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        size: impl Into<Size>,
        location: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            location: location.into(),
            image: image.into(),
        }
    }

    pub fn get(&self, attribute: Attribute) -> CellValue<'_> {
        match attribute {
            Attribute::Name => CellValue::Text(&self.name),
            Attribute::Size => CellValue::Number(self.size),
            Attribute::Location => CellValue::Text(&self.location),
            Attribute::Image => CellValue::Text(&self.image),
        }
    }

    /// The record as a single CSV line, quoting cells that need it.
    pub fn to_csv_line(&self) -> String {
        [
            self.name.clone(),
            self.size.to_string(),
            self.location.clone(),
            self.image.clone(),
        ]
        .iter()
        .map(|c| wrap_csv_cell(c))
        .collect::<Vec<String>>()
        .join(",")
    }
}

fn wrap_csv_cell(c: &str) -> String {
    let needs_escaping = c.contains('"');
    let needs_wrapping = c.chars().any(|c| c == ' ' || c == '\t' || c == ',');
    let mut out = String::from(c);

    if needs_escaping {
        out = out.replace('"', "\"\"");
    }
    if needs_wrapping || needs_escaping {
        out = format!("\"{out}\"");
    }
    out
}

/// Record attributes in definition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Name,
    Size,
    Location,
    Image,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Name,
        Attribute::Size,
        Attribute::Location,
        Attribute::Image,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Name => "Name",
            Attribute::Size => "Size",
            Attribute::Location => "Location",
            Attribute::Image => "Image",
        }
    }

    pub fn kind(&self) -> CompareKind {
        match self {
            Attribute::Size => CompareKind::Numeric,
            _ => CompareKind::Textual,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareKind {
    Textual,
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Number(Size),
}

impl CellValue<'_> {
    /// Numeric reading of the cell, text is parsed best effort.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            CellValue::Number(size) => size.value(),
            CellValue::Text(text) => Size::parse(text).value(),
        }
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Text(text) => Cow::Borrowed(*text),
            CellValue::Number(size) => Cow::Owned(size.to_string()),
        }
    }
}

/// Maps a visible column index to the attribute it shows and how it compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub index: usize,
    pub attribute: Attribute,
    pub kind: CompareKind,
}

impl ColumnSpec {
    pub fn new(index: usize, attribute: Attribute) -> Self {
        Self {
            index,
            attribute,
            kind: attribute.kind(),
        }
    }

    /// Column layout shared by all animal tables. The trailing actions column
    /// carries no attribute.
    pub fn for_index(index: usize) -> Option<Self> {
        Attribute::ALL
            .get(index)
            .map(|&attribute| ColumnSpec::new(index, attribute))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_size_like_parse_int() {
        assert_eq!(Size::parse("250"), Size::Value(250));
        assert_eq!(Size::parse("  42kg"), Size::Value(42));
        assert_eq!(Size::parse("-7"), Size::Value(-7));
        assert_eq!(Size::parse("+3"), Size::Value(3));
        assert_eq!(Size::parse("12.9"), Size::Value(12));
        assert_eq!(Size::parse(""), Size::NaN);
        assert_eq!(Size::parse("heavy"), Size::NaN);
        assert_eq!(Size::parse("-"), Size::NaN);
    }

    #[test]
    fn nan_displays_as_nan() {
        assert_eq!(Size::NaN.to_string(), "NaN");
        assert_eq!(Size::Value(50).to_string(), "50");
    }

    #[test]
    fn column_specs_follow_definition_order() {
        let spec = ColumnSpec::for_index(1).unwrap();
        assert_eq!(spec.attribute, Attribute::Size);
        assert_eq!(spec.kind, CompareKind::Numeric);
        assert_eq!(
            ColumnSpec::for_index(2).unwrap().kind,
            CompareKind::Textual
        );
        assert!(ColumnSpec::for_index(4).is_none());
    }

    #[test]
    fn cell_values_read_as_either_kind() {
        assert_eq!(CellValue::Text("42 kg").as_number(), Some(42));
        assert_eq!(CellValue::Text("Ocean").as_number(), None);
        assert_eq!(CellValue::Number(Size::Value(7)).as_text(), "7");
        assert_eq!(CellValue::Number(Size::NaN).as_number(), None);
    }

    #[test]
    fn csv_line_quotes_cells() {
        let r = Record::new("Great \"White\"", 500, "Pacific Ocean", "img.png");
        assert_eq!(
            r.to_csv_line(),
            "\"Great \"\"White\"\"\",500,\"Pacific Ocean\",img.png"
        );
    }
}
