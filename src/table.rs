use std::cmp::Ordering;
use std::fmt;

use deunicode::deunicode;
use tracing::{debug, trace};
use unicase::UniCase;

use crate::record::{ColumnSpec, CompareKind, Record};
use crate::view::NameStyle;

/// The configured table instances. The selector is the value used by the add
/// form to route a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    HeavyCats,
    Dogs,
    HeavyFish,
}

impl TableId {
    pub const ALL: [TableId; 3] = [TableId::HeavyCats, TableId::Dogs, TableId::HeavyFish];

    pub fn selector(&self) -> &'static str {
        match self {
            TableId::HeavyCats => "bigCatsTable",
            TableId::Dogs => "dogsTable",
            TableId::HeavyFish => "bigFishTable",
        }
    }

    pub fn from_selector(selector: &str) -> Option<Self> {
        TableId::ALL.into_iter().find(|id| id.selector() == selector)
    }

    pub fn title(&self) -> &'static str {
        match self {
            TableId::HeavyCats => "Heavy Cats",
            TableId::Dogs => "Dogs",
            TableId::HeavyFish => "Heavy Fish",
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    EmptyName,
    DuplicateName(String),
    ColumnNotSortable(usize),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::EmptyName => write!(f, "Animal needs a name!"),
            TableError::DuplicateName(_) => write!(f, "Animal already exists!"),
            TableError::ColumnNotSortable(idx) => write!(f, "Column {idx} is not sortable"),
        }
    }
}

impl std::error::Error for TableError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: usize,
    pub direction: SortDirection,
}

#[derive(Debug, Clone)]
pub struct RecordTable {
    id: TableId,
    records: Vec<Record>,
    sortable: Vec<ColumnSpec>,
    name_style: NameStyle,
    sort: Option<SortState>,
    generation: u64,
}

impl RecordTable {
    pub fn new(id: TableId, sortable: Vec<ColumnSpec>, name_style: NameStyle) -> Self {
        Self {
            id,
            records: Vec::new(),
            sortable,
            name_style,
            sort: None,
            generation: 0,
        }
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn name_style(&self) -> NameStyle {
        self.name_style
    }

    pub fn sort_state(&self) -> Option<SortState> {
        self.sort
    }

    /// Number of re-renders this table requested. Rejected operations leave it untouched.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn sortable_column(&self, column: usize) -> Option<&ColumnSpec> {
        self.sortable.iter().find(|c| c.index == column)
    }

    pub fn is_sortable(&self, column: usize) -> bool {
        self.sortable_column(column).is_some()
    }

    pub fn add(&mut self, record: Record) -> Result<(), TableError> {
        if record.name.is_empty() {
            debug!("{}: rejected record without a name", self.id);
            return Err(TableError::EmptyName);
        }
        if self.records.iter().any(|r| r.name == record.name) {
            debug!("{}: rejected duplicate name {:?}", self.id, record.name);
            return Err(TableError::DuplicateName(record.name));
        }
        trace!("{}: add {:?}", self.id, record);
        self.records.push(record);
        self.rendered();
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.name != name);
        let removed = before - self.records.len();
        trace!("{}: removed {removed} record(s) named {name:?}", self.id);
        self.rendered();
        removed
    }

    /// Replaces the record named `old_name` in place. The new name is not
    /// checked against the other records.
    pub fn update(&mut self, old_name: &str, record: Record) -> bool {
        match self.records.iter().position(|r| r.name == old_name) {
            Some(idx) => {
                trace!("{}: update {old_name:?} => {:?}", self.id, record);
                self.records[idx] = record;
                self.rendered();
                true
            }
            None => {
                trace!("{}: no record named {old_name:?} to update", self.id);
                false
            }
        }
    }

    pub fn sort(&mut self, column: usize) -> Result<SortDirection, TableError> {
        let spec = *self
            .sortable_column(column)
            .ok_or(TableError::ColumnNotSortable(column))?;

        let direction = match self.sort {
            Some(SortState {
                column: c,
                direction: SortDirection::Ascending,
            }) if c == column => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };

        // Values that are not a number go last regardless of direction.
        self.records.sort_by(|a, b| {
            let (x, y) = (a.get(spec.attribute), b.get(spec.attribute));
            match spec.kind {
                CompareKind::Numeric => match (x.as_number(), y.as_number()) {
                    (Some(x), Some(y)) => direction.apply(x.cmp(&y)),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                },
                CompareKind::Textual => direction.apply(locale_cmp(&x.as_text(), &y.as_text())),
            }
        });

        debug!(
            "{}: sorted by {} {:?}",
            self.id,
            spec.attribute.label(),
            direction
        );
        self.sort = Some(SortState { column, direction });
        self.rendered();
        Ok(direction)
    }

    fn rendered(&mut self) {
        self.generation += 1;
    }
}

/// Collation close to a user locale: accents are folded first ("Österreich"
/// sorts with "O"), then case is ignored. Exact comparison breaks the
/// remaining ties so the order stays total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let (fa, fb) = (deunicode(a), deunicode(b));
    UniCase::new(fa.as_str())
        .cmp(&UniCase::new(fb.as_str()))
        .then_with(|| UniCase::new(a).cmp(&UniCase::new(b)))
        .then_with(|| a.cmp(b))
}
