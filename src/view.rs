//! Pure projection of a [`RecordTable`] into a declarative view tree.
//!
//! Nothing in here mutates state. Interactions are described as [`Action`]
//! values which the model dispatches when the user triggers them.

use crate::record::{Attribute, Record};
use crate::table::{RecordTable, SortDirection, TableId};

pub const ACTIONS_HEADER: &str = "Actions";
pub const NAME_COLOR: &str = "blue";

/// How the name cell of a table is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    Plain,
    Bold,
    BoldItalicColored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSizes {
    pub rest: u16,
    pub hover: u16,
}

impl Default for ImageSizes {
    fn default() -> Self {
        Self {
            rest: 100,
            hover: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    Sort(usize),
    Edit(String),
    Delete(String),
    HoverImage(String),
    LeaveImage(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub table: TableId,
    pub kind: ActionKind,
}

impl Action {
    fn new(table: TableId, kind: ActionKind) -> Self {
        Self { table, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub label: &'static str,
    pub sort: Option<SortDirection>,
    /// Only present on sortable columns.
    pub on_click: Option<Action>,
}

impl HeaderView {
    pub fn is_sortable(&self) -> bool {
        self.on_click.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCell {
    pub text: String,
    pub style: NameStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
    pub width: u16,
    pub hovered: bool,
    pub on_enter: Action,
    pub on_leave: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub name: NameCell,
    pub size: String,
    pub location: String,
    pub image: ImageView,
    pub on_edit: Action,
    pub on_delete: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub id: TableId,
    pub title: &'static str,
    pub headers: Vec<HeaderView>,
    pub rows: Vec<RowView>,
}

impl TableView {
    pub fn row(&self, name: &str) -> Option<&RowView> {
        self.rows.iter().find(|r| r.name.text == name)
    }
}

/// Builds the view of `table`. `hovered` names the record whose image is
/// currently under the pointer.
pub fn project(table: &RecordTable, hovered: Option<&str>, sizes: ImageSizes) -> TableView {
    let id = table.id();
    let sort = table.sort_state();

    let mut headers: Vec<HeaderView> = Attribute::ALL
        .iter()
        .enumerate()
        .map(|(idx, attribute)| HeaderView {
            label: attribute.label(),
            sort: sort.filter(|s| s.column == idx).map(|s| s.direction),
            on_click: table
                .is_sortable(idx)
                .then(|| Action::new(id, ActionKind::Sort(idx))),
        })
        .collect();
    headers.push(HeaderView {
        label: ACTIONS_HEADER,
        sort: None,
        on_click: None,
    });

    let rows = table
        .records()
        .iter()
        .map(|r| project_row(id, r, table.name_style(), hovered == Some(r.name.as_str()), sizes))
        .collect();

    TableView {
        id,
        title: id.title(),
        headers,
        rows,
    }
}

fn project_row(
    id: TableId,
    record: &Record,
    style: NameStyle,
    hovered: bool,
    sizes: ImageSizes,
) -> RowView {
    let name = record.name.clone();
    RowView {
        name: NameCell {
            text: name.clone(),
            style,
        },
        size: record.size.to_string(),
        location: record.location.clone(),
        image: ImageView {
            src: record.image.clone(),
            alt: name.clone(),
            width: if hovered { sizes.hover } else { sizes.rest },
            hovered,
            on_enter: Action::new(id, ActionKind::HoverImage(name.clone())),
            on_leave: Action::new(id, ActionKind::LeaveImage(name.clone())),
        },
        on_edit: Action::new(id, ActionKind::Edit(name.clone())),
        on_delete: Action::new(id, ActionKind::Delete(name)),
    }
}
