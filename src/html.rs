//! HTML rendering of the view tree.
//!
//! Actions are emitted as `data-*` attributes so that a page script can map
//! clicks back onto [`crate::view::ActionKind`]s.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::form::FormField;
use crate::table::{SortDirection, TableId};
use crate::view::{HeaderView, NAME_COLOR, NameCell, NameStyle, RowView, TableView};

pub fn render_name(cell: &NameCell) -> String {
    let name = text(&cell.text);
    match cell.style {
        NameStyle::Plain => format!("<td>{name}</td>"),
        NameStyle::Bold => format!("<td><strong>{name}</strong></td>"),
        NameStyle::BoldItalicColored => {
            format!("<td><strong><em style=\"color: {NAME_COLOR};\">{name}</em></strong></td>")
        }
    }
}

fn render_header(idx: usize, header: &HeaderView) -> String {
    let indicator = match header.sort {
        Some(SortDirection::Ascending) => " \u{25b2}",
        Some(SortDirection::Descending) => " \u{25bc}",
        None => "",
    };
    if header.is_sortable() {
        format!(
            "<th style=\"cursor: pointer;\" data-action=\"sort\" data-column=\"{idx}\">{}{indicator}</th>",
            text(header.label)
        )
    } else {
        format!("<th>{}</th>", text(header.label))
    }
}

fn render_row(row: &RowView) -> String {
    let name = attr(&row.name.text);
    format!(
        concat!(
            "<tr data-name=\"{name}\">",
            "{name_cell}<td>{size}</td><td>{location}</td>",
            "<td><img src=\"{src}\" alt=\"{alt}\" class=\"img-thumbnail animal-image\" ",
            "style=\"width: {width}px; height: {width}px; border: 2px solid #ccc;\" ",
            "data-hover=\"{hover}\" data-action=\"hover\"></td>",
            "<td><i class=\"bi bi-pencil-square text-warning edit-icon\" style=\"cursor: pointer;\" data-action=\"edit\"></i>",
            "<i class=\"bi bi-trash text-danger delete-icon ms-3\" style=\"cursor: pointer;\" data-action=\"delete\"></i></td>",
            "</tr>"
        ),
        name = name,
        name_cell = render_name(&row.name),
        size = text(&row.size),
        location = text(&row.location),
        src = attr(&row.image.src),
        alt = attr(&row.image.alt),
        width = row.image.width,
        hover = row.image.hovered,
    )
}

pub fn render_table(view: &TableView) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "<h2>{}</h2>", text(view.title));
    let _ = writeln!(out, "<table id=\"{}\" class=\"table\">", view.id.selector());
    out.push_str("<thead><tr>");
    for (idx, header) in view.headers.iter().enumerate() {
        out.push_str(&render_header(idx, header));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in view.rows.iter() {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

fn render_form() -> String {
    let mut out = String::from("<form id=\"animalForm\">\n");
    for field in FormField::INPUTS {
        let _ = writeln!(
            out,
            "<label>{label} <input id=\"{id}\" type=\"{kind}\" required></label>",
            label = text(field.label()),
            id = field.element_id(),
            kind = if field == FormField::Size { "number" } else { "text" },
        );
    }
    let _ = writeln!(out, "<select id=\"{}\">", FormField::Table.element_id());
    for id in TableId::ALL {
        let _ = writeln!(
            out,
            "<option value=\"{}\">{}</option>",
            id.selector(),
            text(id.title())
        );
    }
    out.push_str("</select>\n<button type=\"submit\">Add Animal</button>\n</form>\n");
    out
}

pub fn render_page(views: &[TableView]) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Animal Tables</title>\n</head>\n<body>\n",
    );
    out.push_str(&render_form());
    for view in views {
        out.push_str(&render_table(view));
    }
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ColumnSpec, Record};
    use crate::table::RecordTable;
    use crate::view::{ImageSizes, project};

    fn fish() -> RecordTable {
        let mut t = RecordTable::new(
            TableId::HeavyFish,
            vec![ColumnSpec::for_index(1).unwrap()],
            NameStyle::BoldItalicColored,
        );
        t.add(Record::new("Shark", 500, "Ocean", "https://via.placeholder.com/100"))
            .unwrap();
        t
    }

    #[test]
    fn name_styles() {
        let cell = |style| NameCell {
            text: "Lion".into(),
            style,
        };
        assert_eq!(render_name(&cell(NameStyle::Plain)), "<td>Lion</td>");
        assert_eq!(
            render_name(&cell(NameStyle::Bold)),
            "<td><strong>Lion</strong></td>"
        );
        assert_eq!(
            render_name(&cell(NameStyle::BoldItalicColored)),
            "<td><strong><em style=\"color: blue;\">Lion</em></strong></td>"
        );
    }

    #[test]
    fn names_are_escaped() {
        let cell = NameCell {
            text: "<b>Tom & Jerry</b>".into(),
            style: NameStyle::Plain,
        };
        assert_eq!(
            render_name(&cell),
            "<td>&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;</td>"
        );
    }

    #[test]
    fn only_sortable_headers_are_clickable() {
        let html = render_table(&project(&fish(), None, ImageSizes::default()));
        assert!(html.contains("<th>Name</th>"));
        assert!(html.contains(
            "<th style=\"cursor: pointer;\" data-action=\"sort\" data-column=\"1\">Size</th>"
        ));
        assert!(html.contains("<th>Location</th>"));
        assert_eq!(html.matches("data-action=\"sort\"").count(), 1);
    }

    #[test]
    fn image_width_follows_hover() {
        let html = render_table(&project(&fish(), Some("Shark"), ImageSizes::default()));
        assert!(html.contains("width: 150px"));
        let html = render_table(&project(&fish(), None, ImageSizes::default()));
        assert!(html.contains("width: 100px"));
    }

    #[test]
    fn page_contains_form_and_tables() {
        let page = render_page(&[project(&fish(), None, ImageSizes::default())]);
        assert!(page.contains("<form id=\"animalForm\">"));
        assert!(page.contains("<option value=\"dogsTable\">Dogs</option>"));
        assert!(page.contains("<table id=\"bigFishTable\""));
        assert!(page.contains("<em style=\"color: blue;\">Shark</em>"));
    }
}
