use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span, Text},
    widgets::{Block, Cell, Clear, Paragraph, Row, Table, Wrap},
};

use crate::domain::AppConfig;
use crate::form::{AnimalForm, FormField};
use crate::inputter::InputResult;
use crate::model::{Modus, PromptData, UIData};
use crate::table::{SortDirection, TableId};
use crate::view::{HeaderView, NameCell, NameStyle, RowView, TableView};

pub const STATUSLINE_HEIGHT: u16 = 1;
pub const IMAGE_PIXELS_PER_CELL: u16 = 5;
pub const NAME_COLUMN_WIDTH: u16 = 16;
pub const SIZE_COLUMN_WIDTH: u16 = 8;
pub const LOCATION_COLUMN_WIDTH: u16 = 14;
pub const ACTIONS_COLUMN_WIDTH: u16 = 14;

#[derive(Debug)]
pub struct TableUI {
    image_rest_width: u16,
}

impl TableUI {
    pub fn new(cfg: &AppConfig) -> Self {
        Self {
            image_rest_width: cfg.image_sizes.rest,
        }
    }

    pub fn draw(&mut self, uidata: &UIData, frame: &mut Frame) {
        let mut constraints: Vec<Constraint> =
            uidata.tables.iter().map(|_| Constraint::Fill(1)).collect();
        constraints.push(Constraint::Length(STATUSLINE_HEIGHT));
        let areas = Layout::vertical(constraints).split(frame.area());

        for (idx, view) in uidata.tables.iter().enumerate() {
            let selection = (idx == uidata.active_table).then_some(Selection {
                on_header: uidata.on_header,
                row: uidata.selected_row,
                column: uidata.selected_column,
            });
            self.render_table(frame, areas[idx], view, selection);
        }
        self.render_statusline(frame, areas[uidata.tables.len()], uidata);

        match uidata.modus {
            Modus::Table => {}
            Modus::Prompt => {
                if let Some(prompt) = &uidata.prompt {
                    self.render_prompt(frame, prompt, &uidata.cmdinput)
                }
            }
            Modus::Confirm => {
                let message = uidata.confirm_message.clone().unwrap_or_default();
                self.render_popup(frame, " Confirm ", &format!("{message}\n\n[y]es / [n]o"));
            }
            Modus::Alert => {
                let message = uidata.alert_message.clone().unwrap_or_default();
                self.render_popup(frame, " Alert ", &format!("{message}\n\n<Esc> to close"));
            }
            Modus::Popup => self.render_popup(frame, " Help ", &uidata.popup_message),
            Modus::Form => {
                if let Some(form) = &uidata.form {
                    self.render_form(frame, form, &uidata.cmdinput)
                }
            }
        }
    }

    fn image_cells(&self, width: u16) -> u16 {
        std::cmp::max(width / IMAGE_PIXELS_PER_CELL, 3)
    }

    fn render_table(
        &self,
        frame: &mut Frame,
        area: Rect,
        view: &TableView,
        selection: Option<Selection>,
    ) {
        let selected_style = Style::new().add_modifier(Modifier::REVERSED);
        let image_width = view
            .rows
            .iter()
            .map(|r| self.image_cells(r.image.width))
            .max()
            .unwrap_or(self.image_cells(self.image_rest_width));

        let header = Row::new(view.headers.iter().enumerate().map(|(cidx, h)| {
            let cell = Cell::from(header_line(h));
            match selection {
                Some(s) if s.on_header && s.column == cidx => cell.style(selected_style),
                _ => cell,
            }
        }))
        .style(Style::new().fg(Color::Yellow));

        let rows = view.rows.iter().enumerate().map(|(ridx, row)| {
            let cells = row_cells(row, self.image_cells(row.image.width));
            Row::new(cells.into_iter().enumerate().map(|(cidx, cell)| match selection {
                Some(s) if !s.on_header && s.row == ridx && s.column == cidx => {
                    cell.style(selected_style)
                }
                _ => cell,
            }))
        });

        let title_style = if selection.is_some() {
            Style::new().bold().fg(Color::Cyan)
        } else {
            Style::new().bold()
        };
        let block = Block::bordered()
            .title(Line::from(format!(" {} ", view.title)).style(title_style).centered())
            .title_bottom(Line::from(format!(" {} ", view.id.selector())).right_aligned())
            .border_set(if selection.is_some() {
                border::THICK
            } else {
                border::PLAIN
            });

        let widths = [
            Constraint::Length(NAME_COLUMN_WIDTH),
            Constraint::Length(SIZE_COLUMN_WIDTH),
            Constraint::Length(LOCATION_COLUMN_WIDTH),
            Constraint::Length(image_width),
            Constraint::Length(ACTIONS_COLUMN_WIDTH),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1);
        frame.render_widget(table, area);
    }

    fn render_statusline(&self, frame: &mut Frame, area: Rect, uidata: &UIData) {
        let line = Line::from(vec![
            Span::from(format!(" {} ", uidata.status_message)),
            " Help ".into(),
            "<?>".blue().bold(),
            " Quit ".into(),
            "<Q> ".blue().bold(),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_popup(&self, frame: &mut Frame, title: &str, message: &str) {
        let area = popup_area(frame.area(), 60, 50);
        let block = Block::bordered()
            .title(Line::from(title.to_string()).bold().centered())
            .border_set(border::THICK);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(Text::from(message.to_string()))
                .block(block)
                .wrap(Wrap { trim: false }),
            area,
        );
    }

    fn render_prompt(&self, frame: &mut Frame, prompt: &PromptData, input: &InputResult) {
        let area = popup_area(frame.area(), 60, 40);
        let block = Block::bordered()
            .title(Line::from(format!(" {} ", prompt.title)).bold().centered())
            .title_bottom(
                Line::from(" <Enter> blank keeps, <Ctrl+X> clears, <Esc> cancels ").centered(),
            )
            .border_set(border::THICK);
        let text = Text::from(vec![
            Line::from(prompt.message),
            Line::from(vec![
                "current: ".dark_gray(),
                Span::from(prompt.default_value.clone()).dark_gray(),
            ]),
            Line::from(""),
            input_line(input),
        ]);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }

    fn render_form(&self, frame: &mut Frame, form: &AnimalForm, input: &InputResult) {
        let area = popup_area(frame.area(), 60, 50);
        let block = Block::bordered()
            .title(Line::from(" Add Animal ").bold().centered())
            .title_bottom(Line::from(" <Tab> next field, <Enter> add, <Esc> close ").centered())
            .border_set(border::THICK);

        let lines: Vec<Line> = FormField::ALL
            .iter()
            .map(|&field| {
                let label = Span::from(format!("{:>10}: ", field.label())).bold();
                let focused = field == form.focus;
                let mut spans = vec![label];
                match field {
                    FormField::Table => {
                        let title = TableId::from_selector(&form.table)
                            .map(|id| id.title())
                            .unwrap_or("?");
                        let value = format!("< {title} >");
                        spans.push(if focused {
                            Span::from(value).reversed()
                        } else {
                            Span::from(value)
                        });
                    }
                    _ if focused => spans.extend(input_line(input).spans),
                    _ => spans.push(Span::from(form.value(field).to_string())),
                }
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[derive(Debug, Clone, Copy)]
struct Selection {
    on_header: bool,
    row: usize,
    column: usize,
}

fn header_line(header: &HeaderView) -> Line<'static> {
    let indicator = match header.sort {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => "",
    };
    let label = Span::from(format!("{}{indicator}", header.label));
    // Sortable headers are underlined, the rest is inert.
    if header.is_sortable() {
        Line::from(label.underlined().bold())
    } else {
        Line::from(label)
    }
}

pub fn name_span(cell: &NameCell) -> Span<'static> {
    let span = Span::from(cell.text.clone());
    match cell.style {
        NameStyle::Plain => span,
        NameStyle::Bold => span.bold(),
        NameStyle::BoldItalicColored => span.bold().italic().fg(Color::Blue),
    }
}

fn row_cells(row: &RowView, image_width: u16) -> Vec<Cell<'static>> {
    let image = truncate(&row.image.src, image_width as usize);
    let image = if row.image.hovered {
        Span::from(image).bold().fg(Color::Green)
    } else {
        Span::from(image).dark_gray()
    };
    vec![
        Cell::from(name_span(&row.name)),
        Cell::from(row.size.clone()),
        Cell::from(row.location.clone()),
        Cell::from(image),
        Cell::from(Line::from(vec![
            "[e]dit".yellow(),
            " ".into(),
            "[d]el".red(),
        ])),
    ]
}

fn input_line(input: &InputResult) -> Line<'static> {
    let chars: Vec<char> = input.input.chars().collect();
    let pos = std::cmp::min(input.curser_pos, chars.len());
    let before: String = chars[..pos].iter().collect();
    let at: String = chars.get(pos).map(|c| c.to_string()).unwrap_or(" ".into());
    let after: String = chars.iter().skip(pos + 1).collect();
    Line::from(vec![
        Span::from(before),
        Span::from(at).reversed(),
        Span::from(after),
    ])
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    if width < 3 {
        return String::new();
    }
    let mut reduced: String = s.chars().take(width - 3).collect();
    reduced.push_str("...");
    reduced
}

fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("https://via.placeholder.com/100", 10), "https:/...");
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 2), "");
    }

    #[test]
    fn name_span_styles() {
        let cell = NameCell {
            text: "Shark".into(),
            style: NameStyle::BoldItalicColored,
        };
        let span = name_span(&cell);
        assert_eq!(span.style.fg, Some(Color::Blue));
        assert!(span.style.add_modifier.contains(Modifier::BOLD | Modifier::ITALIC));
    }
}
