use arboard::Clipboard;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;
use tracing::{debug, info, trace, warn};

use crate::domain::{AppConfig, AppError, HELP_TEXT, Message};
use crate::edit::{EditSession, EditStep, FieldAnswer};
use crate::form::{AnimalForm, FormField};
use crate::inputter::{InputResult, Inputter};
use crate::record::{ColumnSpec, Record};
use crate::table::{RecordTable, TableError, TableId};
use crate::view::{Action, ActionKind, NameStyle, RowView, TableView, project};

pub const SEED_IMAGE: &str = "https://via.placeholder.com/100";
pub const IMAGE_COLUMN: usize = 3;
pub const ACTIONS_COLUMN: usize = 4;

#[derive(Debug, PartialEq)]
pub enum Status {
    Ready,
    Quitting,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Modus {
    Table,
    Prompt,
    Confirm,
    Alert,
    Form,
    Popup,
}

/// Everything the ui needs to draw one frame.
pub struct UIData {
    pub tables: Vec<TableView>,
    pub active_table: usize,
    pub on_header: bool,
    pub selected_row: usize,
    pub selected_column: usize,
    pub modus: Modus,
    pub prompt: Option<PromptData>,
    pub confirm_message: Option<String>,
    pub alert_message: Option<String>,
    pub popup_message: String,
    pub form: Option<AnimalForm>,
    pub cmdinput: InputResult,
    pub status_message: String,
    pub last_status_message_update: Instant,
}

pub struct PromptData {
    pub title: String,
    pub message: &'static str,
    pub default_value: String,
}

pub struct Model {
    config: AppConfig,
    pub status: Status,
    modus: Modus,
    tables: Vec<RecordTable>,
    active_table: usize,
    on_header: bool,
    curser_row: usize,
    curser_column: usize,
    hovered: Option<(TableId, String)>,
    form: AnimalForm,
    input: Inputter,
    last_input: InputResult,
    edit: Option<EditSession>,
    pending_delete: Option<(TableId, String)>,
    alert_message: Option<String>,
    clipboard: Option<Clipboard>,
    status_message: String,
    last_status_message_update: Instant,
}

fn columns(indices: &[usize]) -> Vec<ColumnSpec> {
    indices
        .iter()
        .filter_map(|&idx| ColumnSpec::for_index(idx))
        .collect()
}

impl Model {
    pub fn init(config: &AppConfig) -> Result<Self, AppError> {
        let mut heavy_cats = RecordTable::new(
            TableId::HeavyCats,
            columns(&[0, 1, 2]),
            NameStyle::Plain,
        );
        let mut dogs = RecordTable::new(TableId::Dogs, columns(&[0, 2]), NameStyle::Bold);
        let mut heavy_fish = RecordTable::new(
            TableId::HeavyFish,
            columns(&[1]),
            NameStyle::BoldItalicColored,
        );

        heavy_cats.add(Record::new("Lion", 250, "Africa", SEED_IMAGE))?;
        dogs.add(Record::new("Bulldog", 50, "USA", SEED_IMAGE))?;
        heavy_fish.add(Record::new("Shark", 500, "Ocean", SEED_IMAGE))?;

        // The clipboard is optional, e.g. there is none on a headless system.
        let clipboard = match Clipboard::new() {
            Ok(c) => Some(c),
            Err(e) => {
                warn!("No clipboard available: {e:?}");
                None
            }
        };

        Ok(Self {
            config: config.clone(),
            status: Status::Ready,
            modus: Modus::Table,
            tables: vec![heavy_cats, dogs, heavy_fish],
            active_table: 0,
            on_header: false,
            curser_row: 0,
            curser_column: 0,
            hovered: None,
            form: AnimalForm::default(),
            input: Inputter::default(),
            last_input: InputResult::default(),
            edit: None,
            pending_delete: None,
            alert_message: None,
            clipboard,
            status_message: "Started animal tables!".to_string(),
            last_status_message_update: Instant::now(),
        })
    }

    pub fn table(&self, id: TableId) -> Option<&RecordTable> {
        self.tables.iter().find(|t| t.id() == id)
    }

    fn table_mut(&mut self, id: TableId) -> Option<&mut RecordTable> {
        self.tables.iter_mut().find(|t| t.id() == id)
    }

    pub fn modus(&self) -> Modus {
        self.modus
    }

    pub fn alert_message(&self) -> Option<&str> {
        self.alert_message.as_deref()
    }

    pub fn form(&self) -> &AnimalForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AnimalForm {
        &mut self.form
    }

    pub fn hovered(&self) -> Option<(TableId, &str)> {
        self.hovered.as_ref().map(|(id, name)| (*id, name.as_str()))
    }

    pub fn raw_keyevents(&self) -> bool {
        matches!(self.modus, Modus::Prompt | Modus::Form)
    }

    pub fn quit(&mut self) {
        self.status = Status::Quitting;
    }

    fn project_table(&self, table: &RecordTable) -> TableView {
        let hovered = self
            .hovered
            .as_ref()
            .filter(|(id, _)| *id == table.id())
            .map(|(_, name)| name.as_str());
        project(table, hovered, self.config.image_sizes)
    }

    pub fn views(&self) -> Vec<TableView> {
        self.tables.iter().map(|t| self.project_table(t)).collect()
    }

    fn active_view(&self) -> Option<TableView> {
        self.tables
            .get(self.active_table)
            .map(|t| self.project_table(t))
    }

    pub fn get_uidata(&self) -> UIData {
        let prompt = self.edit.as_ref().map(|session| PromptData {
            title: format!("Edit {}", session.original_name()),
            message: session.prompt(),
            default_value: session.default_value(),
        });
        UIData {
            tables: self.views(),
            active_table: self.active_table,
            on_header: self.on_header,
            selected_row: self.curser_row,
            selected_column: self.curser_column,
            modus: self.modus,
            prompt,
            confirm_message: self
                .pending_delete
                .as_ref()
                .map(|(_, name)| format!("Are you sure you want to delete {name}?")),
            alert_message: self.alert_message.clone(),
            popup_message: HELP_TEXT.to_string(),
            form: (self.modus == Modus::Form).then(|| self.form.clone()),
            cmdinput: self.last_input.clone(),
            status_message: self.status_message.clone(),
            last_status_message_update: self.last_status_message_update,
        }
    }

    fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.last_status_message_update = Instant::now();
    }

    fn switch_modus(&mut self, modus: Modus) {
        trace!("Modus {:?} => {:?}", self.modus, modus);
        self.modus = modus;
    }

    pub fn update(&mut self, message: Option<Message>) -> Result<(), AppError> {
        if let Some(msg) = message {
            match self.modus {
                Modus::Table => match msg {
                    Message::Quit => self.quit(),
                    Message::MoveUp => self.move_selection_up(),
                    Message::MoveDown => self.move_selection_down(),
                    Message::MoveLeft => self.move_selection_left(),
                    Message::MoveRight => self.move_selection_right(),
                    Message::NextTable => self.select_table(1),
                    Message::PreviousTable => self.select_table(-1),
                    Message::Sort => self.sort_current_column(),
                    Message::Enter => self.enter(),
                    Message::Edit => self.trigger_row_action(|row| row.on_edit.clone()),
                    Message::Delete => self.trigger_row_action(|row| row.on_delete.clone()),
                    Message::Add => self.open_form(),
                    Message::CopyRecord => self.copy_record(),
                    Message::Help => self.switch_modus(Modus::Popup),
                    _ => (),
                },
                Modus::Confirm => match msg {
                    Message::Quit => self.quit(),
                    Message::Confirm => self.confirm_delete(true),
                    Message::Deny | Message::Exit => self.confirm_delete(false),
                    _ => (),
                },
                Modus::Alert => match msg {
                    Message::Quit => self.quit(),
                    Message::Exit | Message::Enter | Message::Confirm => self.close_alert(),
                    _ => (),
                },
                Modus::Popup => match msg {
                    Message::Quit => self.quit(),
                    Message::Exit | Message::Help => self.switch_modus(Modus::Table),
                    _ => (),
                },
                Modus::Prompt => {
                    if let Message::RawKey(key) = msg {
                        self.prompt_input(key)
                    }
                }
                Modus::Form => {
                    if let Message::RawKey(key) = msg {
                        self.form_input(key)
                    }
                }
            }
        }
        Ok(())
    }

    // -------------------- Actions ---------------------- //

    /// Applies an interaction produced by the view.
    pub fn dispatch(&mut self, action: Action) {
        debug!("Dispatch {:?}", action);
        let Action { table, kind } = action;
        match kind {
            ActionKind::Sort(column) => {
                let result = match self.table_mut(table) {
                    Some(t) => t.sort(column),
                    None => return,
                };
                match result {
                    Ok(direction) => {
                        self.set_status_message(format!("Sorted {table} {direction:?}"))
                    }
                    // Inert header
                    Err(e) => trace!("{e}"),
                }
            }
            ActionKind::Edit(name) => self.start_edit(table, &name),
            ActionKind::Delete(name) => {
                if self.table(table).and_then(|t| t.record(&name)).is_some() {
                    self.pending_delete = Some((table, name));
                    self.switch_modus(Modus::Confirm);
                }
            }
            ActionKind::HoverImage(name) => self.hovered = Some((table, name)),
            ActionKind::LeaveImage(name) => {
                if self.hovered.as_ref() == Some(&(table, name)) {
                    self.hovered = None;
                }
            }
        }
    }

    /// Adds a record, surfacing rejections as an alert.
    pub fn add_record(&mut self, id: TableId, record: Record) {
        let result = match self.table_mut(id) {
            Some(t) => t.add(record),
            None => return,
        };
        match result {
            Ok(()) => self.set_status_message(format!("Added animal to {}", id.title())),
            Err(e @ (TableError::DuplicateName(_) | TableError::EmptyName)) => self.alert(e),
            Err(e) => warn!("Unexpected error adding to {id}: {e}"),
        }
    }

    pub fn submit_form(&mut self) {
        let submission = self.form.submit();
        match submission.target {
            Some(id) => self.add_record(id, submission.record),
            None => debug!("Ignoring submission for unknown table"),
        }
    }

    fn alert(&mut self, error: TableError) {
        info!("Alert: {error}");
        self.alert_message = Some(error.to_string());
        self.switch_modus(Modus::Alert);
    }

    fn close_alert(&mut self) {
        self.alert_message = None;
        self.switch_modus(Modus::Table);
    }

    fn start_edit(&mut self, id: TableId, name: &str) {
        let Some(record) = self.table(id).and_then(|t| t.record(name)).cloned() else {
            return;
        };
        self.edit = Some(EditSession::new(id, record));
        self.input.clear();
        self.last_input = self.input.get();
        self.switch_modus(Modus::Prompt);
    }

    fn prompt_input(&mut self, key: KeyEvent) {
        self.last_input = self.input.read(key);
        if !self.last_input.finished {
            return;
        }

        let result = std::mem::take(&mut self.last_input);
        self.input.clear();
        if result.canceled {
            trace!("Edit canceled");
            self.edit = None;
            self.switch_modus(Modus::Table);
            return;
        }

        let answer = if result.cleared {
            FieldAnswer::Clear
        } else if result.input.is_empty() {
            FieldAnswer::Keep
        } else {
            FieldAnswer::Replace(result.input)
        };

        let Some(session) = self.edit.as_mut() else {
            self.switch_modus(Modus::Table);
            return;
        };
        if let EditStep::Done(record) = session.answer(answer) {
            let id = session.table();
            let old_name = session.original_name().to_string();
            self.edit = None;
            self.switch_modus(Modus::Table);
            if let Some(t) = self.table_mut(id)
                && t.update(&old_name, record)
            {
                self.set_status_message(format!("Updated {old_name}"));
            }
            self.clamp_selection();
        }
    }

    fn confirm_delete(&mut self, confirmed: bool) {
        if let Some((id, name)) = self.pending_delete.take()
            && confirmed
        {
            if let Some(t) = self.table_mut(id) {
                t.remove(&name);
            }
            if self.hovered.as_ref() == Some(&(id, name.clone())) {
                self.hovered = None;
            }
            self.set_status_message(format!("Deleted {name}"));
        }
        self.switch_modus(Modus::Table);
        self.clamp_selection();
    }

    // -------------------- Form ---------------------- //

    fn open_form(&mut self) {
        self.form.focus = FormField::Name;
        self.load_form_field();
        self.switch_modus(Modus::Form);
    }

    fn load_form_field(&mut self) {
        self.input.clear();
        if self.form.focus != FormField::Table {
            let value = self.form.value(self.form.focus).to_string();
            self.input.set(&value);
        }
        self.last_input = self.input.get();
    }

    fn form_input(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Tab, _) | (KeyCode::Down, _) => {
                self.form.focus_next();
                self.load_form_field();
            }
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
                self.form.focus_previous();
                self.load_form_field();
            }
            (KeyCode::Esc, _) => {
                self.input.clear();
                self.switch_modus(Modus::Table);
            }
            (KeyCode::Enter, KeyModifiers::NONE) => {
                self.input.clear();
                self.switch_modus(Modus::Table);
                self.submit_form();
            }
            (KeyCode::Left, _) if self.form.focus == FormField::Table => {
                self.form.cycle_table(false)
            }
            (KeyCode::Right, _) if self.form.focus == FormField::Table => {
                self.form.cycle_table(true)
            }
            _ if self.form.focus == FormField::Table => {}
            _ => {
                self.last_input = self.input.read(key);
                let value = self.last_input.input.clone();
                self.form.set(self.form.focus, value);
            }
        }
    }

    // -------------------- Selection ---------------------- //

    fn active_len(&self) -> usize {
        self.tables
            .get(self.active_table)
            .map(|t| t.len())
            .unwrap_or(0)
    }

    fn enter(&mut self) {
        if self.on_header {
            self.sort_current_column();
        } else {
            self.trigger_row_action(|row| row.on_edit.clone());
        }
    }

    fn sort_current_column(&mut self) {
        let action = self
            .active_view()
            .and_then(|v| v.headers.get(self.curser_column).cloned())
            .and_then(|h| h.on_click);
        match action {
            Some(action) => self.dispatch(action),
            None => self.set_status_message("Column is not sortable"),
        }
    }

    fn trigger_row_action(&mut self, action: impl Fn(&RowView) -> Action) {
        if self.on_header {
            return;
        }
        let action = self
            .active_view()
            .and_then(|v| v.rows.get(self.curser_row).map(&action));
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    fn copy_record(&mut self) {
        let line = match self
            .tables
            .get(self.active_table)
            .and_then(|t| t.records().get(self.curser_row))
        {
            Some(record) if !self.on_header => record.to_csv_line(),
            _ => return,
        };
        trace!("Record content: {}", line);

        match self.clipboard.as_mut().map(|c| c.set_text(line)) {
            Some(Ok(_)) => self.set_status_message("Copied animal to clipboard."),
            Some(Err(e)) => warn!("Error copying to clipboard: {:?}", e),
            None => self.set_status_message("No clipboard available."),
        }
    }

    fn select_table(&mut self, step: isize) {
        let n = self.tables.len() as isize;
        self.active_table = (self.active_table as isize + step).rem_euclid(n) as usize;
        self.on_header = false;
        self.curser_row = 0;
        self.sync_hover();
    }

    fn move_selection_up(&mut self) {
        if self.curser_row > 0 && !self.on_header {
            self.curser_row -= 1;
        } else {
            self.on_header = true;
        }
        self.sync_hover();
    }

    fn move_selection_down(&mut self) {
        if self.on_header {
            self.on_header = self.active_len() == 0;
        } else if self.curser_row + 1 < self.active_len() {
            self.curser_row += 1;
        }
        self.sync_hover();
    }

    fn move_selection_left(&mut self) {
        self.curser_column = self.curser_column.saturating_sub(1);
        self.sync_hover();
    }

    fn move_selection_right(&mut self) {
        if self.curser_column < ACTIONS_COLUMN {
            self.curser_column += 1;
        }
        self.sync_hover();
    }

    fn clamp_selection(&mut self) {
        let len = self.active_len();
        if len == 0 {
            self.curser_row = 0;
            self.on_header = true;
        } else if self.curser_row >= len {
            self.curser_row = len - 1;
        }
        self.sync_hover();
    }

    /// The cursor acts as the pointer: resting on an image cell hovers it.
    /// Enter and leave go through the actions the view projected for the image.
    fn sync_hover(&mut self) {
        let enter = match self.active_view() {
            Some(view) if !self.on_header && self.curser_column == IMAGE_COLUMN => view
                .rows
                .get(self.curser_row)
                .map(|row| row.image.on_enter.clone()),
            _ => None,
        };
        let target = enter.as_ref().and_then(|action| match &action.kind {
            ActionKind::HoverImage(name) => Some((action.table, name.clone())),
            _ => None,
        });
        if self.hovered == target {
            return;
        }

        if let Some((id, name)) = self.hovered.clone() {
            let leave = self
                .table(id)
                .map(|t| self.project_table(t))
                .and_then(|view| view.row(&name).map(|row| row.image.on_leave.clone()));
            match leave {
                Some(action) => self.dispatch(action),
                // The hovered record is gone.
                None => self.hovered = None,
            }
        }
        if let Some(action) = enter {
            self.dispatch(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Size;
    use ratatui::crossterm::event::KeyEvent;

    fn model() -> Model {
        Model::init(&AppConfig::default()).unwrap()
    }

    fn key(model: &mut Model, code: KeyCode) {
        model
            .update(Some(Message::RawKey(KeyEvent::new(code, KeyModifiers::NONE))))
            .unwrap();
    }

    fn type_text(model: &mut Model, text: &str) {
        for c in text.chars() {
            key(model, KeyCode::Char(c));
        }
    }

    fn send(model: &mut Model, msg: Message) {
        model.update(Some(msg)).unwrap();
    }

    fn names(model: &Model, id: TableId) -> Vec<String> {
        model
            .table(id)
            .unwrap()
            .records()
            .iter()
            .map(|r| r.name.clone())
            .collect()
    }

    #[test]
    fn seeds_one_record_per_table() {
        let m = model();
        assert_eq!(names(&m, TableId::HeavyCats), vec!["Lion"]);
        assert_eq!(names(&m, TableId::Dogs), vec!["Bulldog"]);
        assert_eq!(names(&m, TableId::HeavyFish), vec!["Shark"]);
        assert_eq!(m.table(TableId::HeavyFish).unwrap().name_style(), NameStyle::BoldItalicColored);
    }

    #[test]
    fn duplicate_add_raises_alert() {
        let mut m = model();
        m.add_record(TableId::Dogs, Record::new("Bulldog", 1, "UK", SEED_IMAGE));
        assert_eq!(m.modus(), Modus::Alert);
        assert_eq!(m.alert_message(), Some("Animal already exists!"));
        assert_eq!(names(&m, TableId::Dogs), vec!["Bulldog"]);

        send(&mut m, Message::Exit);
        assert_eq!(m.modus(), Modus::Table);
        assert_eq!(m.alert_message(), None);
    }

    #[test]
    fn form_routes_by_selector() {
        let mut m = model();
        send(&mut m, Message::Add);
        assert!(m.raw_keyevents());
        type_text(&mut m, " Tuna ");
        key(&mut m, KeyCode::Tab);
        type_text(&mut m, "200");
        key(&mut m, KeyCode::Tab);
        type_text(&mut m, "Atlantic");
        key(&mut m, KeyCode::Tab);
        type_text(&mut m, "tuna.png");
        key(&mut m, KeyCode::Tab);
        key(&mut m, KeyCode::Left);
        key(&mut m, KeyCode::Enter);

        assert_eq!(m.modus(), Modus::Table);
        assert_eq!(names(&m, TableId::HeavyFish), vec!["Shark", "Tuna"]);
        let tuna = m.table(TableId::HeavyFish).unwrap().record("Tuna").unwrap();
        assert_eq!(tuna.size, Size::Value(200));
        assert_eq!(m.form(), &AnimalForm::default());
    }

    #[test]
    fn unknown_selector_is_ignored() {
        let mut m = model();
        m.form_mut().set(FormField::Name, "Ghost");
        m.form_mut().set(FormField::Table, "ghostTable");
        m.submit_form();
        assert_eq!(m.modus(), Modus::Table);
        for id in TableId::ALL {
            assert_eq!(m.table(id).unwrap().len(), 1);
        }
        assert_eq!(m.form().name, "");
    }

    #[test]
    fn edit_prompts_and_updates() {
        let mut m = model();
        send(&mut m, Message::Edit);
        assert_eq!(m.modus(), Modus::Prompt);
        let ui = m.get_uidata();
        assert_eq!(ui.prompt.as_ref().unwrap().message, "Enter new name:");
        assert_eq!(ui.prompt.unwrap().default_value, "Lion");

        type_text(&mut m, "Lioness");
        key(&mut m, KeyCode::Enter);
        type_text(&mut m, "abc");
        key(&mut m, KeyCode::Enter);
        key(&mut m, KeyCode::Enter);
        m.update(Some(Message::RawKey(KeyEvent::new(
            KeyCode::Char('x'),
            KeyModifiers::CONTROL,
        ))))
        .unwrap();

        assert_eq!(m.modus(), Modus::Table);
        let cats = m.table(TableId::HeavyCats).unwrap();
        assert_eq!(
            cats.records(),
            &[Record::new("Lioness", Size::NaN, "Africa", "")]
        );
    }

    #[test]
    fn escape_cancels_edit() {
        let mut m = model();
        send(&mut m, Message::Edit);
        type_text(&mut m, "Tiger");
        key(&mut m, KeyCode::Enter);
        key(&mut m, KeyCode::Esc);
        assert_eq!(m.modus(), Modus::Table);
        assert_eq!(names(&m, TableId::HeavyCats), vec!["Lion"]);
    }

    #[test]
    fn delete_needs_confirmation() {
        let mut m = model();
        send(&mut m, Message::Delete);
        assert_eq!(m.modus(), Modus::Confirm);
        assert_eq!(
            m.get_uidata().confirm_message.as_deref(),
            Some("Are you sure you want to delete Lion?")
        );
        send(&mut m, Message::Deny);
        assert_eq!(names(&m, TableId::HeavyCats), vec!["Lion"]);

        send(&mut m, Message::Delete);
        send(&mut m, Message::Confirm);
        assert!(m.table(TableId::HeavyCats).unwrap().is_empty());
        assert_eq!(m.modus(), Modus::Table);
    }

    #[test]
    fn header_sort_only_on_sortable_columns() {
        let mut m = model();
        send(&mut m, Message::NextTable);
        m.add_record(TableId::Dogs, Record::new("Poodle", 20, "France", SEED_IMAGE));

        // Size is not sortable for dogs.
        send(&mut m, Message::MoveRight);
        send(&mut m, Message::Sort);
        assert_eq!(m.table(TableId::Dogs).unwrap().sort_state(), None);

        send(&mut m, Message::MoveRight);
        send(&mut m, Message::MoveUp);
        send(&mut m, Message::Enter);
        assert_eq!(names(&m, TableId::Dogs), vec!["Poodle", "Bulldog"]);
    }

    #[test]
    fn cursor_on_image_hovers() {
        let mut m = model();
        for _ in 0..IMAGE_COLUMN {
            send(&mut m, Message::MoveRight);
        }
        assert_eq!(m.hovered(), Some((TableId::HeavyCats, "Lion")));
        let views = m.views();
        assert_eq!(views[0].rows[0].image.width, 150);

        send(&mut m, Message::MoveRight);
        assert_eq!(m.hovered(), None);
        assert_eq!(m.views()[0].rows[0].image.width, 100);
    }

    #[test]
    fn hover_moves_between_rows_and_clears_on_delete() {
        let mut m = model();
        m.add_record(TableId::HeavyCats, Record::new("Tiger", 300, "Asia", SEED_IMAGE));
        for _ in 0..IMAGE_COLUMN {
            send(&mut m, Message::MoveRight);
        }
        send(&mut m, Message::MoveDown);
        assert_eq!(m.hovered(), Some((TableId::HeavyCats, "Tiger")));
        let view = &m.views()[0];
        assert_eq!(view.row("Lion").unwrap().image.width, 100);
        assert_eq!(view.row("Tiger").unwrap().image.width, 150);

        send(&mut m, Message::Delete);
        send(&mut m, Message::Confirm);
        assert_eq!(m.hovered(), Some((TableId::HeavyCats, "Lion")));

        send(&mut m, Message::Delete);
        send(&mut m, Message::Confirm);
        assert_eq!(m.hovered(), None);
    }

    #[test]
    fn submitting_the_form_returns_to_the_table() {
        let mut m = model();
        send(&mut m, Message::Add);
        type_text(&mut m, "Puma");
        key(&mut m, KeyCode::Enter);
        assert_eq!(m.modus(), Modus::Table);
        assert_eq!(names(&m, TableId::HeavyCats), vec!["Lion", "Puma"]);
    }
}
