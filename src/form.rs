use tracing::trace;

use crate::record::{Record, Size};
use crate::table::TableId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Size,
    Location,
    Image,
    Table,
}

impl FormField {
    pub const INPUTS: [FormField; 4] = [
        FormField::Name,
        FormField::Size,
        FormField::Location,
        FormField::Image,
    ];

    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Size,
        FormField::Location,
        FormField::Image,
        FormField::Table,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Size => "Size",
            FormField::Location => "Location",
            FormField::Image => "Image URL",
            FormField::Table => "Table",
        }
    }

    pub fn element_id(&self) -> &'static str {
        match self {
            FormField::Name => "animalName",
            FormField::Size => "animalSize",
            FormField::Location => "animalLocation",
            FormField::Image => "animalImage",
            FormField::Table => "animalTable",
        }
    }

    fn next(&self) -> Self {
        let idx = FormField::ALL.iter().position(|f| f == self).unwrap_or(0);
        FormField::ALL[(idx + 1) % FormField::ALL.len()]
    }

    fn previous(&self) -> Self {
        let idx = FormField::ALL.iter().position(|f| f == self).unwrap_or(0);
        FormField::ALL[(idx + FormField::ALL.len() - 1) % FormField::ALL.len()]
    }
}

/// Raw state of the add-animal form. Values are kept as typed and only
/// coerced on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalForm {
    pub name: String,
    pub size: String,
    pub location: String,
    pub image: String,
    pub table: String,
    pub focus: FormField,
}

impl Default for AnimalForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            size: String::new(),
            location: String::new(),
            image: String::new(),
            table: TableId::HeavyCats.selector().to_string(),
            focus: FormField::Name,
        }
    }
}

impl AnimalForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Size => &self.size,
            FormField::Location => &self.location,
            FormField::Image => &self.image,
            FormField::Table => &self.table,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Size => self.size = value,
            FormField::Location => self.location = value,
            FormField::Image => self.image = value,
            FormField::Table => self.table = value,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Moves the table selector to the next (or previous) configured table.
    pub fn cycle_table(&mut self, forward: bool) {
        let ids = TableId::ALL;
        let current = ids.iter().position(|id| id.selector() == self.table);
        let next = match (current, forward) {
            (Some(idx), true) => (idx + 1) % ids.len(),
            (Some(idx), false) => (idx + ids.len() - 1) % ids.len(),
            (None, _) => 0,
        };
        self.table = ids[next].selector().to_string();
    }

    pub fn record(&self) -> Record {
        Record {
            name: self.name.trim().to_string(),
            size: Size::parse(&self.size),
            location: self.location.trim().to_string(),
            image: self.image.trim().to_string(),
        }
    }

    /// Builds the record, resolves the target table and resets the form.
    /// Unknown selectors yield no target.
    pub fn submit(&mut self) -> Submission {
        let submission = Submission {
            target: TableId::from_selector(&self.table),
            record: self.record(),
        };
        trace!("Form submitted: {:?}", submission);
        self.reset();
        submission
    }

    pub fn reset(&mut self) {
        *self = AnimalForm::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub target: Option<TableId>,
    pub record: Record,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(selector: &str) -> AnimalForm {
        let mut form = AnimalForm::default();
        form.set(FormField::Name, "  Poodle ");
        form.set(FormField::Size, "20");
        form.set(FormField::Location, "France ");
        form.set(FormField::Image, " https://via.placeholder.com/100");
        form.set(FormField::Table, selector);
        form
    }

    #[test]
    fn submit_trims_and_parses() {
        let mut form = filled("dogsTable");
        let submission = form.submit();

        assert_eq!(submission.target, Some(TableId::Dogs));
        assert_eq!(
            submission.record,
            Record::new("Poodle", 20, "France", "https://via.placeholder.com/100")
        );
        assert_eq!(form, AnimalForm::default());
    }

    #[test]
    fn unknown_selector_has_no_target_but_resets() {
        let mut form = filled("catsTable");
        assert_eq!(form.submit().target, None);
        assert_eq!(form.name, "");
    }

    #[test]
    fn malformed_size_becomes_nan() {
        let mut form = filled("dogsTable");
        form.set(FormField::Size, "big");
        assert_eq!(form.submit().record.size, Size::NaN);
    }

    #[test]
    fn focus_and_selector_wrap_around() {
        let mut form = AnimalForm::default();
        form.focus_previous();
        assert_eq!(form.focus, FormField::Table);
        form.focus_next();
        assert_eq!(form.focus, FormField::Name);

        form.cycle_table(false);
        assert_eq!(form.table, "bigFishTable");
        form.cycle_table(true);
        assert_eq!(form.table, "bigCatsTable");
    }
}
