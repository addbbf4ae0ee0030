use tracing::trace;

use crate::record::{Attribute, Record, Size};
use crate::table::TableId;

/// Answer to a single edit prompt. A blank answer keeps the current value,
/// clearing has to be asked for explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAnswer {
    Keep,
    Replace(String),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditStep {
    Next(Attribute),
    Done(Record),
}

/// Sequential prompts for every attribute of one record.
#[derive(Debug, Clone)]
pub struct EditSession {
    table: TableId,
    original: Record,
    draft: Record,
    field: usize,
}

impl EditSession {
    pub fn new(table: TableId, original: Record) -> Self {
        Self {
            table,
            draft: original.clone(),
            original,
            field: 0,
        }
    }

    pub fn table(&self) -> TableId {
        self.table
    }

    pub fn original_name(&self) -> &str {
        &self.original.name
    }

    pub fn field(&self) -> Attribute {
        Attribute::ALL[self.field]
    }

    pub fn prompt(&self) -> &'static str {
        match self.field() {
            Attribute::Name => "Enter new name:",
            Attribute::Size => "Enter new size:",
            Attribute::Location => "Enter new location:",
            Attribute::Image => "Enter new image URL:",
        }
    }

    /// Current value of the prompted field, shown as the default.
    pub fn default_value(&self) -> String {
        match self.field() {
            Attribute::Name => self.original.name.clone(),
            Attribute::Size => self.original.size.to_string(),
            Attribute::Location => self.original.location.clone(),
            Attribute::Image => self.original.image.clone(),
        }
    }

    pub fn answer(&mut self, answer: FieldAnswer) -> EditStep {
        let field = self.field();
        trace!("Edit {:?}: {:?} => {:?}", self.original.name, field, answer);
        match (field, answer) {
            (_, FieldAnswer::Keep) => {}
            // A record always keeps a name.
            (Attribute::Name, FieldAnswer::Clear) => {}
            (Attribute::Name, FieldAnswer::Replace(v)) => self.draft.name = v,
            (Attribute::Size, FieldAnswer::Replace(v)) => self.draft.size = Size::parse(&v),
            (Attribute::Size, FieldAnswer::Clear) => self.draft.size = Size::NaN,
            (Attribute::Location, FieldAnswer::Replace(v)) => self.draft.location = v,
            (Attribute::Location, FieldAnswer::Clear) => self.draft.location.clear(),
            (Attribute::Image, FieldAnswer::Replace(v)) => self.draft.image = v,
            (Attribute::Image, FieldAnswer::Clear) => self.draft.image.clear(),
        }

        if self.field + 1 < Attribute::ALL.len() {
            self.field += 1;
            EditStep::Next(self.field())
        } else {
            EditStep::Done(self.draft.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lion() -> EditSession {
        EditSession::new(
            TableId::HeavyCats,
            Record::new("Lion", 250, "Africa", "lion.png"),
        )
    }

    #[test]
    fn prompts_each_field_in_order() {
        let mut session = lion();
        assert_eq!(session.prompt(), "Enter new name:");
        assert_eq!(session.default_value(), "Lion");
        assert_eq!(session.answer(FieldAnswer::Keep), EditStep::Next(Attribute::Size));
        assert_eq!(session.prompt(), "Enter new size:");
        assert_eq!(session.default_value(), "250");
        assert_eq!(
            session.answer(FieldAnswer::Keep),
            EditStep::Next(Attribute::Location)
        );
        assert_eq!(session.prompt(), "Enter new location:");
        assert_eq!(session.answer(FieldAnswer::Keep), EditStep::Next(Attribute::Image));
        assert_eq!(session.prompt(), "Enter new image URL:");
        assert_eq!(
            session.answer(FieldAnswer::Keep),
            EditStep::Done(Record::new("Lion", 250, "Africa", "lion.png"))
        );
    }

    #[test]
    fn replace_coerces_size() {
        let mut session = lion();
        session.answer(FieldAnswer::Replace("Lioness".into()));
        session.answer(FieldAnswer::Replace("180 kg".into()));
        session.answer(FieldAnswer::Keep);
        let step = session.answer(FieldAnswer::Replace("lioness.png".into()));
        assert_eq!(
            step,
            EditStep::Done(Record::new("Lioness", 180, "Africa", "lioness.png"))
        );
        assert_eq!(session.original_name(), "Lion");
    }

    #[test]
    fn clear_is_distinct_from_keep() {
        let mut session = lion();
        session.answer(FieldAnswer::Clear);
        session.answer(FieldAnswer::Clear);
        session.answer(FieldAnswer::Clear);
        let step = session.answer(FieldAnswer::Keep);
        assert_eq!(
            step,
            EditStep::Done(Record::new("Lion", Size::NaN, "", "lion.png"))
        );
    }
}
