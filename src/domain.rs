use std::fmt;
use std::io::Error;
use std::path::PathBuf;

use derive_setters::Setters;
use ratatui::crossterm::event::KeyEvent;

use crate::table::TableError;
use crate::view::ImageSizes;

pub const HELP_TEXT: &str = "\
q        quit
← ↓ ↑ →  move (or h j k l)
Tab      next table (Shift+Tab previous)
s        sort by the current column
Enter    sort when on the header row
e        edit the selected animal
d        delete the selected animal
a        add an animal
c        copy the selected animal as CSV
?        this help
Esc      close dialogs

While prompting: Enter with blank input keeps the current value,
Ctrl+X clears it, Esc cancels the whole edit.";

#[derive(Debug, Clone, Setters)]
pub struct AppConfig {
    pub event_poll_time: u64,
    pub image_sizes: ImageSizes,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            event_poll_time: 100,
            image_sizes: ImageSizes::default(),
            log_file: PathBuf::from("animal-tables.log"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Quit,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    NextTable,
    PreviousTable,
    Sort,
    Enter,
    Edit,
    Delete,
    Add,
    Confirm,
    Deny,
    CopyRecord,
    Help,
    Exit,
    RawKey(KeyEvent),
}

#[derive(Debug)]
pub enum AppError {
    IoError(Error),
    Table(TableError),
    LoggingSetup(String),
    InvalidPath(String),
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError::IoError(err)
    }
}

impl From<TableError> for AppError {
    fn from(err: TableError) -> Self {
        AppError::Table(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::IoError(e) => write!(f, "I/O error: {e}"),
            AppError::Table(e) => write!(f, "{e}"),
            AppError::LoggingSetup(e) => write!(f, "Could not set up logging: {e}"),
            AppError::InvalidPath(e) => write!(f, "Invalid path: {e}"),
        }
    }
}

impl std::error::Error for AppError {}
