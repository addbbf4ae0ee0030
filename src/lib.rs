pub mod controller;
pub mod domain;
pub mod edit;
pub mod form;
pub mod html;
pub mod inputter;
pub mod model;
pub mod record;
pub mod table;
pub mod ui;
pub mod view;
