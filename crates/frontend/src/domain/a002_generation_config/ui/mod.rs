pub mod form;
pub mod generate;
pub mod settings;
