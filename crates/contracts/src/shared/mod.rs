pub mod api_message;
pub mod date_format;
pub mod number_input;
