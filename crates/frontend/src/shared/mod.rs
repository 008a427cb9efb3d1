pub mod alert;
pub mod api_utils;
pub mod event_bus;
pub mod icons;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
pub mod view_scope;
