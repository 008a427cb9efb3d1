pub mod aggregate;
pub mod request;
