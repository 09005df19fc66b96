pub mod date;
pub mod validate;
