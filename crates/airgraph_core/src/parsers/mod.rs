pub mod openflights;
pub mod validation;
