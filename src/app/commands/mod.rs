pub mod deliver;
pub mod form;
pub mod generate;
