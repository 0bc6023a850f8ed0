pub mod banner;
pub mod form;
pub mod header;
pub mod playlist;
pub mod spinner;
