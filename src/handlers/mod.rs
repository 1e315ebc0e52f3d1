pub mod root;
pub mod sale;
