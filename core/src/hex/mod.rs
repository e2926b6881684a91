pub mod coordinates;
pub mod layout;
