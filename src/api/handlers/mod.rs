pub mod check;
pub mod collection;
pub mod status;
