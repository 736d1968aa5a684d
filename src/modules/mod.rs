pub mod barcode;
pub mod library;
pub mod metadata;
pub mod search;
pub mod title;
