pub mod barcode;
pub mod repository;

pub use barcode::Barcode;
pub use repository::BarcodeLookup;

#[cfg(test)]
pub use repository::MockBarcodeLookup;
