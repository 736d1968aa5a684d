pub mod domain;
pub mod infrastructure;

pub use domain::{Barcode, BarcodeLookup};
pub use infrastructure::UpcItemDbAdapter;
