pub mod upcitemdb;

pub use upcitemdb::UpcItemDbAdapter;
