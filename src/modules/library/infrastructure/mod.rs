pub mod jellyfin;

pub use jellyfin::JellyfinAdapter;
