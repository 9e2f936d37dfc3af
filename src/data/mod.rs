mod loader;

pub use loader::{LoadError, read_file, read_stdin};
