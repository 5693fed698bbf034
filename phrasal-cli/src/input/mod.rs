//! Input handling module

pub mod csv_reader;
pub mod file_reader;
pub mod glob_resolver;

pub use csv_reader::read_csv_sentences;
pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
