pub mod paths;

pub use paths::{format_relative_path, validate_file_size};
