pub mod fs;

pub use fs::{file_exists, find_files, read_file_to_string, write_file_sync};
