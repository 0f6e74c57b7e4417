pub mod fs_writer;
pub mod markdown;
