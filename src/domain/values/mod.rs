pub mod embedding_mode;
pub mod extraction_mode;
pub mod image_source;
pub mod vector;
