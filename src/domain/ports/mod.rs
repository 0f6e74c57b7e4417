pub mod embedding_port;
pub mod extraction_port;
pub mod image_loader;
pub mod result_writer;
