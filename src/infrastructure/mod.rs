pub mod dataset;
pub mod embeddings;
pub mod extraction;
pub mod images;
pub mod storage;
