pub mod dataset;
pub mod extraction;
pub mod passage;
pub mod similarity_result;
