pub mod embed_batch;
pub mod extract;
pub mod search;
