pub mod entities;
pub mod error;
pub mod ports;
pub mod similarity_index;
pub mod values;
