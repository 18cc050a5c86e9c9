pub mod client;
pub mod document_store;
