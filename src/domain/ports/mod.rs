pub mod document_store;
pub mod embedding_port;
pub mod vector_index;
