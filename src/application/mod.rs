pub mod add_document;
pub mod ask;
pub mod status;
pub mod workflow;
