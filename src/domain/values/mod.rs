pub mod provider_kind;
pub mod service_status;
pub mod store_backend;
