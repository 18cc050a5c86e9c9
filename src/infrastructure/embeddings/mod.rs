pub mod hashed;
pub mod openai;
