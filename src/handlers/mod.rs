pub mod generator_handler;

pub use generator_handler::{configure, generate_form, generate_json, health_check, index};
