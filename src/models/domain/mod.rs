pub mod generation_request;
pub mod mcq;
pub use generation_request::GenerationRequest;
pub use mcq::{option_label, McqRecord};
