pub mod request;
pub mod response;
pub use request::GenerateMcqRequest;
pub use response::GenerateMcqResponse;
