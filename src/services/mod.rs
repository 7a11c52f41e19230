pub mod generation_service;
pub mod llm_client;
pub mod mcq_parser;
