pub mod chat_client;
pub mod checklist_extractor;
pub mod checklist_renderer;
pub mod checklist_store;
pub mod media_service;
pub mod prompts;
pub mod sanitizer;
