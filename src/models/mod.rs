pub mod checklist;
pub mod requests;
