pub mod checklist;
pub mod health;
pub mod itinerary;
pub mod options;
pub mod recommendation;
pub mod story;
