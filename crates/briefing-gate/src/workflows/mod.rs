pub mod analysis;
pub mod briefing;
pub mod evaluation;
