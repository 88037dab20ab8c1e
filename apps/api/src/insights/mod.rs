// Insights derived from one analysis run: how deep the candidate's profile
// reads, what to learn next, and which sectors the matches cluster in.

pub mod depth;
pub mod roadmap;
pub mod sectors;
