// Resume text analysis: section segmentation and JD relevance scoring.
// Both are pure, synchronous and total; handlers call them inline.

pub mod ats;
pub mod handlers;
pub mod sections;
