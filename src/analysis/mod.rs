pub mod categorizer;
pub mod keywords;
pub mod patterns;
pub mod similarity;

pub use categorizer::{categorize, Category};
pub use keywords::extract_keywords;
pub use patterns::{common_tasks, relevant_tasks, success_patterns};
pub use similarity::{find_similar_groups, similarity};
