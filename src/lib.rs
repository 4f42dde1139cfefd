pub mod analysis;
pub mod engine;
pub mod error;
pub mod history;
pub mod model;
pub mod template;

pub use analysis::{categorize, common_tasks, extract_keywords, find_similar_groups,
    relevant_tasks, similarity, success_patterns, Category};
pub use engine::ProjectAnalyzer;
pub use error::{AdvisorError, Result};
pub use history::{GroupRecord, HistoryStore, InMemoryHistory, TaskRecord};
pub use model::{
    CommonTask, GeneratedTask, LearningData, Priority, ProjectAnalysis, ProjectInput,
    SimilarGroup, SuccessPattern, TimelinePhase,
};
pub use template::{base_days, generate as generate_template, select_branch, Branch};
