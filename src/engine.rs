//! Learning synthesizer: orchestrates the template generator and the
//! aggregation pipeline, then merges both into the final analysis.

use crate::analysis::patterns::{
    self, PATTERN_REGULAR_CHECKINS, SUCCESS_COMPLETION_THRESHOLD,
};
use crate::analysis::similarity;
use crate::error::Result;
use crate::history::HistoryStore;
use crate::model::{
    GeneratedTask, LearningData, ProjectAnalysis, ProjectInput, SimilarGroup, SuccessPattern,
};
use crate::template;

/// Maximum number of tasks after merging learned common tasks
pub const MAX_MERGED_TASKS: usize = 15;
/// Maximum number of recommendation lines after merging
pub const MAX_RECOMMENDATIONS: usize = 8;
/// Minimum frequency for a common task to be appended to the plan
pub const COMMON_TASK_FREQUENCY_THRESHOLD: f64 = 0.5;
/// How strongly low success rates stretch phase durations
pub const TIMELINE_BUFFER_FACTOR: f64 = 0.2;

/// Stateless analysis engine over a caller-supplied history store.
///
/// Every call is independent and side-effect free; derived learning data is
/// computed fresh per call and discarded with the result.
pub struct ProjectAnalyzer;

impl ProjectAnalyzer {
    /// Produces the full analysis for an input: the rule-based template
    /// plan refined by whatever the history supports. Total: a failing or
    /// empty store still yields at least one task and one timeline phase.
    pub fn analyze(input: &ProjectInput, store: &dyn HistoryStore) -> ProjectAnalysis {
        let template = template::generate(input);
        let learning = Self::learning_data(input, store);
        Self::merge(input, template, &learning)
    }

    /// Mines the historical collections for similar groups, common tasks
    /// and success patterns. Never fails: if the top-level fetches are
    /// unavailable the fixed fallback learning data is returned instead.
    pub fn learning_data(input: &ProjectInput, store: &dyn HistoryStore) -> LearningData {
        match Self::collect(input, store) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("history unavailable, using fallback learning data: {}", e);
                Self::fallback_learning_data()
            }
        }
    }

    fn collect(input: &ProjectInput, store: &dyn HistoryStore) -> Result<LearningData> {
        let groups = store.fetch_all_groups()?;
        let tasks = store.fetch_all_tasks()?;

        // the three branches are independent: scatter, then gather
        let (similar_groups, (common_tasks, success_patterns)) = rayon::join(
            || similarity::find_similar_groups(input, &groups, store),
            || {
                rayon::join(
                    || {
                        let relevant = patterns::relevant_tasks(input, &tasks);
                        patterns::common_tasks(&relevant)
                    },
                    || patterns::success_patterns(&groups, store),
                )
            },
        );

        let recommendations =
            Self::learning_recommendations(input, &similar_groups, &success_patterns);

        Ok(LearningData {
            similar_groups,
            common_tasks,
            success_patterns,
            recommendations,
        })
    }

    /// Fixed degraded learning data used when history cannot be read.
    fn fallback_learning_data() -> LearningData {
        LearningData {
            similar_groups: Vec::new(),
            common_tasks: Vec::new(),
            success_patterns: vec![SuccessPattern {
                name: PATTERN_REGULAR_CHECKINS.to_string(),
                description: "週に一度は進捗を共有し、遅れを早めに見つける".to_string(),
                success_rate: 0.85,
                applicable_types: Vec::new(),
            }],
            recommendations: vec![
                "過去のグループの情報を取得できなかったため、標準のテンプレートに基づいて提案しています"
                    .to_string(),
            ],
        }
    }

    /// Recommendation lines derived from the mined history: one line for
    /// the most similar successful group, one per applicable success
    /// pattern.
    fn learning_recommendations(
        input: &ProjectInput,
        similar_groups: &[SimilarGroup],
        success_patterns: &[SuccessPattern],
    ) -> Vec<String> {
        let mut lines = Vec::new();

        let successful: Vec<&SimilarGroup> = similar_groups
            .iter()
            .filter(|g| g.completion_rate > SUCCESS_COMPLETION_THRESHOLD)
            .collect();
        if let Some(first) = successful.first() {
            let avg = successful.iter().map(|g| g.completion_rate).sum::<f64>()
                / successful.len() as f64;
            lines.push(format!(
                "似た取り組みの「{}」は完了率{}%でした。進め方を参考にしましょう",
                first.name,
                (avg * 100.0).round() as u32
            ));
        }

        for pattern in success_patterns
            .iter()
            .filter(|p| p.applies_to(&input.app_type))
        {
            lines.push(format!(
                "「{}」は成功率{}%のパターンです。取り入れてみましょう",
                pattern.name,
                (pattern.success_rate * 100.0).round() as u32
            ));
        }

        lines
    }

    /// Merges the template plan with learning data.
    ///
    /// Frequent common tasks are appended unless a task with the same title
    /// already exists (case-sensitive), capped at [`MAX_MERGED_TASKS`].
    /// Phase durations stretch by the buffer factor when applicable success
    /// patterns exist. Recommendations concatenate template lines first,
    /// capped at [`MAX_RECOMMENDATIONS`]. Merging all-empty learning data
    /// returns the template plan unchanged.
    pub fn merge(
        input: &ProjectInput,
        template: ProjectAnalysis,
        learning: &LearningData,
    ) -> ProjectAnalysis {
        let mut tasks = template.tasks;
        for common in &learning.common_tasks {
            if common.frequency <= COMMON_TASK_FREQUENCY_THRESHOLD {
                continue;
            }
            if tasks.iter().any(|t| t.title == common.title) {
                continue;
            }
            tasks.push(GeneratedTask {
                title: common.title.clone(),
                description: common.description.clone(),
                priority: common.priority,
                estimated_days: common.average_days.max(1),
                category: common.category.clone(),
                dependencies: Vec::new(),
            });
        }
        tasks.truncate(MAX_MERGED_TASKS);

        let applicable: Vec<&SuccessPattern> = learning
            .success_patterns
            .iter()
            .filter(|p| p.applies_to(&input.app_type))
            .collect();
        let timeline = if applicable.is_empty() {
            template.timeline
        } else {
            let avg_rate = applicable.iter().map(|p| p.success_rate).sum::<f64>()
                / applicable.len() as f64;
            let factor = 1.0 + (1.0 - avg_rate) * TIMELINE_BUFFER_FACTOR;
            template
                .timeline
                .into_iter()
                .map(|mut phase| {
                    phase.duration = (phase.duration as f64 * factor).round() as u32;
                    phase
                })
                .collect()
        };

        let mut recommendations = template.recommendations;
        recommendations.extend(learning.recommendations.iter().cloned());
        recommendations.truncate(MAX_RECOMMENDATIONS);

        ProjectAnalysis {
            tasks,
            timeline,
            recommendations,
        }
    }
}
