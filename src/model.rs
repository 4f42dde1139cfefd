//! Engine input and output models.

use serde::{Deserialize, Serialize};

// =====================================================
// Input
// =====================================================

/// Caller-supplied description of a prospective project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInput {
    /// Project name
    pub project_name: String,
    /// Free-text description of what the project is about
    #[serde(default)]
    pub description: String,
    /// Project type, matched against a fixed vocabulary (fallback branch otherwise)
    pub app_type: String,
    /// Free-text goals
    #[serde(default)]
    pub goals: String,
    /// Scale label, matched against fixed duration buckets
    #[serde(default)]
    pub scale: String,
    /// Number of people working on the project
    #[serde(default)]
    pub team_size: u32,
    /// Optional deadline label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl ProjectInput {
    pub fn new(project_name: impl Into<String>, app_type: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            description: String::new(),
            app_type: app_type.into(),
            goals: String::new(),
            scale: String::new(),
            team_size: 1,
            deadline: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_goals(mut self, goals: impl Into<String>) -> Self {
        self.goals = goals.into();
        self
    }

    pub fn with_scale(mut self, scale: impl Into<String>) -> Self {
        self.scale = scale.into();
        self
    }

    pub fn with_team_size(mut self, team_size: u32) -> Self {
        self.team_size = team_size;
        self
    }

    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }
}

// =====================================================
// Generated plan
// =====================================================

/// Priority of a generated or aggregated task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "urgent" => Some(Priority::Urgent),
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// A recommended task in the generated plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedTask {
    /// Task title, unique within one analysis result
    pub title: String,
    /// What the task involves
    pub description: String,
    /// Suggested priority
    pub priority: Priority,
    /// Estimated effort in days, at least 1
    pub estimated_days: u32,
    /// Category label used for phase grouping
    pub category: String,
    /// Titles of tasks that should complete first (advisory, not validated)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

/// A phase in the suggested timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePhase {
    /// Phase name
    pub phase: String,
    /// Total duration in days, the sum of member task estimates
    pub duration: u32,
    /// Titles of the tasks belonging to this phase
    pub tasks: Vec<String>,
    /// What the phase covers
    pub description: String,
}

/// The engine's sole output type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectAnalysis {
    /// Recommended tasks
    pub tasks: Vec<GeneratedTask>,
    /// Suggested phased timeline
    pub timeline: Vec<TimelinePhase>,
    /// Prioritized free-text recommendations
    pub recommendations: Vec<String>,
}

// =====================================================
// Learning data (ephemeral, per-call)
// =====================================================

/// A historical group judged similar to the current input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarGroup {
    /// Id of the historical group
    pub group_id: String,
    /// Group name
    pub name: String,
    /// Similarity score in [0, 1]
    pub score: f64,
    /// Member count of the historical group
    pub member_count: u32,
    /// Fraction of the group's tasks that reached completed status
    pub completion_rate: f64,
}

/// A task shape that recurs across relevant historical tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonTask {
    /// Synthesized title
    pub title: String,
    /// Synthesized description
    pub description: String,
    /// Category label the member tasks share
    pub category: String,
    /// Rounded mean of member task estimates
    pub average_days: u32,
    /// Saturating occurrence frequency in [0, 1]
    pub frequency: f64,
    /// Priority derived from frequency and average effort
    pub priority: Priority,
}

/// A working practice observed in (or assumed for) successful groups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessPattern {
    /// Pattern name
    pub name: String,
    /// What the pattern means in practice
    pub description: String,
    /// Observed or assumed success rate in [0, 1]
    pub success_rate: f64,
    /// App types the pattern applies to; empty means every type
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applicable_types: Vec<String>,
}

impl SuccessPattern {
    /// Whether the pattern applies to the given app type
    pub fn applies_to(&self, app_type: &str) -> bool {
        self.applicable_types.is_empty() || self.applicable_types.iter().any(|t| t == app_type)
    }
}

/// Statistical summary mined from historical records for one analysis call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningData {
    /// Similar historical groups, best first, at most 5
    pub similar_groups: Vec<SimilarGroup>,
    /// Recurring task shapes, frequency-sorted, at most 10
    pub common_tasks: Vec<CommonTask>,
    /// Success patterns, at most 5
    pub success_patterns: Vec<SuccessPattern>,
    /// Recommendation lines derived from the history
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_as_str() {
        assert_eq!(Priority::Urgent.as_str(), "urgent");
        assert_eq!(Priority::High.as_str(), "high");
        assert_eq!(Priority::Medium.as_str(), "medium");
        assert_eq!(Priority::Low.as_str(), "low");
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!(Priority::from_str("HIGH"), Some(Priority::High));
        assert_eq!(Priority::from_str("low"), Some(Priority::Low));
        assert_eq!(Priority::from_str("unknown"), None);
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        let json = serde_json::to_string(&Priority::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn test_project_input_builder() {
        let input = ProjectInput::new("文化祭の準備", "イベント企画")
            .with_description("クラスの出し物の準備")
            .with_scale("小規模（1-2週間）")
            .with_team_size(4)
            .with_deadline("2024-11-01");

        assert_eq!(input.project_name, "文化祭の準備");
        assert_eq!(input.team_size, 4);
        assert_eq!(input.deadline.as_deref(), Some("2024-11-01"));
    }

    #[test]
    fn test_project_input_deserializes_with_defaults() {
        let input: ProjectInput =
            serde_json::from_str(r#"{"project_name":"x","app_type":"研究・調査"}"#).unwrap();
        assert_eq!(input.team_size, 0);
        assert!(input.description.is_empty());
        assert!(input.deadline.is_none());
    }

    #[test]
    fn test_analysis_round_trip() {
        let analysis = ProjectAnalysis {
            tasks: vec![GeneratedTask {
                title: "要件定義".to_string(),
                description: "作りたいものを整理する".to_string(),
                priority: Priority::High,
                estimated_days: 2,
                category: "計画・企画".to_string(),
                dependencies: Vec::new(),
            }],
            timeline: vec![TimelinePhase {
                phase: "要件・設計".to_string(),
                duration: 2,
                tasks: vec!["要件定義".to_string()],
                description: "何を作るかを固める".to_string(),
            }],
            recommendations: vec!["まず全体の作業を洗い出しましょう".to_string()],
        };

        let json = serde_json::to_string(&analysis).unwrap();
        let parsed: ProjectAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.tasks.len(), 1);
        assert_eq!(parsed.tasks[0].title, analysis.tasks[0].title);
        assert_eq!(parsed.timeline[0].duration, 2);
    }

    #[test]
    fn test_success_pattern_applies_to() {
        let universal = SuccessPattern {
            name: "定期的な進捗確認".to_string(),
            description: String::new(),
            success_rate: 0.85,
            applicable_types: Vec::new(),
        };
        assert!(universal.applies_to("イベント企画"));

        let scoped = SuccessPattern {
            applicable_types: vec!["研究・調査".to_string()],
            ..universal
        };
        assert!(scoped.applies_to("研究・調査"));
        assert!(!scoped.applies_to("イベント企画"));
    }
}
