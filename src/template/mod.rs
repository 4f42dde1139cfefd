//! Rule-based task, timeline and recommendation generation from project
//! metadata alone. Always produces a non-empty plan, with or without
//! historical data.

pub mod recommend;
pub mod tasks;
pub mod timeline;

use crate::model::{ProjectAnalysis, ProjectInput};

pub use tasks::generate_tasks;
pub use timeline::build_timeline;

/// Base duration assumed when the scale label matches no bucket
pub const DEFAULT_BASE_DAYS: u32 = 14;

/// Ordered scale buckets: first row whose substring matches wins.
/// 大規模（3-6ヶ月） must be checked before 長期（6ヶ月以上）.
const SCALE_BUCKETS: &[(&[&str], u32)] = &[
    (&["数日"], 3),
    (&["小規模", "1-2週間", "1〜2週間"], 14),
    (&["中規模", "1-2ヶ月", "1〜2ヶ月"], 45),
    (&["大規模", "3-6ヶ月", "3〜6ヶ月"], 135),
    (&["長期", "6ヶ月以上"], 270),
];

/// Maps a free-form scale label to a base duration in days.
pub fn base_days(scale: &str) -> u32 {
    for (needles, days) in SCALE_BUCKETS {
        if needles.iter().any(|needle| scale.contains(needle)) {
            return *days;
        }
    }
    DEFAULT_BASE_DAYS
}

/// The six task-set generators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    PersonalLearning,
    Research,
    Event,
    Marketing,
    Software,
    Generic,
}

/// Ordered branch selection rules over the app type; first match wins,
/// anything else lands in the generic branch.
const BRANCH_RULES: &[(Branch, &[&str])] = &[
    (Branch::PersonalLearning, &["学習", "勉強", "課題"]),
    (Branch::Research, &["研究", "調査"]),
    (Branch::Event, &["イベント", "催し"]),
    (Branch::Marketing, &["マーケティング", "広報", "宣伝"]),
    (
        Branch::Software,
        &["開発", "アプリ", "ソフトウェア", "システム", "web"],
    ),
];

/// Picks the task-set generator for an app type.
pub fn select_branch(app_type: &str) -> Branch {
    let lowered = app_type.to_lowercase();
    for (branch, needles) in BRANCH_RULES {
        if needles.iter().any(|needle| lowered.contains(needle)) {
            return *branch;
        }
    }
    Branch::Generic
}

/// Generates the full rule-based plan for an input, with no history
/// involved. Pure and total: every input yields at least one task and one
/// timeline phase.
pub fn generate(input: &ProjectInput) -> ProjectAnalysis {
    let branch = select_branch(&input.app_type);
    let base = base_days(&input.scale);

    let tasks = tasks::generate_tasks(branch, &input.app_type, base);
    let timeline = timeline::build_timeline(branch, &tasks);
    let recommendations = recommend::recommendations(input, branch, base);

    ProjectAnalysis {
        tasks,
        timeline,
        recommendations,
    }
}
