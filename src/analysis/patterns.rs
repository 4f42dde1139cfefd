//! Statistical aggregation of historical tasks into common-task and
//! success-pattern summaries.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::history::{GroupRecord, HistoryStore, TaskRecord};
use crate::model::{CommonTask, Priority, ProjectInput, SuccessPattern};

use super::categorizer::{categorize, Category};
use super::keywords::extract_keywords;

/// Effort assumed for tasks without a recorded estimate
pub const DEFAULT_ESTIMATED_DAYS: u32 = 3;
/// Member count at which a category's frequency saturates to 1.0
pub const FREQUENCY_SATURATION: f64 = 10.0;
/// Frequency above which a short common task becomes high priority
pub const HIGH_FREQUENCY_THRESHOLD: f64 = 0.7;
/// Maximum average days for the high-priority rule
pub const HIGH_MAX_AVERAGE_DAYS: u32 = 3;
/// Frequency above which a moderate common task becomes medium priority
pub const MEDIUM_FREQUENCY_THRESHOLD: f64 = 0.4;
/// Maximum average days for the medium-priority rule
pub const MEDIUM_MAX_AVERAGE_DAYS: u32 = 7;
/// Maximum number of common tasks reported
pub const MAX_COMMON_TASKS: usize = 10;
/// Maximum number of success patterns reported
pub const MAX_SUCCESS_PATTERNS: usize = 5;
/// Completion rate above which a group counts as successful
pub const SUCCESS_COMPLETION_THRESHOLD: f64 = 0.8;
/// A word or sentence must recur in this many member records to count as shared
const MIN_RECURRENCE: usize = 2;

/// Name of the pattern contributed by successful historical groups
pub const PATTERN_STAGED_DECOMPOSITION: &str = "段階的タスク分割";
/// Name of the always-present check-in pattern
pub const PATTERN_REGULAR_CHECKINS: &str = "定期的な進捗確認";
/// Name of the always-present deadline pattern
pub const PATTERN_CLEAR_DEADLINES: &str = "明確な期限設定";

/// Sentence boundaries for description synthesis
static SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[。．.!?！？\n]+").unwrap());

/// Filters historical tasks down to the ones topically relevant to the
/// input: the task text must share at least one keyword with the input's
/// type, description and goals.
pub fn relevant_tasks<'a>(input: &ProjectInput, tasks: &'a [TaskRecord]) -> Vec<&'a TaskRecord> {
    let input_keywords = extract_keywords(&format!(
        "{} {} {}",
        input.app_type, input.description, input.goals
    ));
    if input_keywords.is_empty() {
        return Vec::new();
    }

    tasks
        .iter()
        .filter(|task| {
            let task_keywords = extract_keywords(&format!("{} {}", task.title, task.description));
            !task_keywords.is_disjoint(&input_keywords)
        })
        .collect()
}

/// Reduces pre-filtered tasks into per-category common-task summaries,
/// sorted by frequency descending and capped at [`MAX_COMMON_TASKS`].
pub fn common_tasks(tasks: &[&TaskRecord]) -> Vec<CommonTask> {
    let mut by_category: HashMap<Category, Vec<&TaskRecord>> = HashMap::new();
    for task in tasks {
        by_category.entry(categorize(task)).or_default().push(task);
    }

    let mut summaries: Vec<CommonTask> = by_category
        .into_iter()
        .map(|(category, members)| summarize_category(category, &members))
        .collect();

    summaries.sort_by(|a, b| {
        b.frequency
            .partial_cmp(&a.frequency)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    summaries.truncate(MAX_COMMON_TASKS);
    summaries
}

fn summarize_category(category: Category, members: &[&TaskRecord]) -> CommonTask {
    let total_days: u32 = members
        .iter()
        .map(|t| t.estimated_days.unwrap_or(DEFAULT_ESTIMATED_DAYS))
        .sum();
    let average_days = (total_days as f64 / members.len() as f64).round() as u32;
    let frequency = (members.len() as f64 / FREQUENCY_SATURATION).min(1.0);

    let priority = if frequency > HIGH_FREQUENCY_THRESHOLD && average_days <= HIGH_MAX_AVERAGE_DAYS
    {
        Priority::High
    } else if frequency > MEDIUM_FREQUENCY_THRESHOLD && average_days <= MEDIUM_MAX_AVERAGE_DAYS {
        Priority::Medium
    } else {
        Priority::Low
    };

    let (fallback_title, fallback_description) = fallback_texts(category);
    let title = shared_title_word(members)
        .map(|word| format!("{word}関連のタスク"))
        .unwrap_or_else(|| fallback_title.to_string());
    let description =
        shared_sentence(members).unwrap_or_else(|| fallback_description.to_string());

    CommonTask {
        title,
        description,
        category: category.label().to_string(),
        average_days,
        frequency,
        priority,
    }
}

/// The most frequent word recurring in at least [`MIN_RECURRENCE`] member
/// titles. Ties break by count, then lexicographically.
fn shared_title_word(members: &[&TaskRecord]) -> Option<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for task in members {
        for word in extract_keywords(&task.title) {
            *counts.entry(word).or_default() += 1;
        }
    }
    most_recurrent(counts)
}

/// The most frequent sentence recurring in at least [`MIN_RECURRENCE`]
/// member descriptions; each member counts a sentence once.
fn shared_sentence(members: &[&TaskRecord]) -> Option<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for task in members {
        let sentences: HashSet<String> = SENTENCE_RE
            .split(&task.description)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        for sentence in sentences {
            *counts.entry(sentence).or_default() += 1;
        }
    }
    most_recurrent(counts)
}

fn most_recurrent(counts: HashMap<String, usize>) -> Option<String> {
    counts
        .into_iter()
        .filter(|(_, count)| *count >= MIN_RECURRENCE)
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
        .map(|(text, _)| text)
}

fn fallback_texts(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Design => ("設計書の作成", "仕様をまとめた設計書を作成する"),
        Category::Development => ("機能の実装", "必要な機能を実装する"),
        Category::Testing => ("動作テスト", "実装した内容の動作を確認する"),
        Category::Research => ("事前調査", "必要な情報を調べてまとめる"),
        Category::Planning => ("作業計画の策定", "作業の進め方と分担を決める"),
        Category::UxDesign => ("画面デザインの作成", "画面のデザイン案を作成する"),
        Category::Documentation => ("ドキュメント整備", "関連する資料をまとめる"),
        Category::Deployment => ("リリース準備", "公開に向けた準備を行う"),
        Category::Other => ("定例作業", "グループでよく発生している作業"),
    }
}

/// Derives success patterns from historical groups, processed in input
/// order. Groups whose completion rate exceeds
/// [`SUCCESS_COMPLETION_THRESHOLD`] contribute a staged-decomposition
/// pattern annotated with that rate; two fixed universal patterns are
/// always appended before the cap is applied.
pub fn success_patterns(groups: &[GroupRecord], store: &dyn HistoryStore) -> Vec<SuccessPattern> {
    let mut patterns = Vec::new();

    for group in groups {
        let tasks = match store.fetch_group_tasks(&group.id) {
            Ok(tasks) => tasks,
            Err(e) => {
                tracing::warn!("failed to fetch tasks for group {}: {}", group.id, e);
                continue;
            }
        };
        if tasks.is_empty() {
            continue;
        }

        let completed = tasks.iter().filter(|t| t.is_completed()).count();
        let rate = completed as f64 / tasks.len() as f64;
        if rate > SUCCESS_COMPLETION_THRESHOLD {
            patterns.push(SuccessPattern {
                name: PATTERN_STAGED_DECOMPOSITION.to_string(),
                description: "大きな作業を小さなタスクに分割して段階的に進める".to_string(),
                success_rate: rate,
                applicable_types: Vec::new(),
            });
        }
    }

    patterns.push(SuccessPattern {
        name: PATTERN_REGULAR_CHECKINS.to_string(),
        description: "週に一度は進捗を共有し、遅れを早めに見つける".to_string(),
        success_rate: 0.85,
        applicable_types: Vec::new(),
    });
    patterns.push(SuccessPattern {
        name: PATTERN_CLEAR_DEADLINES.to_string(),
        description: "タスクごとに期限を決めて全員に共有する".to_string(),
        success_rate: 0.78,
        applicable_types: Vec::new(),
    });

    patterns.truncate(MAX_SUCCESS_PATTERNS);
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::InMemoryHistory;

    fn task(id: &str, title: &str, days: Option<u32>) -> TaskRecord {
        let t = TaskRecord::new(id, "g1", title).with_status("completed");
        match days {
            Some(d) => t.with_estimated_days(d),
            None => t,
        }
    }

    #[test]
    fn test_design_doc_tasks_aggregate_into_one_summary() {
        let t1 = task("t1", "API設計書", Some(5));
        let t2 = task("t2", "API設計レビュー", Some(3));
        let members = vec![&t1, &t2];

        let common = common_tasks(&members);
        assert_eq!(common.len(), 1);
        let summary = &common[0];
        assert_eq!(summary.category, "設計・設計書");
        assert_eq!(summary.average_days, 4);
        assert!((summary.frequency - 0.2).abs() < 1e-9);
        assert_eq!(summary.priority, Priority::Low);
    }

    #[test]
    fn test_missing_estimates_default_to_three_days() {
        let t1 = task("t1", "ログイン機能の実装", None);
        let t2 = task("t2", "一覧画面の実装", None);
        let common = common_tasks(&[&t1, &t2]);
        assert_eq!(common[0].average_days, DEFAULT_ESTIMATED_DAYS);
    }

    #[test]
    fn test_frequency_saturates_at_one() {
        let tasks: Vec<TaskRecord> = (0..15)
            .map(|i| task(&format!("t{i}"), &format!("機能{i}の実装"), Some(2)))
            .collect();
        let members: Vec<&TaskRecord> = tasks.iter().collect();
        let common = common_tasks(&members);
        assert_eq!(common.len(), 1);
        assert!((common[0].frequency - 1.0).abs() < 1e-9);
        // frequency 1.0 with 2-day average hits the high rule
        assert_eq!(common[0].priority, Priority::High);
    }

    #[test]
    fn test_medium_priority_requires_both_conditions() {
        // five members: frequency 0.5 > 0.4, average 5 <= 7
        let tasks: Vec<TaskRecord> = (0..5)
            .map(|i| task(&format!("t{i}"), &format!("機能{i}の実装"), Some(5)))
            .collect();
        let members: Vec<&TaskRecord> = tasks.iter().collect();
        assert_eq!(common_tasks(&members)[0].priority, Priority::Medium);

        // same frequency but a heavy average falls back to low
        let slow: Vec<TaskRecord> = (0..5)
            .map(|i| task(&format!("s{i}"), &format!("機能{i}の実装"), Some(20)))
            .collect();
        let members: Vec<&TaskRecord> = slow.iter().collect();
        assert_eq!(common_tasks(&members)[0].priority, Priority::Low);
    }

    #[test]
    fn test_sorted_by_frequency_desc_and_capped() {
        let mut tasks: Vec<TaskRecord> = Vec::new();
        // three development tasks, two testing tasks, one research task
        for i in 0..3 {
            tasks.push(task(&format!("d{i}"), &format!("機能{i}の実装"), Some(2)));
        }
        for i in 0..2 {
            tasks.push(task(&format!("v{i}"), &format!("機能{i}のテスト"), Some(1)));
        }
        tasks.push(task("r0", "競合サービスの調査", Some(2)));

        let members: Vec<&TaskRecord> = tasks.iter().collect();
        let common = common_tasks(&members);

        assert!(common.len() <= MAX_COMMON_TASKS);
        assert!(common
            .windows(2)
            .all(|w| w[0].frequency >= w[1].frequency));
        assert_eq!(common[0].category, "開発・実装");
    }

    #[test]
    fn test_shared_word_feeds_the_title() {
        // "login" is the only token recurring in both titles
        let t1 = task("t1", "login 画面の実装", Some(2));
        let t2 = task("t2", "login 処理の実装", Some(2));
        let common = common_tasks(&[&t1, &t2]);
        assert_eq!(common[0].title, "login関連のタスク");
    }

    #[test]
    fn test_shared_sentence_feeds_the_description() {
        let t1 = task("t1", "ログイン機能の実装", Some(2))
            .with_description("画面を作る。レビューを依頼する。");
        let t2 = task("t2", "登録機能の実装", Some(2))
            .with_description("レビューを依頼する。");
        let common = common_tasks(&[&t1, &t2]);
        assert_eq!(common[0].description, "レビューを依頼する");
    }

    #[test]
    fn test_no_recurring_phrase_falls_back_to_template() {
        let t1 = task("t1", "API設計書", Some(5));
        let t2 = task("t2", "API設計レビュー", Some(3));
        let common = common_tasks(&[&t1, &t2]);
        assert_eq!(common[0].title, "設計書の作成");
        assert_eq!(common[0].description, "仕様をまとめた設計書を作成する");
    }

    #[test]
    fn test_relevant_tasks_requires_keyword_overlap() {
        let input = ProjectInput::new("p", "Webアプリ開発")
            .with_description("todo 管理アプリを作る")
            .with_goals("react を使って学ぶ");
        let tasks = vec![
            TaskRecord::new("t1", "g1", "react 画面の実装"),
            TaskRecord::new("t2", "g1", "会場の下見"),
        ];
        let relevant = relevant_tasks(&input, &tasks);
        assert_eq!(relevant.len(), 1);
        assert_eq!(relevant[0].id, "t1");
    }

    #[test]
    fn test_relevant_tasks_with_empty_input_text() {
        let input = ProjectInput::new("p", "");
        let tasks = vec![TaskRecord::new("t1", "g1", "react 画面の実装")];
        assert!(relevant_tasks(&input, &tasks).is_empty());
    }

    #[test]
    fn test_successful_group_contributes_staged_pattern() {
        let mut store = InMemoryHistory::new();
        store.add_group(GroupRecord::new("g1", "開発チームA"));
        for i in 0..9 {
            store.add_task(
                TaskRecord::new(format!("t{i}"), "g1", format!("機能{i}"))
                    .with_status("completed"),
            );
        }
        store.add_task(TaskRecord::new("t9", "g1", "残作業").with_status("pending"));

        let groups = store.fetch_all_groups().unwrap();
        let patterns = success_patterns(&groups, &store);

        let staged: Vec<_> = patterns
            .iter()
            .filter(|p| p.name == PATTERN_STAGED_DECOMPOSITION)
            .collect();
        assert_eq!(staged.len(), 1);
        assert!((staged[0].success_rate - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_half_completed_group_contributes_nothing() {
        let mut store = InMemoryHistory::new();
        store.add_group(GroupRecord::new("g1", "開発チームB"));
        store.add_task(TaskRecord::new("t1", "g1", "機能A").with_status("completed"));
        store.add_task(TaskRecord::new("t2", "g1", "機能B").with_status("pending"));

        let groups = store.fetch_all_groups().unwrap();
        let patterns = success_patterns(&groups, &store);
        assert!(patterns
            .iter()
            .all(|p| p.name != PATTERN_STAGED_DECOMPOSITION));
    }

    #[test]
    fn test_fixed_patterns_always_present() {
        let patterns = success_patterns(&[], &InMemoryHistory::new());
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].name, PATTERN_REGULAR_CHECKINS);
        assert!((patterns[0].success_rate - 0.85).abs() < 1e-9);
        assert_eq!(patterns[1].name, PATTERN_CLEAR_DEADLINES);
        assert!((patterns[1].success_rate - 0.78).abs() < 1e-9);
        assert!(patterns.iter().all(|p| p.applies_to("イベント企画")));
    }

    #[test]
    fn test_patterns_capped_at_five() {
        let mut store = InMemoryHistory::new();
        for g in 0..6 {
            store.add_group(GroupRecord::new(format!("g{g}"), format!("チーム{g}")));
            store.add_task(
                TaskRecord::new(format!("t{g}"), format!("g{g}"), "作業")
                    .with_status("completed"),
            );
        }
        let groups = store.fetch_all_groups().unwrap();
        let patterns = success_patterns(&groups, &store);
        assert_eq!(patterns.len(), MAX_SUCCESS_PATTERNS);
    }
}
