//! Similarity scoring between a project input and historical groups.

use std::cmp::Ordering;

use crate::history::{GroupRecord, HistoryStore};
use crate::model::{ProjectInput, SimilarGroup};

use super::keywords::extract_keywords;

/// Weight of the keyword-overlap component
pub const KEYWORD_WEIGHT: f64 = 0.6;
/// Weight of the team-size proximity component
pub const TEAM_SIZE_WEIGHT: f64 = 0.4;
/// Minimum score for a group to count as similar
pub const SIMILARITY_THRESHOLD: f64 = 0.3;
/// Maximum number of similar groups reported
pub const MAX_SIMILAR_GROUPS: usize = 5;

/// Scores how similar a historical group is to the current input.
///
/// Weighted sum of keyword overlap between the input's type+description and
/// the group description (0.6), and team-size proximity (0.4). Always in
/// `[0, 1]`, including for empty descriptions and zero member counts.
pub fn similarity(input: &ProjectInput, group: &GroupRecord) -> f64 {
    let input_keywords = extract_keywords(&format!("{} {}", input.app_type, input.description));
    let group_keywords = extract_keywords(&group.description);

    let larger = input_keywords.len().max(group_keywords.len());
    let overlap = if larger == 0 {
        0.0
    } else {
        input_keywords.intersection(&group_keywords).count() as f64 / larger as f64
    };

    let denom = group.member_count.max(input.team_size).max(1) as f64;
    let gap = (group.member_count as f64 - input.team_size as f64).abs();
    let proximity = 1.0 - gap / denom;

    KEYWORD_WEIGHT * overlap + TEAM_SIZE_WEIGHT * proximity
}

/// Selects the groups most similar to the input and annotates each with its
/// task completion rate.
///
/// Groups scoring above the threshold are sorted by score descending and
/// capped at [`MAX_SIMILAR_GROUPS`]. A failed per-group task fetch degrades
/// that group's completion rate to 0.0 and logs a warning.
pub fn find_similar_groups(
    input: &ProjectInput,
    groups: &[GroupRecord],
    store: &dyn HistoryStore,
) -> Vec<SimilarGroup> {
    let mut scored: Vec<(f64, &GroupRecord)> = groups
        .iter()
        .map(|group| (similarity(input, group), group))
        .filter(|(score, _)| *score > SIMILARITY_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.truncate(MAX_SIMILAR_GROUPS);

    scored
        .into_iter()
        .map(|(score, group)| SimilarGroup {
            group_id: group.id.clone(),
            name: group.name.clone(),
            score,
            member_count: group.member_count,
            completion_rate: completion_rate(store, &group.id),
        })
        .collect()
}

fn completion_rate(store: &dyn HistoryStore, group_id: &str) -> f64 {
    let tasks = match store.fetch_group_tasks(group_id) {
        Ok(tasks) => tasks,
        Err(e) => {
            tracing::warn!("failed to fetch tasks for group {}: {}", group_id, e);
            return 0.0;
        }
    };

    if tasks.is_empty() {
        return 0.0;
    }
    let completed = tasks.iter().filter(|t| t.is_completed()).count();
    completed as f64 / tasks.len() as f64
}
