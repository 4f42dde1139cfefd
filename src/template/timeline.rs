//! Folding generated tasks into a per-branch phase taxonomy.

use crate::analysis::Category;
use crate::model::{GeneratedTask, TimelinePhase};

use super::Branch;

struct PhaseSpec {
    name: &'static str,
    description: &'static str,
    categories: &'static [Category],
}

const LEARNING_PHASES: &[PhaseSpec] = &[
    PhaseSpec {
        name: "準備",
        description: "学習の進め方を決めて材料を揃える",
        categories: &[Category::Planning, Category::Research],
    },
    PhaseSpec {
        name: "学習",
        description: "実際に手を動かして学ぶ",
        categories: &[Category::Development],
    },
    PhaseSpec {
        name: "振り返り",
        description: "理解度を確かめて次に活かす",
        categories: &[Category::Testing],
    },
];

const RESEARCH_PHASES: &[PhaseSpec] = &[
    PhaseSpec {
        name: "準備",
        description: "テーマと進め方を固める",
        categories: &[Category::Planning],
    },
    PhaseSpec {
        name: "調査",
        description: "文献や資料にあたる",
        categories: &[Category::Research],
    },
    PhaseSpec {
        name: "実施・分析",
        description: "調査や実験を行い結果を分析する",
        categories: &[Category::Development, Category::Testing],
    },
    PhaseSpec {
        name: "まとめ",
        description: "成果を文書にまとめる",
        categories: &[Category::Documentation],
    },
];

const EVENT_PHASES: &[PhaseSpec] = &[
    PhaseSpec {
        name: "企画",
        description: "イベントの骨子を固める",
        categories: &[Category::Planning],
    },
    PhaseSpec {
        name: "準備",
        description: "開催に必要なものを揃える",
        categories: &[Category::Research, Category::UxDesign, Category::Development],
    },
    PhaseSpec {
        name: "開催",
        description: "当日を運営して締めくくる",
        categories: &[Category::Deployment],
    },
];

const MARKETING_PHASES: &[PhaseSpec] = &[
    PhaseSpec {
        name: "戦略",
        description: "目標を決めて市場を把握する",
        categories: &[Category::Planning, Category::Research],
    },
    PhaseSpec {
        name: "制作",
        description: "施策とコンテンツを形にする",
        categories: &[Category::Design, Category::UxDesign],
    },
    PhaseSpec {
        name: "実施・検証",
        description: "施策を実行して効果を確かめる",
        categories: &[Category::Deployment, Category::Testing],
    },
];

const SOFTWARE_PHASES: &[PhaseSpec] = &[
    PhaseSpec {
        name: "要件・設計",
        description: "何をどう作るかを固める",
        categories: &[Category::Planning, Category::Design],
    },
    PhaseSpec {
        name: "開発",
        description: "機能を実装する",
        categories: &[Category::Development],
    },
    PhaseSpec {
        name: "テスト",
        description: "動作を確認して直す",
        categories: &[Category::Testing],
    },
    PhaseSpec {
        name: "リリース",
        description: "公開して使える状態にする",
        categories: &[Category::Deployment],
    },
];

const GENERIC_PHASES: &[PhaseSpec] = &[
    PhaseSpec {
        name: "準備",
        description: "進め方を決めて材料を揃える",
        categories: &[Category::Planning, Category::Research],
    },
    PhaseSpec {
        name: "実施",
        description: "計画に沿って作業する",
        categories: &[Category::Development],
    },
    PhaseSpec {
        name: "確認・まとめ",
        description: "成果を確認してまとめる",
        categories: &[Category::Testing, Category::Documentation],
    },
];

/// Fixed phase taxonomy per branch, in timeline order.
fn taxonomy(branch: Branch) -> &'static [PhaseSpec] {
    match branch {
        Branch::PersonalLearning => LEARNING_PHASES,
        Branch::Research => RESEARCH_PHASES,
        Branch::Event => EVENT_PHASES,
        Branch::Marketing => MARKETING_PHASES,
        Branch::Software => SOFTWARE_PHASES,
        Branch::Generic => GENERIC_PHASES,
    }
}

/// Groups tasks by category into the branch's phase taxonomy. Phases with
/// no member tasks are dropped; a phase's duration is the sum of its member
/// tasks' estimates and its task list preserves generation order.
pub fn build_timeline(branch: Branch, tasks: &[GeneratedTask]) -> Vec<TimelinePhase> {
    taxonomy(branch)
        .iter()
        .filter_map(|spec| {
            let members: Vec<&GeneratedTask> = tasks
                .iter()
                .filter(|t| {
                    spec.categories
                        .iter()
                        .any(|c| c.label() == t.category)
                })
                .collect();
            if members.is_empty() {
                return None;
            }
            Some(TimelinePhase {
                phase: spec.name.to_string(),
                duration: members.iter().map(|t| t.estimated_days).sum(),
                tasks: members.iter().map(|t| t.title.clone()).collect(),
                description: spec.description.to_string(),
            })
        })
        .collect()
}
