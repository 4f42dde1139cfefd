//! Task categorization against a fixed, ordered keyword taxonomy.

use crate::history::TaskRecord;

/// Closed set of task categories used for aggregation and phase grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Design,
    Development,
    Testing,
    Research,
    Planning,
    UxDesign,
    Documentation,
    Deployment,
    Other,
}

impl Category {
    /// Display label, as stored in task and aggregate records
    pub fn label(&self) -> &'static str {
        match self {
            Category::Design => "設計・設計書",
            Category::Development => "開発・実装",
            Category::Testing => "テスト・検証",
            Category::Research => "調査・リサーチ",
            Category::Planning => "計画・企画",
            Category::UxDesign => "デザイン・UI/UX",
            Category::Documentation => "ドキュメント作成",
            Category::Deployment => "リリース・公開",
            Category::Other => "その他",
        }
    }
}

/// Ordered classification rules: first matching row wins.
///
/// The match order is an invariant: keywords may occur in several rows
/// (a title can mention both 実装 and テスト) and the earlier row decides.
/// Keywords are matched case-insensitively as substrings of title and
/// description; the lowercase latin forms cover mixed-language records.
const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (Category::Design, &["設計", "アーキテクチャ", "仕様"]),
    (
        Category::Development,
        &["開発", "実装", "コーディング", "構築", "develop", "implement"],
    ),
    (
        Category::Testing,
        &["テスト", "検証", "動作確認", "デバッグ", "test", "qa"],
    ),
    (
        Category::Research,
        &["調査", "リサーチ", "分析", "research"],
    ),
    (
        Category::Planning,
        &["計画", "企画", "スケジュール", "plan"],
    ),
    (
        Category::UxDesign,
        &["デザイン", "ui", "ux", "ワイヤーフレーム", "design"],
    ),
    (
        Category::Documentation,
        &["ドキュメント", "資料", "マニュアル", "文書", "document"],
    ),
    (
        Category::Deployment,
        &["リリース", "デプロイ", "公開", "deploy", "release"],
    ),
];

/// Assigns a historical task to a category.
///
/// Case-insensitive substring matching of title+description against
/// [`CATEGORY_RULES`]; records matching nothing fall into
/// [`Category::Other`].
pub fn categorize(task: &TaskRecord) -> Category {
    let text = format!("{} {}", task.title, task.description).to_lowercase();
    for (category, needles) in CATEGORY_RULES {
        if needles.iter().any(|needle| text.contains(needle)) {
            return *category;
        }
    }
    Category::Other
}
