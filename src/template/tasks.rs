//! Fixed task DAGs for each app-type branch.
//!
//! Day estimates are fractions of the scale-derived base duration, floored
//! at one day. Dependencies are title strings forming a linear-ish chain
//! within the branch; they are advisory metadata and deliberately not
//! validated against the task set.

use crate::analysis::Category;
use crate::model::{GeneratedTask, Priority};

use super::Branch;

/// Scales a base duration by a fraction, rounding and flooring at one day.
pub fn scaled_days(base_days: u32, fraction: f64) -> u32 {
    ((base_days as f64 * fraction).round() as u32).max(1)
}

fn task(
    title: &str,
    description: &str,
    priority: Priority,
    days: u32,
    category: Category,
    dependencies: &[&str],
) -> GeneratedTask {
    GeneratedTask {
        title: title.to_string(),
        description: description.to_string(),
        priority,
        estimated_days: days,
        category: category.label().to_string(),
        dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
    }
}

/// Generates the fixed task set of a branch. The software branch also
/// inspects the app type for web/mobile hints and adds the matching
/// sub-tasks on top of its shared core.
pub fn generate_tasks(branch: Branch, app_type: &str, base_days: u32) -> Vec<GeneratedTask> {
    match branch {
        Branch::PersonalLearning => learning_tasks(base_days),
        Branch::Research => research_tasks(base_days),
        Branch::Event => event_tasks(base_days),
        Branch::Marketing => marketing_tasks(base_days),
        Branch::Software => software_tasks(app_type, base_days),
        Branch::Generic => generic_tasks(base_days),
    }
}

fn learning_tasks(base: u32) -> Vec<GeneratedTask> {
    vec![
        task(
            "学習計画の策定",
            "学習の目標と進め方を決めて、週ごとの配分を書き出す",
            Priority::High,
            scaled_days(base, 0.1),
            Category::Planning,
            &[],
        ),
        task(
            "教材・参考資料の収集",
            "計画に沿って教材や参考資料を揃える",
            Priority::Medium,
            scaled_days(base, 0.15),
            Category::Research,
            &["学習計画の策定"],
        ),
        task(
            "基礎内容の学習",
            "基礎から順番に内容を学ぶ",
            Priority::High,
            scaled_days(base, 0.35),
            Category::Development,
            &["教材・参考資料の収集"],
        ),
        task(
            "演習・実践",
            "学んだ内容を問題演習や制作で実践する",
            Priority::Medium,
            scaled_days(base, 0.25),
            Category::Development,
            &["基礎内容の学習"],
        ),
        task(
            "理解度の確認・振り返り",
            "身についていない箇所を洗い出して復習する",
            Priority::Low,
            scaled_days(base, 0.15),
            Category::Testing,
            &["演習・実践"],
        ),
    ]
}

fn research_tasks(base: u32) -> Vec<GeneratedTask> {
    vec![
        task(
            "研究テーマの明確化",
            "何を明らかにしたいかを一文にまとめる",
            Priority::High,
            scaled_days(base, 0.1),
            Category::Planning,
            &[],
        ),
        task(
            "先行研究・文献調査",
            "関連する文献を集めて要点を整理する",
            Priority::High,
            scaled_days(base, 0.25),
            Category::Research,
            &["研究テーマの明確化"],
        ),
        task(
            "調査・実験の実施",
            "計画した調査や実験を実施して記録を残す",
            Priority::High,
            scaled_days(base, 0.35),
            Category::Development,
            &["先行研究・文献調査"],
        ),
        task(
            "結果の分析・考察",
            "得られた結果を分析して考察をまとめる",
            Priority::Medium,
            scaled_days(base, 0.15),
            Category::Testing,
            &["調査・実験の実施"],
        ),
        task(
            "レポート・論文の執筆",
            "構成を決めてレポートにまとめる",
            Priority::Medium,
            scaled_days(base, 0.15),
            Category::Documentation,
            &["結果の分析・考察"],
        ),
    ]
}

fn event_tasks(base: u32) -> Vec<GeneratedTask> {
    vec![
        task(
            "イベント概要の企画",
            "目的・対象・規模を決めて企画書にまとめる",
            Priority::High,
            scaled_days(base, 0.1),
            Category::Planning,
            &[],
        ),
        task(
            "会場・日程の調整",
            "候補の会場と日程を調べて関係者と調整する",
            Priority::High,
            scaled_days(base, 0.15),
            Category::Research,
            &["イベント概要の企画"],
        ),
        task(
            "告知物のデザイン作成",
            "ポスターや告知ページのデザインを作る",
            Priority::Medium,
            scaled_days(base, 0.2),
            Category::UxDesign,
            &["イベント概要の企画"],
        ),
        task(
            "当日の運営準備",
            "進行表と役割分担を作り、必要な物品を揃える",
            Priority::Medium,
            scaled_days(base, 0.35),
            Category::Development,
            &["会場・日程の調整", "告知物のデザイン作成"],
        ),
        task(
            "イベント開催・振り返り",
            "当日を運営し、終了後に振り返りを行う",
            Priority::Medium,
            scaled_days(base, 0.2),
            Category::Deployment,
            &["当日の運営準備"],
        ),
    ]
}

fn marketing_tasks(base: u32) -> Vec<GeneratedTask> {
    vec![
        task(
            "ターゲット・目標の設定",
            "届けたい相手と数値目標を決める",
            Priority::High,
            scaled_days(base, 0.1),
            Category::Planning,
            &[],
        ),
        task(
            "市場・競合の調査",
            "類似の取り組みを調べて参考になる点を整理する",
            Priority::High,
            scaled_days(base, 0.2),
            Category::Research,
            &["ターゲット・目標の設定"],
        ),
        task(
            "施策とコンテンツの設計",
            "どの媒体で何を発信するかを設計する",
            Priority::Medium,
            scaled_days(base, 0.2),
            Category::Design,
            &["市場・競合の調査"],
        ),
        task(
            "コンテンツの制作",
            "設計に沿って記事やクリエイティブを制作する",
            Priority::Medium,
            scaled_days(base, 0.25),
            Category::UxDesign,
            &["施策とコンテンツの設計"],
        ),
        task(
            "施策の実施",
            "制作したコンテンツを配信・掲出する",
            Priority::Medium,
            scaled_days(base, 0.15),
            Category::Deployment,
            &["コンテンツの制作"],
        ),
        task(
            "効果測定・改善",
            "目標に対する結果を測って次の打ち手を決める",
            Priority::Low,
            scaled_days(base, 0.1),
            Category::Testing,
            &["施策の実施"],
        ),
    ]
}

fn software_tasks(app_type: &str, base: u32) -> Vec<GeneratedTask> {
    let lowered = app_type.to_lowercase();
    let mut tasks = vec![
        task(
            "要件定義",
            "作りたいものと必要な機能を洗い出して整理する",
            Priority::High,
            scaled_days(base, 0.1),
            Category::Planning,
            &[],
        ),
        task(
            "基本設計・技術選定",
            "画面構成とデータ構造を決め、使う技術を選ぶ",
            Priority::High,
            scaled_days(base, 0.15),
            Category::Design,
            &["要件定義"],
        ),
        task(
            "コア機能の実装",
            "中心となる機能から順に実装する",
            Priority::High,
            scaled_days(base, 0.3),
            Category::Development,
            &["基本設計・技術選定"],
        ),
    ];

    if lowered.contains("web") || lowered.contains("ウェブ") {
        tasks.push(task(
            "フロントエンド画面の実装",
            "ブラウザで動く画面を実装する",
            Priority::Medium,
            scaled_days(base, 0.2),
            Category::Development,
            &["基本設計・技術選定"],
        ));
    }
    if lowered.contains("モバイル") || lowered.contains("ios") || lowered.contains("android") {
        tasks.push(task(
            "モバイルアプリの実装",
            "モバイル端末向けの画面と動作を実装する",
            Priority::Medium,
            scaled_days(base, 0.2),
            Category::Development,
            &["基本設計・技術選定"],
        ));
    }

    tasks.push(task(
        "テスト・不具合修正",
        "ひととおり動かして不具合を直す",
        Priority::Medium,
        scaled_days(base, 0.15),
        Category::Testing,
        &["コア機能の実装"],
    ));
    tasks.push(task(
        "リリース準備・公開",
        "公開手順を確認して利用できる状態にする",
        Priority::Low,
        scaled_days(base, 0.1),
        Category::Deployment,
        &["テスト・不具合修正"],
    ));

    tasks
}

fn generic_tasks(base: u32) -> Vec<GeneratedTask> {
    vec![
        task(
            "目標と進め方の整理",
            "何をいつまでにやるかを決めて共有する",
            Priority::High,
            scaled_days(base, 0.1),
            Category::Planning,
            &[],
        ),
        task(
            "必要な情報の収集",
            "進めるために必要な情報や材料を集める",
            Priority::Medium,
            scaled_days(base, 0.2),
            Category::Research,
            &["目標と進め方の整理"],
        ),
        task(
            "作業の実施",
            "計画に沿って作業を進める",
            Priority::High,
            scaled_days(base, 0.45),
            Category::Development,
            &["必要な情報の収集"],
        ),
        task(
            "成果の確認",
            "目標に照らして成果を確認する",
            Priority::Medium,
            scaled_days(base, 0.15),
            Category::Testing,
            &["作業の実施"],
        ),
        task(
            "まとめ・共有",
            "結果をまとめて関係者に共有する",
            Priority::Low,
            scaled_days(base, 0.1),
            Category::Documentation,
            &["成果の確認"],
        ),
    ]
}
