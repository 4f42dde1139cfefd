//! Fixed recommendation rule tables keyed on app type, team size and scale.

use crate::model::ProjectInput;

use super::Branch;

/// App-type specific advice, one line per branch.
fn branch_line(branch: Branch) -> &'static str {
    match branch {
        Branch::PersonalLearning => {
            "毎日少しずつ進められるよう、学習時間を固定することをおすすめします"
        }
        Branch::Research => "調査した内容は出典と一緒に記録しておきましょう",
        Branch::Event => "関係者との連絡手段と決定事項の共有場所を早めに決めましょう",
        Branch::Marketing => "施策ごとに効果を測れる指標を先に決めておきましょう",
        Branch::Software => "動くものを早めに作り、小さく反復して改善しましょう",
        Branch::Generic => "まず全体の作業を洗い出して優先順位を付けましょう",
    }
}

/// Team-size advice, bucketed 1 / ≤3 / ≤5 / >5.
fn team_line(team_size: u32) -> &'static str {
    if team_size <= 1 {
        "一人で進めるので、進捗を記録して自己管理しやすくしましょう"
    } else if team_size <= 3 {
        "少人数なので役割分担を明確にして並行して進めましょう"
    } else if team_size <= 5 {
        "定期的に共有の場を設けて認識のずれを防ぎましょう"
    } else {
        "サブチームに分けてそれぞれに取りまとめ役を置きましょう"
    }
}

/// Scale advice keyed on the resolved base duration.
fn scale_line(base_days: u32) -> &'static str {
    match base_days {
        3 => "短期間なので最初に完成条件をはっきりさせましょう",
        14 => "週単位でマイルストーンを設定しましょう",
        45 => "途中で一度、中間の振り返りを入れましょう",
        135 => "フェーズごとに成果物を区切って進めましょう",
        270 => "長期の計画は状況に応じて定期的に見直しましょう",
        _ => "週単位でマイルストーンを設定しましょう",
    }
}

const DEADLINE_LINE: &str = "期限から逆算して余裕のあるスケジュールを組みましょう";

/// Assembles the template recommendations in fixed order: app type, team
/// size, scale, then a deadline reminder when one is set.
pub fn recommendations(input: &ProjectInput, branch: Branch, base_days: u32) -> Vec<String> {
    let mut lines = vec![
        branch_line(branch).to_string(),
        team_line(input.team_size).to_string(),
        scale_line(base_days).to_string(),
    ];
    if input.deadline.is_some() {
        lines.push(DEADLINE_LINE.to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_type_team_scale_deadline() {
        let input = ProjectInput::new("p", "ソフトウェア・アプリ開発")
            .with_team_size(4)
            .with_deadline("2025-01-31");
        let lines = recommendations(&input, Branch::Software, 45);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], branch_line(Branch::Software));
        assert_eq!(lines[1], team_line(4));
        assert_eq!(lines[2], scale_line(45));
        assert_eq!(lines[3], DEADLINE_LINE);
    }

    #[test]
    fn test_no_deadline_line_without_deadline() {
        let input = ProjectInput::new("p", "研究・調査");
        let lines = recommendations(&input, Branch::Research, 14);
        assert_eq!(lines.len(), 3);
        assert!(!lines.contains(&DEADLINE_LINE.to_string()));
    }

    #[test]
    fn test_team_size_buckets() {
        assert_eq!(team_line(0), team_line(1));
        assert_ne!(team_line(1), team_line(2));
        assert_eq!(team_line(2), team_line(3));
        assert_eq!(team_line(4), team_line(5));
        assert_ne!(team_line(5), team_line(6));
        assert_eq!(team_line(6), team_line(100));
    }

    #[test]
    fn test_unknown_base_days_reuse_default_scale_advice() {
        assert_eq!(scale_line(99), scale_line(14));
    }
}
