//! Deterministic report assembly.
//!
//! Section order, triggers and truncation limits are fixed business rules:
//! title → summary → priority breakdown → needs-attention (first 5 pending,
//! input order) → overdue (first 3) → recently completed (first 3 by
//! `updated_at` descending). Sections with nothing to show are omitted.

use crate::stats::TaskStats;
use crate::task::Task;

const PENDING_LIMIT: usize = 5;
const OVERDUE_LIMIT: usize = 3;
const COMPLETED_LIMIT: usize = 3;

/// Assemble the sectioned status report. Deterministic: identical input
/// yields byte-identical output.
pub fn compose(username: &str, stats: &TaskStats) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("{username}さんのタスク状況"));
    lines.push(String::new());

    if stats.total == 0 {
        lines.push("登録されているタスクはありません。".to_string());
        return lines.join("\n");
    }

    lines.push("【サマリー】".to_string());
    lines.push(format!("全タスク数: {}件", stats.total));
    lines.push(format!("完了: {}件", stats.completed.len()));
    lines.push(format!("未完了: {}件", stats.pending.len()));
    lines.push(format!("期限切れ: {}件", stats.overdue.len()));
    lines.push(String::new());

    lines.push("【優先度別】".to_string());
    lines.push(format!("高: {}件", stats.high));
    lines.push(format!("中: {}件", stats.medium));
    lines.push(format!("低: {}件", stats.low));

    if !stats.pending.is_empty() {
        lines.push(String::new());
        lines.push("【要対応タスク】".to_string());
        for (i, task) in stats.pending.iter().take(PENDING_LIMIT).enumerate() {
            lines.push(format!(
                "{}. {} （優先度: {}）",
                i + 1,
                task.title(),
                task.priority.label()
            ));
        }
        push_overflow(&mut lines, stats.pending.len(), PENDING_LIMIT);
    }

    if !stats.overdue.is_empty() {
        lines.push(String::new());
        lines.push("【期限切れタスク】".to_string());
        for (i, task) in stats.overdue.iter().take(OVERDUE_LIMIT).enumerate() {
            lines.push(format!(
                "{}. {} （期限: {}, 優先度: {}）",
                i + 1,
                task.title(),
                display_due_date(task),
                task.priority.label()
            ));
        }
        push_overflow(&mut lines, stats.overdue.len(), OVERDUE_LIMIT);
    }

    if !stats.completed.is_empty() {
        lines.push(String::new());
        lines.push("【最近完了したタスク】".to_string());
        let mut recent: Vec<&Task> = stats.completed.clone();
        // Stable sort: ties keep input order.
        recent.sort_by(|a, b| b.updated_at_key().cmp(a.updated_at_key()));
        for (i, task) in recent.iter().take(COMPLETED_LIMIT).enumerate() {
            lines.push(format!("{}. {}", i + 1, task.title()));
        }
        push_overflow(&mut lines, recent.len(), COMPLETED_LIMIT);
    }

    lines.join("\n")
}

fn push_overflow(lines: &mut Vec<String>, count: usize, limit: usize) {
    if count > limit {
        lines.push(format!("...他 {}件", count - limit));
    }
}

/// Date part only: everything from the `T` separator on is dropped, so an
/// ISO timestamp renders as its date.
fn display_due_date(task: &Task) -> &str {
    let raw = task.due_date().unwrap_or("不明");
    raw.split('T').next().unwrap_or(raw)
}
