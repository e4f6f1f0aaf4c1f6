//! End-to-end report scenarios over the aggregate → compose pipeline,
//! including the exact truncation and ranking rules.

use chrono::{DateTime, TimeZone, Utc};
use tasklens_core::{AnalysisInput, Priority, Task, TaskStatus, aggregate, compose, local_report};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

fn pending(title: &str) -> Task {
    Task::new(title).with_priority(Priority::Medium)
}

#[test]
fn test_single_overdue_high_priority_task() {
    let tasks = vec![
        Task::new("レポート提出")
            .with_priority(Priority::High)
            .with_due_date("2020/01/01"),
    ];
    let stats = aggregate(&tasks, Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap());
    let report = compose("佐藤", &stats);

    assert_eq!(
        report,
        "佐藤さんのタスク状況\n\
         \n\
         【サマリー】\n\
         全タスク数: 1件\n\
         完了: 0件\n\
         未完了: 1件\n\
         期限切れ: 1件\n\
         \n\
         【優先度別】\n\
         高: 1件\n\
         中: 0件\n\
         低: 0件\n\
         \n\
         【要対応タスク】\n\
         1. レポート提出 （優先度: 高）\n\
         \n\
         【期限切れタスク】\n\
         1. レポート提出 （期限: 2020/01/01, 優先度: 高）"
    );
    assert_eq!(report.matches("レポート提出 （期限:").count(), 1);
}

#[test]
fn test_pending_section_truncates_past_five() {
    let tasks: Vec<Task> = (1..=7).map(|i| pending(&format!("task{i}"))).collect();
    let stats = aggregate(&tasks, now());
    let report = compose("佐藤", &stats);

    for i in 1..=5 {
        assert!(report.contains(&format!("{i}. task{i} （優先度: 中）")));
    }
    assert!(!report.contains("task6"));
    assert!(!report.contains("task7"));
    assert!(report.contains("...他 2件"));
}

#[test]
fn test_pending_section_at_limit_has_no_overflow_line() {
    let tasks: Vec<Task> = (1..=5).map(|i| pending(&format!("task{i}"))).collect();
    let stats = aggregate(&tasks, now());
    let report = compose("佐藤", &stats);

    assert!(report.contains("5. task5"));
    assert!(!report.contains("...他"));
}

#[test]
fn test_overdue_section_truncates_past_three() {
    let tasks: Vec<Task> = (1..=4)
        .map(|i| pending(&format!("late{i}")).with_due_date("2020/01/01"))
        .collect();
    let stats = aggregate(&tasks, now());
    let report = compose("佐藤", &stats);

    let overdue_section = report.split("【期限切れタスク】").nth(1).unwrap();
    assert!(overdue_section.contains("3. late3"));
    assert!(!overdue_section.contains("late4"));
    assert!(overdue_section.contains("...他 1件"));
}

#[test]
fn test_completed_ranked_by_updated_at_descending() {
    let tasks = vec![
        Task::new("older")
            .with_status(TaskStatus::Completed)
            .with_updated_at("2024-05-01T10:00:00Z"),
        Task::new("newest")
            .with_status(TaskStatus::Completed)
            .with_updated_at("2024-05-20T10:00:00Z"),
        Task::new("no-timestamp").with_status(TaskStatus::Completed),
        Task::new("middle")
            .with_status(TaskStatus::Completed)
            .with_updated_at("2024-05-10T10:00:00Z"),
    ];
    let stats = aggregate(&tasks, now());
    let report = compose("佐藤", &stats);

    let completed_section = report.split("【最近完了したタスク】").nth(1).unwrap();
    assert!(
        completed_section.contains("1. newest\n2. middle\n3. older\n...他 1件"),
        "section was: {completed_section}"
    );
    // Absent updated_at sorts as "", i.e. dead last.
    assert!(!completed_section.contains("no-timestamp"));
}

#[test]
fn test_completed_ranking_ties_preserve_input_order() {
    let tasks = vec![
        Task::new("first")
            .with_status(TaskStatus::Completed)
            .with_updated_at("2024-05-10"),
        Task::new("second")
            .with_status(TaskStatus::Completed)
            .with_updated_at("2024-05-10"),
    ];
    let stats = aggregate(&tasks, now());
    let report = compose("佐藤", &stats);
    assert!(report.contains("1. first\n2. second"));
}

#[test]
fn test_local_report_from_json_payload() {
    let input: AnalysisInput = serde_json::from_str(
        r#"{
            "user": {"username": "山田"},
            "tasks": [
                {"title": "見積もり", "priority": "high", "status": "pending",
                 "due_date": "2024-05-01T10:00:00Z"},
                {"title": "請求書", "priority": "low", "status": "completed",
                 "updated_at": "2024-05-28T09:00:00Z"},
                {"title": "議事録", "due_date": "someday"}
            ]
        }"#,
    )
    .unwrap();

    let report = local_report(&input.user, &input.tasks, now());
    assert!(report.starts_with("山田さんのタスク状況"));
    assert!(report.contains("全タスク数: 3件"));
    assert!(report.contains("完了: 1件"));
    assert!(report.contains("未完了: 2件"));
    assert!(report.contains("期限切れ: 1件"));
    // ISO due date is displayed date-only.
    assert!(report.contains("1. 見積もり （期限: 2024-05-01, 優先度: 高）"));
    // Unparseable due date never reaches the overdue section.
    assert!(!report.contains("議事録 （期限:"));
}

#[test]
fn test_empty_payload_yields_default_empty_report() {
    let input: AnalysisInput = serde_json::from_str("{}").unwrap();
    let report = local_report(&input.user, &input.tasks, now());
    assert_eq!(report, "担当者さんのタスク状況\n\n登録されているタスクはありません。");
}
