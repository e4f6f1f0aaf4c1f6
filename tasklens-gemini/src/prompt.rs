//! Prompt construction for the remote summarizer.

use tasklens_core::{Task, TaskStatus, UserInfo};

/// One line per task: title, priority label, description, due date,
/// creator, completion state.
fn task_line(task: &Task) -> String {
    let state = match task.status {
        TaskStatus::Completed => "完了",
        TaskStatus::Pending => "未完了",
    };
    format!(
        "{} {} {} 期限: {} 作成者: {} 状態: {}",
        task.title(),
        task.priority.label(),
        task.description(),
        task.due_date().unwrap_or("不明"),
        task.created_by(),
        state
    )
}

/// Build the analysis prompt sent to the text model: a concise, visually
/// scannable status summary for a team manager, required to open with the
/// same title line the local report uses.
pub fn build_analysis_prompt(user: &UserInfo, tasks: &[Task]) -> String {
    let username = user.username();

    let mut tasks_text = String::new();
    for task in tasks {
        tasks_text.push_str(&task_line(task));
        tasks_text.push('\n');
    }

    format!(
        "以下は{username}さんのタスクです。これらからこの人のタスク状況を分析して、\
         チーム管理者にわかりやすく、あまり長くならないように視覚的に見やすい形で出力して。\
         「{username}さんのタスク状況」という始まりから出力。\n\n{tasks_text}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklens_core::Priority;

    #[test]
    fn test_prompt_names_user_and_mandates_title() {
        let user = UserInfo::named("鈴木");
        let prompt = build_analysis_prompt(&user, &[]);
        assert!(prompt.contains("以下は鈴木さんのタスクです"));
        assert!(prompt.contains("「鈴木さんのタスク状況」という始まりから出力"));
    }

    #[test]
    fn test_task_serialized_on_one_line() {
        let task = Task::new("レビュー対応")
            .with_priority(Priority::High)
            .with_due_date("2024/07/01");
        let prompt = build_analysis_prompt(&UserInfo::default(), &[task]);
        assert!(prompt.contains("レビュー対応 高  期限: 2024/07/01 作成者: 不明 状態: 未完了"));
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let prompt = build_analysis_prompt(&UserInfo::default(), &[Task::default()]);
        assert!(prompt.contains("以下は担当者さんのタスクです"));
        assert!(prompt.contains("タスク   期限: 不明 作成者: 不明 状態: 未完了"));
    }
}
