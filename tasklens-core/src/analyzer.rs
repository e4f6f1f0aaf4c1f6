//! Strategy selection: remote summarizer first, deterministic local report
//! as the fallback.

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::report::compose;
use crate::stats::aggregate;
use crate::task::{Task, UserInfo};

/// A report strategy that may fail (the remote, model-backed one). The
/// local strategy is not behind this trait because it cannot fail.
pub trait Summarizer {
    fn summarize(&self, user: &UserInfo, tasks: &[Task]) -> Result<String>;
}

/// Produce the status report.
///
/// Tries `remote` when present; any failure is logged and silently routed
/// to the deterministic local report. `None` skips straight to the local
/// path. Either way the caller gets a report string, never an error.
pub fn analyze(
    user: &UserInfo,
    tasks: &[Task],
    now: DateTime<Utc>,
    remote: Option<&dyn Summarizer>,
) -> String {
    if let Some(remote) = remote {
        match remote.summarize(user, tasks) {
            Ok(text) => return text,
            Err(err) => {
                tracing::warn!("remote summary failed, falling back to local report: {err:#}");
            }
        }
    }

    local_report(user, tasks, now)
}

/// The deterministic strategy on its own: aggregate, then compose.
pub fn local_report(user: &UserInfo, tasks: &[Task], now: DateTime<Utc>) -> String {
    let stats = aggregate(tasks, now);
    compose(user.username(), &stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use chrono::TimeZone;

    struct FixedSummarizer(&'static str);

    impl Summarizer for FixedSummarizer {
        fn summarize(&self, _user: &UserInfo, _tasks: &[Task]) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingSummarizer;

    impl Summarizer for FailingSummarizer {
        fn summarize(&self, _user: &UserInfo, _tasks: &[Task]) -> Result<String> {
            bail!("quota exceeded")
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_remote_success_is_returned_verbatim() {
        let user = UserInfo::named("田中");
        let tasks = vec![Task::new("a")];
        let remote = FixedSummarizer("Hello report");
        let out = analyze(&user, &tasks, now(), Some(&remote));
        assert_eq!(out, "Hello report");
    }

    #[test]
    fn test_remote_failure_falls_back_to_local() {
        let user = UserInfo::named("田中");
        let tasks = vec![Task::new("a")];
        let out = analyze(&user, &tasks, now(), Some(&FailingSummarizer));
        assert_eq!(out, local_report(&user, &tasks, now()));
        assert!(out.starts_with("田中さんのタスク状況"));
    }

    #[test]
    fn test_no_remote_goes_straight_to_local() {
        let user = UserInfo::default();
        let out = analyze(&user, &[], now(), None);
        assert_eq!(out, "担当者さんのタスク状況\n\n登録されているタスクはありません。");
    }
}
