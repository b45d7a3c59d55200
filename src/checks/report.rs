use crate::checks::CheckResult;
use serde::Serialize;

/// Aggregated outcome of a full check run.
///
/// Merges the per-checker results in run order and decides the overall
/// success and hard-fail verdicts the caller turns into exit codes.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    results: Vec<CheckResult>,
}

impl CheckReport {
    pub fn new(results: Vec<CheckResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn successful(&self) -> bool {
        self.results.iter().all(|result| result.successful)
    }

    pub fn hard_fail(&self) -> bool {
        self.results.iter().any(|result| result.hard_fail)
    }

    /// Combined notification text: one labelled section per unsuccessful
    /// checker, in run order. Empty when every check passed.
    pub fn notification_text(&self) -> String {
        let sections: Vec<String> = self
            .results
            .iter()
            .filter(|result| !result.successful)
            .map(|result| format!("{} check found issues:\n{}", result.checker, result.notification))
            .collect();

        if sections.is_empty() {
            String::new()
        } else {
            format!("Failed checks:\n\n{}", sections.join("\n\n"))
        }
    }

    /// Machine-readable rendering for callers that post results elsewhere.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckerKind;
    use pretty_assertions::assert_eq;

    fn passed() -> CheckResult {
        CheckResult {
            checker: CheckerKind::Spell,
            successful: true,
            hard_fail: false,
            notification: String::new(),
        }
    }

    fn failed(notification: &str, hard_fail: bool) -> CheckResult {
        CheckResult {
            checker: CheckerKind::Spell,
            successful: false,
            hard_fail,
            notification: notification.to_string(),
        }
    }

    #[test]
    fn all_passing_report_is_successful_and_silent() {
        let report = CheckReport::new(vec![passed()]);
        assert!(report.successful());
        assert!(!report.hard_fail());
        assert_eq!(report.notification_text(), "");
    }

    #[test]
    fn empty_report_is_successful() {
        let report = CheckReport::new(Vec::new());
        assert!(report.successful());
        assert!(!report.hard_fail());
    }

    #[test]
    fn failed_sections_are_labelled_and_ordered() {
        let report = CheckReport::new(vec![passed(), failed("* 'strng'\n* 'erors'", false)]);
        assert!(!report.successful());
        assert!(!report.hard_fail());
        assert_eq!(
            report.notification_text(),
            "Failed checks:\n\nspell check found issues:\n* 'strng'\n* 'erors'"
        );
    }

    #[test]
    fn any_hard_fail_escalates_the_report() {
        let report = CheckReport::new(vec![passed(), failed("* 'strng'", true)]);
        assert!(report.hard_fail());
    }

    #[test]
    fn json_rendering_carries_the_result_fields() {
        let report = CheckReport::new(vec![failed("* 'strng'", true)]);
        let json = report.to_json().unwrap();
        assert!(json.contains("\"checker\": \"spell\""));
        assert!(json.contains("\"successful\": false"));
        assert!(json.contains("\"hard_fail\": true"));
        assert!(json.contains("* 'strng'"));
    }
}
