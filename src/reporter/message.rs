use serde_derive::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
    NotRun,
}

impl Status {
    /// Value of the `expected` field: present only when the outcome deviates
    /// from a pass.
    pub fn expected(self) -> Option<Status> {
        match self {
            Status::Pass => None,
            Status::Fail | Status::NotRun => Some(Status::Pass),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Status::Pass => "PASS".fmt(f),
            Status::Fail => "FAIL".fmt(f),
            Status::NotRun => "NOTRUN".fmt(f),
        }
    }
}

/// A single record published to the sink, tagged by its `action`.
///
/// `test` is always written, as `null` when no file could be resolved.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Message {
    TestStart {
        test: Option<String>,
    },
    TestEnd {
        test: Option<String>,
        status: Status,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expected: Option<Status>,
    },
    TestStatus {
        test: Option<String>,
        subtest: String,
        status: Status,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expected: Option<Status>,
    },
    SuiteEnd,
    Fin,
}

impl Message {
    pub fn action(&self) -> &'static str {
        match self {
            Message::TestStart { .. } => "test_start",
            Message::TestEnd { .. } => "test_end",
            Message::TestStatus { .. } => "test_status",
            Message::SuiteEnd => "suite_end",
            Message::Fin => "fin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Message, Status};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_unresolved_file_is_written_as_null() {
        let value = serde_json::to_value(Message::TestStart { test: None }).unwrap();

        assert_eq!(value, json!({"action": "test_start", "test": null}));
    }

    #[test]
    fn test_expected_is_omitted_for_pending() {
        let message = Message::TestStatus {
            test: Some("a.js".to_owned()),
            subtest: "skipped".to_owned(),
            status: Status::NotRun,
            expected: None,
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({"action": "test_status", "test": "a.js", "subtest": "skipped", "status": "NOTRUN"})
        );
    }

    #[test]
    fn test_closing_markers_carry_only_action() {
        assert_eq!(serde_json::to_value(Message::SuiteEnd).unwrap(), json!({"action": "suite_end"}));
        assert_eq!(serde_json::to_value(Message::Fin).unwrap(), json!({"action": "fin"}));
    }

    #[test]
    fn test_expected_follows_status() {
        assert_eq!(Status::Pass.expected(), None);
        assert_eq!(Status::Fail.expected(), Some(Status::Pass));
        assert_eq!(Status::NotRun.expected(), Some(Status::Pass));
    }
}
