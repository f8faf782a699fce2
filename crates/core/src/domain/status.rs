// Status Domain Model

use crate::domain::Usage;

/// Prefix of the line printed by the entry point
pub const STATUS_LINE_PREFIX: &str = "Status:";

/// Health verdict derived from a single usage reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotOk,
}

impl Status {
    /// Usage at or below the threshold is OK; anything above is not
    pub fn from_usage(usage: Usage) -> Self {
        if usage.is_within_threshold() {
            Status::Ok
        } else {
            Status::NotOk
        }
    }

    pub fn is_ok(self) -> bool {
        matches!(self, Status::Ok)
    }

    /// Render as `Status:OK` / `Status:Not OK`
    pub fn report_line(self) -> String {
        format!("{}{}", STATUS_LINE_PREFIX, self)
    }
}

impl From<bool> for Status {
    fn from(ok: bool) -> Self {
        if ok {
            Status::Ok
        } else {
            Status::NotOk
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::NotOk => write!(f, "Not OK"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(percent: u8) -> Usage {
        Usage::new(percent).unwrap()
    }

    #[test]
    fn test_ok_up_to_and_including_fifty() {
        for percent in 0..=50 {
            assert_eq!(Status::from_usage(usage(percent)), Status::Ok, "usage {percent}");
        }
    }

    #[test]
    fn test_not_ok_above_fifty() {
        for percent in 51..100 {
            assert_eq!(
                Status::from_usage(usage(percent)),
                Status::NotOk,
                "usage {percent}"
            );
        }
    }

    #[test]
    fn test_report_lines() {
        assert_eq!(Status::Ok.report_line(), "Status:OK");
        assert_eq!(Status::NotOk.report_line(), "Status:Not OK");
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Status::from(true), Status::Ok);
        assert_eq!(Status::from(false), Status::NotOk);
        assert!(!Status::NotOk.is_ok());
    }
}
