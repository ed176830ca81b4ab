//! Required-field validation

use crate::notify::{NotificationCenter, NotificationKind};

/// Check required fields; Err carries the names needing error styling
///
/// A field is blank when its trimmed value is empty.
pub fn validate_required<'a>(fields: &[(&'a str, &str)]) -> Result<(), Vec<&'a str>> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}

/// Submission guard: blocks and raises a notification when required fields
/// are blank. Returns whether the submission proceeds.
pub fn guard_submission(
    fields: &[(&str, &str)],
    notifications: &mut NotificationCenter,
) -> bool {
    match validate_required(fields) {
        Ok(()) => true,
        Err(_) => {
            notifications.push(
                "Please fill in all required fields",
                NotificationKind::Error,
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_present() {
        let fields = [("symbol", "AAPL"), ("quantity", "5"), ("action", "buy")];
        assert!(validate_required(&fields).is_ok());
    }

    #[test]
    fn test_blank_fields_reported() {
        let fields = [("symbol", "AAPL"), ("quantity", ""), ("action", "   ")];
        let missing = validate_required(&fields).unwrap_err();
        assert_eq!(missing, vec!["quantity", "action"]);
    }

    #[test]
    fn test_guard_blocks_and_notifies() {
        let mut notifications = NotificationCenter::default();
        assert!(!guard_submission(&[("quantity", "")], &mut notifications));
        assert_eq!(notifications.visible().len(), 1);
        assert_eq!(
            notifications.visible()[0].message,
            "Please fill in all required fields"
        );
    }

    #[test]
    fn test_guard_passes_clean_form() {
        let mut notifications = NotificationCenter::default();
        assert!(guard_submission(&[("quantity", "5")], &mut notifications));
        assert!(notifications.is_empty());
    }
}
