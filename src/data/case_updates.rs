use crate::models::CaseUpdate;

/// Shown on the firm-client dashboard when the case-update fetch fails.
pub fn demo_case_updates() -> Vec<CaseUpdate> {
    let rows: [(&str, &str, &str, &str, &str, &str); 4] = [
        (
            "1",
            "hearing_date",
            "Court Hearing Scheduled",
            "Your court hearing has been scheduled for January 30, 2025 at 10:00 AM in Civil Court, Mumbai",
            "2025-01-20T10:00:00",
            "Adv. Rajesh Kumar",
        ),
        (
            "2",
            "document_submitted",
            "Documents Submitted to Court",
            "All required documents have been submitted to the court. Waiting for review.",
            "2025-01-18T15:30:00",
            "Adv. Rajesh Kumar",
        ),
        (
            "3",
            "meeting_scheduled",
            "Meeting with Lawyer",
            "Initial consultation meeting scheduled for January 25, 2025 at 3:00 PM at our office",
            "2025-01-15T09:00:00",
            "Manager - Shah & Associates",
        ),
        (
            "4",
            "progress_update",
            "Case Progress Update",
            "We have reviewed your case documents and prepared the initial petition. The case is progressing well.",
            "2025-01-12T14:00:00",
            "Adv. Rajesh Kumar",
        ),
    ];

    rows.iter()
        .map(|(id, kind, title, description, created_at, created_by)| CaseUpdate {
            id: id.to_string(),
            update_type: kind.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            created_by: created_by.to_string(),
            created_at: created_at.to_string(),
        })
        .collect()
}

/// Renders the backend's naive ISO timestamp as e.g. "January 20, 2025".
pub fn format_update_date(created_at: &str) -> String {
    let trimmed = created_at.split('.').next().unwrap_or(created_at);
    match chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        Ok(dt) => dt.format("%B %d, %Y").to_string(),
        Err(_) => created_at.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_updates_are_newest_first() {
        let updates = demo_case_updates();
        assert_eq!(updates.len(), 4);
        let dates: Vec<&str> = updates.iter().map(|u| u.created_at.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn update_dates_render_long_form() {
        assert_eq!(format_update_date("2025-01-20T10:00:00"), "January 20, 2025");
        assert_eq!(format_update_date("2025-01-20T10:00:00.123456"), "January 20, 2025");
        assert_eq!(format_update_date("yesterday"), "yesterday");
    }
}
