use crate::{api::MedicalCase, components::common::Tone};

/// Flat consultation fee shown when the API omits a case's revenue.
pub const DEFAULT_CASE_REVENUE: f64 = 200.0;

/// "in_progress" -> "IN PROGRESS"; only the first underscore is replaced.
pub fn status_label(status: &str) -> String {
    status.replacen('_', " ", 1).to_uppercase()
}

pub fn status_tone(status: &str) -> Tone {
    match status {
        "submitted" | "assigned" => Tone::Info,
        "processing" | "in_progress" => Tone::Warning,
        "report_submitted" | "completed" => Tone::Success,
        _ => Tone::Default,
    }
}

pub fn patient_label(patient_id: i64) -> String {
    format!("P-{}", patient_id)
}

pub fn doctor_label(doctor_id: Option<i64>) -> String {
    doctor_id
        .map(|id| format!("D-{}", id))
        .unwrap_or_else(|| "Unassigned".into())
}

pub fn history_or(case: &MedicalCase, missing: &str) -> String {
    case.medical_history
        .as_deref()
        .filter(|history| !history.trim().is_empty())
        .unwrap_or(missing)
        .to_string()
}

pub fn case_revenue(case: &MedicalCase) -> f64 {
    case.revenue
        .filter(|revenue| *revenue != 0.0)
        .unwrap_or(DEFAULT_CASE_REVENUE)
}

pub fn total_case_revenue(cases: &[MedicalCase]) -> f64 {
    cases.iter().map(case_revenue).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(status: &str, revenue: Option<f64>, history: Option<&str>) -> MedicalCase {
        MedicalCase {
            id: 1,
            patient_id: 1,
            doctor_id: None,
            status: status.into(),
            created_at: "2024-08-25T10:30:00Z".into(),
            updated_at: "2024-08-26T15:45:00Z".into(),
            medical_history: history.map(str::to_string),
            revenue,
        }
    }

    #[test]
    fn status_label_replaces_first_underscore_only() {
        assert_eq!(status_label("in_progress"), "IN PROGRESS");
        assert_eq!(status_label("report_submitted"), "REPORT SUBMITTED");
        assert_eq!(status_label("a_b_c"), "A B_C");
        assert_eq!(status_label("completed"), "COMPLETED");
    }

    #[test]
    fn status_tones_follow_case_lifecycle() {
        assert_eq!(status_tone("submitted"), Tone::Info);
        assert_eq!(status_tone("in_progress"), Tone::Warning);
        assert_eq!(status_tone("completed"), Tone::Success);
        assert_eq!(status_tone("archived"), Tone::Default);
    }

    #[test]
    fn labels_for_ids() {
        assert_eq!(patient_label(3), "P-3");
        assert_eq!(doctor_label(Some(2)), "D-2");
        assert_eq!(doctor_label(None), "Unassigned");
    }

    #[test]
    fn history_falls_back_when_missing_or_blank() {
        assert_eq!(history_or(&case("completed", None, None), "No history provided"), "No history provided");
        assert_eq!(history_or(&case("completed", None, Some(" ")), "none"), "none");
        assert_eq!(history_or(&case("completed", None, Some("Back pain")), "none"), "Back pain");
    }

    #[test]
    fn revenue_defaults_to_flat_fee() {
        let cases = [
            case("completed", Some(350.0), None),
            case("submitted", None, None),
            case("submitted", Some(0.0), None),
        ];
        assert_eq!(case_revenue(&cases[1]), DEFAULT_CASE_REVENUE);
        assert_eq!(total_case_revenue(&cases), 750.0);
        assert_eq!(total_case_revenue(&[]), 0.0);
    }
}
