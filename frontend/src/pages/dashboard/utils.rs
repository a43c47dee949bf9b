use crate::{api::DashboardStats, components::common::Tone};

pub fn health_tone(health: &str) -> Tone {
    match health {
        "excellent" => Tone::Success,
        "good" => Tone::Info,
        "warning" => Tone::Warning,
        "critical" => Tone::Error,
        _ => Tone::Default,
    }
}

/// "excellent" -> "Excellent"
pub fn health_label(health: &str) -> String {
    let mut chars = health.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn user_breakdown(stats: &DashboardStats) -> String {
    format!(
        "{} Patients • {} Doctors",
        stats.total_patients, stats.total_doctors
    )
}
