use crate::{
    api::{AdminUser, UserActivation},
    components::common::Tone,
};

pub const ACTION_FAILED: &str = "Failed to perform action. Please try again.";

/// Activation change waiting for the operator to confirm it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAction {
    pub user: AdminUser,
    pub action: UserActivation,
}

impl PendingAction {
    pub fn for_user(user: AdminUser) -> Self {
        let action = UserActivation::toggle_for(user.is_active);
        Self { user, action }
    }

    pub fn title(&self) -> &'static str {
        match self.action {
            UserActivation::Activate => "Confirm User Activation",
            UserActivation::Deactivate => "Confirm User Deactivation",
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        match self.action {
            UserActivation::Activate => "Confirm Activation",
            UserActivation::Deactivate => "Confirm Deactivation",
        }
    }

    pub fn message(&self) -> String {
        let who = self
            .user
            .email
            .as_deref()
            .or(self.user.mobile_number.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", self.user.id));
        let mut message = format!(
            "Are you sure you want to {} user {}?",
            self.action.path_segment(),
            who
        );
        if self.action == UserActivation::Deactivate {
            message.push_str(" This will prevent them from accessing the platform.");
        }
        message
    }
}

pub fn row_action_label(is_active: bool) -> &'static str {
    if is_active {
        "Block"
    } else {
        "Activate"
    }
}

pub fn role_tone(role: &str) -> Tone {
    match role {
        "doctor" => Tone::Info,
        "patient" => Tone::Success,
        _ => Tone::Default,
    }
}

pub fn status_badge(is_active: bool) -> (&'static str, Tone) {
    if is_active {
        ("Active", Tone::Success)
    } else {
        ("Inactive", Tone::Error)
    }
}

pub fn or_na(value: Option<&str>) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or("N/A")
        .to_string()
}

/// Mirrors a successful activation change into the locally held list.
pub fn apply_activation(users: &mut [AdminUser], user_id: i64, action: UserActivation) -> bool {
    match users.iter_mut().find(|user| user.id == user_id) {
        Some(user) => {
            user.is_active = action.resulting_active_state();
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, is_active: bool, email: Option<&str>, mobile: Option<&str>) -> AdminUser {
        AdminUser {
            id,
            role: "patient".into(),
            email: email.map(str::to_string),
            mobile_number: mobile.map(str::to_string),
            is_active,
            created_at: "2024-01-15T10:30:00Z".into(),
            last_login: None,
        }
    }

    #[test]
    fn pending_action_toggles_current_state() {
        let active = PendingAction::for_user(user(1, true, None, Some("+218912345678")));
        assert_eq!(active.action, UserActivation::Deactivate);
        assert_eq!(active.title(), "Confirm User Deactivation");
        assert_eq!(
            active.message(),
            "Are you sure you want to deactivate user +218912345678? This will prevent them from accessing the platform."
        );

        let blocked = PendingAction::for_user(user(3, false, Some("a@b.com"), None));
        assert_eq!(blocked.action, UserActivation::Activate);
        assert_eq!(blocked.confirm_label(), "Confirm Activation");
        assert_eq!(blocked.message(), "Are you sure you want to activate user a@b.com?");
    }

    #[test]
    fn pending_action_falls_back_to_user_id() {
        let action = PendingAction::for_user(user(9, false, None, None));
        assert!(action.message().contains("user #9?"));
    }

    #[test]
    fn row_labels_and_tones() {
        assert_eq!(row_action_label(true), "Block");
        assert_eq!(row_action_label(false), "Activate");
        assert_eq!(role_tone("doctor"), Tone::Info);
        assert_eq!(role_tone("patient"), Tone::Success);
        assert_eq!(role_tone("admin"), Tone::Default);
        assert_eq!(status_badge(false), ("Inactive", Tone::Error));
        assert_eq!(or_na(None), "N/A");
        assert_eq!(or_na(Some("")), "N/A");
        assert_eq!(or_na(Some("x@y.z")), "x@y.z");
    }

    #[test]
    fn apply_activation_updates_only_matching_row() {
        let mut users = vec![user(1, true, None, None), user(2, true, None, None)];
        assert!(apply_activation(&mut users, 2, UserActivation::Deactivate));
        assert!(users[0].is_active);
        assert!(!users[1].is_active);
        assert!(!apply_activation(&mut users, 42, UserActivation::Activate));
    }
}
