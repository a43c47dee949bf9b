use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Success,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm",
            ButtonVariant::Secondary => "bg-surface-muted hover:bg-surface-elevated text-fg border border-border",
            ButtonVariant::Danger => "bg-action-danger-bg hover:bg-action-danger-bg-hover text-action-danger-text",
            ButtonVariant::Success => "bg-status-success-bg hover:opacity-90 text-status-success-text border border-status-success-border",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

/// Colour family for badges and metric cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Error,
    #[default]
    Default,
}

impl Tone {
    pub fn badge_classes(&self) -> &'static str {
        match self {
            Tone::Success => "bg-status-success-bg text-status-success-text border-status-success-border",
            Tone::Info => "bg-status-info-bg text-status-info-text border-status-info-border",
            Tone::Warning => "bg-status-warning-bg text-status-warning-text border-status-warning-border",
            Tone::Error => "bg-status-error-bg text-status-error-text border-status-error-border",
            Tone::Default => "bg-surface-muted text-fg-muted border-border",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Info => "info",
            Tone::Warning => "warning",
            Tone::Error => "error",
            Tone::Default => "default",
        }
    }
}

#[component]
pub fn Badge(tone: Tone, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <span
            class=format!(
                "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-semibold {}",
                tone.badge_classes()
            )
            data-tone=tone.as_str()
        >
            {label}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variants_use_distinct_classes() {
        assert!(ButtonVariant::Primary.classes().contains("bg-action-primary-bg"));
        assert!(ButtonVariant::Danger.classes().contains("bg-action-danger-bg"));
        assert_ne!(
            ButtonVariant::Secondary.classes(),
            ButtonVariant::Success.classes()
        );
    }

    #[test]
    fn tone_names_match_badge_palette() {
        assert_eq!(Tone::default(), Tone::Default);
        assert_eq!(Tone::Warning.as_str(), "warning");
        assert!(Tone::Error.badge_classes().contains("status-error"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn badge_renders_label_and_tone() {
        let html = render_to_string(|| view! { <Badge tone=Tone::Success label="Active" /> });
        assert!(html.contains("Active"));
        assert!(html.contains("data-tone=\"success\""));
    }

    #[test]
    fn loading_button_is_disabled() {
        let html = render_to_string(|| {
            view! { <Button loading=true variant=ButtonVariant::Secondary>"Refresh"</Button> }
        });
        assert!(html.contains("Refresh"));
        assert!(html.contains("disabled"));
        assert!(html.contains("animate-spin"));
    }
}
