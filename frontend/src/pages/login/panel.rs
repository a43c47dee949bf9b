use crate::{
    components::error::InlineErrorMessage,
    pages::login::view_model::{use_login_view_model, LoginViewModel},
};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg text-fg placeholder-fg-muted rounded-md focus:outline-none focus:ring-2 focus:ring-action-danger-bg sm:text-sm";

#[component]
fn LoginField(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    autocomplete: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <label for=id class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                autocomplete=autocomplete
                required
                class=INPUT_CLASS
                prop:value=value
                on:input=move |ev| {
                    let target = event_target::<HtmlInputElement>(&ev);
                    value.set(target.value());
                }
            />
        </div>
    }
}

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm: LoginViewModel = use_login_view_model();
    let pending = vm.login_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-6 bg-surface-elevated shadow-xl rounded-lg p-8 border-t-4 border-action-danger-bg">
                <div class="text-center space-y-2">
                    <i class="fas fa-user-shield text-4xl text-action-danger-bg"></i>
                    <h2 class="text-3xl font-extrabold text-fg">"ADMIN PORTAL"</h2>
                    <p class="text-sm text-fg-muted">"Global Clinic - Secure Access"</p>
                </div>
                <div
                    class="bg-status-warning-bg border border-status-warning-border text-status-warning-text px-4 py-2 rounded text-xs font-semibold text-center"
                    role="note"
                >
                    "RESTRICTED ACCESS - AUTHORIZED PERSONNEL ONLY"
                </div>
                <form class="space-y-4" on:submit=on_submit>
                    <LoginField
                        id="email"
                        label="Admin Email Address"
                        input_type="email"
                        autocomplete="email"
                        value=vm.form.email
                    />
                    <LoginField
                        id="password"
                        label="Admin Password"
                        input_type="password"
                        autocomplete="current-password"
                        value=vm.form.password
                    />
                    <LoginField
                        id="admin_key"
                        label="Admin Access Key"
                        input_type="password"
                        autocomplete="off"
                        value=vm.form.admin_key
                    />

                    <InlineErrorMessage error=vm.error />

                    <button
                        type="submit"
                        disabled=move || !vm.can_submit()
                        class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-bold rounded-md text-action-danger-text bg-action-danger-bg hover:bg-action-danger-bg-hover disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {move || if pending.get() { "AUTHENTICATING..." } else { "SECURE LOGIN" }}
                    </button>
                </form>
                <p class="text-center text-xs text-fg-muted">
                    "All access attempts are logged and monitored"
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::AuthState;
    use crate::test_support::ssr::render_with_auth;

    #[test]
    fn login_panel_renders_secure_form() {
        let html = render_with_auth(AuthState::anonymous(), || view! { <LoginPanel /> });
        assert!(html.contains("ADMIN PORTAL"));
        assert!(html.contains("Global Clinic - Secure Access"));
        assert!(html.contains("RESTRICTED ACCESS - AUTHORIZED PERSONNEL ONLY"));
        assert!(html.contains("Admin Email Address"));
        assert!(html.contains("Admin Password"));
        assert!(html.contains("Admin Access Key"));
        assert!(html.contains("SECURE LOGIN"));
        assert!(html.contains("All access attempts are logged and monitored"));
        assert!(html.contains("disabled"));
    }
}
