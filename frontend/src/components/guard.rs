use crate::state::auth::{use_auth, AuthState};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

pub const ANONYMOUS_ENTRY: &str = "/";
pub const PROTECTED_ENTRY: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Stored session not read yet; no navigation decision.
    Pending,
    Allow,
    Redirect(&'static str),
}

pub fn require_authenticated(state: &AuthState) -> RouteDecision {
    if state.loading {
        return RouteDecision::Pending;
    }
    // `is_authenticated` already implies the admin key; it is checked again on purpose.
    if state.is_authenticated && state.is_admin() && state.has_admin_key() {
        RouteDecision::Allow
    } else {
        RouteDecision::Redirect(ANONYMOUS_ENTRY)
    }
}

pub fn require_anonymous(state: &AuthState) -> RouteDecision {
    if state.loading {
        return RouteDecision::Pending;
    }
    if state.is_authenticated && state.is_admin() {
        RouteDecision::Redirect(PROTECTED_ENTRY)
    } else {
        RouteDecision::Allow
    }
}

#[component]
fn PendingScreen(message: &'static str) -> impl IntoView {
    view! {
        <div class="flex min-h-screen items-center justify-center bg-status-error-bg text-status-error-text">
            <div class="text-center space-y-2">
                <div class="animate-spin mx-auto rounded-full h-8 w-8 border-b-2 border-current"></div>
                <div class="font-semibold">{message}</div>
            </div>
        </div>
    }
}

fn route_gate(
    decide: fn(&AuthState) -> RouteDecision,
    pending_message: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let decision = create_memo(move |_| decide(&auth.get()));

    create_effect(move |_| {
        if let RouteDecision::Redirect(target) = decision.get() {
            let navigate = use_navigate();
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show
            when=move || decision.get() == RouteDecision::Allow
            fallback=move || {
                if decision.get() == RouteDecision::Pending {
                    view! { <PendingScreen message=pending_message /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    route_gate(
        require_authenticated,
        "Authenticating Admin Access...",
        children,
    )
}

#[component]
pub fn RequireAnonymous(children: ChildrenFn) -> impl IntoView {
    route_gate(
        require_anonymous,
        "Validating Security Credentials...",
        children,
    )
}
