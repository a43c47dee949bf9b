use crate::{
    components::common::{Button, ButtonVariant, Tone},
    state::auth::{use_auth, use_session_guard},
};
use leptos::*;

#[component]
pub fn Header(
    #[prop(into)] title: String,
    #[prop(default = None)] subtitle: Option<String>,
    #[prop(default = None)] back_href: Option<&'static str>,
    #[prop(default = None)] on_refresh: Option<Callback<()>>,
    #[prop(optional, into)] refreshing: MaybeSignal<bool>,
) -> impl IntoView {
    let guard = use_session_guard();
    let auth = use_auth();
    let admin_label = move || {
        auth.get()
            .session
            .map(|session| format!("Admin #{}", session.user_id))
            .unwrap_or_default()
    };
    // Clearing the session is enough; the route guard performs the redirect.
    let on_logout = move |_| guard.logout();

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16 gap-4">
                    <div class="flex items-center gap-3">
                        {back_href.map(|href| view! {
                            <a href=href class="text-fg-muted hover:text-fg px-2 py-1 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                <i class="fas fa-arrow-left mr-1"></i>
                                "Back"
                            </a>
                        })}
                        <div>
                            <h1 class="text-xl font-semibold text-fg">{title}</h1>
                            {subtitle.map(|subtitle| view! {
                                <p class="text-xs text-fg-muted">{subtitle}</p>
                            })}
                        </div>
                    </div>
                    <nav class="flex items-center gap-2">
                        <span class="hidden md:inline text-sm text-fg-muted">{admin_label}</span>
                        {on_refresh.map(|on_refresh| view! {
                            <Button
                                variant=ButtonVariant::Secondary
                                loading=refreshing
                                on:click=move |_| on_refresh.call(())
                            >
                                "Refresh"
                            </Button>
                        })}
                        <button
                            on:click=on_logout
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        >
                            "Logout"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn AdminLayout(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] back_href: Option<&'static str>,
    #[prop(optional)] on_refresh: Option<Callback<()>>,
    #[prop(optional, into)] refreshing: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header
                title=title
                subtitle=subtitle
                back_href=back_href
                on_refresh=on_refresh
                refreshing=refreshing
            />
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8 space-y-6">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center p-8 gap-2">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            {label.map(|label| view! { <p class="text-sm text-fg-muted">{label}</p> })}
        </div>
    }
}

#[component]
fn Notice(tone: Tone, icon: &'static str, role: &'static str, message: String) -> impl IntoView {
    view! {
        <div
            class=format!("flex items-center gap-3 border px-4 py-3 rounded text-sm {}", tone.badge_classes())
            role=role
            data-tone=tone.as_str()
        >
            <i class=format!("fas {}", icon)></i>
            <p>{message}</p>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! { <Notice tone=Tone::Error icon="fa-exclamation-circle" role="alert" message=message /> }
}

/// Non-blocking notice, e.g. the demo-data banner.
#[component]
pub fn WarningMessage(#[prop(into)] message: String) -> impl IntoView {
    view! { <Notice tone=Tone::Warning icon="fa-exclamation-triangle" role="status" message=message /> }
}
