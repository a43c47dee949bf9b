use crate::{
    components::{
        cards::MetricCard,
        common::{Badge, Tone},
        layout::{AdminLayout, LoadingSpinner, WarningMessage},
    },
    pages::dashboard::{
        utils::{health_label, health_tone, user_breakdown},
        view_model::use_dashboard_view_model,
    },
    utils::format::{format_count, format_currency},
};
use leptos::*;

const QUICK_ACTIONS: [(&str, &str, &str); 3] = [
    ("/users", "View All Users", "fa-users"),
    ("/cases", "Audit Cases", "fa-notes-medical"),
    ("/transactions", "Financial Reports", "fa-file-invoice-dollar"),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let stats = create_memo(move |_| vm.stats());
    let value = move |f: fn(&crate::api::DashboardStats) -> String| {
        Signal::derive(move || stats.get().as_ref().map(f).unwrap_or_else(|| "-".into()))
    };
    let health = Signal::derive(move || {
        stats
            .get()
            .map(|s| s.system_health)
            .unwrap_or_else(|| "unknown".into())
    });

    view! {
        <AdminLayout
            title="Global Clinic - Admin Command Center"
            on_refresh=Callback::new(move |_| vm.refresh())
            refreshing=vm.refreshing()
        >
            <div class="flex items-center gap-2">
                <Badge tone=Tone::Warning label="ADMIN" />
            </div>
            {move || vm.warning().map(|message| view! { <WarningMessage message=message /> })}
            <Show
                when=move || stats.get().is_some()
                fallback=move || view! { <LoadingSpinner label="Loading admin dashboard..." /> }
            >
                <dl class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4">
                    <MetricCard
                        title="Total Users"
                        value=value(|s| format_count(s.total_users))
                        detail=value(user_breakdown)
                        tone=Tone::Info
                        icon="fa-users"
                    />
                    <MetricCard
                        title="Total Cases"
                        value=value(|s| format_count(s.total_cases))
                        detail=Signal::derive(|| "Medical consultations processed".to_string())
                        tone=Tone::Success
                        icon="fa-notes-medical"
                    />
                    <MetricCard
                        title="Total Revenue"
                        value=value(|s| format_currency(s.total_revenue))
                        detail=Signal::derive(|| "Platform earnings (60% share)".to_string())
                        tone=Tone::Warning
                        icon="fa-dollar-sign"
                    />
                    <MetricCard
                        title="System Health"
                        value=Signal::derive(move || health_label(&health.get()))
                        detail=Signal::derive(|| "All systems operational".to_string())
                        tone=Signal::derive(move || health_tone(&health.get()))
                        icon="fa-heartbeat"
                    />
                </dl>
            </Show>
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h2 class="text-lg font-medium text-fg">"Quick Actions"</h2>
                <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                    {QUICK_ACTIONS
                        .iter()
                        .map(|(href, label, icon)| view! {
                            <a
                                href=*href
                                class="flex items-center justify-center gap-2 rounded-md border border-border px-4 py-3 text-sm font-semibold text-fg hover:bg-action-ghost-bg-hover"
                            >
                                <i class=format!("fas {}", icon)></i>
                                {*label}
                            </a>
                        })
                        .collect_view()}
                </div>
            </section>
        </AdminLayout>
    }
}
