use leptos::*;

/// Placeholder shown where a list has no rows.
#[component]
pub fn EmptyState(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-2 py-10 text-sm text-fg-muted" role="status">
            <i class="fas fa-inbox" aria-hidden="true"></i>
            <span>{title}</span>
        </div>
    }
}
