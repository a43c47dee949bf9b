use crate::components::common::Tone;
use leptos::*;

/// Headline number with an optional secondary line.
#[component]
pub fn MetricCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] detail: Option<Signal<String>>,
    #[prop(optional, into)] tone: MaybeSignal<Tone>,
    #[prop(optional)] icon: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=move || format!("overflow-hidden shadow rounded-lg border {}", tone.get().badge_classes())
            data-tone=move || tone.get().as_str()
        >
            <div class="px-4 py-5 sm:p-6">
                <div class="flex items-center justify-between">
                    <dt class="text-sm font-medium uppercase tracking-wide">{title}</dt>
                    {icon.map(|icon| view! { <i class=format!("fas {}", icon)></i> })}
                </div>
                <dd class="mt-2 text-3xl font-bold">{move || value.get()}</dd>
                {detail.map(|detail| view! {
                    <p class="mt-1 text-sm opacity-80">{move || detail.get()}</p>
                })}
            </div>
        </div>
    }
}
