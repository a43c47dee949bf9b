use leptos::ev::KeyboardEvent;
use leptos::*;

const SECONDARY_BUTTON: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated";

/// Modal shell. Backdrop clicks, the close button and Escape all call `on_close`.
/// Callers mount it only while it should be visible.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    let width = if wide { "max-w-2xl" } else { "max-w-md" };

    view! {
        <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
            <button
                type="button"
                aria-label="Close"
                class="absolute inset-0 bg-overlay-backdrop"
                on:click=move |_| on_close.call(())
            ></button>
            <div
                class=format!(
                    "relative z-[71] w-full {} rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4",
                    width
                )
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        on_close.call(());
                    }
                }
            >
                <div class="flex items-start justify-between gap-3">
                    <h2 class="text-lg font-semibold text-fg">{title}</h2>
                    <button
                        type="button"
                        aria-label="Close"
                        class="text-fg-muted hover:text-fg"
                        on:click=move |_| on_close.call(())
                    >
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn DialogFooter(children: Children) -> impl IntoView {
    view! { <div class="flex justify-end gap-2">{children()}</div> }
}

#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: Option<String>,
    /// Disables confirm and shows progress while the action runs.
    #[prop(optional, into)] busy: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_class = if destructive {
        "bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
    } else {
        "bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
    };
    let confirm_label = confirm_label
        .filter(|label| !label.trim().is_empty())
        .unwrap_or_else(|| "Confirm".to_string());

    view! {
        <Modal title=title on_close=on_cancel>
            <p class="text-sm text-fg-muted">{message}</p>
            <DialogFooter>
                <button type="button" class=SECONDARY_BUTTON on:click=move |_| on_cancel.call(())>
                    "Cancel"
                </button>
                <button
                    type="button"
                    class=format!(
                        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}",
                        confirm_class
                    )
                    disabled=move || busy.get()
                    on:click=move |_| on_confirm.call(())
                >
                    {move || if busy.get() { "Processing...".to_string() } else { confirm_label.clone() }}
                </button>
            </DialogFooter>
        </Modal>
    }
}

/// Read-only modal with a single Close action.
#[component]
pub fn InfoDialog(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_close wide=true>
            {children()}
            <DialogFooter>
                <button type="button" class=SECONDARY_BUTTON on:click=move |_| on_close.call(())>
                    "Close"
                </button>
            </DialogFooter>
        </Modal>
    }
}
