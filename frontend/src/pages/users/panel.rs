use crate::{
    api::AdminUser,
    components::{
        common::{Badge, Button, ButtonVariant},
        data_grid::{Column, DataGrid},
        dialog::ConfirmDialog,
        layout::{AdminLayout, ErrorMessage, LoadingSpinner, WarningMessage},
    },
    pages::users::{
        utils::{or_na, role_tone, row_action_label, status_badge},
        view_model::{use_users_view_model, UsersViewModel},
    },
    utils::time::{format_optional_timestamp, format_timestamp},
};
use leptos::*;

fn user_columns(vm: UsersViewModel) -> Vec<Column<AdminUser>> {
    vec![
        Column::new("ID", |user: &AdminUser| {
            view! { <span class="font-semibold">{format!("#{}", user.id)}</span> }
        }),
        Column::new("Role", |user: &AdminUser| {
            view! { <Badge tone=role_tone(&user.role) label=user.role.to_uppercase() /> }
        }),
        Column::text("Email", |user: &AdminUser| or_na(user.email.as_deref())),
        Column::text("Mobile", |user: &AdminUser| or_na(user.mobile_number.as_deref())),
        Column::new("Status", |user: &AdminUser| {
            let (label, tone) = status_badge(user.is_active);
            view! { <Badge tone=tone label=label /> }
        }),
        Column::text("Registered", |user: &AdminUser| format_timestamp(&user.created_at)),
        Column::text("Last Login", |user: &AdminUser| {
            format_optional_timestamp(user.last_login.as_deref(), "Never")
        }),
        Column::new("Actions", move |user: &AdminUser| {
            let target = user.clone();
            let is_active = user.is_active;
            let variant = if user.is_active {
                ButtonVariant::Danger
            } else {
                ButtonVariant::Success
            };
            view! {
                <Button variant=variant on:click=move |_| vm.request_action(target.clone())>
                    {row_action_label(is_active)}
                </Button>
            }
        }),
    ]
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let vm = use_users_view_model();
    let loading = vm.users_resource.loading();
    view! {
        <AdminLayout
            title="User Management"
            back_href="/dashboard"
            on_refresh=Callback::new(move |_| vm.refresh())
            refreshing=loading
        >
            {move || vm.warning().map(|message| view! { <WarningMessage message=message /> })}
            {move || vm.action_error.get().map(|message| view! { <ErrorMessage message=message /> })}
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-bold text-fg">"All Platform Users"</h2>
                    <p class="text-sm text-fg-muted">
                        {move || format!("Total: {} users", vm.users.with(Vec::len))}
                    </p>
                </div>
                <Show
                    when=move || !(loading.get() && vm.users.with(Vec::is_empty))
                    fallback=|| view! { <LoadingSpinner label="Loading users..." /> }
                >
                    <DataGrid
                        rows=vm.users
                        columns=user_columns(vm)
                        empty_title="No users found"
                    />
                </Show>
            </section>
            {move || vm.pending.get().map(|pending| view! {
                <ConfirmDialog
                    title=pending.title()
                    message=pending.message()
                    confirm_label=pending.confirm_label()
                    busy=vm.activation_action.pending()
                    destructive=pending.user.is_active
                    on_confirm=Callback::new(move |_| vm.confirm())
                    on_cancel=Callback::new(move |_| vm.cancel())
                />
            })}
        </AdminLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::admin_session;
    use crate::test_support::ssr::render_with_auth;

    #[test]
    fn users_page_renders_header_and_total() {
        let html = render_with_auth(AuthState::authenticated(admin_session()), || {
            view! { <UsersPage /> }
        });
        assert!(html.contains("User Management"));
        assert!(html.contains("All Platform Users"));
        assert!(html.contains("Total: 0 users"));
        assert!(html.contains("href=\"/dashboard\""));
    }

    #[test]
    fn user_columns_render_row_values() {
        let html = render_with_auth(AuthState::authenticated(admin_session()), || {
            let vm = use_users_view_model();
            vm.users.set(crate::pages::users::repository::demo_users());
            view! { <DataGrid rows=vm.users columns=user_columns(vm) empty_title="none" /> }
        });
        assert!(html.contains("#2"));
        assert!(html.contains("DOCTOR"));
        assert!(html.contains("dr.smith@globalclinic.com"));
        assert!(html.contains("N/A"));
        assert!(html.contains("Inactive"));
        assert!(html.contains("Never"));
        assert!(html.contains("Block"));
        assert!(html.contains("Activate"));
    }
}
