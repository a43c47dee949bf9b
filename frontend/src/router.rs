use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::guard::{RequireAnonymous, RequireAuth, ANONYMOUS_ENTRY},
    pages::{CasesPage, DashboardPage, LoginPage, TransactionsPage, UsersPage},
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/dashboard", "/users", "/cases", "/transactions"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard", "/users", "/cases", "/transactions"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text="Global Clinic Admin" />
        <AuthProvider>
            <Router>
                <AppRoutes/>
            </Router>
        </AuthProvider>
    }
}

/// Route table; unknown paths fall back to the login screen.
#[component]
fn AppRoutes() -> impl IntoView {
    view! {
        <Routes>
            <Route path="/" view=AnonymousLogin/>
            <Route path="/dashboard" view=ProtectedDashboard/>
            <Route path="/users" view=ProtectedUsers/>
            <Route path="/cases" view=ProtectedCases/>
            <Route path="/transactions" view=ProtectedTransactions/>
            <Route path="/*any" view=|| view! { <Redirect path=ANONYMOUS_ENTRY/> }/>
        </Routes>
    }
}

#[component]
fn AnonymousLogin() -> impl IntoView {
    view! { <RequireAnonymous><LoginPage/></RequireAnonymous> }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedUsers() -> impl IntoView {
    view! { <RequireAuth><UsersPage/></RequireAuth> }
}

#[component]
fn ProtectedCases() -> impl IntoView {
    view! { <RequireAuth><CasesPage/></RequireAuth> }
}

#[component]
fn ProtectedTransactions() -> impl IntoView {
    view! { <RequireAuth><TransactionsPage/></RequireAuth> }
}
