use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{
        guard::{RequireAdmin, RequireAuth},
        toast::{provide_toasts, ToastHost},
    },
    pages::{AdminPage, DashboardPage, HistoryPage, HomePage, LoginPage, SchedulePage},
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/dashboard",
    "/history",
    "/admin",
    "/admin/schedule",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard", "/history", "/admin", "/admin/schedule"];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/admin", "/admin/schedule"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_toasts();
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/history" view=ProtectedHistory/>
                    <Route path="/admin" view=ProtectedAdmin/>
                    <Route path="/admin/schedule" view=ProtectedSchedule/>
                </Routes>
            </Router>
            <ToastHost/>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedHistory() -> impl IntoView {
    view! { <RequireAuth><HistoryPage/></RequireAuth> }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! { <RequireAdmin><AdminPage/></RequireAdmin> }
}

#[component]
fn ProtectedSchedule() -> impl IntoView {
    view! { <RequireAdmin><SchedulePage/></RequireAdmin> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_paths_include_schedule_and_history() {
        assert!(ROUTE_PATHS.contains(&"/admin/schedule"));
        assert!(ROUTE_PATHS.contains(&"/history"));
    }

    #[test]
    fn protected_and_public_routes_partition_all_paths() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        assert!(protected.is_disjoint(&public));
        let union: HashSet<&str> = protected.union(&public).copied().collect();
        assert_eq!(union, all);
    }

    #[test]
    fn admin_routes_are_protected() {
        for path in ADMIN_ROUTE_PATHS {
            assert!(
                PROTECTED_ROUTE_PATHS.contains(path),
                "admin path not protected: {}",
                path
            );
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
