use crate::{containers::layout::Layout, models::session::SessionState, pages::*};
use shared::models::Role;
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Every navigable route in the client.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/notifications")]
    Notifications,
    #[at("/profile")]
    Profile,
    #[at("/courses")]
    Courses,
    #[at("/attendance")]
    Attendance,
    #[at("/placements")]
    Placements,
    #[at("/manage/courses")]
    ManageCourses,
    #[at("/manage/attendance")]
    ManageAttendance,
    #[at("/admin/users")]
    AdminUsers,
    #[at("/admin/reports")]
    AdminReports,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Routes every signed-in role shares.
const COMMON_ROUTES: &[Route] = &[Route::Dashboard, Route::Notifications, Route::Profile];

const STUDENT_ROUTES: &[Route] = &[Route::Courses, Route::Attendance, Route::Placements];

const FACULTY_ROUTES: &[Route] = &[Route::ManageCourses, Route::ManageAttendance];

const ADMIN_ROUTES: &[Route] = &[Route::AdminUsers, Route::AdminReports];

fn role_routes(role: Role) -> &'static [Route] {
    match role {
        Role::Student => STUDENT_ROUTES,
        Role::Faculty => FACULTY_ROUTES,
        Role::Admin => ADMIN_ROUTES,
    }
}

/// Every route the given role may open, common set first. The header menu
/// and the dashboard quick links both render from this.
pub fn permitted_routes(role: Role) -> Vec<Route> {
    let mut routes = COMMON_ROUTES.to_vec();
    routes.extend_from_slice(role_routes(role));
    routes
}

/// Whether the given role may open the route.
pub fn is_permitted(role: Role, route: &Route) -> bool {
    COMMON_ROUTES.contains(route) || role_routes(role).contains(route)
}

/// Fail-closed permission check: no role, no access.
pub fn route_allowed(role: Option<Role>, route: &Route) -> bool {
    role.is_some_and(|role| is_permitted(role, route))
}

impl Route {
    /// Menu label for the route.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Sign in",
            Self::Register => "Register",
            Self::Dashboard => "Dashboard",
            Self::Notifications => "Notifications",
            Self::Profile => "Profile",
            Self::Courses => "Courses",
            Self::Attendance => "Attendance",
            Self::Placements => "Placements",
            Self::ManageCourses => "Manage Courses",
            Self::ManageAttendance => "Manage Attendance",
            Self::AdminUsers => "Users",
            Self::AdminReports => "Reports",
            Self::NotFound => "Not Found",
        }
    }

    /// Menu icon for the route.
    pub fn icon(&self) -> IconId {
        match self {
            Self::Dashboard => IconId::HeroiconsOutlineHome,
            Self::Notifications => IconId::HeroiconsOutlineBell,
            Self::Profile => IconId::HeroiconsOutlineUser,
            Self::Courses => IconId::HeroiconsOutlineBookOpen,
            Self::Attendance => IconId::HeroiconsOutlineClipboardDocumentCheck,
            Self::Placements => IconId::HeroiconsOutlineBriefcase,
            Self::ManageCourses => IconId::HeroiconsOutlineAcademicCap,
            Self::ManageAttendance => IconId::HeroiconsOutlineClipboardDocumentList,
            Self::AdminUsers => IconId::HeroiconsOutlineUsers,
            Self::AdminReports => IconId::HeroiconsOutlineChartBar,
            _ => IconId::HeroiconsOutlineSquares2X2,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteViewProps {
    pub route: Route,
}

#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    let session = use_selector(|state: &SessionState| (state.is_authenticated(), state.role()));
    let (is_authenticated, role) = *session;

    match props.route.clone() {
        Route::Home => {
            if is_authenticated {
                html! { <Redirect<Route> to={Route::Dashboard} /> }
            } else {
                html! { <Redirect<Route> to={Route::Login} /> }
            }
        }
        Route::Login => {
            if is_authenticated {
                html! { <Redirect<Route> to={Route::Dashboard} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        Route::Register => {
            if is_authenticated {
                html! { <Redirect<Route> to={Route::Dashboard} /> }
            } else {
                html! { <RegisterPage /> }
            }
        }
        Route::NotFound => html! { <ErrorPage /> },
        route => {
            if !is_authenticated {
                return html! { <Redirect<Route> to={Route::Login} /> };
            }
            if !route_allowed(role, &route) {
                // The page exists, the role just lacks it; bounce without
                // an error surface.
                return html! { <Redirect<Route> to={Route::Dashboard} /> };
            }
            let page = render_page(&route);
            html! { <Layout current_route={route}>{ page }</Layout> }
        }
    }
}

fn render_page(route: &Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Notifications => html! { <NotificationsPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::Courses => html! { <CoursesPage /> },
        Route::Attendance => html! { <AttendancePage /> },
        Route::Placements => html! { <PlacementsPage /> },
        Route::ManageCourses => html! { <ManageCoursesPage /> },
        Route::ManageAttendance => html! { <ManageAttendancePage /> },
        Route::AdminUsers => html! { <AdminUsersPage /> },
        Route::AdminReports => html! { <AdminReportsPage /> },
        Route::Home | Route::Login | Route::Register | Route::NotFound => Html::default(),
    }
}

/// Switch function handed to the router.
pub fn switch(route: Route) -> Html {
    log(std::format!("Switching to route: {route:?}").as_str());
    html! { <RouteView {route} /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn public_routes() -> Vec<Route> {
        vec![Route::Home, Route::Login, Route::Register, Route::NotFound]
    }

    #[test]
    fn permitted_routes_always_include_the_common_set() {
        for role in [Role::Student, Role::Faculty, Role::Admin] {
            let routes = permitted_routes(role);
            for common in COMMON_ROUTES {
                assert!(routes.contains(common), "{role} is missing {common:?}");
            }
        }
    }

    #[test]
    fn the_permission_matrix_matches_the_role_tables() {
        let expected: &[(Role, &[Route])] = &[
            (
                Role::Student,
                &[
                    Route::Dashboard,
                    Route::Notifications,
                    Route::Profile,
                    Route::Courses,
                    Route::Attendance,
                    Route::Placements,
                ],
            ),
            (
                Role::Faculty,
                &[
                    Route::Dashboard,
                    Route::Notifications,
                    Route::Profile,
                    Route::ManageCourses,
                    Route::ManageAttendance,
                ],
            ),
            (
                Role::Admin,
                &[
                    Route::Dashboard,
                    Route::Notifications,
                    Route::Profile,
                    Route::AdminUsers,
                    Route::AdminReports,
                ],
            ),
        ];

        for (role, allowed) in expected {
            for route in Route::iter() {
                if public_routes().contains(&route) {
                    continue;
                }
                assert_eq!(
                    is_permitted(*role, &route),
                    allowed.contains(&route),
                    "{role} x {route:?}"
                );
            }
        }
    }

    #[test]
    fn an_absent_role_is_denied_everything() {
        for route in Route::iter() {
            assert!(!route_allowed(None, &route));
        }
    }

    #[test]
    fn every_protected_route_has_exactly_one_owner() {
        for route in Route::iter() {
            let owners = [
                COMMON_ROUTES.contains(&route),
                STUDENT_ROUTES.contains(&route),
                FACULTY_ROUTES.contains(&route),
                ADMIN_ROUTES.contains(&route),
            ]
            .iter()
            .filter(|owned| **owned)
            .count();

            if public_routes().contains(&route) {
                assert_eq!(owners, 0, "{route:?} is public and must stay unowned");
            } else {
                assert_eq!(owners, 1, "{route:?} must have exactly one owner");
            }
        }
    }

    #[test]
    fn paths_recognize_and_render_consistently() {
        assert_eq!(Route::Dashboard.to_path(), "/dashboard");
        assert_eq!(Route::ManageCourses.to_path(), "/manage/courses");
        assert_eq!(Route::AdminReports.to_path(), "/admin/reports");
        assert_eq!(
            Route::recognize("/notifications"),
            Some(Route::Notifications)
        );
        assert_eq!(Route::recognize("/no/such/page"), Some(Route::NotFound));
    }

    #[test]
    fn nav_metadata_exists_for_every_permitted_route() {
        for role in [Role::Student, Role::Faculty, Role::Admin] {
            for route in permitted_routes(role) {
                assert!(!route.label().is_empty());
            }
        }
    }
}
