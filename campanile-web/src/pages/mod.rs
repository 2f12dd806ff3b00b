//! Page components, one per route.

mod admin;
mod auth_validation;
mod dashboard;
mod error;
mod faculty;
mod login;
mod notifications;
mod profile;
mod register;
mod student;

pub use admin::{AdminReportsPage, AdminUsersPage};
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use faculty::{ManageAttendancePage, ManageCoursesPage};
pub use login::LoginPage;
pub use notifications::NotificationsPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use student::{AttendancePage, CoursesPage, PlacementsPage};
