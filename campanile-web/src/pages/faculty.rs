//! Faculty-only pages: course and attendance management.

use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};

#[function_component(ManageCoursesPage)]
pub fn manage_courses_page() -> Html {
    html! {
        <div class="flex flex-col gap-4">
            <div>
                <h1 class="text-2xl font-bold">{"Manage Courses"}</h1>
                <p class="text-sm opacity-70">{"Courses you teach this term."}</p>
            </div>
            <div class="flex flex-col items-center gap-2 py-10 opacity-70">
                <Icon icon_id={IconId::HeroiconsOutlineAcademicCap} class="h-8 w-8" />
                <p>{"No courses assigned"}</p>
                <p class="text-sm">
                    {"Teaching assignments appear here once the department publishes the timetable."}
                </p>
            </div>
        </div>
    }
}

#[function_component(ManageAttendancePage)]
pub fn manage_attendance_page() -> Html {
    html! {
        <div class="flex flex-col gap-4">
            <div>
                <h1 class="text-2xl font-bold">{"Manage Attendance"}</h1>
                <p class="text-sm opacity-70">{"Record and review attendance for your sessions."}</p>
            </div>
            <div class="flex flex-col items-center gap-2 py-10 opacity-70">
                <Icon icon_id={IconId::HeroiconsOutlineClipboardDocumentList} class="h-8 w-8" />
                <p>{"No sessions to record"}</p>
                <p class="text-sm">{"Pick up a course assignment to start taking attendance."}</p>
            </div>
        </div>
    }
}
