//! Student-only pages: courses, attendance, placements.

use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};

#[function_component(CoursesPage)]
pub fn courses_page() -> Html {
    html! {
        <div class="flex flex-col gap-4">
            <div>
                <h1 class="text-2xl font-bold">{"Courses"}</h1>
                <p class="text-sm opacity-70">{"Courses you are enrolled in this term."}</p>
            </div>
            <div class="flex flex-col items-center gap-2 py-10 opacity-70">
                <Icon icon_id={IconId::HeroiconsOutlineBookOpen} class="h-8 w-8" />
                <p>{"No enrolled courses yet"}</p>
                <p class="text-sm">
                    {"Your enrollment appears here once the registrar publishes it."}
                </p>
            </div>
        </div>
    }
}

#[function_component(AttendancePage)]
pub fn attendance_page() -> Html {
    html! {
        <div class="flex flex-col gap-4">
            <div>
                <h1 class="text-2xl font-bold">{"Attendance"}</h1>
                <p class="text-sm opacity-70">{"Your attendance record, course by course."}</p>
            </div>
            <div class="flex flex-col items-center gap-2 py-10 opacity-70">
                <Icon icon_id={IconId::HeroiconsOutlineClipboardDocumentCheck} class="h-8 w-8" />
                <p>{"Nothing recorded yet"}</p>
                <p class="text-sm">{"Attendance shows up here after your first class session."}</p>
            </div>
        </div>
    }
}

#[function_component(PlacementsPage)]
pub fn placements_page() -> Html {
    html! {
        <div class="flex flex-col gap-4">
            <div>
                <h1 class="text-2xl font-bold">{"Placements"}</h1>
                <p class="text-sm opacity-70">{"Placement drives and your applications."}</p>
            </div>
            <div class="flex flex-col items-center gap-2 py-10 opacity-70">
                <Icon icon_id={IconId::HeroiconsOutlineBriefcase} class="h-8 w-8" />
                <p>{"No placement drives are open right now"}</p>
                <p class="text-sm">
                    {"Watch your notifications; new drives are announced there first."}
                </p>
            </div>
        </div>
    }
}
