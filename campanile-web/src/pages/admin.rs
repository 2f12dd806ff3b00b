//! Admin-only pages: user management and reporting.

use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};

#[function_component(AdminUsersPage)]
pub fn admin_users_page() -> Html {
    html! {
        <div class="flex flex-col gap-4">
            <div>
                <h1 class="text-2xl font-bold">{"Users"}</h1>
                <p class="text-sm opacity-70">
                    {"Every account on campus. Students self-register; faculty and admin accounts are created here."}
                </p>
            </div>
            <div class="flex flex-col items-center gap-2 py-10 opacity-70">
                <Icon icon_id={IconId::HeroiconsOutlineUsers} class="h-8 w-8" />
                <p>{"User directory"}</p>
                <p class="text-sm">{"Search and role changes are on their way here."}</p>
            </div>
        </div>
    }
}

#[function_component(AdminReportsPage)]
pub fn admin_reports_page() -> Html {
    html! {
        <div class="flex flex-col gap-4">
            <div>
                <h1 class="text-2xl font-bold">{"Reports"}</h1>
                <p class="text-sm opacity-70">{"Enrollment, attendance and placement summaries."}</p>
            </div>
            <div class="flex flex-col items-center gap-2 py-10 opacity-70">
                <Icon icon_id={IconId::HeroiconsOutlineChartBar} class="h-8 w-8" />
                <p>{"No reports generated yet"}</p>
                <p class="text-sm">{"Reports run at the end of each term."}</p>
            </div>
        </div>
    }
}
