//! Shell around every signed-in page.

use crate::components::toast_host::ToastHost;
use crate::containers::{header::Header, page_content::PageContent};
use crate::routes::Route;
use yew::{Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<Route>,
}

/// Header, content surface, footer, and the toast overlay.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <>
            <div class="min-h-screen flex flex-col bg-base-100">
                <Header current_route={props.current_route.clone()} />
                <main class="flex-grow p-4 md:p-6">
                    <PageContent>
                        { props.children.clone() }
                    </PageContent>
                </main>
                <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                    <div>
                        <p>{"© 2026 Campanile"}</p>
                    </div>
                </footer>
            </div>
            <ToastHost />
        </>
    }
}
