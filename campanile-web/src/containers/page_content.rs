//! Card surface giving every page the same framing.

use yew::{Children, Classes, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PageContentProps {
    #[prop_or_default]
    pub children: Children,

    /// Extra classes merged onto the surface.
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(PageContent)]
pub fn page_content(props: &PageContentProps) -> Html {
    html! {
        <div class={classes!(
            "bg-base-100",
            "rounded-box",
            "shadow-sm",
            "border",
            "border-base-300",
            "p-4",
            "md:p-6",
            props.class.clone()
        )}>
            { props.children.clone() }
        </div>
    }
}
