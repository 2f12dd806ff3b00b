//! Light/dark theme toggle.
//!
//! The effective theme is the persisted choice when one exists, otherwise
//! the system preference. Switching updates the `data-theme` attribute
//! DaisyUI styles from and persists the choice.

use crate::storage;
use web_sys::window;
use yew::{
    Callback, Classes, Html, Properties, events::MouseEvent, function_component, html,
    use_effect_with, use_state,
};
use yew_icons::{Icon, IconId};

fn apply_document_theme(theme: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(html_element) = document.document_element()
    {
        let _ = html_element.set_attribute("data-theme", theme);
    }
}

#[derive(Properties, PartialEq, Eq)]
pub struct ThemeSwitcherProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeSwitcher)]
pub fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    let current_theme = use_state(|| "dark".to_string());

    // Resolve the effective theme once on mount.
    {
        let current_theme = current_theme.clone();
        use_effect_with((), move |()| {
            let system_prefers_dark = window()
                .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
                .flatten()
                .is_some_and(|media_query| media_query.matches());

            let fallback = if system_prefers_dark { "dark" } else { "light" };
            let theme = storage::load_theme().unwrap_or_else(|| fallback.to_string());

            apply_document_theme(&theme);
            current_theme.set(theme);
            || {}
        });
    }

    let toggle_theme = {
        let current_theme = current_theme.clone();
        Callback::from(move |_: MouseEvent| {
            let new_theme = if *current_theme == "dark" { "light" } else { "dark" };
            apply_document_theme(new_theme);
            storage::store_theme(new_theme);
            current_theme.set(new_theme.to_string());
        })
    };

    let theme_icon = if *current_theme == "light" {
        IconId::HeroiconsSolidMoon
    } else {
        IconId::HeroiconsSolidSun
    };

    html! {
        <div class={props.class.clone()}>
            <button
                class="btn btn-ghost btn-circle"
                onclick={toggle_theme}
                aria-label="Switch theme"
            >
                <Icon icon_id={theme_icon} class="h-5 w-5" />
            </button>
        </div>
    }
}
