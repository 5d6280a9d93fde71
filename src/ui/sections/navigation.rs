//! Fixed top navigation with scroll-dependent styling and a mobile menu

use leptos::prelude::*;

use crate::core::{NavState, Section};
use crate::ui::icon::{Icon, icons};

/// Smooth-scroll the page to `section`.
pub fn scroll_to_section(section: Section) {
    #[cfg(not(feature = "ssr"))]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.id()))
        else {
            leptos::logging::warn!("Section #{} not found", section.id());
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    #[cfg(feature = "ssr")]
    {
        let _ = section;
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let handle_scroll = window_event_listener(scroll, move |_| {
            let scroll_y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            // Only notify subscribers when the threshold is actually crossed
            let mut state = nav.get_untracked();
            if state.on_scroll(scroll_y) {
                nav.set(state);
            }
        });

        on_cleanup(move || drop(handle_scroll));
    }

    let go = move |section: Section| {
        nav.update(|n| n.navigate(section));
        scroll_to_section(section);
    };

    let scrolled = move || nav.with(|n| n.scrolled);

    let desktop_links = Section::ALL
        .into_iter()
        .map(|section| {
            let class = move || {
                if section == Section::Contact {
                    "bg-indigo-600 text-white px-4 py-2 rounded-lg hover:bg-indigo-700 transition-colors"
                } else if scrolled() {
                    "transition-colors text-gray-700 hover:text-indigo-600"
                } else {
                    "transition-colors text-white hover:text-yellow-300"
                }
            };
            view! {
                <button class=class on:click=move |_| go(section)>
                    {section.label()}
                </button>
            }
        })
        .collect_view();

    let mobile_links = Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button
                    class="block w-full text-left px-3 py-2 text-gray-700 hover:text-indigo-600"
                    on:click=move |_| go(section)
                >
                    {section.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class=move || {
            if scrolled() {
                "fixed w-full z-50 top-0 transition-all duration-300 bg-white shadow-lg"
            } else {
                "fixed w-full z-50 top-0 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <h1 class="text-2xl font-bold gradient-text">"Mímir Software Factory"</h1>
                    </div>

                    <div class="hidden md:flex items-center space-x-8">{desktop_links}</div>

                    <div class="md:hidden flex items-center">
                        <button
                            class=move || if scrolled() { "text-gray-700" } else { "text-white" }
                            aria-label="Toggle menu"
                            aria-expanded=move || nav.with(|n| n.menu_open).to_string()
                            on:click=move |_| nav.update(NavState::toggle_menu)
                        >
                            <Icon name=icons::BARS class="text-xl"/>
                        </button>
                    </div>
                </div>
            </div>

            <div
                class="md:hidden bg-white border-t shadow-lg"
                class:hidden=move || !nav.with(|n| n.menu_open)
            >
                <div class="px-2 pt-2 pb-3 space-y-1">{mobile_links}</div>
            </div>
        </nav>
    }
}
