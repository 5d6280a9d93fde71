use leptos::prelude::*;

use crate::core::SiteConfig;
use crate::core::content::{FOOTER_COLUMNS, SOCIAL_LINKS};
use crate::ui::icon::{Icon, icons};
use crate::ui::sections::navigation::scroll_to_section;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <footer class="bg-gray-800 text-white py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-4 gap-8">
                    <div>
                        <h3 class="text-xl font-bold mb-4 gradient-text">"Mímir Software Factory"</h3>
                        <p class="text-gray-400">
                            "Transforming businesses through intelligent data solutions and machine learning innovation."
                        </p>
                    </div>

                    {FOOTER_COLUMNS
                        .into_iter()
                        .map(|column| {
                            view! {
                                <div>
                                    <h4 class="font-semibold mb-4">{column.title}</h4>
                                    <ul class="space-y-2 text-gray-400">
                                        {column
                                            .links
                                            .iter()
                                            .map(|link| {
                                                let section = link.section;
                                                view! {
                                                    <li>
                                                        <button
                                                            class="hover:text-white transition-colors"
                                                            on:click=move |_| scroll_to_section(section)
                                                        >
                                                            {link.name}
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}

                    <div>
                        <h4 class="font-semibold mb-4">"Connect"</h4>
                        <div class="flex space-x-4">
                            {SOCIAL_LINKS
                                .into_iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.name
                                            class="text-gray-400 hover:text-white transition-colors"
                                        >
                                            <Icon name=social.icon class="text-xl"/>
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <a
                                href=format!("mailto:{}", config.fallback_email)
                                aria-label="Email"
                                class="text-gray-400 hover:text-white transition-colors"
                            >
                                <Icon name=icons::ENVELOPE class="text-xl"/>
                            </a>
                        </div>
                    </div>
                </div>

                <div class="border-t border-gray-700 mt-8 pt-8 text-center text-gray-400">
                    <p>"© 2025 Mímir Software Factory. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}
