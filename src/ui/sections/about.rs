//! About section: approach list, stats that count up when scrolled into view
//! and the rotating technology ecosystem

use std::time::Duration;

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::content::{ABOUT_STATS, APPROACHES, TECHNOLOGY_CATEGORIES, Technology};
use crate::core::visibility::{ObserverOptions, TriggerMode};
use crate::core::{SiteConfig, StatValue};
use crate::ui::hooks::{use_counter_group, use_rotation, use_visibility_trigger};
use crate::ui::icon::Icon;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16 fade-in">
                    <h2 class="text-4xl font-bold text-gray-900 mb-4">"Why Choose Mímir?"</h2>
                    <p class="text-xl text-gray-600">"Your trusted partner in data-driven transformation"</p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-center mb-20">
                    <Approach/>
                    <AboutStats/>
                </div>

                <TechnologyEcosystem/>
            </div>
        </section>
    }
}

#[component]
fn Approach() -> impl IntoView {
    view! {
        <div class="fade-in">
            <h3 class="text-3xl font-bold mb-6">"Our Approach"</h3>
            <p class="text-gray-600 mb-6 text-lg">
                "Named after the Norse god of wisdom and knowledge, Mímir Software Factory brings deep expertise and innovative thinking to every project. We don't just build solutions, we craft intelligent systems that evolve with your business."
            </p>
            <div class="space-y-6">
                {APPROACHES
                    .into_iter()
                    .map(|approach| {
                        view! {
                            <div class="flex items-start space-x-4 p-4 rounded-lg hover:bg-gray-50 transition-colors cursor-pointer group">
                                <div class="w-12 h-12 bg-gradient-to-br from-indigo-500 to-purple-600 rounded-lg flex items-center justify-center flex-shrink-0 group-hover:scale-110 transition-transform">
                                    <Icon name=approach.icon class="text-white text-lg"/>
                                </div>
                                <div>
                                    <h4 class="font-semibold mb-2 text-gray-900 group-hover:text-indigo-600 transition-colors">
                                        {approach.title}
                                    </h4>
                                    <p class="text-gray-600">{approach.description}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Stats grid. Counting starts when half of the grid is visible; scrolling
/// away and back does not restart finished counters.
#[component]
fn AboutStats() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let container = NodeRef::<Div>::new();

    let counters = use_counter_group(
        ABOUT_STATS.iter().map(|s| StatValue::parse(s.number)).collect(),
        config.about_counters,
    );
    use_visibility_trigger(
        container,
        ObserverOptions::stats(),
        TriggerMode::Repeatable,
        counters.start,
    );

    view! {
        <div
            node_ref=container
            class="bg-gradient-to-br from-indigo-50 to-purple-50 rounded-2xl p-8 fade-in stats-container"
        >
            <div class="grid grid-cols-2 gap-6">
                {ABOUT_STATS
                    .into_iter()
                    .enumerate()
                    .map(|(index, stat)| {
                        let display = counters.display(index);
                        view! {
                            <div class="text-center p-4 bg-white rounded-xl shadow-sm hover:shadow-md transition-shadow cursor-pointer group">
                                <div class="flex flex-col items-center">
                                    <span class="text-2xl group-hover:scale-125 transition-transform">
                                        <Icon name=stat.icon class=stat.color/>
                                    </span>
                                    <div class="text-3xl font-bold text-indigo-600 mt-2 mb-2 group-hover:text-indigo-700 transition-colors">
                                        {move || display.get()}
                                    </div>
                                    <div class="text-sm text-gray-600 font-medium">{stat.label}</div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TechnologyEcosystem() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let category = use_rotation(
        TECHNOLOGY_CATEGORIES.len(),
        Duration::from_millis(config.category_rotation_ms),
    );
    let hovered = RwSignal::new(None::<&'static str>);

    view! {
        <div class="fade-in">
            <h3 class="text-3xl font-bold text-center mb-8">"Our Technology Ecosystem"</h3>
            <p class="text-center text-gray-600 mb-12 max-w-3xl mx-auto">
                "We leverage cutting-edge technologies across the entire data science and ML lifecycle, from data ingestion to model deployment and monitoring."
            </p>

            <div class="flex flex-wrap justify-center gap-2 mb-8" role="tablist">
                {TECHNOLOGY_CATEGORIES
                    .into_iter()
                    .enumerate()
                    .map(|(index, c)| {
                        view! {
                            <button
                                role="tab"
                                aria-selected=move || (category.active() == index).to_string()
                                class=move || {
                                    if category.active() == index {
                                        "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 bg-indigo-600 text-white shadow-lg scale-105"
                                    } else {
                                        "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 bg-gray-100 text-gray-600 hover:bg-gray-200 hover:scale-105"
                                    }
                                }
                                on:click=move |_| category.select(index)
                            >
                                {c.name}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="min-h-[400px]">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                    {move || {
                        TECHNOLOGY_CATEGORIES
                            .get(category.active())
                            .map(|c| c.technologies)
                            .unwrap_or_default()
                            .iter()
                            .enumerate()
                            .map(|(index, tech)| view! { <TechnologyCard tech=*tech index hovered/> })
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="mt-12 grid grid-cols-1 md:grid-cols-3 gap-8">
                <div class="text-center p-6 bg-gradient-to-r from-blue-50 to-indigo-50 rounded-xl">
                    <div class="text-3xl font-bold text-blue-600 mb-2">"20+"</div>
                    <div class="text-sm text-gray-600">"Core Technologies"</div>
                </div>
                <div class="text-center p-6 bg-gradient-to-r from-green-50 to-emerald-50 rounded-xl">
                    <div class="text-3xl font-bold text-green-600 mb-2">{TECHNOLOGY_CATEGORIES.len()}</div>
                    <div class="text-sm text-gray-600">"Technology Categories"</div>
                </div>
                <div class="text-center p-6 bg-gradient-to-r from-purple-50 to-violet-50 rounded-xl">
                    <div class="text-3xl font-bold text-purple-600 mb-2">"100%"</div>
                    <div class="text-sm text-gray-600">"Cloud Native"</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TechnologyCard(
    tech: Technology,
    index: usize,
    hovered: RwSignal<Option<&'static str>>,
) -> impl IntoView {
    let name = tech.name;
    view! {
        <div
            class="bg-white rounded-xl p-6 shadow-sm border border-gray-100 hover:shadow-lg hover:scale-105 transition-all duration-300 cursor-pointer group"
            style=format!("animation: fadeInUp 0.6s ease forwards; animation-delay: {}ms", index * 100)
            on:mouseenter=move |_| hovered.set(Some(name))
            on:mouseleave=move |_| hovered.set(None)
        >
            <div class="text-center">
                <div
                    class="w-16 h-16 rounded-lg flex items-center justify-center mx-auto mb-4 group-hover:scale-110 transition-transform"
                    style=format!("background-color: {}15", tech.color)
                >
                    <Icon name=tech.icon class="text-2xl" style=format!("color: {}", tech.color)/>
                </div>
                <h4 class="font-semibold text-gray-900 mb-2 group-hover:text-indigo-600 transition-colors">
                    {name}
                </h4>
                <p class=move || {
                    if hovered.get() == Some(name) {
                        "text-xs text-gray-500 transition-all duration-300 opacity-100 transform translate-y-0"
                    } else {
                        "text-xs text-gray-500 transition-all duration-300 opacity-0 transform translate-y-2"
                    }
                }>{tech.description}</p>
            </div>
        </div>
    }
}
