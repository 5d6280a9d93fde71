//! Hero section: typewriter headline, counting stats, floating badges and
//! the live training dashboard

use std::time::Duration;

use leptos::prelude::*;

use crate::core::content::{FLOATING_BADGES, HERO_STATS, RECENT_ACTIVITY, TRAINING_MODELS, TYPEWRITER_PHRASES};
use crate::core::{Section, SiteConfig, StatValue};
use crate::ui::hooks::{
    CounterGroup, use_counter_group, use_progress, use_rotation, use_staggered_reveal,
    use_typewriter,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::sections::navigation::scroll_to_section;

#[component]
pub fn HeroSection() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    let headline = use_typewriter(&TYPEWRITER_PHRASES, config.typewriter);

    let counters = use_counter_group(
        HERO_STATS.iter().map(|s| StatValue::parse(s.value)).collect(),
        config.hero_counters,
    );
    // Hero counters start on mount rather than on visibility
    #[cfg(not(feature = "ssr"))]
    {
        let start = counters.start;
        Effect::new(move |_| start.run(()));
    }

    let badges = use_staggered_reveal(
        FLOATING_BADGES.len(),
        Duration::from_millis(config.badge_stagger_ms),
    );

    view! {
        <section id="home" class="gradient-bg text-white min-h-screen flex items-center relative overflow-hidden">
            <div class="absolute inset-0 opacity-10">
                <div class="absolute inset-0 bg-gradient-to-r from-transparent via-white to-transparent transform -skew-y-12 animate-pulse"></div>
            </div>

            // Floating technology badges
            <div class="absolute inset-0 pointer-events-none">
                {FLOATING_BADGES
                    .iter()
                    .enumerate()
                    .map(|(index, badge)| {
                        view! {
                            <div
                                class=move || {
                                    if badges.with(|b| b.is_visible(index)) {
                                        "absolute transition-all duration-1000 opacity-100 scale-100"
                                    } else {
                                        "absolute transition-all duration-1000 opacity-0 scale-0"
                                    }
                                }
                                style=format!(
                                    "left: {}%; top: {}%; animation: floating 4s ease-in-out infinite {}ms",
                                    badge.x,
                                    badge.y,
                                    badge.float_delay_ms,
                                )
                            >
                                <div class="bg-white bg-opacity-20 backdrop-blur-sm rounded-full px-3 py-1 text-xs font-medium border border-white border-opacity-30">
                                    {badge.name}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10 mb-6">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="fade-in">
                        <div class="mb-6">
                            <div class="inline-flex items-center space-x-2 bg-yellow-400 bg-opacity-20 backdrop-blur-sm rounded-full px-4 py-2 mb-6 border border-yellow-400 border-opacity-30">
                                <div class="w-2 h-2 bg-yellow-400 rounded-full animate-pulse"></div>
                                <span class="text-yellow-300 text-sm font-medium">"AI-Powered Solutions"</span>
                            </div>
                        </div>

                        <h1 class="text-5xl lg:text-6xl font-bold mb-6 leading-tight">
                            "Transform Your Business with"
                            <span class="block text-yellow-300 min-h-[1.2em]">
                                {move || headline.get()}
                                <span class="animate-pulse">"|"</span>
                            </span>
                        </h1>

                        <p class="text-xl mb-8 text-gray-100 leading-relaxed">
                            "Mímir Software Factory specializes in cutting-edge data science and machine learning solutions that drive measurable business impact. From AI strategy to implementation, we're your trusted partners in digital transformation."
                        </p>

                        <HeroStats counters=counters.clone()/>

                        <div class="flex flex-col sm:flex-row gap-5">
                            <button
                                class="bg-yellow-400 text-gray-900 px-8 py-3 rounded-lg font-semibold hover:bg-yellow-300 transition-all text-center transform hover:scale-105 hover:shadow-lg group"
                                on:click=move |_| scroll_to_section(Section::Contact)
                            >
                                <span class="group-hover:mr-2 transition-all">"Start Your Project"</span>
                                <Icon name=icons::ARROW_RIGHT class="opacity-0 group-hover:opacity-100 transition-all"/>
                            </button>
                            <button
                                class="border-2 border-white text-white px-8 py-3 rounded-lg font-semibold hover:bg-white hover:text-gray-900 transition-all text-center transform hover:scale-105 hover:shadow-lg group"
                                on:click=move |_| scroll_to_section(Section::Services)
                            >
                                <span class="group-hover:mr-2 transition-all">"Explore Services"</span>
                                <Icon name=icons::COMPASS class="opacity-0 group-hover:opacity-100 transition-all"/>
                            </button>
                        </div>
                    </div>

                    <TrainingDashboard counters=counters/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HeroStats(counters: CounterGroup) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-4 mb-8">
            {HERO_STATS
                .iter()
                .enumerate()
                .map(|(index, stat)| {
                    let display = counters.display(index);
                    view! {
                        <div class="bg-white bg-opacity-10 backdrop-blur-sm rounded-lg p-4 border border-white border-opacity-20 hover:bg-opacity-20 transition-all cursor-pointer group">
                            <div class="flex items-center space-x-3">
                                <div
                                    class="w-10 h-10 rounded-lg flex items-center justify-center group-hover:scale-110 transition-transform"
                                    style=format!("background-color: {}20", stat.color)
                                >
                                    <Icon name=stat.icon class="text-lg" style=format!("color: {}", stat.color)/>
                                </div>
                                <div>
                                    <div class="text-2xl font-bold group-hover:scale-105 transition-transform">
                                        {move || display.get()}
                                    </div>
                                    <div class="text-sm opacity-80">{stat.label}</div>
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Right-hand panel with the rotating model name and simulated progress
#[component]
fn TrainingDashboard(counters: CounterGroup) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    let model = use_rotation(
        TRAINING_MODELS.len(),
        Duration::from_millis(config.model_rotation_ms),
    );
    let progress = use_progress(Duration::from_millis(config.progress_tick_ms));

    let models_active = counters.display(0);
    let system_health = counters.display(1);

    view! {
        <div class="floating">
            <div class="bg-white bg-opacity-10 backdrop-blur-lg rounded-2xl p-8 border border-white border-opacity-20 hover:bg-opacity-15 transition-all">
                <div class="space-y-6">
                    <div class="flex items-center justify-between">
                        <div class="flex items-center space-x-3">
                            <div class="relative">
                                <div class="w-4 h-4 bg-green-400 rounded-full animate-pulse"></div>
                                <div class="absolute inset-0 w-4 h-4 bg-green-400 rounded-full animate-ping opacity-75"></div>
                            </div>
                            <span class="text-sm font-medium">
                                "AI Training: "
                                {move || TRAINING_MODELS.get(model.active()).copied().unwrap_or_default()}
                            </span>
                        </div>
                        <div class="text-xs text-green-300 animate-pulse">"ACTIVE"</div>
                    </div>

                    <div class="bg-white bg-opacity-20 rounded-lg p-4">
                        <div class="flex justify-between mb-2">
                            <span class="text-sm font-medium">"Data Processing"</span>
                            <span class="text-sm">{move || progress.with(|p| p.label())}</span>
                        </div>
                        <div class="bg-gray-300 bg-opacity-30 rounded-full h-3 overflow-hidden">
                            <div
                                class="bg-gradient-to-r from-yellow-400 to-orange-500 h-full rounded-full transition-all duration-300 relative"
                                style=move || progress.with(|p| p.width_style())
                            >
                                <div class="absolute inset-0 bg-white bg-opacity-30 animate-pulse"></div>
                            </div>
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="text-center p-3 bg-white bg-opacity-10 rounded-lg hover:bg-opacity-20 transition-all cursor-pointer group">
                            <div class="text-2xl font-bold mb-1 group-hover:scale-110 transition-transform">
                                {move || models_active.get()}
                            </div>
                            <div class="text-xs opacity-80">"Models Active"</div>
                        </div>
                        <div class="text-center p-3 bg-white bg-opacity-10 rounded-lg hover:bg-opacity-20 transition-all cursor-pointer group">
                            <div class="text-2xl font-bold mb-1 group-hover:scale-110 transition-transform">
                                {move || system_health.get()}
                            </div>
                            <div class="text-xs opacity-80">"System Health"</div>
                        </div>
                    </div>

                    <div class="space-y-2">
                        <div class="text-xs font-medium opacity-75 mb-3">"RECENT ACTIVITY"</div>
                        {RECENT_ACTIVITY
                            .iter()
                            .map(|activity| {
                                view! {
                                    <div class="flex items-center justify-between py-2 px-3 bg-white bg-opacity-5 rounded-lg hover:bg-opacity-10 transition-all">
                                        <div class="flex items-center space-x-2">
                                            <Icon name=activity.icon class=activity.color/>
                                            <span class="text-xs">{activity.action}</span>
                                        </div>
                                        <span class="text-xs opacity-60">{activity.time}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
