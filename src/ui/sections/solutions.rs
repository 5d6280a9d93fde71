use leptos::prelude::*;

use crate::core::content::{SOLUTIONS, Solution};

#[component]
pub fn SolutionsSection() -> impl IntoView {
    view! {
        <section id="solutions" class="py-20 bg-gray-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16 fade-in">
                    <h2 class="text-4xl font-bold text-gray-900 mb-4">"Our Solutions"</h2>
                    <p class="text-xl text-gray-600">"Tailored solutions for specific industry challenges"</p>
                </div>

                <div class="space-y-16">
                    {SOLUTIONS.into_iter().map(|solution| view! { <SolutionRow solution/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SolutionRow(solution: Solution) -> impl IntoView {
    // Reversed rows put the text in the second column on wide screens
    let (text_order, highlight_order) = if solution.reversed {
        ("lg:col-start-2", "lg:col-start-1 lg:row-start-1")
    } else {
        ("", "")
    };

    view! {
        <div class="grid lg:grid-cols-2 gap-12 items-center">
            <div class=format!("fade-in {}", text_order)>
                <h3 class="text-3xl font-bold mb-6">{solution.title}</h3>
                <p class="text-gray-600 mb-6">{solution.description}</p>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    {solution
                        .features
                        .into_iter()
                        .map(|feature| {
                            view! {
                                <div class="bg-white p-4 rounded-lg">
                                    <h4 class="font-semibold mb-2">{feature.title}</h4>
                                    <p class="text-sm text-gray-600">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class=format!("bg-white rounded-xl p-8 shadow-lg fade-in {}", highlight_order)>
                <div class="text-center">
                    <div class="text-4xl mb-4">{solution.highlight_icon}</div>
                    <h4 class="text-xl font-semibold mb-2">{solution.highlight_title}</h4>
                    <p class="text-gray-600">{solution.highlight_description}</p>
                </div>
            </div>
        </div>
    }
}
