use leptos::prelude::*;

use crate::core::content::{SERVICES, Service};
use crate::ui::icon::Icon;

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16 fade-in">
                    <h2 class="text-4xl font-bold text-gray-900 mb-4">"Our Expertise"</h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "We deliver end-to-end solutions that transform raw data into actionable insights and competitive advantages."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SERVICES.into_iter().map(|service| view! { <ServiceCard service/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <div class=format!("bg-gradient-to-br {} rounded-xl p-6 card-hover fade-in", service.gradient)>
            <div class=format!("w-12 h-12 {} rounded-lg flex items-center justify-center mb-4", service.icon_bg)>
                <Icon name=service.icon class="text-white text-xl"/>
            </div>
            <h3 class="text-xl font-semibold mb-3">{service.title}</h3>
            <p class="text-gray-600 mb-4">{service.description}</p>
            <ul class="text-sm text-gray-500 space-y-1">
                {service
                    .features
                    .into_iter()
                    .map(|feature| view! { <li>"• "{feature}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
