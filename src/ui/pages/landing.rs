//! Landing page
//!
//! Mounts every section and wires the page-level effects: the body
//! `loading` -> `loaded` switch and the generic `.fade-in` reveal.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::hooks::use_reveal_on_scroll;
use crate::ui::sections::{
    AboutSection, ContactSection, Footer, HeroSection, Navigation, ServicesSection,
    SolutionsSection,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        use crate::core::PageLifecycle;
        use crate::ui::transport::BodyClassList;

        match BodyClassList::current() {
            Some(body) => {
                PageLifecycle::new(body).mark_loaded();
            }
            None => leptos::logging::warn!("Document body unavailable, page stays in loading state"),
        }
    });

    use_reveal_on_scroll();

    view! {
        <Title text="Mímir Software Factory - Data & ML Consulting"/>
        <Meta
            name="description"
            content="Transform your business with cutting-edge data science and machine learning solutions. Expert consulting for AI strategy, implementation, and digital transformation."
        />
        <Meta
            name="keywords"
            content="data science, machine learning, AI consulting, data analytics, MLOps, artificial intelligence, business intelligence"
        />
        <Meta name="robots" content="index, follow"/>
        <Meta name="theme-color" content="#667eea"/>
        <Meta property="og:title" content="Mímir Software Factory - Data & ML Consulting"/>
        <Meta property="og:url" content="https://mimir-software-factory.github.io"/>
        <Meta property="og:type" content="website"/>

        <Navigation/>
        <main>
            <HeroSection/>
            <ServicesSection/>
            <SolutionsSection/>
            <AboutSection/>
            <ContactSection/>
        </main>
        <Footer/>
    }
}
