//! Contact section and the submission driver
//!
//! All form state lives in a single `RwSignal<ContactForm>`; components only
//! forward events to it. Submission runs on `spawn_local` and posts the
//! outcome back into the same signal.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::core::contact::mailto_link;
use crate::core::{ContactForm, ContactPayload, FormField, SiteConfig, SubmissionStatus};
use crate::ui::common::{ErrorMessage, InputField, SuccessMessage, TextAreaField};
use crate::ui::hooks::AliveFlag;
use crate::ui::icon::{Icon, icons};

const SUCCESS_BANNER: &str = "Thank you! Your message has been sent. We'll get back to you soon.";

/// Send `payload` and feed the outcome back into `form`. A success schedules
/// the delayed reset.
#[cfg(not(feature = "ssr"))]
fn dispatch(
    form: RwSignal<ContactForm>,
    payload: ContactPayload,
    config: SiteConfig,
    alive: AliveFlag,
) {
    use gloo_timers::future::TimeoutFuture;
    use leptos::task::spawn_local;

    use crate::core::{SubmissionOutcome, submit_with_fallback};
    use crate::ui::transport::{AsyncRequestTransport, LegacyFormPostTransport};

    spawn_local(async move {
        let outcome = submit_with_fallback(
            &config.form_endpoint,
            &payload,
            &AsyncRequestTransport,
            &LegacyFormPostTransport,
        )
        .await;

        match &outcome {
            SubmissionOutcome::Delivered => leptos::logging::log!("Contact form {}", outcome),
            SubmissionOutcome::DeliveredUnconfirmed => {
                leptos::logging::warn!("Contact form {}", outcome)
            }
            _ => leptos::logging::error!("Contact form {}", outcome),
        }

        if !alive.is_alive() {
            return;
        }
        let ticket = form
            .try_update(|f| f.finish(&outcome, &config.fallback_email))
            .flatten();

        if let Some(ticket) = ticket {
            let reset_ms = u32::try_from(config.success_reset().as_millis()).unwrap_or(u32::MAX);
            TimeoutFuture::new(reset_ms).await;
            if alive.is_alive() {
                form.try_update(|f| f.expire_success(ticket));
            }
        }
    });
}

#[cfg(feature = "ssr")]
fn dispatch(
    _form: RwSignal<ContactForm>,
    _payload: ContactPayload,
    _config: SiteConfig,
    _alive: AliveFlag,
) {
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <section id="contact" class="py-20 bg-gray-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16 fade-in">
                    <h2 class="text-4xl font-bold mb-4">"Ready to Transform Your Business?"</h2>
                    <p class="text-xl text-gray-300">
                        "Let's discuss how we can help you unlock the power of your data"
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    <ContactDetails config=config.clone()/>
                    <ContactFormPanel config/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetails(config: SiteConfig) -> impl IntoView {
    view! {
        <div class="fade-in">
            <h3 class="text-2xl font-bold mb-6">"Get in Touch"</h3>
            <div class="space-y-4 mb-8">
                <div class="flex items-center space-x-3">
                    <Icon name=icons::ENVELOPE class="text-indigo-400"/>
                    <a href=format!("mailto:{}", config.fallback_email) class="hover:text-indigo-300 transition-colors">
                        {config.fallback_email.clone()}
                    </a>
                </div>
                <div class="flex items-center space-x-3">
                    <Icon name=icons::PHONE class="text-indigo-400"/>
                    <span>{config.contact_phone.clone()}</span>
                </div>
                <div class="flex items-center space-x-3">
                    <Icon name=icons::MAP_MARKER class="text-indigo-400"/>
                    <span>"Global Remote Team"</span>
                </div>
            </div>

            <div class="bg-gray-800 rounded-lg p-6">
                <h4 class="font-semibold mb-3">"Free Consultation"</h4>
                <p class="text-gray-300 mb-4">
                    "Book a 30-minute strategy session to explore how AI and data science can accelerate your business goals."
                </p>
                <a
                    href=format!("mailto:{}?subject=Free%20Consultation", config.fallback_email)
                    class="inline-block bg-indigo-600 text-white px-6 py-2 rounded-lg hover:bg-indigo-700 transition-colors"
                >
                    "Schedule Call"
                </a>
            </div>
        </div>
    }
}

#[component]
fn ContactFormPanel(config: SiteConfig) -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let alive = AliveFlag::new();

    let value = move |field: FormField| {
        Signal::derive(move || form.with(|f| f.value(field).to_string()))
    };
    let error = move |field: FormField| {
        Signal::derive(move || form.with(|f| f.error(field).map(ToString::to_string)))
    };
    let on_input = move |field: FormField| {
        Callback::new(move |text: String| form.update(|f| f.input(field, text)))
    };
    let on_blur = move |field: FormField| Callback::new(move |_: ()| form.update(|f| f.blur(field)));
    let on_focus = move |field: FormField| Callback::new(move |_: ()| form.update(|f| f.focus(field)));

    let submitting = Signal::derive(move || form.with(ContactForm::is_submitting));
    let can_submit = move || form.with(ContactForm::can_submit);

    let failure = Signal::derive(move || form.with(|f| f.banner().map(str::to_string)));
    let success = Signal::derive(move || {
        form.with(|f| f.is_succeeded().then(|| SUCCESS_BANNER.to_string()))
    });

    let mailto = {
        let address = config.fallback_email.clone();
        move || form.with(|f| mailto_link(&address, f.fields()))
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(payload) = form.try_update(ContactForm::begin_submit).flatten() else {
            let errors = form.with_untracked(|f| f.errors().len());
            leptos::logging::log!("Submission blocked by {} field error(s)", errors);
            return;
        };

        leptos::logging::log!("Submitting contact form");
        dispatch(form, payload, config.clone(), alive.clone());
    };

    let button_class = move || {
        form.with(|f| match f.status() {
            SubmissionStatus::Succeeded => {
                "w-full py-3 rounded-lg font-semibold transition-colors bg-green-600 hover:bg-green-700 text-white"
            }
            SubmissionStatus::Validating | SubmissionStatus::Submitting => {
                "w-full py-3 rounded-lg font-semibold transition-colors bg-gray-600 text-gray-300 cursor-not-allowed"
            }
            _ if !f.can_submit() => {
                "w-full py-3 rounded-lg font-semibold transition-colors bg-indigo-600/50 text-white/70 cursor-not-allowed"
            }
            _ => {
                "w-full py-3 rounded-lg font-semibold transition-colors bg-indigo-600 hover:bg-indigo-700 text-white"
            }
        })
    };

    view! {
        <form class="space-y-6 fade-in" novalidate=true on:submit=on_submit>
            <ErrorMessage error=failure/>
            <SuccessMessage message=success/>

            <InputField
                name=FormField::Name.key()
                label="Name"
                required=true
                value=value(FormField::Name)
                on_input=on_input(FormField::Name)
                on_blur=on_blur(FormField::Name)
                on_focus=on_focus(FormField::Name)
                disabled=submitting
                error=error(FormField::Name)
            />
            <InputField
                name=FormField::Email.key()
                label="Email"
                required=true
                input_type="email"
                value=value(FormField::Email)
                on_input=on_input(FormField::Email)
                on_blur=on_blur(FormField::Email)
                on_focus=on_focus(FormField::Email)
                disabled=submitting
                error=error(FormField::Email)
            />
            <InputField
                name=FormField::Company.key()
                label="Company"
                value=value(FormField::Company)
                on_input=on_input(FormField::Company)
                on_blur=on_blur(FormField::Company)
                on_focus=on_focus(FormField::Company)
                disabled=submitting
                error=error(FormField::Company)
            />
            <TextAreaField
                name=FormField::Message.key()
                label=FormField::Message.label()
                required=true
                value=value(FormField::Message)
                on_input=on_input(FormField::Message)
                on_blur=on_blur(FormField::Message)
                on_focus=on_focus(FormField::Message)
                disabled=submitting
                error=error(FormField::Message)
                counter=Signal::derive(move || form.with(ContactForm::message_counter))
                over_limit=Signal::derive(move || form.with(ContactForm::message_over_soft_limit))
            />

            <button
                type="submit"
                class=button_class
                disabled=move || !can_submit()
            >
                {move || submitting.get().then(|| view! { <Icon name=icons::SPINNER class="mr-2"/> })}
                {move || form.with(ContactForm::button_label)}
            </button>

            <p class="text-sm text-gray-400 text-center">
                "Prefer email? "
                <a href=mailto class="text-indigo-400 hover:text-indigo-300 underline">
                    "Open a pre-filled message"
                </a>
            </p>
        </form>
    }
}
