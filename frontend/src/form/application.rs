use chrono::Utc;
use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

use crate::components::pricing::EarlyBirdPricingForm;
use crate::config;
use crate::form::fields::{InputField, SelectField, TextAreaField};
use crate::form::model::{Field, PAYMENT_CONTACT_OPTIONS, PAYMENT_METHODS, TSHIRT_SIZES, YES_NO};
use crate::form::submit::send_application;
use crate::form::wizard::{ApplicationWizard, FormAction, FormStep};
use crate::snap::page::smooth_scroll_to;

const MAIL_ICON: &str = "M2.003 5.884L10 9.882l7.997-3.998A2 2 0 0016 4H4a2 2 0 00-1.997 1.884zM18 8.118l-8 4-8-4V14a2 2 0 002 2h12a2 2 0 002-2V8.118z";
const CHAT_ICON: &str = "M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z";

#[derive(Properties, PartialEq)]
struct PolicyCardProps {
    title: &'static str,
    lines: Vec<&'static str>,
}

#[function_component(PolicyCard)]
fn policy_card(props: &PolicyCardProps) -> Html {
    html! {
        <div class="info-card">
            <p class="info-title">{props.title}</p>
            { for props.lines.iter().map(|line| html! { <p class="info-note">{*line}</p> }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ContactLinksProps {
    #[prop_or_default]
    buttons: bool,
}

#[function_component(ContactLinks)]
fn contact_links(props: &ContactLinksProps) -> Html {
    let (email_text, whatsapp_text) = if props.buttons {
        ("Email Us", "WhatsApp")
    } else {
        (config::CONTACT_EMAIL, config::WHATSAPP_DISPLAY)
    };
    let class = if props.buttons { "contact-buttons" } else { "contact-list" };

    html! {
        <div {class}>
            <a href={config::mailto_link()} class="contact-primary">
                <svg class="icon" fill="currentColor" viewBox="0 0 20 20"><path d={MAIL_ICON} /></svg>
                {email_text}
            </a>
            <a href={config::whatsapp_link(None)} target="_blank" rel="noopener noreferrer" class="contact-secondary">
                <svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={CHAT_ICON} />
                </svg>
                {whatsapp_text}
            </a>
        </div>
    }
}

#[function_component(ApplicationForm)]
pub fn application_form() -> Html {
    let wizard = use_reducer(ApplicationWizard::default);
    let form_ref = use_node_ref();
    let first_render = use_mut_ref(|| true);

    // Every step change brings the top of the form back into view
    {
        let form_ref = form_ref.clone();
        use_effect_with_deps(
            move |_| {
                let initial = std::mem::replace(&mut *first_render.borrow_mut(), false);
                if !initial {
                    if let Some(el) = form_ref.cast::<Element>() {
                        smooth_scroll_to(&el);
                    }
                }
                || ()
            },
            wizard.step,
        );
    }

    let on_change = {
        let wizard = wizard.dispatcher();
        Callback::from(move |(field, value): (Field, String)| {
            wizard.dispatch(FormAction::SetText(field, value));
        })
    };
    let on_next = {
        let wizard = wizard.dispatcher();
        Callback::from(move |_: MouseEvent| wizard.dispatch(FormAction::Next))
    };
    let on_back = {
        let wizard = wizard.dispatcher();
        Callback::from(move |_: MouseEvent| wizard.dispatch(FormAction::Back))
    };
    let on_toggle_medical = {
        let wizard = wizard.dispatcher();
        Callback::from(move |_: MouseEvent| wizard.dispatch(FormAction::ToggleMedicalCondition))
    };
    let on_passport = {
        let wizard = wizard.dispatcher();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            wizard.dispatch(FormAction::SetPassportConfirmation(input.checked()));
        })
    };

    let on_submit = {
        let wizard = wizard.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = match wizard.prepare_submission(Utc::now()) {
                Ok(Some(payload)) => payload,
                Ok(None) => return,
                Err(err) => {
                    wizard.dispatch(FormAction::Rejected(err));
                    return;
                }
            };
            wizard.dispatch(FormAction::SubmitStarted);
            let dispatcher = wizard.dispatcher();
            spawn_local(async move {
                match send_application(config::get_form_endpoint_url(), config::get_delivery_mode(), &payload).await {
                    Ok(()) => dispatcher.dispatch(FormAction::SubmitSucceeded),
                    Err(err) => {
                        error!("Application submission failed: {}", err);
                        dispatcher.dispatch(FormAction::SubmitFailed(err));
                    }
                }
            });
        })
    };

    let data = &wizard.data;
    let value = |field: Field| AttrValue::from(data.get(field).to_string());
    let step = wizard.step;

    let body = match step {
        FormStep::Submitted => html! {
            <div class="form-success">
                <div class="success-badge">
                    <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7" />
                    </svg>
                </div>
                <h3>{"Application Submitted!"}</h3>
                <p class="lead">{"Thank you for applying to Yeshivas Kayitz Panama 5786."}</p>
                <p>{"We will review your application and be in touch shortly regarding payment and next steps."}</p>
                <p>{"Don't forget to submit your passport documents via email or WhatsApp."}</p>
                <ContactLinks buttons={true} />
            </div>
        },
        FormStep::Participant => html! {
            <div class="form-step">
                <h3>{"Participant Information"}</h3>
                <div class="field-row">
                    <InputField label="First Legal Name" field={Field::FirstName} value={value(Field::FirstName)} on_change={on_change.clone()} placeholder="John" />
                    <InputField label="Last Legal Name" field={Field::LastName} value={value(Field::LastName)} on_change={on_change.clone()} placeholder="Doe" />
                </div>
                <InputField label="Hebrew Name" field={Field::HebrewName} value={value(Field::HebrewName)} on_change={on_change.clone()} placeholder="e.g. Yochanan ben David" />
                <InputField label="Date of Birth" field={Field::DateOfBirth} input_type="date" value={value(Field::DateOfBirth)} on_change={on_change.clone()} />
                <div class="field-row">
                    <InputField label="Phone Number" field={Field::ParticipantPhone} input_type="tel" value={value(Field::ParticipantPhone)} on_change={on_change.clone()} placeholder="+1 (555) 000-0000" />
                    <InputField label="Email Address" field={Field::ParticipantEmail} input_type="email" value={value(Field::ParticipantEmail)} on_change={on_change.clone()} placeholder="john@example.com" />
                </div>
                <div class="field-row">
                    <InputField label="Weight (lbs)" field={Field::Weight} value={value(Field::Weight)} on_change={on_change.clone()} placeholder="e.g. 160" />
                    <InputField label="Height" field={Field::Height} value={value(Field::Height)} on_change={on_change.clone()} placeholder="e.g. 5'10\"" />
                </div>
                <TextAreaField
                    label="Experience in Horseback Riding"
                    field={Field::HorsebackExperience}
                    value={value(Field::HorsebackExperience)}
                    on_change={on_change.clone()}
                    required={false}
                    rows={2}
                    placeholder="Describe your experience, or write 'None'"
                />
                <SelectField label="T-Shirt Size" field={Field::TshirtSize} value={value(Field::TshirtSize)} options={TSHIRT_SIZES} on_change={on_change.clone()} />
                <div class="form-actions">
                    <button type="button" class="btn-primary" onclick={on_next}>{"Continue to Step 2"}</button>
                </div>
            </div>
        },
        FormStep::Family => html! {
            <div class="form-step">
                <h3>{"Family & Background"}</h3>
                <div class="field-row">
                    <InputField label="Father's Full Name" field={Field::FatherName} value={value(Field::FatherName)} on_change={on_change.clone()} placeholder="Full name" />
                    <InputField label="Father's Phone" field={Field::FatherPhone} input_type="tel" value={value(Field::FatherPhone)} on_change={on_change.clone()} placeholder="+1 (555) 000-0000" />
                </div>
                <div class="field-row">
                    <InputField label="Mother's Full Name" field={Field::MotherName} value={value(Field::MotherName)} on_change={on_change.clone()} placeholder="Full name" />
                    <InputField label="Mother's Phone" field={Field::MotherPhone} input_type="tel" value={value(Field::MotherPhone)} on_change={on_change.clone()} placeholder="+1 (555) 000-0000" />
                </div>
                <InputField label="Parents' Contact Email" field={Field::ParentsEmail} input_type="email" value={value(Field::ParentsEmail)} on_change={on_change.clone()} placeholder="parents@example.com" />
                <SelectField
                    label="Who should we reach out to regarding payment?"
                    field={Field::PaymentContact}
                    value={value(Field::PaymentContact)}
                    options={PAYMENT_CONTACT_OPTIONS}
                    on_change={on_change.clone()}
                />
                if data.wants_other_payment_contact() {
                    <InputField label="Please specify" field={Field::PaymentContactOther} value={value(Field::PaymentContactOther)} on_change={on_change.clone()} placeholder="Name and contact info" />
                }
                <InputField label="Home Address (including State and Zip)" field={Field::HomeAddress} value={value(Field::HomeAddress)} on_change={on_change.clone()} placeholder="123 Main St, City, State, ZIP" />
                <InputField
                    label="Emergency Contact (full name + phone, not a parent)"
                    field={Field::EmergencyContact}
                    value={value(Field::EmergencyContact)}
                    on_change={on_change.clone()}
                    placeholder="Name, (555) 000-0000"
                />

                <div>
                    <label class="field-label">{"Any medical condition? "}<span class="required-mark">{"*"}</span></label>
                    <div class="toggle-row">
                        <button
                            type="button"
                            class={classes!("toggle-switch", data.has_medical_condition.then_some("active"))}
                            aria-label="Toggle medical condition"
                            onclick={on_toggle_medical}
                        />
                        <span>{if data.has_medical_condition { "Yes" } else { "No" }}</span>
                    </div>
                    if data.has_medical_condition {
                        <TextAreaField
                            label="Please describe the medical condition"
                            field={Field::MedicalConditionDetails}
                            value={value(Field::MedicalConditionDetails)}
                            on_change={on_change.clone()}
                            placeholder="Include allergies, medications, and any relevant details"
                        />
                    }
                </div>

                <TextAreaField
                    label="Where were you this past year (5785-5786)?"
                    field={Field::PastYearDetails}
                    value={value(Field::PastYearDetails)}
                    on_change={on_change.clone()}
                    placeholder="Include place, timeframe, activity, and 1 reference contact (not family)"
                />
                <InputField label="How did you hear about our program?" field={Field::HowDidYouHear} value={value(Field::HowDidYouHear)} on_change={on_change.clone()} placeholder="Friend, social media, etc." />
                <TextAreaField
                    label="Any further comments"
                    field={Field::FurtherComments}
                    value={value(Field::FurtherComments)}
                    on_change={on_change.clone()}
                    required={false}
                    placeholder="Anything else you'd like us to know"
                />

                <div class="form-block">
                    <h4>{"Payment & Policy"}</h4>
                    <div class="info-stack">
                        <EarlyBirdPricingForm />
                        <PolicyCard title="Medical Insurance Included" lines={vec!["Comprehensive coverage for the duration of the program"]} />
                        <PolicyCard title="$100 Refundable Deposit" lines={vec!["Cash damage deposit required upon arrival, fully refundable"]} />
                        <PolicyCard
                            title="Cancellation Policy"
                            lines={vec!["Before June 1, 2026: 50% refund", "After June 1, 2026: No refund"]}
                        />
                        <p class="airfare-note">{"Airfare is not included in the program cost."}</p>
                    </div>
                    <SelectField label="Payment Method" field={Field::PaymentMethod} value={value(Field::PaymentMethod)} options={PAYMENT_METHODS} on_change={on_change.clone()} />
                    <SelectField
                        label="Are you interested in sponsoring another camper?"
                        field={Field::SponsorInterest}
                        value={value(Field::SponsorInterest)}
                        options={YES_NO}
                        on_change={on_change.clone()}
                    />
                    <p class="form-hint">{"After submitting this form, you will be contacted regarding your selected payment method."}</p>
                </div>

                <div class="form-block">
                    <h4>{"Required Travel Documents"}</h4>
                    <div class="info-card documents">
                        <p>{"Please submit the following documents separately via:"}</p>
                        <ContactLinks />
                        <p class="info-title">{"Required:"}</p>
                        <ul>
                            <li>{"Passport number"}</li>
                            <li>{"Passport expiration date (must be valid 6 months beyond return date)"}</li>
                            <li>{"Clear passport photo"}</li>
                        </ul>
                    </div>
                    <label class="confirm-row">
                        <input type="checkbox" checked={data.passport_confirmation} onchange={on_passport} />
                        <span>
                            {"I confirm that the passport is valid and I will submit required documents separately. "}
                            <span class="required-mark">{"*"}</span>
                        </span>
                    </label>
                </div>

                <div class="form-actions split">
                    <button type="button" class="btn-secondary" onclick={on_back}>{"Back"}</button>
                    <button type="submit" class="btn-primary" disabled={wizard.submitting}>
                        if wizard.submitting {
                            <span class="spinner-row"><span class="spinner" />{"Submitting..."}</span>
                        } else {
                            {"Submit Application"}
                        }
                    </button>
                </div>
            </div>
        },
    };

    html! {
        <div ref={form_ref} class="application-form">
            <style>
            {r#"
                .application-form { max-width: 42rem; margin: 0 auto; }
                .application-form h3 { font-size: 1.25rem; font-weight: 600; color: #111827; margin-bottom: 1.5rem; }
                .application-form h4 { font-size: 1.125rem; font-weight: 600; color: #111827; margin-bottom: 1.25rem; }
                .step-indicator { display: flex; align-items: center; justify-content: center; gap: 0.75rem; margin-bottom: 2.5rem; }
                .step-dot {
                    display: flex; align-items: center; justify-content: center;
                    width: 36px; height: 36px; border-radius: 9999px;
                    font-size: 0.875rem; font-weight: 600;
                    background: #f3f4f6; color: #9ca3af; transition: all 0.3s;
                }
                .step-dot.done { background: #111827; color: #fff; }
                .step-line { width: 64px; height: 2px; background: #e5e7eb; transition: all 0.3s; }
                .step-line.done { background: #111827; }
                .step-labels { display: flex; justify-content: space-between; font-size: 0.75rem; color: #6b7280; margin-bottom: 2rem; padding: 0 0.5rem; }
                .step-labels .current { color: #111827; font-weight: 500; }
                .form-error {
                    margin-bottom: 1.5rem; padding: 1rem; border-radius: 0.5rem;
                    background: #fef2f2; border: 1px solid #fee2e2; color: #dc2626; font-size: 0.875rem;
                }
                .form-step { display: flex; flex-direction: column; gap: 1.25rem; animation: step-in 0.3s ease-in-out; }
                @keyframes step-in { from { opacity: 0; transform: translateX(80px); } to { opacity: 1; transform: none; } }
                .field-row { display: grid; grid-template-columns: 1fr; gap: 1.25rem; }
                @media (min-width: 640px) { .field-row { grid-template-columns: 1fr 1fr; } }
                .field-label { display: block; font-size: 0.875rem; font-weight: 500; color: #374151; margin-bottom: 0.375rem; }
                .required-mark { color: #f87171; }
                .field-input {
                    width: 100%; padding: 0.75rem 1rem; border: 1px solid #e5e7eb; border-radius: 0.5rem;
                    background: #fff; color: #111827; transition: all 0.2s;
                }
                .field-input:focus { outline: none; border-color: #9ca3af; box-shadow: 0 0 0 2px rgba(17, 24, 39, 0.1); }
                .field-select { appearance: none; cursor: pointer; }
                .field-textarea { resize: none; }
                .toggle-row { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.75rem; color: #4b5563; font-size: 0.875rem; }
                .toggle-switch {
                    position: relative; width: 44px; height: 24px; border-radius: 9999px;
                    background: #e5e7eb; border: none; cursor: pointer; transition: background 0.2s;
                }
                .toggle-switch::after {
                    content: ""; position: absolute; top: 2px; left: 2px; width: 20px; height: 20px;
                    border-radius: 9999px; background: #fff; transition: transform 0.2s;
                }
                .toggle-switch.active { background: #111827; }
                .toggle-switch.active::after { transform: translateX(20px); }
                .form-block { border-top: 1px solid #f3f4f6; padding-top: 2rem; margin-top: 2rem; display: flex; flex-direction: column; gap: 1.25rem; }
                .info-stack { display: flex; flex-direction: column; gap: 1rem; }
                .info-card { padding: 1rem; background: #f9fafb; border: 1px solid #f3f4f6; border-radius: 0.5rem; }
                .info-title { font-size: 0.875rem; font-weight: 500; color: #374151; }
                .info-note { font-size: 0.75rem; color: #6b7280; }
                .cost-row { display: flex; justify-content: space-between; align-items: baseline; }
                .cost-label { font-size: 0.875rem; font-weight: 500; color: #374151; }
                .cost-amount { font-size: 1.25rem; font-weight: 700; color: #111827; }
                .strike { text-decoration: line-through; }
                .airfare-note { font-size: 0.75rem; color: #9ca3af; font-style: italic; }
                .form-hint { font-size: 0.75rem; color: #6b7280; padding: 0.75rem; background: #f9fafb; border: 1px solid #f3f4f6; border-radius: 0.5rem; }
                .documents ul { list-style: disc inside; font-size: 0.875rem; color: #4b5563; }
                .contact-list { display: flex; flex-direction: column; gap: 0.5rem; margin: 1rem 0; }
                .contact-list a { display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; color: #1f2937; text-decoration: none; }
                .contact-buttons { display: flex; flex-wrap: wrap; gap: 0.75rem; justify-content: center; }
                .contact-buttons a {
                    display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem; text-decoration: none;
                }
                .contact-buttons .contact-primary { background: #111827; color: #fff; }
                .contact-buttons .contact-secondary { border: 1px solid #e5e7eb; color: #374151; }
                .icon { width: 16px; height: 16px; }
                .confirm-row { display: flex; align-items: flex-start; gap: 0.75rem; cursor: pointer; font-size: 0.875rem; color: #4b5563; }
                .confirm-row input { margin-top: 0.25rem; }
                .form-actions { display: flex; gap: 0.75rem; padding-top: 1rem; }
                .form-actions button { flex: 1; padding: 0.875rem; border-radius: 0.5rem; font-weight: 500; cursor: pointer; transition: all 0.2s; }
                .form-actions.split .btn-primary { flex: 2; }
                .btn-primary { background: #111827; color: #fff; border: none; }
                .btn-primary:hover { background: #1f2937; }
                .btn-primary:disabled { opacity: 0.5; cursor: not-allowed; }
                .btn-secondary { background: #fff; color: #374151; border: 1px solid #e5e7eb; }
                .spinner-row { display: flex; align-items: center; justify-content: center; gap: 0.5rem; }
                .spinner {
                    width: 16px; height: 16px; border-radius: 9999px;
                    border: 2px solid rgba(255, 255, 255, 0.3); border-top-color: #fff;
                    animation: spin 0.8s linear infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .form-success { text-align: center; padding: 4rem 1.5rem; color: #6b7280; }
                .form-success h3 { font-size: 1.875rem; font-weight: 700; }
                .form-success p { margin-bottom: 0.5rem; }
                .form-success .lead { font-size: 1.125rem; color: #4b5563; }
                .form-success .contact-buttons { margin-top: 2rem; }
                .success-badge {
                    width: 80px; height: 80px; margin: 0 auto 1.5rem; border-radius: 9999px;
                    background: #111827; color: #fff; display: flex; align-items: center; justify-content: center;
                }
                .success-badge svg { width: 40px; height: 40px; }
            "#}
            </style>
            if step != FormStep::Submitted {
                <>
                    <div class="step-indicator">
                        <div class="step-dot done">{"1"}</div>
                        <div class={classes!("step-line", (step.number() >= 2).then_some("done"))} />
                        <div class={classes!("step-dot", (step.number() >= 2).then_some("done"))}>{"2"}</div>
                    </div>
                    <div class="step-labels">
                        <span class={classes!((step == FormStep::Participant).then_some("current"))}>{"Participant Info"}</span>
                        <span class={classes!((step == FormStep::Family).then_some("current"))}>{"Family & Background"}</span>
                    </div>
                    if let Some(err) = wizard.error.as_ref() {
                        <div class="form-error" role="alert">
                            {err.to_string()}
                            if err.is_transport() {
                                <ContactLinks />
                            }
                        </div>
                    }
                </>
            }
            <form onsubmit={on_submit} novalidate={true}>
                {body}
            </form>
        </div>
    }
}
