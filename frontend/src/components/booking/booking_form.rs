use crate::services::date_utils::today_key;
use crate::services::logging::Logger;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;
use yew::prelude::*;

fn checkbox_option(group: &str, value: &str, label: &str) -> Html {
    html! {
        <label class="checkbox-option">
            <input type="checkbox" name={group.to_string()} value={value.to_string()} />
            <span>{label}</span>
        </label>
    }
}

/// The venue intake form. Every constraint is native HTML5 validation
/// (required/pattern/min/max); the browser blocks submission until the form
/// is valid, and a valid submit only shows a transient acknowledgement.
/// Nothing is persisted.
#[function_component(BookingForm)]
pub fn booking_form() -> Html {
    let form_success = use_state(|| false);
    let form_ref = use_node_ref();

    let onsubmit = {
        let form_success = form_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            Logger::info_with_component("BookingForm", "booking request submitted");
            form_success.set(true);

            // Clear the acknowledgement after 3 seconds
            let form_success = form_success.clone();
            spawn_local(async move {
                gloo::timers::future::TimeoutFuture::new(3000).await;
                form_success.set(false);
            });
        })
    };

    let on_reset_click = {
        let form_ref = form_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let confirmed = web_sys::window()
                .map(|window| {
                    window
                        .confirm_with_message("Are you sure you want to reset the form?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if confirmed {
                if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                    form.reset();
                }
            }
        })
    };

    html! {
        <div class="booking-form-wrap">
            <div class="form-title">
                <h2>{"WEDDING HALL BOOKING FORM"}</h2>
                <div class="form-title-rule"></div>
                <p>{"Fill out the form below to book your perfect venue"}</p>
            </div>

            {if *form_success {
                html! {
                    <div class="form-message success">
                        {"🎉 Booking form submitted successfully!"}
                    </div>
                }
            } else { html! {} }}

            <form class="booking-form" ref={form_ref} {onsubmit}>
                <fieldset class="form-section hall-info">
                    <h3 class="form-section-title">{"📖 WEDDING HALL INFORMATION"}</h3>
                    <div class="form-grid two-col">
                        <div class="form-group">
                            <label for="hall-name">{"Hall Name *"}</label>
                            <input
                                type="text"
                                id="hall-name"
                                name="hall-name"
                                required={true}
                                placeholder="Enter hall name"
                            />
                        </div>
                        <div class="form-group">
                            <label for="contact-number">{"Contact Number *"}</label>
                            <input
                                type="tel"
                                id="contact-number"
                                name="contact-number"
                                required={true}
                                pattern="[0-9]{10}"
                                placeholder="Enter 10-digit contact number"
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="hall-address">{"Hall Address *"}</label>
                        <textarea
                            id="hall-address"
                            name="hall-address"
                            required={true}
                            rows="3"
                            placeholder="Enter complete hall address with city and pincode"
                        />
                    </div>
                </fieldset>

                <fieldset class="form-section event-details">
                    <h3 class="form-section-title">{"📅 EVENT DETAILS"}</h3>
                    <div class="form-grid three-col">
                        <div class="form-group">
                            <label for="booking-date">{"Booking Date *"}</label>
                            <input
                                type="date"
                                id="booking-date"
                                name="booking-date"
                                required={true}
                                min={today_key()}
                            />
                        </div>
                        <div class="form-group">
                            <label for="event-time">{"Event Start Time *"}</label>
                            <input type="time" id="event-time" name="event-time" required={true} />
                        </div>
                        <div class="form-group">
                            <label for="event-duration">{"Event Duration (hours) *"}</label>
                            <select id="event-duration" name="event-duration" required={true}>
                                <option value="" selected={true}>{"Select duration"}</option>
                                <option value="2">{"2 hours"}</option>
                                <option value="3">{"3 hours"}</option>
                                <option value="4">{"4 hours"}</option>
                                <option value="5">{"5 hours"}</option>
                                <option value="6">{"6 hours"}</option>
                                <option value="8">{"8 hours"}</option>
                                <option value="12">{"12 hours (Full day)"}</option>
                            </select>
                        </div>
                    </div>

                    <div class="form-group">
                        <label>{"Services Required"}</label>
                        <div class="checkbox-grid">
                            {checkbox_option("services", "music", "Music & DJ Services")}
                            {checkbox_option("services", "catering", "Catering Services")}
                            {checkbox_option("services", "decoration", "Decoration Services")}
                            {checkbox_option("services", "photography", "Photography")}
                            {checkbox_option("services", "security", "Security Services")}
                            {checkbox_option("services", "parking", "Parking Management")}
                        </div>
                    </div>
                </fieldset>

                <fieldset class="form-section guest-details">
                    <h3 class="form-section-title">{"✅ EVENT TYPE AND GUEST DETAILS"}</h3>
                    <div class="form-grid two-col">
                        <div class="form-group">
                            <label for="event-type">{"Event Type *"}</label>
                            <select id="event-type" name="event-type" required={true}>
                                <option value="" selected={true}>{"Select event type"}</option>
                                <option value="wedding">{"Wedding Ceremony"}</option>
                                <option value="engagement">{"Engagement Party"}</option>
                                <option value="reception">{"Wedding Reception"}</option>
                                <option value="anniversary">{"Anniversary Celebration"}</option>
                                <option value="birthday">{"Birthday Party"}</option>
                                <option value="corporate">{"Corporate Event"}</option>
                                <option value="other">{"Other"}</option>
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="number-of-guests">{"Expected Number of Guests *"}</label>
                            <input
                                type="number"
                                id="number-of-guests"
                                name="number-of-guests"
                                required={true}
                                min="1"
                                max="1000"
                                placeholder="Enter number of guests"
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="event-description">{"Event Description"}</label>
                        <textarea
                            id="event-description"
                            name="event-description"
                            rows="4"
                            placeholder="Describe your event in detail, including any special requirements or themes..."
                        />
                    </div>
                </fieldset>

                <fieldset class="form-section arrangements">
                    <h3 class="form-section-title">{"🕐 SPECIAL ARRANGEMENTS"}</h3>
                    <div class="checkbox-grid">
                        {checkbox_option("arrangements", "ladies", "Separate Ladies Section")}
                        {checkbox_option("arrangements", "gents", "Separate Gents Section")}
                        {checkbox_option("arrangements", "stage", "Stage Setup")}
                        {checkbox_option("arrangements", "ac", "Air Conditioning")}
                    </div>
                </fieldset>

                <fieldset class="form-section contact-info">
                    <h3 class="form-section-title">{"💲 CONTACT & ADDITIONAL INFORMATION"}</h3>
                    <div class="form-grid two-col">
                        <div class="form-group">
                            <label for="client-name">{"Client Name *"}</label>
                            <input
                                type="text"
                                id="client-name"
                                name="client-name"
                                required={true}
                                placeholder="Enter your full name"
                            />
                        </div>
                        <div class="form-group">
                            <label for="client-email">{"Email Address *"}</label>
                            <input
                                type="email"
                                id="client-email"
                                name="client-email"
                                required={true}
                                placeholder="Enter your email address"
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="welcome-details">{"Groom & Bride Welcome Details"}</label>
                        <input
                            type="text"
                            id="welcome-details"
                            name="welcome-details"
                            placeholder="Enter welcome ceremony details"
                        />
                    </div>
                    <div class="form-group">
                        <label for="special-request">{"Special Requests or Requirements"}</label>
                        <textarea
                            id="special-request"
                            name="special-request"
                            rows="3"
                            placeholder="Any special requests, dietary requirements, accessibility needs, etc."
                        />
                    </div>
                </fieldset>

                <fieldset class="form-section budget-info">
                    <h3 class="form-section-title">{"💲 BUDGET INFORMATION"}</h3>
                    <div class="form-grid two-col">
                        <div class="form-group">
                            <label for="budget-range">{"Budget Range *"}</label>
                            <select id="budget-range" name="budget-range" required={true}>
                                <option value="" selected={true}>{"Select budget range"}</option>
                                <option value="under-50k">{"Under ₹50,000"}</option>
                                <option value="50k-1l">{"₹50,000 - ₹1,00,000"}</option>
                                <option value="1l-2l">{"₹1,00,000 - ₹2,00,000"}</option>
                                <option value="2l-5l">{"₹2,00,000 - ₹5,00,000"}</option>
                                <option value="5l-10l">{"₹5,00,000 - ₹10,00,000"}</option>
                                <option value="above-10l">{"Above ₹10,00,000"}</option>
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="payment-preference">{"Payment Preference"}</label>
                            <select id="payment-preference" name="payment-preference">
                                <option value="" selected={true}>{"Select payment preference"}</option>
                                <option value="full-advance">{"Full Payment in Advance"}</option>
                                <option value="50-50">{"50% Advance, 50% on Event Day"}</option>
                                <option value="30-70">{"30% Advance, 70% on Event Day"}</option>
                                <option value="installments">{"Monthly Installments"}</option>
                            </select>
                        </div>
                    </div>
                </fieldset>

                <div class="form-terms">
                    <label class="checkbox-option terms-option">
                        <input type="checkbox" id="terms" name="terms" required={true} />
                        <span>
                            {"I agree to the Terms and Conditions and Privacy Policy. I understand \
                              that this booking is subject to availability and confirmation from \
                              the venue management."}
                        </span>
                    </label>
                </div>

                <div class="form-buttons">
                    <button type="button" class="btn btn-secondary" onclick={on_reset_click}>
                        {"Reset Form"}
                    </button>
                    <button type="submit" class="btn btn-primary">
                        {"Submit Booking Request"}
                    </button>
                </div>

                <div class="form-help">
                    <p>
                        <strong>{"Need Help? "}</strong>
                        {"Contact us at +91 98765 43210 or booking@weddingvenue.com"}
                    </p>
                    <p>
                        {"Our team will get back to you within 24 hours to confirm your booking \
                          and discuss further details."}
                    </p>
                </div>
            </form>
        </div>
    }
}
