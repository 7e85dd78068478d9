//! Account registration with a profile picture upload.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::alert::{Alert, FieldError, field_message};
use crate::components::navbar::PublicNavbar;
use crate::forms::FieldErrors;
use crate::forms::register::{CITIES, HOBBIES, RegisterForm, STATES};
use crate::util::auth::{LOGIN_PATH, REGISTERED_LOGIN_PATH, replace_options};

/// Field names the backend may attach validation messages to.
const SERVER_FIELDS: [&str; 9] =
    ["firstname", "lastname", "username", "age", "password", "hobbies", "state", "city", "image"];

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let preview = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let picked = StoredValue::new_local(None::<web_sys::File>);

    let on_image = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let file = crate::forms::input_files(&ev).into_iter().next();
            form.update(|f| f.image = file.as_ref().map(crate::forms::ImageMeta::from_file));
            preview.set(file.as_ref().and_then(crate::forms::preview_url));
            picked.set_value(file);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let fields = match form.get_untracked().validate() {
            Ok(fields) => fields,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        message.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let mut body = crate::net::api::MultipartBody::new(fields);
            if let Some(file) = picked.get_value() {
                body = body.attach("image", file);
            }
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&body).await {
                    Ok(()) => navigate(REGISTERED_LOGIN_PATH, replace_options()),
                    Err(err) => {
                        errors.set(crate::forms::server_field_errors(&err, &SERVER_FIELDS));
                        message.set(Some(err.to_string()));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (fields, &navigate);
    };

    view! {
        <PublicNavbar/>
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Become a Member"</h1>
                <Alert message=message/>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <div class="field-row">
                        <label class="field">
                            <span>"First name"</span>
                            <input
                                type="text"
                                prop:value=move || form.with(|f| f.firstname.clone())
                                on:input=move |ev| form.update(|f| f.firstname = event_target_value(&ev))
                            />
                            <FieldError message=field_message(errors, "firstname")/>
                        </label>
                        <label class="field">
                            <span>"Last name"</span>
                            <input
                                type="text"
                                prop:value=move || form.with(|f| f.lastname.clone())
                                on:input=move |ev| form.update(|f| f.lastname = event_target_value(&ev))
                            />
                            <FieldError message=field_message(errors, "lastname")/>
                        </label>
                    </div>
                    <label class="field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            autocomplete="username"
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                        />
                        <FieldError message=field_message(errors, "username")/>
                    </label>
                    <label class="field">
                        <span>"Age"</span>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || form.with(|f| f.age.clone())
                            on:input=move |ev| form.update(|f| f.age = event_target_value(&ev))
                        />
                        <FieldError message=field_message(errors, "age")/>
                    </label>
                    <div class="field-row">
                        <label class="field">
                            <span>"Password"</span>
                            <input
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            />
                            <FieldError message=field_message(errors, "password")/>
                        </label>
                        <label class="field">
                            <span>"Confirm password"</span>
                            <input
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || form.with(|f| f.confirmpassword.clone())
                                on:input=move |ev| form.update(|f| f.confirmpassword = event_target_value(&ev))
                            />
                            <FieldError message=field_message(errors, "confirmpassword")/>
                        </label>
                    </div>
                    <fieldset class="field">
                        <legend>"Hobbies"</legend>
                        {HOBBIES
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <label class="checkbox">
                                        <input
                                            type="checkbox"
                                            value=value
                                            prop:checked=move || form.with(|f| f.hobbies.iter().any(|h| h == value))
                                            on:change=move |ev| {
                                                let checked = event_target_checked(&ev);
                                                form.update(|f| f.toggle_hobby(value, checked));
                                            }
                                        />
                                        {label}
                                    </label>
                                }
                            })
                            .collect_view()}
                        <FieldError message=field_message(errors, "hobbies")/>
                    </fieldset>
                    <div class="field-row">
                        <label class="field">
                            <span>"State"</span>
                            <select
                                prop:value=move || form.with(|f| f.state.clone())
                                on:change=move |ev| form.update(|f| f.state = event_target_value(&ev))
                            >
                                <option value="">"Select state"</option>
                                {STATES.into_iter().map(|s| view! { <option value=s>{s}</option> }).collect_view()}
                            </select>
                            <FieldError message=field_message(errors, "state")/>
                        </label>
                        <label class="field">
                            <span>"City"</span>
                            <select
                                prop:value=move || form.with(|f| f.city.clone())
                                on:change=move |ev| form.update(|f| f.city = event_target_value(&ev))
                            >
                                <option value="">"Select city"</option>
                                {CITIES.into_iter().map(|c| view! { <option value=c>{c}</option> }).collect_view()}
                            </select>
                            <FieldError message=field_message(errors, "city")/>
                        </label>
                    </div>
                    <label class="field">
                        <span>"Profile picture"</span>
                        <input type="file" accept="image/*" on:change=on_image/>
                        <FieldError message=field_message(errors, "image")/>
                    </label>
                    <Show when=move || preview.get().is_some()>
                        <img class="upload-preview" src=move || preview.get().unwrap_or_default() alt="Selected picture"/>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Join Us" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already a member? "
                    <A href=LOGIN_PATH>"Sign In"</A>
                </p>
            </div>
        </div>
    }
}
