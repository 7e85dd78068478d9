//! Staff create/edit screens for a product record.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both routes share one form. Creating sends every field plus the cover and
//! gallery images; editing sends a partial update and leaves stored images
//! untouched unless new files are picked.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::alert::{Alert, FieldError, field_message};
use crate::components::protected_route::StaffOnly;
use crate::forms::FieldErrors;
use crate::forms::shoe::{ImageSelection, ShoeForm, ShoeFormMode};
use crate::state::session::use_session;
use crate::util::listing::{ADMIN_PATH, media_url, parse_record_id};

/// Field names the backend may attach validation messages to.
const SERVER_FIELDS: [&str; 9] = [
    "shoeName",
    "shoeDescription",
    "shoePrice",
    "shoeInnerDescription",
    "shoeColorName",
    "shoeStyleName",
    "shoeOriginCountry",
    "shoeCoverImage",
    "shoeMainImage",
];

#[component]
pub fn AddShoePage() -> impl IntoView {
    view! {
        <StaffOnly>
            <ShoeEditor id=None/>
        </StaffOnly>
    }
}

#[component]
pub fn EditShoePage() -> impl IntoView {
    let params = use_params_map();
    view! {
        <StaffOnly>
            {move || {
                match parse_record_id(params.get().get("id").as_deref()) {
                    Some(id) => view! { <ShoeEditor id=Some(id)/> }.into_any(),
                    None => view! { <p class="alert alert--error">"Unknown product."</p> }.into_any(),
                }
            }}
        </StaffOnly>
    }
}

#[component]
fn ShoeEditor(id: Option<u64>) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let mode = if id.is_some() { ShoeFormMode::Edit } else { ShoeFormMode::Create };

    let form = RwSignal::new(ShoeForm::default());
    let images = RwSignal::new(ImageSelection::default());
    let existing = RwSignal::new(Vec::<String>::new());
    let errors = RwSignal::new(FieldErrors::new());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let loaded = RwSignal::new(id.is_none());

    #[cfg(feature = "hydrate")]
    let cover_file = StoredValue::new_local(None::<web_sys::File>);
    #[cfg(feature = "hydrate")]
    let main_files = StoredValue::new_local(Vec::<web_sys::File>::new());

    if let Some(id) = id {
        Effect::new(move || {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let token = session.token_untracked();
                match crate::net::api::fetch_shoe(token.as_deref(), id).await {
                    Ok(shoe) => {
                        form.set(ShoeForm::from_shoe(&shoe));
                        let mut stored: Vec<String> = shoe.shoe_cover_image.iter().cloned().collect();
                        stored.extend(shoe.gallery());
                        existing.set(stored.iter().map(|p| media_url(Some(p))).collect());
                        loaded.set(true);
                    }
                    Err(err) => {
                        log::warn!("product {id} failed to load for editing: {err}");
                        message.set(Some(err.to_string()));
                    }
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (id, session, existing);
        });
    }

    let on_cover = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let file = crate::forms::input_files(&ev).into_iter().next();
            images.update(|i| i.cover = file.as_ref().map(crate::forms::ImageMeta::from_file));
            cover_file.set_value(file);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_main = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let files = crate::forms::input_files(&ev);
            images.update(|i| i.main = files.iter().map(crate::forms::ImageMeta::from_file).collect());
            main_files.set_value(files);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let fields = match form.get_untracked().validate(mode, &images.get_untracked()) {
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
            if let Some(cover) = cover_file.get_value() {
                body = body.attach("shoeCoverImage", cover);
            }
            for (index, file) in main_files.get_value().into_iter().enumerate() {
                body = body.attach(crate::forms::shoe::main_image_field(index), file);
            }
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let token = session.token_untracked();
                let result = match id {
                    Some(id) => crate::net::api::update_shoe(token.as_deref(), id, &body).await,
                    None => crate::net::api::create_shoe(token.as_deref(), &body).await,
                };
                match result {
                    Ok(()) => {
                        log::info!("product saved ({mode:?})");
                        navigate(ADMIN_PATH, NavigateOptions::default());
                    }
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

    let title = match mode {
        ShoeFormMode::Create => "Add Shoe",
        ShoeFormMode::Edit => "Edit Shoe",
    };
    let image_hint = match mode {
        ShoeFormMode::Create => "Cover image and 1 to 9 gallery images, 15MB each at most.",
        ShoeFormMode::Edit => "Leave empty to keep the current images.",
    };

    view! {
        <section class="editor">
            <h1>{title}</h1>
            <Alert message=message/>
            <Show when=move || loaded.get() fallback=|| view! { <p class="listing__loading">"Loading..."</p> }>
                <form class="editor__form" on:submit=on_submit.clone() novalidate>
                    <TextField form errors field="shoeName" label="Name" read={|f| f.name.clone()} write={|f, v| f.name = v}/>
                    <TextField
                        form
                        errors
                        field="shoeDescription"
                        label="Details"
                        read={|f| f.description.clone()}
                        write={|f, v| f.description = v}
                    />
                    <TextField form errors field="shoePrice" label="Price" read={|f| f.price.clone()} write={|f, v| f.price = v}/>
                    <label class="field">
                        <span>"Description"</span>
                        <textarea
                            rows="5"
                            prop:value=move || form.with(|f| f.inner_description.clone())
                            on:input=move |ev| form.update(|f| f.inner_description = event_target_value(&ev))
                        ></textarea>
                        <FieldError message=field_message(errors, "shoeInnerDescription")/>
                    </label>
                    <TextField
                        form
                        errors
                        field="shoeColorName"
                        label="Colour"
                        read={|f| f.color.clone()}
                        write={|f, v| f.color = v}
                    />
                    <TextField
                        form
                        errors
                        field="shoeStyleName"
                        label="Style"
                        read={|f| f.style.clone()}
                        write={|f, v| f.style = v}
                    />
                    <TextField
                        form
                        errors
                        field="shoeOriginCountry"
                        label="Country of origin"
                        read={|f| f.origin.clone()}
                        write={|f, v| f.origin = v}
                    />
                    <p class="editor__hint">{image_hint}</p>
                    <Show when=move || existing.with(|e| !e.is_empty())>
                        <div class="editor__existing">
                            {move || {
                                existing
                                    .get()
                                    .into_iter()
                                    .map(|src| view! { <img class="admin__thumb" src=src alt=""/> })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                    <label class="field">
                        <span>"Cover image"</span>
                        <input type="file" accept="image/*" on:change=on_cover/>
                        <FieldError message=field_message(errors, "shoeCoverImage")/>
                    </label>
                    <label class="field">
                        <span>"Gallery images"</span>
                        <input type="file" accept="image/*" multiple on:change=on_main/>
                        <FieldError message=field_message(errors, "shoeMainImage")/>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </form>
            </Show>
        </section>
    }
}

#[component]
fn TextField(
    form: RwSignal<ShoeForm>,
    errors: RwSignal<FieldErrors>,
    field: &'static str,
    label: &'static str,
    read: fn(&ShoeForm) -> String,
    write: fn(&mut ShoeForm, String),
) -> impl IntoView {
    view! {
        <label class="field">
            <span>{label}</span>
            <input
                type="text"
                prop:value=move || form.with(read)
                on:input=move |ev| form.update(|f| write(f, event_target_value(&ev)))
            />
            <FieldError message=field_message(errors, field)/>
        </label>
    }
}
