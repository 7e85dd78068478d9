//! Signed-in user's profile, read from the session.

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session::use_session;
use crate::util::listing::media_url;

/// Extra profile fields shown under the name, with their labels.
const DETAILS: [(&str, &str); 4] = [("age", "Age"), ("state", "State"), ("city", "City"), ("hobbies", "Hobbies")];

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();

    view! {
        {move || match session.user() {
            Some(user) => profile_card(&user).into_any(),
            None => view! { <p class="listing__empty">"No profile information available."</p> }.into_any(),
        }}
    }
}

fn profile_card(user: &User) -> impl IntoView {
    let avatar = media_url(user.extra_text("image").as_deref());
    let email = user.username.clone().unwrap_or_default();
    let rows = DETAILS
        .into_iter()
        .filter_map(|(key, label)| user.extra_text(key).map(|value| (label, value)))
        .map(|(label, value)| {
            view! {
                <dt>{label}</dt>
                <dd>{value}</dd>
            }
        })
        .collect_view();
    let role = if user.is_staff { "Staff" } else { "Member" };

    view! {
        <section class="profile">
            {(!avatar.is_empty()).then(|| view! { <img class="profile__avatar" src=avatar alt="Profile picture"/> })}
            <h1 class="profile__name">{user.display_name()}</h1>
            <p class="profile__email">{email}</p>
            <p class="profile__role">{role}</p>
            <dl class="profile__details">{rows}</dl>
        </section>
    }
}
