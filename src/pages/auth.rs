//! Auth entry page: login and sign-up forms behind a mode toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! All credential flows run through here. Local validation rejects before
//! any provider call; provider rejections come back as closed codes and are
//! surfaced both inline and as toasts. A submission in flight blocks
//! re-entry until it settles.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::components::layout::SiteLayout;
use crate::net::identity::{self, AuthCode};
use crate::net::profile;
use crate::net::types::Profile;
use crate::state::notify::{SubmitPhase, ToastKind, ToastState, user_message};
use crate::util::validators::{
    PasswordChecklist, SignupFields, validate_login_input, validate_reset_input,
    validate_signup_input,
};
use crate::util::nav;

/// Which form the auth page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AuthMode {
    #[default]
    Login,
    Signup,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let mode = RwSignal::new(AuthMode::default());

    view! {
        <SiteLayout>
            <div class="auth-page">
                <div class="auth-page__toggle">
                    <button
                        class=move || mode_button_class(mode.get(), AuthMode::Login)
                        on:click=move |_| mode.set(AuthMode::Login)
                    >
                        "Login"
                    </button>
                    <button
                        class=move || mode_button_class(mode.get(), AuthMode::Signup)
                        on:click=move |_| mode.set(AuthMode::Signup)
                    >
                        "Sign up"
                    </button>
                </div>
                {move || match mode.get() {
                    AuthMode::Login => view! { <LoginForm /> }.into_any(),
                    AuthMode::Signup => view! { <SignupForm /> }.into_any(),
                }}
            </div>
        </SiteLayout>
    }
}

fn mode_button_class(current: AuthMode, target: AuthMode) -> &'static str {
    if current == target {
        "auth-page__mode auth-page__mode--active"
    } else {
        "auth-page__mode"
    }
}

/// Reset-mail failures reuse the account/email copy; everything else gets a
/// reset-specific fallback rather than the generic one.
fn reset_failure_message(code: AuthCode) -> &'static str {
    match code {
        AuthCode::NotFound | AuthCode::InvalidEmail => user_message(code),
        _ => "Could not send reset email.",
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let phase = RwSignal::new(SubmitPhase::default());

    let show_reset = RwSignal::new(false);
    let reset_email = RwSignal::new(String::new());
    let reset_notice = RwSignal::new(None::<(bool, &'static str)>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !phase.get_untracked().can_submit() {
            return;
        }
        let validated =
            validate_login_input(&email.get_untracked(), &password.get_untracked());
        let (login_email, login_password) = match validated {
            Ok(fields) => fields,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        phase.set(SubmitPhase::Submitting);
        leptos::task::spawn_local(async move {
            match identity::sign_in(&login_email, &login_password).await {
                Ok(_) => {
                    phase.set(SubmitPhase::Succeeded);
                    toasts.update(|state| {
                        state.push(ToastKind::Success, "Sign in successful!");
                    });
                    nav::replace_with("/profile");
                }
                Err(err) => {
                    let message = user_message(err.code());
                    toasts.update(|state| {
                        state.push(ToastKind::Error, message);
                    });
                    error.set(Some(message));
                    phase.set(SubmitPhase::Editing);
                }
            }
        });
    };

    let on_reset = move |_| {
        reset_notice.set(None);
        let address = match validate_reset_input(&reset_email.get_untracked()) {
            Ok(address) => address,
            Err(message) => {
                reset_notice.set(Some((false, message)));
                return;
            }
        };
        leptos::task::spawn_local(async move {
            match identity::send_password_reset(&address).await {
                Ok(()) => {
                    reset_notice
                        .set(Some((true, "Password reset email sent! Check your inbox.")));
                    toasts.update(|state| {
                        state.push(ToastKind::Success, "Password reset email sent!");
                    });
                }
                Err(err) => {
                    let message = reset_failure_message(err.code());
                    reset_notice.set(Some((false, message)));
                    toasts.update(|state| {
                        state.push(ToastKind::Error, message);
                    });
                }
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h3 class="auth-form__title">"Log in"</h3>
            <label class="auth-form__label">
                "Email"
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-form__label">
                "Password"
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button
                type="submit"
                class="btn btn--primary"
                disabled=move || !phase.get().can_submit()
            >
                "Log in"
            </button>
            <button
                type="button"
                class="auth-form__link"
                on:click=move |_| show_reset.update(|shown| *shown = !*shown)
            >
                "Forgot password?"
            </button>
            <Show when=move || show_reset.get()>
                <div class="auth-form__reset">
                    <input
                        class="auth-form__input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || reset_email.get()
                        on:input=move |ev| reset_email.set(event_target_value(&ev))
                    />
                    <button type="button" class="btn btn--small" on:click=on_reset>
                        "Send reset link"
                    </button>
                    {move || {
                        reset_notice
                            .get()
                            .map(|(ok, message)| {
                                let class = if ok {
                                    "auth-form__notice auth-form__notice--ok"
                                } else {
                                    "auth-form__notice auth-form__notice--err"
                                };
                                view! { <p class=class>{message}</p> }
                            })
                    }}
                </div>
            </Show>
        </form>
    }
}

#[component]
fn SignupForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let dob = RwSignal::new(String::new());
    let institution = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let touched = RwSignal::new(false);
    let phase = RwSignal::new(SubmitPhase::default());

    let checklist = move || PasswordChecklist::evaluate(&password.get());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        touched.set(true);
        if !phase.get_untracked().can_submit() {
            return;
        }
        let fields = SignupFields {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            dob: dob.get_untracked(),
            institution: institution.get_untracked(),
        };
        let fields = match validate_signup_input(&fields) {
            Ok(fields) => fields,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        if !PasswordChecklist::evaluate(&fields.password).is_satisfied() {
            error.set(Some("Please meet all password criteria."));
            toasts.update(|state| {
                state.push(ToastKind::Error, "Password does not meet all criteria.");
            });
            return;
        }
        error.set(None);
        phase.set(SubmitPhase::Submitting);
        leptos::task::spawn_local(async move {
            match identity::sign_up(&fields.email, &fields.password).await {
                Err(err) => {
                    let message = user_message(err.code());
                    toasts.update(|state| {
                        state.push(ToastKind::Error, message);
                    });
                    error.set(Some(message));
                    phase.set(SubmitPhase::Editing);
                }
                Ok(new_identity) => {
                    // The account exists from here on; follow-up failures are
                    // logged but never roll the sign-up back.
                    if let Err(err) = identity::update_display_name(&fields.name).await {
                        log::warn!("display-name update failed: {err}");
                    }
                    let profile = Profile {
                        name: Some(fields.name.clone()),
                        email: Some(fields.email.clone()),
                        dob: Some(fields.dob.clone()),
                        institution: Some(fields.institution.clone()),
                        created_at: Some(current_timestamp()),
                    };
                    if let Err(err) = profile::store(&new_identity.id, &profile).await {
                        log::warn!("profile store failed: {err}");
                    }
                    if let Err(err) = identity::send_email_verification().await {
                        log::warn!("verification email failed: {err}");
                    }
                    phase.set(SubmitPhase::Succeeded);
                    toasts.update(|state| {
                        state.push(
                            ToastKind::Success,
                            "Sign up successful! Verification email sent.",
                        );
                    });
                    nav::replace_with("/profile");
                }
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h3 class="auth-form__title">"Create your account"</h3>
            <label class="auth-form__label">
                "Full name"
                <input
                    class="auth-form__input"
                    type="text"
                    placeholder="Jane Doe"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-form__label">
                "Email"
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-form__label">
                "Password"
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="At least 8 characters"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:blur=move |_| touched.set(true)
                />
            </label>
            <ul class="auth-form__criteria">
                {move || {
                    checklist()
                        .items()
                        .into_iter()
                        .map(|(label, met)| {
                            let class = criterion_class(met, touched.get());
                            let mark = if met { "\u{2713} " } else { "\u{2717} " };
                            view! { <li class=class>{mark}{label}</li> }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <label class="auth-form__label">
                "Date of birth"
                <input
                    class="auth-form__input"
                    type="date"
                    prop:value=move || dob.get()
                    on:input=move |ev| dob.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-form__label">
                "Currently enrolled institution"
                <input
                    class="auth-form__input"
                    type="text"
                    placeholder="Your university / college"
                    prop:value=move || institution.get()
                    on:input=move |ev| institution.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button
                type="submit"
                class="btn btn--primary"
                disabled=move || !phase.get().can_submit()
            >
                "Sign up"
            </button>
        </form>
    }
}

fn criterion_class(met: bool, touched: bool) -> &'static str {
    if met {
        "auth-form__criterion auth-form__criterion--met"
    } else if touched {
        "auth-form__criterion auth-form__criterion--failed"
    } else {
        "auth-form__criterion"
    }
}

#[cfg(target_arch = "wasm32")]
fn current_timestamp() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn current_timestamp() -> String {
    String::new()
}
