//! Registration Page
//!
//! Client-side form with validation. No registration endpoint exists
//! yet, so submission stops at a validated confirmation.

use leptos::prelude::*;

/// Draft of the registration form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm: String,
}

/// First validation failure, if any.
pub fn validate_registration(form: &RegisterForm) -> Result<(), String> {
    if form.name.trim().is_empty() {
        return Err("Please enter your full name.".to_string());
    }
    let email = form.email.trim();
    if email.is_empty() {
        return Err("Please enter your email address.".to_string());
    }
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err("Please enter a valid email address.".to_string());
    }
    if form.phone.trim().is_empty() {
        return Err("Please enter your phone number.".to_string());
    }
    if form.password.len() < 6 {
        return Err("Password must be at least 6 characters.".to_string());
    }
    if form.password != form.confirm {
        return Err("Passwords do not match.".to_string());
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (form, set_form) = signal(RegisterForm::default());
    let (error, set_error) = signal(None::<String>);
    let (submitted, set_submitted) = signal(false);

    let field =
        move |label: &'static str,
              kind: &'static str,
              placeholder: &'static str,
              write: fn(&mut RegisterForm, String)| {
            view! {
                <label>
                    {label}
                    <input
                        type=kind
                        placeholder=placeholder
                        on:input=move |ev| {
                            set_form.update(|f| write(f, event_target_value(&ev)))
                        }
                    />
                </label>
            }
        };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match validate_registration(&form.get_untracked()) {
            Ok(()) => {
                set_error.set(None);
                set_submitted.set(true);
            }
            Err(message) => set_error.set(Some(message)),
        }
    };

    view! {
        <div class="register-page">
            <div class="register-panel">
                <h2>"Create Your Account"</h2>
                <p class="register-subtitle">
                    "Join to list properties, save searches and contact agents."
                </p>

                {move || error.get().map(|message| view! {
                    <div class="message-banner error">
                        <span>{message}</span>
                        <button class="banner-close" on:click=move |_| set_error.set(None)>
                            "×"
                        </button>
                    </div>
                })}

                {move || if submitted.get() {
                    view! {
                        <div class="register-success">
                            <h3>"Registration complete"</h3>
                            <p>"You can now log in with your credentials."</p>
                            <a href="/userLogin" class="login-link">"Go to Login"</a>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <form on:submit=on_submit>
                            {field("Full Name", "text", "Enter your full name", |f, v| f.name = v)}
                            {field("Email", "email", "you@example.com", |f, v| f.email = v)}
                            {field("Phone", "tel", "+91", |f, v| f.phone = v)}
                            {field("Password", "password", "At least 6 characters", |f, v| {
                                f.password = v
                            })}
                            {field("Confirm Password", "password", "Repeat your password", |f, v| {
                                f.confirm = v
                            })}
                            <button type="submit" class="register-submit">"Sign Up"</button>
                        </form>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegisterForm {
        RegisterForm {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 98450 00000".to_string(),
            password: "hunter22".to_string(),
            confirm: "hunter22".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_registration(&valid_form()).is_ok());
    }

    #[test]
    fn test_empty_required_fields_rejected() {
        let mut form = valid_form();
        form.name = "  ".to_string();
        assert!(validate_registration(&form).is_err());

        let mut form = valid_form();
        form.phone = String::new();
        assert!(validate_registration(&form).is_err());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut form = valid_form();
        form.email = "asha.example.com".to_string();
        assert!(validate_registration(&form).is_err());
        form.email = "@example.com".to_string();
        assert!(validate_registration(&form).is_err());
    }

    #[test]
    fn test_mismatched_passwords_rejected() {
        let mut form = valid_form();
        form.confirm = "hunter23".to_string();
        assert_eq!(
            validate_registration(&form),
            Err("Passwords do not match.".to_string())
        );
    }

    #[test]
    fn test_short_password_rejected() {
        let mut form = valid_form();
        form.password = "abc".to_string();
        form.confirm = "abc".to_string();
        assert!(validate_registration(&form).is_err());
    }
}
