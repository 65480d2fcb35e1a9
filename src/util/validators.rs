//! Credential-strength and required-field predicates.
//!
//! DESIGN
//! ======
//! Every predicate is a total function over a string with no side effects.
//! Pages re-evaluate on each input change; submission is blocked locally
//! when any predicate fails, before any external-service call is made.

#[cfg(test)]
#[path = "validators_test.rs"]
mod validators_test;

/// Minimum accepted password length.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Per-predicate result of evaluating a candidate password. Each flag is
/// surfaced independently so the sign-up form can render a live checklist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordChecklist {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl PasswordChecklist {
    /// Evaluate all five predicates against a candidate password.
    #[must_use]
    pub fn evaluate(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= PASSWORD_MIN_LEN,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            symbol: password.chars().any(|c| !c.is_alphanumeric()),
        }
    }

    /// True only when every predicate holds.
    #[must_use]
    pub fn is_satisfied(self) -> bool {
        self.min_length && self.uppercase && self.lowercase && self.digit && self.symbol
    }

    /// Checklist rows for UI feedback: label plus pass/fail.
    #[must_use]
    pub fn items(self) -> [(&'static str, bool); 5] {
        [
            ("At least 8 characters", self.min_length),
            ("At least one uppercase letter", self.uppercase),
            ("At least one lowercase letter", self.lowercase),
            ("At least one number", self.digit),
            ("At least one symbol", self.symbol),
        ]
    }
}

/// Presence check: non-empty after trimming.
#[must_use]
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Sign-up form fields subject to presence checks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub dob: String,
    pub institution: String,
}

/// Validate login fields, returning trimmed values on success.
///
/// # Errors
///
/// A user-facing message naming the first unmet requirement.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    if !is_present(email) || !is_present(password) {
        return Err("Enter both email and password.");
    }
    Ok((email.trim().to_owned(), password.to_owned()))
}

/// Validate sign-up fields for presence, returning trimmed values on
/// success. Password strength is checked separately via
/// [`PasswordChecklist`] so the form can show per-predicate feedback.
///
/// # Errors
///
/// A user-facing message when any required field is missing.
pub fn validate_signup_input(fields: &SignupFields) -> Result<SignupFields, &'static str> {
    let all_present = is_present(&fields.name)
        && is_present(&fields.email)
        && is_present(&fields.password)
        && is_present(&fields.dob)
        && is_present(&fields.institution);
    if !all_present {
        return Err("Please fill in all required fields.");
    }
    Ok(SignupFields {
        name: fields.name.trim().to_owned(),
        email: fields.email.trim().to_owned(),
        password: fields.password.clone(),
        dob: fields.dob.trim().to_owned(),
        institution: fields.institution.trim().to_owned(),
    })
}

/// Validate the reset-email field.
///
/// # Errors
///
/// A user-facing message when the email is missing.
pub fn validate_reset_input(email: &str) -> Result<String, &'static str> {
    if !is_present(email) {
        return Err("Enter your email first.");
    }
    Ok(email.trim().to_owned())
}
