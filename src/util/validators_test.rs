use super::*;

// =============================================================
// Password checklist
// =============================================================

#[test]
fn all_predicates_pass_for_a_conforming_password() {
    let checklist = PasswordChecklist::evaluate("Abcdef1!");
    assert!(checklist.min_length);
    assert!(checklist.uppercase);
    assert!(checklist.lowercase);
    assert!(checklist.digit);
    assert!(checklist.symbol);
    assert!(checklist.is_satisfied());
}

#[test]
fn lowercase_only_password_flags_exactly_the_missing_predicates() {
    let checklist = PasswordChecklist::evaluate("abcdefgh");
    assert!(checklist.min_length);
    assert!(checklist.lowercase);
    assert!(!checklist.uppercase);
    assert!(!checklist.digit);
    assert!(!checklist.symbol);
    assert!(!checklist.is_satisfied());
}

#[test]
fn short_password_fails_length_only_when_otherwise_complete() {
    let checklist = PasswordChecklist::evaluate("Ab1!");
    assert!(!checklist.min_length);
    assert!(checklist.uppercase);
    assert!(checklist.lowercase);
    assert!(checklist.digit);
    assert!(checklist.symbol);
    assert!(!checklist.is_satisfied());
}

#[test]
fn empty_password_fails_every_predicate() {
    assert_eq!(PasswordChecklist::evaluate(""), PasswordChecklist::default());
}

#[test]
fn length_counts_characters_not_bytes() {
    // Eight two-byte characters must satisfy the length predicate.
    let checklist = PasswordChecklist::evaluate("Ããããããã1");
    assert!(checklist.min_length);
}

#[test]
fn non_ascii_punctuation_counts_as_symbol() {
    let checklist = PasswordChecklist::evaluate("Abcdefg1§");
    assert!(checklist.symbol);
}

#[test]
fn checklist_items_follow_predicate_flags() {
    let items = PasswordChecklist::evaluate("abcdefgh").items();
    let failed: Vec<_> = items.iter().filter(|(_, ok)| !ok).map(|(label, _)| *label).collect();
    assert_eq!(
        failed,
        vec![
            "At least one uppercase letter",
            "At least one number",
            "At least one symbol",
        ]
    );
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn login_input_trims_email_and_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("  user@example.com ", "Secret1!"),
        Ok(("user@example.com".to_owned(), "Secret1!".to_owned()))
    );
}

#[test]
fn login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "Secret1!"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("user@example.com", "   "),
        Err("Enter both email and password.")
    );
}

fn complete_signup() -> SignupFields {
    SignupFields {
        name: " Jane Doe ".to_owned(),
        email: "jane@example.com".to_owned(),
        password: "Abcdef1!".to_owned(),
        dob: "2001-05-14".to_owned(),
        institution: "BUET".to_owned(),
    }
}

#[test]
fn signup_input_accepts_complete_fields_and_trims() {
    let validated = validate_signup_input(&complete_signup()).expect("valid");
    assert_eq!(validated.name, "Jane Doe");
    assert_eq!(validated.password, "Abcdef1!");
}

#[test]
fn signup_input_rejects_any_missing_field() {
    let cases: [fn(&mut SignupFields); 5] = [
        |f| f.name.clear(),
        |f| f.email.clear(),
        |f| f.password.clear(),
        |f| f.dob.clear(),
        |f| f.institution = "   ".to_owned(),
    ];
    for clear in cases {
        let mut fields = complete_signup();
        clear(&mut fields);
        assert_eq!(
            validate_signup_input(&fields),
            Err("Please fill in all required fields.")
        );
    }
}

#[test]
fn reset_input_requires_an_email() {
    assert_eq!(validate_reset_input("   "), Err("Enter your email first."));
    assert_eq!(validate_reset_input(" a@b.com "), Ok("a@b.com".to_owned()));
}
