use super::*;

#[test]
fn missing_fields_render_as_a_dash() {
    assert_eq!(field_or_dash(None), "\u{2014}");
    assert_eq!(field_or_dash(Some("   ")), "\u{2014}");
}

#[test]
fn present_fields_render_verbatim() {
    assert_eq!(field_or_dash(Some("BUET")), "BUET");
}

#[test]
fn member_since_shows_the_date_portion_of_the_timestamp() {
    assert_eq!(
        member_since(Some("2025-03-14T09:26:53.589Z")),
        "2025-03-14"
    );
}

#[test]
fn member_since_tolerates_a_bare_date() {
    assert_eq!(member_since(Some("2025-03-14")), "2025-03-14");
}

#[test]
fn member_since_falls_back_to_a_dash() {
    assert_eq!(member_since(None), "\u{2014}");
    assert_eq!(member_since(Some("")), "\u{2014}");
}
