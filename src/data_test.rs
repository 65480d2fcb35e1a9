use super::*;

#[test]
fn find_event_resolves_previous_events() {
    let event = find_event("pcb").expect("pcb event");
    assert_eq!(event.title, "Free Online Training: PCB Design");
}

#[test]
fn find_event_resolves_the_upcoming_event() {
    let event = find_event("embedded").expect("embedded event");
    assert_eq!(event.details.mentor.name, "Nusrat Noor");
}

#[test]
fn find_event_unknown_id_is_none() {
    assert!(find_event("quantum").is_none());
}

#[test]
fn event_ids_are_unique() {
    let mut ids: Vec<_> = PREVIOUS_EVENTS
        .iter()
        .map(|event| event.id)
        .chain(std::iter::once(UPCOMING_EVENT.id))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), PREVIOUS_EVENTS.len() + 1);
}

#[test]
fn every_event_has_syllabus_and_mentor() {
    for event in PREVIOUS_EVENTS.iter().chain(std::iter::once(&UPCOMING_EVENT)) {
        assert!(!event.details.syllabus.is_empty(), "{} syllabus", event.id);
        assert!(!event.details.taught.is_empty(), "{} taught", event.id);
        assert!(!event.details.mentor.name.is_empty(), "{} mentor", event.id);
    }
}
