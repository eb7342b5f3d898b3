use super::*;

fn filled() -> ContactState {
    let mut state = ContactState::default();
    state.set_field(ContactField::Name, "Ada".to_owned());
    state.set_field(ContactField::Email, "ada@example.com".to_owned());
    state.set_field(ContactField::Message, "Let's build something.".to_owned());
    state
}

#[test]
fn default_state_is_idle_and_empty() {
    let state = ContactState::default();
    assert_eq!(state.status, SubmitStatus::Idle);
    assert_eq!(state.form, ContactForm::default());
    assert!(!state.is_complete());
}

#[test]
fn set_field_targets_one_field() {
    let mut state = ContactState::default();
    state.set_field(ContactField::Email, "a@b".to_owned());
    assert_eq!(state.form.email, "a@b");
    assert!(state.form.name.is_empty());
    assert!(state.form.message.is_empty());
}

#[test]
fn completeness_requires_every_field_and_plausible_email() {
    assert!(filled().is_complete());

    let mut blank_name = filled();
    blank_name.set_field(ContactField::Name, "   ".to_owned());
    assert!(!blank_name.is_complete());

    for email in ["ada", "@example.com", "ada@", ""] {
        let mut state = filled();
        state.set_field(ContactField::Email, email.to_owned());
        assert!(!state.is_complete(), "email {email:?}");
    }
}

#[test]
fn incomplete_form_does_not_submit() {
    let mut state = ContactState::default();
    assert!(!state.begin_submit());
    assert_eq!(state.status, SubmitStatus::Idle);
}

#[test]
fn submission_lifecycle() {
    let mut state = filled();
    assert!(state.begin_submit());
    assert_eq!(state.status, SubmitStatus::Submitting);
    assert!(!state.begin_submit(), "double submit is refused");

    state.finish_submit();
    assert_eq!(state.status, SubmitStatus::Submitted);
    assert_eq!(state.form, ContactForm::default());

    state.dismiss_confirmation();
    assert_eq!(state.status, SubmitStatus::Idle);
}

#[test]
fn finish_and_dismiss_ignore_wrong_phase() {
    let mut state = filled();
    state.finish_submit();
    assert_eq!(state.status, SubmitStatus::Idle);
    assert!(state.is_complete(), "fields survive a stray finish");

    assert!(state.begin_submit());
    state.dismiss_confirmation();
    assert_eq!(state.status, SubmitStatus::Submitting);
}

#[test]
fn timing_constants_match_simulated_flow() {
    assert_eq!(SUBMIT_DELAY.as_millis(), 1500);
    assert_eq!(CONFIRMATION_DURATION.as_millis(), 5000);
}

#[test]
fn confirmation_replaces_form_only_after_submission() {
    let mut state = filled();
    assert!(!state.shows_confirmation());

    assert!(state.begin_submit());
    assert!(!state.shows_confirmation(), "form stays while sending");

    state.finish_submit();
    assert!(state.shows_confirmation());

    state.dismiss_confirmation();
    assert!(!state.shows_confirmation(), "empty form comes back");
    assert_eq!(state.form, ContactForm::default());
}
