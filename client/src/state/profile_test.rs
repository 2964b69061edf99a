use super::*;

fn set_text(state: &mut ProfileState, field: ProfileText, value: &str) {
    state.apply(ProfileMsg::SetText { field, value: value.to_owned() });
}

#[test]
fn default_form_is_valid_and_clean() {
    let state = ProfileState::default();
    assert!(validate(&state.draft).is_empty());
    assert!(!state.is_dirty());
}

#[test]
fn empty_name_is_rejected() {
    let form = ProfileForm { full_name: "   ".to_owned(), ..ProfileForm::default() };
    assert_eq!(validate(&form), vec![ProfileError::EmptyName]);
}

#[test]
fn malformed_emails_are_rejected() {
    for email in ["priya", "priya@", "@example.edu", "priya@localhost", "priya@example.", "pri ya@example.edu"] {
        let form = ProfileForm { email: email.to_owned(), ..ProfileForm::default() };
        assert_eq!(validate(&form), vec![ProfileError::InvalidEmail], "email={email}");
    }
}

#[test]
fn short_phone_is_rejected() {
    let form = ProfileForm { phone: "12-34-5".to_owned(), ..ProfileForm::default() };
    assert_eq!(validate(&form), vec![ProfileError::InvalidPhone]);
}

#[test]
fn all_errors_are_reported_together() {
    let form = ProfileForm {
        full_name: String::new(),
        email: "nope".to_owned(),
        phone: String::new(),
        ..ProfileForm::default()
    };
    assert_eq!(
        validate(&form),
        vec![ProfileError::EmptyName, ProfileError::InvalidEmail, ProfileError::InvalidPhone]
    );
}

#[test]
fn edits_mark_form_dirty_and_save_commits_trimmed_values() {
    let mut state = ProfileState::default();
    set_text(&mut state, ProfileText::FullName, "  Priya R.  ");
    state.apply(ProfileMsg::SetFlag { flag: ProfileFlag::TwoFactor, value: true });
    assert!(state.is_dirty());

    assert_eq!(state.save(), Ok(()));
    assert!(!state.is_dirty());
    assert_eq!(state.saved.full_name, "Priya R.");
    assert!(state.saved.two_factor);
}

#[test]
fn failed_save_leaves_saved_copy_untouched() {
    let mut state = ProfileState::default();
    set_text(&mut state, ProfileText::Email, "broken");
    assert_eq!(state.save(), Err(vec![ProfileError::InvalidEmail]));
    assert_eq!(state.saved, ProfileForm::default());
    assert!(state.is_dirty());
}

#[test]
fn discard_restores_draft_from_saved() {
    let mut state = ProfileState::default();
    set_text(&mut state, ProfileText::Department, "Physics");
    set_text(&mut state, ProfileText::Phone, "000");
    state.discard();
    assert_eq!(state.draft, state.saved);
}

#[test]
fn flag_accessor_reads_draft_fields() {
    let form = ProfileForm::default();
    assert!(ProfileFlag::NotifyEmail.get(&form));
    assert!(!ProfileFlag::NotifySms.get(&form));
    assert!(!ProfileFlag::TwoFactor.get(&form));
}

#[test]
fn text_accessor_reads_each_field() {
    let form = ProfileForm::default();
    let values: Vec<&str> = ProfileText::ALL.iter().map(|f| f.get(&form)).collect();
    assert_eq!(values, vec!["Priya Raman", "priya.raman@example.edu", "+91 98450 12345", "Computer Science"]);
    assert_eq!(ProfileText::Email.input_type(), "email");
    assert_eq!(ProfileText::Phone.input_type(), "tel");
}
