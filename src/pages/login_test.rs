use super::*;

#[test]
fn can_submit_only_when_idle() {
    assert!(can_submit(&LoginForm::default()));
    let busy = LoginForm::default().reduce(FormEvent::SubmitStarted);
    assert!(!can_submit(&busy));
    assert!(can_submit(&busy.reduce(FormEvent::SubmitFinished)));
}

#[test]
fn field_changed_targets_named_field() {
    let form = LoginForm::default().reduce(field_changed(Field::Password, "pw".to_owned()));
    assert_eq!(form.password, "pw");
    assert!(form.email.is_empty());
}
