use crate::core::types::{FormVisibility, LoginInput, SignupInput};

#[test]
fn test_initial_visibility_is_signup() {
    let visibility = FormVisibility::default();

    assert_eq!(visibility, FormVisibility::ShowingSignup);
    assert!(visibility.signup_visible());
    assert!(!visibility.login_visible());
}

#[test]
fn test_exactly_one_form_visible() {
    for visibility in [FormVisibility::ShowingSignup, FormVisibility::ShowingLogin] {
        assert_ne!(
            visibility.signup_visible(),
            visibility.login_visible(),
            "Exactly one form should be visible for {visibility}"
        );
    }
}

#[test]
fn test_opposite() {
    assert_eq!(FormVisibility::ShowingSignup.opposite(), FormVisibility::ShowingLogin);
    assert_eq!(FormVisibility::ShowingLogin.opposite(), FormVisibility::ShowingSignup);
}

#[test]
fn test_signup_display() {
    let input = SignupInput::new("Alice", "alice@example.com", "pw123");
    assert_eq!(format!("{}", input), "Signup: Alice, alice@example.com, pw123");
}

#[test]
fn test_login_display() {
    let input = LoginInput::new("bob@example.com", "hunter2");
    assert_eq!(format!("{}", input), "Login: bob@example.com, hunter2");
}

#[test]
fn test_empty_inputs_keep_segments() {
    assert_eq!(SignupInput::default().to_string(), "Signup: , , ");
    assert_eq!(LoginInput::default().to_string(), "Login: , ");
}

#[test]
fn test_no_trimming_or_escaping() {
    // Whitespace and separators are printed verbatim
    let input = LoginInput::new(" a, b ", "");
    assert_eq!(input.to_string(), "Login:  a, b , ");
}
