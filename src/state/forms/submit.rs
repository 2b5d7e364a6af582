//! Validate-then-submit workflow for the sign-up form

use super::form_state::{SignUpForm, SignUpFormData};
use super::validation::validate;
use crate::api::UsersApiTrait;
use crate::error::SignUpError;
use crate::state::{Navigator, Notification, Notifier};
use tracing::{debug, info, warn};

pub const SUCCESS_TITLE: &str = "Account created!";
pub const SUCCESS_MESSAGE: &str = "You can now sign in.";
pub const FAILURE_TITLE: &str = "Sign-up failed.";
pub const FAILURE_MESSAGE: &str =
    "Something went wrong while creating your account, please try again.";

/// How a submit attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// User created, confirmation shown, navigated back
    Registered,
    /// Field errors applied to the form, nothing sent
    Invalid,
    /// Request failed, generic alert shown
    Failed,
}

async fn register<A>(data: &SignUpFormData, api: &A) -> Result<(), SignUpError>
where
    A: UsersApiTrait + ?Sized,
{
    validate(data)?;
    api.create_user(data).await?;
    Ok(())
}

/// Run one submit attempt.
///
/// Field errors are cleared first and are only repopulated when validation
/// fails. The failure alert is reserved for submission errors.
pub async fn submit_sign_up<A, N, T>(
    form: &mut SignUpForm,
    api: &A,
    navigator: &mut N,
    notifier: &mut T,
) -> SubmitOutcome
where
    A: UsersApiTrait + ?Sized,
    N: Navigator + ?Sized,
    T: Notifier + ?Sized,
{
    form.clear_errors();
    let data = form.data();

    match register(&data, api).await {
        Ok(()) => {
            info!("Registered new user");
            notifier.notify(Notification::success(SUCCESS_TITLE, SUCCESS_MESSAGE));
            navigator.go_back();
            SubmitOutcome::Registered
        }
        Err(SignUpError::Validation(errors)) => {
            debug!(fields = ?errors.fields(), "Sign-up validation failed");
            form.apply_validation_errors(errors);
            SubmitOutcome::Invalid
        }
        Err(err @ SignUpError::Submission(_)) => {
            warn!("{err}");
            notifier.notify(Notification::error(FAILURE_TITLE, FAILURE_MESSAGE));
            SubmitOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockUsersApiTrait};
    use crate::state::validation::{
        EMAIL_INVALID, NAME_REQUIRED, PASSWORD_TOO_SHORT,
    };
    use crate::state::{MockNavigator, MockNotifier, NotificationKind};
    use reqwest::StatusCode;

    fn form_with(name: &str, email: &str, password: &str) -> SignUpForm {
        let mut form = SignUpForm::new();
        form.name.set_text(name);
        form.email.set_text(email);
        form.password.set_text(password);
        form
    }

    fn ana_payload() -> SignUpFormData {
        SignUpFormData {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password: "123456".to_string(),
        }
    }

    /// Mocks that fail the test on any call
    fn untouched() -> (MockUsersApiTrait, MockNavigator, MockNotifier) {
        let mut api = MockUsersApiTrait::new();
        api.expect_create_user().never();
        let mut navigator = MockNavigator::new();
        navigator.expect_go_back().never();
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();
        (api, navigator, notifier)
    }

    mod validation_failures {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_missing_name_never_reaches_network() {
            let (api, mut navigator, mut notifier) = untouched();
            let mut form = form_with("", "ana@x.com", "123456");

            let outcome = submit_sign_up(&mut form, &api, &mut navigator, &mut notifier).await;

            assert_eq!(outcome, SubmitOutcome::Invalid);
            assert_eq!(form.error_for("name"), Some(NAME_REQUIRED));
        }

        #[tokio::test]
        async fn test_invalid_email_never_reaches_network() {
            let (api, mut navigator, mut notifier) = untouched();
            let mut form = form_with("Ana", "not-an-email", "123456");

            let outcome = submit_sign_up(&mut form, &api, &mut navigator, &mut notifier).await;

            assert_eq!(outcome, SubmitOutcome::Invalid);
            assert_eq!(form.error_for("email"), Some(EMAIL_INVALID));
        }

        #[tokio::test]
        async fn test_short_password_sets_minimum_error() {
            let (api, mut navigator, mut notifier) = untouched();
            let mut form = form_with("Ana", "ana@x.com", "123");

            let outcome = submit_sign_up(&mut form, &api, &mut navigator, &mut notifier).await;

            assert_eq!(outcome, SubmitOutcome::Invalid);
            assert_eq!(form.error_for("password"), Some(PASSWORD_TOO_SHORT));
        }

        #[tokio::test]
        async fn test_name_and_email_errors_in_same_pass() {
            let (api, mut navigator, mut notifier) = untouched();
            let mut form = form_with("", "not-an-email", "123456");

            submit_sign_up(&mut form, &api, &mut navigator, &mut notifier).await;

            assert_eq!(form.error_for("name"), Some(NAME_REQUIRED));
            assert_eq!(form.error_for("email"), Some(EMAIL_INVALID));
            assert_eq!(form.error_for("password"), None);
        }

        #[tokio::test]
        async fn test_stale_errors_cleared_on_next_attempt() {
            let (api, mut navigator, mut notifier) = untouched();
            let mut form = form_with("", "not-an-email", "123456");
            submit_sign_up(&mut form, &api, &mut navigator, &mut notifier).await;

            form.name.set_text("Ana");
            submit_sign_up(&mut form, &api, &mut navigator, &mut notifier).await;

            assert_eq!(form.error_for("name"), None);
            assert_eq!(form.error_for("email"), Some(EMAIL_INVALID));
        }
    }

    mod submission {
        use super::*;
        use mockall::Sequence;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_valid_input_registers_and_goes_back() {
            let mut api = MockUsersApiTrait::new();
            api.expect_create_user()
                .withf(|data| *data == ana_payload())
                .times(1)
                .returning(|_| Ok(()));
            // Confirmation first, then exactly one step back
            let mut seq = Sequence::new();
            let mut notifier = MockNotifier::new();
            notifier
                .expect_notify()
                .withf(|n| {
                    n.kind == NotificationKind::Success
                        && n.title == SUCCESS_TITLE
                        && n.message == SUCCESS_MESSAGE
                })
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
            let mut navigator = MockNavigator::new();
            navigator
                .expect_go_back()
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
            let mut form = form_with("Ana", "ana@x.com", "123456");

            let outcome = submit_sign_up(&mut form, &api, &mut navigator, &mut notifier).await;

            assert_eq!(outcome, SubmitOutcome::Registered);
            assert!(!form.has_errors());
        }

        #[tokio::test]
        async fn test_network_failure_alerts_without_navigating() {
            let mut api = MockUsersApiTrait::new();
            api.expect_create_user().times(1).returning(|_| {
                Err(ApiError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: "boom".to_string(),
                })
            });
            let mut navigator = MockNavigator::new();
            navigator.expect_go_back().never();
            let mut notifier = MockNotifier::new();
            notifier
                .expect_notify()
                .withf(|n| n.kind == NotificationKind::Error && n.title == FAILURE_TITLE)
                .times(1)
                .return_const(());
            let mut form = form_with("Ana", "ana@x.com", "123456");

            let outcome = submit_sign_up(&mut form, &api, &mut navigator, &mut notifier).await;

            assert_eq!(outcome, SubmitOutcome::Failed);
            assert!(!form.has_errors());
        }

        #[tokio::test]
        async fn test_failure_after_invalid_attempt_leaves_no_field_errors() {
            let mut api = MockUsersApiTrait::new();
            api.expect_create_user().times(1).returning(|_| {
                Err(ApiError::Status {
                    status: StatusCode::CONFLICT,
                    body: String::new(),
                })
            });
            let mut navigator = MockNavigator::new();
            navigator.expect_go_back().never();
            let mut notifier = MockNotifier::new();
            notifier.expect_notify().times(1).return_const(());
            let mut form = form_with("", "ana@x.com", "123456");

            assert_eq!(
                submit_sign_up(&mut form, &api, &mut navigator, &mut notifier).await,
                SubmitOutcome::Invalid
            );
            form.name.set_text("Ana");
            assert_eq!(
                submit_sign_up(&mut form, &api, &mut navigator, &mut notifier).await,
                SubmitOutcome::Failed
            );
            assert!(!form.has_errors());
        }

        #[tokio::test]
        async fn test_payload_is_trimmed_before_sending() {
            let mut api = MockUsersApiTrait::new();
            api.expect_create_user()
                .withf(|data| *data == ana_payload())
                .times(1)
                .returning(|_| Ok(()));
            let mut navigator = MockNavigator::new();
            navigator.expect_go_back().return_const(());
            let mut notifier = MockNotifier::new();
            notifier.expect_notify().return_const(());
            let mut form = form_with(" Ana", "ana@x.com ", "123456");

            let outcome = submit_sign_up(&mut form, &api, &mut navigator, &mut notifier).await;

            assert_eq!(outcome, SubmitOutcome::Registered);
        }
    }
}
