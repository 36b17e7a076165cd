//! Coverage of the capability-injected auth command: grant-type selection,
//! narration through the `Ui`, error propagation, and the version check.

use parlance::testing::{test_ui, FakeAuthActor, FakeConfig};
use parlance::{AuthCommand, AuthError, CommandError, Credentials, GrantType};

fn command(client_credentials: bool) -> AuthCommand {
    AuthCommand {
        credentials: Credentials {
            id: "some-id".to_string(),
            secret: "some-secret".to_string(),
        },
        client_credentials,
    }
}

fn config() -> FakeConfig {
    FakeConfig {
        binary_name: "faceman".to_string(),
        target: "some-api-target".to_string(),
        ..FakeConfig::default()
    }
}

#[test]
fn password_grant_narrates_and_authenticates() {
    let config = config();
    let actor = FakeAuthActor::new();
    let (mut ui, out, _err) = test_ui(&config);

    command(false).execute(&mut ui, &config, &actor).unwrap();

    let out = out.as_string();
    assert!(out.contains("API endpoint: \x1b[36;1msome-api-target\x1b[0m"));
    assert!(out.contains("Authenticating...\n"));
    assert!(out.contains("\x1b[32;1mOK\x1b[0m\n"));
    assert!(out.contains("Use 'faceman target' to view or set your target"));

    assert_eq!(actor.authenticate_call_count(), 1);
    let call = actor.authenticate_args_for_call(0);
    assert_eq!(call.id, "some-id");
    assert_eq!(call.secret, "some-secret");
    assert_eq!(call.grant_type, GrantType::Password);
}

#[test]
fn client_credentials_flag_selects_the_client_credentials_grant() {
    let config = config();
    let actor = FakeAuthActor::new();
    let (mut ui, _out, _err) = test_ui(&config);

    command(true).execute(&mut ui, &config, &actor).unwrap();

    assert_eq!(actor.authenticate_call_count(), 1);
    assert_eq!(
        actor.authenticate_args_for_call(0).grant_type,
        GrantType::ClientCredentials
    );
}

#[test]
fn output_order_is_endpoint_then_authenticating_then_ok_then_tip() {
    let config = config();
    let actor = FakeAuthActor::new();
    let (mut ui, out, _err) = test_ui(&config);

    command(false).execute(&mut ui, &config, &actor).unwrap();

    let out = out.as_string();
    let endpoint = out.find("API endpoint:").unwrap();
    let authenticating = out.find("Authenticating...").unwrap();
    let ok = out.find("OK").unwrap();
    let tip = out.find("Use 'faceman target'").unwrap();
    assert!(endpoint < authenticating);
    assert!(authenticating < ok);
    assert!(ok < tip);
}

#[test]
fn bad_credentials_propagate_unchanged() {
    let config = config();
    let actor = FakeAuthActor::new();
    actor.set_authenticate_returns(Err(AuthError::BadCredentials {
        message: "some message".to_string(),
    }));
    let (mut ui, out, _err) = test_ui(&config);

    let err = command(false).execute(&mut ui, &config, &actor).unwrap_err();

    match err {
        CommandError::Auth(auth) => assert_eq!(
            auth,
            AuthError::BadCredentials {
                message: "some message".to_string(),
            }
        ),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!out.as_string().contains("OK"));
}

#[test]
fn unexpected_actor_errors_propagate_unchanged() {
    let config = config();
    let actor = FakeAuthActor::new();
    actor.set_authenticate_returns(Err(AuthError::Unexpected {
        message: "my humps".to_string(),
    }));
    let (mut ui, _out, _err) = test_ui(&config);

    let err = command(false).execute(&mut ui, &config, &actor).unwrap_err();
    assert_eq!(err.to_string(), "my humps");
}

mod version_check {
    use super::*;

    fn versioned_config(binary: &str) -> FakeConfig {
        FakeConfig {
            binary_version: binary.to_string(),
            min_cli_version: "1.0.0".to_string(),
            api_version: "1.2.3".to_string(),
            ..config()
        }
    }

    #[test]
    fn older_binary_shows_the_upgrade_recommendation() {
        let config = versioned_config("0.0.0");
        let actor = FakeAuthActor::new();
        let (mut ui, _out, err) = test_ui(&config);

        command(false).execute(&mut ui, &config, &actor).unwrap();

        let err = err.as_string();
        assert!(err.contains(
            "API version 1.2.3 requires CLI version 1.0.0. \
             You are currently on version 0.0.0. Please upgrade your CLI."
        ));
    }

    #[test]
    fn satisfying_binary_shows_no_recommendation() {
        let config = versioned_config("1.0.0");
        let actor = FakeAuthActor::new();
        let (mut ui, _out, err) = test_ui(&config);

        command(false).execute(&mut ui, &config, &actor).unwrap();
        assert!(!err.as_string().contains("requires CLI version"));
    }

    #[test]
    fn malformed_binary_version_fails_before_authenticating() {
        let config = versioned_config("&#%");
        let actor = FakeAuthActor::new();
        let (mut ui, _out, _err) = test_ui(&config);

        let err = command(false).execute(&mut ui, &config, &actor).unwrap_err();
        assert!(matches!(err, CommandError::Version(_)));
        assert_eq!(actor.authenticate_call_count(), 0);
    }
}
