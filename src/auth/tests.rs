use reqwest::Client;

use super::*;
use crate::config::types::AuthConfig;
use crate::error::{AppError, AuthError, ConfigError};
use crate::test_support::{TestResponse, run_async_test, spawn_server};

#[test]
fn credential_trims_and_redacts() -> Result<(), String> {
    let credential = Credential::new("  abc.def  ").map_err(|err| err.to_string())?;
    if credential.expose() != "abc.def" {
        return Err(format!("Unexpected token: {}", credential.expose()));
    }
    if credential.bearer() != "Bearer abc.def" {
        return Err(format!("Unexpected header: {}", credential.bearer()));
    }
    if format!("{:?}", credential).contains("abc") {
        return Err("Debug output leaked the token".to_owned());
    }
    Ok(())
}

#[test]
fn credential_rejects_empty_and_control_chars() -> Result<(), String> {
    if !matches!(Credential::new("   "), Err(AuthError::EmptyToken)) {
        return Err("Expected EmptyToken".to_owned());
    }
    if !matches!(
        Credential::new("bad\ntoken"),
        Err(AuthError::InvalidTokenCharacters)
    ) {
        return Err("Expected InvalidTokenCharacters".to_owned());
    }
    Ok(())
}

#[test]
fn cli_token_wins_over_auth_section() -> Result<(), String> {
    run_async_test(async {
        let auth = AuthConfig {
            token: Some("from-config".to_owned()),
            ..AuthConfig::default()
        };
        let provider = provider_from_config(Some("from-cli"), Some(&auth), &Client::new())
            .map_err(|err| err.to_string())?;
        let credential = provider.fetch().await.map_err(|err| err.to_string())?;
        if credential.expose() != "from-cli" {
            return Err(format!("Unexpected token: {}", credential.expose()));
        }
        Ok(())
    })
}

#[test]
fn missing_auth_is_fatal() -> Result<(), String> {
    match provider_from_config(None, None, &Client::new()) {
        Err(AppError::Auth(AuthError::MissingCredential)) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected MissingCredential".to_owned()),
    }
}

#[test]
fn conflicting_auth_sources_are_rejected() -> Result<(), String> {
    let auth = AuthConfig {
        token: Some("abc".to_owned()),
        url: Some("http://localhost/login".to_owned()),
        ..AuthConfig::default()
    };
    match provider_from_config(None, Some(&auth), &Client::new()) {
        Err(AppError::Config(ConfigError::Conflict { left, right }))
            if left == "auth.token" && right == "auth.url" =>
        {
            Ok(())
        }
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected Conflict".to_owned()),
    }
}

#[test]
fn missing_token_env_is_reported() -> Result<(), String> {
    let auth = AuthConfig {
        token_env: Some("AUTHSTRESS_TEST_TOKEN_THAT_IS_NOT_SET".to_owned()),
        ..AuthConfig::default()
    };
    match provider_from_config(None, Some(&auth), &Client::new()) {
        Err(AppError::Auth(AuthError::MissingEnvToken { var })) if var.ends_with("NOT_SET") => {
            Ok(())
        }
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected MissingEnvToken".to_owned()),
    }
}

#[test]
fn token_endpoint_posts_credentials() -> Result<(), String> {
    let (base, server) = spawn_server(|request| {
        if request.method == "POST" && request.path == "/login" {
            TestResponse::new(200, r#"{"access_token":"issued-token","expires_in":60}"#)
        } else {
            TestResponse::new(404, "{}")
        }
    })?;

    run_async_test(async move {
        let provider = TokenEndpointProvider::new(
            Client::new(),
            &format!("{}/login", base),
            "alice".to_owned(),
            "secret".to_owned(),
            None,
        );
        let credential = provider.fetch().await.map_err(|err| err.to_string())?;
        if credential.expose() != "issued-token" {
            return Err(format!("Unexpected token: {}", credential.expose()));
        }
        Ok(())
    })?;

    let request = server
        .requests
        .recv_timeout(std::time::Duration::from_secs(1))
        .map_err(|err| format!("No login request recorded: {}", err))?;
    let body: serde_json::Value =
        serde_json::from_str(&request.body).map_err(|err| err.to_string())?;
    if body.get("username").and_then(serde_json::Value::as_str) != Some("alice") {
        return Err(format!("Unexpected login body: {}", request.body));
    }
    Ok(())
}

#[test]
fn token_endpoint_reads_nested_field() -> Result<(), String> {
    let (base, _server) =
        spawn_server(|_| TestResponse::new(200, r#"{"data":{"jwt":"nested-token"}}"#))?;

    run_async_test(async move {
        let provider = TokenEndpointProvider::new(
            Client::new(),
            &base,
            String::new(),
            String::new(),
            Some("data.jwt".to_owned()),
        );
        let credential = provider.fetch().await.map_err(|err| err.to_string())?;
        if credential.expose() != "nested-token" {
            return Err(format!("Unexpected token: {}", credential.expose()));
        }
        Ok(())
    })
}

#[test]
fn token_endpoint_falls_back_to_token_field() -> Result<(), String> {
    let (base, _server) = spawn_server(|_| TestResponse::new(200, r#"{"token":"plain"}"#))?;

    run_async_test(async move {
        let provider =
            TokenEndpointProvider::new(Client::new(), &base, String::new(), String::new(), None);
        let credential = provider.fetch().await.map_err(|err| err.to_string())?;
        if credential.expose() != "plain" {
            return Err(format!("Unexpected token: {}", credential.expose()));
        }
        Ok(())
    })
}

#[test]
fn token_endpoint_rejection_is_fatal() -> Result<(), String> {
    let (base, _server) = spawn_server(|_| TestResponse::new(401, r#"{"error":"nope"}"#))?;

    run_async_test(async move {
        let provider =
            TokenEndpointProvider::new(Client::new(), &base, String::new(), String::new(), None);
        match provider.fetch().await {
            Err(AppError::Auth(AuthError::TokenRejected { status: 401, .. })) => Ok(()),
            Err(err) => Err(format!("Unexpected error: {}", err)),
            Ok(_) => Err("Expected TokenRejected".to_owned()),
        }
    })
}

#[test]
fn token_endpoint_missing_field_is_fatal() -> Result<(), String> {
    let (base, _server) = spawn_server(|_| TestResponse::new(200, r#"{"other":"x"}"#))?;

    run_async_test(async move {
        let provider = TokenEndpointProvider::new(
            Client::new(),
            &base,
            String::new(),
            String::new(),
            Some("jwt".to_owned()),
        );
        match provider.fetch().await {
            Err(AppError::Auth(AuthError::TokenFieldMissing { field })) if field == "jwt" => Ok(()),
            Err(err) => Err(format!("Unexpected error: {}", err)),
            Ok(_) => Err("Expected TokenFieldMissing".to_owned()),
        }
    })
}
