use serde::Deserialize;
use serde_json::Value;

/// A catalog user. Only the credential pair is read; profile fields in the
/// data file are ignored and users are never rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub email: String,
    pub login: Credentials,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    /// Stored and compared as plain text.
    pub password: String,
}

impl User {
    pub fn has_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.login.password == password
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of `POST /login`, accepted as JSON or as a URL-encoded form.
///
/// Fields are kept as raw JSON values: a field that is present but not a
/// string (a number, or a repeated form key) still counts as supplied and
/// simply cannot match any user.
#[derive(Debug, Default)]
pub struct LoginRequest {
    pub email: Option<Value>,
    pub password: Option<Value>,
}

/// What a login body amounts to before the user list is consulted.
#[derive(Debug, PartialEq, Eq)]
pub enum LoginAttempt<'a> {
    /// A field is missing, empty, or otherwise falsy.
    Incomplete,
    Credentials { email: &'a str, password: &'a str },
    /// Both fields supplied, but at least one is not a string.
    Unmatchable,
}

impl LoginRequest {
    /// Takes `email` and `password` from a JSON object. Any other JSON
    /// document carries no fields.
    pub fn from_json(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => Self {
                email: fields.remove("email"),
                password: fields.remove("password"),
            },
            _ => Self::default(),
        }
    }

    /// Takes `email` and `password` from decoded form pairs. A key given
    /// more than once becomes an array of its values.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut email = Vec::new();
        let mut password = Vec::new();
        for (key, value) in pairs {
            match key.as_str() {
                "email" => email.push(value),
                "password" => password.push(value),
                _ => {}
            }
        }
        Self {
            email: form_value(email),
            password: form_value(password),
        }
    }

    pub fn attempt(&self) -> LoginAttempt<'_> {
        let (Some(email), Some(password)) = (&self.email, &self.password) else {
            return LoginAttempt::Incomplete;
        };
        if !is_truthy(email) || !is_truthy(password) {
            return LoginAttempt::Incomplete;
        }
        match (email.as_str(), password.as_str()) {
            (Some(email), Some(password)) => LoginAttempt::Credentials { email, password },
            _ => LoginAttempt::Unmatchable,
        }
    }
}

fn form_value(mut values: Vec<String>) -> Option<Value> {
    match values.len() {
        0 => None,
        1 => values.pop().map(Value::String),
        _ => Some(Value::Array(values.into_iter().map(Value::String).collect())),
    }
}

/// Empty strings, zero, `false` and `null` count as not supplied.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_nested_login_block() {
        let user: User = serde_json::from_value(json!({
            "email": "a@b.c",
            "name": { "first": "Ada" },
            "login": { "username": "ada", "password": "pw", "sha1": "x" },
        }))
        .unwrap();
        assert!(user.has_credentials("a@b.c", "pw"));
        assert!(!user.has_credentials("a@b.c", "PW"));
        assert!(!user.has_credentials("A@B.C", "pw"));
    }

    #[test]
    fn string_fields_become_credentials() {
        let request = LoginRequest::from_json(json!({ "email": "e", "password": "p" }));
        assert_eq!(
            request.attempt(),
            LoginAttempt::Credentials {
                email: "e",
                password: "p",
            }
        );
    }

    #[test]
    fn missing_or_empty_fields_are_incomplete() {
        let cases = [
            json!({ "password": "p" }),
            json!({ "email": "e" }),
            json!({}),
            json!({ "email": "", "password": "p" }),
            json!({ "email": "e", "password": null }),
            json!({ "email": 0, "password": "p" }),
            json!({ "email": "e", "password": false }),
            json!(["e", "p"]),
        ];
        for case in cases {
            assert_eq!(
                LoginRequest::from_json(case.clone()).attempt(),
                LoginAttempt::Incomplete,
                "case {case}"
            );
        }
        assert_eq!(LoginRequest::default().attempt(), LoginAttempt::Incomplete);
    }

    #[test]
    fn non_string_fields_are_supplied_but_unmatchable() {
        let cases = [
            json!({ "email": 5, "password": "x" }),
            json!({ "email": "e", "password": true }),
            json!({ "email": ["e"], "password": "x" }),
            json!({ "email": {}, "password": "x" }),
        ];
        for case in cases {
            assert_eq!(
                LoginRequest::from_json(case.clone()).attempt(),
                LoginAttempt::Unmatchable,
                "case {case}"
            );
        }
    }

    #[test]
    fn form_pairs_collect_repeated_keys() {
        let request = LoginRequest::from_pairs(pairs(&[
            ("email", "a"),
            ("email", "b"),
            ("password", "x"),
            ("remember", "on"),
        ]));
        assert_eq!(request.email, Some(json!(["a", "b"])));
        assert_eq!(request.attempt(), LoginAttempt::Unmatchable);

        let request = LoginRequest::from_pairs(pairs(&[("email", "a"), ("password", "x")]));
        assert_eq!(
            request.attempt(),
            LoginAttempt::Credentials {
                email: "a",
                password: "x",
            }
        );

        let request = LoginRequest::from_pairs(pairs(&[("password", "x")]));
        assert_eq!(request.attempt(), LoginAttempt::Incomplete);
    }
}
