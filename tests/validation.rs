mod common;

use common::{expected_failure, valid_params, Recorder};
use serde_json::{json, Value};
use superchief::{
    endpoint::Requirement,
    endpoints::{self, ALL, DBL_POST, HASTE_POST, MEMES, PASTE_POST, TIME, TRANSLATE},
    request::Body,
    Blacklist, Client, Envelope, Params,
};

fn failure_message(envelope: &Envelope) -> &str {
    assert!(!envelope.status(), "expected a failure, got {envelope:?}");
    envelope.message().unwrap()
}

fn keyless(recorder: &Recorder) -> Client {
    Client::builder()
        .base_url("https://services.test")
        .transport(recorder.clone())
        .build()
        .unwrap()
}

#[tokio::test]
async fn missing_key_or_arguments_never_reach_the_network() {
    let recorder = Recorder::replying(200, r#"{"ok":true}"#);
    let client = keyless(&recorder);

    for endpoint in ALL {
        let envelope = client.call(endpoint, &Params::new()).await;
        let first_required = endpoint.params.iter().find_map(|p| match p.requirement {
            Requirement::Required(message) => Some(message),
            _ => None,
        });
        match (endpoint.missing_key, first_required) {
            (Some(message), _) | (None, Some(message)) => {
                assert_eq!(failure_message(&envelope), message, "{}", endpoint.name);
            }
            (None, None) => unreachable!("{} takes no arguments at all", endpoint.name),
        }
    }
    assert_eq!(recorder.count(), 0);
}

#[tokio::test]
async fn missing_required_argument_is_reported_with_a_key() {
    let recorder = Recorder::replying(200, r#"{"ok":true}"#);
    let client = recorder.client();

    for endpoint in ALL {
        let Some(message) = endpoint.params.iter().find_map(|p| match p.requirement {
            Requirement::Required(message) | Requirement::RequiredUnless { message, .. } => {
                Some(message)
            }
            _ => None,
        }) else {
            continue;
        };
        let envelope = client.call(endpoint, &Params::new()).await;
        assert_eq!(failure_message(&envelope), message, "{}", endpoint.name);
        assert!(!message.is_empty());
    }
    assert_eq!(recorder.count(), 0);
}

#[tokio::test]
async fn transport_failure_reports_the_endpoint_message() {
    let recorder = Recorder::failing();
    let client = recorder.client();

    for endpoint in ALL {
        let params = valid_params(endpoint);
        let expected = expected_failure(endpoint, &params);
        let envelope = client.call(endpoint, &params).await;
        assert_eq!(failure_message(&envelope), expected, "{}", endpoint.name);
    }
    assert_eq!(recorder.count(), ALL.len());
}

#[tokio::test]
async fn error_status_and_empty_bodies_report_the_endpoint_message() {
    for recorder in [
        Recorder::replying(500, r#"{"error":"boom"}"#),
        Recorder::replying(404, ""),
        Recorder::replying(200, ""),
        Recorder::replying(200, "  \n"),
        Recorder::replying(200, "null"),
    ] {
        let client = recorder.client();
        for endpoint in ALL {
            let params = valid_params(endpoint);
            let expected = expected_failure(endpoint, &params);
            let envelope = client.call(endpoint, &params).await;
            assert_eq!(failure_message(&envelope), expected, "{}", endpoint.name);
        }
    }
}

#[tokio::test]
async fn successful_bodies_are_returned_verbatim() {
    let body = json!({"key": "k1", "status": 200, "data": {"answer": "Yes."}});
    let recorder = Recorder::replying(200, &body.to_string());
    let client = recorder.client();

    for endpoint in ALL.iter().filter(|e| e.name != HASTE_POST.name) {
        let envelope = client.call(endpoint, &valid_params(endpoint)).await;
        assert_eq!(envelope, Envelope::Success(body.clone()), "{}", endpoint.name);
    }
}

#[tokio::test]
async fn upload_is_reshaped() {
    let recorder = Recorder::replying(200, r#"{"key":"abcdef"}"#);
    let client = recorder.client();

    let envelope = client
        .upload("let x = 1;", superchief::HasteOptions::extension("rs"))
        .await;
    assert_eq!(
        envelope.to_value(),
        json!({"status": true, "id": "abcdef", "url": "https://haste.test/abcdef.rs"})
    );

    let envelope = client
        .upload(
            "print(1)",
            superchief::HasteOptions::default().url("https://paste.other/"),
        )
        .await;
    assert_eq!(
        envelope.to_value(),
        json!({"status": true, "id": "abcdef", "url": "https://paste.other/abcdef.js"})
    );

    let requests = recorder.requests();
    assert_eq!(requests[1].url.as_str(), "https://paste.other/documents");
    assert!(requests.iter().all(|r| r.header("key").is_none()));
}

#[tokio::test]
async fn non_numeric_counts_are_rejected() {
    let recorder = Recorder::replying(200, "{}");
    let client = recorder.client();
    let params = Params::new()
        .with("token", "t")
        .with("id", "264811613708746752")
        .with("servers", "abc");

    let envelope = client.call(&DBL_POST, &params).await;
    assert_eq!(
        failure_message(&envelope),
        "The 'servers' number value isn't valid!"
    );

    let params = params.with("servers", "12").with("shards", "two");
    let envelope = client.call(&DBL_POST, &params).await;
    assert_eq!(
        failure_message(&envelope),
        "The 'shards' number value isn't valid!"
    );
    assert_eq!(recorder.count(), 0);

    let envelope = client.dbl_post("t", "264811613708746752", 12, Some(2)).await;
    assert!(envelope.is_ok());
    let requests = recorder.requests();
    assert_eq!(requests[0].body, Body::Json(json!({"servers": 12, "shards": 2})));
    assert_eq!(requests[0].header("token"), Some("t"));
}

#[tokio::test]
async fn zero_servers_are_missing() {
    let recorder = Recorder::replying(200, "{}");
    let client = recorder.client();
    let params = Params::new()
        .with("token", "t")
        .with("id", "264811613708746752")
        .with("servers", 0);

    let envelope = client.call(&DBL_POST, &params).await;
    assert_eq!(
        failure_message(&envelope),
        "You didn't provide 'servers' number!"
    );
    let envelope = client.dbl_post("t", "264811613708746752", 0, None).await;
    assert_eq!(
        failure_message(&envelope),
        "You didn't provide 'servers' number!"
    );
    assert_eq!(recorder.count(), 0);
}

#[tokio::test]
async fn strict_bools_reject_anything_else() {
    let recorder = Recorder::replying(200, "{}");
    let client = recorder.client();

    for bad in ["yes", "1", "tru"] {
        let envelope = client.call(&MEMES, &Params::new().with("clean", bad)).await;
        assert_eq!(
            failure_message(&envelope),
            "The 'clean' you provided is invalid, it has to be a boolean."
        );
        let envelope = client
            .call(&TIME, &Params::new().with("all", bad).with("place", "paris"))
            .await;
        assert_eq!(failure_message(&envelope), "'all' isn't a boolean!");
    }
    assert_eq!(recorder.count(), 0);

    for good in [Params::new().with("clean", "False"), Params::new().with("clean", true)] {
        assert!(client.call(&MEMES, &good).await.is_ok());
    }
    assert_eq!(recorder.count(), 2);
}

#[tokio::test]
async fn paste_privacy_falls_back_to_public() {
    let recorder = Recorder::replying(200, r#"{"id":"p1"}"#);
    let client = recorder.client();

    for text in ["sometimes", "true"] {
        let params = Params::new().with("content", "hello").with("priv", text);
        assert!(client.call(&PASTE_POST, &params).await.is_ok());
    }
    assert!(client.create_paste(Some("t"), "hello", true).await.is_ok());

    let requests = recorder.requests();
    for request in &requests[..2] {
        assert_eq!(
            request.body,
            Body::Json(json!({"content": "hello", "priv": false, "title": null}))
        );
    }
    assert_eq!(
        requests[2].body,
        Body::Json(json!({"content": "hello", "priv": true, "title": "t"}))
    );
}

#[tokio::test]
async fn time_list_and_place() {
    let recorder = Recorder::failing();
    let client = recorder.client();

    let envelope = client.time(None, true).await;
    assert_eq!(failure_message(&envelope), "Unable to fetch the times list!");
    let envelope = client.time(Some("London"), false).await;
    assert_eq!(
        failure_message(&envelope),
        "Unable to fetch the info for London"
    );
    let envelope = client.time(None, false).await;
    assert_eq!(failure_message(&envelope), "You didn't provide a place!");

    let urls: Vec<String> = recorder
        .requests()
        .iter()
        .map(|r| r.url.to_string())
        .collect();
    assert_eq!(
        urls,
        [
            "https://services.test/api/time?all=true",
            "https://services.test/api/time?place=london"
        ]
    );
}

#[tokio::test]
async fn lookups_are_not_cached() {
    let recorder = Recorder::replying(200, r#"{"name":"serde","version":"1.0.0"}"#);
    let client = recorder.client();

    let first = client.npm("serde").await;
    let second = client.npm("serde").await;
    assert_eq!(first, second);
    assert!(first.is_ok());
    assert_eq!(recorder.count(), 2);
}

#[tokio::test]
async fn per_call_keys() {
    let recorder = Recorder::replying(200, "{}");
    let client = keyless(&recorder);

    let envelope = client.translate("de", "hi").await;
    assert_eq!(failure_message(&envelope), "You didn't provide a API Key");

    let params = Params::new().with("to", "de").with("text", "hi");
    assert!(client.call_with_key(&TRANSLATE, "one", &params).await.is_ok());
    assert!(client.with_key("two").translate("de", "hi").await.is_ok());

    let keys: Vec<_> = recorder
        .requests()
        .iter()
        .map(|r| r.header("key").map(ToString::to_string))
        .collect();
    assert_eq!(keys, [Some("one".to_string()), Some("two".to_string())]);
    assert!(client.key().is_none());
}

#[tokio::test]
async fn undecodable_bodies_report_the_parser_error() {
    let recorder = Recorder::replying(200, "<html>oops</html>");
    let client = recorder.client();

    let envelope = client.eight_ball().await;
    assert!(!failure_message(&envelope).is_empty());
    assert_ne!(
        failure_message(&envelope),
        "Unknown error while trying to fetch 8ball from the API"
    );
}

#[tokio::test]
async fn named_calls_and_blacklists() {
    let recorder = Recorder::replying(200, r#"{"blacklisted":true}"#);
    let client = recorder.client();

    let envelope = client.call_named("nope", &Params::new()).await;
    assert_eq!(failure_message(&envelope), "Unknown endpoint 'nope'");

    let envelope = client
        .call_named("blacklist.servers.check", &Params::new().with("id", 42u64))
        .await;
    assert_eq!(envelope.body(), Some(&json!({"blacklisted": true})));

    client.blacklist(Blacklist::Users, "7", Some("raid")).await;
    client.unblacklist(Blacklist::Users, "7").await;
    client.blacklisted(Blacklist::Servers).await;
    client.is_blacklisted(Blacklist::Users, "7").await;

    let urls: Vec<String> = recorder
        .requests()
        .iter()
        .map(|r| r.url.to_string())
        .collect();
    assert_eq!(
        urls,
        [
            "https://services.test/dev/blacklists/servers?action=check&id=42",
            "https://services.test/dev/blacklists/users?action=add&id=7&reason=raid",
            "https://services.test/dev/blacklists/users?action=remove&id=7",
            "https://services.test/dev/blacklists/servers?action=list",
            "https://services.test/dev/blacklists/users?action=check&id=7",
        ]
    );
    assert!(recorder
        .requests()
        .iter()
        .all(|r| r.method == reqwest::Method::GET));
    assert_eq!(endpoints::find("blacklist.users.add").unwrap().fixed, [("action", "add")]);
}

#[test]
fn support_url_follows_the_base() {
    let client = Client::builder()
        .base_url("https://services.test/")
        .transport(Recorder::failing())
        .build()
        .unwrap();
    assert_eq!(client.support_url(), "https://services.test/site/support");
    assert_eq!(
        Client::default().support_url(),
        "https://services.superchiefyt.tk/site/support"
    );
}

#[test]
fn envelopes_serialize_like_the_service() {
    let failed: Value = serde_json::to_value(Envelope::from(superchief::Error::MissingArgument(
        "You didn't provide a npm package name!".into(),
    )))
    .unwrap();
    assert_eq!(
        failed,
        json!({"status": false, "message": "You didn't provide a npm package name!"})
    );
}
