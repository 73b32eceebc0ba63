use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use tunely_engine::{
    ClientSettings, FailureKind, GeneratedPlaylist, PlaylistClient, ReqwestPlaylistClient,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestPlaylistClient {
    ReqwestPlaylistClient::new(ClientSettings {
        service_url: server.uri(),
        ..ClientSettings::default()
    })
}

#[tokio::test]
async fn posts_info_and_returns_playlist_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_playlist"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "info": "chill lofi beats for studying" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "playlist_url": "https://open.example/playlist/42" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let playlist = client_for(&server)
        .generate(1, "chill lofi beats for studying")
        .await
        .expect("generate ok");

    assert_eq!(
        playlist,
        GeneratedPlaylist {
            url: "https://open.example/playlist/42".to_string(),
            name: None,
        }
    );
}

#[tokio::test]
async fn empty_query_is_sent_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_playlist"))
        .and(body_json(json!({ "info": "" })))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Please provide input"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).generate(2, "").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(400));
    assert_eq!(err.message, "Please provide input");
}

#[tokio::test]
async fn playlist_name_is_returned_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_playlist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "playlist_name": "Midnight Study Session",
            "playlist_url": "https://open.example/playlist/7"
        })))
        .mount(&server)
        .await;

    let playlist = client_for(&server).generate(3, "focus").await.unwrap();

    assert_eq!(playlist.name.as_deref(), Some("Midnight Study Session"));
    assert_eq!(playlist.url, "https://open.example/playlist/7");
}

#[tokio::test]
async fn server_error_is_reported_as_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_playlist"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Not enough songs found on Spotify"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate(4, "obscure").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, "Not enough songs found on Spotify");
}

#[tokio::test]
async fn unexpected_shape_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_playlist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "url": "nope" })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate(5, "q").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
}

#[tokio::test]
async fn non_json_success_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_playlist"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).generate(6, "q").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
}

#[tokio::test]
async fn configured_timeout_is_applied() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_playlist"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "playlist_url": "https://example.com/slow" })),
        )
        .mount(&server)
        .await;

    let client = ReqwestPlaylistClient::new(ClientSettings {
        service_url: server.uri(),
        request_timeout: Some(Duration::from_millis(50)),
        ..ClientSettings::default()
    });

    let err = client.generate(7, "q").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    // Bind then release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ReqwestPlaylistClient::new(ClientSettings {
        service_url: format!("http://{addr}"),
        ..ClientSettings::default()
    });

    let err = client.generate(8, "q").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}

#[tokio::test]
async fn invalid_service_url_fails_before_sending() {
    let client = ReqwestPlaylistClient::new(ClientSettings {
        service_url: "::not a url::".to_string(),
        ..ClientSettings::default()
    });

    let err = client.generate(9, "q").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidEndpoint);
}
