//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use champ_mastery::AppConfig;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const API_KEY: &str = "RGAPI-test";
pub const VERSION: &str = "14.1.1";
pub const FAKER_PUUID: &str = "puuid-faker-t1";

/// A programmable upstream that answers every request from a path handler.
pub struct MockUpstream {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockUpstream {
    /// Every request target (path + query) seen so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn saw(&self, fragment: &str) -> bool {
        self.requests().iter().any(|r| r.contains(fragment))
    }
}

/// Start a mock upstream on an ephemeral port.
pub async fn start_mock_upstream<F>(handler: F) -> MockUpstream
where
    F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let handler = Arc::new(handler);

    let seen = requests.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let handler = handler.clone();
                    let seen = seen.clone();
                    tokio::spawn(async move {
                        let mut buf = Vec::new();
                        let mut chunk = [0u8; 4096];
                        loop {
                            match socket.read(&mut chunk).await {
                                Ok(0) | Err(_) => break,
                                Ok(n) => {
                                    buf.extend_from_slice(&chunk[..n]);
                                    if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                                        break;
                                    }
                                }
                            }
                        }

                        let head = String::from_utf8_lossy(&buf);
                        let target = head
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                            .unwrap_or("/")
                            .to_string();
                        seen.lock().unwrap().push(target.clone());

                        let (status, body) = handler(&target);
                        let reason = StatusCode::from_u16(status)
                            .ok()
                            .and_then(|s| s.canonical_reason())
                            .unwrap_or("Unknown");
                        let response = format!(
                            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            reason,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    MockUpstream { addr, requests }
}

/// Config pointing both upstreams at `upstream`.
pub fn test_config(upstream: SocketAddr) -> AppConfig {
    let mut config = AppConfig::default();
    config.upstream.data_dragon_url = format!("http://{}", upstream);
    config.upstream.riot_api_url = format!("http://{}", upstream);
    config.upstream.use_system_proxy = false;
    config.riot.api_key = API_KEY.to_string();
    config
}

/// A small but realistic slice of Data Dragon and the Riot API.
pub fn riot_fixture(target: &str) -> (u16, String) {
    let path = target.split('?').next().unwrap_or(target);
    let versions = format!("/cdn/{}/data/en_US", VERSION);

    if path == "/api/versions.json" {
        return (200, format!(r#"["{}", "14.0.1", "13.24.1"]"#, VERSION));
    }
    if path == format!("{}/champion.json", versions) {
        return (200, CATALOG.to_string());
    }
    if path == format!("{}/champion/Ahri.json", versions) {
        return (200, AHRI.to_string());
    }
    if path == "/riot/account/v1/accounts/by-riot-id/Faker/T1" {
        return (
            200,
            format!(r#"{{"puuid":"{}","gameName":"Faker","tagLine":"T1"}}"#, FAKER_PUUID),
        );
    }
    if path
        == format!(
            "/lol/champion-mastery/v4/champion-masteries/by-puuid/{}/by-champion/103",
            FAKER_PUUID
        )
    {
        return (200, r#"{"championId":103,"championLevel":7,"championPoints":123456}"#.to_string());
    }

    (404, r#"{"status":{"message":"Data not found","status_code":404}}"#.to_string())
}

pub const CATALOG: &str = r#"{
  "type": "champion",
  "format": "standAloneComplex",
  "version": "14.1.1",
  "data": {
    "Shaco": { "id": "Shaco", "key": "35", "name": "Shaco", "title": "the Demon Jester" },
    "MonkeyKing": { "id": "MonkeyKing", "key": "62", "name": "Wukong", "title": "the Monkey King" },
    "Ahri": { "id": "Ahri", "key": "103", "name": "Ahri", "title": "the Nine-Tailed Fox" },
    "Kayle": { "id": "Kayle", "key": "10", "name": "Kayle", "title": "the Righteous" }
  }
}"#;

pub const AHRI: &str = r#"{
  "type": "champion",
  "version": "14.1.1",
  "data": {
    "Ahri": {
      "id": "Ahri",
      "key": "103",
      "name": "Ahri",
      "tags": ["Mage", "Assassin"],
      "partype": "Mana",
      "stats": { "hp": 590, "hpperlevel": 96, "mp": 418, "movespeed": 330, "armor": 21 },
      "spells": [
        { "id": "AhriQ", "name": "Orb of Deception" },
        { "id": "AhriW", "name": "Fox-Fire" },
        { "id": "AhriE", "name": "Charm" },
        { "id": "AhriR", "name": "Spirit Rush" }
      ],
      "passive": { "name": "Essence Theft" }
    }
  }
}"#;

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("cookie", cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// `name=value` part of the first `set-cookie` header, ready for a `cookie` header.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}
