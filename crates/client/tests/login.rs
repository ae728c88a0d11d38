//! End-to-end login call against the real stub server.

use std::net::SocketAddr;

use axum::Extension;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use client::{Api, ApiClient, Bundle, Config, Method, Params, Position};

#[derive(Serialize)]
struct UserLogin {
    name: String,
    password: String,
}

impl Params for UserLogin {
    fn position(field: &str) -> Position {
        match field {
            "name" => Position::Query,
            _ => Position::Body,
        }
    }
}

#[derive(Debug, Deserialize)]
struct UserLoginResp {
    status: String,
}

async fn serve_stub() -> SocketAddr {
    let (sink, _) = api::sink::PayloadSink::memory();
    let app = api::routes::create_router().layer(Extension(sink));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn auth_bundle(addr: SocketAddr) -> Bundle {
    Bundle::new()
        .with_config(Config {
            servers: vec![format!("http://{addr}")],
            ..Config::default()
        })
        .register(ApiClient {
            name: "auth",
            apis: vec![Api {
                name: "login",
                path: "/api/v1/login",
                method: Method::Post,
            }],
            config: None,
            auth: None,
        })
        .unwrap()
}

#[tokio::test]
async fn login_returns_fixed_status() {
    let addr = serve_stub().await;
    let bundle = auth_bundle(addr);

    let params = UserLogin {
        name: "damon".into(),
        password: "chen".into(),
    };
    let resp: UserLoginResp = bundle
        .get("auth")
        .unwrap()
        .call("login", &params)
        .await
        .unwrap();

    assert_eq!(resp.status, "aaa");
}

#[tokio::test]
async fn unknown_api_name_fails_before_any_request() {
    let addr = serve_stub().await;
    let bundle = auth_bundle(addr);

    let params = UserLogin {
        name: "damon".into(),
        password: "chen".into(),
    };
    let err = bundle
        .get("auth")
        .unwrap()
        .call::<_, UserLoginResp>("logout", &params)
        .await
        .unwrap_err();

    assert!(matches!(err, client::Error::UnknownApi(name) if name == "logout"));
}
