// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! A local stand-in for the MultiversX gateway `vm-values/query` endpoint.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::{Value, json};
use server::types::Bech32Address;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const PROXY: &str = "erd1qqqqqqqqqqqqqpgq0vct9qkqcnr0vgj8hsvdmufzxy9nevppu7zs8qzs0r";

#[derive(Debug, Clone)]
pub enum Reply {
    Slots(Vec<String>),
    ContractError(String),
    Http(u16),
    /// Holds the request for the given time, then answers with no slots.
    Stall(Duration),
}

#[derive(Default)]
pub struct MockGateway {
    replies: HashMap<(String, String), Reply>,
}

#[derive(Clone)]
struct GatewayState {
    replies: Arc<HashMap<(String, String), Reply>>,
    requests: Arc<Mutex<Vec<Value>>>,
}

pub struct RunningGateway {
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl RunningGateway {
    /// Bodies of all requests received so far.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, address: &str, function: &str, reply: Reply) -> Self {
        self.replies
            .insert((address.to_string(), function.to_string()), reply);
        self
    }

    pub fn slots(self, address: &str, function: &str, slots: Vec<String>) -> Self {
        self.reply(address, function, Reply::Slots(slots))
    }

    pub async fn start(self) -> RunningGateway {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = GatewayState {
            replies: Arc::new(self.replies),
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/vm-values/query", post(vm_query))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        RunningGateway {
            url: format!("http://{addr}"),
            requests,
        }
    }
}

async fn vm_query(State(state): State<GatewayState>, Json(body): Json<Value>) -> Response {
    state.requests.lock().unwrap().push(body.clone());

    let address = body["scAddress"].as_str().unwrap_or_default().to_string();
    let function = body["funcName"].as_str().unwrap_or_default().to_string();

    match state.replies.get(&(address.clone(), function.clone())) {
        Some(Reply::Stall(delay)) => {
            tokio::time::sleep(*delay).await;
            Json(json!({
                "data": {"data": {"returnData": [], "returnCode": "ok", "returnMessage": ""}},
                "error": "",
                "code": "successful"
            }))
            .into_response()
        }
        Some(Reply::Slots(slots)) => Json(json!({
            "data": {"data": {"returnData": slots, "returnCode": "ok", "returnMessage": ""}},
            "error": "",
            "code": "successful"
        }))
        .into_response(),
        Some(Reply::ContractError(message)) => Json(json!({
            "data": {"data": {"returnData": null, "returnCode": "user error", "returnMessage": message}},
            "error": "",
            "code": "successful"
        }))
        .into_response(),
        Some(Reply::Http(status)) => (
            StatusCode::from_u16(*status).unwrap(),
            "gateway unavailable",
        )
            .into_response(),
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "data": null,
                "error": format!("no such function {function} on {address}"),
                "code": "bad_request"
            })),
        )
            .into_response(),
    }
}

pub fn address(byte: u8) -> Bech32Address {
    Bech32Address::from_pubkey("erd", [byte; 32]).unwrap()
}

pub fn b64_text(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

pub fn b64_int(value: u128) -> String {
    let bytes = value.to_be_bytes();
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    STANDARD.encode(&bytes[first..])
}

pub fn b64_address(address: &Bech32Address) -> String {
    STANDARD.encode(address.pubkey())
}

/// 24-slot v1 minter info followed by one (token, amount) pair per cost.
pub fn minter_info(name: &str, costs: &[(&str, u128)]) -> Vec<String> {
    let flag_true = STANDARD.encode([0x01u8]);
    let mut slots = vec![
        b64_address(&address(0x11)),
        b64_text("MYCOL-a1b2c3"),
        b64_text(name),
        b64_text(name),
        b64_text("MYCOL"),
        b64_text("Pixel art"),
        b64_text("bafycid"),
        b64_text("png"),
        b64_text("art;pixel"),
        b64_text("Public"),
        b64_int(500),
        b64_int(250),
        b64_int(1000),
        b64_int(5),
        b64_int(1),
        b64_int(10),
        b64_int(0),
        b64_int(500),
        b64_int(250),
        flag_true.clone(),
        flag_true.clone(),
        String::new(),
        String::new(),
        flag_true,
    ];
    for (token, amount) in costs {
        slots.push(b64_text(token));
        slots.push(b64_int(*amount));
    }
    slots
}
