//! Stub ledger backends served with warp on ephemeral ports.

use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Reply};

/// In-memory state of the stub ledger.
#[derive(Debug, Default)]
pub struct LedgerState {
    /// Balance every new user starts with
    pub default_balance: u64,
    /// Balances by user id
    pub balances: BTreeMap<u64, u64>,
    /// Number of transfers booked so far
    pub transfer_count: u64,
    /// Raw JSON bodies received on `POST /transactions`
    pub transfer_bodies: Vec<Value>,
}

/// Handle on a running stub ledger.
#[derive(Clone)]
pub struct StubLedger {
    /// Address the stub listens on
    pub addr: SocketAddr,
    /// Shared state, inspectable from tests
    pub state: Arc<Mutex<LedgerState>>,
}

impl StubLedger {
    /// Base URL of the stub.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Adds a user directly, bypassing the API.
    pub fn insert_user(&self, user_id: u64, balance: u64) {
        self.state.lock().unwrap().balances.insert(user_id, balance);
    }

    /// Current balance of a user, if it exists.
    pub fn balance(&self, user_id: u64) -> Option<u64> {
        self.state.lock().unwrap().balances.get(&user_id).copied()
    }
}

/// Accepts positive integers sent either as JSON numbers or numeric strings.
fn positive_int(value: Option<&Value>) -> Option<u64> {
    let number = match value? {
        Value::Number(number) => number.as_u64()?,
        Value::String(text) => text.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    (number > 0).then_some(number)
}

fn bad_request(body: &str) -> Response {
    warp::reply::with_status(body.to_string(), StatusCode::BAD_REQUEST).into_response()
}

fn create_user(state: &Mutex<LedgerState>) -> Response {
    let mut state = state.lock().unwrap();
    let user_id = state.balances.keys().next_back().map_or(1, |id| id + 1);
    let balance = state.default_balance;
    state.balances.insert(user_id, balance);

    warp::reply::with_status(user_id.to_string(), StatusCode::CREATED).into_response()
}

fn user_details(raw_id: &str, state: &Mutex<LedgerState>) -> Response {
    let Some(user_id) = positive_int(Some(&Value::String(raw_id.to_string()))) else {
        return bad_request("");
    };

    match state.lock().unwrap().balances.get(&user_id) {
        Some(balance) => {
            warp::reply::json(&json!({"userId": user_id, "balance": balance})).into_response()
        }
        None => bad_request(""),
    }
}

fn transfer(body: &[u8], state: &Mutex<LedgerState>) -> Response {
    let Ok(request) = serde_json::from_slice::<Value>(body) else {
        return bad_request("");
    };

    let mut state = state.lock().unwrap();
    state.transfer_bodies.push(request.clone());

    let (Some(from), Some(to), Some(amount)) = (
        positive_int(request.get("userIdFrom")),
        positive_int(request.get("userIdTo")),
        positive_int(request.get("amount")),
    ) else {
        return bad_request("");
    };
    if from == to {
        return bad_request("");
    }

    let (Some(&from_balance), Some(&to_balance)) =
        (state.balances.get(&from), state.balances.get(&to))
    else {
        return bad_request("");
    };
    if from_balance < amount {
        return bad_request("Insufficient funds.");
    }

    state.balances.insert(from, from_balance - amount);
    state.balances.insert(to, to_balance + amount);
    state.transfer_count += 1;

    warp::reply::json(&json!({"transferId": state.transfer_count})).into_response()
}

/// Starts a stub that behaves like the real ledger: users, balances and transfers.
pub async fn spawn_ledger(default_balance: u64) -> StubLedger {
    let state = Arc::new(Mutex::new(LedgerState {
        default_balance,
        ..Default::default()
    }));

    let create_state = state.clone();
    let create = warp::path("users")
        .and(warp::path::end())
        .and(warp::post())
        .map(move || create_user(&create_state));

    let details_state = state.clone();
    let details = warp::path!("users" / String)
        .and(warp::get())
        .map(move |raw_id: String| user_details(&raw_id, &details_state));

    let transfer_state = state.clone();
    let transactions = warp::path("transactions")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::bytes())
        .map(move |body: warp::hyper::body::Bytes| transfer(&body, &transfer_state));

    let routes = create.or(details).or(transactions);
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    StubLedger { addr, state }
}

/// Starts a stub that answers every request with the same status and body.
pub async fn spawn_fixed(status: u16, body: &str) -> SocketAddr {
    let status = StatusCode::from_u16(status).unwrap();
    let body = body.to_string();

    let route = warp::any().map(move || warp::reply::with_status(body.clone(), status));
    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    addr
}

/// Base URL of a local port nothing is listening on.
pub fn unreachable_base_url() -> String {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    format!("http://127.0.0.1:{}", port)
}
