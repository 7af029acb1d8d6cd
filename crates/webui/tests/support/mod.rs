//! In-memory stand-in for the records backend, plus dialog recorders.

#![allow(dead_code)]

use records_webui::{
    client::{HttpRequest, HttpResponse, Method, Transport},
    error::ApiError,
    view::{Editable, ListAction, ListModel, flow::Dialogs},
};
use serde_json::Value;
use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    rc::Rc,
};

pub const BASE_URL: &str = "http://backend.test";

const STATUSES: [&str; 5] = ["ACTIVE", "COMPLETED", "DROPPED", "FAILED", "WITHDRAWN"];

fn id_key(collection: &str) -> &'static str {
    match collection {
        "students" => "idStudent",
        "Depatment" => "idDepartment",
        "Enrollment" => "idEnrollment",
        other => panic!("unknown collection {other}"),
    }
}

fn respond(status: u16, body: impl Into<String>) -> HttpResponse {
    HttpResponse {
        status,
        body: body.into(),
    }
}

#[derive(Default)]
struct State {
    tables: HashMap<String, BTreeMap<i64, Value>>,
    next_id: i64,
    requests: Vec<HttpRequest>,
    offline: bool,
}

impl State {
    fn insert(&mut self, collection: &str, mut value: Value) -> Value {
        self.next_id += 1;
        value[id_key(collection)] = Value::from(self.next_id);
        self.tables
            .entry(collection.to_string())
            .or_default()
            .insert(self.next_id, value.clone());
        value
    }

    fn handle(
        &mut self,
        method: Method,
        collection: &str,
        action: &str,
        id: Option<i64>,
        body: Option<&str>,
    ) -> HttpResponse {
        let payload = body.map(serde_json::from_str::<Value>);
        let table = self.tables.entry(collection.to_string()).or_default();
        match (method, id) {
            (Method::Get, None) if action.starts_with("getAll") => {
                let rows: Vec<&Value> = table.values().collect();
                respond(200, serde_json::to_string(&rows).unwrap())
            }
            (Method::Get, Some(id)) if action.starts_with("get") => match table.get(&id) {
                Some(row) => respond(200, row.to_string()),
                None => respond(404, format!("no row {id}")),
            },
            (Method::Post, None) if action.starts_with("create") => {
                let Some(Ok(value)) = payload else {
                    return respond(400, "malformed body");
                };
                if let Some(rejection) = validate(collection, &value) {
                    return respond(400, rejection);
                }
                let stored = self.insert(collection, value);
                respond(200, stored.to_string())
            }
            (Method::Put, None) if action.starts_with("update") => {
                let Some(Ok(value)) = payload else {
                    return respond(400, "malformed body");
                };
                if let Some(rejection) = validate(collection, &value) {
                    return respond(400, rejection);
                }
                let Some(id) = value[id_key(collection)].as_i64() else {
                    return respond(400, "missing id");
                };
                match table.get_mut(&id) {
                    Some(row) => {
                        *row = value.clone();
                        respond(200, value.to_string())
                    }
                    None => respond(404, format!("no row {id}")),
                }
            }
            (Method::Delete, Some(id)) if action.starts_with("delete") => {
                match table.remove(&id) {
                    Some(_) => respond(200, ""),
                    None => respond(404, format!("no row {id}")),
                }
            }
            _ => respond(404, "no such endpoint"),
        }
    }
}

/// Mirrors the backend's non-null enum column on enrollments.
fn validate(collection: &str, value: &Value) -> Option<String> {
    if collection == "Enrollment" {
        match value.get("status").and_then(Value::as_str) {
            None => return Some("status must not be null".to_string()),
            Some(status) if !STATUSES.contains(&status) => {
                return Some(format!("invalid status {status:?}"));
            }
            Some(_) => {}
        }
    }
    None
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Rc<RefCell<State>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a row directly, returning it with its assigned id.
    pub fn seed(&self, collection: &str, value: Value) -> Value {
        self.state.borrow_mut().insert(collection, value)
    }

    pub fn rows(&self, collection: &str) -> Vec<Value> {
        self.state
            .borrow()
            .tables
            .get(collection)
            .map(|table| table.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn remove(&self, collection: &str, id: i64) {
        if let Some(table) = self.state.borrow_mut().tables.get_mut(collection) {
            table.remove(&id);
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.borrow().requests.len()
    }

    pub fn go_offline(&self) {
        self.state.borrow_mut().offline = true;
    }
}

impl Transport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request.clone());
        if state.offline {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        let path = request
            .url
            .strip_prefix(BASE_URL)
            .expect("requests target the fake backend");
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        let response = match segments.as_slice() {
            [collection, action] => {
                state.handle(request.method, collection, action, None, request.body.as_deref())
            }
            [collection, action, id] => match id.parse() {
                Ok(id) => state.handle(
                    request.method,
                    collection,
                    action,
                    Some(id),
                    request.body.as_deref(),
                ),
                Err(_) => respond(400, "bad id"),
            },
            _ => respond(404, "no such endpoint"),
        };
        Ok(response)
    }
}

/// Records alerts; answers every confirmation with a fixed choice.
pub struct RecordingDialogs {
    answer: bool,
    alerts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
}

impl RecordingDialogs {
    pub fn accepting() -> Self {
        Self::answering(true)
    }

    pub fn declining() -> Self {
        Self::answering(false)
    }

    fn answering(answer: bool) -> Self {
        Self {
            answer,
            alerts: RefCell::default(),
            confirms: RefCell::default(),
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }
}

impl Dialogs for RecordingDialogs {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answer
    }
}

/// A view model driven the way a mounted page drives it.
pub struct Page<R: Editable> {
    pub model: RefCell<ListModel<R>>,
}

impl<R: Editable> Page<R> {
    pub fn new() -> Self {
        Self {
            model: RefCell::new(ListModel::default()),
        }
    }

    pub fn dispatch(&self, action: ListAction<R>) {
        self.model.borrow_mut().apply(action);
    }

    pub fn rows(&self) -> Vec<R::Entity> {
        self.model.borrow().rows.clone()
    }
}
