//! Live Subscription Client
//!
//! Real-time connection to the document store, delivering expense change
//! batches.

use std::cell::RefCell;
use std::rc::Rc;
use leptos::SignalSet;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use super::global::{DocChange, GlobalState};
use crate::api::{EXPENSES_COLLECTION, ORDER_BY_FIELD};

/// Subscription messages from the store
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    Connected {
        connection_id: String,
    },
    Changes {
        changes: Vec<DocChange>,
    },
    Subscribed {
        collection: String,
    },
    Pong,
    Error {
        message: String,
    },
}

/// Client messages to the store
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Subscribe { collection: String, order_by: String },
    Ping,
}

/// WebSocket client for the live expense subscription
pub struct SubscriptionClient {
    ws: Rc<RefCell<Option<WebSocket>>>,
    url: String,
    reconnect_attempts: Rc<RefCell<u32>>,
    max_reconnect_attempts: u32,
}

impl SubscriptionClient {
    /// Create a new subscription client
    pub fn new(url: &str) -> Self {
        Self {
            ws: Rc::new(RefCell::new(None)),
            url: url.to_string(),
            reconnect_attempts: Rc::new(RefCell::new(0)),
            max_reconnect_attempts: 5,
        }
    }

    /// Connect to the store's subscription endpoint
    pub fn connect(&self, state: GlobalState) {
        match WebSocket::new(&self.url) {
            Ok(ws) => {
                self.setup_handlers(&ws, state);
                *self.ws.borrow_mut() = Some(ws);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("WebSocket connection failed: {:?}", e).into());
                self.schedule_reconnect(state);
            }
        }
    }

    /// Set up WebSocket event handlers
    fn setup_handlers(&self, ws: &WebSocket, state: GlobalState) {
        let reconnect_attempts = Rc::clone(&self.reconnect_attempts);
        let ws_ref = Rc::clone(&self.ws);
        let url = self.url.clone();

        // On open: mark connected and subscribe to the ordered collection.
        // Subscribing here also covers reconnects.
        let state_clone = state.clone();
        let reconnect_clone = Rc::clone(&reconnect_attempts);
        let ws_clone = ws.clone();
        let on_open = Closure::wrap(Box::new(move |_: JsValue| {
            web_sys::console::log_1(&"Store subscription connected".into());
            state_clone.ws_connected.set(true);
            *reconnect_clone.borrow_mut() = 0;

            let subscribe = ClientMessage::Subscribe {
                collection: EXPENSES_COLLECTION.to_string(),
                order_by: ORDER_BY_FIELD.to_string(),
            };
            if let Ok(json) = serde_json::to_string(&subscribe) {
                let _ = ws_clone.send_with_str(&json);
            }
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        on_open.forget();

        // On message
        let state_clone = state.clone();
        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            if let Ok(text) = event.data().dyn_into::<js_sys::JsString>() {
                let text_str: String = text.into();
                handle_message(&text_str, &state_clone);
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        on_message.forget();

        // On close: reconnect with bounded backoff
        let state_clone = state.clone();
        let ws_clone = Rc::clone(&ws_ref);
        let url_clone = url.clone();
        let reconnect_clone = Rc::clone(&reconnect_attempts);
        let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
            web_sys::console::log_1(
                &format!(
                    "Subscription closed: code={}, reason={}",
                    event.code(),
                    event.reason()
                )
                .into(),
            );
            state_clone.ws_connected.set(false);

            let attempts = *reconnect_clone.borrow();
            if attempts < 5 {
                let delay = (2_u32.pow(attempts) * 1000).min(30000);
                *reconnect_clone.borrow_mut() = attempts + 1;

                let state_inner = state_clone.clone();
                let url_inner = url_clone.clone();
                let ws_inner = Rc::clone(&ws_clone);
                let reconnect_inner = Rc::clone(&reconnect_clone);

                gloo_timers::callback::Timeout::new(delay, move || {
                    web_sys::console::log_1(
                        &format!("Attempting reconnect (attempt {})", reconnect_inner.borrow())
                            .into(),
                    );
                    let client = SubscriptionClient {
                        ws: ws_inner,
                        url: url_inner,
                        reconnect_attempts: reconnect_inner,
                        max_reconnect_attempts: 5,
                    };
                    client.connect(state_inner);
                })
                .forget();
            }
        }) as Box<dyn FnMut(CloseEvent)>);
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));
        on_close.forget();

        // On error
        let on_error = Closure::wrap(Box::new(move |e: JsValue| {
            web_sys::console::error_1(&format!("WebSocket error: {:?}", e).into());
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();
    }

    /// Schedule a reconnect attempt
    fn schedule_reconnect(&self, state: GlobalState) {
        let attempts = *self.reconnect_attempts.borrow();
        if attempts >= self.max_reconnect_attempts {
            web_sys::console::error_1(&"Max reconnect attempts reached".into());
            return;
        }

        let delay = (2_u32.pow(attempts) * 1000).min(30000);
        *self.reconnect_attempts.borrow_mut() = attempts + 1;

        let ws_ref = Rc::clone(&self.ws);
        let url = self.url.clone();
        let reconnect_attempts = Rc::clone(&self.reconnect_attempts);
        let max_attempts = self.max_reconnect_attempts;

        gloo_timers::callback::Timeout::new(delay, move || {
            let client = SubscriptionClient {
                ws: ws_ref,
                url,
                reconnect_attempts,
                max_reconnect_attempts: max_attempts,
            };
            client.connect(state);
        })
        .forget();
    }

    /// Send a keepalive ping; fails harmlessly while disconnected
    fn ping(&self) -> Result<(), String> {
        let ws_guard = self.ws.borrow();
        let ws = ws_guard.as_ref().ok_or("WebSocket not connected")?;

        let json = serde_json::to_string(&ClientMessage::Ping).map_err(|e| e.to_string())?;
        ws.send_with_str(&json).map_err(|e| format!("{:?}", e))
    }
}

/// Handle an incoming subscription message
fn handle_message(text: &str, state: &GlobalState) {
    match serde_json::from_str::<WsMessage>(text) {
        Ok(msg) => match msg {
            WsMessage::Connected { connection_id } => {
                web_sys::console::log_1(&format!("Connected with ID: {}", connection_id).into());
            }
            WsMessage::Changes { changes } => {
                let count = changes.len();
                state.apply_changes(changes);
                web_sys::console::log_1(&format!("Applied {} document change(s)", count).into());
            }
            WsMessage::Subscribed { collection } => {
                web_sys::console::log_1(&format!("Subscribed to: {}", collection).into());
            }
            WsMessage::Pong => {
                // Connection alive
            }
            WsMessage::Error { message } => {
                web_sys::console::error_1(&format!("Store error: {}", message).into());
                state.show_error(&message);
            }
        },
        Err(e) => {
            web_sys::console::error_1(
                &format!("Failed to parse subscription message: {}", e).into(),
            );
        }
    }
}

/// Start the live subscription (call from the app root)
pub fn init_subscription(state: GlobalState, api_base: &str) {
    // Convert the HTTP base URL to its WebSocket endpoint
    let ws_url = api_base
        .replace("http://", "ws://")
        .replace("https://", "wss://");
    let ws_url = format!("{}/ws", ws_url);

    let client = SubscriptionClient::new(&ws_url);
    client.connect(state);

    // Keepalive; the reconnected socket shares the same handle slot
    gloo_timers::callback::Interval::new(30_000, move || {
        let _ = client.ping();
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::global::ChangeKind;

    #[test]
    fn change_batch_deserializes() {
        let json = r#"{
            "type": "changes",
            "changes": [
                {"kind": "added", "doc": {"id": "a1", "name": "rent", "cost": 1000}},
                {"kind": "removed", "doc": {"id": "b2", "name": "food", "cost": 500}}
            ]
        }"#;
        let msg: WsMessage = serde_json::from_str(json).unwrap();
        match msg {
            WsMessage::Changes { changes } => {
                assert_eq!(changes.len(), 2);
                assert_eq!(changes[0].kind, ChangeKind::Added);
                assert_eq!(changes[0].doc.name, "rent");
                assert_eq!(changes[1].kind, ChangeKind::Removed);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn error_message_deserializes() {
        let msg: WsMessage =
            serde_json::from_str(r#"{"type": "error", "message": "boom"}"#).unwrap();
        assert!(matches!(msg, WsMessage::Error { message } if message == "boom"));
    }

    #[test]
    fn subscribe_serializes_with_tag() {
        let json = serde_json::to_string(&ClientMessage::Subscribe {
            collection: "expenses".to_string(),
            order_by: "cost".to_string(),
        })
        .unwrap();
        assert!(json.contains(r#""type":"subscribe""#));
        assert!(json.contains(r#""order_by":"cost""#));
    }
}
