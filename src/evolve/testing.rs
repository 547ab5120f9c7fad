//! Shared test helpers: document builders and a `tracing` capture layer.

use super::rules::{Rule, RULES};
use super::types::{Document, Value};
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;

pub(crate) fn doc(pairs: &[(&str, Value)]) -> Document {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), v.clone()))
        .collect()
}

/// A well-typed value for a registered rule.
pub(crate) fn sample_value(rule: &Rule) -> Value {
    match rule {
        Rule::Choice(c) => Value::from(c.choices()[0]),
        Rule::Delta(d) => Value::Int(d.minimum().max(0) + 4),
        Rule::Range(r) => Value::Int(r.start()),
        Rule::Keep => Value::from("^<.*\\.h>"),
        Rule::ForceBool(b) => Value::Bool(!b),
        Rule::Nested => Value::Map(doc(&[
            ("AfterClass", Value::Bool(true)),
            ("SplitEmptyFunction", Value::Bool(false)),
        ])),
        Rule::NestedSeq => Value::Seq(vec![
            Value::Map(doc(&[
                ("Regex", Value::from("^<.*>")),
                ("Priority", Value::Int(1)),
                ("SortPriority", Value::Int(0)),
            ])),
            Value::Map(doc(&[("Regex", Value::from(".*")), ("Priority", Value::Int(3))])),
        ]),
    }
}

/// A document holding every registered setting whose `mask` entry is set,
/// plus one unrecognized boolean and one unrecognized string.
pub(crate) fn sample_document(mask: &[bool]) -> Document {
    let mut document: Document = RULES
        .iter()
        .zip(mask)
        .filter(|(_, keep)| **keep)
        .map(|((name, rule), _)| ((*name).to_owned(), sample_value(rule)))
        .collect();
    document.insert("SortUsingDeclarations".into(), Value::Bool(true));
    document.insert("Foo".into(), Value::from("bar"));
    document
}

/// One recorded `tracing` event.
#[derive(Debug, Clone)]
pub(crate) struct CapturedEvent {
    pub(crate) level: Level,
    fields: Vec<(String, String)>,
}

impl CapturedEvent {
    pub(crate) fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

struct FieldVisitor<'a>(&'a mut Vec<(String, String)>);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_owned(), value.to_owned()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_owned(), format!("{value:?}")));
    }
}

struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Vec::new();
        event.record(&mut FieldVisitor(&mut fields));
        if let Ok(mut events) = self.events.lock() {
            events.push(CapturedEvent {
                level: *event.metadata().level(),
                fields,
            });
        }
    }
}

/// Runs `f` with a thread-local subscriber and returns every event it
/// emitted.
pub(crate) fn capture_events<T>(f: impl FnOnce() -> T) -> (T, Vec<CapturedEvent>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = Registry::default().with(CaptureLayer {
        events: Arc::clone(&events),
    });
    let out = tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().map(|e| e.clone()).unwrap_or_default();
    (out, captured)
}
