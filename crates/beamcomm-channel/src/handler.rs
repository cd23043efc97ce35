use std::fmt;

use beamcomm_frame::encode_frame;
use beamcomm_link::NameWriter;

/// Reaction invoked with the payload and a handle for replying.
pub type Action = Box<dyn FnMut(&str, &mut Responder<'_>)>;

/// Outbound handle given to handler actions.
///
/// Sends go to the same link the message arrived on. Each send overwrites the
/// previous outbound frame; nothing is queued.
pub struct Responder<'a> {
    writer: &'a mut dyn NameWriter,
    tag: &'a str,
    sent: usize,
}

impl<'a> Responder<'a> {
    pub fn new(writer: &'a mut dyn NameWriter, tag: &'a str) -> Self {
        Self {
            writer,
            tag,
            sent: 0,
        }
    }

    /// Encode `payload` under this endpoint's tag and write it as the local name.
    pub fn send(&mut self, payload: &str) {
        self.writer.write_name(&encode_frame(self.tag, payload));
        self.sent += 1;
    }

    /// Tag of the endpoint replying.
    pub fn tag(&self) -> &str {
        self.tag
    }

    /// Number of sends issued through this responder.
    pub fn sent(&self) -> usize {
        self.sent
    }
}

/// Decides whether a handler applies to a payload.
pub enum Matcher {
    /// Exact string equality.
    Exact(String),
    /// Arbitrary predicate.
    Predicate(Box<dyn Fn(&str) -> bool>),
}

impl Matcher {
    pub fn matches(&self, payload: &str) -> bool {
        match self {
            Matcher::Exact(text) => text == payload,
            Matcher::Predicate(predicate) => predicate(payload),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Exact(text) => f.debug_tuple("Exact").field(text).finish(),
            Matcher::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// A matcher paired with the action it triggers.
pub struct Handler {
    matcher: Matcher,
    action: Action,
}

impl Handler {
    /// Fire on payloads exactly equal to `text`.
    pub fn literal<A>(text: impl Into<String>, action: A) -> Self
    where
        A: FnMut(&str, &mut Responder<'_>) + 'static,
    {
        Self {
            matcher: Matcher::Exact(text.into()),
            action: Box::new(action),
        }
    }

    /// Fire on payloads for which `predicate` returns true.
    pub fn when<P, A>(predicate: P, action: A) -> Self
    where
        P: Fn(&str) -> bool + 'static,
        A: FnMut(&str, &mut Responder<'_>) + 'static,
    {
        Self {
            matcher: Matcher::Predicate(Box::new(predicate)),
            action: Box::new(action),
        }
    }

    pub fn matches(&self, payload: &str) -> bool {
        self.matcher.matches(payload)
    }

    pub fn run(&mut self, payload: &str, responder: &mut Responder<'_>) {
        (self.action)(payload, responder);
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

/// Handlers in registration order. Entries are never removed.
#[derive(Debug, Default)]
pub struct HandlerRegistry {
    handlers: Vec<Handler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler. Duplicates and overlaps are allowed.
    pub fn register(&mut self, handler: Handler) {
        self.handlers.push(handler);
    }

    /// Run every handler whose matcher accepts `payload`, in registration order.
    ///
    /// Returns the number of actions invoked.
    pub fn dispatch(&mut self, payload: &str, responder: &mut Responder<'_>) -> usize {
        let mut fired = 0;
        for handler in &mut self.handlers {
            if handler.matches(payload) {
                handler.run(payload, responder);
                fired += 1;
            }
        }
        fired
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
