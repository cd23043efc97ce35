use std::fmt;

use beamcomm_frame::{decode_status, encode_frame, ChangeDetector, FrameError};
use beamcomm_link::{Device, LinkDriver, NameWriter};
use tracing::{debug, info, trace};

use crate::config::ChannelConfig;
use crate::handler::{Handler, HandlerRegistry, Responder};

/// Optional observer for human-readable trace lines.
pub type LogFn = Box<dyn FnMut(&str)>;

/// What a single tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The status text held no decodable frame.
    NoFrame(FrameError),
    /// A frame decoded to the payload already dispatched.
    Unchanged,
    /// A new payload was dispatched to `fired` handlers.
    Dispatched { payload: String, fired: usize },
}

impl TickOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, TickOutcome::Dispatched { .. })
    }
}

/// One endpoint's messaging stack.
///
/// Owns the link to its device, the change detector and the handler registry.
/// Ticks must be strictly sequential; handler actions only get a
/// [`Responder`], so they cannot tick the channel they run in.
pub struct Channel<D> {
    tag: String,
    link: LinkDriver<D>,
    config: ChannelConfig,
    detector: ChangeDetector,
    registry: HandlerRegistry,
    on_log: Option<LogFn>,
}

impl<D: Device> Channel<D> {
    /// Build a channel around an explicit device with default configuration.
    ///
    /// When `tag` is `None` or empty, the device's current name becomes the tag.
    pub fn from_device(device: D, tag: Option<&str>) -> Self {
        Self::from_device_with_config(device, tag, ChannelConfig::default(), None)
    }

    /// Build a channel around an explicit device.
    pub fn from_device_with_config(
        device: D,
        tag: Option<&str>,
        config: ChannelConfig,
        on_log: Option<LogFn>,
    ) -> Self {
        let link = LinkDriver::new(device);
        let tag = match tag {
            Some(tag) if !tag.is_empty() => tag.to_string(),
            _ => link.device_name(),
        };
        debug!(tag = %tag, "channel created");

        Self {
            tag,
            link,
            config,
            detector: ChangeDetector::new(),
            registry: HandlerRegistry::new(),
            on_log,
        }
    }

    /// Register an action for payloads exactly equal to `text`.
    pub fn on<A>(&mut self, text: impl Into<String>, action: A) -> &mut Self
    where
        A: FnMut(&str, &mut Responder<'_>) + 'static,
    {
        self.on_handler(Handler::literal(text, action))
    }

    /// Register an action for payloads accepted by `predicate`.
    pub fn on_match<P, A>(&mut self, predicate: P, action: A) -> &mut Self
    where
        P: Fn(&str) -> bool + 'static,
        A: FnMut(&str, &mut Responder<'_>) + 'static,
    {
        self.on_handler(Handler::when(predicate, action))
    }

    /// Register a prepared handler.
    pub fn on_handler(&mut self, handler: Handler) -> &mut Self {
        self.registry.register(handler);
        self
    }

    /// Write `payload` as this endpoint's outbound frame.
    ///
    /// Overwrites whatever frame was there; the peer may never see it.
    pub fn send(&mut self, payload: &str) {
        self.link.write_name(&encode_frame(&self.tag, payload));
    }

    /// Run one poll-decode-dispatch cycle.
    pub fn tick(&mut self) -> TickOutcome {
        self.link.force_reconnect();

        let raw = self.link.read_status();
        let payload = match decode_status(&raw, &self.config.frame) {
            Ok(payload) => payload,
            Err(err) => {
                debug!(tag = %self.tag, reason = %err, "no frame in status");
                return TickOutcome::NoFrame(err);
            }
        };

        if !self.detector.observe(&payload) {
            trace!(tag = %self.tag, "payload unchanged");
            return TickOutcome::Unchanged;
        }

        info!(tag = %self.tag, payload = %payload, "new message");
        if let Some(log) = self.on_log.as_mut() {
            log(&format!("New Message: {payload}"));
        }

        let mut responder = Responder::new(&mut self.link, &self.tag);
        let fired = self.registry.dispatch(&payload, &mut responder);
        debug!(
            tag = %self.tag,
            fired,
            replies = responder.sent(),
            "dispatched"
        );

        TickOutcome::Dispatched { payload, fired }
    }

    /// Label embedded in every outbound frame.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Most recently dispatched payload (empty before the first).
    pub fn last_seen(&self) -> &str {
        self.detector.last_seen()
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.registry.len()
    }

    /// Channel configuration.
    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    /// Borrow the link driver.
    pub fn link(&self) -> &LinkDriver<D> {
        &self.link
    }

    /// Borrow the bound device.
    pub fn device(&self) -> &D {
        self.link.get_ref()
    }
}

impl<D> fmt::Debug for Channel<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("tag", &self.tag)
            .field("link", &self.link)
            .field("last_seen", &self.detector.last_seen())
            .field("handlers", &self.registry.len())
            .finish_non_exhaustive()
    }
}
