use crate::{Counter, FilterError, HeaderConfig, Host, RootState, StreamState, HELLO_HEADER_COUNTER};
use log::{info, warn};
use proxy_wasm::types::{Action, LogLevel};
use std::rc::Rc;

/// Request header counted by [`HelloHeaders`].
pub const HELLO_HEADER: &str = "hello";

/// Plugin root of the hello-headers filter: owns the header config and the
/// `hello_header_counter` metric shared by every stream it spawns.
pub struct HelloHeadersRoot<H> {
    context_id: u32,
    host: H,
    state: RootState,
    config: Rc<HeaderConfig>,
    counter: Option<Counter>,
}

impl<H: Host + Clone> HelloHeadersRoot<H> {
    pub fn new(context_id: u32, host: H) -> Self {
        HelloHeadersRoot {
            context_id,
            host,
            state: RootState::Created,
            config: Rc::new(HeaderConfig::default()),
            counter: None,
        }
    }

    pub fn context_id(&self) -> u32 {
        self.context_id
    }

    pub fn state(&self) -> RootState {
        self.state
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    pub fn counter(&self) -> Option<Counter> {
        self.counter
    }

    /// Loads the configuration and registers the counter. On failure the
    /// error is reported to the host at critical level and the root is left
    /// unable to spawn streams.
    pub fn start(&mut self) -> Result<(), FilterError> {
        info!("#{} on_configure", self.context_id);

        if let Err(err) = self.load() {
            self.host
                .log(LogLevel::Critical, &format!("#{} {}", self.context_id, err));
            self.state = RootState::Failed;
            return Err(err);
        }

        info!(
            "#{} configured {} additional header(s)",
            self.context_id,
            self.config.len()
        );

        self.state = RootState::Started;
        Ok(())
    }

    fn load(&mut self) -> Result<(), FilterError> {
        let config = HeaderConfig::from_host(&self.host)?;

        if self.counter.is_none() {
            self.counter = Some(Counter::define(&self.host, HELLO_HEADER_COUNTER)?);
        }

        self.config = Rc::new(config);
        Ok(())
    }

    pub fn spawn(&self, context_id: u32) -> Option<HelloHeaders<H>> {
        let counter = match self.counter {
            Some(counter) if self.state.can_spawn() => counter,
            _ => {
                warn!(
                    "#{} not creating context #{}: root is {:?}",
                    self.context_id, context_id, self.state
                );
                return None;
            }
        };

        Some(HelloHeaders {
            context_id,
            host: self.host.clone(),
            config: Rc::clone(&self.config),
            counter,
            state: StreamState::Created,
        })
    }

    pub fn stop(&mut self) {
        info!("#{} on_done", self.context_id);
        self.state = RootState::Stopped;
    }
}

/// Stream context of the hello-headers filter.
pub struct HelloHeaders<H> {
    context_id: u32,
    host: H,
    config: Rc<HeaderConfig>,
    counter: Counter,
    state: StreamState,
}

impl<H: Host> HelloHeaders<H> {
    pub fn context_id(&self) -> u32 {
        self.context_id
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    pub fn config(&self) -> &Rc<HeaderConfig> {
        &self.config
    }

    /// Counts requests carrying a `hello` header. Never pauses.
    pub fn on_request_headers(&mut self, nheaders: usize, _eof: bool) -> Action {
        info!(
            "#{} on_request_headers, {} headers",
            self.context_id, nheaders
        );

        self.state = StreamState::RequestHeadersSeen;

        match self.host.request_header(HELLO_HEADER) {
            Ok(Some(_)) => {}
            Ok(None) => return Action::Continue,
            Err(status) => {
                let err = FilterError::ReadHeader {
                    name: HELLO_HEADER.to_string(),
                    status,
                };
                warn!("#{} {}", self.context_id, err);
                return Action::Continue;
            }
        }

        match self.counter.increment(&self.host, 1) {
            Ok(()) => info!("#{} {} incremented", self.context_id, HELLO_HEADER_COUNTER),
            Err(err) => warn!("#{} {}", self.context_id, err),
        }

        Action::Continue
    }

    /// Adds every configured header; pauses on the first one the host
    /// refuses.
    pub fn on_response_headers(&mut self, nheaders: usize, _eof: bool) -> Action {
        info!(
            "#{} on_response_headers, {} headers",
            self.context_id, nheaders
        );

        self.state = StreamState::ResponseHeadersSeen;

        for (name, value) in self.config.iter() {
            if let Err(status) = self.host.add_response_header(name, value) {
                let err = FilterError::AddHeader {
                    name: name.to_string(),
                    status,
                };
                self.host
                    .log(LogLevel::Critical, &format!("#{} {}", self.context_id, err));
                return Action::Pause;
            }

            info!("#{} header set: {}={}", self.context_id, name, value);
        }

        Action::Continue
    }

    pub fn on_done(&mut self) {
        self.state = StreamState::Done;
        info!("#{} finished", self.context_id);
    }
}
