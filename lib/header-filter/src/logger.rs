use crate::{FilterError, Host, RootState, StreamState};
use log::{info, warn};
use proxy_wasm::types::Action;

/// Plugin root of the header-logger filter. It takes no configuration.
pub struct HeaderLoggerRoot<H> {
    context_id: u32,
    host: H,
    state: RootState,
}

impl<H: Host + Clone> HeaderLoggerRoot<H> {
    pub fn new(context_id: u32, host: H) -> Self {
        HeaderLoggerRoot {
            context_id,
            host,
            state: RootState::Created,
        }
    }

    pub fn state(&self) -> RootState {
        self.state
    }

    pub fn start(&mut self) {
        info!("#{} on_configure", self.context_id);
        self.state = RootState::Started;
    }

    pub fn spawn(&self, context_id: u32) -> Option<HeaderLogger<H>> {
        if !self.state.can_spawn() {
            warn!(
                "#{} not creating context #{}: root is {:?}",
                self.context_id, context_id, self.state
            );
            return None;
        }

        Some(HeaderLogger {
            context_id,
            host: self.host.clone(),
            state: StreamState::Created,
            logged: 0,
        })
    }

    pub fn stop(&mut self) {
        info!("#{} on_done", self.context_id);
        self.state = RootState::Stopped;
    }
}

/// Stream context logging every request and response header. Always
/// continues.
pub struct HeaderLogger<H> {
    context_id: u32,
    host: H,
    state: StreamState,
    logged: usize,
}

impl<H: Host> HeaderLogger<H> {
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Number of header lines logged so far.
    pub fn logged(&self) -> usize {
        self.logged
    }

    pub fn on_request_headers(&mut self, _nheaders: usize, _eof: bool) -> Action {
        self.state = StreamState::RequestHeadersSeen;

        match self.host.request_headers() {
            Ok(headers) => {
                for (name, value) in headers {
                    info!("#{} request header --> {}: {}", self.context_id, name, value);
                    self.logged += 1;
                }
            }
            Err(status) => warn!(
                "#{} {}",
                self.context_id,
                FilterError::ReadHeaders {
                    map: "request",
                    status
                }
            ),
        }

        Action::Continue
    }

    pub fn on_response_headers(&mut self, _nheaders: usize, _eof: bool) -> Action {
        self.state = StreamState::ResponseHeadersSeen;

        match self.host.response_headers() {
            Ok(headers) => {
                for (name, value) in headers {
                    info!("#{} response header <-- {}: {}", self.context_id, name, value);
                    self.logged += 1;
                }
            }
            Err(status) => warn!(
                "#{} {}",
                self.context_id,
                FilterError::ReadHeaders {
                    map: "response",
                    status
                }
            ),
        }

        Action::Continue
    }

    pub fn on_done(&mut self) {
        self.state = StreamState::Done;
        info!("#{} finished", self.context_id);
    }
}
