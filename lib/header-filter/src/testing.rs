use crate::Host;
use proxy_wasm::types::{Bytes, LogLevel, Status};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct MockState {
    configuration: Option<Bytes>,
    configuration_status: Option<Status>,
    request_headers: Vec<(String, String)>,
    request_headers_status: Option<Status>,
    response_headers: Vec<(String, String)>,
    response_headers_status: Option<Status>,
    add_header_failure: Option<(String, Status)>,
    counters: Vec<(String, i64)>,
    define_status: Option<Status>,
    increment_status: Option<Status>,
    logs: Vec<(LogLevel, String)>,
}

/// In-memory host for a single stream at a time. Clones share state, the way
/// every context of a wasm instance shares the same host.
#[derive(Debug, Default, Clone)]
pub(crate) struct MockHost {
    state: Rc<RefCell<MockState>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_configuration(&self, text: &str) {
        self.state.borrow_mut().configuration = Some(text.as_bytes().to_vec());
    }

    pub fn fail_configuration(&self, status: Status) {
        self.state.borrow_mut().configuration_status = Some(status);
    }

    pub fn set_request_header(&self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .request_headers
            .push((name.to_string(), value.to_string()));
    }

    pub fn fail_request_headers(&self, status: Status) {
        self.state.borrow_mut().request_headers_status = Some(status);
    }

    pub fn fail_response_headers(&self, status: Status) {
        self.state.borrow_mut().response_headers_status = Some(status);
    }

    pub fn fail_add_header(&self, name: &str, status: Status) {
        self.state.borrow_mut().add_header_failure = Some((name.to_string(), status));
    }

    pub fn fail_define_metric(&self, status: Status) {
        self.state.borrow_mut().define_status = Some(status);
    }

    pub fn fail_increment_metric(&self, status: Status) {
        self.state.borrow_mut().increment_status = Some(status);
    }

    /// Starts a new exchange: drops request and response headers.
    pub fn next_stream(&self) {
        let mut state = self.state.borrow_mut();
        state.request_headers.clear();
        state.response_headers.clear();
    }

    pub fn response_headers_added(&self) -> Vec<(String, String)> {
        self.state.borrow().response_headers.clone()
    }

    pub fn counter_value(&self, name: &str) -> Option<i64> {
        self.state
            .borrow()
            .counters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn counters_defined(&self) -> usize {
        self.state.borrow().counters.len()
    }

    pub fn logs_at(&self, level: LogLevel) -> Vec<String> {
        self.state
            .borrow()
            .logs
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    }
}

impl Host for MockHost {
    fn plugin_configuration(&self) -> Result<Option<Bytes>, Status> {
        let state = self.state.borrow();
        match state.configuration_status {
            Some(status) => Err(status),
            None => Ok(state.configuration.clone()),
        }
    }

    fn request_header(&self, name: &str) -> Result<Option<String>, Status> {
        Ok(self
            .request_headers()?
            .into_iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v))
    }

    fn request_headers(&self) -> Result<Vec<(String, String)>, Status> {
        let state = self.state.borrow();
        match state.request_headers_status {
            Some(status) => Err(status),
            None => Ok(state.request_headers.clone()),
        }
    }

    fn response_headers(&self) -> Result<Vec<(String, String)>, Status> {
        let state = self.state.borrow();
        match state.response_headers_status {
            Some(status) => Err(status),
            None => Ok(state.response_headers.clone()),
        }
    }

    fn add_response_header(&self, name: &str, value: &str) -> Result<(), Status> {
        let mut state = self.state.borrow_mut();
        if let Some((failing, status)) = &state.add_header_failure {
            if failing == name {
                return Err(*status);
            }
        }

        state
            .response_headers
            .push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn define_counter(&self, name: &str) -> Result<u32, Status> {
        let mut state = self.state.borrow_mut();
        if let Some(status) = state.define_status {
            return Err(status);
        }

        state.counters.push((name.to_string(), 0));
        Ok(state.counters.len() as u32 - 1)
    }

    fn increment_counter(&self, id: u32, offset: i64) -> Result<(), Status> {
        let mut state = self.state.borrow_mut();
        if let Some(status) = state.increment_status {
            return Err(status);
        }

        match state.counters.get_mut(id as usize) {
            Some((_, value)) => {
                *value += offset;
                Ok(())
            }
            None => Err(Status::NotFound),
        }
    }

    fn log(&self, level: LogLevel, message: &str) {
        self.state
            .borrow_mut()
            .logs
            .push((level, message.to_string()));
    }
}
