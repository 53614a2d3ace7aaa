use crate::{FilterError, Host};

pub const HELLO_HEADER_COUNTER: &str = "hello_header_counter";

/// Handle on a counter metric living in the host's metric store.
///
/// Increments are applied by the host, which keeps them atomic across the
/// contexts sharing the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    id: u32,
}

impl Counter {
    pub fn define<H: Host>(host: &H, name: &str) -> Result<Self, FilterError> {
        host.define_counter(name)
            .map(|id| Counter { id })
            .map_err(|status| FilterError::DefineMetric {
                name: name.to_string(),
                status,
            })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn increment<H: Host>(&self, host: &H, offset: i64) -> Result<(), FilterError> {
        host.increment_counter(self.id, offset)
            .map_err(|status| FilterError::IncrementMetric {
                id: self.id,
                status,
            })
    }
}
