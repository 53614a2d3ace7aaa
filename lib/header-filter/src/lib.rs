mod config;
mod error;
mod hello;
mod host;
mod lifecycle;
mod logger;
mod metrics;

#[cfg(test)]
mod testing;

pub use crate::config::HeaderConfig;
pub use crate::error::FilterError;
pub use crate::hello::{HelloHeaders, HelloHeadersRoot, HELLO_HEADER};
pub use crate::host::{Host, ProxyWasmHost};
pub use crate::lifecycle::{RootState, StreamState};
pub use crate::logger::{HeaderLogger, HeaderLoggerRoot};
pub use crate::metrics::{Counter, HELLO_HEADER_COUNTER};

use proxy_wasm::types::LogLevel;

/// Reports panics to the host at critical level before the instance traps.
pub fn set_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        ProxyWasmHost.log(LogLevel::Critical, &panic_info.to_string());
    }));
}
