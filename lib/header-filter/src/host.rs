use proxy_wasm::hostcalls;
use proxy_wasm::types::{BufferType, Bytes, LogLevel, MapType, MetricType, Status};

/// Host capabilities consumed by the filters.
///
/// Every call is scoped to the context the host is currently dispatching, so
/// header reads and writes apply to the stream whose callback is running.
pub trait Host {
    /// Raw plugin configuration, `None` when the host has none to give.
    fn plugin_configuration(&self) -> Result<Option<Bytes>, Status>;

    fn request_header(&self, name: &str) -> Result<Option<String>, Status>;

    fn request_headers(&self) -> Result<Vec<(String, String)>, Status>;

    fn response_headers(&self) -> Result<Vec<(String, String)>, Status>;

    fn add_response_header(&self, name: &str, value: &str) -> Result<(), Status>;

    fn define_counter(&self, name: &str) -> Result<u32, Status>;

    fn increment_counter(&self, id: u32, offset: i64) -> Result<(), Status>;

    /// Leveled emission straight to the host, for levels the `log` facade
    /// cannot express (critical).
    fn log(&self, level: LogLevel, message: &str);
}

/// The proxy-wasm ABI, as exposed by the SDK hostcalls.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProxyWasmHost;

impl Host for ProxyWasmHost {
    fn plugin_configuration(&self) -> Result<Option<Bytes>, Status> {
        hostcalls::get_buffer(BufferType::PluginConfiguration, 0, usize::MAX)
    }

    fn request_header(&self, name: &str) -> Result<Option<String>, Status> {
        hostcalls::get_map_value(MapType::HttpRequestHeaders, name)
    }

    fn request_headers(&self) -> Result<Vec<(String, String)>, Status> {
        hostcalls::get_map(MapType::HttpRequestHeaders)
    }

    fn response_headers(&self) -> Result<Vec<(String, String)>, Status> {
        hostcalls::get_map(MapType::HttpResponseHeaders)
    }

    fn add_response_header(&self, name: &str, value: &str) -> Result<(), Status> {
        hostcalls::add_map_value(MapType::HttpResponseHeaders, name, value)
    }

    fn define_counter(&self, name: &str) -> Result<u32, Status> {
        hostcalls::define_metric(MetricType::Counter, name)
    }

    fn increment_counter(&self, id: u32, offset: i64) -> Result<(), Status> {
        hostcalls::increment_metric(id, offset)
    }

    fn log(&self, level: LogLevel, message: &str) {
        // nowhere left to report a failing proxy_log
        let _ = hostcalls::log(level, message);
    }
}
