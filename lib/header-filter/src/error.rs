use proxy_wasm::types::Status;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("failed to load config: {0:?}")]
    LoadConfig(Status),

    #[error("failed to define metric \"{name}\": {status:?}")]
    DefineMetric { name: String, status: Status },

    #[error("failed to increment metric {id}: {status:?}")]
    IncrementMetric { id: u32, status: Status },

    #[error("failed to read request header \"{name}\": {status:?}")]
    ReadHeader { name: String, status: Status },

    #[error("failed to read {map} headers: {status:?}")]
    ReadHeaders { map: &'static str, status: Status },

    #[error("failed to add header \"{name}\": {status:?}")]
    AddHeader { name: String, status: Status },
}
