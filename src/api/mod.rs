pub mod av;
pub mod av_dto;
pub mod error;
pub mod gate;
pub mod params;
pub mod transport;
pub mod utils;

pub use av::AlphaVantageClient;
pub use error::{ApiError, ErrorKind};
pub use gate::RateGate;
pub use params::{ApiFunction, Interval, OutputSize};
pub use transport::{ReqwestTransport, Transport};
