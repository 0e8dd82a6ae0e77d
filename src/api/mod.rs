pub mod endpoint;
pub mod error;
pub mod rankings;
pub mod sectors;
pub mod sectors_dto;
pub mod transport;
pub mod utils;

pub use endpoint::Endpoint;
pub use error::FetchError;
pub use sectors::SectorsApi;
pub use transport::{RawResponse, ReqwestTransport, Transport};
