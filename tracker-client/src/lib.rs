mod api_url;
mod call;
mod client;
mod error;
mod reply;
mod request;

pub use api_url::*;
pub use call::*;
pub use client::*;
pub use error::*;
pub use reply::*;
pub use request::*;
