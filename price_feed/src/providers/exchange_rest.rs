pub mod provider;
pub mod response;

pub use provider::ExchangeRestProvider;
