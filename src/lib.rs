#![doc = include_str!("../README.md")]

extern crate alloc;

mod dispatch;
mod fetch_client;
mod http_client;
mod mock;
mod outcome;

pub use self::{
    dispatch::{FailureHandler, Fetcher, SuccessHandler, dispatch},
    fetch_client::FetchClient,
    http_client::{BareHttpClient, BareRequest, BareResponse, HttpClientError, ReqwestHttpClient},
    mock::{MockHttpClient, MockRegistry, MockRule},
    outcome::FetchOutcome,
};
