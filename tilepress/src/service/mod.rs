//! Access to the remote service: article rows through its REST interface and
//! archive uploads through its object storage.
//!
//! Both go through one [`ServiceClient`], built once per run and passed by
//! reference to the steps that need it.

mod client;
mod rest;
mod storage;
mod traits;

pub use client::ServiceClient;
pub use traits::*;
