//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod reqwest_governance_transport;

pub use reqwest_governance_transport::ReqwestGovernanceTransport;
