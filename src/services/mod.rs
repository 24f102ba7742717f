//! Concrete service variants supervised by the node.
//!
//! Each variant binds one external binary to the [`Service`](crate::service::Service)
//! contract. Adding a new auxiliary server means adding a new module here;
//! the supervisor and the contract stay untouched.

mod graphql;
mod inspect;

pub use graphql::GraphqlService;
pub use inspect::InspectService;
