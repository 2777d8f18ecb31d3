//! Application-level configuration

pub mod resolver_policy;

pub use resolver_policy::ResolverPolicy;
