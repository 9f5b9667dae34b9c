//! Access credentials issued by the upstream key authority

mod access;
mod broker;

pub use access::AccessCredential;
pub use broker::KeyBroker;

#[cfg(test)]
pub use broker::MockKeyBroker;
