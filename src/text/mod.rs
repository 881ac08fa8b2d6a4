/// Embedded default word list
pub mod builtin;
/// Word corpus and the provider interface
pub mod corpus;
/// Secret message tokenization
pub mod message;
