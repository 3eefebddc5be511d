//! Chat turn exchange with the generative provider.

pub mod responder;
