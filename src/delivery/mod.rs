//! Fire-and-forget HTTP delivery to the local event listener.

pub mod client;

pub use client::DeliveryClient;
