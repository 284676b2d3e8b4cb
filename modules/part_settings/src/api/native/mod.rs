//! Native client for in-process calls

pub mod client;

pub use client::NativeClient;
