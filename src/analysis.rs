//! Studies that drive models repeatedly and aggregate their outputs.
//!
//! Analyses return plain data.
//! Text reports and chart series are built from that data afterwards, so the
//! numerical work can be tested without any presentation layer.

pub mod sensitivity;
