//! Common types shared by the aggregates

pub mod aggregate_id;

pub use aggregate_id::AggregateId;
