//! Concrete resource declarations built on [`StandardComponent`](crate::StandardComponent)

pub mod bucket;

pub use bucket::{BucketProperties, DataBucket, DataBucketArgs};
