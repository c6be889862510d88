use anyhow::{Context, Result};
use aws_sdk_s3::{
    Client,
    error::SdkError,
    operation::list_objects_v2::{ListObjectsV2Error, ListObjectsV2Output},
};
use aws_smithy_async::future::pagination_stream::PaginationStream;

/// One remote object as enumerated from the source bucket. Re-fetched every
/// run, never cached.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ObjectRecord {
    pub key: String,
    pub size: i64,
}

/// Lazy page-by-page enumeration of a bucket's objects, in the provider's
/// native listing order.
pub struct ObjectPages {
    bucket: String,
    page_stream: PaginationStream<Result<ListObjectsV2Output, SdkError<ListObjectsV2Error>>>,
}

impl ObjectPages {
    pub fn new(client: &Client, bucket: &str) -> Self {
        let page_stream = client
            .list_objects_v2()
            .bucket(bucket)
            .into_paginator()
            .send();

        Self {
            bucket: bucket.to_string(),
            page_stream,
        }
    }

    /// Yield the next page of object records.
    ///
    /// Returns `None` when the listing is exhausted. Entries without a key
    /// are dropped; a missing size reads as 0.
    pub async fn next(&mut self) -> Result<Option<Vec<ObjectRecord>>> {
        let Some(page) = self
            .page_stream
            .try_next()
            .await
            .with_context(|| format!("Failed to list objects in bucket [{}]", self.bucket))?
        else {
            return Ok(None);
        };

        let records = page
            .contents()
            .iter()
            .filter_map(|object| {
                Some(ObjectRecord {
                    key: object.key()?.to_string(),
                    size: object.size().unwrap_or(0),
                })
            })
            .collect();

        Ok(Some(records))
    }
}
