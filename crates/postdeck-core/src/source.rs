//! Post collection sources
//!
//! [`PostSource`] is the one place the browser performs I/O. The HTTP source
//! talks to the collection endpoint; the static source serves a fixed
//! result and is used for demos and tests.

use async_trait::async_trait;
use postdeck_types::{Post, PostsDocument};
use reqwest::Client;
use tracing::instrument;

use crate::error::{FetchError, FetchResult};

/// Source of the full post collection
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch the collection document
    async fn fetch(&self) -> FetchResult<PostsDocument>;

    /// Fetch and extract the posts.
    ///
    /// A document without a `posts` field is malformed.
    async fn fetch_posts(&self) -> FetchResult<Vec<Post>> {
        self.fetch().await?.posts.ok_or(FetchError::MissingPosts)
    }
}

/// HTTP source for a fixed collection endpoint
#[derive(Debug, Clone)]
pub struct HttpPostSource {
    client: Client,
    endpoint: String,
}

impl HttpPostSource {
    /// Create a source for `endpoint`
    pub fn new(endpoint: impl Into<String>) -> FetchResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Create a source with a preconfigured client
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self) -> FetchResult<PostsDocument> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let document: PostsDocument = serde_json::from_slice(&bytes)?;
        tracing::debug!(
            bytes = bytes.len(),
            posts = document.posts.as_ref().map(Vec::len),
            "Fetched posts document"
        );
        Ok(document)
    }
}

/// Source that serves a fixed outcome
#[derive(Debug, Clone)]
pub struct StaticPostSource {
    outcome: Result<PostsDocument, String>,
}

impl StaticPostSource {
    /// Serve `posts`
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            outcome: Ok(PostsDocument::new(posts)),
        }
    }

    /// Serve an arbitrary document, including one without `posts`
    pub fn from_document(document: PostsDocument) -> Self {
        Self {
            outcome: Ok(document),
        }
    }

    /// Fail every fetch with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

#[async_trait]
impl PostSource for StaticPostSource {
    async fn fetch(&self) -> FetchResult<PostsDocument> {
        self.outcome.clone().map_err(FetchError::Source)
    }
}
