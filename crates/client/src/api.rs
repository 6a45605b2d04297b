//! HTTP access to the Bookshelf REST API.
//!
//! Thin request wrappers, one per endpoint. No retries, no timeouts, no
//! caching: each call is a single independent request, and a failure is
//! the caller's problem.

use bookshelf_types::{Book, BookPatch, NewBook};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Client over the remote book API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url().trim_end_matches('/').to_owned(),
        }
    }

    /// `GET /book`: the whole collection.
    pub async fn list_books(&self) -> ClientResult<Vec<Book>> {
        let url = self.url("/book");
        tracing::debug!(%url, "fetching book list");
        self.get_json(&url).await
    }

    /// `GET /book/{id}`: one record.
    pub async fn get_book(&self, id: &str) -> ClientResult<Book> {
        let url = self.url(&format!("/book/{id}"));
        tracing::debug!(%url, "fetching book");
        self.get_json(&url).await
    }

    /// `POST /book`: create a record; the service assigns the id.
    pub async fn create_book(&self, book: &NewBook) -> ClientResult<Book> {
        let url = self.url("/book");
        tracing::debug!(%url, "creating book");
        let res = self
            .http
            .post(url.as_str())
            .json(book)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;
        res.json()
            .await
            .map_err(|source| ClientError::Decode { url, source })
    }

    /// `PUT /book/{id}`: overwrite title and author.
    pub async fn update_book(&self, id: &str, patch: &BookPatch) -> ClientResult<Book> {
        let url = self.url(&format!("/book/{id}"));
        tracing::debug!(%url, "updating book");
        let res = self
            .http
            .put(url.as_str())
            .json(patch)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;
        res.json()
            .await
            .map_err(|source| ClientError::Decode { url, source })
    }

    /// `DELETE /book/{id}`: returns the raw response body text.
    ///
    /// The body is the contract here: exactly `"ok"` means the record is
    /// gone, anything else means it is not. Status codes are not
    /// consulted.
    pub async fn delete_book(&self, id: &str) -> ClientResult<String> {
        let url = self.url(&format!("/book/{id}"));
        tracing::debug!(%url, "deleting book");
        let res = self
            .http
            .delete(url.as_str())
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;
        res.text()
            .await
            .map_err(|source| ClientError::Decode { url, source })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.to_owned(),
                source,
            })?;
        res.json().await.map_err(|source| ClientError::Decode {
            url: url.to_owned(),
            source,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
