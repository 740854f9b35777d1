//! Source file fetching and caching.
//!
//! Two entry points: [Downloader::resolve] is the blocking
//! cache-or-fetch path used during generation, [prefetch] downloads a
//! whole batch of source files concurrently.
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use bytes::Buf;
use futures::stream::StreamExt;
use log::{debug, info};
use reqwest::Url;

#[derive(Debug)]
pub enum Error {
    Reqwest(reqwest::Error),
    Io(std::io::Error),
    MalformedUrl(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Reqwest(err)
    }
}

/// File name a URL is cached under: its last path segment.
pub fn cached_filename(url: &Url) -> Result<String, Error> {
    url.path_segments()
        .and_then(|segments| segments.last())
        .filter(|name| !name.is_empty())
        .map(String::from)
        .ok_or_else(|| Error::MalformedUrl(url.to_string()))
}

/// A single pending download.
pub struct Download<'a> {
    src: Url,
    client: &'a reqwest::Client,
}

impl<'a> Download<'a> {
    pub fn new(src: Url, client: &'a reqwest::Client) -> Self {
        Self { src, client }
    }

    pub async fn save_to(&self, dst: &Path) -> Result<(), Error> {
        let resp = self
            .client
            .get(self.src.clone())
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        let mut file = File::create(dst)?;

        std::io::copy(&mut resp.reader(), &mut file)?;

        Ok(())
    }
}

/// Resolves source URLs to local readable paths,
/// downloading into a cache directory on miss.
pub struct Downloader {
    cache: PathBuf,
    client: reqwest::blocking::Client,
}

impl Downloader {
    pub fn new(cache: &Path) -> Self {
        Self {
            cache: cache.to_path_buf(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Return the local path for `url`, fetching it first if the cache
    /// misses. No retry: errors propagate to the caller unchanged.
    pub fn resolve(&self, url: &Url) -> Result<PathBuf, Error> {
        let path = self.cache.join(cached_filename(url)?);
        if path.exists() {
            debug!("cache hit for {}", url);
            return Ok(path);
        }

        self.download_blocking(url, &path)?;
        Ok(path)
    }

    fn download_blocking(&self, url: &Url, dst: &Path) -> Result<(), Error> {
        // fire blocking request, create out file,
        // load content into buffer and copy buffer into file.
        info!("downloading {}", url);
        let response = self.client.get(url.clone()).send()?.error_for_status()?;
        let mut out = File::create(dst)?;
        let mut buf = BufReader::new(response);
        std::io::copy(&mut buf, &mut out)?;

        Ok(())
    }
}

/// Concurrently fetch `urls` into `dst`, `n_tasks` at a time,
/// skipping files already present. Returns one result per url.
pub async fn prefetch(urls: Vec<Url>, dst: &Path, n_tasks: usize) -> Vec<Result<PathBuf, Error>> {
    let client = reqwest::Client::new();
    let client = &client;

    futures::stream::iter(urls.into_iter().map(|url| async move {
        let path = dst.join(cached_filename(&url)?);
        if path.exists() {
            debug!("cache hit for {}", url);
            return Ok(path);
        }

        info!("downloading {}", url);
        Download::new(url, client).save_to(&path).await?;
        Ok(path)
    }))
    .buffer_unordered(n_tasks)
    .collect()
    .await
}
