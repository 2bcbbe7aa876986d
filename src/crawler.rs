//! Fetching, downloading and saving payroll files
//!
//! [`Crawler`] owns the HTTP client and drives the linear sequence: fetch
//! the listing page, select the links for a period, derive each canonical
//! filename and stream the PDF to disk. Every step is also exposed on its
//! own for callers composing the sequence themselves. All calls are
//! awaited strictly in order; there is no concurrency, no retry and no
//! cross-call state.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::filename::base_name;
use crate::page::find_payroll_links;
use futures::StreamExt;
use scraper::Html;
use std::path::PathBuf;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Downloads payroll PDFs from the TJPB transparency portal
pub struct Crawler {
    client: reqwest::Client,
    config: Config,
}

impl Crawler {
    /// Create a new crawler from the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Config {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client, config })
    }

    /// The configuration this crawler was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch a page and parse it into a navigable document tree
    ///
    /// Single GET, single attempt. The returned [`Html`] is a read-only
    /// tree owned by the caller for the duration of one page's processing;
    /// selection over it (see [`find_payroll_links`]) is synchronous.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] on transport failure, a non-2xx status, or
    /// a body that cannot be read as text.
    pub async fn fetch_page(&self, url: &str) -> Result<Html> {
        debug!("fetching listing page {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Error::Fetch {
                url: url.to_string(),
                source: e,
            })?;

        let body = response.text().await.map_err(|e| Error::Fetch {
            url: url.to_string(),
            source: e,
        })?;

        Ok(Html::parse_document(&body))
    }

    /// Stream the body of `url` into `sink`, returning the bytes written
    ///
    /// The body is copied chunk by chunk as it arrives; when an error
    /// occurs mid-stream, bytes already written stay in the sink and
    /// cleanup is the caller's responsibility (see [`Crawler::save`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Download`] on transport failure or a non-2xx
    /// status, and [`Error::Io`] if the sink rejects a write.
    pub async fn download<W>(&self, url: &str, sink: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        debug!("downloading {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Error::Download {
                url: url.to_string(),
                source: e,
            })?;

        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Download {
                url: url.to_string(),
                source: e,
            })?;
            sink.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        sink.flush().await?;

        Ok(written)
    }

    /// Download `url` into `<download_dir>/<base>.pdf`
    ///
    /// The file handle is scoped to this call and closed on every exit
    /// path. If the download fails for any reason the partial file is
    /// removed before the error is returned, leaving no artifact on disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written, or
    /// [`Error::Download`] if the HTTP transfer fails.
    pub async fn save(&self, base: &str, url: &str) -> Result<PathBuf> {
        let path = self.config.download_dir.join(format!("{base}.pdf"));
        let mut file = tokio::fs::File::create(&path).await?;

        match self.download(url, &mut file).await {
            Ok(bytes) => {
                drop(file);
                info!("saved {} ({} bytes)", path.display(), bytes);
                Ok(path)
            }
            Err(err) => {
                drop(file);
                if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                    warn!(
                        "failed to remove partial file {}: {}",
                        path.display(),
                        remove_err
                    );
                }
                Err(err)
            }
        }
    }

    /// Fetch the listing page and save every payroll PDF for the period
    ///
    /// The full sequence for one (month, year): fetch, select, derive each
    /// filename, save each file in document order. Returns the paths of
    /// the saved files. The first failure aborts the remaining downloads;
    /// files saved before it are left in place.
    ///
    /// # Errors
    ///
    /// Any error from [`Crawler::fetch_page`], [`find_payroll_links`] or
    /// [`Crawler::save`] is propagated unchanged.
    pub async fn crawl(&self, month: u32, year: i32) -> Result<Vec<PathBuf>> {
        let links = {
            let doc = self.fetch_page(&self.config.listing_url).await?;
            find_payroll_links(&doc, month, year)?
        };
        info!("found {} link(s) for {:02}-{:04}", links.len(), month, year);

        let mut saved = Vec::with_capacity(links.len());
        for link in &links {
            let base = base_name(&link.href, month, year);
            saved.push(self.save(&base, &link.href).await?);
        }
        Ok(saved)
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LISTING_SAMPLE: &str = r#"<html><body>
<ul id="arquivos-2013-mes-01">
<li><a href="https://www.tjpb.jus.br/files/201301_servidores.pdf">Servidores</a></li>
</ul>
</body></html>"#;

    fn crawler_for(dir: &std::path::Path) -> Crawler {
        Crawler::new(Config {
            download_dir: dir.to_path_buf(),
            ..Config::default()
        })
        .unwrap()
    }

    /// Helper: start a mock server serving `body` with `status` at `route`.
    async fn mock_server_with(route: &str, status: u16, body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn fetch_page_returns_a_selectable_document() {
        let server = mock_server_with("/folha", 200, LISTING_SAMPLE).await;
        let crawler = Crawler::new(Config::default()).unwrap();

        let doc = crawler
            .fetch_page(&format!("{}/folha", server.uri()))
            .await
            .unwrap();
        let links = find_payroll_links(&doc, 1, 2013).unwrap();

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].label, "Servidores");
    }

    #[tokio::test]
    async fn fetch_page_rejects_non_2xx_status() {
        let server = mock_server_with("/folha", 500, "boom").await;
        let crawler = Crawler::new(Config::default()).unwrap();

        let err = crawler
            .fetch_page(&format!("{}/folha", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Fetch { .. }), "got: {err}");
    }

    #[tokio::test]
    async fn download_copies_the_body_into_the_sink() {
        let server = mock_server_with("/file.pdf", 200, "Hello").await;
        let crawler = Crawler::new(Config::default()).unwrap();

        let mut sink = Vec::new();
        let written = crawler
            .download(&format!("{}/file.pdf", server.uri()), &mut sink)
            .await
            .unwrap();

        assert_eq!(sink, b"Hello");
        assert_eq!(written, 5, "byte count must match the body length");
    }

    #[tokio::test]
    async fn download_rejects_non_2xx_without_writing() {
        let server = mock_server_with("/file.pdf", 404, "not here").await;
        let crawler = Crawler::new(Config::default()).unwrap();

        let mut sink = Vec::new();
        let err = crawler
            .download(&format!("{}/file.pdf", server.uri()), &mut sink)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Download { .. }), "got: {err}");
        assert!(sink.is_empty(), "error body must not reach the sink");
    }

    #[tokio::test]
    async fn save_persists_the_file_with_the_downloaded_content() {
        let server = mock_server_with("/file.pdf", 200, "Hello").await;
        let dir = tempfile::tempdir().unwrap();
        let crawler = crawler_for(dir.path());

        let saved = crawler
            .save("remuneracoes-tjpb-02-2011", &format!("{}/file.pdf", server.uri()))
            .await
            .unwrap();

        assert_eq!(saved, dir.path().join("remuneracoes-tjpb-02-2011.pdf"));
        assert_eq!(std::fs::read(&saved).unwrap(), b"Hello");
    }

    #[tokio::test]
    async fn save_removes_the_partial_file_on_failure() {
        let server = mock_server_with("/file.pdf", 404, "").await;
        let dir = tempfile::tempdir().unwrap();
        let crawler = crawler_for(dir.path());

        let err = crawler
            .save("remuneracoes-tjpb-02-2011", &format!("{}/file.pdf", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Download { .. }), "got: {err}");
        assert!(
            !dir.path().join("remuneracoes-tjpb-02-2011.pdf").exists(),
            "no partial file may remain after a failed download"
        );
    }
}
