//! Word source module
//!
//! Retrieves the dictionary that feedback is filtered against.

use bytesize::ByteSize;
use reqwest::blocking::Client;
use url::Url;

use crate::encoding::{decode_body, split_lines};
use crate::error::SourceError;

/// Default dictionary: CRLF-terminated, uppercase, one word per line
pub const DEFAULT_SOURCE: &str = "http://www.mieliestronk.com/corncob_caps.txt";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Anything that can produce the ordered word list
pub trait WordSource {
    /// Retrieve the word list, preserving source order
    fn fetch(&self) -> Result<Vec<String>, SourceError>;

    /// Human-readable location, used in status output
    fn describe(&self) -> String;
}

/// Word list served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpWordSource {
    url: Url,
    client: Option<Client>,
}

impl HttpWordSource {
    /// Validate the location. No network access happens here.
    pub fn new(location: &str) -> Result<Self, SourceError> {
        let url = Url::parse(location).map_err(|e| SourceError::bad_source(location, e))?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(SourceError::bad_source(
                    location,
                    format!("unsupported scheme '{}'", other),
                ))
            }
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(SourceError::bad_source(location, "missing host"));
        }

        Ok(Self { url, client: None })
    }

    /// Fetch through a preconfigured client instead of the default one
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    fn client(&self) -> Result<Client, SourceError> {
        match self.client {
            Some(ref client) => Ok(client.clone()),
            None => Ok(Client::builder().user_agent(USER_AGENT).build()?),
        }
    }
}

impl WordSource for HttpWordSource {
    fn fetch(&self) -> Result<Vec<String>, SourceError> {
        log::debug!("GET {}", self.url);

        let response = self
            .client()?
            .get(self.url.clone())
            .send()?
            .error_for_status()?;
        let body = response.bytes()?;
        log::info!("Downloaded {} from {}", ByteSize(body.len() as u64), self.url);

        let text = decode_body(&body)?;
        let words = split_lines(&text);
        log::debug!("Word list contains {} entries", words.len());

        Ok(words)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Fixed in-memory word list
#[derive(Debug, Clone, Default)]
pub struct StaticWordSource {
    words: Vec<String>,
}

impl StaticWordSource {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from newline-delimited text, with the same line handling as a download
    pub fn from_text(text: &str) -> Self {
        Self {
            words: split_lines(text),
        }
    }
}

impl WordSource for StaticWordSource {
    fn fetch(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.words.clone())
    }

    fn describe(&self) -> String {
        format!("{} built-in words", self.words.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Answer a single request on a local port with a canned response
    fn serve_once(response: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = [0u8; 4096];
                let _ = stream.read(&mut request);
                let _ = stream.write_all(&response);
                let _ = stream.flush();
            }
        });

        format!("http://{}/words.txt", addr)
    }

    /// Source for a loopback URL, bypassing any proxy from the environment
    fn local_source(url: &str) -> HttpWordSource {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpWordSource::new(url).unwrap().with_client(client)
    }

    fn http_response(status: &str, body: &[u8]) -> Vec<u8> {
        let mut response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(body);
        response
    }

    #[test]
    fn test_default_source_is_valid() {
        let source = HttpWordSource::new(DEFAULT_SOURCE).unwrap();
        assert_eq!(source.describe(), DEFAULT_SOURCE);
    }

    #[test]
    fn test_fetch_crlf_word_list() {
        let url = serve_once(http_response("200 OK", b"CRANE\r\nSLATE\r\nPLANE\r\n"));
        let words = local_source(&url).fetch().unwrap();
        assert_eq!(words, vec!["CRANE", "SLATE", "PLANE"]);
    }

    #[test]
    fn test_fetch_error_status() {
        let url = serve_once(http_response("404 Not Found", b"missing"));
        let result = local_source(&url).fetch();
        match result {
            Err(SourceError::Fetch(e)) => {
                assert_eq!(e.status(), Some(reqwest::StatusCode::NOT_FOUND))
            }
            other => panic!("Expected Fetch error, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_connection_refused() {
        let result = local_source("http://127.0.0.1:1/words.txt").fetch();
        assert!(matches!(result, Err(SourceError::Fetch(_))));
    }

    #[test]
    fn test_fetch_malformed_body() {
        let url = serve_once(http_response("200 OK", b"CRANE\r\nCAF\xC3\r\n"));
        let result = local_source(&url).fetch();
        assert!(matches!(result, Err(SourceError::Parse(_))));
    }

    #[test]
    fn test_malformed_location() {
        let result = HttpWordSource::new("not a url");
        assert!(matches!(result, Err(SourceError::BadSource { .. })));
    }

    #[test]
    fn test_unsupported_scheme() {
        let result = HttpWordSource::new("ftp://example.com/words.txt");
        match result {
            Err(SourceError::BadSource { reason, .. }) => assert!(reason.contains("ftp")),
            other => panic!("Expected BadSource, got {:?}", other),
        }
    }

    #[test]
    fn test_static_source_from_text() {
        let source = StaticWordSource::from_text("CRANE\r\nSLATE\r\n\r\nPLANE");
        assert_eq!(source.fetch().unwrap(), vec!["CRANE", "SLATE", "PLANE"]);
        assert_eq!(source.describe(), "3 built-in words");
    }
}
