use reqwest::blocking::Client;
use scraper::Html;
use tracing::debug;

use crate::app::ports::PageFetcher;
use crate::config::Config;
use crate::error::Result;

pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for ReqwestFetcher {
    fn try_fetch(&self, url: &str) -> Result<Html> {
        let resp = self.client.get(url).send()?.error_for_status()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        debug!(url, status, body_len = body.len(), "fetched listing page");
        Ok(Html::parse_document(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use std::time::Duration;

    fn test_fetcher() -> ReqwestFetcher {
        let config = Config {
            timeout: Duration::from_secs(5),
            ..Config::default()
        };
        ReqwestFetcher::new(&config).unwrap()
    }

    /// Answers a single request with `response` and returns the listing URL.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == &b"\r\n\r\n"[..]) {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/events")
    }

    #[test]
    fn test_error_status_is_swallowed() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found",
        );
        let mut out = Vec::new();

        let doc = test_fetcher().fetch(&url, &mut out);

        assert!(doc.is_none());
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.lines().count(), 1);
        assert!(printed.starts_with(&format!("[WARN] Failed to fetch {url}: ")));
        assert!(printed.contains("404"));
    }

    #[test]
    fn test_success_returns_document_silently() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 45\r\nConnection: close\r\n\r\n<html><body><a href=\"/x\">Hi</a></body></html>",
        );
        let mut out = Vec::new();

        let doc = test_fetcher().fetch(&url, &mut out);

        assert!(doc.is_some());
        assert!(out.is_empty());
    }

    #[test]
    fn test_connection_error_is_swallowed() {
        let config = Config {
            timeout: Duration::from_secs(2),
            ..Config::default()
        };
        let fetcher = ReqwestFetcher::new(&config).unwrap();
        let mut out = Vec::new();

        // Nothing listens on port 1 of the loopback interface.
        let doc = fetcher.fetch("http://127.0.0.1:1/events", &mut out);

        assert!(doc.is_none());
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("[WARN] Failed to fetch http://127.0.0.1:1/events: "));
        assert_eq!(printed.lines().count(), 1);
    }
}
