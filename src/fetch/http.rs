//! reqwest based transport
//!
//! TLS material, redirect policy and the per-request timeout are fixed when
//! the client is built, so unreadable certificate files fail before the
//! first request.

use std::fs;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::{Certificate, Client, Identity, Method};
use tracing::debug;

use super::{FetchError, FetchedResponse, Transport};
use crate::config::{Config, Headers, Target, TlsOptions};
use crate::error::{Error, Result};

/// Content type set on POST requests before configured headers are applied
const POST_CONTENT_TYPE: &str = "x-www-form-urlencoded";

/// Client for fetching target URLs over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    method: Method,
    headers: HeaderMap,
    timeout: Duration,
}

impl HttpTransport {
    /// Builds the HTTP client described by `config`
    ///
    /// # Returns
    /// * `Err(Error::CaCert)` if the CA bundle cannot be read or parsed
    /// * `Err(Error::ClientIdentity)` if the client cert/key cannot be read or parsed
    /// * `Err(Error::InvalidHeader)` if a configured header is not valid HTTP
    pub fn from_config(config: &Config) -> Result<Self> {
        let redirect = if config.request.follow_redirects {
            Policy::default()
        } else {
            Policy::none()
        };

        let builder = Client::builder()
            .redirect(redirect)
            .timeout(config.request.timeout)
            .danger_accept_invalid_certs(config.tls.insecure);
        let client = apply_tls(builder, &config.tls)?.build()?;

        Ok(Self {
            client,
            method: config.request.method.clone(),
            headers: header_map(&config.request.headers)?,
            timeout: config.request.timeout,
        })
    }

    fn request_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if self.method == Method::POST {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(POST_CONTENT_TYPE));
        }
        for (name, value) in &self.headers {
            debug!(header = %name, value = ?value, "request header");
            headers.insert(name.clone(), value.clone());
        }
        headers
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, target: &Target, body: Option<Vec<u8>>) -> std::result::Result<FetchedResponse, FetchError> {
        let mut request = self
            .client
            .request(self.method.clone(), target.url.clone())
            .headers(self.request_headers());
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout)
            } else {
                FetchError::Request(e.to_string())
            }
        })?;

        let status_line = format!("{:?} {}", response.version(), response.status());
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout)
            } else {
                FetchError::Body(e.to_string())
            }
        })?;

        Ok(FetchedResponse {
            status_line,
            headers,
            body: body.to_vec(),
        })
    }
}

fn apply_tls(mut builder: reqwest::ClientBuilder, tls: &TlsOptions) -> Result<reqwest::ClientBuilder> {
    if let Some(path) = &tls.ca_cert {
        let pem = fs::read(path).map_err(|e| Error::CaCert {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let certs = Certificate::from_pem_bundle(&pem).map_err(|e| Error::CaCert {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        for cert in certs {
            builder = builder.add_root_certificate(cert);
        }
    }

    if let Some((cert, key)) = &tls.client_cert {
        let identity_error = |reason: String| Error::ClientIdentity {
            cert: cert.clone(),
            key: key.clone(),
            reason,
        };
        let mut pem = fs::read(cert).map_err(|e| identity_error(e.to_string()))?;
        if key != cert {
            pem.push(b'\n');
            pem.extend(fs::read(key).map_err(|e| identity_error(e.to_string()))?);
        }
        let identity = Identity::from_pem(&pem).map_err(|e| identity_error(e.to_string()))?;
        builder = builder.identity(identity);
    }

    Ok(builder)
}

fn header_map(headers: &Headers) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|_| Error::InvalidHeader(key.clone()))?;
        let value = HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader(key.clone()))?;
        map.insert(name, value);
    }
    Ok(map)
}
