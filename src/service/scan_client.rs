use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::body::Incoming;
use hyper::{Request, Response, StatusCode, Uri};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use tracing::debug;

use crate::model::{ScanOutcome, ScanRequest, ScanResponse};
use crate::service::ScanError;

pub struct ScanClient {
    scan_url: Uri,
    client: Client<HttpsConnector<HttpConnector>, String>,
}

async fn read_body(response: Response<Incoming>) -> Result<Bytes, hyper::Error> {
    Ok(response.into_body().collect().await?.to_bytes())
}

impl ScanClient {
    pub fn create(scan_url: &str) -> Result<ScanClient, ScanError> {
        let scan_url = scan_url.parse::<Uri>().map_err(|source| ScanError::InvalidUrl {
            url: scan_url.to_string(),
            source,
        })?;
        Ok(ScanClient {
            scan_url,
            client: Client::builder(TokioExecutor::new()).build(HttpsConnector::new()),
        })
    }

    /// Posts one badge scan. Any status other than 200 is a `Failed` outcome,
    /// only transport and decoding problems are errors.
    pub async fn scan(&self, participant_id: u64) -> Result<ScanOutcome, ScanError> {
        let body = ScanRequest::new(participant_id)
            .to_json()
            .map_err(ScanError::Encode)?;
        debug!("POST {} {body}", self.scan_url);
        let request = Request::builder()
            .uri(self.scan_url.clone())
            .method(hyper::Method::POST)
            .header(hyper::header::CONTENT_TYPE, "application/json")
            .body(body)?;

        let response = self.client.request(request).await?;
        let status = response.status();
        let body = read_body(response).await?;
        debug!("scan response {status}: {} bytes", body.len());

        if status == StatusCode::OK {
            let response: ScanResponse = serde_json::from_slice(&body).map_err(ScanError::Decode)?;
            Ok(ScanOutcome::Success(response))
        } else {
            Ok(ScanOutcome::Failed {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            })
        }
    }
}

/// Single best-effort scan against `scan_url`.
pub async fn scan_badge(scan_url: &str, participant_id: u64) -> Result<ScanOutcome, ScanError> {
    ScanClient::create(scan_url)?.scan(participant_id).await
}
