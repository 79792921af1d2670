//! JSON-RPC chain reader — `eth_call` against the market contract.
//!
//! One POST per read. Calldata is built from the contract binding in
//! [`super::abi`]; the hex `result` is decoded back into [`RawMarketInfo`].

use super::abi;
use super::retry::{run_with_retry, RetryPolicy};
use super::{ChainReader, RawMarketInfo};
use crate::error::{ChainError, HttpError, ViewError};
use crate::shared::MarketId;

use alloy_primitives::Address;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

// ─── Wire types ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    params: (CallRequest, &'a str),
}

#[derive(Debug, Serialize)]
struct CallRequest {
    to: String,
    data: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Turns an `eth_call` response into the decoded market tuple.
pub(crate) fn decode_response(
    market_id: &MarketId,
    response: RpcResponse,
) -> Result<RawMarketInfo, ChainError> {
    if let Some(err) = response.error {
        return Err(ChainError::Rpc {
            code: err.code,
            message: err.message,
        });
    }
    let result = response
        .result
        .ok_or_else(|| ChainError::Decode("response has neither result nor error".to_string()))?;

    let hex_body = result.strip_prefix("0x").unwrap_or(&result);
    if hex_body.is_empty() {
        return Err(ChainError::MarketNotFound(market_id.to_string()));
    }
    let bytes = hex::decode(hex_body).map_err(|e| ChainError::Decode(e.to_string()))?;
    abi::decode_market_info(&bytes)
}

/// `Retry-After` in milliseconds. Only the delay-seconds form is honored.
fn retry_after_ms(headers: &HeaderMap) -> Option<u64> {
    let seconds: u64 = headers.get(RETRY_AFTER)?.to_str().ok()?.trim().parse().ok()?;
    seconds.checked_mul(1000)
}

// ─── Reader ──────────────────────────────────────────────────────────────────

/// Reads market records through a JSON-RPC endpoint.
#[derive(Clone)]
pub struct RpcChainReader {
    rpc_url: String,
    contract: Address,
    client: Client,
    retry: RetryPolicy,
    next_id: Arc<AtomicU64>,
}

impl RpcChainReader {
    pub fn builder(contract: Address) -> RpcChainReaderBuilder {
        RpcChainReaderBuilder::new(contract)
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    pub fn contract(&self) -> Address {
        self.contract
    }

    async fn call_with_retry(&self, market_id: &MarketId) -> Result<RpcResponse, HttpError> {
        run_with_retry(&self.retry, &self.rpc_url, move || self.do_call(market_id)).await
    }

    async fn do_call(&self, market_id: &MarketId) -> Result<RpcResponse, HttpError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method: "eth_call",
            params: (
                CallRequest {
                    to: self.contract.to_string(),
                    data: format!("0x{}", hex::encode(abi::encode_get_market_info(market_id))),
                },
                "latest",
            ),
        };

        let resp = self.client.post(&self.rpc_url).json(&request).send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json::<RpcResponse>().await?);
        }

        let status_code = status.as_u16();
        let retry_after = retry_after_ms(resp.headers());
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            429 => Err(HttpError::RateLimited {
                retry_after_ms: retry_after,
            }),
            408 => Err(HttpError::Timeout),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

#[async_trait]
impl ChainReader for RpcChainReader {
    async fn get_market_info(&self, market_id: &MarketId) -> Result<RawMarketInfo, ChainError> {
        let response = self.call_with_retry(market_id).await?;
        decode_response(market_id, response)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct RpcChainReaderBuilder {
    rpc_url: String,
    contract: Address,
    retry: RetryPolicy,
    request_timeout: Option<Duration>,
}

impl RpcChainReaderBuilder {
    pub fn new(contract: Address) -> Self {
        Self {
            rpc_url: crate::network::DEFAULT_RPC_URL.to_string(),
            contract,
            retry: RetryPolicy::default(),
            request_timeout: Some(Duration::from_secs(30)),
        }
    }

    pub fn rpc_url(mut self, url: &str) -> Self {
        self.rpc_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Per-request transport timeout (native only). `None` waits indefinitely.
    pub fn request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<RpcChainReader, ViewError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(timeout) = self.request_timeout {
                builder = builder.timeout(timeout);
            }
            builder = builder.pool_max_idle_per_host(4);
        }
        let client = builder
            .build()
            .map_err(|e| ViewError::Chain(ChainError::Http(HttpError::Reqwest(e))))?;

        Ok(RpcChainReader {
            rpc_url: self.rpc_url,
            contract: self.contract,
            client,
            retry: self.retry,
            next_id: Arc::new(AtomicU64::new(1)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::retry::RetryConfig;
    use alloy_primitives::U256;
    use alloy_sol_types::SolValue;

    fn encoded_info_hex() -> String {
        let info: RawMarketInfo = (
            "Will it rain in Paris tomorrow?".to_string(),
            String::new(),
            U256::from(1_700_000_000u64),
            true,
            true,
            U256::from(1u64),
            U256::from(2u64),
            U256::from(3u64),
            U256::from(4u64),
            Address::repeat_byte(0xaa),
            Address::repeat_byte(0xbb),
            Address::repeat_byte(0xcc),
        );
        format!("0x{}", hex::encode(info.abi_encode_params()))
    }

    #[test]
    fn test_decode_result_response() {
        let json = format!(r#"{{"jsonrpc":"2.0","id":1,"result":"{}"}}"#, encoded_info_hex());
        let response: RpcResponse = serde_json::from_str(&json).unwrap();
        let info = decode_response(&MarketId::new(1), response).unwrap();
        assert_eq!(info.0, "Will it rain in Paris tomorrow?");
        assert!(info.3);
        assert_eq!(info.8, U256::from(4u64));
        assert_eq!(info.11, Address::repeat_byte(0xcc));
    }

    #[test]
    fn test_decode_error_response() {
        let json = r#"{"jsonrpc":"2.0","id":1,"error":{"code":3,"message":"execution reverted"}}"#;
        let response: RpcResponse = serde_json::from_str(json).unwrap();
        let err = decode_response(&MarketId::new(1), response).unwrap_err();
        match err {
            ChainError::Rpc { code, message } => {
                assert_eq!(code, 3);
                assert_eq!(message, "execution reverted");
            }
            other => panic!("expected Rpc error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_empty_result_is_not_found() {
        let json = r#"{"jsonrpc":"2.0","id":1,"result":"0x"}"#;
        let response: RpcResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            decode_response(&MarketId::new(9), response),
            Err(ChainError::MarketNotFound(id)) if id == "9"
        ));
    }

    #[test]
    fn test_decode_bad_hex() {
        let json = r#"{"jsonrpc":"2.0","id":1,"result":"0xzz"}"#;
        let response: RpcResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            decode_response(&MarketId::new(1), response),
            Err(ChainError::Decode(_))
        ));
    }

    #[test]
    fn test_request_shape() {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 5,
            method: "eth_call",
            params: (
                CallRequest {
                    to: "0xabc".to_string(),
                    data: "0x1234".to_string(),
                },
                "latest",
            ),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["method"], "eth_call");
        assert_eq!(value["params"][0]["to"], "0xabc");
        assert_eq!(value["params"][1], "latest");
    }

    /// Serves one canned HTTP response per connection, in order.
    async fn serve(responses: Vec<(u16, String)>) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut request = Vec::new();
                let mut buf = [0u8; 4096];
                loop {
                    let n = socket.read(&mut buf).await.unwrap();
                    request.extend_from_slice(&buf[..n]);
                    let text = String::from_utf8_lossy(&request);
                    if let Some(end) = text.find("\r\n\r\n") {
                        let length = text[..end]
                            .lines()
                            .find_map(|l| {
                                let (name, value) = l.split_once(':')?;
                                name.eq_ignore_ascii_case("content-length")
                                    .then(|| value.trim().parse::<usize>().ok())
                                    .flatten()
                            })
                            .unwrap_or(0);
                        if request.len() >= end + 4 + length {
                            break;
                        }
                    }
                    if n == 0 {
                        break;
                    }
                }
                let response = format!(
                    "HTTP/1.1 {status} X\r\n\
                     Content-Type: application/json\r\n\
                     Retry-After: 0\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
            }
        });
        url
    }

    fn fast_retry() -> RetryPolicy {
        RetryPolicy::Custom(RetryConfig {
            max_retries: 2,
            initial_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(5),
            jitter: false,
            ..RetryConfig::default()
        })
    }

    #[tokio::test]
    async fn test_reader_retries_then_decodes() {
        let ok = format!(r#"{{"jsonrpc":"2.0","id":2,"result":"{}"}}"#, encoded_info_hex());
        let url = serve(vec![(503, "busy".to_string()), (200, ok)]).await;
        let reader = RpcChainReader::builder(Address::repeat_byte(0x01))
            .rpc_url(&url)
            .retry(fast_retry())
            .build()
            .unwrap();

        let info = reader.get_market_info(&MarketId::new(1)).await.unwrap();
        assert_eq!(info.0, "Will it rain in Paris tomorrow?");
    }

    #[tokio::test]
    async fn test_reader_without_retry_surfaces_first_failure() {
        let url = serve(vec![(429, String::new())]).await;
        let reader = RpcChainReader::builder(Address::repeat_byte(0x01))
            .rpc_url(&url)
            .retry(RetryPolicy::None)
            .build()
            .unwrap();

        let err = reader.get_market_info(&MarketId::new(1)).await.unwrap_err();
        assert!(
            matches!(
                err,
                ChainError::Http(HttpError::RateLimited {
                    retry_after_ms: Some(0)
                })
            ),
            "{err:?}"
        );
    }

    #[test]
    fn test_retry_after_seconds() {
        let mut headers = HeaderMap::new();
        assert_eq!(retry_after_ms(&headers), None);

        headers.insert(RETRY_AFTER, "2".parse().unwrap());
        assert_eq!(retry_after_ms(&headers), Some(2000));

        headers.insert(RETRY_AFTER, "Wed, 21 Oct 2015 07:28:00 GMT".parse().unwrap());
        assert_eq!(retry_after_ms(&headers), None);
    }

    #[test]
    fn test_builder_defaults() {
        let reader = RpcChainReader::builder(Address::repeat_byte(0x01))
            .rpc_url("http://localhost:8545/")
            .build()
            .unwrap();
        assert_eq!(reader.rpc_url(), "http://localhost:8545");
        assert_eq!(reader.contract(), Address::repeat_byte(0x01));
    }
}
