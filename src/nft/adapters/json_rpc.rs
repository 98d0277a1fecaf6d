//! JSON-RPC `eth_call` adapter for the ERC-721 reader port.

use crate::nft::{
    abi,
    domain::{Address, Uint256},
    ports::{ChainError, ChainResult, Erc721Reader},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// ERC-721 reader issuing `eth_call` against the latest block.
#[derive(Debug, Clone)]
pub struct JsonRpcErc721Reader {
    client: reqwest::Client,
    rpc_url: String,
    contract: Address,
}

impl JsonRpcErc721Reader {
    /// Creates a reader for `contract` on the node at `rpc_url`.
    #[must_use]
    pub fn new(client: reqwest::Client, rpc_url: impl Into<String>, contract: Address) -> Self {
        Self {
            client,
            rpc_url: rpc_url.into(),
            contract,
        }
    }

    fn call_request(&self, data: &[u8]) -> RpcRequest<'_> {
        RpcRequest::eth_call(self.contract.as_str(), abi::encode_hex(data))
    }

    async fn call(&self, data: &[u8]) -> ChainResult<Vec<u8>> {
        let request = self.call_request(data);
        let response = self
            .client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(ChainError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChainError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let envelope: RpcResponse = response.json().await.map_err(ChainError::transport)?;
        envelope.into_bytes()
    }
}

#[async_trait]
impl Erc721Reader for JsonRpcErc721Reader {
    async fn balance_of(&self, owner: &Address) -> ChainResult<Uint256> {
        let data = self.call(&abi::encode_balance_of(owner)).await?;
        let balance = abi::decode_uint256(&data)?;
        debug!(owner = %owner, %balance, "read token balance");
        Ok(balance)
    }

    async fn token_of_owner_by_index(
        &self,
        owner: &Address,
        index: Uint256,
    ) -> ChainResult<Uint256> {
        let data = self
            .call(&abi::encode_token_of_owner_by_index(owner, index))
            .await?;
        Ok(abi::decode_uint256(&data)?)
    }

    async fn token_uri(&self, token_id: Uint256) -> ChainResult<String> {
        let data = self.call(&abi::encode_token_uri(token_id)).await?;
        Ok(abi::decode_string(&data)?)
    }
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u32,
    method: &'static str,
    params: (CallObject<'a>, &'static str),
}

impl<'a> RpcRequest<'a> {
    const fn eth_call(to: &'a str, data: String) -> Self {
        Self {
            jsonrpc: "2.0",
            id: 1,
            method: "eth_call",
            params: (CallObject { to, data }, "latest"),
        }
    }
}

#[derive(Debug, Serialize)]
struct CallObject<'a> {
    to: &'a str,
    data: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<String>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

impl RpcResponse {
    fn into_bytes(self) -> ChainResult<Vec<u8>> {
        match (self.result, self.error) {
            (_, Some(error)) => Err(ChainError::Rpc {
                code: error.code,
                message: error.message,
            }),
            (Some(result), None) => Ok(abi::decode_hex(&result)?),
            (None, None) => Err(ChainError::Rpc {
                code: 0,
                message: "response carried neither result nor error".to_owned(),
            }),
        }
    }
}
