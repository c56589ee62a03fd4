//! Cloudflare API 类型定义

use serde::Deserialize;

use crate::error::{ApiErrorDetail, ProviderError, Result};

/// Cloudflare API 通用响应
///
/// A missing `success` counts as failure. Missing or null `errors` is empty.
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<ApiErrorDetail>>,
    #[serde(default)]
    pub result_info: Option<CloudflareResultInfo>,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareResultInfo {
    #[serde(default)]
    pub total_count: Option<u32>,
}

impl<T: Default> CloudflareResponse<T> {
    /// Check the success flag and hand back the result.
    ///
    /// A successful envelope without `result` yields `T::default()`, so an
    /// empty listing is never an error.
    pub fn into_result(self) -> Result<(T, Option<u32>)> {
        if !self.success {
            let errors = self.errors.unwrap_or_default();
            return Err(ProviderError::Api { errors });
        }
        let total_count = self.result_info.and_then(|info| info.total_count);
        Ok((self.result.unwrap_or_default(), total_count))
    }
}

/// Cloudflare Zone 结构
#[derive(Debug, Deserialize)]
pub struct CloudflareZone {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: String,
}

/// Cloudflare DNS Record 结构（响应）
#[derive(Debug, Deserialize)]
pub struct CloudflareDnsRecord {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub ttl: u32,
}
