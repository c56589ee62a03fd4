//! Cloudflare HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;

use super::{CloudflareProvider, CloudflareResponse};

impl CloudflareProvider {
    /// 执行 GET 请求
    ///
    /// Sends the auth header pair, parses the envelope and checks its success
    /// flag. Returns the result together with `result_info.total_count`.
    pub(crate) async fn get<T>(&self, path: &str) -> Result<(T, Option<u32>)>
    where
        T: DeserializeOwned + Default,
    {
        let url = format!("{}{path}", self.base_url);

        let request = self
            .client
            .get(&url)
            .header("X-Auth-Email", &self.credentials.email)
            .header("X-Auth-Key", &self.credentials.api_key)
            .header("Content-Type", "application/json");

        let (_status, response_text) = HttpUtils::execute_request(request, "GET", &url).await?;

        let cf_response: CloudflareResponse<T> = HttpUtils::parse_json(&response_text)?;

        cf_response.into_result().inspect_err(|e| {
            // The caller reports the failure; keep the log below the default level.
            if e.is_expected() {
                log::debug!("{url}: {e}");
            } else {
                log::info!("{url}: {e}");
            }
        })
    }
}
