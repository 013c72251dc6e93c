// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use async_trait::async_trait;
use coach_contracts::{
    AbuseCheckRequest, AbuseCheckResponse, AutocompleteRequest, AutocompleteResponse, CoachError,
    CoachResult, QualityCheckRequest, QualityCheckResponse, RewriteRequest, RewriteResponse,
    ServiceConfig,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait LanguageService: Send + Sync {
    async fn check_abuse(&self, request: AbuseCheckRequest) -> CoachResult<AbuseCheckResponse>;

    async fn check_quality(
        &self,
        request: QualityCheckRequest,
    ) -> CoachResult<QualityCheckResponse>;

    async fn rewrite(&self, request: RewriteRequest) -> CoachResult<RewriteResponse>;

    async fn autocomplete(
        &self,
        request: AutocompleteRequest,
    ) -> CoachResult<AutocompleteResponse>;
}

pub struct HttpLanguageService {
    client: Client,
    endpoints: ServiceConfig,
}

impl HttpLanguageService {
    pub fn new(endpoints: ServiceConfig, request_timeout: Duration) -> CoachResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(Duration::from_secs(5))
            .user_agent("AppreciationCoach/1.0")
            .build()
            .map_err(|e| CoachError::Configuration(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, endpoints })
    }

    async fn post_json<Req, Resp>(&self, url: &str, request: &Req) -> CoachResult<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        debug!(url = url, "Dispatching language service call");
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CoachError::Timeout
                } else {
                    CoachError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoachError::Service(format!(
                "{url} returned status {status}"
            )));
        }

        response
            .json::<Resp>()
            .await
            .map_err(|e| CoachError::Serialisation(e.to_string()))
    }
}

#[async_trait]
impl LanguageService for HttpLanguageService {
    async fn check_abuse(&self, request: AbuseCheckRequest) -> CoachResult<AbuseCheckResponse> {
        self.post_json(&self.endpoints.abuse_url(), &request).await
    }

    async fn check_quality(
        &self,
        request: QualityCheckRequest,
    ) -> CoachResult<QualityCheckResponse> {
        self.post_json(&self.endpoints.quality_url(), &request)
            .await
    }

    async fn rewrite(&self, request: RewriteRequest) -> CoachResult<RewriteResponse> {
        self.post_json(&self.endpoints.rewrite_url(), &request)
            .await
    }

    async fn autocomplete(
        &self,
        request: AutocompleteRequest,
    ) -> CoachResult<AutocompleteResponse> {
        self.post_json(&self.endpoints.autocomplete_url(), &request)
            .await
    }
}
