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

use coach::{HttpLanguageService, LanguageService};
use coach_contracts::{
    AbuseCheckRequest, AutocompleteRequest, CoachError, GuidanceType, QualityCheckRequest,
    RewriteRequest, ServiceConfig,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> HttpLanguageService {
    HttpLanguageService::new(
        ServiceConfig::with_base_url(server.uri()),
        Duration::from_secs(10),
    )
    .expect("client builds")
}

#[tokio::test]
async fn abuse_check_round_trips() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/check-abusive-words"))
        .and(body_json(json!({"text": "you did great"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"abusive": false})))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let response = service
        .check_abuse(AbuseCheckRequest {
            text: "you did great".to_string(),
        })
        .await
        .unwrap();
    assert!(!response.abusive);
}

#[tokio::test]
async fn quality_check_parses_camel_case_breakdown() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/check-quality"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "quality": {
                "beSpecific": {"score": 7.5, "pass": true},
                "highlightImpact": {"score": 3.0, "pass": false},
                "acknowledgeEffort": {"score": 8.0, "pass": true},
                "reinforceConsistency": {"score": 2.0, "pass": false}
            },
            "overallScore": 52.0,
            "guidanceType": "suggestion",
            "guidance": "Try: thanks for driving the migration to the finish."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let response = service
        .check_quality(QualityCheckRequest {
            text: "thanks for driving the migration".to_string(),
        })
        .await
        .unwrap();
    assert!(response.success);
    assert_eq!(response.guidance_type, GuidanceType::Suggestion);
    assert!(response.quality.be_specific.pass);
    assert!(!response.quality.reinforce_consistency.pass);
    assert_eq!(response.overall_score, 52.0);
}

#[tokio::test]
async fn rewrite_sends_failing_criteria_labels() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rewrite-appreciation"))
        .and(body_json(json!({
            "text": "thanks for the help",
            "failingCriteria": ["Be specific", "Highlight impact"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "rewrite": "Thanks for jumping in on the incident and restoring service."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let response = service
        .rewrite(RewriteRequest {
            text: "thanks for the help".to_string(),
            failing_criteria: vec!["Be specific".to_string(), "Highlight impact".to_string()],
        })
        .await
        .unwrap();
    assert!(response.success);
    assert!(response.rewrite.starts_with("Thanks for jumping in"));
}

#[tokio::test]
async fn autocomplete_omits_absent_target_criterion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/autocomplete"))
        .and(body_json(json!({
            "text": "thanks for the help",
            "failingCriteria": ["Be specific"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "completion": "with the quarterly report",
            "corrections": [{"wrong": "teh", "fixed": "the"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let response = service
        .autocomplete(AutocompleteRequest {
            text: "thanks for the help".to_string(),
            failing_criteria: vec!["Be specific".to_string()],
            target_criterion: None,
        })
        .await
        .unwrap();
    assert_eq!(response.completion, "with the quarterly report");
    assert_eq!(response.corrections.len(), 1);
    assert_eq!(response.corrections[0].fixed, "the");
}

#[tokio::test]
async fn autocomplete_sends_target_criterion_when_known() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/autocomplete"))
        .and(body_json(json!({
            "text": "you saved hours",
            "failingCriteria": ["Be specific"],
            "targetCriterion": "Be specific"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "completion": "of rework on the data import"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let response = service
        .autocomplete(AutocompleteRequest {
            text: "you saved hours".to_string(),
            failing_criteria: vec!["Be specific".to_string()],
            target_criterion: Some("Be specific".to_string()),
        })
        .await
        .unwrap();
    assert!(response.success);
}

#[tokio::test]
async fn server_errors_surface_as_service_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/check-abusive-words"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let outcome = service
        .check_abuse(AbuseCheckRequest {
            text: "hello there".to_string(),
        })
        .await;
    assert!(matches!(outcome, Err(CoachError::Service(_))));
}

#[tokio::test]
async fn malformed_payloads_surface_as_serialisation_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/check-abusive-words"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let outcome = service
        .check_abuse(AbuseCheckRequest {
            text: "hello there".to_string(),
        })
        .await;
    assert!(matches!(outcome, Err(CoachError::Serialisation(_))));
}
