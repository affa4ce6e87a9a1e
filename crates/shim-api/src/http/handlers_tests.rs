    use super::*;
    use shim_config::ServiceProfile;
    use serde_json::json;

    fn state(profile: ServiceProfile) -> Arc<AppState> {
        Arc::new(AppState::for_profile(profile).unwrap())
    }

    #[tokio::test]
    async fn test_execute_handler_echoes_inputs() {
        let body = Bytes::from(r#"{"config": {"id": "crew-9"}, "inputs": {"k": "v"}}"#);
        let Json(result) = execute(State(state(ServiceProfile::CREWAI)), body)
            .await
            .unwrap();
        assert_eq!(result.resource_id, "crew-9");
        assert_eq!(result.output.inputs, json!({"k": "v"}));
    }

    #[tokio::test]
    async fn test_execute_handler_bad_config() {
        let body = Bytes::from(r#"{"config": [1, 2]}"#);
        let err = execute(State(state(ServiceProfile::AGNO)), body)
            .await
            .unwrap_err();
        assert!(matches!(err, ShimError::InvalidField { .. }));
    }

    #[tokio::test]
    async fn test_list_handler_keyed_by_collection() {
        let Json(listing) = list_resources(State(state(ServiceProfile::AGNO))).await;
        let value = serde_json::to_value(&listing).unwrap();
        let agents = value["agents"].as_array().unwrap();
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0]["id"], "sample-agent");
        assert_eq!(agents[0]["name"], "Sample Agno Agent");
    }

    #[tokio::test]
    async fn test_create_handler_default_name() {
        let Json(descriptor) = create_resource(State(state(ServiceProfile::CREWAI)), Bytes::new())
            .await
            .unwrap();
        assert_eq!(descriptor.name, "Unnamed Crew");
        assert_eq!(descriptor.config, Some(Default::default()));
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = not_found(Uri::from_static("/nope")).await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_not_found_serialize() {
        let body = NotFoundResponse {
            error: "Not found".to_string(),
            path: "/x".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, json!({"error": "Not found", "path": "/x"}));
    }
