use navio_core::errors::*;

#[test]
fn embedding_error_dimension_mismatch_carries_values() {
    let err = EmbeddingError::DimensionMismatch {
        expected: 1536,
        actual: 384,
    };
    let msg = err.to_string();
    assert!(msg.contains("1536"));
    assert!(msg.contains("384"));
}

#[test]
fn embedding_error_missing_api_key_carries_env_var() {
    let err = EmbeddingError::MissingApiKey {
        env_var: "OPENAI_API_KEY".into(),
    };
    assert!(err.to_string().contains("OPENAI_API_KEY"));
}

#[test]
fn catalog_error_program_not_found_carries_id() {
    let err = CatalogError::ProgramNotFound {
        program_id: "rice-bioe-2025".into(),
    };
    assert!(err.to_string().contains("rice-bioe-2025"));
}

// --- From impls ---

#[test]
fn embedding_error_converts_to_navio_error() {
    let emb_err = EmbeddingError::ProviderUnreachable {
        reason: "connection refused".into(),
    };
    let navio_err: NavioError = emb_err.into();
    assert!(matches!(navio_err, NavioError::EmbeddingError(_)));
}

#[test]
fn catalog_error_converts_to_navio_error() {
    let cat_err = CatalogError::DimensionMismatch {
        expected: 1536,
        actual: 3,
    };
    let navio_err: NavioError = cat_err.into();
    assert!(matches!(navio_err, NavioError::CatalogError(_)));
}

#[test]
fn navio_error_messages_include_subsystem_prefix() {
    let err: NavioError = EmbeddingError::MalformedResponse {
        reason: "no data field".into(),
    }
    .into();
    let msg = err.to_string();
    assert!(msg.contains("embedding error"));
    assert!(msg.contains("no data field"));
}
