//! End-to-end analyzer tests over the stub embedding provider and the
//! in-memory vector index.

use std::sync::Arc;

use baitscope_embeddings::{
    EmbeddingProvider, InMemoryVectorIndex, Label, NoopVectorIndex, RetryPolicy, SeedExample,
    StubEmbeddingProvider,
};
use baitscope_engine::{Analyzer, EmbeddingBackend, EngineConfig};

fn engine_config() -> EngineConfig {
    EngineConfig {
        retry: RetryPolicy::immediate(1),
        ..EngineConfig::default()
    }
}

fn seeds() -> Vec<SeedExample> {
    vec![
        SeedExample {
            text: "Act now! Limited time! You won't believe this trick!".into(),
            label: Label::Bait,
        },
        SeedExample {
            text: "Don't miss out, everyone is joining before it's too late!".into(),
            label: Label::Bait,
        },
        SeedExample {
            text: "The quarterly transit report describes three funding options.".into(),
            label: Label::Neutral,
        },
        SeedExample {
            text: "Researchers published the methodology behind the ridership survey.".into(),
            label: Label::Neutral,
        },
    ]
}

const SAMPLE: &str = "You must act now! This is the last chance. Everyone knows they are evil \
                      and we must fight back. The truth is simple: they are always wrong and we \
                      will never give up. Do not miss out!";

#[tokio::test]
async fn centroid_backend_when_no_index() {
    let analyzer = Analyzer::new(engine_config())
        .with_provider_and_seeds(Arc::new(StubEmbeddingProvider::new()), seeds());
    let result = analyzer.analyze(SAMPLE, Some(true)).await;

    assert!(result.meta.used);
    assert!(result.meta.provider_available);
    assert_eq!(result.meta.backend, EmbeddingBackend::Centroid);
    let score = result.engagement_bait_score.expect("centroid score");
    assert!((0.0..=1.0).contains(&score));
}

#[tokio::test]
async fn index_takes_precedence_over_centroid() {
    let provider = Arc::new(StubEmbeddingProvider::new());
    let index = Arc::new(InMemoryVectorIndex::new());
    for seed in seeds() {
        let vector = provider.embed(&seed.text).await.unwrap();
        index.insert(seed.label, vector);
    }

    let analyzer = Analyzer::new(engine_config())
        .with_provider_and_seeds(provider, seeds())
        .with_index(index);
    let result = analyzer.analyze(SAMPLE, Some(true)).await;

    assert_eq!(result.meta.backend, EmbeddingBackend::Index);
    let score = result.engagement_bait_score.expect("index vote");
    assert!((0.0..=1.0).contains(&score));
}

#[tokio::test]
async fn empty_index_falls_back_to_centroid() {
    let analyzer = Analyzer::new(engine_config())
        .with_provider_and_seeds(Arc::new(StubEmbeddingProvider::new()), seeds())
        .with_index(Arc::new(NoopVectorIndex));
    let result = analyzer.analyze(SAMPLE, Some(true)).await;
    assert_eq!(result.meta.backend, EmbeddingBackend::Centroid);
}

#[tokio::test]
async fn unavailable_provider_reports_none_backend() {
    let analyzer = Analyzer::new(engine_config())
        .with_provider_and_seeds(Arc::new(StubEmbeddingProvider::unavailable()), seeds());
    for requested in [None, Some(true), Some(false)] {
        let result = analyzer.analyze(SAMPLE, requested).await;
        assert!(result.engagement_bait_score.is_none());
        assert_eq!(result.meta.backend, EmbeddingBackend::None);
        assert!(!result.meta.used);
    }
}

#[tokio::test]
async fn missing_seed_corpus_never_fails_deterministic_layer() {
    let config = EngineConfig {
        seed_corpus: Some("/nonexistent/seed_examples.json".into()),
        retry: RetryPolicy::immediate(1),
        ..EngineConfig::default()
    };
    let analyzer = Analyzer::new(config).with_provider(Arc::new(StubEmbeddingProvider::new()));
    let result = analyzer.analyze(SAMPLE, Some(true)).await;

    // Embedding layer ran and failed; deterministic scores are intact.
    assert!(result.meta.used);
    assert!(result.engagement_bait_score.is_none());
    assert_eq!(result.meta.backend, EmbeddingBackend::None);
    assert!(result.urgency_pressure.score > 0.0);
}

#[tokio::test]
async fn batch_is_order_preserving_and_independent() {
    let analyzer = Analyzer::new(engine_config())
        .with_provider_and_seeds(Arc::new(StubEmbeddingProvider::new()), seeds());

    let texts: Vec<String> = vec![
        SAMPLE.to_string(),
        "A new policy brief reviewed three implementation options for transit funding."
            .to_string(),
        "spam spam spam spam spam spam spam spam spam spam".to_string(),
    ];

    let alone = analyzer.analyze(&texts[1], Some(true)).await;
    let batch = analyzer.analyze_batch(&texts, Some(true)).await;

    assert_eq!(batch.len(), 3);
    // Item 1 scores identically whether analyzed alone or mid-batch.
    assert_eq!(batch[1], alone);
    // Order is preserved: the repetitive third text has the diversity
    // signature, the first has the urgency signature.
    assert!(batch[2].lexical_diversity.score > batch[1].lexical_diversity.score);
    assert!(batch[0].urgency_pressure.score > batch[1].urgency_pressure.score);
}

#[tokio::test]
async fn response_serializes_with_contract_fields() {
    let analyzer = Analyzer::new(engine_config());
    let result = analyzer.analyze(SAMPLE, None).await;
    let json = serde_json::to_value(&result).unwrap();

    for key in [
        "urgency_pressure",
        "evidence_density",
        "overconfidence",
        "arousal_intensity",
        "ingroup_outgroup",
        "narrative_simplification",
        "claim_volume_vs_depth",
        "lexical_diversity",
    ] {
        assert!(json[key]["score"].is_number(), "missing {key}");
        assert!(json[key]["breakdown"].is_object(), "missing {key} breakdown");
    }
    assert!(json["engagement_bait_score"].is_null());
    assert_eq!(json["meta"]["backend"], "none");
    assert_eq!(json["meta"]["provider_available"], false);
}
