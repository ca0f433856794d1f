// Integration tests for solrq
use serde_json::json;
use solrq::prelude::*;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn hybrid_query() -> CompositeQuery {
    CompositeQuery::new()
        .with_filter("category:Technology")
        .with_text(TextQuery::new("machine learning").with_qf("title^5 content^1"))
        .with_lexical(
            LexicalParams::new()
                .with_mm("75%")
                .with_q_op(QueryOperator::And)
                .with_tie(0.1)
                .unwrap(),
        )
        .with_vector(VectorQuery::new("content_vector", vec![0.1, 0.2, 0.3], 5).unwrap())
        .with_rerank(RerankConfig::new("semantic relevance boost", 50, 0.3).unwrap())
        .with_limit(5)
}

#[test]
fn test_composite_text_query_shape() {
    let query = CompositeQuery::new()
        .with_query("*:*")
        .with_limit(10)
        .with_offset(0)
        .with_text(TextQuery::new("machine learning").with_qf("title^5 content^1"))
        .with_lexical(LexicalParams::new().with_mm("75%"));

    let wire = query.to_value().unwrap();
    assert_eq!(
        wire["queries"]["text_query"]["edismax"],
        json!({"query": "machine learning", "qf": "title^5 content^1", "mm": "75%"})
    );
    assert_eq!(wire["limit"], 10);
    assert_eq!(wire["offset"], 0);
    assert!(wire.get("filter").is_none());
    assert!(wire.get("rerank").is_none());
}

#[test]
fn test_full_hybrid_wire_object() {
    let wire = hybrid_query().to_value().unwrap();
    assert_eq!(
        wire,
        json!({
            "query": "*:*",
            "filter": ["category:Technology"],
            "limit": 5,
            "offset": 0,
            "fields": ["*", "score"],
            "params": {
                "mm": "75%",
                "q.op": "AND",
                "tie": 0.1,
                "defType": "edismax"
            },
            "queries": {
                "text_query": {"edismax": {
                    "query": "machine learning",
                    "qf": "title^5 content^1",
                    "mm": "75%",
                    "q.op": "AND",
                    "tie": 0.1
                }},
                "vector_query": {"knn": {
                    "field": "content_vector",
                    "vector": [0.1, 0.2, 0.3],
                    "topK": 5
                }}
            },
            "rerank": {
                "query": "{!rerank reRankQuery=$rq reRankDocs=50 reRankWeight=0.3}",
                "params": {"rq": "semantic relevance boost"}
            }
        })
    );
}

#[test]
fn test_boundary_validation() {
    assert!(matches!(
        LexicalParams::new().with_tie(1.5),
        Err(QueryError::InvalidTieBreaker(_))
    ));
    assert!(matches!(
        VectorQuery::new("content_vector", vec![0.1], 0),
        Err(QueryError::InvalidTopK(0))
    ));
    assert!(matches!(
        CompositeQuery::new().with_offset(-10).to_value(),
        Err(QueryError::InvalidOffset(-10))
    ));
}

#[test]
fn test_query_document_round_trip_through_struct_form() {
    let query = hybrid_query();
    let document = serde_json::to_string(&query).unwrap();
    let parsed = CompositeQuery::from_json_str(&document).unwrap();
    assert_eq!(parsed, query);
    assert_eq!(parsed.to_value().unwrap(), query.to_value().unwrap());
}

#[tokio::test]
async fn test_search_end_to_end() {
    let mock_server = MockServer::start().await;
    let query = hybrid_query();

    Mock::given(method("POST"))
        .and(path("/solr/vector_collection/query"))
        .and(body_json(query.to_value().unwrap()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseHeader": {"status": 0},
            "response": {
                "numFound": 2,
                "docs": [
                    {"id": "7", "title": "Introduction to Machine Learning", "score": 9.1},
                    {"id": "3", "title": "Deep Learning with Neural Networks", "score": 7.4}
                ]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SolrClient::connect(format!("{}/solr", mock_server.uri()), "vector_collection")
        .unwrap();
    let response = client.search(&query).await.unwrap();

    assert_eq!(response.num_found(), Some(2));
    let titles: Vec<&str> = response
        .docs()
        .iter()
        .filter_map(|d| d["title"].as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Introduction to Machine Learning", "Deep Learning with Neural Networks"]
    );
}

#[tokio::test]
async fn test_server_error_and_timeout_are_distinct() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/solr/failing/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/solr/slow/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let base = format!("{}/solr", mock_server.uri());

    let failing = SolrClient::connect(base.as_str(), "failing").unwrap();
    let err = failing.search(&CompositeQuery::new()).await.unwrap_err();
    assert!(matches!(err, Error::Response { status: 500, .. }));

    let slow = SolrClient::new(
        ClientConfig::new(base.as_str(), "slow").with_timeout(Duration::from_millis(100)),
    )
    .unwrap();
    let err = slow.search(&CompositeQuery::new()).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_client_shared_across_tasks() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/solr/vector_collection/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"numFound": 0, "docs": []}
        })))
        .expect(4)
        .mount(&mock_server)
        .await;

    let client = SolrClient::connect(format!("{}/solr", mock_server.uri()), "vector_collection")
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                let query = CompositeQuery::new().with_offset(i * 10);
                client.search(&query).await
            })
        })
        .collect();

    for handle in handles {
        let response = handle.await.unwrap().unwrap();
        assert_eq!(response.num_found(), Some(0));
    }
}
