//! Search and pagination behavior against a stub server.

use arietta_client::{Error, PackagistClient, PackagistConfig, SearchFilters};
use url::Url;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PackagistClient {
    let base = Url::parse(&server.uri()).expect("mock server URI");
    PackagistClient::with_config(PackagistConfig::with_base(base)).expect("client")
}

fn json(body: impl Into<Vec<u8>>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}

const EMPTY_PAGE: &str = r#"{"results":[],"total":0}"#;

const FINAL_PAGE: &str = r#"{
    "results": [{
        "name": "wp-graphql/wp-graphql-jwt-authentication",
        "description": "JWT authentication for wp-graphql",
        "url": "https://packagist.org/packages/wp-graphql/wp-graphql-jwt-authentication",
        "repository": "https://github.com/wp-graphql/wp-graphql-jwt-authentication",
        "downloads": 900,
        "favers": 14
    }],
    "total": 2
}"#;

fn first_page_with_next(next_url: &str) -> String {
    String::from(
        r#"{"results":[{"name":"wp-graphql/wp-graphql","description":"GraphQL server for WordPress","url":"https://packagist.org/packages/wp-graphql/wp-graphql","repository":"https://github.com/wp-graphql/wp-graphql","downloads":4200,"favers":61}],"total":2,"next":""#,
    ) + next_url
        + r#""}"#
}

#[tokio::test]
async fn search_by_name_follows_the_next_page() {
    let server = MockServer::start().await;
    let next_url = format!("{}/search.json?q=wp-graphql&page=2", server.uri());

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", "wp-graphql"))
        .and(query_param("page", "2"))
        .respond_with(json(FINAL_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", "wp-graphql"))
        .and(query_param_is_missing("page"))
        .respond_with(json(first_page_with_next(&next_url)))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .search_by_name("wp-graphql", None)
        .await
        .unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.results[0].name, "wp-graphql/wp-graphql");
    assert!(page.has_next());

    let second = page.next().expect("continuation handle").fetch().await.unwrap();
    assert_eq!(second.total, 2);
    assert_eq!(
        second.results[0].name,
        "wp-graphql/wp-graphql-jwt-authentication"
    );
    assert!(second.next().is_none());
}

#[tokio::test]
async fn continuation_refetch_issues_a_fresh_request_each_time() {
    let server = MockServer::start().await;
    let next_url = format!("{}/search.json?q=wp-graphql&page=2", server.uri());

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("page", "2"))
        .respond_with(json(FINAL_PAGE))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param_is_missing("page"))
        .respond_with(json(first_page_with_next(&next_url)))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .search_by_name("wp-graphql", None)
        .await
        .unwrap();
    let next = page.next().expect("continuation handle");
    next.fetch().await.unwrap();
    next.fetch().await.unwrap();
}

#[tokio::test]
async fn page_size_is_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", "wp-graphql"))
        .and(query_param("per_page", "10"))
        .respond_with(json(EMPTY_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .search_by_name("wp-graphql", Some(10))
        .await
        .unwrap();
}

#[tokio::test]
async fn single_tag_serializes_flat() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("tags", "graphql"))
        .respond_with(json(EMPTY_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .search_by_tag("graphql", None)
        .await
        .unwrap();
}

#[tokio::test]
async fn multiple_tags_serialize_indexed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("tags[0]", "graphql"))
        .and(query_param("tags[1]", "wp-graphql"))
        .respond_with(json(EMPTY_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .search_by_tag(["graphql", "wp-graphql"], None)
        .await
        .unwrap();
}

#[tokio::test]
async fn combined_filters_are_all_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", "mail"))
        .and(query_param("tags", "wordpress"))
        .and(query_param("type", "wordpress-plugin"))
        .and(query_param("per_page", "10"))
        .respond_with(json(EMPTY_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let filters = SearchFilters::new()
        .name("mail")
        .tags("wordpress")
        .package_type("wordpress-plugin");
    client_for(&server).search(&filters, Some(10)).await.unwrap();
}

#[tokio::test]
async fn by_name_and_combined_issue_the_same_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", "wp-graphql"))
        .respond_with(json(EMPTY_PAGE))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.search_by_name("wp-graphql", None).await.unwrap();
    client
        .search(&SearchFilters::new().name("wp-graphql"), None)
        .await
        .unwrap();
}

#[tokio::test]
async fn malformed_tags_are_rejected_before_any_request() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let result = client.search_by_tag(Vec::<String>::new(), None).await;
    assert!(matches!(result, Err(Error::InvalidArgument(_))));

    let result = client.search_by_tag("   ", None).await;
    assert!(matches!(result, Err(Error::InvalidArgument(_))));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn upstream_failure_surfaces_as_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("search backend down"))
        .mount(&server)
        .await;

    let result = client_for(&server).search_by_name("anything", None).await;
    match result {
        Err(Error::Http { status, body, .. }) => {
            assert_eq!(status, 500);
            assert_eq!(body.as_deref(), Some("search backend down"));
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
}
