use e2e::test_server::TestServer;

#[tokio::test]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(
        body.contains("Selamat Datang di Arfapro"),
        "Server-rendered hero should greet in Indonesian"
    );
}

#[tokio::test]
async fn test_homepage_exposes_section_anchors() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let body = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage")
        .text()
        .await
        .expect("Failed to read body");

    for anchor in ["#home", "#about", "#services", "#contact"] {
        assert!(
            body.contains(&format!("href=\"{anchor}\"")),
            "Header should link to {anchor}"
        );
    }
    for id in ["about", "services", "contact"] {
        assert!(
            body.contains(&format!("id=\"{id}\"")),
            "Page should render section #{id}"
        );
    }
}
