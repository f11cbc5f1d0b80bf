use crate::Client;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:5000/");
    assert_eq!(client.base_url, "http://localhost:5000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:5000");
    assert_eq!(client.base_url, "http://localhost:5000");
}
