use url::Url;

// blank input never reaches the network
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

// checking that the endpoint is an absolute http(s) url
pub fn parse_endpoint(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw.trim()).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme '{other}'")),
    }
}
