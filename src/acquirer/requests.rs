use crate::acquirer::errors::AcquireError;
use crate::config::LOCALE_PLACEHOLDER;
use crate::fetcher::ArticleRequest;
use std::collections::BTreeMap;
use url::Url;

/// Expands the endpoint template for `locale`.
///
/// The locale ends up in a host name, so only ASCII alphanumerics and `-`
/// are accepted.
pub fn api_endpoint(template: &str, locale: &str) -> Result<Url, AcquireError> {
    let valid = !locale.is_empty()
        && locale
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !valid {
        return Err(AcquireError::InvalidLocale(locale.to_string()));
    }

    let url = template.replace(LOCALE_PLACEHOLDER, locale);
    Ok(Url::parse(&url)?)
}

/// Builds one parse-endpoint request per page id.
pub fn parse_requests(
    endpoint: &Url,
    page_ids: impl IntoIterator<Item = u64>,
) -> Vec<ArticleRequest> {
    page_ids
        .into_iter()
        .map(|page_id| {
            let params: BTreeMap<String, String> = [
                ("action", "parse"),
                ("format", "json"),
                ("curtimestamp", "1"),
                ("uselang", "content"),
                ("prop", "text"),
                ("formatversion", "2"),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .chain(std::iter::once(("pageid".to_string(), page_id.to_string())))
            .collect();

            ArticleRequest::new(page_id.to_string(), endpoint.clone(), params)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_endpoint_expands_locale() {
        let url = api_endpoint("https://{lang}.wikipedia.org/w/api.php", "pt").unwrap();
        assert_eq!(url.as_str(), "https://pt.wikipedia.org/w/api.php");

        let url = api_endpoint("http://127.0.0.1:8080/w/api.php", "en").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/w/api.php");
    }

    #[test]
    fn test_api_endpoint_rejects_bad_locale() {
        let template = "https://{lang}.wikipedia.org/w/api.php";
        assert!(matches!(
            api_endpoint(template, ""),
            Err(AcquireError::InvalidLocale(_))
        ));
        assert!(matches!(
            api_endpoint(template, "en.evil.com/"),
            Err(AcquireError::InvalidLocale(_))
        ));
        assert!(api_endpoint(template, "zh-yue").is_ok());
    }

    #[test]
    fn test_parse_requests() {
        let endpoint = Url::parse("https://en.wikipedia.org/w/api.php").unwrap();
        let requests = parse_requests(&endpoint, [12, 7]);

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].document_id(), "12");
        assert_eq!(requests[1].document_id(), "7");

        let params = requests[0].params();
        assert_eq!(params["action"], "parse");
        assert_eq!(params["prop"], "text");
        assert_eq!(params["formatversion"], "2");
        assert_eq!(params["pageid"], "12");
        assert_eq!(params.len(), 7);
        assert_eq!(requests[0].endpoint(), &endpoint);
    }
}
