#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
use spacetrail_shared::{PostDocument, PostPage};

use crate::config::ApiConfig;
#[cfg(feature = "mock")]
use crate::models;

/// CMS document type holding blog posts.
#[cfg(not(feature = "mock"))]
const POST_DOCUMENT_TYPE: &str = "posts";

/// Fields requested for listing summaries. The publication date and uid
/// always come along with the document envelope.
#[cfg(not(feature = "mock"))]
const SUMMARY_FIELDS: &str = "posts.title,posts.subtitle,posts.author";

/// Client bound to a validated CMS endpoint. Cheap to clone; pages receive
/// it through a context provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentApi {
    endpoint: String,
}

impl ContentApi {
    /// Bind a client to a validated configuration.
    pub fn new(config: &ApiConfig) -> Self {
        ContentApi {
            endpoint: config.endpoint.clone(),
        }
    }

    /// 获取文章列表（第一页）
    ///
    /// Searches documents of type `posts`, newest first, requesting only the
    /// summary fields. Returns the results plus the opaque next-page cursor.
    pub async fn query_posts(&self, page_size: usize) -> Result<PostPage, String> {
        #[cfg(feature = "mock")]
        {
            return Ok(models::mock_search(page_size));
        }

        #[cfg(not(feature = "mock"))]
        {
            fetch_post_page(&search_url(&self.endpoint, page_size)).await
        }
    }

    /// Follow the literal cursor URL the API returned for the next page.
    /// The cursor is opaque and is not rebuilt through the query builder.
    pub async fn fetch_page(&self, url: &str) -> Result<PostPage, String> {
        #[cfg(feature = "mock")]
        {
            return models::mock_page(url).ok_or_else(|| "Unknown mock cursor".to_string());
        }

        #[cfg(not(feature = "mock"))]
        {
            fetch_post_page(url).await
        }
    }

    /// 获取文章详情
    ///
    /// Fetches one document by slug. A missing slug resolves to `Ok(None)`
    /// so the page can render a not-found view.
    pub async fn get_by_uid(&self, slug: &str) -> Result<Option<PostDocument>, String> {
        #[cfg(feature = "mock")]
        {
            return Ok(models::mock_document(slug));
        }

        #[cfg(not(feature = "mock"))]
        {
            let url = format!(
                "{}/documents/{}/{}",
                self.endpoint,
                POST_DOCUMENT_TYPE,
                urlencoding::encode(slug)
            );

            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| format!("Network error: {:?}", e))?;

            if response.status() == 404 {
                return Ok(None);
            }

            if !response.ok() {
                return Err(format!("HTTP error: {}", response.status()));
            }

            let document: PostDocument = response
                .json()
                .await
                .map_err(|e| format!("Parse error: {:?}", e))?;

            Ok(Some(document))
        }
    }
}

/// Build the document-search URL for the first listing page. Ordering is
/// pinned to the publication date instead of relying on the API default.
#[cfg(not(feature = "mock"))]
fn search_url(endpoint: &str, page_size: usize) -> String {
    let predicate = format!("[[at(document.type,\"{}\")]]", POST_DOCUMENT_TYPE);
    format!(
        "{}/documents/search?q={}&fetch={}&pageSize={}&orderings={}",
        endpoint,
        urlencoding::encode(&predicate),
        urlencoding::encode(SUMMARY_FIELDS),
        page_size,
        urlencoding::encode("[document.first_publication_date desc]"),
    )
}

#[cfg(not(feature = "mock"))]
async fn fetch_post_page(url: &str) -> Result<PostPage, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<PostPage>()
        .await
        .map_err(|e| format!("Parse error: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_targets_the_post_type_with_page_size() {
        let url = search_url("https://cms.example.com/api", 3);
        assert!(url.starts_with("https://cms.example.com/api/documents/search?"));
        assert!(url.contains("pageSize=3"));
        assert!(url.contains(&urlencoding::encode("[[at(document.type,\"posts\")]]").into_owned()));
    }

    #[test]
    fn search_url_requests_summary_fields_and_pins_the_ordering() {
        let url = search_url("https://cms.example.com/api", 3);
        assert!(url.contains(&urlencoding::encode("posts.title,posts.subtitle,posts.author").into_owned()));
        assert!(
            url.contains(&urlencoding::encode("[document.first_publication_date desc]").into_owned())
        );
    }
}
