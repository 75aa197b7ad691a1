/// Configuration for the frontend application

// CMS endpoint - 编译时从环境变量读取
// 生产环境通过 workflow 设置 SPACETRAIL_API_ENDPOINT 环境变量
#[cfg(not(feature = "mock"))]
const API_ENDPOINT: Option<&str> = option_env!("SPACETRAIL_API_ENDPOINT");

/// Validated gateway configuration, checked once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the CMS document API, without a trailing slash.
    pub endpoint: String,
}

impl ApiConfig {
    /// Read the build-time configuration. A missing endpoint is reported
    /// here with a descriptive message instead of surfacing as a broken
    /// request on the first API call.
    pub fn from_env() -> Result<Self, String> {
        #[cfg(feature = "mock")]
        {
            return Ok(ApiConfig {
                endpoint: "mock://cms".to_string(),
            });
        }

        #[cfg(not(feature = "mock"))]
        {
            Self::from_endpoint(API_ENDPOINT)
        }
    }

    fn from_endpoint(endpoint: Option<&str>) -> Result<Self, String> {
        match endpoint {
            Some(url) if !url.trim().is_empty() => Ok(ApiConfig {
                endpoint: url.trim().trim_end_matches('/').to_string(),
            }),
            _ => Err(
                "SPACETRAIL_API_ENDPOINT is not set; rebuild with the CMS document API \
                 endpoint, e.g. `SPACETRAIL_API_ENDPOINT=https://cms.example.com/api trunk build`"
                    .to_string(),
            ),
        }
    }
}
