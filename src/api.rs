use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Asset {
    pub sys: AssetSys,
    #[serde(default)]
    pub fields: AssetFields,
    // metadata and anything else the API attaches travels back to the host untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSys {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AssetFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<AssetFile>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<FileDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FileDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageDimensions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl Asset {
    /// Build a bare asset; mostly useful for tests and fixtures
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: Option<&str>) -> Self {
        Self {
            sys: AssetSys {
                id: id.into(),
                updated_at: None,
                locale: None,
                extra: Default::default(),
            },
            fields: AssetFields {
                title: Some(title.into()),
                description: None,
                file: Some(AssetFile {
                    url: url.map(str::to_string),
                    ..Default::default()
                }),
                extra: Default::default(),
            },
            extra: Default::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.sys.id
    }

    /// Display title, empty when the asset has none in the fetched locale
    pub fn title(&self) -> &str {
        self.fields.title.as_deref().unwrap_or("")
    }

    /// File URL as delivered by the API, or None when it cannot be resolved
    pub fn file_url(&self) -> Option<&str> {
        self.fields
            .file
            .as_ref()
            .and_then(|f| f.url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.fields.file.as_ref().and_then(|f| f.content_type.as_deref())
    }

    pub fn file_name(&self) -> Option<&str> {
        self.fields.file.as_ref().and_then(|f| f.file_name.as_deref())
    }

    pub fn details(&self) -> Option<&FileDetails> {
        self.fields.file.as_ref().and_then(|f| f.details.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Locale {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub default: bool,
}

/// Non-success HTTP response from the Delivery API
#[derive(Debug, Clone, thiserror::Error)]
#[error("API error {status}: {body}")]
pub struct ApiStatusError {
    pub status: u16,
    pub body: String,
}

/// Paginated collection envelope shared by every listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Collection<T> {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Anything that can serve locales and asset pages.
///
/// The fetch service only talks to this trait, so tests can swap the HTTP
/// client for an in-memory source.
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn locales(&self) -> Result<Vec<Locale>>;

    async fn assets(&self, locale: &str, skip: u64, limit: u64) -> Result<Collection<Asset>>;
}

#[derive(Clone)]
pub struct DeliveryClient {
    base_url: String,
    space_id: String,
    environment: String,
    token: String,
    client: Client,
}

impl DeliveryClient {
    pub fn new(base_url: String, space_id: String, environment: String, token: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            space_id,
            environment,
            token,
            client: Client::new(),
        }
    }

    fn environment_url(&self) -> String {
        format!(
            "{}/spaces/{}/environments/{}",
            self.base_url,
            urlencoding::encode(&self.space_id),
            urlencoding::encode(&self.environment)
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        tracing::debug!(url, "GET {}", what);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", what))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiStatusError {
                status: status.as_u16(),
                body: error_text,
            }
            .into());
        }

        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read {} response", what))?;

        serde_json::from_str(&text).with_context(|| format!("Failed to parse {} response", what))
    }

    pub async fn get_locales(&self) -> Result<Vec<Locale>> {
        let url = format!("{}/locales", self.environment_url());
        let collection: Collection<Locale> = self.get_json(&url, "locales").await?;
        Ok(collection.items)
    }

    pub async fn get_assets(&self, locale: &str, skip: u64, limit: u64) -> Result<Collection<Asset>> {
        let url = format!(
            "{}/assets?locale={}&limit={}&skip={}",
            self.environment_url(),
            urlencoding::encode(locale),
            limit,
            skip
        );
        self.get_json(&url, "assets").await
    }
}

#[async_trait]
impl AssetSource for DeliveryClient {
    async fn locales(&self) -> Result<Vec<Locale>> {
        self.get_locales().await
    }

    async fn assets(&self, locale: &str, skip: u64, limit: u64) -> Result<Collection<Asset>> {
        self.get_assets(locale, skip, limit).await
    }
}
