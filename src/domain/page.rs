use url::Url;

/// Raw markup of a fetched page. Never mutated after retrieval.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    url: Url,
    markup: String,
}

impl Page {
    pub fn new(url: Url, markup: String) -> Self {
        Page { url, markup }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}
