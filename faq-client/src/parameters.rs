/// Identifying values sent to the FAQ service as path segments.
///
/// Values are not validated; callers pass them as the service expects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    module_key: String,
    ps_version: String,
    iso_code: String,
}

impl Parameters {
    pub fn new(
        module_key: impl Into<String>,
        ps_version: impl Into<String>,
        iso_code: impl Into<String>,
    ) -> Self {
        Self {
            module_key: module_key.into(),
            ps_version: ps_version.into(),
            iso_code: iso_code.into(),
        }
    }

    pub fn module_key(&self) -> &str {
        &self.module_key
    }

    pub fn ps_version(&self) -> &str {
        &self.ps_version
    }

    pub fn iso_code(&self) -> &str {
        &self.iso_code
    }

    /// Request path relative to the service base url.
    pub fn faq_uri(&self) -> String {
        format!("{}/{}/{}", self.module_key, self.ps_version, self.iso_code)
    }
}
