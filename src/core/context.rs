use std::collections::HashMap;

/// Connection configuration handed to the HTTP transport: outbound
/// headers plus the target project. Owned by a single caller while it
/// is being configured; the transport only reads it.
#[derive(Debug, Clone, Default)]
pub struct Context {
    headers: HashMap<String, String>,
    project: String,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header, overwriting any previous value for the name.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        if self.headers.insert(name.clone(), value.into()).is_some() {
            tracing::debug!("replaced header {}", name);
        }
        self
    }

    /// Set the `api-key` header used by the platform for key auth.
    pub fn set_api_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.add_header("api-key", key)
    }

    pub fn set_project(&mut self, project: impl Into<String>) -> &mut Self {
        self.project = project.into();
        self
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn project(&self) -> &str {
        &self.project
    }
}
