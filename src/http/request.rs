//! Request context handed to the router.
//!
//! # Responsibilities
//! - Carry the method and path of one request explicitly
//! - Apply the form method override (`_method=PUT|DELETE`)
//! - Produce the path used for matching (query string and mount path removed)
//!
//! # Design Decisions
//! - Built by the host from its own request type; the router never reads
//!   ambient server state
//! - Method tokens are kept as given; matching compares them exactly

/// Methods a form override may switch to.
const OVERRIDABLE_METHODS: [&str; 2] = ["PUT", "DELETE"];

/// Method and path of the request being routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    method: String,
    path: String,
    mount_path: Option<String>,
}

impl RequestContext {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            mount_path: None,
        }
    }

    /// Directory the application is served from. Its first occurrence is
    /// removed from the request path before matching; `/` is ignored.
    pub fn with_mount_path(mut self, mount_path: impl Into<String>) -> Self {
        self.mount_path = Some(mount_path.into());
        self
    }

    /// Apply a `_method` form field. Only `PUT` and `DELETE` are honoured,
    /// compared case-insensitively.
    pub fn with_form_method(mut self, form_method: Option<&str>) -> Self {
        if let Some(requested) = form_method.map(str::to_ascii_uppercase) {
            if OVERRIDABLE_METHODS.contains(&requested.as_str()) {
                tracing::trace!(from = %self.method, to = %requested, "Form method override");
                self.method = requested;
            }
        }
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// The raw path as supplied, query string included.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn mount_path(&self) -> Option<&str> {
        self.mount_path.as_deref()
    }

    /// Path used for matching: query string dropped, then the mount path
    /// removed when it is a leading prefix.
    pub fn request_path(&self) -> &str {
        let path = match self.path.find('?') {
            Some(pos) => &self.path[..pos],
            None => self.path.as_str(),
        };

        match self.mount_path.as_deref() {
            Some(mount) if !mount.is_empty() && mount != "/" => {
                path.strip_prefix(mount).unwrap_or(path)
            }
            _ => path,
        }
    }
}
