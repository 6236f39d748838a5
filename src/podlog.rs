use crate::error::Error;
use crate::utils::format_labels;
use futures::io::{self, AsyncWrite};
use k8s_openapi::api::core::v1::Pod;
use kube::{Client, Resource};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Everything but RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Destination for log bytes copied out of a pod.
pub type Output<'a> = Box<dyn AsyncWrite + Send + Unpin + 'a>;

/// Copies a single pod container's log stream into an output.
///
/// Built once, optionally refined with the chained setters, then consumed by
/// [`PodLogs::collect`]. Without an output every byte is discarded.
pub struct PodLogs<'a> {
    client: Client,
    namespace: String,
    pod_name: String,
    container: String,
    follow: bool,
    label_selector: BTreeMap<String, String>,
    output: Option<Output<'a>>,
}

impl<'a> PodLogs<'a> {
    /// An empty namespace leaves the request without namespace scoping.
    pub fn new(
        client: Client,
        namespace: impl Into<String>,
        pod_name: impl Into<String>,
        output: Option<Output<'a>>,
    ) -> Self {
        Self {
            client,
            namespace: namespace.into(),
            pod_name: pod_name.into(),
            container: String::new(),
            follow: false,
            label_selector: BTreeMap::new(),
            output,
        }
    }

    /// Container to read from. Empty lets the server pick the pod's default.
    pub fn container(mut self, name: impl Into<String>) -> Self {
        self.container = name.into();
        self
    }

    /// Keep the stream open and receive new lines as they are written.
    pub fn follow(mut self, follow: bool) -> Self {
        self.follow = follow;
        self
    }

    /// Stored only. The selector is never sent with the log request.
    pub fn label_selector(mut self, labels: BTreeMap<String, String>) -> Self {
        self.label_selector = labels;
        self
    }

    fn log_path(&self) -> String {
        let namespace = (!self.namespace.is_empty()).then(|| path_segment(&self.namespace));
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.append_pair("follow", &self.follow.to_string());
        if !self.container.is_empty() {
            query.append_pair("container", &self.container);
        }
        format!(
            "{}/{}/log?{}",
            Pod::url_path(&(), namespace.as_deref()),
            path_segment(&self.pod_name),
            query.finish()
        )
    }

    /// Stream the logs into the output until the server ends the stream.
    ///
    /// Returns the first error hit while opening the stream or copying it.
    /// The stream is released before returning on every path.
    pub async fn collect(self) -> Result<(), Error> {
        if !self.label_selector.is_empty() {
            warn!(
                "Label selector {} is not applied to log requests for pod {}",
                format_labels(&self.label_selector),
                self.pod_name
            );
        }

        let path = self.log_path();
        debug!("Opening log stream: GET {}", path);
        let request = http::Request::get(path)
            .body(Vec::new())
            .map_err(kube::Error::HttpError)?;
        let stream = self.client.request_stream(request).await?;

        let mut output: Output<'a> = match self.output {
            Some(output) => output,
            None => Box::new(io::sink()),
        };
        let copied = io::copy_buf(stream, &mut output).await?;
        debug!("Log stream for pod {} ended after {} bytes", self.pod_name, copied);
        Ok(())
    }
}

/// Encode a name so it stays a single path segment, dot segments included.
fn path_segment(name: &str) -> String {
    match name {
        "." | ".." => name.replace('.', "%2E"),
        _ => utf8_percent_encode(name, PATH_SEGMENT).to_string(),
    }
}
