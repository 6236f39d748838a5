use kube::config::{self, KubeConfigOptions};
use kube::Client;
use tracing::info;

/// Build a client for `context`, or for the current kubeconfig/in-cluster
/// environment when no context is given.
pub async fn client_for_context(context: Option<&str>) -> anyhow::Result<Client> {
    let config = match context {
        Some(ctx) => config::Config::from_kubeconfig(&KubeConfigOptions {
            context: Some(ctx.to_string()),
            ..Default::default()
        })
        .await
        .map_err(|e| anyhow::anyhow!("Context '{}' not found in kubeconfig: {}", ctx, e))?,
        None => config::Config::infer().await?,
    };
    let config = log_stream_config(config);

    info!(
        "Using cluster {} (default namespace: {})",
        config.cluster_url, config.default_namespace
    );
    let client = Client::try_from(config)?;
    Ok(client)
}

/// A followed container may stay silent for any length of time, so reads
/// on the stream never time out.
pub fn log_stream_config(mut config: config::Config) -> config::Config {
    config.read_timeout = None;
    config
}

/// Pick the namespace from the `-n` flag or the pod reference, never both.
pub fn resolve_namespace(
    flag: Option<&str>,
    from_ref: Option<&str>,
    client: &Client,
) -> anyhow::Result<String> {
    match (flag, from_ref) {
        (Some(flag), Some(from_ref)) => anyhow::bail!(
            "Cannot use both --namespace flag ({}) and namespace in pod reference ({})",
            flag,
            from_ref
        ),
        (Some(ns), None) | (None, Some(ns)) => Ok(ns.to_string()),
        (None, None) => Ok(client.default_namespace().to_string()),
    }
}
