mod cli;
mod kubernetes;

use clap::Parser;
use kubectl_podlog::utils::{parse_labels, parse_pod_ref};
use kubectl_podlog::{Output, PodLogs};
use tokio_util::compat::TokioAsyncWriteCompatExt;
use tracing::{debug, info};

use cli::Cli;
use kubernetes::{client_for_context, resolve_namespace};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the pod's log bytes
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let target = parse_pod_ref(&cli.pod)?;
    let client = client_for_context(cli.context.as_deref()).await?;
    let namespace = resolve_namespace(
        cli.namespace.as_deref(),
        target.namespace.as_deref(),
        &client,
    )?;

    let output: Option<Output<'static>> = if cli.discard {
        None
    } else if let Some(path) = &cli.output {
        let file = tokio::fs::File::create(path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", path.display(), e))?;
        Some(Box::new(file.compat_write()))
    } else {
        Some(Box::new(tokio::io::stdout().compat_write()))
    };

    let mut logs = PodLogs::new(client, namespace.clone(), target.name.clone(), output)
        .follow(cli.follow);
    if let Some(container) = cli.container {
        logs = logs.container(container);
    }
    if let Some(selector) = &cli.selector {
        logs = logs.label_selector(parse_labels(selector));
    }

    debug!(
        "Collecting logs for pod {}/{} (follow: {})",
        namespace, target.name, cli.follow
    );
    tokio::select! {
        result = logs.collect() => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, closing log stream for pod {}/{}", namespace, target.name);
        }
    }

    Ok(())
}
