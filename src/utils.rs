use crate::types::PodRef;
use std::collections::BTreeMap;

/// Parse a label selector string into a BTreeMap.
pub fn parse_labels(sel_str: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for pair in sel_str.split(',') {
        let pair = pair.trim();
        if let Some((key, value)) = pair.split_once('=') {
            map.insert(key.to_string(), value.to_string());
        }
    }
    map
}

/// Render labels back into `k=v,k2=v2` form.
pub fn format_labels(labels: &BTreeMap<String, String>) -> String {
    labels
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse `pod` or `namespace/pod`.
pub fn parse_pod_ref(s: &str) -> anyhow::Result<PodRef> {
    let parts: Vec<&str> = s.split('/').collect();
    match parts.as_slice() {
        [name] if !name.is_empty() => Ok(PodRef {
            namespace: None,
            name: name.to_string(),
        }),
        [namespace, name] if !namespace.is_empty() && !name.is_empty() => Ok(PodRef {
            namespace: Some(namespace.to_string()),
            name: name.to_string(),
        }),
        _ => anyhow::bail!("Invalid pod reference '{}', expected <pod> or <namespace>/<pod>", s),
    }
}
