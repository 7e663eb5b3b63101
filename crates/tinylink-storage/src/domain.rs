use url::Url;

/// Returns the host component of `raw`, without scheme, userinfo, port or
/// path, exactly as written in the input.
///
/// Returns an empty string when `raw` is not an absolute URL or has no
/// authority. IPv6 hosts are returned without the surrounding brackets.
pub fn extract_domain(raw: &str) -> String {
    if Url::parse(raw).is_err() {
        return String::new();
    }

    raw_host(raw).unwrap_or_default().to_owned()
}

/// Slices the host out of the authority of `raw` without normalizing it.
fn raw_host(raw: &str) -> Option<&str> {
    let (_, rest) = raw.split_once(':')?;
    let rest = rest.strip_prefix("//")?;

    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);

    if let Some(bracketed) = host_port.strip_prefix('[') {
        return bracketed.split_once(']').map(|(host, _)| host);
    }

    match host_port.rsplit_once(':') {
        Some((host, port)) if port.bytes().all(|b| b.is_ascii_digit()) => Some(host),
        _ => Some(host_port),
    }
}
