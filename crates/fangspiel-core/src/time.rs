/// Seconds since the Unix epoch.
///
/// Registry operations take `now` as an explicit argument so tests can run
/// against a simulated clock; only the request handlers call this.
pub fn epoch_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
