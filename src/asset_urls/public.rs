/// Join a public base and a manifest output path.
///
/// Exactly one forward slash separates the two halves, whatever the inputs look like, and
/// backslashes are normalised so Windows-built manifests produce valid URLs.
pub fn public_asset_path(base: &str, file: &str) -> String {
    let base = base.replace('\\', "/");
    let file = file.replace('\\', "/");
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        file.trim_start_matches('/')
    )
}
