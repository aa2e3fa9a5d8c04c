/// Whether the nav link pointing at `link_path` belongs to the page at
/// `current_path`. Directory paths are served by their `index.html`.
pub fn is_active_link(current_path: &str, link_path: &str) -> bool {
    current_path == link_path
        || (current_path.ends_with('/') && link_path.contains("index.html"))
}

/// Indices of the links to mark with `aria-current="page"`
pub fn active_links<S: AsRef<str>>(current_path: &str, link_paths: &[S]) -> Vec<usize> {
    link_paths
        .iter()
        .enumerate()
        .filter(|(_, link)| is_active_link(current_path, link.as_ref()))
        .map(|(index, _)| index)
        .collect()
}
