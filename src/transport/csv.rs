use super::tabular::ExportCsv;

/// Render a page as delimited text.
///
/// An empty page renders as an empty body; otherwise the first item's header is written once,
/// followed by one row per item. Every line ends with `\n`.
pub fn encode_csv<T: ExportCsv>(items: &[T], separator: char) -> String {
    let Some(first) = items.first() else {
        return String::new();
    };
    let mut body = first.header(separator);
    body.push('\n');
    for item in items {
        body.push_str(&item.row(separator));
        body.push('\n');
    }
    body
}
