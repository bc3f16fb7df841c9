use axum::http::HeaderMap;
use axum::http::header::ACCEPT;

/// Representation of a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Json,
    Csv,
    Xlsx,
}

const XLSX_MEDIA_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

impl Format {
    /// Pick the representation: an explicit `format` hint wins, then the first recognised
    /// `Accept` media type, then JSON. Unrecognised hints are ignored.
    pub fn negotiate(hint: Option<&str>, headers: &HeaderMap) -> Self {
        if let Some(format) = hint.and_then(Self::from_hint) {
            return format;
        }
        headers
            .get_all(ACCEPT)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .find_map(Self::from_media_range)
            .unwrap_or_default()
    }

    fn from_hint(hint: &str) -> Option<Self> {
        match hint.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "xlsx" | "excel" => Some(Self::Xlsx),
            _ => None,
        }
    }

    /// A range the client marked `q=0` is not acceptable and never matches.
    fn from_media_range(range: &str) -> Option<Self> {
        let mut parts = range.split(';');
        let media_type = parts.next().unwrap_or_default().trim();
        let refused = parts
            .filter_map(|param| param.split_once('='))
            .any(|(name, value)| {
                name.trim().eq_ignore_ascii_case("q")
                    && value.trim().parse::<f32>().is_ok_and(|q| q <= 0.0)
            });
        if refused {
            return None;
        }
        match media_type.to_ascii_lowercase().as_str() {
            "application/json" => Some(Self::Json),
            "text/csv" => Some(Self::Csv),
            XLSX_MEDIA_TYPE | "application/vnd.ms-excel" => Some(Self::Xlsx),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv; charset=utf-8",
            Self::Xlsx => XLSX_MEDIA_TYPE,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn hint_wins_over_accept() {
        assert_eq!(
            Format::negotiate(Some("csv"), &accept("application/json")),
            Format::Csv
        );
        assert_eq!(Format::negotiate(Some("XLSX"), &HeaderMap::new()), Format::Xlsx);
    }

    #[test]
    fn first_recognised_accept_type_is_used() {
        assert_eq!(
            Format::negotiate(None, &accept("text/html, text/csv;q=0.9, application/json")),
            Format::Csv
        );
        assert_eq!(
            Format::negotiate(None, &accept("application/vnd.ms-excel")),
            Format::Xlsx
        );
    }

    #[test]
    fn zero_quality_ranges_are_not_acceptable() {
        assert_eq!(
            Format::negotiate(None, &accept("text/csv;q=0, application/json")),
            Format::Json
        );
        assert_eq!(
            Format::negotiate(None, &accept("text/csv; Q=0.0, application/vnd.ms-excel")),
            Format::Xlsx
        );
        assert_eq!(
            Format::negotiate(None, &accept("text/csv;q=0.5, application/json")),
            Format::Csv
        );
    }

    #[test]
    fn defaults_to_json() {
        assert_eq!(Format::negotiate(None, &HeaderMap::new()), Format::Json);
        assert_eq!(Format::negotiate(None, &accept("*/*")), Format::Json);
        assert_eq!(Format::negotiate(Some("pdf"), &accept("*/*")), Format::Json);
    }
}
