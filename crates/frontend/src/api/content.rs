use crate::shared::api_utils::api_url;

/// URL of the source document behind a citation.
///
/// The citation text is passed through untouched so page anchors such as
/// `#page=2` keep working in the viewer.
pub fn get_citation_file_path(citation: &str) -> String {
    api_url(&format!("/content/{}", citation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::api_base;

    #[test]
    fn test_citation_path_keeps_fragment() {
        assert_eq!(
            get_citation_file_path("doc1.pdf#page=2"),
            format!("{}/content/doc1.pdf#page=2", api_base())
        );
    }
}
