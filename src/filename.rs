//! Canonical output filename derivation
//!
//! The portal publishes separate files for magistrates ("magistrados") and
//! civil servants ("servidores") from 2013 onwards; earlier years have a
//! single combined file. The category is recovered from the final path
//! segment of the file URL.

use url::Url;

/// Derive the canonical base filename (without extension) for a payroll
/// file URL and reference period
///
/// The final URL path segment is inspected case-insensitively:
/// `magistrados` → `remuneracoes-magistrados-tjpb-MM-YYYY`, `servidores` →
/// `remuneracoes-servidores-tjpb-MM-YYYY`, anything else →
/// `remuneracoes-tjpb-MM-YYYY`. Pure function, no I/O and no error path:
/// an unparseable URL falls through to the uncategorized name.
pub fn base_name(url: &str, month: u32, year: i32) -> String {
    let segment = final_path_segment(url).unwrap_or_default().to_lowercase();
    let category = if segment.contains("magistrados") {
        "magistrados-"
    } else if segment.contains("servidores") {
        "servidores-"
    } else {
        ""
    };
    format!("remuneracoes-{category}tjpb-{month:02}-{year:04}")
}

/// Last non-empty path segment of a URL, if any.
fn final_path_segment(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segment = parsed.path_segments()?.next_back()?;
    (!segment.is_empty()).then(|| segment.to_string())
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncategorized_file_gets_the_plain_name() {
        let name = base_name(
            "https://www.tjpb.jus.br/sites/default/files/anexos/2018/06/anexo_viii_fev_20111.pdf",
            2,
            2011,
        );
        assert_eq!(name, "remuneracoes-tjpb-02-2011");
    }

    #[test]
    fn magistrates_file_is_categorized() {
        let name = base_name(
            "https://www.tjpb.jus.br/sites/default/files/anexos/2018/06/201301_magistrados.pdf",
            1,
            2013,
        );
        assert_eq!(name, "remuneracoes-magistrados-tjpb-01-2013");
    }

    #[test]
    fn servants_file_is_categorized() {
        let name = base_name(
            "https://www.tjpb.jus.br/sites/default/files/anexos/2018/06/201301_servidores.pdf",
            1,
            2013,
        );
        assert_eq!(name, "remuneracoes-servidores-tjpb-01-2013");
    }

    #[test]
    fn category_match_is_case_insensitive() {
        let name = base_name("https://example.com/201301_MAGISTRADOS.PDF", 1, 2013);
        assert_eq!(name, "remuneracoes-magistrados-tjpb-01-2013");
    }

    #[test]
    fn category_only_looks_at_the_final_segment() {
        // "servidores" in an earlier segment must not categorize the file
        let name = base_name("https://example.com/servidores/geral.pdf", 3, 2014);
        assert_eq!(name, "remuneracoes-tjpb-03-2014");
    }

    #[test]
    fn unparseable_url_falls_back_to_the_plain_name() {
        assert_eq!(base_name("not a url", 12, 2020), "remuneracoes-tjpb-12-2020");
        assert_eq!(base_name("https://example.com/", 1, 2013), "remuneracoes-tjpb-01-2013");
    }
}
