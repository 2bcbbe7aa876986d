//! Link selection over the parsed listing page
//!
//! The portal groups payroll file links inside containers whose `id`
//! attribute encodes the reference period: `arquivos-2013-mes-01` holds the
//! files for January 2013, while `arquivos-2011` holds a whole year that
//! predates the monthly breakdown. This module walks one parsed page and
//! collects the anchors belonging to a requested (month, year).

use crate::error::{Error, Result};
use crate::types::PayrollLink;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;

/// Pattern of a period container identifier: `arquivos-YYYY[-mes-MM]`.
#[allow(clippy::expect_used)]
fn container_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^arquivos-(\d{4})(?:-mes-(\d{1,2}))?$").expect("pattern is valid")
    })
}

/// Parse a CSS selector known to be valid at compile time.
#[allow(clippy::expect_used)]
fn static_selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// Find every payroll file link for the given month and year
///
/// Containers are matched on their `id` attribute: the encoded year must
/// equal `year`, and the encoded month, when present, must equal `month`.
/// Anchors are collected in document order, concatenated across all
/// matching containers.
///
/// # Errors
///
/// Returns [`Error::LinksNotFound`] when zero anchors are collected. A
/// missing container and a present-but-empty container are
/// indistinguishable; both produce this error.
pub fn find_payroll_links(doc: &Html, month: u32, year: i32) -> Result<Vec<PayrollLink>> {
    let containers = static_selector("[id^='arquivos-']");
    let anchors = static_selector("a");

    let mut links = Vec::new();
    for container in doc.select(&containers) {
        let Some(id) = container.value().attr("id") else {
            continue;
        };
        let Some((container_year, container_month)) = parse_container_id(id) else {
            continue;
        };
        if container_year != year {
            continue;
        }
        // Year-only containers predate the portal's monthly breakdown and
        // match whatever month was requested.
        if let Some(m) = container_month
            && m != month
        {
            continue;
        }
        for anchor in container.select(&anchors) {
            if let Some(href) = anchor.value().attr("href") {
                links.push(PayrollLink {
                    href: href.to_string(),
                    label: anchor.text().collect::<String>().trim().to_string(),
                });
            }
        }
    }

    if links.is_empty() {
        return Err(Error::LinksNotFound { month, year });
    }
    Ok(links)
}

/// Decode a container identifier into (year, optional month).
///
/// Returns `None` for identifiers that do not follow the
/// `arquivos-YYYY[-mes-MM]` convention.
fn parse_container_id(id: &str) -> Option<(i32, Option<u32>)> {
    let caps = container_id_pattern().captures(id)?;
    let year = caps.get(1)?.as_str().parse().ok()?;
    let month = match caps.get(2) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };
    Some((year, month))
}
