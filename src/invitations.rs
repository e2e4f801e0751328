//! Invitation links: one personalized URL (and QR code) per guest.

use crate::guests::guest_url;
use crate::i18n::Language;
use qrcode::render::svg;
use qrcode::QrCode;
use serde::Serialize;

pub const CSV_HEADER: &str = "Name,Link";
pub const CSV_FILENAME: &str = "invitation-links.csv";

/// Smallest rendered QR size, in pixels.
const QR_MIN_SIZE: u32 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvitationLink {
    pub name: String,
    pub link: String,
}

/// Names from an operator's text box, one per line.
///
/// Lines are trimmed and blank lines dropped. Order is kept and duplicates are
/// not merged: two lines with the same name produce two links.
pub fn parse_guest_names(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// One absolute invitation link per name in `text`.
///
/// `origin` is scheme + host (+ port), e.g. `https://example.com`.
pub fn generate_links(origin: &str, language: Language, text: &str) -> Vec<InvitationLink> {
    let origin = origin.trim_end_matches('/');
    let base = format!("/{}", language.code());

    parse_guest_names(text)
        .into_iter()
        .map(|name| {
            let link = format!("{}{}", origin, guest_url(&base, &[name.as_str()]));
            InvitationLink { name, link }
        })
        .collect()
}

/// `Name,Link` CSV with every field quoted. Rows are separated by `\n` and
/// there is no trailing newline.
pub fn links_to_csv(links: &[InvitationLink]) -> Result<String, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for item in links {
        writer.serialize(item)?;
    }
    writer.flush()?;
    let rows = String::from_utf8_lossy(writer.get_ref());

    // The header stays unquoted; the writer would quote it like any record.
    match rows.strip_suffix('\n') {
        Some(rows) => Ok(format!("{}\n{}", CSV_HEADER, rows)),
        None => Ok(CSV_HEADER.to_string()),
    }
}

/// Scannable QR code for `link`, as an SVG document.
pub fn qr_svg(link: &str) -> Result<String, qrcode::types::QrError> {
    let code = QrCode::new(link.as_bytes())?;
    Ok(code
        .render::<svg::Color<'_>>()
        .min_dimensions(QR_MIN_SIZE, QR_MIN_SIZE)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guests::guest_names;

    // ==================== Parsing Tests ====================

    #[test]
    fn test_blank_lines_skipped_in_order() {
        let links = generate_links("https://example.com", Language::ENGLISH, "John Smith\n\nJane Doe\n");

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].name, "John Smith");
        assert_eq!(links[1].name, "Jane Doe");
    }

    #[test]
    fn test_lines_are_trimmed_including_crlf() {
        assert_eq!(
            parse_guest_names("  Ana  \r\n\t\r\nMihai\r\n"),
            vec!["Ana".to_string(), "Mihai".to_string()]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(parse_guest_names("Ana\nAna").len(), 2);
    }

    #[test]
    fn test_no_input_no_output() {
        assert!(generate_links("https://example.com", Language::ENGLISH, "").is_empty());
        assert!(generate_links("https://example.com", Language::ENGLISH, " \n \n").is_empty());
    }

    // ==================== Link Tests ====================

    #[test]
    fn test_links_are_absolute_and_localized() {
        let links = generate_links("https://example.com/", Language::ROMANIAN, "Ana Maria");
        assert_eq!(links[0].link, "https://example.com/ro?guests=Ana+Maria");
    }

    #[test]
    fn test_links_decode_back_to_names() {
        let links = generate_links(
            "http://localhost:8080",
            Language::RUSSIAN,
            "Иван & Мария\nO'Neil \"Jr\"",
        );

        for item in &links {
            let query = item.link.split_once('?').map(|(_, q)| q);
            assert_eq!(guest_names(query).as_deref(), Some(item.name.as_str()));
        }
    }

    // ==================== CSV Tests ====================

    #[test]
    fn test_csv_escapes_quotes() {
        let csv = links_to_csv(&[InvitationLink {
            name: "He said \"hi\"".to_string(),
            link: "https://example.com/en?guests=He+said+%22hi%22".to_string(),
        }])
        .unwrap();

        assert_eq!(
            csv,
            "Name,Link\n\"He said \"\"hi\"\"\",\"https://example.com/en?guests=He+said+%22hi%22\""
        );
    }

    #[test]
    fn test_csv_rows_in_order() {
        let links = generate_links("https://example.com", Language::ENGLISH, "A\nB, C");
        let csv = links_to_csv(&links).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "\"A\",\"https://example.com/en?guests=A\"");
        assert_eq!(lines[2], "\"B, C\",\"https://example.com/en?guests=B%2C+C\"");
    }

    #[test]
    fn test_csv_multiline_name_stays_one_record() {
        let csv = links_to_csv(&[InvitationLink {
            name: "Ana\nMihai".to_string(),
            link: "https://example.com/en?guests=Ana%0AMihai".to_string(),
        }])
        .unwrap();

        assert_eq!(
            csv,
            "Name,Link\n\"Ana\nMihai\",\"https://example.com/en?guests=Ana%0AMihai\""
        );
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_csv_empty_is_header_only() {
        assert_eq!(links_to_csv(&[]).unwrap(), "Name,Link");
    }

    // ==================== QR Tests ====================

    #[test]
    fn test_qr_svg_document() {
        let svg = qr_svg("https://example.com/en?guests=Ana").unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#000000"));
    }

    #[test]
    fn test_qr_too_long() {
        let huge = "x".repeat(10_000);
        assert!(qr_svg(&huge).is_err());
    }
}
