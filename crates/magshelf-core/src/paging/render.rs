//! Markup for the two containers. Everything here is a pure function of
//! list state and configuration.

use crate::config::ListConfig;
use crate::magazine::Magazine;

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Date label in `{year}年{month}月` form, month 1-based and unpadded.
///
/// Dates that cannot be parsed fall back to their raw text.
pub fn date_label(magazine: &Magazine) -> String {
    match magazine.year_month() {
        Some((year, month)) => format!("{}年{}月", year, month),
        None => {
            tracing::warn!(
                title = %magazine.title,
                date = %magazine.date,
                "Unparseable magazine date, showing raw value"
            );
            magazine.date.clone()
        }
    }
}

/// One `<li>` entry per magazine on the page
pub fn list_markup(items: &[Magazine], config: &ListConfig) -> String {
    let list_class = escape_html(&config.list_class);
    let date_class = escape_html(&config.date_class);
    let link_class = escape_html(&config.link_class);

    let mut html = String::new();
    for magazine in items {
        html.push_str(&format!(
            concat!(
                "<li class=\"{}\">\n",
                "    <span class=\"{}\">{}</span>\n",
                "    <a href=\"{}\" target=\"_blank\" class=\"{}\">{}</a>\n",
                "</li>\n",
            ),
            list_class,
            date_class,
            escape_html(&date_label(magazine)),
            escape_html(&magazine.href(&config.path_prefix)),
            link_class,
            escape_html(&magazine.title),
        ));
    }
    html
}

/// Pager block: previous button, 1-based page indicator, next button.
///
/// `last_page` is the highest valid page index.
pub fn pagination_markup(current_page: usize, last_page: usize, config: &ListConfig) -> String {
    let prev_disabled = if current_page == 0 { " disabled" } else { "" };
    let next_disabled = if current_page >= last_page { " disabled" } else { "" };

    format!(
        concat!(
            "<div class=\"pagination\">\n",
            "    <button class=\"prev-button {}\"{}>{}</button>\n",
            "    <span class=\"current-page\">{}</span>\n",
            "    <button class=\"next-button {}\"{}>{}</button>\n",
            "</div>\n",
        ),
        escape_html(&config.button_classes.prev),
        prev_disabled,
        escape_html(&config.labels.prev),
        current_page + 1,
        escape_html(&config.button_classes.next),
        next_disabled,
        escape_html(&config.labels.next),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_label() {
        let magazine = Magazine::new("t", "2023-04-15", "p.pdf");
        assert_eq!(date_label(&magazine), "2023年4月");

        let magazine = Magazine::new("t", "2023-12-01", "p.pdf");
        assert_eq!(date_label(&magazine), "2023年12月");
    }

    #[test]
    fn test_date_label_loose_iso_forms() {
        for (raw, label) in [
            ("2023-04-15T10:00", "2023年4月"),
            ("2023-04-15T10:00:00.123", "2023年4月"),
            ("2023", "2023年1月"),
        ] {
            assert_eq!(date_label(&Magazine::new("t", raw, "p.pdf")), label, "{raw}");
        }
    }

    #[test]
    fn test_date_label_fallback() {
        let magazine = Magazine::new("t", "someday", "p.pdf");
        assert_eq!(date_label(&magazine), "someday");
    }

    #[test]
    fn test_list_markup() {
        let config = ListConfig::default();
        let items = vec![
            Magazine::new("Issue 1", "2022-01-10", "issue1.pdf"),
            Magazine::new("Issue 2", "2022-02-10", "issue2.pdf"),
        ];

        let html = list_markup(&items, &config);
        assert_eq!(html.matches("<li class=\"magazine-item\">").count(), 2);
        assert!(html.contains("<span class=\"date\">2022年1月</span>"));
        assert!(html.contains(
            "<a href=\"../images/magazine/issue2.pdf\" target=\"_blank\" class=\"link\">Issue 2</a>"
        ));
    }

    #[test]
    fn test_list_markup_uses_configured_classes() {
        let config = ListConfig {
            list_class: "entry".to_string(),
            link_class: "entry-link".to_string(),
            date_class: "entry-date".to_string(),
            path_prefix: "/files".to_string(),
            ..Default::default()
        };
        let html = list_markup(&[Magazine::new("A", "2020-05-05", "a.pdf")], &config);
        assert!(html.contains("<li class=\"entry\">"));
        assert!(html.contains("class=\"entry-date\""));
        assert!(html.contains("href=\"/files/a.pdf\""));
        assert!(html.contains("class=\"entry-link\""));
    }

    #[test]
    fn test_list_markup_escapes_titles() {
        let config = ListConfig::default();
        let html = list_markup(&[Magazine::new("<b>Tom & \"Jerry\"</b>", "2020-05-05", "a.pdf")], &config);
        assert!(html.contains("&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_list_markup_empty() {
        assert_eq!(list_markup(&[], &ListConfig::default()), "");
    }

    #[test]
    fn test_pagination_first_page() {
        let html = pagination_markup(0, 2, &ListConfig::default());
        assert!(html.contains("<button class=\"prev-button js-prev-button\" disabled>前へ</button>"));
        assert!(html.contains("<span class=\"current-page\">1</span>"));
        assert!(html.contains("<button class=\"next-button js-next-button\">次へ</button>"));
    }

    #[test]
    fn test_pagination_middle_and_last_page() {
        let config = ListConfig::default();

        let middle = pagination_markup(1, 2, &config);
        assert!(!middle.contains("disabled"));
        assert!(middle.contains("<span class=\"current-page\">2</span>"));

        let last = pagination_markup(2, 2, &config);
        assert!(last.contains("<button class=\"prev-button js-prev-button\">"));
        assert!(last.contains("<button class=\"next-button js-next-button\" disabled>"));
    }

    #[test]
    fn test_pagination_single_page_disables_both() {
        let html = pagination_markup(0, 0, &ListConfig::default());
        assert_eq!(html.matches(" disabled>").count(), 2);
    }
}
