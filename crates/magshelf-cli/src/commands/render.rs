use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use magshelf_core::{magazine::load_magazines, AppConfig, MemoryDocument, PagedList};

/// Which page the snapshot shows
#[derive(Debug, Clone, Copy)]
pub enum PageTarget {
    First,
    /// 1-based page number
    Number(usize),
    Last,
}

pub struct RenderOptions<'a> {
    pub items_path: &'a Path,
    pub target: PageTarget,
    /// Output file, or "-" for stdout
    pub out: &'a str,
    pub title: Option<String>,
    pub open_browser: bool,
}

pub fn run(config: &AppConfig, options: RenderOptions<'_>) -> Result<()> {
    let magazines = load_magazines(options.items_path)
        .with_context(|| format!("loading {}", options.items_path.display()))?;

    let html = render_page(config, magazines, options.target, options.title)?;

    if options.out == "-" {
        io::stdout().write_all(html.as_bytes())?;
        return Ok(());
    }

    let out_path = PathBuf::from(options.out);
    std::fs::write(&out_path, html)
        .with_context(|| format!("writing {}", out_path.display()))?;
    println!("Wrote {}", out_path.display());

    if options.open_browser {
        if let Err(e) = open::that(&out_path) {
            println!("Warning: failed to open browser: {}", e);
        }
    }

    Ok(())
}

/// Build the page shell, attach a paged list to it and move to `target`
pub fn render_page(
    config: &AppConfig,
    magazines: Vec<magshelf_core::Magazine>,
    target: PageTarget,
    title: Option<String>,
) -> Result<String> {
    let document = MemoryDocument::new()
        .with_container("ul", &config.list.list_id)
        .with_container("div", &config.list.pagination_id);

    let mut list = PagedList::new(magazines, config.list.clone(), document)?;
    list.attach();

    match target {
        PageTarget::First => {}
        PageTarget::Number(page) => {
            list.go_to(page.saturating_sub(1));
        }
        PageTarget::Last => {
            let last = list.last_page_index();
            list.go_to(last);
        }
    }

    tracing::info!(
        page = list.current_page() + 1,
        pages = list.page_count(),
        "Rendered magazine list"
    );

    let mut shell = config.page.clone();
    if let Some(title) = title {
        shell.title = title;
    }

    Ok(list.document().to_html(&shell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use magshelf_core::Magazine;

    fn magazines(count: usize) -> Vec<Magazine> {
        (0..count)
            .map(|i| Magazine::new(format!("No.{}", i + 1), "2024-03-01", format!("{}.pdf", i + 1)))
            .collect()
    }

    #[test]
    fn test_render_first_page() {
        let html = render_page(&AppConfig::default(), magazines(12), PageTarget::First, None).unwrap();
        assert!(html.contains("<ul id=\"js-magazine-list\">"));
        assert!(html.contains("<div id=\"js-pagination\">"));
        assert_eq!(html.matches("<li class=\"magazine-item\">").count(), 10);
        assert!(html.contains("<span class=\"current-page\">1</span>"));
        assert!(html.contains("2024年3月"));
    }

    #[test]
    fn test_render_last_page_with_title() {
        let html = render_page(
            &AppConfig::default(),
            magazines(12),
            PageTarget::Last,
            Some("Back issues".to_string()),
        )
        .unwrap();
        assert_eq!(html.matches("<li class=\"magazine-item\">").count(), 2);
        assert!(html.contains("<span class=\"current-page\">2</span>"));
        assert!(html.contains("<title>Back issues</title>"));
    }

    #[test]
    fn test_render_page_number_is_clamped() {
        let html = render_page(&AppConfig::default(), magazines(12), PageTarget::Number(9), None).unwrap();
        assert!(html.contains("<span class=\"current-page\">2</span>"));
    }
}
