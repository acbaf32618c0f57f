use std::path::Path;

use anyhow::Result;

use magshelf_core::{magazine::load_magazines, AppConfig, MemoryDocument, PagedList};

pub fn run(config: &AppConfig, items_path: &Path) -> Result<()> {
    let magazines = load_magazines(items_path)?;
    let list = PagedList::new(magazines, config.list.clone(), MemoryDocument::new())?;

    if list.page_count() == 0 {
        println!("No magazines in {}.", items_path.display());
        return Ok(());
    }

    println!(
        "{} magazines, {} pages ({} per page):\n",
        list.items().len(),
        list.page_count(),
        config.list.items_per_page
    );

    for (index, page) in list.pages().enumerate() {
        let first = page.first().map(|m| m.title.as_str()).unwrap_or("");
        let last = page.last().map(|m| m.title.as_str()).unwrap_or("");
        println!("  {:>3}: {:>3} items  {} .. {}", index + 1, page.len(), first, last);
    }

    Ok(())
}
