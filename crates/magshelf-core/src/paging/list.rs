use std::ops::Range;

use super::document::{ClickEvent, Control, Document};
use super::partition::split_into_pages;
use super::render::{list_markup, pagination_markup};
use super::reporter::{Reporter, TracingReporter};
use crate::config::ListConfig;
use crate::error::{AttachmentError, ContainerKind};
use crate::magazine::Magazine;
use crate::Result;

/// A magazine list split into fixed-size pages, rendered into a host document.
///
/// The partition is computed once at construction and never changes. The
/// only mutable state is the current page index, which always stays within
/// `0..=last_page_index()`.
pub struct PagedList<D, R = TracingReporter> {
    items: Vec<Magazine>,
    pages: Vec<Range<usize>>,
    config: ListConfig,
    current_page: usize,
    attached: bool,
    document: D,
    reporter: R,
}

impl<D: Document> PagedList<D, TracingReporter> {
    /// Build a list that reports render failures through `tracing`
    pub fn new(items: Vec<Magazine>, config: ListConfig, document: D) -> Result<Self> {
        Self::with_reporter(items, config, document, TracingReporter)
    }
}

impl<D: Document, R: Reporter> PagedList<D, R> {
    /// Build a list with an explicit failure reporter.
    ///
    /// Fails with [`crate::Error::Config`] when `items_per_page` is 0.
    pub fn with_reporter(
        items: Vec<Magazine>,
        config: ListConfig,
        document: D,
        reporter: R,
    ) -> Result<Self> {
        config.validate()?;
        let pages = split_into_pages(items.len(), config.items_per_page);

        tracing::debug!(
            items = items.len(),
            pages = pages.len(),
            per_page = config.items_per_page,
            "Partitioned magazine list"
        );

        Ok(Self {
            items,
            pages,
            config,
            current_page: 0,
            attached: false,
            document,
            reporter,
        })
    }

    /// First render, run once the host's containers exist.
    ///
    /// Returns false (and does nothing) if the list was already attached.
    pub fn attach(&mut self) -> bool {
        if self.attached {
            tracing::warn!("List already attached, ignoring");
            return false;
        }
        self.attached = true;
        self.render();
        true
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Replace the list container's content with the current page's entries.
    ///
    /// A missing container is reported and the step skipped; returns whether
    /// anything was rendered.
    pub fn render_list(&mut self) -> bool {
        let result = self.try_render_list();
        self.settle(result)
    }

    /// Like [`PagedList::render_list`], but hands a missing container back
    /// as [`crate::Error::Attachment`] instead of reporting it.
    pub fn try_render_list(&mut self) -> Result<()> {
        let markup = list_markup(self.current_items(), &self.config);
        if !self.document.replace_content(&self.config.list_id, &markup) {
            return Err(AttachmentError::new(ContainerKind::List, &self.config.list_id).into());
        }
        Ok(())
    }

    /// Replace the pagination container's content, then bind the controls.
    ///
    /// Fails independently of [`PagedList::render_list`].
    pub fn render_pagination(&mut self) -> bool {
        let result = self.try_render_pagination();
        self.settle(result)
    }

    /// Like [`PagedList::render_pagination`], but hands a missing container
    /// back as [`crate::Error::Attachment`] instead of reporting it.
    pub fn try_render_pagination(&mut self) -> Result<()> {
        let markup = pagination_markup(self.current_page, self.last_page_index(), &self.config);
        if !self
            .document
            .replace_content(&self.config.pagination_id, &markup)
        {
            return Err(AttachmentError::new(
                ContainerKind::Pagination,
                &self.config.pagination_id,
            )
            .into());
        }
        self.bind_controls();
        Ok(())
    }

    /// Route a render failure to the reporter
    fn settle(&self, result: Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(crate::Error::Attachment(error)) => {
                self.reporter.report(&error);
                false
            }
            Err(error) => {
                tracing::error!("Render failed: {}", error);
                false
            }
        }
    }

    /// Select the freshly rendered controls and attach new listeners
    fn bind_controls(&mut self) {
        let bindings = [
            (self.config.prev_selector(), Control::Previous),
            (self.config.next_selector(), Control::Next),
        ];
        for (selector, control) in bindings {
            if !self.document.bind_click(&selector, control) {
                tracing::debug!(selector = %selector, "No control to bind");
            }
        }
    }

    fn render(&mut self) {
        self.render_list();
        self.render_pagination();
    }

    /// Advance one page. No-op on the last page; returns whether the page changed.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        tracing::debug!(page = self.current_page, "Next page");
        self.render();
        true
    }

    /// Go back one page. No-op on the first page; returns whether the page changed.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_page -= 1;
        tracing::debug!(page = self.current_page, "Previous page");
        self.render();
        true
    }

    /// Jump to `page`, clamped to the valid range, and re-render.
    ///
    /// Returns the page actually shown.
    pub fn go_to(&mut self, page: usize) -> usize {
        let last = self.last_page_index();
        let target = page.min(last);
        if target != page {
            tracing::warn!(requested = page, last, "Page out of range, clamping");
        }
        self.current_page = target;
        self.render();
        target
    }

    /// Index of the last page. An empty list counts as one empty page.
    pub fn last_page_index(&self) -> usize {
        self.pages.len().saturating_sub(1)
    }

    /// Deliver a click on the element matching `selector`.
    ///
    /// Returns the dispatched event, or `None` when no enabled control with
    /// a listener matches.
    pub fn click(&mut self, selector: &str) -> Option<ClickEvent> {
        let control = self.document.listener(selector)?;
        let mut event = ClickEvent::new(selector, control);
        self.handle_click(&mut event);
        Some(event)
    }

    fn handle_click(&mut self, event: &mut ClickEvent) {
        // Controls are buttons, not links
        event.prevent_default();
        match event.control() {
            Control::Previous => self.previous(),
            Control::Next => self.next(),
        };
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages in the partition (0 for an empty list)
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page_index()
    }

    /// Items of page `index`
    pub fn page(&self, index: usize) -> Option<&[Magazine]> {
        self.pages.get(index).map(|range| &self.items[range.clone()])
    }

    /// All pages, in order
    pub fn pages(&self) -> impl Iterator<Item = &[Magazine]> + '_ {
        self.pages.iter().map(|range| &self.items[range.clone()])
    }

    /// Items on the current page (empty for an empty list)
    pub fn current_items(&self) -> &[Magazine] {
        if self.pages.is_empty() {
            return &[];
        }
        &self.items[self.pages[self.current_page].clone()]
    }

    pub fn items(&self) -> &[Magazine] {
        &self.items
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_document(self) -> D {
        self.document
    }
}
