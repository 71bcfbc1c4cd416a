// Embedded browser surface with its own back/forward history, distinct from
// the app's screen stack. The host has no web engine, so the surface shows
// the probed page title and a loading affordance; real content stays one
// "open in system browser" away.

use std::collections::HashMap;
use std::sync::mpsc;

use eframe::egui::{self, Color32, RichText, Rounding, Stroke};
use lazy_static::lazy_static;
use regex::Regex;

use crate::news::NewsItem;
use crate::ui_constants::spacing;

use super::rt;

/// Result of the surface's own "go back" action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    /// Stepped back within the surface's internal history.
    NavigatedBack,
    /// History is at its root; the caller should close the surface.
    Exhausted,
}

/// User intents emitted by the browser surface.
#[derive(Default)]
pub struct BrowserIntent {
    pub back_pressed: bool,
    pub open_external_pressed: bool,
}

enum ProbeMsg {
    Loaded { url: String, title: Option<String> },
    Failed { url: String },
}

#[derive(Default, Clone)]
struct PageState {
    probe_started: bool,
    loaded: bool,
    title: Option<String>,
}

pub struct EmbeddedBrowser {
    source_label: String,
    /// Visited URLs, oldest first. Never empty.
    history: Vec<String>,
    pages: HashMap<String, PageState>,
    tx: mpsc::Sender<ProbeMsg>,
    rx: mpsc::Receiver<ProbeMsg>,
}

impl EmbeddedBrowser {
    /// Open a surface on the item's source site.
    pub fn open(item: &NewsItem) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut browser = Self {
            source_label: item.news_source.clone(),
            history: Vec::new(),
            pages: HashMap::new(),
            tx,
            rx,
        };
        browser.navigate(item.website_url.clone());
        browser
    }

    pub fn current_url(&self) -> &str {
        // History is seeded in open() and go_back never pops the root.
        self.history.last().map(String::as_str).unwrap_or_default()
    }

    fn navigate(&mut self, url: String) {
        self.pages.entry(url.clone()).or_default();
        self.history.push(url);
    }

    /// Defer to internal history first; only report `Exhausted` once the
    /// stack is down to its root page.
    pub fn go_back(&mut self) -> BackAction {
        if self.history.len() > 1 {
            self.history.pop();
            BackAction::NavigatedBack
        } else {
            BackAction::Exhausted
        }
    }

    /// Drain probe results. A failed load is only logged; the page keeps its
    /// loading affordance indefinitely.
    pub fn poll_incoming(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                ProbeMsg::Loaded { url, title } => {
                    log::info!("page loaded: {}", url);
                    let page = self.pages.entry(url).or_default();
                    page.loaded = true;
                    page.title = title;
                }
                ProbeMsg::Failed { url } => {
                    log::warn!("page load failed: {}", url);
                }
            }
        }
    }

    pub fn draw(&mut self, ctx: &egui::Context) -> BrowserIntent {
        self.ensure_probe(ctx);

        let mut intent = BrowserIntent::default();
        let url = self.current_url().to_owned();
        let page = self.pages.get(&url).cloned().unwrap_or_default();

        egui::TopBottomPanel::top("browser_header")
            .frame(
                egui::Frame::none()
                    .fill(Color32::from_rgb(18, 18, 18))
                    .inner_margin(spacing::MEDIUM),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let back = ui.add(
                        egui::Button::new(RichText::new("←").size(18.0).color(Color32::WHITE))
                            .fill(Color32::from_rgb(48, 48, 48))
                            .stroke(Stroke::new(1.0, Color32::from_gray(80)))
                            .rounding(Rounding::same(18.0))
                            .min_size(egui::vec2(36.0, 36.0)),
                    );
                    intent.back_pressed = back.clicked();
                    ui.add_space(spacing::MEDIUM);
                    ui.label(RichText::new(host_of(&url)).color(Color32::from_gray(160)));
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::from_rgb(10, 10, 10)))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.3);
                    if page.loaded {
                        let title = page.title.as_deref().unwrap_or(&url);
                        ui.label(
                            RichText::new(title)
                                .size(20.0)
                                .strong()
                                .color(Color32::WHITE),
                        );
                        ui.add_space(spacing::LARGE);
                        let open = ui.add(
                            egui::Button::new(
                                RichText::new("Open in system browser").color(Color32::BLACK),
                            )
                            .fill(Color32::WHITE)
                            .rounding(Rounding::same(12.0)),
                        );
                        intent.open_external_pressed = open.clicked();
                    } else {
                        ui.label(RichText::new("🌐").size(48.0).color(Color32::WHITE));
                        ui.add_space(spacing::LARGE);
                        ui.add(egui::Spinner::new().size(24.0));
                        ui.add_space(spacing::MEDIUM);
                        ui.label(
                            RichText::new(format!("Loading {}...", self.source_label))
                                .color(Color32::from_gray(200)),
                        );
                    }
                });
            });

        intent
    }

    fn ensure_probe(&mut self, ctx: &egui::Context) {
        let url = self.current_url().to_owned();
        let Some(page) = self.pages.get_mut(&url) else {
            return;
        };
        if page.probe_started {
            return;
        }
        page.probe_started = true;

        let tx = self.tx.clone();
        let ctx2 = ctx.clone();
        rt().spawn(async move {
            let msg = match probe_page(&url).await {
                Ok(title) => ProbeMsg::Loaded { url, title },
                Err(e) => {
                    log::warn!("page probe error: {}", e);
                    ProbeMsg::Failed { url }
                }
            };
            let _ = tx.send(msg);
            ctx2.request_repaint();
        });
    }
}

async fn probe_page(url: &str) -> Result<Option<String>, String> {
    let resp = reqwest::get(url)
        .await
        .map_err(|e| format!("request error for {}: {}", url, e))?;
    if !resp.status().is_success() {
        return Err(format!("http status {} for {}", resp.status().as_u16(), url));
    }
    let body = resp
        .text()
        .await
        .map_err(|e| format!("body read error for {}: {}", url, e))?;
    Ok(extract_title(&body))
}

/// Best-effort `<title>` extraction from a fetched page.
fn extract_title(html: &str) -> Option<String> {
    lazy_static! {
        static ref TITLE_RE: Regex =
            Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title regex");
    }
    let captures = TITLE_RE.captures(html)?;
    let raw = captures.get(1)?.as_str();
    let title = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

fn host_of(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| url.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> NewsItem {
        NewsItem {
            image_url: "https://example.com/cover.jpg".into(),
            title: "Story".into(),
            summary: "Summary.".into(),
            news_source: "Daily Press".into(),
            website_url: "https://example.com/story".into(),
        }
    }

    #[test]
    fn back_at_history_root_is_exhausted() {
        let mut browser = EmbeddedBrowser::open(&item());
        assert_eq!(browser.go_back(), BackAction::Exhausted);
        // The root entry stays put.
        assert_eq!(browser.current_url(), "https://example.com/story");
    }

    #[test]
    fn back_pops_internal_history_before_exhausting() {
        let mut browser = EmbeddedBrowser::open(&item());
        browser.navigate("https://example.com/about".into());
        assert_eq!(browser.current_url(), "https://example.com/about");
        assert_eq!(browser.go_back(), BackAction::NavigatedBack);
        assert_eq!(browser.current_url(), "https://example.com/story");
        assert_eq!(browser.go_back(), BackAction::Exhausted);
    }

    #[test]
    fn failed_probe_keeps_the_page_loading() {
        let mut browser = EmbeddedBrowser::open(&item());
        let url = browser.current_url().to_owned();
        browser
            .tx
            .clone()
            .send(ProbeMsg::Failed { url: url.clone() })
            .unwrap();
        browser.poll_incoming();
        assert!(!browser.pages[&url].loaded);
    }

    #[test]
    fn loaded_probe_stores_the_title() {
        let mut browser = EmbeddedBrowser::open(&item());
        let url = browser.current_url().to_owned();
        browser
            .tx
            .clone()
            .send(ProbeMsg::Loaded {
                url: url.clone(),
                title: Some("Example".into()),
            })
            .unwrap();
        browser.poll_incoming();
        let page = &browser.pages[&url];
        assert!(page.loaded);
        assert_eq!(page.title.as_deref(), Some("Example"));
    }

    #[test]
    fn title_extraction_trims_and_collapses_whitespace() {
        let html = "<html><head><TITLE>\n  Example \n Domain </TITLE></head></html>";
        assert_eq!(extract_title(html), Some("Example Domain".into()));
        assert_eq!(extract_title("<html></html>"), None);
        assert_eq!(extract_title("<title>   </title>"), None);
    }

    #[test]
    fn host_is_shown_for_valid_urls() {
        assert_eq!(host_of("https://example.com/story"), "example.com");
        assert_eq!(host_of("not a url"), "not a url");
    }
}
