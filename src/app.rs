// Application root, split out of main.rs: screen routing plus the state the
// frame loop owns (carousel, animator, cover cache, toasts, embedded
// browser). Drawing lives in views and the per-screen modules.

use eframe::{egui, App};

use crate::news::{NewsItem, NewsStore};
use crate::types::HostCapability;

pub mod animator;
mod bridge;
mod browser;
mod cards_screen;
mod images;
mod runtime;
mod state;
mod toast;

pub use runtime::rt;

use animator::Animator;
use bridge::ActionBridge;
use browser::{BackAction, EmbeddedBrowser};
use images::CoverImages;
use state::CarouselState;
use toast::Toasts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Cards,
    Browser,
}

pub struct GistApp {
    store: NewsStore,
    carousel: CarouselState,
    animator: Animator,
    images: CoverImages,
    bridge: ActionBridge,
    toasts: Toasts,
    screen: Screen,
    embedded: Option<EmbeddedBrowser>,
}

impl GistApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, store: NewsStore, host: HostCapability) -> Self {
        let carousel = CarouselState::new(store.len());
        Self {
            carousel,
            animator: Animator::new(host.input),
            images: CoverImages::new(),
            bridge: ActionBridge::new(host.browser),
            toasts: Toasts::default(),
            screen: Screen::Cards,
            embedded: None,
            store,
        }
    }

    fn current_item(&self) -> &NewsItem {
        self.store.item(self.carousel.current_index())
    }

    fn update_browser(&mut self, ctx: &egui::Context) {
        let Some(browser) = self.embedded.as_mut() else {
            self.screen = Screen::Cards;
            return;
        };
        browser.poll_incoming();
        let intent = browser.draw(ctx);
        if intent.open_external_pressed {
            self.bridge.open_external(browser.current_url());
        }
        if intent.back_pressed {
            // The surface's own history wins; only close once exhausted.
            if let BackAction::Exhausted = browser.go_back() {
                self.embedded = None;
                self.screen = Screen::Cards;
            }
        }
    }
}

impl App for GistApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.screen {
            Screen::Cards => cards_screen::update_cards(self, ctx),
            Screen::Browser => self.update_browser(ctx),
        }
        self.toasts.draw(ctx);
    }
}
