// Async cover loading. Covers are scheduled per card index, fetched on the
// shared tokio runtime, decoded off the UI thread and handed back over an
// mpsc channel; poll_incoming uploads them as egui textures.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

use eframe::egui;

use crate::news::NewsStore;

use super::rt;

/// Messages from cover fetch tasks back to the UI thread.
pub enum CoverMsg {
    Ok {
        index: usize,
        w: usize,
        h: usize,
        rgba: Vec<u8>,
    },
    Err {
        index: usize,
    },
}

pub struct CoverImages {
    covers: HashMap<usize, egui::TextureHandle>,
    loading: HashSet<usize>,
    // Failed indices are not retried; the card keeps its placeholder fill.
    failed: HashSet<usize>,
    tx: mpsc::Sender<CoverMsg>,
    rx: mpsc::Receiver<CoverMsg>,
}

impl CoverImages {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            covers: HashMap::new(),
            loading: HashSet::new(),
            failed: HashSet::new(),
            tx,
            rx,
        }
    }

    pub fn texture(&self, index: usize) -> Option<&egui::TextureHandle> {
        self.covers.get(&index)
    }

    /// Schedule the current card and both neighbours (idempotent), so the
    /// incoming card of a swipe usually has its cover ready.
    pub fn schedule_around(&mut self, ctx: &egui::Context, store: &NewsStore, current: usize) {
        let lo = current.saturating_sub(1);
        let hi = (current + 1).min(store.last_index());
        for index in lo..=hi {
            self.schedule(ctx, store, index);
        }
    }

    fn schedule(&mut self, ctx: &egui::Context, store: &NewsStore, index: usize) {
        if self.covers.contains_key(&index)
            || self.loading.contains(&index)
            || self.failed.contains(&index)
        {
            return;
        }
        self.loading.insert(index);

        let url = store.item(index).image_url.clone();
        let tx = self.tx.clone();
        let ctx2 = ctx.clone();
        log::info!("cover schedule: index={} url={}", index, url);
        rt().spawn(async move {
            let msg = match fetch_image(&url).await {
                Ok((w, h, rgba)) => CoverMsg::Ok { index, w, h, rgba },
                Err(e) => {
                    log::warn!("cover fetch failed: index={} err={} url={}", index, e, url);
                    CoverMsg::Err { index }
                }
            };
            let _ = tx.send(msg);
            ctx2.request_repaint();
        });
    }

    /// Poll incoming cover results and upload finished ones as textures.
    pub fn poll_incoming(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                CoverMsg::Ok { index, w, h, rgba } => {
                    let image = egui::ColorImage::from_rgba_unmultiplied([w, h], &rgba);
                    let tex = ctx.load_texture(
                        format!("cover_{}", index),
                        image,
                        egui::TextureOptions::default(),
                    );
                    self.covers.insert(index, tex);
                    self.loading.remove(&index);
                    log::info!("cover ok: index={} size={}x{}", index, w, h);
                }
                CoverMsg::Err { index } => {
                    self.loading.remove(&index);
                    self.failed.insert(index);
                }
            }
        }
    }
}

async fn fetch_image(url: &str) -> Result<(usize, usize, Vec<u8>), String> {
    let resp = reqwest::get(url)
        .await
        .map_err(|e| format!("request error: {}", e))?;
    if !resp.status().is_success() {
        return Err(format!("http status {}", resp.status().as_u16()));
    }
    let bytes = resp
        .bytes()
        .await
        .map_err(|e| format!("body read error: {}", e))?;
    let img =
        image::load_from_memory(&bytes).map_err(|e| format!("decode error: {}", e))?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok((w as usize, h as usize, rgba.into_raw()))
}
