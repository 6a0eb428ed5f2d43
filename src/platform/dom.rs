//! DOM lookup, measurement and rendering
//!
//! Elements are looked up once by id. Any of them may be missing; every
//! method then quietly does less.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, Window};

use crate::card::{CardStage, CardView, HEART_SVG, Heart};
use crate::config::{Assets, Texts};
use crate::geometry::{Rect, Viewport};

fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("Missing element #{}", id);
    }
    el?.dyn_into::<T>().ok()
}

fn set_hidden(el: &Element, hidden: bool) {
    let _ = el.class_list().toggle_with_force("hidden", hidden);
}

fn set_text(el: Option<&HtmlElement>, text: &str) {
    if let Some(el) = el {
        el.set_text_content(Some(text));
    }
}

/// Handles to every element the card touches
pub struct CardDom {
    window: Window,
    document: Document,
    /// Pointer-tracking region
    pub stage_area: Option<HtmlElement>,
    pub prompt_card: Option<HtmlElement>,
    pub prompt_image: Option<HtmlImageElement>,
    pub question: Option<HtmlElement>,
    pub accept_btn: Option<HtmlElement>,
    pub decline_btn: Option<HtmlElement>,
    pub celebration_card: Option<HtmlElement>,
    pub celebration_image: Option<HtmlImageElement>,
    pub celebration_title: Option<HtmlElement>,
    pub celebration_subtitle: Option<HtmlElement>,
    pub overlay: Option<HtmlElement>,
    pub overlay_title: Option<HtmlElement>,
    pub overlay_question: Option<HtmlElement>,
    pub overlay_btn: Option<HtmlElement>,
    pub hearts_layer: Option<HtmlElement>,
    pub player_container: Option<HtmlElement>,
}

impl CardDom {
    pub fn find(window: &Window, document: &Document) -> Self {
        Self {
            window: window.clone(),
            document: document.clone(),
            stage_area: by_id(document, "viewport-container"),
            prompt_card: by_id(document, "card-prompt"),
            prompt_image: by_id(document, "card-gif"),
            question: by_id(document, "question"),
            accept_btn: by_id(document, "yes"),
            decline_btn: by_id(document, "no"),
            celebration_card: by_id(document, "card-celebration"),
            celebration_image: by_id(document, "card-main-image"),
            celebration_title: by_id(document, "celebration-title"),
            celebration_subtitle: by_id(document, "celebration-subtitle"),
            overlay: by_id(document, "music-overlay"),
            overlay_title: by_id(document, "overlay-title"),
            overlay_question: by_id(document, "overlay-question"),
            overlay_btn: by_id(document, "play-btn"),
            hearts_layer: by_id(document, "hearts"),
            player_container: by_id(document, "aplayer"),
        }
    }

    pub fn viewport(&self) -> Viewport {
        let w = self.window.inner_width().ok().and_then(|v| v.as_f64());
        let h = self.window.inner_height().ok().and_then(|v| v.as_f64());
        Viewport::new(w.unwrap_or(0.0) as f32, h.unwrap_or(0.0) as f32)
    }

    pub fn accept_rect(&self) -> Option<Rect> {
        self.accept_btn
            .as_ref()
            .map(|el| Rect::from(&el.get_bounding_client_rect()))
    }

    pub fn decline_rect(&self) -> Option<Rect> {
        self.decline_btn
            .as_ref()
            .map(|el| Rect::from(&el.get_bounding_client_rect()))
    }

    /// Write configured texts and static images
    pub fn fill(&self, text: &Texts, assets: &Assets) {
        set_text(self.question.as_ref(), &text.question);
        set_text(self.accept_btn.as_ref(), &text.accept_label);
        set_text(self.decline_btn.as_ref(), &text.decline_label);
        set_text(self.celebration_title.as_ref(), &text.celebration_title);
        set_text(self.celebration_subtitle.as_ref(), &text.celebration_subtitle);
        set_text(self.overlay_title.as_ref(), &text.overlay_title);
        set_text(self.overlay_question.as_ref(), &text.overlay_question);
        set_text(self.overlay_btn.as_ref(), &text.overlay_button);

        if let Some(img) = &self.prompt_image {
            img.set_src(&assets.cute_gif);
        }
        if let Some(img) = &self.celebration_image {
            img.set_src(&assets.main_image);
        }
    }

    /// Append one element per heart to the hearts layer
    pub fn render_hearts(&self, hearts: &[Heart]) {
        let Some(layer) = &self.hearts_layer else { return };
        for heart in hearts {
            let Ok(el) = self.document.create_element("div") else {
                continue;
            };
            el.set_class_name("heart");
            let _ = el.set_attribute("style", &heart.style());
            el.set_inner_html(HEART_SVG);
            let _ = layer.append_child(&el);
        }
        log::debug!("Rendered {} hearts", hearts.len());
    }

    /// Make the page match a controller snapshot
    pub fn apply(&self, view: &CardView, assets: &Assets) {
        if let Some(overlay) = &self.overlay {
            set_hidden(overlay, !view.overlay_visible);
        }

        let prompt = view.stage == CardStage::Prompt;
        if let Some(card) = &self.prompt_card {
            set_hidden(card, !prompt);
        }
        if let Some(card) = &self.celebration_card {
            set_hidden(card, prompt);
        }

        if let Some(img) = &self.prompt_image {
            let src = view.prompt_image(assets);
            // Reassigning the same src restarts the GIF
            if !img.src().ends_with(src) {
                img.set_src(src);
            }
        }

        if let Some(btn) = &self.decline_btn {
            match view.decline {
                Some(pos) => {
                    set_hidden(btn, false);
                    let style = btn.style();
                    let _ = style.set_property("left", &pos.css_left());
                    let _ = style.set_property("top", &pos.css_top());
                }
                None => set_hidden(btn, true),
            }
        }
    }
}
