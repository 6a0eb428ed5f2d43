//! Mounted card: listener and timer lifetime
//!
//! `CardMount` owns every browser registration the card makes. Dropping it,
//! by `unmount_card()` or any other path, removes all listeners, cancels a
//! pending reveal timer and marks the controller torn down.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glam::Vec2;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, MouseEvent};

use super::audio::MusicPlayer;
use super::bindings::fire_confetti;
use super::dom::CardDom;
use crate::card::{CardController, CardEvent};
use crate::config::CardConfig;

/// Everything event handlers need
struct CardApp {
    controller: CardController,
    dom: CardDom,
    config: CardConfig,
    music: MusicPlayer,
}

impl CardApp {
    fn render(&self) {
        self.dom.apply(&self.controller.view(), &self.config.assets);
    }
}

type SharedApp = Rc<RefCell<CardApp>>;
type TimerSlot = Rc<RefCell<Option<Timeout>>>;

/// Run queued controller events, then re-render
fn flush(app: &SharedApp, timer: &TimerSlot) {
    let events = app.borrow_mut().controller.drain_events();
    for event in events {
        match event {
            CardEvent::Burst(burst) => fire_confetti(&burst),
            CardEvent::RevealScheduled { token, delay_ms } => {
                let app_for_timer = Rc::clone(app);
                let slot: Weak<RefCell<Option<Timeout>>> = Rc::downgrade(timer);
                let timeout = Timeout::new(delay_ms, move || {
                    app_for_timer.borrow_mut().controller.reveal(token);
                    if let Some(slot) = slot.upgrade() {
                        flush(&app_for_timer, &slot);
                    }
                });
                *timer.borrow_mut() = Some(timeout);
            }
            CardEvent::PlayMusic => app.borrow().music.play(),
            CardEvent::DeclineMoved(_)
            | CardEvent::ProximityChanged(_)
            | CardEvent::StageChanged(_) => {}
        }
    }
    app.borrow().render();
}

/// A live card on the page
pub struct CardMount {
    app: SharedApp,
    listeners: Vec<EventListener>,
    reveal_timer: TimerSlot,
}

impl CardMount {
    /// Bind to the page, lay out the buttons and start listening.
    /// Returns None without a window/document.
    pub fn mount(config: CardConfig, seed: u64) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let dom = CardDom::find(&window, &document);
        dom.fill(&config.text, &config.assets);

        let controller = CardController::new(seed, config.burst);
        dom.render_hearts(controller.hearts());

        let music = MusicPlayer::new(dom.player_container.as_deref(), &config.player);

        let app = Rc::new(RefCell::new(CardApp {
            controller,
            dom,
            config,
            music,
        }));
        let reveal_timer: TimerSlot = Rc::new(RefCell::new(None));

        let mut mount = Self {
            app,
            listeners: Vec::new(),
            reveal_timer,
        };
        mount.layout();
        mount.listen(&window);

        log::info!("Card mounted with seed {}", seed);
        Some(mount)
    }

    fn layout(&self) {
        {
            let mut app = self.app.borrow_mut();
            let CardApp { controller, dom, .. } = &mut *app;
            controller.on_layout(dom.accept_rect(), dom.decline_rect(), dom.viewport());
        }
        flush(&self.app, &self.reveal_timer);
    }

    /// Register a listener whose handler gets the app; the listener lives
    /// exactly as long as this mount
    fn on<F>(&mut self, target: &web_sys::EventTarget, event_type: &'static str, handler: F)
    where
        F: Fn(&mut CardApp, &Event) + 'static,
    {
        let app = Rc::clone(&self.app);
        let timer = Rc::clone(&self.reveal_timer);
        let listener = EventListener::new(target, event_type, move |event| {
            handler(&mut app.borrow_mut(), event);
            flush(&app, &timer);
        });
        self.listeners.push(listener);
    }

    fn listen(&mut self, window: &web_sys::Window) {
        self.on(window, "resize", |app, _| {
            let CardApp { controller, dom, .. } = app;
            controller.on_layout(dom.accept_rect(), dom.decline_rect(), dom.viewport());
        });

        let (stage_area, decline, accept, play) = {
            let app = self.app.borrow();
            (
                app.dom.stage_area.clone(),
                app.dom.decline_btn.clone(),
                app.dom.accept_btn.clone(),
                app.dom.overlay_btn.clone(),
            )
        };

        if let Some(area) = stage_area {
            self.on(&area, "mousemove", |app, event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let pointer = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                let CardApp { controller, dom, .. } = app;
                controller.on_pointer_move(pointer, dom.decline_rect());
            });
            self.on(&area, "mouseleave", |app, _| {
                app.controller.on_pointer_leave();
            });
        }

        if let Some(btn) = decline {
            self.on(&btn, "mouseenter", |app, _| {
                let CardApp { controller, dom, .. } = app;
                controller.on_decline_hover(dom.decline_rect(), dom.viewport());
            });
        }

        if let Some(btn) = accept {
            self.on(&btn, "click", |app, _| app.controller.accept());
        }

        if let Some(btn) = play {
            self.on(&btn, "click", |app, _| app.controller.play_music());
        }

        log::debug!("Registered {} listeners", self.listeners.len());
    }
}

impl Drop for CardMount {
    fn drop(&mut self) {
        self.reveal_timer.borrow_mut().take();
        self.listeners.clear();
        if let Ok(mut app) = self.app.try_borrow_mut() {
            app.controller.teardown();
        }
        log::info!("Card unmounted");
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<CardMount>> = const { RefCell::new(None) };
}

/// Mount the card, replacing any previous mount
pub fn mount_card(config: CardConfig, seed: u64) {
    let mount = CardMount::mount(config, seed);
    if mount.is_none() {
        log::error!("No window/document - card not mounted");
    }
    MOUNTED.with(|slot| *slot.borrow_mut() = mount);
}

/// Tear the card down (listeners, timer)
#[wasm_bindgen]
pub fn unmount_card() {
    let mount = MOUNTED.with(|slot| slot.borrow_mut().take());
    drop(mount);
}
