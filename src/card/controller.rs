//! Card state machine
//!
//! `CardController` owns every piece of transient card state. Browser
//! handlers call into it with already-measured geometry; it updates its own
//! fields and queues `CardEvent`s for the platform layer to act on (move the
//! button, fire confetti, start a timer, swap cards, start music).

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::hearts::{Heart, generate_hearts};
use super::positioner::EvasivePositioner;
use crate::config::{Assets, ConfettiBurst};
use crate::consts::*;
use crate::geometry::{ControlPosition, Rect, Viewport};

/// Which card is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardStage {
    /// "Will you be my Valentine?" with Yes/No
    #[default]
    Prompt,
    /// After "Yes". Terminal.
    Celebration,
}

/// Side effects requested by the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardEvent {
    /// No button has a new top-left corner
    DeclineMoved(ControlPosition),
    /// Pointer crossed the proximity threshold (true = near)
    ProximityChanged(bool),
    /// Fire one confetti burst
    Burst(ConfettiBurst),
    /// Call `reveal(token)` after `delay_ms`
    RevealScheduled { token: u32, delay_ms: u32 },
    /// Stage transition happened
    StageChanged(CardStage),
    /// Start the music player
    PlayMusic,
}

/// Read-only snapshot for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardView {
    pub stage: CardStage,
    /// None once the No button is gone
    pub decline: Option<ControlPosition>,
    pub pointer_near: bool,
    pub overlay_visible: bool,
}

impl CardView {
    /// Image for the prompt card
    pub fn prompt_image<'a>(&self, assets: &'a Assets) -> &'a str {
        if self.pointer_near {
            &assets.sad_gif
        } else {
            &assets.cute_gif
        }
    }
}

/// Owner of all card state
pub struct CardController<R: Rng = Pcg32> {
    stage: CardStage,
    positioner: EvasivePositioner,
    overlay_visible: bool,
    hearts: Vec<Heart>,
    burst: ConfettiBurst,
    rng: R,
    /// Token of the reveal timer currently allowed to fire
    pending_reveal: Option<u32>,
    next_token: u32,
    events: Vec<CardEvent>,
}

impl CardController<Pcg32> {
    pub fn new(seed: u64, burst: ConfettiBurst) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), burst)
    }
}

impl<R: Rng> CardController<R> {
    /// Build with an explicit random source (hearts are drawn immediately)
    pub fn with_rng(mut rng: R, burst: ConfettiBurst) -> Self {
        let hearts = generate_hearts(HEART_COUNT, &mut rng);
        Self {
            stage: CardStage::Prompt,
            positioner: EvasivePositioner::new(),
            overlay_visible: true,
            hearts,
            burst,
            rng,
            pending_reveal: None,
            next_token: 0,
            events: Vec::new(),
        }
    }

    pub fn stage(&self) -> CardStage {
        self.stage
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    /// True while a reveal timer is outstanding
    pub fn reveal_pending(&self) -> bool {
        self.pending_reveal.is_some()
    }

    pub fn view(&self) -> CardView {
        let prompt = self.stage == CardStage::Prompt;
        CardView {
            stage: self.stage,
            decline: prompt.then(|| self.positioner.position()),
            pointer_near: prompt && self.positioner.is_near(),
            overlay_visible: self.overlay_visible,
        }
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<CardEvent> {
        std::mem::take(&mut self.events)
    }

    /// Place the No button beside (or below) the Yes button.
    /// Called at mount and on every resize. No-op until both buttons exist.
    pub fn on_layout(&mut self, accept: Option<Rect>, decline: Option<Rect>, viewport: Viewport) {
        if self.stage != CardStage::Prompt {
            return;
        }
        let (Some(accept), Some(decline)) = (accept, decline) else {
            return;
        };
        let pos = self.positioner.layout(&accept, viewport, decline.size());
        log::debug!(
            "Layout {}x{}: No button at ({}, {})",
            viewport.width,
            viewport.height,
            pos.left,
            pos.top
        );
        self.events.push(CardEvent::DeclineMoved(pos));
    }

    /// Pointer reached the No button: jump away
    pub fn on_decline_hover(&mut self, decline: Option<Rect>, viewport: Viewport) {
        if self.stage != CardStage::Prompt {
            return;
        }
        let Some(decline) = decline else { return };
        let pos = self
            .positioner
            .relocate(viewport, decline.size(), &mut self.rng);
        log::debug!("No button dodged to ({:.0}, {:.0})", pos.left, pos.top);
        self.events.push(CardEvent::DeclineMoved(pos));
    }

    /// Pointer moved inside the card area
    pub fn on_pointer_move(&mut self, pointer: Vec2, decline: Option<Rect>) {
        if self.stage != CardStage::Prompt {
            return;
        }
        let Some(decline) = decline else { return };
        if self.positioner.update_proximity(pointer, &decline) {
            self.events
                .push(CardEvent::ProximityChanged(self.positioner.is_near()));
        }
    }

    /// Pointer left the card area
    pub fn on_pointer_leave(&mut self) {
        if self.stage != CardStage::Prompt {
            return;
        }
        if self.positioner.pointer_left() {
            self.events.push(CardEvent::ProximityChanged(false));
        }
    }

    /// "Yes" clicked: confetti now, celebration after [`REVEAL_DELAY_MS`].
    ///
    /// Every click during the delay gets its own burst, but only the first
    /// one schedules a reveal.
    pub fn accept(&mut self) {
        if self.stage != CardStage::Prompt {
            return;
        }
        self.events.push(CardEvent::Burst(self.burst));

        if self.pending_reveal.is_none() {
            let token = self.next_token;
            self.next_token = self.next_token.wrapping_add(1);
            self.pending_reveal = Some(token);
            self.events.push(CardEvent::RevealScheduled {
                token,
                delay_ms: REVEAL_DELAY_MS,
            });
            log::info!("Yes! Celebration in {}ms", REVEAL_DELAY_MS);
        }
    }

    /// Reveal timer fired. Returns true if the stage changed.
    pub fn reveal(&mut self, token: u32) -> bool {
        if self.stage != CardStage::Prompt || self.pending_reveal != Some(token) {
            log::debug!("Ignoring stale reveal timer {}", token);
            return false;
        }
        self.pending_reveal = None;
        self.stage = CardStage::Celebration;
        self.positioner.pointer_left();
        self.events
            .push(CardEvent::StageChanged(CardStage::Celebration));
        log::info!("Stage -> Celebration");
        true
    }

    /// Dismiss the music overlay and start playback (once)
    pub fn play_music(&mut self) {
        if !self.overlay_visible {
            return;
        }
        self.overlay_visible = false;
        self.events.push(CardEvent::PlayMusic);
    }

    /// Component is going away: any outstanding reveal becomes stale
    pub fn teardown(&mut self) {
        self.pending_reveal = None;
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CardController {
        CardController::new(12345, ConfettiBurst::default())
    }

    fn accept_rect() -> Rect {
        Rect::from_edges(500.0, 300.0, 600.0, 344.0)
    }

    fn decline_rect() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 44.0)
    }

    /// Minimal stand-in for browser timeouts driven by a manual clock
    #[derive(Default)]
    struct FakeTimers {
        now: u32,
        queue: Vec<(u32, u32)>, // (due, token)
    }

    impl FakeTimers {
        fn collect(&mut self, events: &[CardEvent]) {
            for e in events {
                if let CardEvent::RevealScheduled { token, delay_ms } = *e {
                    self.queue.push((self.now + delay_ms, token));
                }
            }
        }

        fn advance(&mut self, ms: u32, card: &mut CardController) {
            self.now += ms;
            let now = self.now;
            let (due, rest): (Vec<_>, Vec<_>) = self.queue.drain(..).partition(|(d, _)| *d <= now);
            self.queue = rest;
            for (_, token) in due {
                card.reveal(token);
            }
        }
    }

    #[test]
    fn test_starts_in_prompt_with_overlay() {
        let card = controller();
        let view = card.view();
        assert_eq!(view.stage, CardStage::Prompt);
        assert!(view.overlay_visible);
        assert!(!view.pointer_near);
        assert_eq!(card.hearts().len(), HEART_COUNT);
    }

    #[test]
    fn test_layout_emits_position() {
        let mut card = controller();
        card.on_layout(
            Some(accept_rect()),
            Some(decline_rect()),
            Viewport::new(1200.0, 800.0),
        );
        let expected = ControlPosition::new(850.0, 300.0);
        assert_eq!(card.drain_events(), vec![CardEvent::DeclineMoved(expected)]);
        assert_eq!(card.view().decline, Some(expected));
    }

    #[test]
    fn test_missing_elements_are_noops() {
        let mut card = controller();
        let viewport = Viewport::new(1200.0, 800.0);
        card.on_layout(None, Some(decline_rect()), viewport);
        card.on_layout(Some(accept_rect()), None, viewport);
        card.on_decline_hover(None, viewport);
        card.on_pointer_move(Vec2::new(10.0, 10.0), None);
        assert!(card.drain_events().is_empty());
        assert_eq!(card.view().decline, Some(ControlPosition::default()));
    }

    #[test]
    fn test_hover_relocates_within_bounds() {
        let mut card = controller();
        let viewport = Viewport::new(800.0, 600.0);
        for _ in 0..50 {
            card.on_decline_hover(Some(decline_rect()), viewport);
        }
        let events = card.drain_events();
        assert_eq!(events.len(), 50);
        for e in events {
            let CardEvent::DeclineMoved(pos) = e else {
                panic!("unexpected event {e:?}");
            };
            assert!(pos.left >= 20.0 && pos.left <= 680.0);
            assert!(pos.top >= 20.0 && pos.top <= 536.0);
        }
    }

    #[test]
    fn test_proximity_scenario() {
        let mut card = controller();
        let decline = Rect::new(500.0, 300.0, 100.0, 40.0);

        card.on_pointer_move(Vec2::new(600.0, 320.0), Some(decline)); // 50px
        assert!(card.view().pointer_near);
        card.on_pointer_move(Vec2::new(700.0, 320.0), Some(decline)); // 150px
        assert!(!card.view().pointer_near);

        assert_eq!(
            card.drain_events(),
            vec![
                CardEvent::ProximityChanged(true),
                CardEvent::ProximityChanged(false)
            ]
        );
    }

    #[test]
    fn test_pointer_leave_clears_proximity() {
        let mut card = controller();
        let decline = Rect::new(500.0, 300.0, 100.0, 40.0);
        card.on_pointer_move(Vec2::new(550.0, 320.0), Some(decline));
        card.on_pointer_leave();
        assert!(!card.view().pointer_near);
        assert_eq!(
            card.drain_events(),
            vec![
                CardEvent::ProximityChanged(true),
                CardEvent::ProximityChanged(false)
            ]
        );
        // Already far: nothing new
        card.on_pointer_leave();
        assert!(card.drain_events().is_empty());
    }

    #[test]
    fn test_prompt_image_follows_proximity() {
        let assets = Assets::default();
        let mut card = controller();
        assert_eq!(card.view().prompt_image(&assets), "/cute-gif-1.gif");
        card.on_pointer_move(Vec2::new(50.0, 22.0), Some(decline_rect()));
        assert_eq!(card.view().prompt_image(&assets), "/sad-gif-1.gif");
    }

    #[test]
    fn test_accept_bursts_once_then_reveals_after_delay() {
        let mut card = controller();
        let mut timers = FakeTimers::default();

        card.accept();
        let events = card.drain_events();
        let bursts = events
            .iter()
            .filter(|e| matches!(e, CardEvent::Burst(_)))
            .count();
        assert_eq!(bursts, 1);
        assert!(events.contains(&CardEvent::Burst(ConfettiBurst::default())));
        assert!(events.contains(&CardEvent::RevealScheduled {
            token: 0,
            delay_ms: 500
        }));
        timers.collect(&events);

        timers.advance(499, &mut card);
        assert_eq!(card.stage(), CardStage::Prompt);
        assert!(card.reveal_pending());

        timers.advance(1, &mut card);
        assert_eq!(card.stage(), CardStage::Celebration);
        assert_eq!(
            card.drain_events(),
            vec![CardEvent::StageChanged(CardStage::Celebration)]
        );
        assert!(!card.reveal_pending());
    }

    #[test]
    fn test_double_click_bursts_twice_reveals_once() {
        let mut card = controller();
        card.accept();
        card.accept();
        let events = card.drain_events();
        let bursts = events
            .iter()
            .filter(|e| matches!(e, CardEvent::Burst(_)))
            .count();
        let schedules = events
            .iter()
            .filter(|e| matches!(e, CardEvent::RevealScheduled { .. }))
            .count();
        assert_eq!(bursts, 2);
        assert_eq!(schedules, 1);
    }

    #[test]
    fn test_celebration_is_terminal() {
        let mut card = controller();
        card.on_pointer_move(Vec2::new(50.0, 22.0), Some(decline_rect()));
        card.accept();
        assert!(card.reveal(0));
        card.drain_events();

        let viewport = Viewport::new(1200.0, 800.0);
        card.accept();
        card.on_layout(Some(accept_rect()), Some(decline_rect()), viewport);
        card.on_decline_hover(Some(decline_rect()), viewport);
        card.on_pointer_move(Vec2::new(50.0, 22.0), Some(decline_rect()));
        card.on_pointer_leave();
        assert!(card.drain_events().is_empty());
        assert!(!card.reveal(0));

        let view = card.view();
        assert_eq!(view.stage, CardStage::Celebration);
        assert_eq!(view.decline, None);
        assert!(!view.pointer_near);
    }

    #[test]
    fn test_teardown_cancels_pending_reveal() {
        let mut card = controller();
        card.accept();
        card.teardown();
        assert!(card.drain_events().is_empty());
        assert!(!card.reveal(0));
        assert_eq!(card.stage(), CardStage::Prompt);
    }

    #[test]
    fn test_unknown_token_ignored() {
        let mut card = controller();
        card.accept();
        assert!(!card.reveal(7));
        assert_eq!(card.stage(), CardStage::Prompt);
        assert!(card.reveal(0));
    }

    #[test]
    fn test_play_music_once() {
        let mut card = controller();
        card.play_music();
        card.play_music();
        assert!(!card.view().overlay_visible);
        assert_eq!(card.drain_events(), vec![CardEvent::PlayMusic]);
    }

    #[test]
    fn test_same_seed_same_hearts() {
        let a = controller();
        let b = controller();
        assert_eq!(a.hearts(), b.hearts());
    }
}
