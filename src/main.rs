//! Valentine Card entry point
//!
//! In the browser this mounts the card. Natively it walks through the
//! No-button layout rules and prints what the card would do.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_card {
    use valentine_card::CardConfig;
    use valentine_card::platform::mount_card;

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Valentine card starting...");

        let config = CardConfig::load();
        let seed = js_sys::Date::now() as u64;
        mount_card(config, seed);

        // Hide loading indicator
        if let Some(loading) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("loading"))
        {
            let _ = loading.set_attribute("class", "hidden");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_card::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Valentine card (native) starting...");
    log::info!("The card itself runs in the browser - use `trunk serve` for the web version");

    walkthrough();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn walkthrough() {
    use glam::Vec2;
    use valentine_card::{CardController, CardEvent, CardStage, ConfettiBurst, Rect, Viewport};

    let mut card = CardController::new(14, ConfettiBurst::default());
    let decline = Rect::new(0.0, 0.0, 100.0, 44.0);

    println!("\nDesktop 1200x800, Yes button right edge at 600:");
    card.on_layout(
        Some(Rect::from_edges(500.0, 300.0, 600.0, 344.0)),
        Some(decline),
        Viewport::new(1200.0, 800.0),
    );
    if let Some(pos) = card.view().decline {
        println!("  No button at ({}, {})", pos.left, pos.top);
    }

    println!("\nPhone 400x700, Yes button right edge at 250:");
    card.on_layout(
        Some(Rect::from_edges(150.0, 400.0, 250.0, 444.0)),
        Some(decline),
        Viewport::new(400.0, 700.0),
    );
    if let Some(pos) = card.view().decline {
        println!("  No button at ({}, {}) - dropped below", pos.left, pos.top);
    }

    println!("\nPointer hovers the No button three times:");
    for _ in 0..3 {
        card.on_decline_hover(Some(decline), Viewport::new(1200.0, 800.0));
        if let Some(pos) = card.view().decline {
            println!("  dodged to ({:.0}, {:.0})", pos.left, pos.top);
        }
    }

    let near = Rect::new(500.0, 300.0, 100.0, 40.0);
    card.on_pointer_move(Vec2::new(600.0, 320.0), Some(near));
    println!("\nPointer 50px away -> near: {}", card.view().pointer_near);
    card.on_pointer_move(Vec2::new(700.0, 320.0), Some(near));
    println!("Pointer 150px away -> near: {}", card.view().pointer_near);
    card.drain_events();

    println!("\nYes clicked:");
    card.accept();
    for event in card.drain_events() {
        match event {
            CardEvent::Burst(b) => println!(
                "  confetti: {} particles, {} deg spread, origin y {}",
                b.particle_count, b.spread, b.origin.y
            ),
            CardEvent::RevealScheduled { token, delay_ms } => {
                println!("  stage {:?} for {}ms...", card.stage(), delay_ms);
                card.reveal(token);
            }
            other => println!("  {:?}", other),
        }
    }
    assert_eq!(card.stage(), CardStage::Celebration);
    println!("  stage {:?}", card.stage());
}
