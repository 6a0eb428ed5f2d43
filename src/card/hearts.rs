//! Floating background hearts
//!
//! Generated once at mount and never touched again; the CSS `float-up`
//! animation does all the moving.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One decorative heart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Heart {
    pub id: usize,
    /// Width and height (px)
    pub size: f32,
    /// Horizontal start, percent of the container width
    pub left_pct: f32,
    /// Animation duration (s)
    pub duration: f32,
    /// Animation delay (s)
    pub delay: f32,
}

impl Heart {
    pub fn random<R: Rng>(id: usize, rng: &mut R) -> Self {
        Self {
            id,
            size: HEART_MIN_SIZE + rng.random::<f32>() * (HEART_MAX_SIZE - HEART_MIN_SIZE),
            left_pct: rng.random::<f32>() * 100.0,
            duration: HEART_MIN_DURATION
                + rng.random::<f32>() * (HEART_MAX_DURATION - HEART_MIN_DURATION),
            delay: rng.random::<f32>() * HEART_MAX_DELAY,
        }
    }

    /// Inline style for the heart's wrapper element
    pub fn style(&self) -> String {
        format!(
            "left: {}%; bottom: -{}px; width: {}px; height: {}px; \
             animation-duration: {}s; animation-delay: {}s;",
            self.left_pct, HEART_START_OFFSET, self.size, self.size, self.duration, self.delay
        )
    }
}

/// Generate `count` hearts
pub fn generate_hearts<R: Rng>(count: usize, rng: &mut R) -> Vec<Heart> {
    (0..count).map(|id| Heart::random(id, rng)).collect()
}

/// Heart artwork, shared by every heart element
pub const HEART_SVG: &str = r##"<svg viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg"><path d="M16,8.064c-2.974-2.753-7.796-2.753-10.77,0s-2.974,7.215,0,9.968L16,28l10.77-9.968 c2.974-2.753,2.974-7.215,0-9.968S18.974,5.312,16,8.064z" fill="#B83B5E"/><path d="M7.23,17.032c-2.974-2.753-2.974-7.215,0-9.968c0.257-0.237,0.531-0.447,0.813-0.643 C7.017,6.761,6.052,7.304,5.23,8.064c-2.974,2.753-2.974,7.215,0,9.968L16,28l1.54-1.426L7.23,17.032z" fill="#8A2C47"/><path d="M26.77,8.064c-2.974-2.753-7.796-2.753-10.77,0c-2.974-2.753-7.796-2.753-10.77,0 c-0.91,0.843-1.539,1.846-1.892,2.911C6.342,8.317,12.06,8.343,15,11.064c2.974-2.753,6.796-2.753,9.77,0 c2.069,1.915,2.694,4.656,1.885,7.074l0.115-0.106C29.743,15.28,29.743,10.817,26.77,8.064z" fill="#C6627E"/><path d="M16,8.064c-2.974-2.753-7.796-2.753-10.77,0s-2.974,7.215,0,9.968L16,28l10.77-9.968c2.974-2.753,2.974-7.215,0-9.968 S18.974,5.312,16,8.064z" fill="none" stroke="#8A2C47" stroke-linecap="round" stroke-linejoin="round" stroke-miterlimit="10" stroke-width="2"/><path d="M22,10.044c0.784,0.113,1.497,0.443,2.052,0.956C24.663,11.565,25,12.293,25,13.048" fill="none" stroke="#FFFFFF" stroke-linecap="round" stroke-linejoin="round" stroke-miterlimit="10" stroke-width="2"/></svg>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_generate_hearts_ranges() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let hearts = generate_hearts(HEART_COUNT, &mut rng);
        assert_eq!(hearts.len(), 15);

        for (i, h) in hearts.iter().enumerate() {
            assert_eq!(h.id, i);
            assert!((15.0..=45.0).contains(&h.size), "{h:?}");
            assert!((0.0..=100.0).contains(&h.left_pct), "{h:?}");
            assert!((2.0..=6.0).contains(&h.duration), "{h:?}");
            assert!((0.0..=2.0).contains(&h.delay), "{h:?}");
        }
    }

    #[test]
    fn test_hearts_not_all_identical() {
        let mut rng = Pcg32::seed_from_u64(1);
        let hearts = generate_hearts(HEART_COUNT, &mut rng);
        assert!(hearts.iter().any(|h| h.size != hearts[0].size));
    }

    #[test]
    fn test_heart_style() {
        let heart = Heart {
            id: 0,
            size: 30.0,
            left_pct: 12.5,
            duration: 4.0,
            delay: 0.5,
        };
        let style = heart.style();
        assert!(style.contains("left: 12.5%"));
        assert!(style.contains("bottom: -50px"));
        assert!(style.contains("width: 30px; height: 30px"));
        assert!(style.contains("animation-duration: 4s"));
        assert!(style.contains("animation-delay: 0.5s"));
    }
}
