//! Firework animation for the end screen.

/// Frames each firework sprite stays on screen.
const FRAMES_PER_SPRITE: u32 = 10;
/// Sprites in one burst.
const SPRITES: u32 = 6;
/// The counter wraps once it passes this value, leaving a dark pause.
const CYCLE_END: u32 = 100;

/// End-screen firework burst, looping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fireworks {
    frame: u32,
}

impl Fireworks {
    /// A burst starting at its first sprite.
    pub fn new() -> Self {
        Self::default()
    }

    /// 1-based sprite to show this frame, or `None` during the pause.
    pub fn sprite(&self) -> Option<u32> {
        let idx = self.frame / FRAMES_PER_SPRITE;
        (idx < SPRITES).then_some(idx + 1)
    }

    /// Raw frame counter, 0..=100.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Advances one frame.
    pub fn update(&mut self) {
        self.frame += 1;
        if self.frame > CYCLE_END {
            self.frame = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprites_over(frames: usize) -> Vec<Option<u32>> {
        let mut fireworks = Fireworks::new();
        (0..frames)
            .map(|_| {
                let sprite = fireworks.sprite();
                fireworks.update();
                sprite
            })
            .collect()
    }

    #[test]
    fn shows_each_sprite_for_ten_frames() {
        let seq = sprites_over(60);
        assert!(seq[..10].iter().all(|s| *s == Some(1)));
        assert!(seq[10..20].iter().all(|s| *s == Some(2)));
        assert!(seq[50..60].iter().all(|s| *s == Some(6)));
    }

    #[test]
    fn pauses_then_repeats() {
        let seq = sprites_over(110);
        assert!(seq[60..101].iter().all(Option::is_none));
        assert_eq!(seq[101], Some(1));
    }

    #[test]
    fn counter_wraps_after_one_hundred() {
        let mut fireworks = Fireworks::new();
        for _ in 0..100 {
            fireworks.update();
        }
        assert_eq!(fireworks.frame(), 100);
        fireworks.update();
        assert_eq!(fireworks.frame(), 0);
    }
}
